//! Browse application - terminal lifecycle and event loop
//!
//! Owns both controllers and the signal bus. Each input event maps to a
//! [`BrowseAction`], the action is applied to the owning controller, and
//! the bus drains in the same turn so selection, data request, and panel
//! update land within one frame. Rendering measures geometry and writes
//! it back into the controllers and the mouse hit areas.

use crate::catalog::Catalog;
use crate::panel::PanelController;
use crate::search::SearchController;
use crate::signals::{SignalBus, dispatch_all};
use crate::ui::error::Result;
use crate::ui::output::{OutputWriter, StatusBarWriter};
use crate::ui::ratatui_adapter::artwork::{ArtworkLoader, ImageProtocol};
use crate::ui::ratatui_adapter::events::{BrowseAction, HitAreas, map_key, map_mouse};
use crate::ui::ratatui_adapter::theme::Theme;
use crate::ui::ratatui_adapter::widgets::{
    CARD_HEIGHT, CARD_WIDTH, CardGrid, DetailPanel, HelpBar, PanelLayout, ResultsList, SearchBar,
    SplashState, StatusBar,
};
use arboard::Clipboard;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::{Frame, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "artwork")]
use crate::ui::ratatui_adapter::artwork::decode_artwork;
#[cfg(feature = "artwork")]
use ratatui_image::{StatefulImage, picker::Picker, protocol::StatefulProtocol};

/// How long to block waiting for input before the next tick
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Most dropdown rows shown at once
const RESULTS_MAX_ROWS: usize = 8;

/// Options carried from the CLI into the browse session
#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    /// Query to pre-fill the search box with
    pub initial_query: Option<String>,
    /// Whether splash artwork should be fetched and rendered
    pub artwork: bool,
}

/// The interactive browse session
pub struct BrowseApp {
    search: SearchController,
    panel: PanelController,
    bus: SignalBus,
    theme: Theme,
    status: StatusBarWriter,
    artwork: ArtworkLoader,
    hit: HitAreas,
    clipboard: Option<Clipboard>,
    #[cfg(feature = "artwork")]
    picker: Option<Picker>,
    #[cfg(feature = "artwork")]
    splash_cache: Option<(String, StatefulProtocol)>,
    artwork_enabled: bool,
    should_quit: bool,
}

impl BrowseApp {
    /// Create a session over an already-loaded catalog
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, options: &BrowseOptions) -> Self {
        let mut search = SearchController::new(catalog);
        if let Some(query) = options.initial_query.as_deref() {
            search.on_query_change(query);
        }

        let artwork_enabled =
            cfg!(feature = "artwork") && options.artwork && ImageProtocol::detect().is_supported();

        #[cfg(feature = "artwork")]
        let picker = if artwork_enabled {
            Picker::from_query_stdio().ok()
        } else {
            None
        };

        Self {
            search,
            panel: PanelController::new(),
            bus: SignalBus::new(),
            theme: Theme::dark(),
            status: StatusBarWriter::new(),
            artwork: ArtworkLoader::new(),
            hit: HitAreas::default(),
            clipboard: Clipboard::new().ok(),
            #[cfg(feature = "artwork")]
            picker,
            #[cfg(feature = "artwork")]
            splash_cache: None,
            artwork_enabled,
            should_quit: false,
        }
    }

    /// Apply one action, then drain the signals it produced
    fn apply(&mut self, action: BrowseAction) {
        match action {
            BrowseAction::Quit => self.should_quit = true,
            BrowseAction::Escape => self.escape(),
            BrowseAction::QueryChar(c) => self.search.query_push(c),
            BrowseAction::QueryBackspace => self.search.query_backspace(),
            BrowseAction::QueryDelete => self.search.query_delete(),
            BrowseAction::QueryCursorLeft => self.search.query_cursor_left(),
            BrowseAction::QueryCursorRight => self.search.query_cursor_right(),
            BrowseAction::QueryClear => self.search.query_clear(),
            BrowseAction::MoveActive(delta) => self.search.move_active(delta),
            BrowseAction::ConfirmResult => self.search.confirm_selection(&mut self.bus),
            BrowseAction::HoverResult(index) => self.search.hover_result(index),
            BrowseAction::LeaveResults => self.search.leave_results(),
            BrowseAction::ClickResult(index) => {
                if let Some(id) = self.search.results.get(index).cloned() {
                    self.search.select_by_id(&id, &mut self.bus);
                }
            }
            BrowseAction::ClickCard(index) => {
                if let Some(id) = self.search.catalog().ids().get(index).cloned() {
                    self.search.card_activated(&id, &mut self.bus);
                }
            }
            BrowseAction::ScrollResults(delta) => self.search.scroll_results(delta),
            BrowseAction::ScrollGrid(delta) => self.search.scroll_grid(delta),
            BrowseAction::PageGrid(direction) => {
                let rows = self.search.grid_visible_rows.max(1) as isize;
                self.search.scroll_grid(direction * rows);
            }
            BrowseAction::PrevSkin => self.panel.prev_skin(),
            BrowseAction::NextSkin => self.panel.next_skin(),
            BrowseAction::PrevEntry => self.panel.prev_entry(&mut self.bus),
            BrowseAction::NextEntry => self.panel.next_entry(&mut self.bus),
            BrowseAction::ToggleAbility(slot) => self.panel.toggle_ability(slot),
            BrowseAction::BeginDrag(column) => self.panel.begin_drag(column),
            BrowseAction::EndDrag(column) => self.panel.end_drag(column),
            BrowseAction::ClosePanel => self.panel.close(&mut self.bus),
            BrowseAction::OpenSplash => self.open_splash(),
            BrowseAction::YankName => self.yank_name(),
        }

        dispatch_all(&mut self.bus, &mut [&mut self.search, &mut self.panel]);
        self.request_artwork();
    }

    /// Escape closes the panel first, then clears the query, then quits
    fn escape(&mut self) {
        if self.panel.is_open {
            self.panel.close(&mut self.bus);
        } else if !self.search.query.is_empty() {
            self.search.query_clear();
        } else {
            self.should_quit = true;
        }
    }

    fn yank_name(&mut self) {
        let name = if self.panel.is_open {
            self.panel.entry.as_ref().map(|entry| entry.name.clone())
        } else {
            self.search
                .selected_id
                .as_ref()
                .and_then(|id| self.search.catalog().get(id))
                .map(|entry| entry.name.clone())
        };
        let Some(name) = name else {
            self.status.info("Nothing selected to copy");
            return;
        };

        match self.clipboard.as_mut() {
            Some(clipboard) => match clipboard.set_text(name.clone()) {
                Ok(()) => self.status.success(&format!("Copied {name} to clipboard")),
                Err(e) => self.status.error(&format!("Clipboard write failed: {e}")),
            },
            None => self.status.warning("Clipboard unavailable"),
        }
    }

    fn open_splash(&mut self) {
        if !self.panel.is_open {
            self.status.info("Open an entry first");
            return;
        }
        let Some(skin) = self.panel.current_skin() else {
            self.status.warning("No splash to open");
            return;
        };
        let url = skin.splash.clone();
        if open::that(&url).is_ok() {
            self.status.success("Opened splash in browser");
        } else {
            self.status.error("Failed to open splash");
        }
    }

    /// Queue the current splash plus its neighbors for download
    fn request_artwork(&mut self) {
        if !self.artwork_enabled || !self.panel.is_open {
            return;
        }
        let mut urls: Vec<String> = Vec::new();
        if let Some(skin) = self.panel.current_skin() {
            urls.push(skin.splash.clone());
        }
        for target in self.panel.preload_targets() {
            urls.push(target.to_string());
        }
        for url in urls {
            self.artwork.request(&url);
        }
    }

    /// Surface finished downloads and failures once per loop turn
    fn tick(&mut self) {
        for failure in self.artwork.drain() {
            self.status.error(&failure);
        }
    }

    fn splash_state(&self) -> SplashState {
        if !self.artwork_enabled {
            return SplashState::Disabled;
        }
        let Some(skin) = self.panel.current_skin() else {
            return SplashState::Disabled;
        };

        #[cfg(feature = "artwork")]
        {
            if self.picker.is_none() {
                return SplashState::Disabled;
            }
            if self.artwork.get(&skin.splash).is_some() {
                return SplashState::Ready;
            }
            SplashState::Loading
        }
        #[cfg(not(feature = "artwork"))]
        {
            let _ = skin;
            SplashState::Disabled
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(
            SearchBar::new(&self.search.query, self.search.query_cursor, &self.theme)
                .focused(!self.panel.is_open),
            chunks[0],
        );

        // The grid geometry feeds controller math and mouse hit tests
        let grid_area = chunks[1];
        self.search.grid_columns = (grid_area.width / CARD_WIDTH).max(1) as usize;
        self.search.grid_visible_rows = (grid_area.height / CARD_HEIGHT).max(1) as usize;
        self.search.scroll_grid(0);
        self.hit.grid = Rect::new(
            grid_area.x,
            grid_area.y,
            grid_area.width,
            self.search.grid_visible_rows as u16 * CARD_HEIGHT,
        )
        .intersection(grid_area);
        self.hit.card_width = CARD_WIDTH;
        self.hit.card_height = CARD_HEIGHT;
        self.hit.grid_columns = self.search.grid_columns;
        self.hit.grid_scroll = self.search.grid_scroll;
        frame.render_widget(CardGrid::new(&self.search, &self.theme), grid_area);

        let summary = match self.search.selected_id.as_deref() {
            Some(id) => format!("{id}  |  {} champions", self.search.catalog().len()),
            None => format!("{} champions", self.search.catalog().len()),
        };
        frame.render_widget(
            StatusBar::new(self.status.latest_message(), summary, &self.theme),
            chunks[2],
        );

        let hints = if self.panel.is_open {
            HelpBar::panel_hints()
        } else {
            HelpBar::browse_hints()
        };
        frame.render_widget(HelpBar::new(&hints, &self.theme), chunks[3]);

        if self.search.results_shown() {
            let rows = self.search.results.len().clamp(1, RESULTS_MAX_ROWS) as u16;
            let dropdown = Rect::new(
                area.x + 1,
                chunks[0].bottom(),
                grid_area.width.min(46),
                rows + 2,
            )
            .intersection(area);
            self.search.results_visible = dropdown.height.saturating_sub(2) as usize;
            self.search.scroll_results(0);
            self.hit.results = dropdown.inner(Margin::new(1, 1));
            self.hit.results_scroll = self.search.results_scroll;
            frame.render_widget(ResultsList::new(&self.search, &self.theme), dropdown);
        } else {
            self.hit.results = Rect::default();
        }

        if self.panel.is_open {
            let layout = PanelLayout::compute(&self.panel, area);
            self.panel.indicator_visible = (layout.indicator.width / 2).max(1) as usize;
            self.hit.panel = layout.panel;
            self.hit.carousel = layout.carousel;
            self.hit.skin_left = layout.skin_left;
            self.hit.skin_right = layout.skin_right;
            self.hit.entry_prev = layout.entry_prev;
            self.hit.entry_next = layout.entry_next;
            self.hit.ability_rows = layout.ability_rows.clone();

            let splash_state = self.splash_state();
            frame.render_widget(
                DetailPanel::new(&self.panel, &self.theme).splash(splash_state),
                area,
            );
            #[cfg(feature = "artwork")]
            if splash_state == SplashState::Ready {
                self.render_splash(frame, layout.splash);
            }
        } else {
            self.hit.clear_panel();
        }
    }

    /// Draw the splash image over the rectangle the panel reserved
    ///
    /// The decoded protocol is cached per URL; skin flips re-decode only
    /// when the URL actually changes.
    #[cfg(feature = "artwork")]
    fn render_splash(&mut self, frame: &mut Frame, area: Rect) {
        let Some(picker) = self.picker.as_ref() else {
            return;
        };
        let Some(skin) = self.panel.current_skin() else {
            return;
        };
        let url = skin.splash.clone();

        if self.splash_cache.as_ref().map(|(u, _)| u.as_str()) != Some(url.as_str()) {
            let Some(bytes) = self.artwork.get(&url) else {
                return;
            };
            let Some(protocol) = decode_artwork(&bytes, picker) else {
                return;
            };
            self.splash_cache = Some((url, protocol));
        }
        if let Some((_, protocol)) = self.splash_cache.as_mut() {
            frame.render_stateful_widget(StatefulImage::default(), area, protocol);
        }
    }
}

/// Run the browse TUI until the user quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be initialized or an input or
/// draw operation fails.
pub fn run(catalog: Arc<Catalog>, options: &BrowseOptions) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = BrowseApp::new(catalog, options);
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut BrowseApp,
) -> Result<()> {
    while !app.should_quit {
        app.tick();
        terminal.draw(|frame| app.render(frame))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        // Drain bursts so held keys and wheel scrolling stay responsive
        let mut events_processed = 0;
        loop {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) =
                        map_key(key, app.panel.is_open, app.search.results_shown())
                    {
                        app.apply(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = map_mouse(mouse, &app.hit, app.panel.is_open) {
                        app.apply(action);
                    }
                }
                _ => {}
            }
            events_processed += 1;
            if events_processed >= 100 || !event::poll(Duration::ZERO)? {
                break;
            }
        }
    }
    Ok(())
}
