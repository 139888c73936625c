//! Export command - write the catalog to JSON or CSV

use crate::{
    ChampdexError,
    catalog::{Catalog, CatalogError},
    cli::ExportFormat,
    ui::output::{OutputWriter, StdoutWriter},
};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

type Result<T> = std::result::Result<T, ChampdexError>;

/// Execute the export command
///
/// JSON export is the full catalog document in catalog order; CSV export is
/// one row per champion with id, names, and skin count. Without `--output`
/// the document goes to stdout.
///
/// # Errors
/// Returns an error if serialization fails or the output file cannot be
/// written
pub fn execute(
    catalog: &Catalog,
    format: ExportFormat,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            write_catalog(catalog, format, file)?;
            if !quiet {
                StdoutWriter::new().success(&format!(
                    "Exported {} champions to {}",
                    catalog.len(),
                    path.display()
                ));
            }
        }
        None => write_catalog(catalog, format, io::stdout().lock())?,
    }
    Ok(())
}

fn write_catalog<W: Write>(catalog: &Catalog, format: ExportFormat, writer: W) -> Result<()> {
    match format {
        ExportFormat::Json => write_json(catalog, writer),
        ExportFormat::Csv => write_csv(catalog, writer),
    }
}

fn write_json<W: Write>(catalog: &Catalog, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, catalog).map_err(CatalogError::from)?;
    writeln!(writer)?;
    Ok(())
}

fn write_csv<W: Write>(catalog: &Catalog, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["id", "name", "nickname", "skins"])
        .map_err(csv_error)?;

    for (id, entry) in catalog.iter() {
        csv.write_record([
            id,
            entry.name.as_str(),
            entry.nickname.as_str(),
            entry.skins.len().to_string().as_str(),
        ])
        .map_err(csv_error)?;
    }

    csv.flush()?;
    Ok(())
}

fn csv_error(e: csv::Error) -> ChampdexError {
    ChampdexError::InvalidInput(format!("CSV write failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    #[test]
    fn test_json_export_round_trips() {
        let catalog = sample_catalog();
        let mut buf = Vec::new();
        write_catalog(&catalog, ExportFormat::Json, &mut buf).unwrap();

        let parsed: Catalog = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, catalog);
        assert_eq!(parsed.ids(), catalog.ids());
    }

    #[test]
    fn test_csv_export_has_header_and_rows() {
        let catalog = sample_catalog();
        let mut buf = Vec::new();
        write_catalog(&catalog, ExportFormat::Csv, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), catalog.len() + 1);
        assert_eq!(lines[0], "id,name,nickname,skins");
        assert_eq!(lines[1], "Zed,Zed,the Zed,1");
        assert_eq!(lines[2], "Aatrox,Aatrox,the Aatrox,3");
    }

    #[test]
    fn test_export_to_file_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        execute(&sample_catalog(), ExportFormat::Json, Some(&path), true).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Aatrox"));
    }
}
