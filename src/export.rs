use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::types::ControlRecord;

/// Column order for the exported table, matching the record fields.
pub const CSV_COLUMNS: [&str; 8] = [
    "id",
    "title",
    "category",
    "family",
    "description",
    "guidance",
    "parameters",
    "related",
];

/// Write the given records as a CSV table: header row plus one row per
/// record, in the order given. Callers pass the currently filtered view,
/// so the file reflects what the user sees.
pub fn export_csv<P: AsRef<Path>>(path: P, records: &[&ControlRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.write_record(CSV_COLUMNS)?;
    for record in records {
        writer.write_record([
            record.id.as_str(),
            record.title.as_str(),
            record.category.as_str(),
            record.family.as_str(),
            record.description.as_str(),
            record.guidance.as_str(),
            record.parameters.as_str(),
            record.related.as_str(),
        ])?;
    }
    writer.flush()?;
    info!(
        records = records.len(),
        path = %path.as_ref().display(),
        "exported controls to CSV"
    );
    Ok(())
}
