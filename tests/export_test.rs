use anyhow::Result;
use serde_json::json;
use tempfile::tempdir;

use nist_control_viewer::constants::ALL_CATEGORIES;
use nist_control_viewer::export::{export_csv, CSV_COLUMNS};
use nist_control_viewer::normalize::normalize;
use nist_control_viewer::query::filter_controls;

fn sample_catalog() -> serde_json::Value {
    json!({"catalog": {"groups": [
        {"title": "Access Control", "controls": [
            {
                "id": "ac-2",
                "title": "Account Management",
                "class": "SP800-53",
                "parts": [{"name": "statement", "prose": "Manage accounts. Review accounts."}],
                "params": [{"id": "ac-2_prm_1", "label": "account types"}],
                "links": [{"href": "#ac-5"}]
            },
            {"id": "ac-5", "title": "Separation of Duties", "class": "SP800-53"}
        ]},
        {"title": "Planning", "controls": [
            {"id": "pl-1", "title": "Policy and Procedures", "class": "SP800-53"}
        ]}
    ]}})
}

#[test]
fn test_export_round_trip_preserves_rows_and_order() -> Result<()> {
    let snapshot = normalize(&sample_catalog())?;
    let records = filter_controls(&snapshot.controls, "", ALL_CATEGORIES);

    let dir = tempdir()?;
    let path = dir.path().join("controls.csv");
    export_csv(&path, &records)?;

    let mut reader = csv::Reader::from_path(&path)?;
    assert_eq!(
        reader.headers()?.iter().collect::<Vec<_>>(),
        CSV_COLUMNS.to_vec()
    );

    let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;
    assert_eq!(rows.len(), records.len());

    for (row, record) in rows.iter().zip(&records) {
        assert_eq!(&row[0], record.id.as_str());
        assert_eq!(&row[1], record.title.as_str());
        assert_eq!(&row[2], record.category.as_str());
        assert_eq!(&row[3], record.family.as_str());
        assert_eq!(&row[4], record.description.as_str());
        assert_eq!(&row[5], record.guidance.as_str());
        assert_eq!(&row[6], record.parameters.as_str());
        assert_eq!(&row[7], record.related.as_str());
    }

    // Order is preserved: pl-1 sorts first by numeric suffix.
    assert_eq!(&rows[0][0], "pl-1");
    assert_eq!(&rows[1][0], "ac-2");
    assert_eq!(&rows[2][0], "ac-5");
    Ok(())
}

#[test]
fn test_export_of_filtered_view_only_contains_matches() -> Result<()> {
    let snapshot = normalize(&sample_catalog())?;
    let filtered = filter_controls(&snapshot.controls, "duties", ALL_CATEGORIES);

    let dir = tempdir()?;
    let path = dir.path().join("filtered.csv");
    export_csv(&path, &filtered)?;

    let mut reader = csv::Reader::from_path(&path)?;
    let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "ac-5");
    Ok(())
}

#[test]
fn test_multiline_parameters_survive_csv_round_trip() -> Result<()> {
    let raw = json!({"catalog": {"groups": [
        {"title": "Access Control", "controls": [
            {
                "id": "ac-1",
                "title": "Policy and Procedures",
                "params": [
                    {"id": "ac-1_prm_1", "label": "organization-defined personnel"},
                    {"id": "ac-1_prm_2", "label": "organization-defined frequency"}
                ]
            }
        ]}
    ]}});
    let snapshot = normalize(&raw)?;
    let records = filter_controls(&snapshot.controls, "", ALL_CATEGORIES);

    let dir = tempdir()?;
    let path = dir.path().join("params.csv");
    export_csv(&path, &records)?;

    let mut reader = csv::Reader::from_path(&path)?;
    let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;
    assert_eq!(
        &rows[0][6],
        "ac-1_prm_1: organization-defined personnel\nac-1_prm_2: organization-defined frequency"
    );
    Ok(())
}
