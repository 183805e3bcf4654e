use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

use crate::categories::label_for_group;
use crate::error::{CatalogError, Result};
use crate::extract::extract_control;
use crate::types::{CatalogSnapshot, RawCatalog};

/// Trailing control number with an optional enhancement number in
/// parentheses: "ac-2" and "ac-2(1)" both match.
static ID_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)(?:\((\d+)\))?$").unwrap()
});

/// Sort key for a control id: (control number, enhancement number).
///
/// Base controls sort before their enhancements ("ac-2" before "ac-2(1)");
/// ids with no numeric tail sort after all numbered controls. Remaining
/// ties are broken on the full id by the caller.
fn id_sort_key(id: &str) -> (u64, u64) {
    match ID_SUFFIX.captures(id.trim()) {
        Some(caps) => {
            let primary = caps[1].parse().unwrap_or(u64::MAX);
            let enhancement = caps
                .get(2)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0);
            (primary, enhancement)
        }
        None => (u64::MAX, u64::MAX),
    }
}

fn compare_ids(a: &str, b: &str) -> Ordering {
    id_sort_key(a).cmp(&id_sort_key(b)).then_with(|| a.cmp(b))
}

/// Flatten the raw catalog into an id-sorted record collection plus the
/// sorted set of distinct category labels.
///
/// The only fatal condition is a document without a `catalog.groups`
/// array; everything below that level degrades to per-field placeholders.
#[instrument(skip(raw))]
pub fn normalize(raw: &RawCatalog) -> Result<CatalogSnapshot> {
    let groups = raw
        .get("catalog")
        .and_then(|catalog| catalog.get("groups"))
        .and_then(Value::as_array)
        .ok_or_else(|| {
            CatalogError::MalformedDocument("document has no catalog.groups array".to_string())
        })?;

    let mut controls = Vec::new();
    for group in groups {
        let group_title = group.get("title").and_then(Value::as_str).unwrap_or("");
        let label = label_for_group(group_title);
        if !label.is_known() {
            debug!(group = group_title, "unmapped group title, using fallback label");
        }

        let group_controls = match group.get("controls").and_then(Value::as_array) {
            Some(group_controls) => group_controls,
            None => continue,
        };
        for control in group_controls {
            controls.push(extract_control(control, label.as_str()));
        }
    }

    controls.sort_by(|a, b| compare_ids(&a.id, &b.id));

    // BTreeSet gives the alphabetical order the category selector wants.
    let categories: BTreeSet<String> = controls
        .iter()
        .map(|record| record.category.clone())
        .collect();

    info!(
        controls = controls.len(),
        categories = categories.len(),
        "normalized catalog"
    );

    Ok(CatalogSnapshot {
        controls,
        categories: categories.into_iter().collect(),
    })
}
