use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Decorated display labels (emoji + English + Hebrew) for the known
/// SP 800-53 control family titles.
static CATEGORY_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Access Control", "🔑 Access Control (בקרת גישה)"),
        ("Audit and Accountability", "📜 Audit and Accountability (רישום לוגים)"),
        ("Awareness and Training", "🎓 Awareness and Training (מודעות והדרכה)"),
        ("Configuration Management", "⚙ Configuration Management (ניהול תצורה)"),
        ("Contingency Planning", "🚨 Contingency Planning (תכנון מגירה)"),
        (
            "Identification and Authentication",
            "🆔 Identification and Authentication (זיהוי ואימות)",
        ),
        ("Incident Response", "🚔 Incident Response (תגובה לאירועים)"),
        ("Maintenance", "🔧 Maintenance (תחזוקה)"),
        ("Media Protection", "📀 Media Protection (הגנה על מדיה)"),
        ("Personnel Security", "👮 Personnel Security (אבטחת כוח אדם)"),
        (
            "Physical and Environmental Protection",
            "🏢 Physical and Environmental Protection (הגנה פיזית וסביבתית)",
        ),
        ("Planning", "📅 Planning (תכנון)"),
        ("Program Management", "📈 Program Management (ניהול תוכניות)"),
        ("Risk Assessment", "⚖ Risk Assessment (הערכת סיכונים)"),
        (
            "Security Assessment and Authorization",
            "✅ Security Assessment and Authorization (הערכת אבטחה והרשאות)",
        ),
        (
            "System and Communications Protection",
            "📡 System and Communications Protection (הגנת מערכות ותקשורת)",
        ),
        (
            "System and Information Integrity",
            "🔍 System and Information Integrity (שלמות מערכת ומידע)",
        ),
    ])
});

/// Display label resolved for a raw group title.
///
/// Callers that only need the text use [`CategoryLabel::as_str`]; the
/// variant tells them whether the title was in the static table or the
/// label was synthesized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryLabel {
    /// Title found in the static category table.
    Known(&'static str),
    /// Unmapped title; the raw title is embedded verbatim so no category
    /// is ever silently dropped.
    Fallback(String),
}

impl CategoryLabel {
    pub fn as_str(&self) -> &str {
        match self {
            CategoryLabel::Known(label) => label,
            CategoryLabel::Fallback(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, CategoryLabel::Known(_))
    }
}

/// Map a raw group title to its decorated display label. Total: unknown
/// titles get a generated fallback label instead of an error.
pub fn label_for_group(raw_title: &str) -> CategoryLabel {
    match CATEGORY_LABELS.get(raw_title) {
        Some(label) => CategoryLabel::Known(label),
        None => CategoryLabel::Fallback(format!("📌 {raw_title} (לא מוגדר)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_title_resolves_to_decorated_label() {
        let label = label_for_group("Access Control");
        assert!(label.is_known());
        assert_eq!(label.as_str(), "🔑 Access Control (בקרת גישה)");
    }

    #[test]
    fn test_unknown_title_gets_fallback_embedding_raw_title() {
        let label = label_for_group("Quantum Readiness");
        assert!(!label.is_known());
        assert!(label.as_str().contains("Quantum Readiness"));
        assert_eq!(label.as_str(), "📌 Quantum Readiness (לא מוגדר)");
    }

    #[test]
    fn test_every_table_entry_is_non_empty() {
        for (title, label) in CATEGORY_LABELS.iter() {
            assert!(!label.is_empty(), "empty label for {title}");
            assert!(label.contains(title), "label for {title} drops the title");
        }
    }
}
