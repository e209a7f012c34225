//! Common types

use chrono::{Local, NaiveDate};

/// SQLite row id.
pub type EntityId = i64;

/// Current date in the local timezone, used as the default reference date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Display name for a property, falling back to `Property #<id>`.
pub fn property_display_name(id: EntityId, name: Option<&str>) -> String {
    match name {
        Some(n) if !n.trim().is_empty() => n.to_string(),
        _ => format!("Property #{}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_name_falls_back_to_id() {
        assert_eq!(property_display_name(7, None), "Property #7");
        assert_eq!(property_display_name(7, Some("  ")), "Property #7");
        assert_eq!(property_display_name(7, Some("Rose Villa")), "Rose Villa");
    }
}
