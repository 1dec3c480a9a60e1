//! Default values applied when a request or the database leaves a field unset.

/// Countdown target used when no hero settings row exists yet.
pub const DEFAULT_EVENT_DATE: &str = "2025-08-10T06:00:00";

/// Name of the event-settings row seeded on first startup.
pub const DEFAULT_EVENT_NAME: &str = "Media Maratón de Quibdó 2025";

/// Category assigned to events created without one.
pub const DEFAULT_EVENT_CATEGORY: &str = "evento";

/// Media type assigned to gallery items created without one.
pub const DEFAULT_GALLERY_TYPE: &str = "image";

/// Upload categories used by the built-in resource handlers.
pub const CATEGORY_EVENTS: &str = "events";
pub const CATEGORY_GALLERY: &str = "gallery";
pub const CATEGORY_SPONSORS: &str = "sponsors";
pub const CATEGORY_HERO: &str = "hero";

/// Filename prefix for hero background videos.
pub const HERO_FILE_PREFIX: &str = "hero";

/// [`DEFAULT_EVENT_DATE`] as a naive datetime, for the `event_settings` seed row.
pub fn default_event_datetime() -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2025, 8, 10)
        .and_then(|d| d.and_hms_opt(6, 0, 0))
        .expect("valid constant date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_datetime_matches_default_string() {
        let formatted = default_event_datetime().format("%Y-%m-%dT%H:%M:%S").to_string();
        assert_eq!(formatted, DEFAULT_EVENT_DATE);
    }
}
