use crate::theme::types::Settings;

/// What: Repair settings that parsed but are unusable.
///
/// Details:
/// - An empty table or day-label list falls back to the defaults.
/// - A zero timeout becomes one second.
pub fn normalize(settings: &mut Settings) {
    let defaults = Settings::default();
    if settings.tables.is_empty() {
        settings.tables = defaults.tables;
    }
    if settings.day_labels.is_empty() {
        settings.day_labels = defaults.day_labels;
    }
    if settings.request_timeout_secs == 0 {
        settings.request_timeout_secs = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Empty lists and zero timeout are repaired
    fn normalize_repairs_empty_values() {
        let mut s = Settings {
            tables: Vec::new(),
            day_labels: Vec::new(),
            request_timeout_secs: 0,
            ..Settings::default()
        };
        normalize(&mut s);
        assert_eq!(s.tables, Settings::default().tables);
        assert_eq!(s.day_labels.len(), 6);
        assert_eq!(s.request_timeout_secs, 1);
    }
}
