//! Output of a table conversion.

/// Initial value of [`DateBounds::oldest`]; later than any `YYYYMMDD` date.
pub const OLDEST_DATE_SENTINEL: &str = "99999999";
/// Initial value of [`DateBounds::most_recent`]; earlier than any `YYYYMMDD` date.
pub const MOST_RECENT_DATE_SENTINEL: &str = "00000000";

/// Running minimum and maximum of the date report column.
///
/// Values are compared as strings. This orders dates correctly because
/// every converted date has the same `YYYYMMDD` width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBounds {
    pub oldest: String,
    pub most_recent: String,
}

impl Default for DateBounds {
    fn default() -> Self {
        Self {
            oldest: OLDEST_DATE_SENTINEL.to_string(),
            most_recent: MOST_RECENT_DATE_SENTINEL.to_string(),
        }
    }
}

impl DateBounds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one emitted value into the bounds.
    pub fn observe(&mut self, value: &str) {
        if value < self.oldest.as_str() {
            self.oldest = value.to_string();
        }
        if value > self.most_recent.as_str() {
            self.most_recent = value.to_string();
        }
    }

    /// True while no value has been observed.
    pub fn is_untouched(&self) -> bool {
        self.oldest == OLDEST_DATE_SENTINEL && self.most_recent == MOST_RECENT_DATE_SENTINEL
    }
}

/// Finished fixed-width lines, in input row order, plus the date aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionResult {
    pub lines: Vec<String>,
    pub dates: DateBounds,
}

impl ConversionResult {
    pub fn oldest_date(&self) -> &str {
        &self.dates.oldest
    }

    pub fn most_recent_date(&self) -> &str {
        &self.dates.most_recent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_start_at_sentinels() {
        let bounds = DateBounds::new();
        assert_eq!(bounds.oldest, "99999999");
        assert_eq!(bounds.most_recent, "00000000");
        assert!(bounds.is_untouched());
    }

    #[test]
    fn observe_tracks_min_and_max() {
        let mut bounds = DateBounds::new();
        bounds.observe("20201129");
        bounds.observe("20200620");
        bounds.observe("20210101");
        assert_eq!(bounds.oldest, "20200620");
        assert_eq!(bounds.most_recent, "20210101");
        assert!(!bounds.is_untouched());
    }
}
