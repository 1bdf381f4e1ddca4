//! Calendar month of a monthly observation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A calendar month, stored as `(year, month)` so the derived ordering is chronological.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Month(pub i32, pub u32);
impl Month {
    pub fn year(self) -> i32 {
        self.0
    }
    pub fn month(self) -> u32 {
        self.1
    }
    pub fn new(month: u32, year: i32) -> Self {
        Self(year, month)
    }

    /// Parses a NASA POWER date key of the form `YYYYMM`.
    ///
    /// Returns `None` for anything that is not exactly six ASCII digits with a month in
    /// `1..=12`. POWER also emits `YYYY13` keys holding the annual value; those are not
    /// months and are rejected here.
    ///
    /// ```
    /// use climate_mirror::Month;
    ///
    /// assert_eq!(Month::from_date_key("200107"), Some(Month::new(7, 2001)));
    /// assert_eq!(Month::from_date_key("200113"), None);
    /// assert_eq!(Month::from_date_key("2001-07"), None);
    /// ```
    pub fn from_date_key(key: &str) -> Option<Self> {
        if key.len() != 6 || !key.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year: i32 = key[..4].parse().ok()?;
        let month: u32 = key[4..].parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self(year, month))
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_ordering_is_chronological() {
        let mut months = vec![Month::new(1, 2001), Month::new(12, 2000), Month::new(2, 2000)];
        months.sort();
        assert_eq!(
            months,
            vec![Month::new(2, 2000), Month::new(12, 2000), Month::new(1, 2001)]
        );
    }

    #[test]
    fn test_from_date_key_rejects_garbage() {
        assert_eq!(Month::from_date_key(""), None);
        assert_eq!(Month::from_date_key("20001"), None);
        assert_eq!(Month::from_date_key("2000001"), None);
        assert_eq!(Month::from_date_key("2000AB"), None);
        assert_eq!(Month::from_date_key("200000"), None);
        assert_eq!(Month::from_date_key("+20001"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::new(3, 2004).to_string(), "2004-03");
    }
}
