//! Sorting and filtering for the driver career statistics table.

use crate::model::DriverCareerStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Wins,
    Poles,
    Podiums,
    Races,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Wins, SortKey::Poles, SortKey::Podiums, SortKey::Races];

    /// Value used in the `<select>` element.
    pub fn value(self) -> &'static str {
        match self {
            SortKey::Wins => "wins",
            SortKey::Poles => "poles",
            SortKey::Podiums => "podiums",
            SortKey::Races => "races",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.value() == value)
    }

    /// Translation key of the column header.
    pub fn label_key(self) -> &'static str {
        self.value()
    }

    pub fn metric(self, stats: &DriverCareerStats) -> u32 {
        match self {
            SortKey::Wins => stats.total_wins,
            SortKey::Poles => stats.total_poles,
            SortKey::Podiums => stats.total_podiums,
            SortKey::Races => stats.total_races,
        }
    }
}

/// Drivers whose `key` metric is at least `min` (when `min > 0`), best first.
///
/// Ties keep their API order.
pub fn sort_and_filter(stats: &[DriverCareerStats], key: SortKey, min: u32) -> Vec<DriverCareerStats> {
    let mut rows: Vec<DriverCareerStats> = stats
        .iter()
        .filter(|s| min == 0 || key.metric(s) >= min)
        .cloned()
        .collect();
    rows.sort_by(|a, b| key.metric(b).cmp(&key.metric(a)));
    rows
}
