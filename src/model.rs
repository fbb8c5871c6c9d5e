//! Data shapes served by the statistics API.
//!
//! The API relays Ergast-style JSON: capitalised nested objects (`Circuit`,
//! `Driver`, `Results`, ...) and numbers that usually arrive as strings.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use log::warn;
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Numeric fields arrive as `"12"` from the live API and as `12` from some mocks.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(u64),
    Float(f64),
    Text(String),
}

fn de_u32<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    use serde::de::Error;
    match Loose::deserialize(d)? {
        Loose::Int(n) => u32::try_from(n).map_err(D::Error::custom),
        Loose::Float(f) if f >= 0.0 && f.fract() == 0.0 => Ok(f as u32),
        Loose::Float(f) => Err(D::Error::custom(format!("expected an integer, got {f}"))),
        Loose::Text(s) => s.trim().parse().map_err(D::Error::custom),
    }
}

fn de_f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    use serde::de::Error;
    match Loose::deserialize(d)? {
        Loose::Int(n) => Ok(n as f64),
        Loose::Float(f) => Ok(f),
        Loose::Text(s) => s.trim().parse().map_err(D::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub long: Option<String>,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    #[serde(default)]
    pub circuit_id: String,
    #[serde(default)]
    pub circuit_name: String,
    #[serde(rename = "Location", default)]
    pub location: Option<Location>,
}

impl Circuit {
    /// "Melbourne, Australia"
    pub fn place(&self) -> String {
        match &self.location {
            Some(loc) => format!("{}, {}", loc.locality, loc.country),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventKey {
    pub season: u32,
    pub round: u32,
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.season, self.round)
    }
}

/// One scheduled race of a season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "de_u32")]
    pub season: u32,
    #[serde(deserialize_with = "de_u32")]
    pub round: u32,
    #[serde(default)]
    pub race_name: String,
    #[serde(rename = "Circuit", default)]
    pub circuit: Option<Circuit>,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
}

impl Event {
    pub fn new(season: u32, round: u32, date: NaiveDate) -> Self {
        Self {
            season,
            round,
            race_name: String::new(),
            circuit: None,
            date,
            time: None,
        }
    }

    pub fn key(&self) -> EventKey {
        EventKey {
            season: self.season,
            round: self.round,
        }
    }

    /// Midnight UTC of the race day; the instant used to decide "past".
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.date.and_time(NaiveTime::MIN).and_utc()
    }

    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.starts_at() < now
    }

    /// Lights-out instant when `time` is given (`"13:00:00Z"`), otherwise
    /// midnight UTC of the race day.
    pub fn scheduled_start(&self) -> DateTime<Utc> {
        self.time
            .as_deref()
            .and_then(|t| NaiveTime::parse_from_str(t.trim_end_matches('Z'), "%H:%M:%S").ok())
            .map(|t| self.date.and_time(t).and_utc())
            .unwrap_or_else(|| self.starts_at())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub driver_id: String,
    #[serde(default)]
    pub permanent_number: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

impl Driver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    pub constructor_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceTime {
    #[serde(default)]
    pub millis: Option<String>,
    pub time: String,
}

/// One classified finisher of a race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(deserialize_with = "de_u32")]
    pub position: u32,
    #[serde(default, deserialize_with = "de_f64")]
    pub points: f64,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructor", default)]
    pub constructor: Constructor,
    #[serde(default)]
    pub grid: Option<String>,
    #[serde(default)]
    pub laps: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "Time", default)]
    pub time: Option<RaceTime>,
}

/// Full result record of one race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    #[serde(deserialize_with = "de_u32")]
    pub season: u32,
    #[serde(deserialize_with = "de_u32")]
    pub round: u32,
    #[serde(default)]
    pub race_name: String,
    #[serde(rename = "Circuit", default)]
    pub circuit: Option<Circuit>,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(rename = "Results", default)]
    pub results: Vec<ResultEntry>,
}

impl EventDetail {
    pub fn key(&self) -> EventKey {
        EventKey {
            season: self.season,
            round: self.round,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverStanding {
    #[serde(deserialize_with = "de_u32")]
    pub position: u32,
    #[serde(default, deserialize_with = "de_f64")]
    pub points: f64,
    #[serde(default, deserialize_with = "de_u32")]
    pub wins: u32,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructors", default)]
    pub constructors: Vec<Constructor>,
}

impl DriverStanding {
    pub fn team_name(&self) -> &str {
        self.constructors
            .first()
            .map(|c| c.name.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorStanding {
    #[serde(deserialize_with = "de_u32")]
    pub position: u32,
    #[serde(default, deserialize_with = "de_f64")]
    pub points: f64,
    #[serde(default, deserialize_with = "de_u32")]
    pub wins: u32,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
}

/// Career totals for one driver, as computed by the API backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DriverCareerStats {
    pub driver_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub total_wins: u32,
    #[serde(default)]
    pub total_podiums: u32,
    #[serde(default)]
    pub total_races: u32,
    #[serde(default)]
    pub total_poles: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub redis: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Read a standings list from either a bare array or a full `MRData` envelope.
pub fn normalize_standings<T: DeserializeOwned>(
    value: Value,
    list_key: &str,
) -> Result<Vec<T>, serde_json::Error> {
    let list = if value.is_array() {
        value
    } else {
        value
            .pointer(&format!("/MRData/StandingsTable/StandingsLists/0/{list_key}"))
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()))
    };
    serde_json::from_value(list)
}

/// Payloads that are expected to be arrays; anything else is treated as empty.
///
/// Elements are decoded one by one and malformed ones are skipped, so a single
/// bad row does not hide the rest of the list.
pub fn array_or_empty<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(row) => Some(row),
            Err(e) => {
                warn!("Skipping malformed entry #{index}: {e}");
                None
            }
        })
        .collect()
}
