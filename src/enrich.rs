//! Podium enrichment for the race schedule.
//!
//! Past races are looked up one by one against the statistics API in small
//! concurrent groups, with a fixed pause between groups. Lookups that fail or
//! come back without results are dropped; everything else lands in a
//! [`PodiumTable`] keyed by `"{season}-{round}"`.
//!
//! All lookups run on the single browser thread. "Concurrent" means the
//! requests of a group are in flight together and joined, nothing more.

use crate::config::{podium_batch_pause, PODIUM_BATCH_SIZE, PODIUM_SIZE};
use crate::error::{ApiError, EnrichError};
use crate::model::{Event, EventDetail, EventKey, ResultEntry};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use log::{debug, info};
use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

/// Podium (top three finishers) per past race, keyed by `"{season}-{round}"`.
pub type PodiumTable = BTreeMap<String, Vec<ResultEntry>>;

/// Outcome of a single detail lookup.
pub type DetailOutcome = Result<Option<EventDetail>, ApiError>;

/// Where race details come from.
#[allow(async_fn_in_trait)]
pub trait DetailSource {
    /// `Ok(None)` when the race exists but has no published detail.
    async fn event_detail(&self, key: EventKey) -> DetailOutcome;
}

/// Suspends the current task between request groups.
#[allow(async_fn_in_trait)]
pub trait Sleeper {
    async fn sleep(&self, pause: Duration);
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Browser timer backed sleeper.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerSleeper;

impl Sleeper for TimerSleeper {
    async fn sleep(&self, pause: Duration) {
        gloo_timers::future::sleep(pause).await;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed-window request throttle: at most `batch_size` lookups in flight,
/// then a fixed `pause` before the next group. It does not adapt to failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    batch_size: usize,
    pause: Duration,
}

impl Throttle {
    pub fn new(batch_size: usize, pause: Duration) -> Self {
        Self {
            batch_size: batch_size.max(1),
            pause,
        }
    }

    /// Three lookups per group, 100 ms between groups.
    pub fn podium_default() -> Self {
        Self::new(PODIUM_BATCH_SIZE, podium_batch_pause())
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Number of groups needed for `lookups` requests.
    pub fn group_count(&self, lookups: usize) -> usize {
        lookups.div_ceil(self.batch_size)
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::podium_default()
    }
}

/// Shared flag that tells an in-progress enrichment to stop publishing.
///
/// Requests already in flight are left to finish; their results are dropped.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Rc<Cell<bool>>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }

    fn check(&self) -> Result<(), EnrichError> {
        if self.is_cancelled() {
            info!("Podium enrichment cancelled");
            Err(EnrichError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Split `events` into (past, remainder), keeping input order in both.
pub fn partition_past(events: &[Event], now: DateTime<Utc>) -> (Vec<&Event>, Vec<&Event>) {
    events.iter().partition(|e| e.is_past(now))
}

/// Order events by date, then by round for events sharing a date. Stable.
pub fn sort_chronologically(events: &mut [&Event]) {
    events.sort_by_key(|e| (e.date, e.round));
}

/// Earliest event that has not started yet.
///
/// Uses the race start time when known, so a race later today still counts
/// as upcoming even though enrichment already treats its date as past.
pub fn next_event(events: &[Event], now: DateTime<Utc>) -> Option<&Event> {
    events
        .iter()
        .filter(|e| e.scheduled_start() >= now)
        .min_by_key(|e| (e.scheduled_start(), e.round))
}

/// Keep a detail only if the lookup succeeded and it carries results.
pub fn with_results(outcome: DetailOutcome) -> Option<EventDetail> {
    match outcome {
        Ok(Some(detail)) if !detail.results.is_empty() => Some(detail),
        _ => None,
    }
}

/// Reduce a lookup outcome to its podium, or drop it.
///
/// Not-found, transport errors and empty result lists are all dropped alike.
pub fn podium_of(outcome: DetailOutcome) -> Option<Vec<ResultEntry>> {
    with_results(outcome).map(|detail| detail.results.into_iter().take(PODIUM_SIZE).collect())
}

/// Runs podium lookups for past events under a [`Throttle`].
pub struct EnrichmentFetcher<S, Z = TimerSleeper, C = SystemClock> {
    source: S,
    sleeper: Z,
    clock: C,
    throttle: Throttle,
}

impl<S: DetailSource> EnrichmentFetcher<S> {
    pub fn new(source: S) -> Self {
        Self::with_parts(source, TimerSleeper, SystemClock, Throttle::podium_default())
    }
}

impl<S, Z, C> EnrichmentFetcher<S, Z, C>
where
    S: DetailSource,
    Z: Sleeper,
    C: Clock,
{
    pub fn with_parts(source: S, sleeper: Z, clock: C, throttle: Throttle) -> Self {
        Self {
            source,
            sleeper,
            clock,
            throttle,
        }
    }

    /// Podiums of every past event in `events`.
    ///
    /// "Now" is read once. Groups run in input order; a pause separates
    /// consecutive groups but none follows the last one. The table is only
    /// returned once every group has finished.
    pub async fn fetch_past_results(
        &self,
        events: &[Event],
        token: &CancellationToken,
    ) -> Result<PodiumTable, EnrichError> {
        token.check()?;
        let now = self.clock.now();
        let (past, _) = partition_past(events, now);
        let mut table = PodiumTable::new();
        if past.is_empty() {
            return Ok(table);
        }

        info!(
            "Fetching podiums for {} past events in {} groups",
            past.len(),
            self.throttle.group_count(past.len())
        );

        for (index, group) in past.chunks(self.throttle.batch_size()).enumerate() {
            if index > 0 {
                debug!("Pausing {:?} before group {}", self.throttle.pause(), index + 1);
                self.sleeper.sleep(self.throttle.pause()).await;
            }
            token.check()?;

            let outcomes = join_all(group.iter().map(|e| self.source.event_detail(e.key()))).await;
            for (event, outcome) in group.iter().zip(outcomes) {
                let key = event.key();
                if let Err(e) = &outcome {
                    debug!("Lookup for {key} failed: {e}");
                }
                match podium_of(outcome) {
                    Some(podium) => {
                        table.insert(key.to_string(), podium);
                    }
                    None => debug!("No podium for {key}, skipping"),
                }
            }
        }

        token.check()?;
        info!("Podium enrichment produced {} entries", table.len());
        Ok(table)
    }

    /// Full detail of the most recent past event, if it has results.
    ///
    /// Past events are sorted by (date, round) before picking the last one,
    /// so the input order does not matter.
    pub async fn fetch_most_recent_result(
        &self,
        events: &[Event],
        token: &CancellationToken,
    ) -> Result<Option<EventDetail>, EnrichError> {
        token.check()?;
        let now = self.clock.now();
        let (mut past, _) = partition_past(events, now);
        sort_chronologically(&mut past);
        let Some(latest) = past.last() else {
            return Ok(None);
        };

        debug!("Fetching most recent race {}", latest.key());
        let outcome = self.source.event_detail(latest.key()).await;
        token.check()?;
        Ok(with_results(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorKind;
    use crate::model::{Constructor, Driver};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(position: u32) -> ResultEntry {
        ResultEntry {
            number: None,
            position,
            points: 0.0,
            driver: Driver {
                driver_id: format!("driver{position}"),
                ..Driver::default()
            },
            constructor: Constructor::default(),
            grid: None,
            laps: None,
            status: None,
            time: None,
        }
    }

    fn detail(results: usize) -> EventDetail {
        EventDetail {
            season: 2020,
            round: 1,
            race_name: String::new(),
            circuit: None,
            date: date(2020, 1, 1),
            time: None,
            results: (1..=results as u32).map(entry).collect(),
        }
    }

    #[test]
    fn podium_is_top_three() {
        let podium = podium_of(Ok(Some(detail(20)))).unwrap();
        let positions: Vec<u32> = podium.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn podium_keeps_short_result_lists() {
        assert_eq!(podium_of(Ok(Some(detail(2)))).unwrap().len(), 2);
    }

    #[test]
    fn podium_drops_failures_and_empty_results() {
        assert!(podium_of(Ok(Some(detail(0)))).is_none());
        assert!(podium_of(Ok(None)).is_none());
        let err = ApiError::new(ApiErrorKind::Transport, None, "offline");
        assert!(podium_of(Err(err)).is_none());
    }

    #[test]
    fn with_results_keeps_whole_detail() {
        assert_eq!(with_results(Ok(Some(detail(20)))).unwrap().results.len(), 20);
    }

    #[test]
    fn throttle_groups() {
        let throttle = Throttle::podium_default();
        assert_eq!(throttle.batch_size(), 3);
        assert_eq!(throttle.pause(), Duration::from_millis(100));
        assert_eq!(throttle.group_count(0), 0);
        assert_eq!(throttle.group_count(3), 1);
        assert_eq!(throttle.group_count(7), 3);
        assert_eq!(Throttle::new(0, Duration::ZERO).batch_size(), 1);
    }

    #[test]
    fn partition_keeps_order() {
        let events = vec![
            Event::new(2020, 2, date(2020, 2, 1)),
            Event::new(2099, 1, date(2099, 1, 1)),
            Event::new(2020, 1, date(2020, 1, 1)),
        ];
        let now = date(2021, 1, 1).and_time(chrono::NaiveTime::MIN).and_utc();
        let (past, rest) = partition_past(&events, now);
        let rounds: Vec<u32> = past.iter().map(|e| e.round).collect();
        assert_eq!(rounds, vec![2, 1]);
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn chronological_sort_breaks_ties_by_round() {
        let a = Event::new(2020, 5, date(2020, 3, 1));
        let b = Event::new(2020, 4, date(2020, 3, 1));
        let c = Event::new(2020, 1, date(2020, 1, 1));
        let mut events = vec![&a, &b, &c];
        sort_chronologically(&mut events);
        let rounds: Vec<u32> = events.iter().map(|e| e.round).collect();
        assert_eq!(rounds, vec![1, 4, 5]);
    }

    #[test]
    fn next_event_is_earliest_upcoming() {
        let events = vec![
            Event::new(2099, 3, date(2099, 5, 1)),
            Event::new(2020, 1, date(2020, 1, 1)),
            Event::new(2099, 2, date(2099, 4, 1)),
        ];
        let now = date(2021, 1, 1).and_time(chrono::NaiveTime::MIN).and_utc();
        assert_eq!(next_event(&events, now).map(|e| e.round), Some(2));
        assert!(next_event(&events[1..2], now).is_none());
    }

    #[test]
    fn race_later_today_is_next() {
        let mut today = Event::new(2025, 6, date(2025, 4, 13));
        today.time = Some("15:00:00Z".to_string());
        let events = vec![
            Event::new(2025, 5, date(2025, 4, 6)),
            today,
            Event::new(2025, 7, date(2025, 4, 20)),
        ];
        let morning = date(2025, 4, 13).and_hms_opt(9, 0, 0).unwrap().and_utc();
        assert_eq!(next_event(&events, morning).map(|e| e.round), Some(6));

        let evening = date(2025, 4, 13).and_hms_opt(18, 0, 0).unwrap().and_utc();
        assert_eq!(next_event(&events, evening).map(|e| e.round), Some(7));
    }

    #[test]
    fn token_is_shared_between_clones() {
        let token = CancellationToken::new();
        let handle = token.clone();
        assert!(!token.is_cancelled());
        handle.cancel();
        assert!(token.is_cancelled());
    }
}
