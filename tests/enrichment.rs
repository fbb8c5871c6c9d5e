// Podium enrichment against scripted detail sources.
//
// Every test drives the fetcher on a local executor with a fixed clock and a
// sleeper that only records pauses, so the call/pause interleaving can be
// asserted exactly.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use f1_dashboard::enrich::{
    CancellationToken, Clock, DetailOutcome, DetailSource, EnrichmentFetcher, Sleeper, Throttle,
};
use f1_dashboard::error::{ApiError, ApiErrorKind, EnrichError};
use f1_dashboard::model::{Constructor, Driver, Event, EventDetail, EventKey, ResultEntry};
use futures::executor::block_on;
use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
enum Step {
    Start(EventKey),
    Finish(EventKey),
    Pause(Duration),
}

type Log = Rc<RefCell<Vec<Step>>>;

#[derive(Clone)]
enum Reply {
    Results(usize),
    Missing,
    Fail,
}

/// Serves canned replies; unknown keys answer with a full podium.
struct ScriptedSource {
    replies: HashMap<EventKey, Reply>,
    log: Log,
    cancel_after_calls: Option<(usize, CancellationToken)>,
}

impl ScriptedSource {
    fn new(log: &Log) -> Self {
        Self {
            replies: HashMap::new(),
            log: log.clone(),
            cancel_after_calls: None,
        }
    }

    fn reply(mut self, season: u32, round: u32, reply: Reply) -> Self {
        self.replies.insert(EventKey { season, round }, reply);
        self
    }

    fn calls(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|s| matches!(s, Step::Start(_)))
            .count()
    }
}

/// Returns `Pending` once so sibling lookups of a group interleave.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

impl DetailSource for ScriptedSource {
    async fn event_detail(&self, key: EventKey) -> DetailOutcome {
        self.log.borrow_mut().push(Step::Start(key));
        if let Some((limit, token)) = &self.cancel_after_calls {
            if self.calls() >= *limit {
                token.cancel();
            }
        }
        YieldOnce(false).await;
        self.log.borrow_mut().push(Step::Finish(key));
        match self.replies.get(&key).cloned().unwrap_or(Reply::Results(20)) {
            Reply::Results(n) => Ok(Some(detail(key, n))),
            Reply::Missing => Ok(None),
            Reply::Fail => Err(ApiError::new(ApiErrorKind::Transport, None, "connection reset")),
        }
    }
}

struct RecordingSleeper {
    log: Log,
}

impl Sleeper for RecordingSleeper {
    async fn sleep(&self, pause: Duration) {
        self.log.borrow_mut().push(Step::Pause(pause));
    }
}

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> DateTime<Utc> {
    day(2025, 6, 1).and_time(NaiveTime::MIN).and_utc()
}

fn entry(position: u32) -> ResultEntry {
    ResultEntry {
        number: None,
        position,
        points: 0.0,
        driver: Driver {
            driver_id: format!("p{position}"),
            ..Driver::default()
        },
        constructor: Constructor::default(),
        grid: None,
        laps: None,
        status: None,
        time: None,
    }
}

fn detail(key: EventKey, results: usize) -> EventDetail {
    EventDetail {
        season: key.season,
        round: key.round,
        race_name: format!("Race {key}"),
        circuit: None,
        date: day(2020, 1, 1),
        time: None,
        results: (1..=results as u32).map(entry).collect(),
    }
}

fn fetcher(
    source: ScriptedSource,
    log: &Log,
) -> EnrichmentFetcher<ScriptedSource, RecordingSleeper, FixedClock> {
    EnrichmentFetcher::with_parts(
        source,
        RecordingSleeper { log: log.clone() },
        FixedClock(today()),
        Throttle::podium_default(),
    )
}

fn past_rounds(n: u32) -> Vec<Event> {
    (1..=n)
        .map(|r| Event::new(2025, r, day(2025, 1, r)))
        .collect()
}

fn pauses(log: &Log) -> usize {
    log.borrow()
        .iter()
        .filter(|s| matches!(s, Step::Pause(_)))
        .count()
}

#[test]
fn only_past_events_are_keyed() {
    let log = Log::default();
    let events = vec![
        Event::new(2020, 1, day(2020, 1, 1)),
        Event::new(2099, 2, day(2099, 1, 1)),
    ];
    let f = fetcher(ScriptedSource::new(&log).reply(2020, 1, Reply::Results(3)), &log);

    let table = block_on(f.fetch_past_results(&events, &CancellationToken::new())).unwrap();

    assert_eq!(table.keys().collect::<Vec<_>>(), vec!["2020-1"]);
    assert_eq!(table["2020-1"].len(), 3);
    assert!(!log
        .borrow()
        .contains(&Step::Start(EventKey { season: 2099, round: 2 })));
}

#[test]
fn failed_lookup_yields_empty_table() {
    let log = Log::default();
    let events = vec![Event::new(2020, 1, day(2020, 1, 1))];
    let f = fetcher(ScriptedSource::new(&log).reply(2020, 1, Reply::Fail), &log);

    let table = block_on(f.fetch_past_results(&events, &CancellationToken::new())).unwrap();

    assert!(table.is_empty());
}

#[test]
fn empty_input_makes_no_calls() {
    let log = Log::default();
    let f = fetcher(ScriptedSource::new(&log), &log);
    let token = CancellationToken::new();

    assert!(block_on(f.fetch_past_results(&[], &token)).unwrap().is_empty());
    assert_eq!(block_on(f.fetch_most_recent_result(&[], &token)).unwrap(), None);
    assert!(log.borrow().is_empty());
}

#[test]
fn seven_events_run_in_three_groups_with_two_pauses() {
    let log = Log::default();
    let events = past_rounds(7);
    let f = fetcher(ScriptedSource::new(&log), &log);

    let table = block_on(f.fetch_past_results(&events, &CancellationToken::new())).unwrap();

    assert_eq!(table.len(), 7);
    assert_eq!(pauses(&log), 2);

    // Each group starts all its lookups before any of them finishes, and a
    // pause separates groups.
    let shape: Vec<char> = log
        .borrow()
        .iter()
        .map(|s| match s {
            Step::Start(_) => 's',
            Step::Finish(_) => 'f',
            Step::Pause(_) => '|',
        })
        .collect();
    assert_eq!(shape.iter().collect::<String>(), "sssfff|sssfff|sf");
}

#[test]
fn podiums_are_top_three_of_full_results() {
    let log = Log::default();
    let events = past_rounds(1);
    let f = fetcher(ScriptedSource::new(&log).reply(2025, 1, Reply::Results(20)), &log);

    let table = block_on(f.fetch_past_results(&events, &CancellationToken::new())).unwrap();

    let positions: Vec<u32> = table["2025-1"].iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
}

#[test]
fn sibling_and_later_groups_survive_failures() {
    let log = Log::default();
    let events = past_rounds(5);
    let source = ScriptedSource::new(&log)
        .reply(2025, 1, Reply::Fail)
        .reply(2025, 2, Reply::Missing)
        .reply(2025, 4, Reply::Results(0));
    let f = fetcher(source, &log);

    let table = block_on(f.fetch_past_results(&events, &CancellationToken::new())).unwrap();

    assert_eq!(table.keys().collect::<Vec<_>>(), vec!["2025-3", "2025-5"]);
}

#[test]
fn repeated_runs_are_identical() {
    let log = Log::default();
    let events = past_rounds(5);
    let source = ScriptedSource::new(&log).reply(2025, 2, Reply::Fail);
    let f = fetcher(source, &log);
    let token = CancellationToken::new();

    let first = block_on(f.fetch_past_results(&events, &token)).unwrap();
    let second = block_on(f.fetch_past_results(&events, &token)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn cancelled_before_start_makes_no_calls() {
    let log = Log::default();
    let f = fetcher(ScriptedSource::new(&log), &log);
    let token = CancellationToken::new();
    token.cancel();

    let outcome = block_on(f.fetch_past_results(&past_rounds(4), &token));

    assert_eq!(outcome, Err(EnrichError::Cancelled));
    assert!(log.borrow().is_empty());
}

#[test]
fn cancel_mid_run_stops_before_next_group() {
    let log = Log::default();
    let token = CancellationToken::new();
    let mut source = ScriptedSource::new(&log);
    source.cancel_after_calls = Some((2, token.clone()));
    let f = fetcher(source, &log);

    let outcome = block_on(f.fetch_past_results(&past_rounds(7), &token));

    assert_eq!(outcome, Err(EnrichError::Cancelled));
    let started = log
        .borrow()
        .iter()
        .filter(|s| matches!(s, Step::Start(_)))
        .count();
    // The first group was already in flight; nothing after it was issued.
    assert_eq!(started, 3);
}

#[test]
fn most_recent_returns_whole_detail_of_latest_past_event() {
    let log = Log::default();
    let events = vec![
        Event::new(2019, 1, day(2019, 1, 1)),
        Event::new(2020, 1, day(2020, 1, 1)),
        Event::new(2099, 1, day(2099, 1, 1)),
    ];
    let f = fetcher(ScriptedSource::new(&log).reply(2020, 1, Reply::Results(20)), &log);

    let latest = block_on(f.fetch_most_recent_result(&events, &CancellationToken::new()))
        .unwrap()
        .unwrap();

    assert_eq!(latest.key(), EventKey { season: 2020, round: 1 });
    assert_eq!(latest.results.len(), 20);
    assert_eq!(
        *log.borrow(),
        vec![
            Step::Start(EventKey { season: 2020, round: 1 }),
            Step::Finish(EventKey { season: 2020, round: 1 }),
        ]
    );
}

#[test]
fn most_recent_without_results_is_none() {
    for reply in [Reply::Results(0), Reply::Missing, Reply::Fail] {
        let log = Log::default();
        let events = vec![
            Event::new(2019, 1, day(2019, 1, 1)),
            Event::new(2020, 1, day(2020, 1, 1)),
        ];
        let f = fetcher(ScriptedSource::new(&log).reply(2020, 1, reply), &log);

        let latest =
            block_on(f.fetch_most_recent_result(&events, &CancellationToken::new())).unwrap();

        assert_eq!(latest, None);
    }
}

#[test]
fn most_recent_does_not_trust_input_order() {
    let log = Log::default();
    let events = vec![
        Event::new(2025, 3, day(2025, 3, 1)),
        Event::new(2025, 5, day(2025, 4, 1)),
        Event::new(2025, 4, day(2025, 4, 1)),
        Event::new(2025, 1, day(2025, 1, 1)),
    ];
    let f = fetcher(ScriptedSource::new(&log), &log);

    let latest = block_on(f.fetch_most_recent_result(&events, &CancellationToken::new()))
        .unwrap()
        .unwrap();

    // Same date: the higher round counts as more recent.
    assert_eq!(latest.key(), EventKey { season: 2025, round: 5 });
}

proptest! {
    #[test]
    fn future_events_never_keyed(offsets in prop::collection::vec(-400i64..400, 0..25)) {
        let log = Log::default();
        let events: Vec<Event> = offsets
            .iter()
            .enumerate()
            .map(|(i, off)| {
                let date = today().date_naive() + chrono::Duration::days(*off);
                Event::new(2025, i as u32 + 1, date)
            })
            .collect();
        let f = fetcher(ScriptedSource::new(&log), &log);

        let table = block_on(f.fetch_past_results(&events, &CancellationToken::new())).unwrap();

        for event in &events {
            let keyed = table.contains_key(&event.key().to_string());
            prop_assert_eq!(keyed, event.starts_at() < today());
        }
    }

    #[test]
    fn group_and_pause_counts(n in 0u32..30) {
        let log = Log::default();
        let f = fetcher(ScriptedSource::new(&log), &log);

        let table = block_on(f.fetch_past_results(&past_rounds(n), &CancellationToken::new())).unwrap();

        let groups = (n as usize).div_ceil(3);
        prop_assert_eq!(table.len(), n as usize);
        prop_assert_eq!(pauses(&log), groups.saturating_sub(1));
        let fixed_pause = log.borrow().iter().all(|s| match s {
            Step::Pause(d) => *d == Duration::from_millis(100),
            _ => true,
        });
        prop_assert!(fixed_pause);
    }
}
