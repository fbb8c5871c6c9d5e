use crate::api::StatsClient;
use crate::easter_egg::KeySequence;
use crate::enrich::{next_event, CancellationToken, EnrichmentFetcher, PodiumTable};
use crate::error::ApiError;
use crate::i18n::Language;
use crate::model::{Event, EventDetail};
use chrono::Utc;
use log::{debug, warn};
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// State of a one-shot API load.
#[derive(Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }
}

/// Current language plus the callback that flips it, shared through context.
#[derive(Clone, PartialEq)]
pub struct LanguageHandle {
    pub language: Language,
    pub toggle: Callback<()>,
}

/// Language from the nearest provider, French when rendered outside one.
#[hook]
pub fn use_language() -> LanguageHandle {
    use_context::<LanguageHandle>().unwrap_or_else(|| LanguageHandle {
        language: Language::default(),
        toggle: Callback::noop(),
    })
}

/// Run `fetch` once on mount. Results arriving after unmount are dropped.
#[hook]
pub fn use_api<T, F, Fut>(fetch: F) -> Loadable<T>
where
    T: Clone + PartialEq + 'static,
    F: FnOnce(StatsClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(|| Loadable::Loading);
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let token = CancellationToken::new();
            let task_token = token.clone();
            spawn_local(async move {
                let outcome = fetch(StatsClient::from_config()).await;
                if task_token.is_cancelled() {
                    return;
                }
                match outcome {
                    Ok(value) => state.set(Loadable::Ready(value)),
                    Err(e) => {
                        warn!("API request failed: {e}");
                        state.set(Loadable::Failed(e.user_message()));
                    }
                }
            });
            move || token.cancel()
        });
    }
    (*state).clone()
}

/// Schedule plus the podiums of its past races.
///
/// The schedule is published as soon as it arrives; podiums follow once the
/// whole enrichment run has finished. A failed schedule skips enrichment.
#[hook]
pub fn use_schedule_podiums() -> (Loadable<Rc<Vec<Event>>>, Option<Rc<PodiumTable>>) {
    let events = use_state(|| Loadable::Loading);
    let podiums = use_state(|| None::<Rc<PodiumTable>>);
    {
        let events = events.clone();
        let podiums = podiums.clone();
        use_effect_with((), move |_| {
            let token = CancellationToken::new();
            let task_token = token.clone();
            spawn_local(async move {
                let client = StatsClient::from_config();
                let schedule = match client.schedule().await {
                    Ok(schedule) => Rc::new(schedule),
                    Err(e) => {
                        warn!("Schedule request failed: {e}");
                        if !task_token.is_cancelled() {
                            events.set(Loadable::Failed(e.user_message()));
                        }
                        return;
                    }
                };
                if task_token.is_cancelled() {
                    return;
                }
                events.set(Loadable::Ready(schedule.clone()));

                let fetcher = EnrichmentFetcher::new(client);
                match fetcher.fetch_past_results(&schedule, &task_token).await {
                    Ok(table) => podiums.set(Some(Rc::new(table))),
                    Err(e) => debug!("Schedule podiums not published: {e}"),
                }
            });
            move || token.cancel()
        });
    }
    ((*events).clone(), (*podiums).clone())
}

/// Last finished race with results and the next race on the calendar.
#[derive(Clone, PartialEq, Default)]
pub struct RaceSummary {
    pub last: Option<EventDetail>,
    pub next: Option<Event>,
}

#[hook]
pub fn use_race_summary() -> Loadable<RaceSummary> {
    let state = use_state(|| Loadable::Loading);
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let token = CancellationToken::new();
            let task_token = token.clone();
            spawn_local(async move {
                let client = StatsClient::from_config();
                let schedule = match client.schedule().await {
                    Ok(schedule) => schedule,
                    Err(e) => {
                        warn!("Schedule request failed: {e}");
                        if !task_token.is_cancelled() {
                            state.set(Loadable::Failed(e.user_message()));
                        }
                        return;
                    }
                };
                let next = next_event(&schedule, Utc::now()).cloned();
                let fetcher = EnrichmentFetcher::new(client);
                match fetcher.fetch_most_recent_result(&schedule, &task_token).await {
                    Ok(last) => state.set(Loadable::Ready(RaceSummary { last, next })),
                    Err(e) => debug!("Race summary not published: {e}"),
                }
            });
            move || token.cancel()
        });
    }
    (*state).clone()
}

/// Emit `on_complete` every time the Max Code is typed anywhere on the page.
#[hook]
pub fn use_key_sequence(on_complete: Callback<()>) {
    let sequence = use_mut_ref(KeySequence::default);
    use_effect_with((), move |_| {
        let window = gloo_utils::window();
        let listener = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |e: web_sys::KeyboardEvent| {
                if sequence.borrow_mut().push(&e.key()) {
                    on_complete.emit(());
                }
            },
        );
        if window
            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("Could not register keydown listener");
        }
        move || {
            let _ = window
                .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
        }
    });
}
