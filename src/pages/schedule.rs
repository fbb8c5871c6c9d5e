use crate::components::{ErrorBanner, Loader, PodiumList};
use crate::hooks::{use_language, use_schedule_podiums};
use crate::i18n::tr;
use crate::utils::format_race_time;
use yew::prelude::*;

/// Season calendar; finished rounds show their podium once enrichment completes.
#[function_component(Schedule)]
pub fn schedule() -> Html {
    let lang = use_language().language;
    let (events, podiums) = use_schedule_podiums();

    if events.is_loading() {
        return html! { <Loader text={tr("loading_schedule", lang).to_string()} /> };
    }
    let error = events.error().map(|e| AttrValue::from(e.to_string()));
    let events = events.ready().cloned().unwrap_or_default();

    html! {
        <div class="card">
            <div class="card-header">
                <h2>{ tr("schedule_title", lang) }</h2>
            </div>
            <ErrorBanner message={error} />
            <ul class="schedule-list">
                { events.iter().map(|event| {
                    let key = event.key().to_string();
                    let podium = podiums.as_ref().and_then(|table| table.get(&key)).cloned();
                    let circuit = event.circuit.clone().unwrap_or_default();
                    html! {
                        <li key={key.clone()} class="schedule-entry">
                            <div class="schedule-main">
                                <div class="race-name">{ format!("R{} • {}", event.round, event.race_name) }</div>
                                <div class="muted">{ format!("{} · {}", circuit.circuit_name, circuit.place()) }</div>
                                if let Some(results) = podium {
                                    <PodiumList {results} />
                                }
                            </div>
                            <div class="race-date">
                                { format!("{} {}", event.date, format_race_time(event.time.as_deref())) }
                            </div>
                        </li>
                    }
                }).collect::<Html>() }
            </ul>
        </div>
    }
}
