use crate::components::{ErrorBanner, Loader, PodiumList};
use crate::hooks::{use_api, use_language, use_race_summary, Loadable, RaceSummary};
use crate::i18n::{tr, Language};
use crate::model::DriverStanding;
use crate::utils::{format_points, format_race_time, medal};
use yew::prelude::*;

/// Dashboard: championship top three, API mode, last and next race.
#[function_component(Home)]
pub fn home() -> Html {
    let lang = use_language().language;
    let standings = use_api(|client| async move { client.driver_standings().await });
    let health = use_api(|client| async move { client.health().await });
    let summary = use_race_summary();

    let error = page_error(&standings, &health, &summary);

    if standings.is_loading() && health.is_loading() && error.is_none() {
        return html! { <Loader text={tr("loading", lang).to_string()} /> };
    }

    let top3: Vec<DriverStanding> = standings
        .ready()
        .map(|rows| rows.iter().take(3).cloned().collect())
        .unwrap_or_default();

    html! {
        <div class="home">
            <ErrorBanner message={error} />
            <section class="card">
                <div class="card-header">
                    <h2>{ tr("top3_drivers", lang) }</h2>
                    if let Some(h) = health.ready() {
                        <span class="health">
                            { format!("{}: ", tr("mode", lang)) }<b>{ h.mode.clone() }</b>
                            if let Some(redis) = &h.redis {
                                { format!(" • Redis: {redis}") }
                            }
                        </span>
                    }
                </div>
                <ul class="top3">
                    { top3.iter().map(|s| html! {
                        <li key={s.driver.driver_id.clone()} class="top3-entry">
                            <span class="medal">{ medal(s.position) }</span>
                            <div>
                                <div class="driver-name">{ s.driver.full_name() }</div>
                                <div class="team-name">{ s.team_name().to_string() }</div>
                            </div>
                            <span class="points">{ format_points(s.points) }</span>
                        </li>
                    }).collect::<Html>() }
                </ul>
            </section>
            { render_race_cards(&summary, lang) }
        </div>
    }
}

/// First failure among the page's loads; a failed schedule counts too.
fn page_error<A, B, C>(
    standings: &Loadable<A>,
    health: &Loadable<B>,
    summary: &Loadable<C>,
) -> Option<AttrValue> {
    standings
        .error()
        .or_else(|| health.error())
        .or_else(|| summary.error())
        .map(|e| AttrValue::from(e.to_string()))
}

fn render_race_cards(summary: &Loadable<RaceSummary>, lang: Language) -> Html {
    let Some(summary) = summary.ready() else {
        return html! {};
    };

    let last = match &summary.last {
        Some(detail) => html! {
            <section class="card last-race">
                <div class="card-header">
                    <h2>{ tr("last_race", lang) }</h2>
                    <span class="race-date">{ detail.date.to_string() }</span>
                </div>
                <div class="race-name">{ detail.race_name.clone() }</div>
                if let Some(circuit) = &detail.circuit {
                    <div class="race-circuit">{ format!("{} · {}", circuit.circuit_name, circuit.place()) }</div>
                }
                <h3>{ tr("podium", lang) }</h3>
                <PodiumList results={detail.results.clone()} />
            </section>
        },
        None => html! {
            <section class="card last-race">
                <h2>{ tr("last_race", lang) }</h2>
                <p class="muted">{ tr("no_results", lang) }</p>
            </section>
        },
    };

    let next = match &summary.next {
        Some(event) => html! {
            <section class="card next-race">
                <div class="card-header">
                    <h2>{ tr("next_race", lang) }</h2>
                    <span class="race-date">
                        { format!("{} {}", event.date, format_race_time(event.time.as_deref())) }
                    </span>
                </div>
                <div class="race-name">{ format!("R{} • {}", event.round, event.race_name) }</div>
                if let Some(circuit) = &event.circuit {
                    <div class="race-circuit">{ format!("{} · {}", circuit.circuit_name, circuit.place()) }</div>
                }
            </section>
        },
        None => html! {},
    };

    html! { <div class="race-cards">{ last }{ next }</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_failure_reaches_banner() {
        let standings = Loadable::Ready(Vec::<DriverStanding>::new());
        let health = Loadable::Ready(());
        let summary = Loadable::<RaceSummary>::Failed("HTTP 502: bad gateway".into());
        assert_eq!(
            page_error(&standings, &health, &summary),
            Some(AttrValue::from("HTTP 502: bad gateway"))
        );
    }

    #[test]
    fn first_failure_wins() {
        let standings = Loadable::<()>::Failed("standings down".into());
        let health = Loadable::<()>::Loading;
        let summary = Loadable::<()>::Failed("schedule down".into());
        assert_eq!(
            page_error(&standings, &health, &summary).as_deref(),
            Some("standings down")
        );
    }

    #[test]
    fn no_failure_no_banner() {
        let ready = Loadable::Ready(1);
        assert_eq!(page_error(&ready, &Loadable::<u8>::Loading, &ready), None);
    }
}
