use crate::components::{ErrorBanner, Loader};
use crate::hooks::{use_api, use_language};
use crate::i18n::tr;
use crate::utils::format_points;
use yew::prelude::*;

#[function_component(DriversStandings)]
pub fn drivers_standings() -> Html {
    let lang = use_language().language;
    let standings = use_api(|client| async move { client.driver_standings().await });

    if standings.is_loading() {
        return html! { <Loader text={tr("loading_drivers", lang).to_string()} /> };
    }
    let rows = standings.ready().cloned().unwrap_or_default();

    html! {
        <div class="card">
            <div class="card-header">
                <h2>{ tr("drivers_standings", lang) }</h2>
            </div>
            <ErrorBanner message={standings.error().map(|e| AttrValue::from(e.to_string()))} />
            <div class="table-container">
                <table class="standings-table">
                    <thead>
                        <tr>
                            <th>{ tr("pos", lang) }</th>
                            <th>{ tr("driver", lang) }</th>
                            <th>{ tr("team", lang) }</th>
                            <th>{ tr("points", lang) }</th>
                            <th>{ tr("wins", lang) }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { rows.iter().map(|s| html! {
                            <tr key={format!("{}-{}", s.position, s.driver.driver_id)}>
                                <td class="position">{ s.position }</td>
                                <td>
                                    <div class="driver-name">{ s.driver.full_name() }</div>
                                    <div class="muted">{ s.driver.nationality.clone().unwrap_or_default() }</div>
                                </td>
                                <td>{ s.team_name().to_string() }</td>
                                <td class="points">{ format_points(s.points) }</td>
                                <td>{ s.wins }</td>
                            </tr>
                        }).collect::<Html>() }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[function_component(ConstructorsStandings)]
pub fn constructors_standings() -> Html {
    let lang = use_language().language;
    let standings = use_api(|client| async move { client.constructor_standings().await });

    if standings.is_loading() {
        return html! { <Loader text={tr("loading_constructors", lang).to_string()} /> };
    }
    let rows = standings.ready().cloned().unwrap_or_default();

    html! {
        <div class="card">
            <div class="card-header">
                <h2>{ tr("constructors_standings", lang) }</h2>
            </div>
            <ErrorBanner message={standings.error().map(|e| AttrValue::from(e.to_string()))} />
            <div class="table-container">
                <table class="standings-table">
                    <thead>
                        <tr>
                            <th>{ tr("pos", lang) }</th>
                            <th>{ tr("team", lang) }</th>
                            <th>{ tr("points", lang) }</th>
                            <th>{ tr("wins", lang) }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { rows.iter().map(|c| html! {
                            <tr key={format!("{}-{}", c.position, c.constructor.constructor_id)}>
                                <td class="position">{ c.position }</td>
                                <td>{ c.constructor.name.clone() }</td>
                                <td class="points">{ format_points(c.points) }</td>
                                <td>{ c.wins }</td>
                            </tr>
                        }).collect::<Html>() }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
