use crate::components::{ErrorBanner, Loader};
use crate::hooks::{use_api, use_language};
use crate::i18n::{tr, Language};
use crate::stats::{sort_and_filter, SortKey};
use crate::utils::parse_minimum_filter;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Career statistics table with a sort column and a minimum filter.
#[function_component(PilotStats)]
pub fn pilot_stats() -> Html {
    let lang = use_language().language;
    let stats = use_api(|client| async move { client.all_driver_stats().await });
    let sort_by = use_state(SortKey::default);
    let minimum = use_state(|| 0u32);

    if stats.is_loading() {
        return html! { <Loader text={tr("loading_stats", lang).to_string()} /> };
    }

    let rows = sort_and_filter(stats.ready().map(Vec::as_slice).unwrap_or_default(), *sort_by, *minimum);

    let on_sort_change = {
        let sort_by = sort_by.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(key) = SortKey::from_value(&select.value()) {
                sort_by.set(key);
            }
        })
    };

    let on_minimum_change = {
        let minimum = minimum.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            minimum.set(parse_minimum_filter(&input.value()));
        })
    };

    let on_reset = {
        let minimum = minimum.clone();
        Callback::from(move |_: MouseEvent| minimum.set(0))
    };

    let header = |key: SortKey| {
        let label = header_label(key, *sort_by, lang);
        let handle = sort_by.clone();
        let onclick = Callback::from(move |_: MouseEvent| handle.set(key));
        html! {
            <th class="sortable" {onclick}>{ label }</th>
        }
    };

    html! {
        <div class="card">
            <div class="card-header">
                <h2>{ tr("pilot_stats", lang) }</h2>
                <div class="filters">
                    <label>
                        { tr("sort_by", lang) }
                        <select onchange={on_sort_change}>
                            { SortKey::ALL.iter().map(|&key| html! {
                                <option value={key.value()} selected={key == *sort_by}>
                                    { tr(key.label_key(), lang) }
                                </option>
                            }).collect::<Html>() }
                        </select>
                    </label>
                    <label>
                        { tr("minimum", lang) }
                        <input type="number" min="0"
                            value={minimum.to_string()}
                            onchange={on_minimum_change}
                        />
                    </label>
                    if *minimum > 0 {
                        <button class="reset" onclick={on_reset}>{ tr("reset", lang) }</button>
                    }
                </div>
            </div>

            <ErrorBanner message={stats.error().map(|e| AttrValue::from(e.to_string()))} />

            <div class="table-container">
                <table class="stats-table">
                    <thead>
                        <tr>
                            <th>{ tr("driver", lang) }</th>
                            { SortKey::ALL.iter().map(|&key| header(key)).collect::<Html>() }
                        </tr>
                    </thead>
                    <tbody>
                        { rows.iter().map(|d| html! {
                            <tr key={d.driver_id.clone()}>
                                <td>
                                    <div class="driver-name">{ d.name.clone() }</div>
                                    <div class="muted">{ d.driver_id.clone() }</div>
                                </td>
                                <td class="wins">{ d.total_wins }</td>
                                <td class="poles">{ d.total_poles }</td>
                                <td class="podiums">{ d.total_podiums }</td>
                                <td class="races">{ d.total_races }</td>
                            </tr>
                        }).collect::<Html>() }
                    </tbody>
                </table>
                if rows.is_empty() && stats.error().is_none() {
                    <div class="no-results-message">{ tr("no_drivers", lang) }</div>
                }
            </div>
        </div>
    }
}

/// Column title, with an arrow on the active sort column.
fn header_label(key: SortKey, active: SortKey, lang: Language) -> String {
    let arrow = if key == active { " ⬇" } else { "" };
    format!("{}{}", tr(key.label_key(), lang), arrow)
}
