use crate::config::api_url;
use crate::hooks::use_language;
use crate::i18n::tr;
use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    let lang = use_language().language;
    let api = api_url();
    html! {
        <div class="card about">
            <h2>{ tr("about_title", lang) }</h2>
            <p>{ tr("about_description", lang) }</p>
            <p class="architecture">
                <b>{ tr("architecture_note", lang) }</b>
                { format!(" {} {}: ", tr("architecture_text", lang), tr("api_url", lang)) }
                <code>{ if api.is_empty() { tr("api_undefined", lang) } else { api } }</code>
            </p>
        </div>
    }
}
