//! Shared Yew view components for the dashboard shell and pages.

use crate::config::api_url;
use crate::hooks::use_language;
use crate::i18n::tr;
use crate::model::ResultEntry;
use crate::pages::Page;
use crate::utils::{format_points, medal};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,
}

#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    let lang = use_language().language;
    let text = props
        .text
        .clone()
        .unwrap_or_else(|| AttrValue::from(tr("loading_data", lang).to_string()));
    html! {
        <div class="loader">
            <div class="spinner" />
            <span class="loader-text">{ text }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<AttrValue>,
}

/// Renders nothing when there is no message.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    match &props.message {
        Some(message) if !message.is_empty() => html! {
            <div class="error-banner">{ message.clone() }</div>
        },
        _ => html! {},
    }
}

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let handle = use_language();
    let onclick = {
        let toggle = handle.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    html! {
        <button class="language-switcher" {onclick} title={handle.language.switch_hint()}>
            <span class="language-label">{ handle.language.flag_label() }</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: Page,
    pub on_select: Callback<Page>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let lang = use_language().language;
    html! {
        <nav class="navbar">
            { Page::ALL.iter().map(|&page| {
                let class = if page == props.current { "nav-item active" } else { "nav-item" };
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(page))
                };
                let label = match page.nav_key() {
                    Some(key) => tr(key, lang).to_string(),
                    None => "?".to_string(),
                };
                html! { <button {class} {onclick}>{ label }</button> }
            }).collect::<Html>() }
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let lang = use_language().language;
    let api = api_url();
    let api = if api.is_empty() {
        tr("footer_not_defined", lang)
    } else {
        api
    };
    html! {
        <footer class="footer">
            <p>{ format!("{} • {} {}", tr("footer_data_provided", lang), tr("footer_front_calls", lang), api) }</p>
            <p class="footer-note">{ tr("footer_project_description", lang) }</p>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct PodiumListProps {
    pub results: Vec<ResultEntry>,
}

/// Top three finishers with medals, driver and team.
#[function_component(PodiumList)]
pub fn podium_list(props: &PodiumListProps) -> Html {
    html! {
        <ul class="podium-list">
            { props.results.iter().take(3).map(|r| html! {
                <li class="podium-entry">
                    <span class="medal">{ medal(r.position) }</span>
                    <span class="podium-driver">{ r.driver.full_name() }</span>
                    <span class="podium-team">{ r.constructor.name.clone() }</span>
                    <span class="podium-points">{ format_points(r.points) }</span>
                </li>
            }).collect::<Html>() }
        </ul>
    }
}
