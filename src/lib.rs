//! Formula 1 statistics dashboard rendered in the browser with Yew.
//!
//! The library holds the API client, the data model, the podium enrichment
//! pipeline and the UI components; `main.rs` only mounts the [`App`].

pub mod api;
pub mod components;
pub mod config;
pub mod easter_egg;
pub mod enrich;
pub mod error;
pub mod hooks;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod pages;
pub mod stats;
pub mod utils;

pub use api::StatsClient;
pub use enrich::{
    CancellationToken, Clock, DetailSource, EnrichmentFetcher, PodiumTable, Sleeper, Throttle,
};
pub use error::{ApiError, ApiErrorKind, EnrichError};
pub use model::{Event, EventDetail, EventKey, ResultEntry};

use components::{Footer, LanguageSwitcher, Navbar};
use config::api_url;
use hooks::LanguageHandle;
use i18n::{load_language, save_language, tr};
use pages::Page;
use yew::prelude::*;

/// Application shell: header, tab navigation, current page and footer.
#[function_component(App)]
pub fn app() -> Html {
    let language = use_state(load_language);
    let page = use_state(Page::default);

    {
        use_effect_with(*language, move |lang| {
            save_language(*lang);
            || ()
        });
    }

    let handle = {
        let language = language.clone();
        LanguageHandle {
            language: *language,
            toggle: Callback::from(move |_| language.set(language.toggle())),
        }
    };

    let on_select = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    let lang = *language;
    let api = api_url();

    html! {
        <ContextProvider<LanguageHandle> context={handle}>
            <div class="app">
                <header class="app-header">
                    <div>
                        <h1>{ format!("🏎️ {}", tr("app_title", lang)) }</h1>
                        <p class="subtitle">{ tr("app_subtitle", lang) }</p>
                    </div>
                    <div class="header-tools">
                        <LanguageSwitcher />
                        <span class="api-label">{ tr("api_label", lang) }</span>
                        <code class="api-badge">
                            { if api.is_empty() { tr("api_undefined", lang) } else { api } }
                        </code>
                    </div>
                </header>
                <Navbar current={*page} {on_select} />
                <main class="content">
                    { page.render() }
                </main>
                <Footer />
            </div>
        </ContextProvider<LanguageHandle>>
    }
}
