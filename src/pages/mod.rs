//! Top-level views, one per navigation tab.

mod about;
mod home;
mod pilot_stats;
mod schedule;
mod standings;
mod warp;

pub use about::About;
pub use home::Home;
pub use pilot_stats::PilotStats;
pub use schedule::Schedule;
pub use standings::{ConstructorsStandings, DriversStandings};
pub use warp::Warp;

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Drivers,
    Constructors,
    Stats,
    Schedule,
    About,
    Warp,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Drivers,
        Page::Constructors,
        Page::Stats,
        Page::Schedule,
        Page::About,
        Page::Warp,
    ];

    /// Translation key of the tab label; the hidden page has none.
    pub fn nav_key(self) -> Option<&'static str> {
        match self {
            Page::Home => Some("nav_home"),
            Page::Drivers => Some("nav_drivers"),
            Page::Constructors => Some("nav_constructors"),
            Page::Stats => Some("nav_stats"),
            Page::Schedule => Some("nav_schedule"),
            Page::About => Some("nav_about"),
            Page::Warp => None,
        }
    }

    pub fn render(self) -> Html {
        match self {
            Page::Home => html! { <Home /> },
            Page::Drivers => html! { <DriversStandings /> },
            Page::Constructors => html! { <ConstructorsStandings /> },
            Page::Stats => html! { <PilotStats /> },
            Page::Schedule => html! { <Schedule /> },
            Page::About => html! { <About /> },
            Page::Warp => html! { <Warp /> },
        }
    }
}
