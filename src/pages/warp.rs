use crate::hooks::{use_key_sequence, use_language};
use crate::i18n::tr;
use yew::prelude::*;

/// Hidden page; typing the Max Code lights it up.
#[function_component(Warp)]
pub fn warp() -> Html {
    let lang = use_language().language;
    let unlocked = use_state(|| false);
    {
        let unlocked = unlocked.clone();
        use_key_sequence(Callback::from(move |_| unlocked.set(true)));
    }

    let badge_class = if *unlocked { "warp-badge unlocked" } else { "warp-badge" };

    html! {
        <div class="card warp">
            <h2>{ tr("easter_egg_title", lang) }</h2>
            <p>
                { format!("{} ", tr("easter_egg_prompt", lang)) }
                <b>{ tr("max_code", lang) }</b>
                { format!(" {}", tr("easter_egg_suffix", lang)) }
            </p>
            <div class={badge_class}>{ if *unlocked { "🏁" } else { "❓" } }</div>
            if *unlocked {
                <p class="boost">{ tr("boost_activated", lang) }</p>
            }
        </div>
    }
}
