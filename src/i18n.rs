//! French/English UI strings and the persisted language preference.

use crate::config::LANGUAGE_STORAGE_KEY;
use log::warn;
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "fr" => Some(Language::Fr),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }

    /// Label shown on the switcher button for the current language.
    pub fn flag_label(self) -> &'static str {
        match self {
            Language::Fr => "🇫🇷 FR",
            Language::En => "🇬🇧 EN",
        }
    }

    /// Tooltip inviting the user to switch to the other language.
    pub fn switch_hint(self) -> &'static str {
        match self {
            Language::Fr => "Switch to English",
            Language::En => "Passer en français",
        }
    }
}

type Dictionary = HashMap<&'static str, &'static str>;

static FRENCH: Lazy<Dictionary> = Lazy::new(|| {
    HashMap::from([
        // Header
        ("app_title", "F1 Dashboard"),
        ("app_subtitle", "Statistiques en temps réel de la Formule 1"),
        ("api_label", "API"),
        ("api_undefined", "non définie"),
        // Navigation
        ("nav_home", "Accueil"),
        ("nav_drivers", "Pilotes"),
        ("nav_constructors", "Constructeurs"),
        ("nav_stats", "Statistiques"),
        ("nav_schedule", "Calendrier"),
        ("nav_about", "À propos"),
        // Home
        ("top3_drivers", "Top 3 Pilotes"),
        ("mode", "Mode"),
        ("last_race", "Dernière Course"),
        ("next_race", "Prochaine Course"),
        ("podium", "Podium"),
        ("no_results", "Résultats non disponibles"),
        ("loading", "Chargement du dashboard..."),
        ("network_error", "Erreur réseau"),
        ("page_not_found", "Page introuvable."),
        // About
        ("about_title", "À propos du projet"),
        (
            "about_description",
            "F1 Dashboard affiche les classements, le calendrier et les statistiques de carrière des pilotes à partir d'une API de statistiques F1.",
        ),
        ("architecture_note", "Note d'architecture :"),
        (
            "architecture_text",
            "Pas de proxy /api : le frontend appelle directement",
        ),
        ("api_url", "l'URL de l'API"),
        // Standings
        ("drivers_standings", "Classement des Pilotes"),
        ("constructors_standings", "Classement des Constructeurs"),
        ("position", "Position"),
        ("driver", "Pilote"),
        ("constructor", "Constructeur"),
        ("points", "Points"),
        ("wins", "Victoires"),
        ("pos", "Pos"),
        ("team", "Écurie"),
        ("loading_drivers", "Classement pilotes..."),
        ("loading_constructors", "Classement constructeurs..."),
        // Schedule
        ("schedule", "Calendrier"),
        ("schedule_title", "Calendrier de la saison"),
        ("round", "Round"),
        ("grand_prix", "Grand Prix"),
        ("circuit", "Circuit"),
        ("location", "Lieu"),
        ("date", "Date"),
        ("loading_schedule", "Chargement du calendrier..."),
        // Pilot stats
        ("pilot_stats", "Statistiques des Pilotes"),
        ("sort_by", "Trier par:"),
        ("minimum", "Minimum:"),
        ("reset", "Réinitialiser"),
        ("loading_stats", "Chargement des statistiques..."),
        ("poles", "Pole Positions"),
        ("podiums", "Podiums"),
        ("races", "Courses"),
        ("no_drivers", "Aucun pilote ne correspond aux critères de filtrage."),
        ("error", "Erreur"),
        // Easter egg
        ("easter_egg_title", "Easter Egg"),
        ("easter_egg_prompt", "Tape le"),
        ("max_code", "Max Code"),
        ("easter_egg_suffix", "sur ton clavier 🎮"),
        ("boost_activated", "Boost activé ! Vroum vroum 🏎️💨"),
        // Common
        ("loading_data", "Chargement..."),
        // Footer
        ("footer_data_provided", "Données fournies par l'API Ergast F1"),
        ("footer_front_calls", "Front appelle"),
        ("footer_not_defined", "N/D"),
        ("footer_project_description", "Projet DevOps - Apprentissage"),
        ("footer_github", "GitHub"),
    ])
});

static ENGLISH: Lazy<Dictionary> = Lazy::new(|| {
    HashMap::from([
        // Header
        ("app_title", "F1 Dashboard"),
        ("app_subtitle", "Real-time Formula 1 Statistics"),
        ("api_label", "API"),
        ("api_undefined", "not defined"),
        // Navigation
        ("nav_home", "Home"),
        ("nav_drivers", "Drivers"),
        ("nav_constructors", "Constructors"),
        ("nav_stats", "Statistics"),
        ("nav_schedule", "Schedule"),
        ("nav_about", "About"),
        // Home
        ("top3_drivers", "Top 3 Drivers"),
        ("mode", "Mode"),
        ("last_race", "Last Race"),
        ("next_race", "Next Race"),
        ("podium", "Podium"),
        ("no_results", "Results not available"),
        ("loading", "Loading dashboard..."),
        ("network_error", "Network error"),
        ("page_not_found", "Page not found."),
        // About
        ("about_title", "About the Project"),
        (
            "about_description",
            "F1 Dashboard shows standings, the season schedule and driver career statistics from an F1 statistics API.",
        ),
        ("architecture_note", "Architecture note:"),
        ("architecture_text", "No /api proxy: the frontend calls directly"),
        ("api_url", "the API URL"),
        // Standings
        ("drivers_standings", "Drivers Standings"),
        ("constructors_standings", "Constructors Standings"),
        ("position", "Position"),
        ("driver", "Driver"),
        ("constructor", "Constructor"),
        ("points", "Points"),
        ("wins", "Wins"),
        ("pos", "Pos"),
        ("team", "Team"),
        ("loading_drivers", "Loading drivers standings..."),
        ("loading_constructors", "Loading constructors standings..."),
        // Schedule
        ("schedule", "Schedule"),
        ("schedule_title", "Season Schedule"),
        ("round", "Round"),
        ("grand_prix", "Grand Prix"),
        ("circuit", "Circuit"),
        ("location", "Location"),
        ("date", "Date"),
        ("loading_schedule", "Loading schedule..."),
        // Pilot stats
        ("pilot_stats", "Driver Statistics"),
        ("sort_by", "Sort by:"),
        ("minimum", "Minimum:"),
        ("reset", "Reset"),
        ("loading_stats", "Loading statistics..."),
        ("poles", "Pole Positions"),
        ("podiums", "Podiums"),
        ("races", "Races"),
        ("no_drivers", "No drivers match the filtering criteria."),
        ("error", "Error"),
        // Easter egg
        ("easter_egg_title", "Easter Egg"),
        ("easter_egg_prompt", "Type the"),
        ("max_code", "Max Code"),
        ("easter_egg_suffix", "on your keyboard 🎮"),
        ("boost_activated", "Boost activated! Vroom vroom 🏎️💨"),
        // Common
        ("loading_data", "Loading..."),
        // Footer
        ("footer_data_provided", "Data provided by Ergast F1 API"),
        ("footer_front_calls", "Frontend calls"),
        ("footer_not_defined", "N/A"),
        ("footer_project_description", "DevOps Learning Project"),
        ("footer_github", "GitHub"),
    ])
});

fn dictionary(lang: Language) -> &'static Dictionary {
    match lang {
        Language::Fr => &FRENCH,
        Language::En => &ENGLISH,
    }
}

/// Translate `key`, falling back to the key itself when it is unknown.
pub fn tr<'a>(key: &'a str, lang: Language) -> &'a str {
    match dictionary(lang).get(key) {
        Some(text) => *text,
        None => key,
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    gloo_utils::window().local_storage().ok().flatten()
}

/// Saved language preference, or the default when none is stored.
pub fn load_language() -> Language {
    local_storage()
        .and_then(|s| s.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

pub fn save_language(lang: Language) {
    let Some(storage) = local_storage() else {
        return;
    };
    if storage.set_item(LANGUAGE_STORAGE_KEY, lang.code()).is_err() {
        warn!("Could not persist language preference");
    }
}
