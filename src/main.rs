//! Entry point: installs logging and mounts the dashboard.

use f1_dashboard::{config::LOG_LEVEL, logging, App};

fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    logging::init(LOG_LEVEL);
    log::info!("Starting F1 dashboard");
    yew::Renderer::<App>::new().render();
}
