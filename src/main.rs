//! Kuwait Social AI - Main Entry Point

use kuwait_social_ui::app::application::run_app;
use kuwait_social_ui::helpers::init_logging;

fn main() {
    let _log_guard = init_logging();

    tracing::info!("Starting Kuwait Social AI...");

    run_app();
}
