use anyhow::Result;
use cloudtasks::clipboard::open_clipboard;
use cloudtasks::config::Config;
use cloudtasks::core::{event_channel, MemoryCore, TaskCore};
use cloudtasks::logger::Logger;
use cloudtasks::ui::{run_app, AppComponent};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        return Config::generate_default_config(Config::get_default_config_path()?);
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;
    log::info!("Starting cloudtasks");

    let (events, receiver) = event_channel();
    let mut core = match &config.core.seed_file {
        Some(path) => MemoryCore::with_tasks(events, MemoryCore::load_seed(path)?),
        None => MemoryCore::new(events),
    };
    core.refresh();

    let app = AppComponent::new(&config, Box::new(core), receiver, open_clipboard(), logger);
    run_app(app, config.ui.mouse_enabled).await
}
