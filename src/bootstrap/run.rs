use std::sync::Arc;

use ac_app::runtime::{core_channel, ChannelClipboardChangeHandler, CoreCommand};
use ac_app::{CoreRuntime, Orchestrator};
use anyhow::Context;
use tracing::{info, warn};

use super::config::load_settings;
use super::tracing::init_tracing_subscriber;
use super::wiring::{default_paths, wire_dependencies};

/// Runs the daemon until Ctrl-C.
pub async fn run_app() -> anyhow::Result<()> {
    let paths = default_paths()?;
    init_tracing_subscriber(&paths.logs_dir)?;
    info!(data_dir = ?paths.history_path.parent(), "starting aftercopy");

    let deps = wire_dependencies(&paths)?;
    let settings = load_settings(deps.settings.as_ref()).await;

    let mut orchestrator = Orchestrator::new(&deps, settings);
    orchestrator.load_initial().await;

    let (tx, rx) = core_channel();
    let runtime = tokio::spawn(CoreRuntime::new(orchestrator, rx).start());

    let watcher = ac_platform::start_clipboard_watcher(Arc::new(
        ChannelClipboardChangeHandler::new(tx.clone()),
    ))
    .context("start clipboard watcher")?;

    tokio::signal::ctrl_c()
        .await
        .context("wait for ctrl-c")?;
    info!("shutdown requested");

    watcher.stop().await;
    if tx.send(CoreCommand::Shutdown).await.is_err() {
        warn!("core runtime already stopped");
    }
    runtime.await.context("core runtime panicked")?;

    info!("aftercopy stopped");
    Ok(())
}
