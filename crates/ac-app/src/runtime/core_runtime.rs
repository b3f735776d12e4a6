use tracing::{debug, info, warn};

use super::command::{CoreCommand, CoreCommandReceiver};
use super::orchestrator::Orchestrator;

/// Drains the command channel into the orchestrator until shutdown.
pub struct CoreRuntime {
    orchestrator: Orchestrator,
    command_rx: CoreCommandReceiver,
    shutting_down: bool,
}

impl CoreRuntime {
    pub fn new(orchestrator: Orchestrator, command_rx: CoreCommandReceiver) -> Self {
        Self {
            orchestrator,
            command_rx,
            shutting_down: false,
        }
    }

    /// Runs until `Shutdown` arrives or every sender is gone.
    pub async fn start(mut self) -> Orchestrator {
        info!("core runtime started");
        while !self.shutting_down {
            match self.command_rx.recv().await {
                Some(command) => self.handle_command(command).await,
                None => break,
            }
        }
        info!("core runtime stopped");
        self.orchestrator
    }

    async fn handle_command(&mut self, command: CoreCommand) {
        match command {
            CoreCommand::CaptureNow => {
                // autosave runs detached
                let _ = self.orchestrator.capture_now().await;
            }
            CoreCommand::CopyCurrent => {
                if self.orchestrator.copy_current().is_none() {
                    debug!("nothing to copy");
                }
            }
            CoreCommand::SaveCurrent => {
                if self.orchestrator.save_current().is_none() {
                    debug!("nothing to save");
                }
            }
            CoreCommand::Delete { id } => {
                let _ = self.orchestrator.delete(&id);
            }
            CoreCommand::ClearAll => {
                let _ = self.orchestrator.clear_all();
            }
            CoreCommand::TogglePin { id } => {
                if self.orchestrator.toggle_pin(&id).is_none() {
                    debug!(item_id = %id, "pin toggle for unknown slot");
                }
            }
            CoreCommand::LoadSlot { position } => {
                if !self.orchestrator.load_slot(position) {
                    debug!(position, "slot is empty");
                }
            }
            CoreCommand::SetSlotCount { count } => self.orchestrator.set_slot_count(count),
            CoreCommand::ToggleVisibility => {
                let visible = self.orchestrator.toggle_visibility();
                debug!(visible, "visibility toggled");
            }
            CoreCommand::ToggleMonitoring => {
                self.orchestrator.toggle_monitoring();
            }
            CoreCommand::ApplyEdits { edits } => {
                let _ = self.orchestrator.apply_edits(edits);
            }
            CoreCommand::RefreshSettings { settings } => {
                self.orchestrator.refresh_settings(settings)
            }
            CoreCommand::Export {
                format,
                scope,
                dest,
                reply,
            } => {
                let export = self.orchestrator.export(format, scope, dest);
                tokio::spawn(async move {
                    let result = match export.await {
                        Ok(result) => result,
                        Err(e) => Err(anyhow::anyhow!("export task failed: {e}")),
                    };
                    if let Err(e) = &result {
                        warn!(error = ?e, "history export failed");
                    }
                    let _ = reply.send(result);
                });
            }
            CoreCommand::Snapshot { reply } => {
                if reply.send(self.orchestrator.snapshot()).is_err() {
                    debug!("snapshot requester went away");
                }
            }
            CoreCommand::Shutdown => {
                self.shutting_down = true;
                info!("core runtime shutting down");
            }
        }
    }
}
