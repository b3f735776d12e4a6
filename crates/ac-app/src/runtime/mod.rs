//! Orchestrator runtime
//!
//! One foreground task owns the [`Orchestrator`] and drains a channel of
//! [`CoreCommand`]s. Clipboard change notifications arrive on the same
//! channel as user commands, so everything that touches the slot view runs
//! in order on that task. Persistence is spawned and never awaited here.

mod command;
mod core_runtime;
mod orchestrator;
mod snapshot;

pub use command::{
    core_channel, ChannelClipboardChangeHandler, CoreCommand, CoreCommandReceiver,
    CoreCommandSender,
};
pub use core_runtime::CoreRuntime;
pub use orchestrator::{CopyHandle, Orchestrator, SaveHandle};
pub use snapshot::{ContentLabel, CoreSnapshot, SlotView};
