//! Progress events emitted during a run.
//!
//! The engine stays decoupled from any logging sink: callers who want
//! progress pass an unbounded channel sender and consume events on their
//! side. Sends are best-effort; a dropped receiver never affects the run.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "event")]
pub enum AuditEvent {
    ModuleStarted {
        module: &'static str,
    },
    ModuleSettled {
        module: &'static str,
        degraded: bool,
    },
    StageCompleted {
        stage: &'static str,
    },
}

pub type ProgressSender = tokio::sync::mpsc::UnboundedSender<AuditEvent>;

/// Send an event if a sender is attached, ignoring a closed channel.
pub(crate) fn emit(progress: Option<&ProgressSender>, event: AuditEvent) {
    if let Some(sender) = progress {
        let _ = sender.send(event);
    }
}
