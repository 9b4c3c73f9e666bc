//! Transient notifications ("toasts").
//!
//! Anything can raise a toast through a cloned [`Toaster`]; whatever renders them
//! subscribes and drains the receiver. Toasts raised with no subscriber are dropped.

use std::fmt::Display;
use tokio::sync::broadcast;
use tracing::info;

const TOAST_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Display for Toast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.kind {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
        };
        write!(f, "{icon} {}", self.message)
    }
}

#[derive(Debug, Clone)]
pub struct Toaster {
    sender: broadcast::Sender<Toast>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Toaster {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(TOAST_CAPACITY);
        Self { sender }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.raise(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.raise(ToastKind::Error, message.into());
    }

    fn raise(&self, kind: ToastKind, message: String) {
        info!(?kind, %message, "Toast");
        let _ = self.sender.send(Toast { kind, message });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Toast> {
        self.sender.subscribe()
    }
}
