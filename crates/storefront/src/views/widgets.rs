//! Small stand-alone widgets.

use std::fmt::Display;
use std::str::FromStr;

use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::notifications::{Toast, Toaster};

/// Characters shown before [`ExpandableText`] truncates.
pub const TEXT_LIMIT: usize = 255;

#[derive(Debug, Clone, Default)]
pub struct ProductImageGallery {
    image_urls: Vec<String>,
}

impl ProductImageGallery {
    pub fn new(image_urls: Vec<String>) -> Self {
        Self { image_urls }
    }
}

impl Display for ProductImageGallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self
            .image_urls
            .iter()
            .map(|url| format!("[image] {url}"))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderStatus {
    #[default]
    New,
    Processed,
    Fulfilled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [OrderStatus::New, OrderStatus::Processed, OrderStatus::Fulfilled];

    pub fn value(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Processed => "processed",
            OrderStatus::Fulfilled => "fulfilled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::Processed => "Processed",
            OrderStatus::Fulfilled => "Fulfilled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.value() == s)
            .ok_or_else(|| format!("Unknown order status: {s}"))
    }
}

/// A status select that reports changes to `on_change`.
pub struct OrderStatusSelector<F: FnMut(OrderStatus)> {
    status: OrderStatus,
    on_change: F,
}

impl<F: FnMut(OrderStatus)> OrderStatusSelector<F> {
    pub fn new(on_change: F) -> Self {
        Self {
            status: OrderStatus::default(),
            on_change,
        }
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// `(value, label)` for every status.
    pub fn options(&self) -> Vec<(&'static str, &'static str)> {
        OrderStatus::ALL.iter().map(|s| (s.value(), s.label())).collect()
    }

    /// Selecting the current status again does not call `on_change`.
    pub fn select(&mut self, status: OrderStatus) {
        if status != self.status {
            self.status = status;
            (self.on_change)(status);
        }
    }
}

/// A text box that submits its trimmed content on enter.
pub struct SearchBox<F: FnMut(&str)> {
    text: String,
    on_search: F,
}

impl<F: FnMut(&str)> SearchBox<F> {
    pub fn new(on_search: F) -> Self {
        Self {
            text: String::new(),
            on_search,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns whether a search was submitted; blank text submits nothing.
    pub fn press_enter(&mut self) -> bool {
        let term = self.text.trim();
        if term.is_empty() {
            return false;
        }
        (self.on_search)(term);
        true
    }
}

#[derive(Debug, Clone, Default)]
pub struct TermsAndConditions {
    accepted: bool,
}

impl TermsAndConditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.accepted = !self.accepted;
    }

    pub fn can_submit(&self) -> bool {
        self.accepted
    }
}

impl Display for TermsAndConditions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let check = if self.accepted { "x" } else { " " };
        let submit = if self.accepted { "[Submit]" } else { "[Submit] (disabled)" };
        write!(
            f,
            "Terms & Conditions\n[{check}] I accept the terms and conditions.\n{submit}"
        )
    }
}

#[derive(Debug, Clone)]
pub struct ExpandableText {
    text: String,
    expanded: bool,
}

impl ExpandableText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            expanded: false,
        }
    }

    pub fn is_truncatable(&self) -> bool {
        self.text.chars().count() > TEXT_LIMIT
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

impl Display for ExpandableText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_truncatable() {
            return f.write_str(&self.text);
        }
        if self.expanded {
            write!(f, "{} [Show Less]", self.text)
        } else {
            let shown: String = self.text.chars().take(TEXT_LIMIT).collect();
            write!(f, "{shown}... [Show More]")
        }
    }
}

/// How many toasts stay on screen; older ones fall off.
pub const TOAST_HISTORY: usize = 5;

/// Collects toasts raised through a [`Toaster`], keeping the latest
/// [`TOAST_HISTORY`] on screen.
pub struct Toasts {
    receiver: broadcast::Receiver<Toast>,
    shown: Vec<Toast>,
}

impl Toasts {
    pub fn new(toaster: &Toaster) -> Self {
        Self {
            receiver: toaster.subscribe(),
            shown: Vec::new(),
        }
    }

    /// Returns the toasts raised since the last call.
    pub fn drain(&mut self) -> Vec<Toast> {
        let mut fresh = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(toast) => fresh.push(toast),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        self.shown.extend(fresh.iter().cloned());
        let overflow = self.shown.len().saturating_sub(TOAST_HISTORY);
        self.shown.drain(..overflow);
        fresh
    }
}

impl Display for Toasts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self.shown.iter().map(Toast::to_string).collect();
        f.write_str(&lines.join("\n"))
    }
}
