//! Toast notifications shown over the UI.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Visible toasts at most; older ones are dropped first
const MAX_TOASTS: usize = 4;

/// Styling of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    /// Failures; stays on screen twice as long
    Destructive,
}

/// A single notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
}

impl Toast {
    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Queue of active toasts, newest last
#[derive(Debug)]
pub struct Notifications {
    toasts: VecDeque<Toast>,
    next_id: u64,
    duration: Duration,
}

impl Notifications {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 1,
            duration,
        }
    }

    pub fn info(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(title, description, ToastVariant::Default)
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(title, description, ToastVariant::Destructive)
    }

    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
    ) -> u64 {
        self.push_at(title, description, variant, Instant::now())
    }

    fn push_at(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
        now: Instant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push_back(Toast {
            id,
            title: title.into(),
            description: description.into(),
            variant,
            created_at: now,
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
        id
    }

    /// Drop toasts older than their lifetime. Returns true if any were removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        let duration = self.duration;
        self.toasts.retain(|toast| {
            now.saturating_duration_since(toast.created_at) < lifetime(duration, toast.variant)
        });
        self.toasts.len() != before
    }

    /// Remaining share of a toast's lifetime in `0.0..=1.0`
    pub fn remaining_fraction(&self, toast: &Toast, now: Instant) -> f64 {
        let total = lifetime(self.duration, toast.variant).as_secs_f64();
        if total == 0.0 {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(toast.created_at).as_secs_f64();
        (1.0 - elapsed / total).clamp(0.0, 1.0)
    }

    /// Dismiss the newest toast
    pub fn dismiss_latest(&mut self) -> Option<Toast> {
        self.toasts.pop_back()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

fn lifetime(duration: Duration, variant: ToastVariant) -> Duration {
    match variant {
        ToastVariant::Default => duration,
        ToastVariant::Destructive => duration * 2,
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(Duration::from_millis(4000))
    }
}
