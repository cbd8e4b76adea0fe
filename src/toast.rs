//! Toast Notifications
//!
//! Bounded queue of short status messages, dismissed after a delay.

use leptos::prelude::*;

/// Messages kept on screen at once; older ones are dropped first
pub const MAX_TOASTS: usize = 4;

/// How long a toast stays visible
pub const TOAST_MILLIS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Warning => "toast toast-warning",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its id
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Reactive handle to the toast queue, shared through context
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|q| q.dismiss(id));
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));
        let queue = self.queue;
        gloo_timers::callback::Timeout::new(TOAST_MILLIS, move || {
            queue.try_update(|q| q.dismiss(id));
        })
        .forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(ToastKind::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "删除成功");
        let b = queue.push(ToastKind::Error, "删除失败");
        assert_ne!(a, b);
        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message, "删除失败");
        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut queue = ToastQueue::default();
        for i in 0..(MAX_TOASTS + 3) {
            queue.push(ToastKind::Warning, format!("t{}", i));
        }
        assert_eq!(queue.toasts().len(), MAX_TOASTS);
        assert_eq!(queue.toasts()[0].message, "t3");
    }
}
