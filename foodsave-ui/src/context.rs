// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the application
//!
//! The only state shared through the component tree is the toast queue.
//! Components obtain a [`Notifier`] with `use_context::<Notifier>()` and
//! fire notifications without knowing how they are displayed.

use std::rc::Rc;

use yew::prelude::*;

use crate::constants::TOAST_LIMIT;

/// A notification request.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: AttrValue,
    pub description: AttrValue,
}

/// A notification on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: AttrValue,
    pub description: AttrValue,
}

pub enum ToastAction {
    Push(Notification),
    Dismiss(u64),
}

/// Visible toasts, newest first, capped at [`TOAST_LIMIT`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(notification) => {
                let mut next = (*self).clone();
                let toast = Toast {
                    id: next.next_id,
                    title: notification.title,
                    description: notification.description,
                };
                next.next_id += 1;
                next.toasts.insert(0, toast);
                next.toasts.truncate(TOAST_LIMIT);
                Rc::new(next)
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                let mut next = (*self).clone();
                next.toasts.retain(|t| t.id != id);
                Rc::new(next)
            }
        }
    }
}

/// Fire-and-forget notification handle provided by `ToastProvider`.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    emit: Callback<Notification>,
}

impl Notifier {
    pub fn new(emit: Callback<Notification>) -> Self {
        Self { emit }
    }

    pub fn from_dispatcher(dispatcher: UseReducerDispatcher<ToastQueue>) -> Self {
        Self::new(Callback::from(move |n| dispatcher.dispatch(ToastAction::Push(n))))
    }

    pub fn notify(&self, title: impl Into<AttrValue>, description: impl Into<AttrValue>) {
        self.emit.emit(Notification {
            title: title.into(),
            description: description.into(),
        });
    }
}
