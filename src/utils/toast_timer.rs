//! Self-expiring toast visibility
//!
//! A toast becomes visible when `show` is called and hides itself after a
//! fixed delay. Showing again while visible restarts the delay: the pending
//! hide is cancelled and replaced, so only the latest call decides when the
//! toast disappears.
//!
//! # Example
//! ```ignore
//! let toast = ToastTimer::new(2000);
//! toast.show(&host, || {});   // visible, hides at t+2000
//! // one second later
//! toast.show(&host, || {});   // still visible, now hides at t+3000
//! ```

use crate::services::host::{HostEnvironment, Registration};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Toast visibility states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVisibility {
    #[default]
    Hidden,
    Visible,
}

impl ToastVisibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Restartable one-shot hide timer for a toast
pub struct ToastTimer {
    visibility: Rc<Cell<ToastVisibility>>,
    pending: RefCell<Option<Registration>>,
    duration_ms: u32,
}

impl ToastTimer {
    /// Create a hidden toast that stays visible for `duration_ms` after each `show`
    pub fn new(duration_ms: u32) -> Self {
        Self {
            visibility: Rc::new(Cell::new(ToastVisibility::Hidden)),
            pending: RefCell::new(None),
            duration_ms,
        }
    }

    pub fn visibility(&self) -> ToastVisibility {
        self.visibility.get()
    }

    /// Make the toast visible and (re)schedule the hide
    ///
    /// `on_hide` runs after the toast hides on its own; it does not run when
    /// a later `show` or `dismiss` supersedes this one.
    pub fn show<H, F>(&self, host: &H, on_hide: F)
    where
        H: HostEnvironment,
        F: FnOnce() + 'static,
    {
        // Cancel any existing hide
        let previous = self.pending.borrow_mut().take();
        drop(previous);

        self.visibility.set(ToastVisibility::Visible);

        let visibility = Rc::downgrade(&self.visibility);
        let registration = host.set_timeout(
            self.duration_ms,
            Box::new(move || {
                if let Some(visibility) = visibility.upgrade() {
                    visibility.set(ToastVisibility::Hidden);
                    on_hide();
                }
            }),
        );
        *self.pending.borrow_mut() = Some(registration);
    }

    /// Hide immediately and cancel any pending hide
    pub fn dismiss(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
        self.visibility.set(ToastVisibility::Hidden);
    }
}
