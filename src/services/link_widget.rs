//! Shareable link controller
//!
//! Keeps a tracked copy of the page address in sync with the host (history
//! navigation, custom `urlchange` notifications and a polling fallback),
//! derives the compact display text and runs the copy-to-clipboard action
//! with its self-expiring toast.
//!
//! The controller is host-agnostic; the `ShareableLink` component drives it
//! with `BrowserHost` and re-renders whenever `notify` is called.

use crate::services::host::{ClipboardError, HostEnvironment, NavigationEvent, Registration};
use crate::utils::{display_address, display_params, ToastTimer, ToastVisibility, WidgetTimings};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

struct Inner<H: HostEnvironment> {
    host: H,
    tracked: RefCell<String>,
    toast: ToastTimer,
    registrations: RefCell<Vec<Registration>>,
    active: Cell<bool>,
    notify: Rc<dyn Fn()>,
}

impl<H: HostEnvironment> Inner<H> {
    /// Re-read the live address; returns true if the tracked copy changed
    fn refresh(&self) -> bool {
        if !self.active.get() {
            return false;
        }

        let live = self.host.href();
        if *self.tracked.borrow() == live {
            return false;
        }

        log::debug!("Tracked address changed to {}", live);
        *self.tracked.borrow_mut() = live;
        (self.notify)();
        true
    }
}

/// State and actions behind the shareable link widget
///
/// Cheap to clone; clones share the same state.
pub struct ShareableLinkController<H: HostEnvironment> {
    inner: Rc<Inner<H>>,
}

impl<H: HostEnvironment> Clone for ShareableLinkController<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<H: HostEnvironment> ShareableLinkController<H> {
    /// Capture the current address and start watching for changes
    ///
    /// `notify` is called whenever something visible changes (tracked
    /// address or toast visibility).
    pub fn initialize(host: H, timings: WidgetTimings, notify: Rc<dyn Fn()>) -> Self {
        let initial = host.href();
        let inner = Rc::new(Inner {
            host,
            tracked: RefCell::new(initial),
            toast: ToastTimer::new(timings.toast_duration_ms),
            registrations: RefCell::new(Vec::new()),
            active: Cell::new(true),
            notify,
        });

        let on_change = Self::refresh_handler(Rc::downgrade(&inner));
        let registrations = vec![
            inner.host.subscribe(NavigationEvent::PopState, on_change.clone()),
            inner.host.subscribe(NavigationEvent::UrlChange, on_change.clone()),
            // Fallback for navigations that emit no event
            inner.host.set_interval(timings.poll_interval_ms, on_change),
        ];
        *inner.registrations.borrow_mut() = registrations;

        log::debug!("Shareable link watching {}", inner.tracked.borrow());

        Self { inner }
    }

    fn refresh_handler(inner: Weak<Inner<H>>) -> Rc<dyn Fn()> {
        Rc::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.refresh();
            }
        })
    }

    /// Last observed full address
    pub fn tracked_address(&self) -> String {
        self.inner.tracked.borrow().clone()
    }

    /// Full address for the tooltip: tracked copy, or the live address if empty
    pub fn full_address(&self) -> String {
        let tracked = self.tracked_address();
        if tracked.is_empty() {
            self.inner.host.href()
        } else {
            tracked
        }
    }

    /// Origin and path of the tracked address
    pub fn format_display_address(&self) -> String {
        display_address(
            &self.inner.tracked.borrow(),
            &self.inner.host.origin(),
            &self.inner.host.pathname(),
        )
    }

    /// Summary of the recognized parameters in the live query string
    pub fn format_display_params(&self) -> String {
        display_params(&self.inner.host.search())
    }

    pub fn toast_visibility(&self) -> ToastVisibility {
        self.inner.toast.visibility()
    }

    /// Copy the live address to the clipboard and show the toast
    ///
    /// Failures are logged and returned; the toast is left untouched.
    pub async fn copy_to_clipboard(&self) -> Result<(), ClipboardError> {
        let url = self.inner.host.href();

        if let Err(e) = self.inner.host.write_clipboard(&url).await {
            log::error!("Failed to copy: {}", e);
            return Err(e);
        }

        log::info!("Link copied to clipboard");

        // Torn down while the write was pending
        if !self.inner.active.get() {
            return Ok(());
        }

        let inner = Rc::downgrade(&self.inner);
        self.inner.toast.show(&self.inner.host, move || {
            if let Some(inner) = inner.upgrade() {
                (inner.notify)();
            }
        });
        (self.inner.notify)();

        Ok(())
    }

    /// Remove listeners, stop polling and hide the toast
    ///
    /// Safe to call more than once.
    pub fn teardown(&self) {
        if !self.inner.active.replace(false) {
            return;
        }

        let registrations = std::mem::take(&mut *self.inner.registrations.borrow_mut());
        drop(registrations);
        self.inner.toast.dismiss();

        log::debug!("Shareable link torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::host::mock::MockHost;
    use futures::executor::block_on;

    const START: &str = "https://app.example.com/browse?bucket=media&endpoint=https://s3.example.com/v1";

    fn setup(href: &str) -> (MockHost, ShareableLinkController<MockHost>, Rc<Cell<usize>>) {
        let host = MockHost::new(href);
        let notified = Rc::new(Cell::new(0));
        let counter = notified.clone();
        let controller = ShareableLinkController::initialize(
            host.clone(),
            WidgetTimings::default(),
            Rc::new(move || counter.set(counter.get() + 1)),
        );
        (host, controller, notified)
    }

    #[test]
    fn test_initialize_captures_address_and_registers_watchers() {
        let (host, controller, _) = setup(START);

        assert_eq!(controller.tracked_address(), START);
        assert_eq!(host.active_listeners(), 2);
        assert_eq!(host.active_timers(), 1);
        assert_eq!(controller.toast_visibility(), ToastVisibility::Hidden);
    }

    #[test]
    fn test_navigation_events_update_tracked_address() {
        let (host, controller, notified) = setup(START);

        host.navigate("https://app.example.com/back", NavigationEvent::PopState);
        assert_eq!(controller.tracked_address(), "https://app.example.com/back");

        host.navigate("https://app.example.com/next?path=a", NavigationEvent::UrlChange);
        assert_eq!(controller.tracked_address(), "https://app.example.com/next?path=a");
        assert_eq!(notified.get(), 2);
    }

    #[test]
    fn test_unchanged_address_does_not_notify() {
        let (host, _controller, notified) = setup(START);

        host.dispatch(NavigationEvent::PopState);
        host.advance(5000);
        assert_eq!(notified.get(), 0);
    }

    #[test]
    fn test_poll_picks_up_silent_change() {
        let (host, controller, _) = setup(START);

        host.set_href("https://app.example.com/silent");
        host.advance(999);
        assert_eq!(controller.tracked_address(), START);

        host.advance(1);
        assert_eq!(controller.tracked_address(), "https://app.example.com/silent");
    }

    #[test]
    fn test_display_uses_tracked_path_and_live_params() {
        let (host, controller, _) = setup(START);

        assert_eq!(controller.format_display_address(), "https://app.example.com/browse");
        assert_eq!(
            controller.format_display_params(),
            "?bucket=media&endpoint=s3.example.com"
        );

        // Before the next poll the path lags, the params do not
        host.set_href("https://app.example.com/other?path=docs");
        assert_eq!(controller.format_display_address(), "https://app.example.com/browse");
        assert_eq!(controller.format_display_params(), "?path=docs");
    }

    #[test]
    fn test_unparseable_tracked_address_falls_back_to_live_location() {
        let (_host, controller, _) = setup("not a url");

        assert_eq!(controller.format_display_address(), "");
        assert_eq!(controller.format_display_params(), "");
        assert_eq!(controller.full_address(), "not a url");
    }

    #[test]
    fn test_full_address_falls_back_to_live_when_empty() {
        let (host, controller, _) = setup("");
        host.set_href("https://app.example.com/late");
        assert_eq!(controller.full_address(), "https://app.example.com/late");
    }

    #[test]
    fn test_copy_uses_live_address() {
        let (host, controller, _) = setup(START);

        host.set_href("https://app.example.com/fresh?bucket=x");
        assert!(block_on(controller.copy_to_clipboard()).is_ok());

        assert_eq!(host.clipboard(), vec!["https://app.example.com/fresh?bucket=x".to_string()]);
        assert_eq!(controller.tracked_address(), START);
    }

    #[test]
    fn test_copy_shows_toast_for_two_seconds() {
        let (host, controller, notified) = setup(START);

        block_on(controller.copy_to_clipboard()).unwrap();
        assert!(controller.toast_visibility().is_visible());
        assert_eq!(notified.get(), 1);

        host.advance(1999);
        assert!(controller.toast_visibility().is_visible());
        host.advance(1);
        assert_eq!(controller.toast_visibility(), ToastVisibility::Hidden);
        assert_eq!(notified.get(), 2);
    }

    #[test]
    fn test_second_copy_restarts_toast_deadline() {
        let (host, controller, _) = setup(START);

        block_on(controller.copy_to_clipboard()).unwrap();
        host.advance(1000);
        block_on(controller.copy_to_clipboard()).unwrap();

        host.advance(1000);
        assert!(controller.toast_visibility().is_visible());
        host.advance(999);
        assert!(controller.toast_visibility().is_visible());
        host.advance(1);
        assert_eq!(controller.toast_visibility(), ToastVisibility::Hidden);
        assert_eq!(host.now(), 3000);
    }

    #[test]
    fn test_failed_copy_leaves_toast_hidden() {
        let (host, controller, notified) = setup(START);
        host.fail_clipboard(Some(ClipboardError::Rejected("NotAllowedError".to_string())));

        let result = block_on(controller.copy_to_clipboard());

        assert_eq!(
            result,
            Err(ClipboardError::Rejected("NotAllowedError".to_string()))
        );
        assert_eq!(controller.toast_visibility(), ToastVisibility::Hidden);
        assert_eq!(host.active_timers(), 1);
        assert_eq!(notified.get(), 0);
        assert!(host.clipboard().is_empty());
    }

    #[test]
    fn test_retry_after_failure() {
        let (host, controller, _) = setup(START);
        host.fail_clipboard(Some(ClipboardError::NoWindow));
        assert!(block_on(controller.copy_to_clipboard()).is_err());

        host.fail_clipboard(None);
        assert!(block_on(controller.copy_to_clipboard()).is_ok());
        assert!(controller.toast_visibility().is_visible());
    }

    #[test]
    fn test_teardown_releases_everything() {
        let (host, controller, notified) = setup(START);
        block_on(controller.copy_to_clipboard()).unwrap();
        assert_eq!(host.active_timers(), 2);

        controller.teardown();

        assert_eq!(host.active_listeners(), 0);
        assert_eq!(host.active_timers(), 0);
        assert_eq!(controller.toast_visibility(), ToastVisibility::Hidden);

        let calls = host.handler_calls();
        let notifications = notified.get();
        host.navigate("https://app.example.com/after", NavigationEvent::PopState);
        host.navigate("https://app.example.com/after2", NavigationEvent::UrlChange);
        host.advance(10_000);

        assert_eq!(host.handler_calls(), calls);
        assert_eq!(notified.get(), notifications);
        assert_eq!(controller.tracked_address(), START);
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let (host, controller, _) = setup(START);
        controller.teardown();
        controller.teardown();
        assert_eq!(host.active_listeners(), 0);
    }

    #[test]
    fn test_copy_after_teardown_schedules_nothing() {
        let (host, controller, notified) = setup(START);
        controller.teardown();

        assert!(block_on(controller.copy_to_clipboard()).is_ok());

        assert_eq!(controller.toast_visibility(), ToastVisibility::Hidden);
        assert_eq!(host.active_timers(), 0);
        assert_eq!(notified.get(), 0);
    }

    #[test]
    fn test_dropping_controller_releases_registrations() {
        let (host, controller, _) = setup(START);
        drop(controller);
        assert_eq!(host.active_listeners(), 0);
        assert_eq!(host.active_timers(), 0);
    }
}
