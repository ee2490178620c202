//! Host environment abstraction
//!
//! Everything the share widget needs from the page it lives in: the current
//! address, navigation notifications, timers and the clipboard. The browser
//! implementation lives in `browser_host`; tests drive the widget through
//! `mock::MockHost`.

use async_trait::async_trait;
use std::fmt;
use std::rc::Rc;

/// Navigation notifications the widget listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationEvent {
    /// Back/forward history navigation (`popstate`)
    PopState,
    /// Custom in-app navigation notification (`urlchange`)
    UrlChange,
}

impl NavigationEvent {
    /// DOM event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PopState => "popstate",
            Self::UrlChange => "urlchange",
        }
    }
}

/// Handle for a registered listener or scheduled timer
///
/// Dropping the handle releases whatever it stands for.
pub struct Registration {
    release: Option<Box<dyn FnOnce()>>,
}

impl Registration {
    /// Run `release` when the handle is dropped
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Keep `resource` alive until the handle is dropped
    ///
    /// Used for gloo timers, which cancel themselves on drop.
    pub fn holding<T: 'static>(resource: T) -> Self {
        Self::new(move || drop(resource))
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Clipboard write failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No browser window available
    NoWindow,
    /// The clipboard promise rejected (permission denied, unsupported, ...)
    Rejected(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "No window"),
            Self::Rejected(msg) => write!(f, "Clipboard write rejected: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Capabilities consumed from the page hosting the widget
#[async_trait(?Send)]
pub trait HostEnvironment: 'static {
    /// Live full address (`location.href`)
    fn href(&self) -> String;

    /// Live origin (`location.origin`)
    fn origin(&self) -> String;

    /// Live path (`location.pathname`)
    fn pathname(&self) -> String;

    /// Live query string including the leading `?`, or empty
    fn search(&self) -> String;

    /// Call `handler` whenever `event` fires until the registration is dropped
    fn subscribe(&self, event: NavigationEvent, handler: Rc<dyn Fn()>) -> Registration;

    /// Call `handler` every `millis` until the registration is dropped
    fn set_interval(&self, millis: u32, handler: Rc<dyn Fn()>) -> Registration;

    /// Call `handler` once after `millis` unless the registration is dropped first
    fn set_timeout(&self, millis: u32, handler: Box<dyn FnOnce()>) -> Registration;

    /// Write `text` to the system clipboard
    async fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError>;
}
