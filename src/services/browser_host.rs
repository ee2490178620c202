use crate::services::host::{ClipboardError, HostEnvironment, NavigationEvent, Registration};
use async_trait::async_trait;
use gloo_timers::callback::{Interval, Timeout};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// `HostEnvironment` backed by the browser window
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl BrowserHost {
    fn location() -> Option<web_sys::Location> {
        web_sys::window().map(|w| w.location())
    }

    fn read(part: impl Fn(&web_sys::Location) -> Result<String, JsValue>) -> String {
        Self::location()
            .and_then(|location| part(&location).ok())
            .unwrap_or_default()
    }
}

fn js_error_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[async_trait(?Send)]
impl HostEnvironment for BrowserHost {
    fn href(&self) -> String {
        Self::read(|l| l.href())
    }

    fn origin(&self) -> String {
        Self::read(|l| l.origin())
    }

    fn pathname(&self) -> String {
        Self::read(|l| l.pathname())
    }

    fn search(&self) -> String {
        Self::read(|l| l.search())
    }

    fn subscribe(&self, event: NavigationEvent, handler: Rc<dyn Fn()>) -> Registration {
        let Some(window) = web_sys::window() else {
            log::warn!("No window, cannot listen for {}", event.event_type());
            return Registration::new(|| {});
        };

        let callback = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);

        if let Err(e) = window
            .add_event_listener_with_callback(event.event_type(), callback.as_ref().unchecked_ref())
        {
            log::error!("Failed to add {} listener: {:?}", event.event_type(), e);
            return Registration::new(|| {});
        }

        // Keep ownership of the closure until the listener is removed
        Registration::new(move || {
            window
                .remove_event_listener_with_callback(event.event_type(), callback.as_ref().unchecked_ref())
                .ok();
            drop(callback);
        })
    }

    fn set_interval(&self, millis: u32, handler: Rc<dyn Fn()>) -> Registration {
        Registration::holding(Interval::new(millis, move || handler()))
    }

    fn set_timeout(&self, millis: u32, handler: Box<dyn FnOnce()>) -> Registration {
        Registration::holding(Timeout::new(millis, handler))
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(js_error_message(e)))
    }
}
