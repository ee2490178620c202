use dioxus::prelude::*;
use std::rc::Rc;

use crate::services::browser_host::BrowserHost;
use crate::services::link_widget::ShareableLinkController;
use crate::utils::WidgetTimings;

/// Shareable link state bound to the calling component
///
/// Starts tracking the page address on first render and tears everything
/// down (listeners, polling, pending toast timer) when the component
/// unmounts. The component re-renders whenever the tracked address or the
/// toast visibility changes.
///
/// # Example
/// ```ignore
/// let link = use_shareable_link();
///
/// rsx! {
///     span { "{link.format_display_address()}" }
///     button { onclick: move |_| { /* spawn link.copy_to_clipboard() */ }, "Copy" }
/// }
/// ```
pub fn use_shareable_link() -> ShareableLinkController<BrowserHost> {
    let revision = use_signal(|| 0u64);

    let controller = use_hook(|| {
        let notify: Rc<dyn Fn()> = Rc::new(move || {
            let mut revision = revision;
            *revision.write() += 1;
        });
        ShareableLinkController::initialize(BrowserHost, WidgetTimings::default(), notify)
    });

    let controller_for_drop = controller.clone();
    use_drop(move || {
        controller_for_drop.teardown();
    });

    // Read to subscribe this scope to changes
    let _ = revision.read();

    controller
}
