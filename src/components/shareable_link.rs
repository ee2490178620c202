use dioxus::prelude::*;

use crate::components::icons::{CheckIcon, CopyIcon};
use crate::hooks::use_shareable_link;

/// Compact view of the current page address with a copy button
///
/// Shows `origin + path` followed by a summary of the `bucket`, `path` and
/// `endpoint` query parameters. The button always copies the full live
/// address.
#[component]
pub fn ShareableLink() -> Element {
    let link = use_shareable_link();

    let display_address = link.format_display_address();
    let display_params = link.format_display_params();
    let full_address = link.full_address();
    let show_toast = link.toast_visibility().is_visible();

    let handle_copy = move |_| {
        let link = link.clone();
        spawn(async move {
            // Failures are already logged; nothing is shown to the user
            let _ = link.copy_to_clipboard().await;
        });
    };

    rsx! {
        div {
            class: "relative flex items-center",

            div {
                class: "flex-1 bg-blue-700 rounded-l px-3 py-1 overflow-hidden flex items-center",
                div {
                    class: "flex-1 text-white text-sm truncate font-mono",
                    title: "{full_address}",
                    "{display_address}"
                    span {
                        class: "text-blue-300",
                        "{display_params}"
                    }
                }
            }

            button {
                class: "px-3 py-1 bg-blue-800 text-white rounded-r hover:bg-blue-900 focus:outline-none focus:ring-2 focus:ring-blue-500 text-sm flex items-center border-l border-blue-600",
                title: "Copy full URL to clipboard",
                onclick: handle_copy,
                CopyIcon { class: "w-4 h-4 mr-1" }
                "Copy"
            }

            if show_toast {
                div {
                    class: "absolute top-full mt-2 right-0 bg-gray-800 text-white px-4 py-2 rounded shadow-lg text-sm whitespace-nowrap z-50 flex items-center gap-2",
                    CheckIcon { class: "w-4 h-4 text-green-400" }
                    "Link copied to clipboard!"
                }
            }
        }
    }
}
