#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod hooks;
mod services;
mod utils;

use components::ShareableLink;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting linkshare");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        header {
            class: "bg-blue-600 px-4 py-2 flex items-center gap-4",
            h1 {
                class: "text-white font-semibold whitespace-nowrap",
                "Storage Browser"
            }
            div {
                class: "flex-1 min-w-0",
                ShareableLink {}
            }
        }
    }
}
