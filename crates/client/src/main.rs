//! Console client - Main entry point

#![allow(non_snake_case)]

use console_client::{console_session::ConsoleProvider, routes::Route};
use dioxus::prelude::*;

// Assets
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("console_client=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Console" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ConsoleProvider {
            Router::<Route> {}
        }
    }
}
