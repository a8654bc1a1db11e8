//! Console context: the API base URL every screen builds its client from.

use dioxus::prelude::*;

use crate::api_client::ApiClient;
use crate::config::ConsoleConfig;

/// Context provided to the app
#[derive(Clone, Copy, Debug)]
pub struct ConsoleContext {
    pub api_base: Signal<String>,
}

/// Provider component that sets up the console context
#[component]
pub fn ConsoleProvider(children: Element) -> Element {
    let api_base = use_signal(|| ConsoleConfig::load().api_base);

    use_context_provider(|| ConsoleContext { api_base });

    children
}

impl ConsoleContext {
    /// Create an API client for the configured backend
    pub fn client(&self) -> ApiClient {
        ApiClient::new().with_base_url(self.api_base.read().clone())
    }
}
