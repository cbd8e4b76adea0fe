//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::toast::Toaster;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload lists from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload lists from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Connection settings
    pub config: RwSignal<ApiConfig>,
    pub toaster: Toaster,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        config: RwSignal<ApiConfig>,
        toaster: Toaster,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config,
            toaster,
        }
    }

    /// Trigger a full reload of the current list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Client for the current settings (untracked)
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config.get_untracked())
    }

    pub fn is_authenticated(&self) -> bool {
        self.config.with(ApiConfig::is_authenticated)
    }

    /// Report a mutation: success toasts and reloads, failure logs and toasts a generic message
    pub fn finish<T>(&self, result: Result<T, ApiError>, success: impl Into<String>, failure: &str) -> Option<T> {
        match result {
            Ok(value) => {
                self.toaster.success(success);
                self.reload();
                Some(value)
            }
            Err(e) => {
                log::warn!("{}: {}", failure, e);
                self.toaster.error(failure);
                None
            }
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
