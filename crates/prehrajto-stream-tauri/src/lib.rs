//! Prehraj.to Stream Resolver Tauri Integration
//!
//! Provides a Tauri plugin exposing the stream resolver to the frontend.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(prehrajto_stream_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! // Search listings
//! const results = await invoke('plugin:prehrajto-stream|search_streams', {
//!   query: 'doctor who', email: '', password: '', limit: 10
//! });
//!
//! // Resolve a query into a playable stream
//! const stream = await invoke('plugin:prehrajto-stream|resolve_by_query', {
//!   query: 'doctor who s07e05', email: 'user@example.com', password: 'secret'
//! });
//! ```
//!
//! Credentials are arguments of every command, never plugin state: two
//! in-flight commands with different accounts cannot interfere.

use std::sync::Arc;

use prehrajto_stream::StreamResolver;
use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

mod commands;

/// Shared resolver handle
///
/// The resolver holds only immutable configuration, so commands share it
/// through a plain `Arc` without a lock.
pub struct ResolverState {
    pub(crate) resolver: Arc<StreamResolver>,
}

impl ResolverState {
    pub fn new() -> Self {
        Self {
            resolver: Arc::new(StreamResolver::new()),
        }
    }
}

impl Default for ResolverState {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the prehrajto-stream plugin
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("prehrajto-stream")
        .invoke_handler(tauri::generate_handler![
            commands::search_streams,
            commands::resolve_direct,
            commands::resolve_by_query
        ])
        .setup(|app, _api| {
            // Safe to call when a subscriber is already installed
            let _ = tracing_subscriber::fmt::try_init();
            app.manage(ResolverState::new());
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use prehrajto_stream::{SearchResult, StreamDescriptor, SubtitleTrack};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_state_creation() {
        let state = ResolverState::new();
        // Two clones of the handle point at the same resolver
        let other = Arc::clone(&state.resolver);
        assert_eq!(Arc::strong_count(&other), 2);
    }
}
