//! Tauri commands for the prehraj.to stream resolver
//!
//! Thin adapters over [`prehrajto_stream::StreamResolver`]. Credentials
//! arrive as command arguments (user-supplied configuration lives in the
//! frontend) and errors cross the boundary as strings.

use prehrajto_stream::{Credentials, SearchResult, StreamDescriptor};
use tauri::State;

use crate::ResolverState;

fn credentials_from(email: Option<String>, password: Option<String>) -> Credentials {
    Credentials::new(email.unwrap_or_default(), password.unwrap_or_default())
}

/// Search prehraj.to listings
///
/// Returns at most `limit` results; empty credentials search anonymously.
#[tauri::command]
pub async fn search_streams(
    state: State<'_, ResolverState>,
    query: String,
    email: Option<String>,
    password: Option<String>,
    limit: usize,
) -> Result<Vec<SearchResult>, String> {
    let credentials = credentials_from(email, password);
    state
        .resolver
        .search(&query, &credentials, limit)
        .await
        .map_err(|e| e.to_string())
}

/// Resolve a known video page into a playable stream
///
/// Returns `null` when no media URL can be extracted.
#[tauri::command]
pub async fn resolve_direct(
    state: State<'_, ResolverState>,
    page_url: String,
    email: Option<String>,
    password: Option<String>,
) -> Result<Option<StreamDescriptor>, String> {
    let credentials = credentials_from(email, password);
    state
        .resolver
        .resolve_direct(&page_url, &credentials)
        .await
        .map_err(|e| e.to_string())
}

/// Resolve a free-text query into a playable stream
///
/// Picks the first search result; returns `null` when nothing matches.
#[tauri::command]
pub async fn resolve_by_query(
    state: State<'_, ResolverState>,
    query: String,
    email: Option<String>,
    password: Option<String>,
) -> Result<Option<StreamDescriptor>, String> {
    let credentials = credentials_from(email, password);
    state
        .resolver
        .resolve_by_query(&query, &credentials)
        .await
        .map_err(|e| e.to_string())
}
