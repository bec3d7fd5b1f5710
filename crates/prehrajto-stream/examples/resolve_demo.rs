//! Resolve a stream from the command line
//!
//! Usage: cargo run --example resolve_demo -- "doctor who s07e05"
//!
//! Credentials are read from PREHRAJTO_EMAIL / PREHRAJTO_PASSWORD if set;
//! without them the resolution runs anonymously.

use prehrajto_stream::{Credentials, StreamResolver};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "doctor who".to_string());

    let credentials = Credentials::new(
        std::env::var("PREHRAJTO_EMAIL").unwrap_or_default(),
        std::env::var("PREHRAJTO_PASSWORD").unwrap_or_default(),
    );

    let resolver = StreamResolver::new();

    println!("Searching for: {}", query);
    let results = resolver.search(&query, &credentials, 5).await?;
    for result in &results {
        println!("  {} -> {}", result.title, result.page_url);
    }

    match resolver.resolve_by_query(&query, &credentials).await? {
        Some(stream) => {
            println!("\n{}", stream.title);
            println!("Media URL: {}", stream.media_url);
            if let Some(subtitle) = stream.subtitle {
                println!("Subtitles ({}): {}", subtitle.lang, subtitle.url);
            }
        }
        None => println!("\nNo stream found."),
    }

    Ok(())
}
