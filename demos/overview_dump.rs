//! Dump a newsgroup's overview data to JSON
//!
//! Run with: cargo run --example overview_dump

use nntp_overview::{NntpClient, ServerConfig};
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::new(
        std::env::var("NNTP_HOST").unwrap_or_else(|_| "news.example.org".to_string()),
        std::env::var("NNTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(119),
    );

    println!("Connecting to {}...", config.addr());
    let mut client = NntpClient::connect(config).await?;
    client.mode_reader().await?;

    let name = std::env::var("NNTP_GROUP").unwrap_or_else(|_| "comp.lang.rust".to_string());
    let group = client.select_group(&name).await?;
    println!(
        "Selected group '{}': {} articles ({}-{}), overview fields: {:?}",
        group.name, group.count, group.first, group.last, group.overview_fmt
    );

    let start_xover = Instant::now();
    let entries = client
        .xover_with_progress(&group, |p| {
            print!("\r{} / {}", p.decoded, p.expected);
        })
        .await?;
    println!();
    println!("XOVER took {:?}", start_xover.elapsed());

    let start_encode = Instant::now();
    let headers: Vec<_> = entries.iter().map(|e| &e.headers).collect();
    let json = serde_json::to_string_pretty(&headers)?;
    println!("Encoding took {:?}", start_encode.elapsed());

    let start_write = Instant::now();
    std::fs::write("out.json", &json)?;
    println!("Writing took {:?}", start_write.elapsed());
    println!("File is {} bytes", json.len());

    client.quit().await?;
    Ok(())
}
