//! Fetch a URL and print the response status line.
//!
//! Usage: `cargo run --example fetch -- https://www.rust-lang.org/`

use net_core::Http;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let uri = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://www.rust-lang.org/".to_string());

    let response = Http::default().get(uri.as_str())?;
    println!("{} {}", response.status, response.reason);

    Ok(())
}
