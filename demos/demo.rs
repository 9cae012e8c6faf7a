//! Lists abonents, their forwarding state and yesterday's calls.
//!
//! ```text
//! BEELINE_PBX_TOKEN=... RUST_LOG=beeline_portal=debug cargo run --example demo
//! ```

use beeline_portal::{Client, StatisticsQuery};
use chrono::{Duration, Utc};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let token = std::env::var("BEELINE_PBX_TOKEN")?;
    let client = Client::new(token)?;

    let now = Utc::now();
    for abonent in client.get_abonents()? {
        println!(
            "{} {} ({})",
            abonent.first_name,
            abonent.last_name,
            abonent.extension.as_deref().unwrap_or("-")
        );

        match client.get_cfb(&abonent.user_id) {
            Ok(cfb) => println!("  CFB: {}", cfb.status),
            Err(err) => println!("  CFB unavailable: {} {}", err.code(), err.description()),
        }

        let query = StatisticsQuery::new(&abonent.user_id, now - Duration::days(1), now);
        for call in client.get_statistics(&query)? {
            println!(
                "  {} {} {} {}s",
                call.start_date,
                call.direction,
                call.phone,
                call.duration / 1000
            );
        }
    }

    Ok(())
}
