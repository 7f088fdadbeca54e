//! Cycle through every registered theme and print the generated CSS.
//!
//! ```text
//! cargo run -p hexmon --example theme_cycle -- [config.toml]
//! ```
//!
//! Without an argument the settings are kept in memory. Set `RUST_LOG=debug`
//! to watch the theme and storage events.

use hexmon::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> hexmon::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let session = match std::env::args().nth(1) {
        Some(path) => ThemeSession::open(&AppConfig::load(path)?)?,
        None => ThemeSession::in_memory(&AppConfig::default())?,
    };

    session.manager().theme_changed().connect(|theme| {
        println!("/* switched to {} */", theme.name());
    });

    let started = session.start()?;
    println!("{}", session.css());

    for _ in 1..session.manager().registry().len() {
        session.manager().toggle_theme()?;
        println!("{}", session.css());
    }

    let last = session.manager().toggle_theme()?;
    println!("/* cycled back to {} from {} */", last.name(), started.name());
    Ok(())
}
