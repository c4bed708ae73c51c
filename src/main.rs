//! Shelfkeeper - library catalog and lending desk
//!
//! Loads the configured book list and runs a fixed reservation and lending
//! round against it.

use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelfkeeper::{
    config::{AppConfig, LogFormat, OutputFormat},
    import::DelimitedFile,
    models::Book,
    CatalogService,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config);

    tracing::info!("Starting Shelfkeeper v{}", env!("CARGO_PKG_VERSION"));

    let mut catalog = CatalogService::new();
    catalog.load(&mut DelimitedFile::new(&config.catalog.path));

    let out = Printer::new(config.output.format);

    for title in &config.demo.reservations {
        catalog.reserve_book(title.as_str());
    }
    out.reservations(&catalog.reservations());

    for _ in 0..config.demo.lend_rounds {
        out.outcome(&catalog.lend_book())?;
    }
    out.reservations(&catalog.reservations());

    out.outcome(&catalog.return_book())?;
    out.outcome(&catalog.lend_book())?;
    out.reservations(&catalog.reservations());

    out.inventory(&catalog.list_books())?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("shelfkeeper={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

/// Writes demo results to stdout as plain text or one JSON document per line
struct Printer {
    format: OutputFormat,
}

impl Printer {
    fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn outcome<T: Serialize + std::fmt::Display>(&self, outcome: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => println!("{}", outcome),
            OutputFormat::Json => println!("{}", serde_json::to_string(outcome)?),
        }
        Ok(())
    }

    fn reservations(&self, titles: &[String]) {
        match self.format {
            OutputFormat::Text => println!("\nCurrent reservations: {}\n", titles.join(" ")),
            OutputFormat::Json => println!("{}", serde_json::json!({ "reservations": titles })),
        }
    }

    fn inventory(&self, books: &[Book]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => {
                println!("Current book inventory:");
                for book in books {
                    println!("{}", book);
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string(books)?),
        }
        Ok(())
    }
}
