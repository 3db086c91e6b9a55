pub mod breakdown;
pub mod config;
pub mod error;
pub mod fulfillment;
pub mod money;
pub mod presentation;
pub mod render;

pub use breakdown::{compute_breakdown, PriceBreakdownInput, PriceBreakdownOutput, PriceFormatter};
pub use error::BreakdownError;
pub use fulfillment::Fulfillment;
pub use money::{format_currency, CurrencyFormat};
pub use presentation::BreakdownView;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// RUST_LOG takes precedence over the configured level. Output goes to
/// stderr so stdout only carries the rendered breakdown.
///
/// Note: This function can only be called once.
pub fn init_tracing(logging: &crate::config::LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
