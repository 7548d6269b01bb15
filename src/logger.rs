//! Process-wide logger setup

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

/// Guards against configuring the global logger twice
static INIT: Once = Once::new();

/// Default filters: `Info` globally, `Debug` for this crate so table
/// construction and distribution summaries are shown
fn default_builder() -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .filter_module("chainhash", LevelFilter::Debug)
        .format_timestamp_millis();
    builder
}

/// Installs an `env_logger` logger: `Info` globally, `Debug` for `chainhash`.
///
/// `RUST_LOG` overrides the defaults, e.g. `RUST_LOG=chainhash=trace` shows
/// every put and get. Calling this more than once is harmless.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = default_builder();
        builder.parse_default_env();

        if builder.try_init().is_err() {
            log::debug!("a global logger was already installed");
        }
    });
}
