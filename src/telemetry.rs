use std::io;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

/// Install the global subscriber: this crate at `level`, everything else at WARN, to stderr.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing(level: Level) {
    let targets = filter::Targets::new()
        .with_target("festival_map", level)
        .with_target("cli", level)
        .with_target("http", level)
        .with_default(Level::WARN);

    let _ = tracing_subscriber::registry()
        .with(targets)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
}
