//! # DielineKit
//!
//! Parametric cut/fold dieline generator for cardboard containers.
//!
//! The workspace is organized as:
//!
//! 1. **dielinekit-engine** - geometry primitives, coordinate planner,
//!    tab/notch generator, the net builders, and the DXF drawing sink
//! 2. **dielinekit** - this thin binary: logging setup, command-line input
//!    gathering and validation, and the hand-off to the engine

pub use dielinekit_engine as engine;

/// Initialize logging with the default configuration.
///
/// Sets up structured logging with console output and `RUST_LOG`
/// environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
