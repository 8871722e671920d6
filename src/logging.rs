//! Tracing subscriber setup shared by the binary and the terminal UI.

use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

/// `RUST_LOG` if set, otherwise `fallback`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Formatting subscriber writing to `writer`.
///
/// Not installed here: callers pick `set_global_default` or a scoped
/// `with_default`.
pub fn subscriber<W>(
    writer: W,
    filter: EnvFilter,
    ansi: bool,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .finish()
}
