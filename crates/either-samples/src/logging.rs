// Purpose: Tracing subscriber setup for the sample binary

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    EnvFilter, Registry,
};

//-----------------------------------------------------------------------------
// Tracing Initialization
//-----------------------------------------------------------------------------

/// Initializes the tracing subscriber with configurable log level and output format.
///
/// # Arguments
///
/// * `log_level`: An optional string slice specifying the log level.
///                Defaults to "info". `RUST_LOG` takes precedence when set.
/// * `json_output`: Whether to output logs in JSON format. Defaults to `false`.
pub fn init_tracing(log_level: Option<&str>, json_output: Option<bool>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level.unwrap_or("info")))?;

    let subscriber = Registry::default().with(env_filter);

    if json_output.unwrap_or(false) {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_current_span(true);
        tracing::subscriber::set_global_default(subscriber.with(json_layer))?;
    } else {
        let fmt_layer = fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);
        tracing::subscriber::set_global_default(subscriber.with(fmt_layer))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    #[test]
    fn test_tracing_init_is_usable() {
        INIT.call_once(|| {
            let _ = init_tracing(Some("debug"), None);
        });
        let e: either_core::Either<&str, i32> = either_core::right(1);
        let e = e.trace("logging-test");
        assert!(e.is_right());
    }
}
