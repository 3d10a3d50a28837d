use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Scorer events at `info` (debug when verbose); other crates only warn.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "cricket_scorer=debug,warn"
    } else {
        "cricket_scorer=info,warn"
    }
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Compact human-readable lines for the interactive console.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

/// One JSON object per event with ball fields (score, overs, striker)
/// lifted to the top level, for feeding a live scoreboard.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_follows_verbosity() {
        assert_eq!(default_directive(false), "cricket_scorer=info,warn");
        assert_eq!(default_directive(true), "cricket_scorer=debug,warn");
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }
}
