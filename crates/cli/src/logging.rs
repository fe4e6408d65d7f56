use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::config::LoggerConfig;

/// Installs the global subscriber. Logs go to stderr so stdout stays clean
/// for command output.
pub fn init(conf: &LoggerConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&conf.level));
    let builder = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_ansi(conf.ansi_colors)
        .with_thread_ids(conf.thread_ids)
        .with_span_events(span_events(&conf.span_events));

    let result = match &*conf.format {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().without_time().try_init(),
        _ => builder.pretty().try_init(),
    };
    if let Err(e) = result {
        eprintln!("failed to install logger: {e}");
    }
}

fn span_events(name: &str) -> FmtSpan {
    match name {
        "new" => FmtSpan::NEW,
        "enter" => FmtSpan::ENTER,
        "exit" => FmtSpan::EXIT,
        "close" => FmtSpan::CLOSE,
        "active" => FmtSpan::ACTIVE,
        "full" => FmtSpan::FULL,
        _ => FmtSpan::NONE,
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::span_events;

    #[test]
    fn span_event_names() {
        assert_eq!(span_events("close"), FmtSpan::CLOSE);
        assert_eq!(span_events("full"), FmtSpan::FULL);
        assert_eq!(span_events("none"), FmtSpan::NONE);
        assert_eq!(span_events("bogus"), FmtSpan::NONE);
    }
}
