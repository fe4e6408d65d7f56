use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct LoggerConfig {
    /// Max log level for trellis. Allows trace, debug, info, warn, or error,
    /// or any `EnvFilter` directive.
    ///
    /// `RUST_LOG` takes precedence when set.
    ///
    /// See also:
    /// https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives
    ///
    /// default: "info"
    #[serde(default = "default_level")]
    pub level: String,

    // pretty, compact, json
    #[serde(default = "default_format")]
    pub format: String,

    /// Output logs with ANSI colours.
    #[serde(default = "default_true")]
    pub ansi_colors: bool,

    /// Configures the span events which will be outputted with the log.
    /// Allows none, new, enter, exit, close, active, or full.
    ///
    /// default: "none"
    #[serde(default = "default_span_events")]
    pub span_events: String,

    /// Toggles the display of ThreadId in tracing log output.
    ///
    /// default: false
    #[serde(default)]
    pub thread_ids: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            ansi_colors: true,
            span_events: default_span_events(),
            thread_ids: false,
        }
    }
}

/// do debug logging by default for debug builds
#[must_use]
pub fn default_level() -> String {
    cfg!(debug_assertions)
        .then_some("debug")
        .unwrap_or("info")
        .to_owned()
}

#[must_use]
pub fn default_format() -> String {
    "pretty".to_owned()
}

#[must_use]
pub fn default_span_events() -> String {
    "none".into()
}

fn default_true() -> bool {
    true
}
