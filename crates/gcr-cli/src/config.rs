//! CLI configuration.
//!
//! Read once at startup from environment variables; command-line flags take
//! precedence over anything set here.

use std::str::FromStr;

/// How JSON output is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputStyle {
    /// Indented, one field per line.
    #[default]
    Pretty,
    /// Single line.
    Compact,
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `tracing` filter directive (e.g. `debug`, `gcr_models=trace`).
    pub log_filter: String,
    /// JSON layout.
    pub output: OutputStyle,
}

impl CliConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable     | Default  | Description                               |
    /// |--------------|----------|-------------------------------------------|
    /// | `GCR_LOG`    | `warn`   | Log filter; falls back to `RUST_LOG`      |
    /// | `GCR_OUTPUT` | `pretty` | JSON layout, `pretty` or `compact`        |
    ///
    /// Unrecognised `GCR_OUTPUT` values fall back to `pretty`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let log_filter = non_blank("GCR_LOG")
            .or_else(|| non_blank("RUST_LOG"))
            .unwrap_or_else(|| "warn".to_string());

        let output = lookup("GCR_OUTPUT")
            .and_then(|v| OutputStyle::from_str(v.trim()).ok())
            .unwrap_or_default();

        Self { log_filter, output }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.log_filter, "warn");
        assert_eq!(cfg.output, OutputStyle::Pretty);
    }

    #[test]
    fn gcr_log_wins_over_rust_log() {
        assert_eq!(config(&[("RUST_LOG", "info")]).log_filter, "info");
        assert_eq!(
            config(&[("RUST_LOG", "info"), ("GCR_LOG", "gcr_models=debug")]).log_filter,
            "gcr_models=debug"
        );
        assert_eq!(config(&[("GCR_LOG", " ")]).log_filter, "warn");
    }

    #[test]
    fn blank_gcr_log_falls_back_to_rust_log() {
        assert_eq!(
            config(&[("GCR_LOG", ""), ("RUST_LOG", "debug")]).log_filter,
            "debug"
        );
        assert_eq!(config(&[("GCR_LOG", ""), ("RUST_LOG", "  ")]).log_filter, "warn");
    }

    #[test]
    fn output_style_parsing() {
        assert_eq!(config(&[("GCR_OUTPUT", "compact")]).output, OutputStyle::Compact);
        assert_eq!(config(&[("GCR_OUTPUT", "COMPACT")]).output, OutputStyle::Compact);
        assert_eq!(config(&[("GCR_OUTPUT", "yaml")]).output, OutputStyle::Pretty);
        assert_eq!(OutputStyle::Compact.to_string(), "compact");
    }
}
