//! Validate the console configuration without starting the server.

use retail_ops_admin::config::AdminConfig;

use super::{CommandError, emit};

/// Summarize a loaded configuration. The TLS key is never printed.
#[must_use]
pub fn summary(config: &AdminConfig) -> String {
    [
        format!("listen:      {}", config.socket_addr()),
        format!("store name:  {}", config.store_name),
        format!("static dir:  {}", config.static_dir.display()),
        format!("log format:  {:?}", config.log_format),
        format!(
            "sentry:      {}",
            if config.sentry_dsn.is_some() { "enabled" } else { "disabled" }
        ),
        format!(
            "tls:         {}",
            if config.tls.is_some() { "enabled" } else { "disabled" }
        ),
    ]
    .join("\n")
}

/// Run the `check-config` command.
///
/// # Errors
///
/// Returns an error if any environment variable is invalid.
pub fn run() -> Result<(), CommandError> {
    dotenvy::dotenv().ok();

    let config = AdminConfig::from_env()?;
    tracing::info!("Configuration is valid");
    emit(&summary(&config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_defaults() {
        let text = summary(&AdminConfig::default());
        assert!(text.contains("listen:      127.0.0.1:3001"));
        assert!(text.contains("store name:  Retail Operations"));
        assert!(text.contains("tls:         disabled"));
    }
}
