/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Maps a `LOGLEVEL` value to a tracing level, defaulting to `INFO`
#[must_use]
pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs the global tracing subscriber
///
/// The level comes from the `LOGLEVEL` environment variable. Logs go to
/// stderr so that stdout only carries the rendered API response. Calling this
/// more than once is a no-op.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_log_level(&env::var("LOGLEVEL").unwrap_or_else(|_| "INFO".into()));

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("global tracing subscriber already set");
            return;
        }
        tracing::debug!("Log level set to: {}", level);
    });
}
