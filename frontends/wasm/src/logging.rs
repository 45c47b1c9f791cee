//! Console logging.
//!
//! The bridge logs through `tracing`; with its `log` feature and no tracing
//! subscriber installed, events are forwarded to the `log` facade, which
//! `console_log` prints to the devtools console.

/// Installs the console logger. Safe to call more than once.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };

    if console_log::init_with_level(level).is_err() {
        tracing::debug!("console logger already installed");
    }
}
