//! Opt-in diagnostics for C hosts.
//!
//! The library only emits `tracing` events. A host that has no subscriber
//! of its own calls [`fuka_log_init`] once to print them to stderr, filtered
//! by the `FUKA_LOG` environment variable (`EnvFilter` syntax, default
//! `info`).

use std::sync::OnceLock;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::status::FukaStatus;

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FUKA_LOG";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a stderr subscriber for the library's log events.
///
/// Returns `AlreadyInitialized` on every call after the first, and also
/// when the process already has a global subscriber.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fuka_log_init() -> i32 {
    ffi_guard!({
        if INITIALIZED.set(()).is_err() {
            return FukaStatus::AlreadyInitialized as i32;
        }
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_ansi(false);
        match Registry::default().with(filter()).with(fmt_layer).try_init() {
            Ok(()) => {
                tracing::debug!(filter = LOG_ENV, "logging initialized");
                FukaStatus::Ok as i32
            }
            Err(_) => FukaStatus::AlreadyInitialized as i32,
        }
    })
}
