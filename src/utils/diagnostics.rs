//! Diagnostic channel.
//!
//! In the browser this is the developer console. Native builds (the test
//! suite) route the same calls through `tracing` instead, since the console
//! bindings only exist on `wasm32`.

use crate::models::error::AppError;

/// Logs a failure together with the operation that produced it.
pub fn error(context: &str, error: &AppError) {
    #[cfg(target_arch = "wasm32")]
    gloo::console::error!(&format!("{context}: {error}"));

    #[cfg(not(target_arch = "wasm32"))]
    tracing::error!(error = %error, "{context}");
}

pub fn info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    gloo::console::log!(message);

    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("{message}");
}
