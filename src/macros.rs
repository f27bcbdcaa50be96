//! Small crate-wide convenience macros.

/// Log to the browser console in debug builds only.
///
/// Prints nothing in release builds and on non-wasm targets, so native
/// unit tests never reach into JS imports.
///
/// ```rust,ignore
/// debug_log!("dispatching {}", action.name());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(all(debug_assertions, target_arch = "wasm32"))]
        web_sys::console::log_1(&format!($($arg)*).into());
        #[cfg(not(all(debug_assertions, target_arch = "wasm32")))]
        let _ = format!($($arg)*);
    }};
}
