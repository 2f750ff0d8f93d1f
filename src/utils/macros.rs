/// MACROS
/// Cross-platform console output for banner messages.
/// Prints to stdout natively and to the browser console on the web, where stdout is not visible.
#[macro_export]
macro_rules! log {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        ::web_sys::console::log_1(&format!($($t)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        println!($($t)*);
    }};
}
