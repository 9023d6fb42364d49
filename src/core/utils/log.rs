//! Console logging macros
//!
//! On wasm32 these forward to `web_sys::console`; on native targets they
//! compile away (the arguments are still type-checked).
//!
//! Usage:
//! ```rust
//! use clockfall_engine::console_warn;
//!
//! let idx = 3;
//! console_warn!("letter {} recovered", idx);
//! ```

/// Log an info line to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = ::std::format!($($arg)*);
            }
        }
    }};
}

/// Log a warning to the browser console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = ::std::format!($($arg)*);
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_are_noops_on_native() {
        let n = 2;
        console_log!("frame {}", n);
        console_warn!("letter {} recovered", n);
    }
}
