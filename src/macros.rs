//! Logging macros with call-site capture
//!
//! These macros provide `format!`-style interpolation and capture the file,
//! line, and enclosing function of the call site. Formatting is skipped
//! entirely when the level gate rejects the call.
//!
//! # Examples
//!
//! ```
//! use ctxlog::prelude::*;
//! use ctxlog::info;
//!
//! let logger = Logger::builder().appender(ConsoleAppender::new()).build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Path of the enclosing function, captured via the type name of a local
/// item. Yields e.g. `my_app::handlers::login`.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__f);
        name.trim_end_matches("::__f")
    }};
}

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use ctxlog::prelude::*;
/// # let logger = Logger::builder().build();
/// use ctxlog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log_with_site(
                level,
                format!($($arg)+),
                $crate::CallSite::new(file!(), line!(), $crate::__function_path!()),
            );
        }
    }};
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use ctxlog::prelude::*;
/// # let logger = Logger::builder().min_level(LogLevel::Debug).build();
/// use ctxlog::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use ctxlog::prelude::*;
/// # let logger = Logger::builder().build();
/// use ctxlog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use ctxlog::prelude::*;
/// # let logger = Logger::builder().build();
/// use ctxlog::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use ctxlog::prelude::*;
/// # let logger = Logger::builder().build();
/// use ctxlog::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, LogLevel};

    #[test]
    fn test_log_macro() {
        let logger = Logger::builder().build();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
    }

    #[test]
    fn test_level_macros() {
        let logger = Logger::builder().min_level(LogLevel::Debug).build();
        debug!(logger, "Debug message");
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
    }

    #[test]
    fn test_function_path_names_enclosing_function() {
        let path = __function_path!();
        assert!(
            path.ends_with("test_function_path_names_enclosing_function"),
            "got {}",
            path
        );
    }
}
