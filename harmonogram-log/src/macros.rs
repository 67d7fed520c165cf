//! Logging macros

/// Log at Trace level
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)*)
    };
}

/// Log at Debug level
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)*)
    };
}

/// Log at Info level
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)*)
    };
}

/// Log at Warn level
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)*)
    };
}

/// Log at Error level
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)*)
    };
}

/// Shared implementation of the level macros
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {{
        // the message is only formatted when the level is enabled
        if $logger.is_enabled($level) {
            let message = ::std::format!($($arg)*);
            $logger.log($level, module_path!(), message);
        }
    }};
}
