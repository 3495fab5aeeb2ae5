use std::sync::atomic::AtomicU8;

use crate::{bindings::LogLevel, host::Host};

/// Name of this module, as given in every log record.
pub const LOG_SOURCE: &str = "oEmbed";

static MAX_LOG_LEVEL: AtomicU8 = AtomicU8::new(2);

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum LoggerLevel {
    None = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

/// Level-filtered logger.
///
/// Every log is a record made of a level, the name of the module emitting it
/// (`source`) and a message, handed to the `Host` which owns the actual console.
pub struct Logger {}

impl Logger {
    pub fn set_logger_level(new_level: LoggerLevel) {
        MAX_LOG_LEVEL.store(new_level as u8, std::sync::atomic::Ordering::Relaxed);
    }

    fn is_enabled(level: LoggerLevel) -> bool {
        MAX_LOG_LEVEL.load(std::sync::atomic::Ordering::Relaxed) >= level as u8
    }

    pub fn info(host: &dyn Host, source: &str, text: &str) {
        if Self::is_enabled(LoggerLevel::Info) {
            host.log(LogLevel::Info, source, text);
        }
    }

    pub fn error(host: &dyn Host, source: &str, text: &str) {
        if Self::is_enabled(LoggerLevel::Error) {
            host.log(LogLevel::Error, source, text);
        }
    }

    pub fn warn(host: &dyn Host, source: &str, text: &str) {
        if Self::is_enabled(LoggerLevel::Warn) {
            host.log(LogLevel::Warn, source, text);
        }
    }

    pub fn debug(host: &dyn Host, source: &str, text: &str) {
        if Self::is_enabled(LoggerLevel::Debug) {
            host.log(LogLevel::Debug, source, text);
        }
    }

    pub fn lazy_info(host: &dyn Host, source: &str, func: &dyn Fn() -> String) {
        if Self::is_enabled(LoggerLevel::Info) {
            host.log(LogLevel::Info, source, &func());
        }
    }

    pub fn lazy_debug(host: &dyn Host, source: &str, func: &dyn Fn() -> String) {
        if Self::is_enabled(LoggerLevel::Debug) {
            host.log(LogLevel::Debug, source, &func());
        }
    }
}
