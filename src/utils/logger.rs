use std::{fmt, sync::Arc};

/// Upper bound, in bytes, of a single message handed to a log sink.
pub const MAX_MESSAGE_SIZE: usize = 1024;

/// A log sink receiving one formatted message per call.
pub type LogSink = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Logging {
    /// Info, warnings and errors are forwarded to the sinks.
    #[default]
    Default,
    /// Like [Logging::Default], plus verbose/debug output of the host libraries.
    All,
    /// Nothing is forwarded.
    None,
}

/// The three leveled sinks of the platform.
///
/// Each level is a no-op unless logging is enabled and a sink for that
/// level is registered.
#[derive(Clone, Default)]
pub struct Logger {
    level: Logging,
    info: Option<LogSink>,
    warn: Option<LogSink>,
    error: Option<LogSink>,
}

impl Logger {
    pub fn new(level: Logging) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    pub fn with_info(mut self, sink: Option<LogSink>) -> Self {
        self.info = sink;
        self
    }

    pub fn with_warn(mut self, sink: Option<LogSink>) -> Self {
        self.warn = sink;
        self
    }

    pub fn with_error(mut self, sink: Option<LogSink>) -> Self {
        self.error = sink;
        self
    }

    pub fn level(&self) -> Logging {
        self.level
    }

    pub(crate) fn set_level(&mut self, level: Logging) {
        self.level = level;
    }

    pub(crate) fn set_info(&mut self, sink: LogSink) {
        self.info = Some(sink);
    }

    pub(crate) fn set_warn(&mut self, sink: LogSink) {
        self.warn = Some(sink);
    }

    pub(crate) fn set_error(&mut self, sink: LogSink) {
        self.error = Some(sink);
    }

    /// Returns true if at least one sink is registered.
    pub fn has_sinks(&self) -> bool {
        self.info.is_some() || self.warn.is_some() || self.error.is_some()
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(self.info.as_ref(), args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.emit(self.warn.as_ref(), args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(self.error.as_ref(), args);
    }

    fn emit(&self, sink: Option<&LogSink>, args: fmt::Arguments<'_>) {
        if self.level == Logging::None {
            return;
        }

        let Some(sink) = sink else {
            return;
        };

        let mut message = fmt::format(args);
        truncate_message(&mut message, MAX_MESSAGE_SIZE);
        sink(&message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("info", &self.info.is_some())
            .field("warn", &self.warn.is_some())
            .field("error", &self.error.is_some())
            .finish()
    }
}

pub(crate) fn truncate_message(message: &mut String, max: usize) {
    if message.len() <= max {
        return;
    }

    let mut end = max;
    while !message.is_char_boundary(end) {
        end -= 1;
    }

    message.truncate(end);
}

/// Forwards records of the `log` facade (emitted by the host libraries)
/// into the platform sinks.
///
/// Trace and debug records are only forwarded with [Logging::All].
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Installs the bridge as the process-wide `log` logger.
    ///
    /// Fails if another logger was installed before, which can only happen
    /// once per process.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let max_level = match self.logger.level() {
            Logging::All => log::LevelFilter::Trace,
            Logging::Default => log::LevelFilter::Info,
            Logging::None => log::LevelFilter::Off,
        };

        log::set_boxed_logger(Box::new(self)).map(|()| log::set_max_level(max_level))
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        match metadata.level() {
            log::Level::Trace | log::Level::Debug => self.logger.level() == Logging::All,
            _ => self.logger.level() != Logging::None,
        }
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        match record.level() {
            log::Level::Error => self.logger.error(*record.args()),
            log::Level::Warn => self.logger.warn(*record.args()),
            _ => self.logger.info(*record.args()),
        }
    }

    fn flush(&self) {}
}

#[macro_export]
#[doc(hidden)]
macro_rules! platform_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! platform_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format_args!($($arg)*))
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! platform_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}
