//! Log setup shared by the binaries.
//!
//! The filter comes from `RUST_LOG` and falls back to [`DEFAULT_LOG_DIRECTIVE`] when the
//! variable is unset or empty. Output goes through a [`HeldLogWriter`], which can buffer
//! records while the terminal window owns the screen and flush them once it is closed.

use std::{
    env,
    io::{self, Write},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing_subscriber::{
    EnvFilter,
    filter::{Directive, ParseError},
    fmt::{self, MakeWriter},
    prelude::*,
};

/// Directive used when `RUST_LOG` is unset or empty.
pub const DEFAULT_LOG_DIRECTIVE: &str = "civ_prototype=info";

/// Builds the filter for the directives in `rust_log`.
///
/// An empty string gives [`DEFAULT_LOG_DIRECTIVE`]. Directives the user sets for this crate are kept as they are.
pub fn env_filter(rust_log: &str) -> Result<EnvFilter, ParseError> {
    let default_directive: Directive = DEFAULT_LOG_DIRECTIVE.parse()?;
    EnvFilter::builder()
        .with_default_directive(default_directive)
        .parse(rust_log.trim())
}

/// Installs the global subscriber: `fmt` output to `log_writer`, filtered by `RUST_LOG`.
pub fn init_logging(log_writer: HeldLogWriter) -> Result<(), ParseError> {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(log_writer))
        .with(env_filter(&rust_log)?)
        .init();
    Ok(())
}

#[derive(Debug, Default)]
struct HeldLogs {
    holding: bool,
    buffer: Vec<u8>,
}

/// Writes log output to stderr, or keeps it in memory while held.
///
/// Clones share the same state, so the handle given to the subscriber and the one kept
/// by the caller hold and release together.
#[derive(Debug, Clone, Default)]
pub struct HeldLogWriter {
    state: Arc<Mutex<HeldLogs>>,
}

impl HeldLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HeldLogs> {
        // A panic while logging leaves the buffer usable.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts buffering log output instead of writing it to stderr.
    pub fn hold(&self) {
        self.lock().holding = true;
    }

    pub fn is_held(&self) -> bool {
        self.lock().holding
    }

    /// Stops buffering and writes everything buffered so far to `out`.
    pub fn release_into(&self, out: &mut impl Write) -> io::Result<()> {
        let buffer = {
            let mut held_logs = self.lock();
            held_logs.holding = false;
            std::mem::take(&mut held_logs.buffer)
        };
        out.write_all(&buffer)?;
        out.flush()
    }

    /// Stops buffering and writes everything buffered so far to stderr.
    pub fn release(&self) -> io::Result<()> {
        self.release_into(&mut io::stderr().lock())
    }
}

impl Write for HeldLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut held_logs = self.lock();
        if held_logs.holding {
            held_logs.buffer.extend_from_slice(buf);
            Ok(buf.len())
        } else {
            drop(held_logs);
            io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.is_held() {
            Ok(())
        } else {
            io::stderr().flush()
        }
    }
}

impl<'a> MakeWriter<'a> for HeldLogWriter {
    type Writer = HeldLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
