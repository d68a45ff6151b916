//! Output functions for the OKM runtime.
//!
//! `Output` writes rendered values to any `Write` sink and reports write
//! failures. The exported C functions drive it over stdout and drop those
//! failures, since generated code has no way to handle them.

use std::io::{self, StdoutLock, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, RuntimeError};
use crate::format::{format_bool, format_double, format_long};

/// A print target for OKM values.
#[derive(Debug)]
pub struct Output<W: Write> {
    writer: W,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn print_long(&mut self, n: i64) -> Result<()> {
        self.emit(&format_long(n), false)
    }

    pub fn println_long(&mut self, n: i64) -> Result<()> {
        self.emit(&format_long(n), true)
    }

    pub fn print_double(&mut self, n: f64) -> Result<()> {
        self.emit(&format_double(n), false)
    }

    pub fn println_double(&mut self, n: f64) -> Result<()> {
        self.emit(&format_double(n), true)
    }

    pub fn print_bool(&mut self, b: bool) -> Result<()> {
        self.emit(&format_bool(b), false)
    }

    pub fn println_bool(&mut self, b: bool) -> Result<()> {
        self.emit(&format_bool(b), true)
    }

    fn emit(&mut self, text: &str, newline: bool) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        if newline {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl Output<StdoutLock<'static>> {
    /// Lock the process's stdout for the duration of one print.
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

static WRITE_FAILURE_REPORTED: AtomicBool = AtomicBool::new(false);

/// Run one print against stdout, noting the first failure on stderr.
fn with_stdout(print: impl FnOnce(&mut Output<StdoutLock<'static>>) -> Result<()>) {
    print_or_report(
        Output::stdout(),
        io::stderr(),
        &WRITE_FAILURE_REPORTED,
        print,
    );
}

/// Run `print` against `out`; the first failure seen through `reported` is
/// written to `log`. Never panics, even when `log` is broken too.
fn print_or_report<W, L>(
    mut out: Output<W>,
    log: L,
    reported: &AtomicBool,
    print: impl FnOnce(&mut Output<W>) -> Result<()>,
) where
    W: Write,
    L: Write,
{
    if let Err(err) = print(&mut out) {
        report_write_failure(&err, log, reported);
    }
}

fn report_write_failure(err: &RuntimeError, mut log: impl Write, reported: &AtomicBool) {
    if !reported.swap(true, Ordering::Relaxed) {
        let _ = writeln!(log, "OKM runtime: stdout {}", err);
    }
}

/// Print an integer to stdout (no newline)
#[no_mangle]
pub extern "C" fn print_long(value: i64) {
    with_stdout(|out| out.print_long(value));
}

/// Print an integer to stdout with newline
#[no_mangle]
pub extern "C" fn println_long(value: i64) {
    with_stdout(|out| out.println_long(value));
}

/// Print a double to stdout in `%g` form (no newline)
#[no_mangle]
pub extern "C" fn print_double(value: f64) {
    with_stdout(|out| out.print_double(value));
}

/// Print a double to stdout in `%g` form with newline
#[no_mangle]
pub extern "C" fn println_double(value: f64) {
    with_stdout(|out| out.println_double(value));
}

/// Print a boolean to stdout (no newline)
#[no_mangle]
pub extern "C" fn print_bool(value: bool) {
    with_stdout(|out| out.print_bool(value));
}

/// Print a boolean to stdout with newline
#[no_mangle]
pub extern "C" fn println_bool(value: bool) {
    with_stdout(|out| out.println_bool(value));
}
