//! Output sinks for check results

use std::cell::RefCell;
use std::rc::Rc;

/// Destination for harness output lines
pub trait CheckWriter {
    /// Write an informational line
    fn write(&self, line: &str);

    /// Write a line describing a failure
    fn write_error(&self, line: &str) {
        self.write(line);
    }
}

/// Default writer: passes to stdout, failures to stderr
pub struct StdoutWriter;

impl CheckWriter for StdoutWriter {
    fn write(&self, line: &str) {
        println!("{}", line);
    }

    fn write_error(&self, line: &str) {
        eprintln!("{}", line);
    }
}

/// Writer that records lines in memory
#[derive(Clone, Default)]
pub struct CaptureWriter {
    lines: Rc<RefCell<Vec<String>>>,
}

impl CaptureWriter {
    /// Create an empty capture
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl CheckWriter for CaptureWriter {
    fn write(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
