//! In-memory `log` backend for unit tests that assert on logged lines.

use std::sync::{Mutex, Once};

struct Capture {
    lines: Mutex<Vec<String>>,
}

static CAPTURE: Capture = Capture { lines: Mutex::new(Vec::new()) };
static INSTALL: Once = Once::new();

impl log::Log for Capture {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// Route `log` output into the capture buffer. Safe to call from every test.
pub(crate) fn install() {
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURE).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
}

/// Whether any captured record rendered exactly as `line`.
pub(crate) fn logged(line: &str) -> bool {
    CAPTURE.lines.lock().is_ok_and(|lines| lines.iter().any(|l| l == line))
}
