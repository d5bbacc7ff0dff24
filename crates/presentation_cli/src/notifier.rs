//! Console notifications
//!
//! Notifications are written to stderr so that stdout carries only the
//! rendered weather data, which keeps `--json` output machine readable.

use std::io::Write;
use std::sync::Mutex;

use application::{Notification, NotifierPort};

/// Notifier that writes one line per notification
pub struct ConsoleNotifier {
    out: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for ConsoleNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleNotifier").finish_non_exhaustive()
    }
}

impl ConsoleNotifier {
    /// Notifier writing to stderr
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }

    /// Notifier writing to an arbitrary sink
    #[must_use]
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl NotifierPort for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        if let Ok(mut out) = self.out.lock() {
            // Write errors are ignored.
            let _ = writeln!(out, "{notification}");
            let _ = out.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_line_per_notification() {
        let buffer = SharedBuffer::default();
        let notifier = ConsoleNotifier::with_writer(Box::new(buffer.clone()));

        notifier.notify(&Notification::success("Weather data fetched successfully!"));
        notifier.notify(&Notification::error("Failed to fetch forecast data."));

        assert_eq!(
            buffer.contents(),
            "✅ Weather data fetched successfully!\n❌ Failed to fetch forecast data.\n"
        );
    }
}
