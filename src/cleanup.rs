//! Scoped acquisition with guaranteed release.
//!
//! The release logic rides on `Drop`, so it runs on every exit path of the
//! owning scope, including unwinding. That ordering guarantee is the whole
//! point of the demonstration.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::DemoError;

/// Prints the release lines when dropped. The guard owns the `File`, so the
/// handle itself closes between the two lines.
struct CloseGuard<'a> {
    file: Option<File>,
    out: &'a mut dyn Write,
}

impl Drop for CloseGuard<'_> {
    fn drop(&mut self) {
        // Drop cannot propagate errors; a failed write here is ignored.
        let _ = writeln!(self.out, "Close file");
        drop(self.file.take());
        let _ = writeln!(self.out, "Close done");
    }
}

/// Open a file and guarantee the close lines print when the scope exits, no
/// matter how it exits. Printed order is always open, close-start, close-done.
pub fn deferred_close(path: &Path, out: &mut dyn Write) -> Result<(), DemoError> {
    let file = File::open(path)?;
    writeln!(out, "Open file: '{}' success", path.display())?;

    let _guard = CloseGuard {
        file: Some(file),
        out,
    };
    Ok(())
}

/// Logs how long a scope took. Start one at the top of a function and let it
/// drop at the end. Timing goes to stderr so stdout transcripts stay clean.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    pub fn start(label: &'static str) -> Self {
        eprintln!("{} started", label);
        Timer {
            label,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        eprintln!("{} took {:?}", self.label, self.start.elapsed());
    }
}

/// The timing demonstration: two lines on stderr, nothing on stdout.
pub fn timer(_out: &mut dyn Write) -> io::Result<()> {
    let _t = Timer::start("timer");
    thread::sleep(Duration::from_secs(1));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn transcript(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_close_lines_follow_open_line() {
        let mut doc = tempfile::NamedTempFile::new().unwrap();
        writeln!(doc, "content").unwrap();

        let mut buf = Vec::new();
        deferred_close(doc.path(), &mut buf).unwrap();

        let expected = format!(
            "Open file: '{}' success\nClose file\nClose done\n",
            doc.path().display()
        );
        assert_eq!(transcript(buf), expected);
    }

    #[test]
    fn test_ordering_holds_on_repeat_invocations() {
        let doc = tempfile::NamedTempFile::new().unwrap();

        let mut first = Vec::new();
        deferred_close(doc.path(), &mut first).unwrap();
        let mut second = Vec::new();
        deferred_close(doc.path(), &mut second).unwrap();

        assert_eq!(transcript(first), transcript(second));
    }

    #[test]
    fn test_missing_file_is_fatal_before_any_output() {
        let mut buf = Vec::new();
        let err = deferred_close(Path::new("no/such/file"), &mut buf);
        assert!(err.is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_guard_releases_on_panic_path() {
        let doc = tempfile::NamedTempFile::new().unwrap();
        let mut buf = Vec::new();

        let result = catch_unwind(AssertUnwindSafe(|| {
            let file = File::open(doc.path()).unwrap();
            let _guard = CloseGuard {
                file: Some(file),
                out: &mut buf,
            };
            panic!("unexpected condition");
        }));

        assert!(result.is_err());
        assert_eq!(transcript(buf), "Close file\nClose done\n");
    }

    #[test]
    fn test_timer_measures_elapsed_time() {
        let t = Timer::start("test");
        thread::sleep(Duration::from_millis(10));
        assert!(t.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_timer_demo_keeps_stdout_clean() {
        let mut buf = Vec::new();
        timer(&mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
