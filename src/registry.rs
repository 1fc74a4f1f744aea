//! A name-to-callable table driving selected demonstrations.
//!
//! Labels come from the [`register!`](crate::register) macro, which
//! stringifies the function path at the call site. That is the static-table
//! answer to "derive a callable's printable name from its identity": no
//! runtime reflection, the compiler hands over the name.

use colored::Colorize;
use std::io::Write;

use crate::error::DemoError;

/// A zero-argument fallible demonstration, boxed for storage.
pub type Callable = Box<dyn Fn() -> Result<(), DemoError>>;

pub struct Registry {
    entries: Vec<(String, Callable)>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            entries: Vec::new(),
        }
    }

    /// Store an entry. Pure bookkeeping: nothing runs until [`run_all`].
    ///
    /// [`run_all`]: Registry::run_all
    pub fn register<F>(&mut self, name: &str, f: F)
    where
        F: Fn() -> Result<(), DemoError> + 'static,
    {
        self.entries.push((name.to_string(), Box::new(f)));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every entry, writing a labelled banner to `out` before each
    /// invocation so every printed line is attributable to exactly one entry.
    /// Entry order is an implementation detail; nothing may depend on it.
    /// The first failing entry aborts the run.
    pub fn run_all(&self, out: &mut dyn Write) -> Result<(), DemoError> {
        for (name, f) in &self.entries {
            writeln!(out, "---> Example: {}\n", name.as_str().bold().cyan())?;
            out.flush()?;
            f()?;
            writeln!(out)?;
        }
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registers a demonstration under the name of the function itself.
#[macro_export]
macro_rules! register {
    ($registry:expr, $func:path) => {
        $registry.register(stringify!($func), || $func())
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_entry(log: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> Callable {
        let log = Rc::clone(log);
        Box::new(move || {
            log.borrow_mut().push(tag);
            Ok(())
        })
    }

    #[test]
    fn test_register_is_pure_bookkeeping() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = Registry::new();
        registry.register("one", {
            let entry = recording_entry(&log, "one");
            move || entry()
        });

        // nothing ran yet
        assert!(log.borrow().is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_run_all_invokes_every_entry() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = Registry::new();
        for tag in ["a", "b", "c"] {
            let entry = recording_entry(&log, tag);
            registry.register(tag, move || entry());
        }

        let mut banners = Vec::new();
        registry.run_all(&mut banners).unwrap();

        // iteration order is unspecified; only completeness is contractual
        let mut ran = log.borrow().clone();
        ran.sort_unstable();
        assert_eq!(ran, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_banner_precedes_each_entry() {
        colored::control::set_override(false);

        let mut registry = Registry::new();
        registry.register("demos::arr", || Ok(()));

        let mut banners = Vec::new();
        registry.run_all(&mut banners).unwrap();

        let text = String::from_utf8(banners).unwrap();
        assert_eq!(text, "---> Example: demos::arr\n\n\n");
    }

    #[test]
    fn test_first_failure_aborts_the_run() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = Registry::new();
        {
            let entry = recording_entry(&log, "first");
            registry.register("first", move || entry());
        }
        registry.register("broken", || {
            Err(DemoError::MissingFile("gone".to_string()))
        });
        {
            let entry = recording_entry(&log, "unreached");
            registry.register("unreached", move || entry());
        }

        let mut banners = Vec::new();
        let err = registry.run_all(&mut banners).unwrap_err();

        assert!(matches!(err, DemoError::MissingFile(_)));
        assert_eq!(*log.borrow(), vec!["first"]);
    }

    #[test]
    fn test_register_macro_derives_label_from_path() {
        fn sample() -> Result<(), DemoError> {
            Ok(())
        }

        let mut registry = Registry::new();
        register!(registry, sample);

        colored::control::set_override(false);
        let mut banners = Vec::new();
        registry.run_all(&mut banners).unwrap();
        let text = String::from_utf8(banners).unwrap();
        assert!(text.contains("---> Example: sample"));
    }
}
