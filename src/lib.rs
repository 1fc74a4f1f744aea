//! A tour of base-language features as small, runnable demonstrations.
//!
//! Every demonstration comes in two layers: a core function that writes its
//! transcript into any `io::Write` sink (so tests can capture and compare the
//! output byte for byte), and a zero-argument stdout wrapper in [`demos`]
//! shaped for storage in the [`Registry`].
//!
//! Run the selected demonstrations with: cargo run

pub mod cleanup;
pub mod collections;
pub mod composition;
pub mod concurrency;
pub mod demos;
pub mod error;
pub mod files;
pub mod functions;
pub mod polymorphism;
pub mod registry;

pub use error::DemoError;
pub use registry::Registry;

/// Document read by the file-handling demonstrations.
pub const README: &str = "README.md";
