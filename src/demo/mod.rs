// Demo lifecycle contract
//
// A demo is a self-contained interactive module. The coordinator only ever
// sees this trait: it initializes a demo, reads its display name, optionally
// reads its source text, starts it, and - when the demo supports it - stops
// it again. Everything a demo does between start and stop (its run loop, its
// state, how it paints the canvas) is opaque.

pub mod bundled;
pub mod canvas;
pub mod loader;

pub use canvas::Canvas;
pub use loader::{BundledLoader, DemoLoader, LoadError};

use async_trait::async_trait;
use thiserror::Error;

/// Failures a demo can report through the lifecycle contract.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Recognized non-error signal: some demos unwind their own startup
    /// through this escape instead of returning normally. Callers treat it
    /// as success; every other variant is a real failure.
    #[error("startup unwound through its control-flow escape")]
    ControlFlowEscape,

    #[error("initialization failed: {0}")]
    Init(String),

    #[error("start failed: {0}")]
    Start(String),

    #[error("stop failed: {0}")]
    Stop(String),
}

/// The runtime contract a loaded module satisfies.
///
/// `initialize`, `display_name` and `start` are required. The optional parts
/// of the contract are expressed as defaulted methods: `source_text` defaults
/// to "no source available" and `stop` is only meaningful when
/// `supports_stop` returns true - callers probe the capability before
/// invoking it rather than assuming it exists.
#[async_trait]
pub trait Demo: Send + Sync {
    /// One-time setup. Must complete before any other call.
    ///
    /// May return [`DemoError::ControlFlowEscape`] when the demo's own
    /// startup unwinds through its internal escape; callers treat exactly
    /// that value as success.
    async fn initialize(&mut self) -> Result<(), DemoError>;

    /// Human-readable name, used verbatim as the deck title.
    fn display_name(&self) -> &str;

    /// The demo's own readable source, if it ships any.
    fn source_text(&self) -> Option<String> {
        None
    }

    /// Begin the demo's internal execution.
    async fn start(&mut self) -> Result<(), DemoError>;

    /// Whether this demo can be torn down in place.
    fn supports_stop(&self) -> bool {
        false
    }

    /// Halt and release resources (detach from the canvas, cancel tasks).
    /// Only called when [`supports_stop`](Demo::supports_stop) is true.
    async fn stop(&mut self) -> Result<(), DemoError> {
        Ok(())
    }
}
