//! Core handler infrastructure.
//!
//! This module contains the command trait, the per-invocation context, the
//! dispatcher with its two lookup policies, and execution statistics.

pub mod context;
pub mod registry;
pub mod stats;
pub mod traits;

pub use context::Context;
pub use registry::{CommandRegistry, Reply};
pub use stats::{ExecutionLog, ExecutionStats};
pub use traits::Command;
