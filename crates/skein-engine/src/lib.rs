//! Tick executor and public engine for Skein dataflow graphs.
//!
//! [`Engine`] is the public-facing object: it owns one graph, one
//! contradiction ledger, and the tick counter, and drives repeated
//! ticks. [`tick::execute_tick`] implements the single-pass,
//! dependency-ordered execution of one tick.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod tick;

pub use config::{EdgeSpec, NodeSpec};
pub use engine::Engine;
pub use tick::TickReport;
