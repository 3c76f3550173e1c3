//! Node behavior contract and step context for Skein graphs.
//!
//! A node's logic is a pure function of (configuration, prior state,
//! inbound values) to (state patch, outbound values), expressed through
//! the [`Behavior`] trait. The [`StepContext`] is the read side of that
//! contract; the [`StepOutput`] is the write side. Contradictions go
//! through a third, non-authoritative channel on the context.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod behavior;
pub mod context;
pub mod output;

pub use behavior::Behavior;
pub use context::StepContext;
pub use output::StepOutput;
