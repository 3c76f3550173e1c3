//! The closed enumeration of node kinds.
//!
//! Type tags in node specs resolve through [`NodeKind`], not an open
//! registry: adding a node kind to the system is a deliberate, reviewed
//! extension of this enum and its match arms. Each engine instance
//! resolves tags independently; there is no process-wide registry.

use std::fmt;

use skein_core::GraphError;
use skein_node::Behavior;

use crate::{Depot, DeployerRunner, Meter, Source, Splitter};

/// One of the built-in node kinds, selected by type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Deterministic generator ([`Source`]).
    Source,
    /// Pass-through counter ([`Meter`]).
    Meter,
    /// Two-way lossless fan-out ([`Splitter`]).
    Splitter,
    /// Terminal accumulator ([`Depot`]).
    Depot,
    /// Fixed-token element-wise transform ([`DeployerRunner`]).
    DeployerRunner,
}

impl NodeKind {
    /// Every kind, in tag order.
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Source,
        NodeKind::Meter,
        NodeKind::Splitter,
        NodeKind::Depot,
        NodeKind::DeployerRunner,
    ];

    /// Resolve a type tag to a kind.
    pub fn from_tag(tag: &str) -> Result<Self, GraphError> {
        match tag {
            "source" => Ok(Self::Source),
            "meter" => Ok(Self::Meter),
            "splitter" => Ok(Self::Splitter),
            "depot" => Ok(Self::Depot),
            "deployer_runner" => Ok(Self::DeployerRunner),
            _ => Err(GraphError::UnknownNodeType {
                tag: tag.to_string(),
            }),
        }
    }

    /// The canonical type tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Meter => "meter",
            Self::Splitter => "splitter",
            Self::Depot => "depot",
            Self::DeployerRunner => "deployer_runner",
        }
    }

    /// Construct the behavior implementing this kind.
    pub fn instantiate(&self) -> Box<dyn Behavior> {
        match self {
            Self::Source => Box::new(Source::new()),
            Self::Meter => Box::new(Meter::new()),
            Self::Splitter => Box::new(Splitter::new()),
            Self::Depot => Box::new(Depot::new()),
            Self::DeployerRunner => Box::new(DeployerRunner::new()),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
