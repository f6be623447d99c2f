// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Shared types and the fabric error taxonomy.

use std::error::Error;
use std::fmt;

/// Identifier of a node in the single global id namespace shared by every
/// fabric descriptor.
///
/// The same numeric space covers both request-originating ("master") and
/// terminal ("slave") roles; a descriptor's node table holds whichever
/// subset of the namespace belongs to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u16);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "node {}", self.0)
    }
}

#[macro_export]
/// Build a [FabricError::Transport](crate::types::FabricError) from a
/// message that supports `to_string`.
///
/// For use by [FabricBus](crate::bus::FabricBus) implementations reporting
/// a failed bus transaction.
macro_rules! transport_error {
    ($msg:expr) => {
        return Err($crate::types::FabricError::Transport($msg.to_string()))
    };
}

#[macro_export]
/// Build a [FabricError::Config](crate::types::FabricError) from a format
/// string, for the platform description layer.
macro_rules! config_error {
    ($($arg:tt)*) => {
        return Err($crate::types::FabricError::Config(format!($($arg)*)))
    };
}

/// Everything that can go wrong in the fabric model.
///
/// Construction-time variants (`DuplicateNode`, `ForeignMember`,
/// `SharedMember`, `EmptyUnit`, `UnknownVoter`, `DuplicateFabric`) abort
/// the whole descriptor registration. Request-time variants fail only the
/// request that hit them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FabricError {
    /// An id lookup missed the queried descriptor's node table.
    UnknownNode { fabric: String, id: NodeId },

    /// No descriptor is registered under the given compatible string.
    UnknownFabric(String),

    /// A compatible string was registered twice.
    DuplicateFabric(String),

    /// A descriptor declared the same node id twice.
    DuplicateNode { fabric: String, id: NodeId },

    /// An aggregation unit references a node its own descriptor does not
    /// define.
    ForeignMember { unit: String, id: NodeId },

    /// A node was claimed as a member by more than one aggregation unit
    /// of the same descriptor.
    SharedMember { fabric: String, id: NodeId },

    /// An aggregation unit was declared with no members.
    EmptyUnit(String),

    /// An aggregation unit selects a voter index the descriptor does not
    /// provide.
    UnknownVoter { unit: String, index: usize },

    /// Path resolution exhausted the registry without finding the target
    /// or a needed intermediate hop.
    UnreachableNode { from: NodeId, to: NodeId },

    /// A quantized vote exceeds the hardware-representable ceiling. The
    /// unit's membership or scale was specified incorrectly; this is
    /// never clamped away.
    VoteOverflow { unit: String, vote: u64 },

    /// A bus transaction failed. Reported upward verbatim; the model
    /// neither retries nor suppresses transport failures.
    Transport(String),

    /// A platform description could not be read or parsed.
    Config(String),
}

impl fmt::Display for FabricError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FabricError::UnknownNode { fabric, id } => {
                write!(f, "no {id} in fabric '{fabric}'")
            }
            FabricError::UnknownFabric(compatible) => {
                write!(f, "no fabric registered for '{compatible}'")
            }
            FabricError::DuplicateFabric(compatible) => {
                write!(f, "fabric '{compatible}' already registered")
            }
            FabricError::DuplicateNode { fabric, id } => {
                write!(f, "duplicate {id} in fabric '{fabric}'")
            }
            FabricError::ForeignMember { unit, id } => {
                write!(f, "unit '{unit}' claims {id} from outside its fabric")
            }
            FabricError::SharedMember { fabric, id } => {
                write!(f, "{id} claimed by more than one unit in fabric '{fabric}'")
            }
            FabricError::EmptyUnit(unit) => {
                write!(f, "unit '{unit}' has no members")
            }
            FabricError::UnknownVoter { unit, index } => {
                write!(f, "unit '{unit}' selects voter index {index} with no matching voter")
            }
            FabricError::UnreachableNode { from, to } => {
                write!(f, "no registered fabric routes {from} to {to}")
            }
            FabricError::VoteOverflow { unit, vote } => {
                write!(f, "vote {vote} for unit '{unit}' exceeds the hardware ceiling")
            }
            FabricError::Transport(msg) => {
                write!(f, "transport: {msg}")
            }
            FabricError::Config(msg) => {
                write!(f, "platform config: {msg}")
            }
        }
    }
}

impl Error for FabricError {}

/// The return type for most fabric operations.
pub type FabricResult<T> = Result<T, FabricError>;
