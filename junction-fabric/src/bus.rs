// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! The transport seam towards the register space and the vote channels.

use crate::types::FabricResult;

/// Hardware-facing side of the model.
///
/// Implementations perform the actual bus traffic: QoS register writes
/// into a descriptor's register space and vote command submission on a
/// named voter line. Writes are synchronous and may block on a bus
/// transaction; callers hold the owning unit's lock across
/// [`submit_vote`](FabricBus::submit_vote) so votes for one unit are
/// never committed out of order.
///
/// Failures are reported back verbatim as
/// [`FabricError::Transport`](crate::types::FabricError); retry policy
/// belongs to the implementation, not to this model.
pub trait FabricBus: Send + Sync {
    /// Write one register at `offset` within the descriptor's register
    /// space.
    fn write_register(&self, offset: u32, value: u32) -> FabricResult<()>;

    /// Submit an encoded vote command for `unit` on the voter line
    /// `voter`.
    fn submit_vote(&self, voter: &str, unit: &str, command: u64) -> FabricResult<()>;
}
