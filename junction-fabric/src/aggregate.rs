// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Aggregation units and the bandwidth-vote algorithm.
//!
//! An [AggregationUnit] groups the nodes of one descriptor that share a
//! single hardware vote line. Consumers attach an (average, peak)
//! bandwidth [Demand] to member nodes; the unit sums averages, takes the
//! maximum peak, scales, quantizes upward to the hardware step
//! granularity and commits the encoded command when it differs from the
//! last committed one.
//!
//! State machine per unit:
//!
//! ```txt
//! Uninitialized -> Idle (vote = 0 or keepalive floor) -> Active -> Idle
//! ```
//!
//! Units flagged `keepalive_early` reach `Idle(floor)` at registry load
//! with no external trigger, protecting always-needed paths from being
//! clock-gated before their consumers attach.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use log::debug;

use crate::bus::FabricBus;
use crate::types::{FabricError, FabricResult, NodeId};

/// Number of bits per vote field in a command word.
pub const VOTE_BITS: u32 = 14;

/// Largest vote value the hardware can represent.
pub const VOTE_MAX: u64 = (1 << VOTE_BITS) - 1;

const COMMIT_SHIFT: u32 = 30;
const VALID_SHIFT: u32 = 29;
const VOTE_X_SHIFT: u32 = VOTE_BITS;

/// Default multiplier applied to raw aggregated bandwidth before
/// quantization.
pub const DEFAULT_VOTE_SCALE: u64 = 1000;

/// Default step granularity in scaled bandwidth units. At the default
/// vote scale this makes one vote step represent 1 MB/s.
pub const DEFAULT_STEP: u64 = 1_000_000_000;

/// Outstanding bandwidth request against one member node, in bytes per
/// second.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Demand {
    pub average: u64,
    pub peak: u64,
}

impl Demand {
    pub const ZERO: Demand = Demand {
        average: 0,
        peak: 0,
    };

    pub fn new(average: u64, peak: u64) -> Self {
        Self { average, peak }
    }

    pub fn is_zero(&self) -> bool {
        self.average == 0 && self.peak == 0
    }
}

/// A quantized vote, in hardware steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Vote {
    /// Aggregated-average field.
    pub x: u64,
    /// Peak field.
    pub y: u64,
}

impl Vote {
    pub const ZERO: Vote = Vote { x: 0, y: 0 };

    /// Encode as a command word: `commit << 30 | valid << 29 |
    /// x << 14 | y`. The valid flag is set only when the vote carries a
    /// non-zero value.
    pub fn command(&self, commit: bool) -> u64 {
        let valid = u64::from(self.x > 0 || self.y > 0);
        let mut command = valid << VALID_SHIFT | (self.x & VOTE_MAX) << VOTE_X_SHIFT | (self.y & VOTE_MAX);
        if commit {
            command |= 1 << COMMIT_SHIFT;
        }
        command
    }
}

/// Declarative description of an aggregation unit, fed to the descriptor
/// builder. Members reference nodes of the same descriptor by global id.
#[derive(Clone, Debug)]
pub struct UnitSpec {
    /// Diagnostic label and hardware voter-line name.
    pub name: String,

    /// Which of the descriptor's voter channels this unit reports to.
    pub voter_index: usize,

    /// Bitmask of active vote sub-fields. A non-zero mask makes the unit
    /// vote the mask value itself whenever any demand is outstanding,
    /// instead of a scaled bandwidth.
    pub enable_mask: u32,

    /// Present a non-zero floor vote even with zero active demand.
    pub keepalive: bool,

    /// Commit the floor vote at registry load, before any consumer
    /// attaches.
    pub keepalive_early: bool,

    /// Multiplier applied to raw aggregated bandwidth.
    pub vote_scale: u64,

    /// Hardware step granularity in scaled bandwidth units.
    pub step: u64,

    /// Member node ids. Non-empty; each must belong to the unit's own
    /// descriptor, and to no other unit of that descriptor.
    pub members: Vec<NodeId>,
}

impl UnitSpec {
    pub fn new(name: &str, voter_index: usize) -> Self {
        Self {
            name: name.to_string(),
            voter_index,
            enable_mask: 0,
            keepalive: false,
            keepalive_early: false,
            vote_scale: DEFAULT_VOTE_SCALE,
            step: DEFAULT_STEP,
            members: Vec::new(),
        }
    }

    #[must_use]
    pub fn member(mut self, id: NodeId) -> Self {
        self.members.push(id);
        self
    }

    #[must_use]
    pub fn members(mut self, ids: &[NodeId]) -> Self {
        self.members.extend_from_slice(ids);
        self
    }

    #[must_use]
    pub fn enable_mask(mut self, mask: u32) -> Self {
        self.enable_mask = mask;
        self
    }

    #[must_use]
    pub fn keepalive(mut self) -> Self {
        self.keepalive = true;
        self
    }

    #[must_use]
    pub fn keepalive_early(mut self) -> Self {
        self.keepalive = true;
        self.keepalive_early = true;
        self
    }

    #[must_use]
    pub fn vote_scale(mut self, scale: u64) -> Self {
        self.vote_scale = scale;
        self
    }

    #[must_use]
    pub fn step(mut self, step: u64) -> Self {
        self.step = step;
        self
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    Idle,
    Active,
}

struct VoteState {
    phase: Phase,
    demands: HashMap<NodeId, Demand>,
    last_committed: Option<u64>,
}

/// Runtime state of one hardware-voted group of nodes.
///
/// The accumulated demand and last-committed vote are the only mutable
/// state of the whole topology; they live behind one lock per unit, held
/// across the transport write so two recomputed votes for the same unit
/// can never be committed out of order.
pub struct AggregationUnit {
    spec: UnitSpec,
    state: Mutex<VoteState>,
}

impl AggregationUnit {
    pub fn new(spec: UnitSpec) -> Self {
        Self {
            spec,
            state: Mutex::new(VoteState {
                phase: Phase::Uninitialized,
                demands: HashMap::new(),
                last_committed: None,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn voter_index(&self) -> usize {
        self.spec.voter_index
    }

    pub fn keepalive_early(&self) -> bool {
        self.spec.keepalive_early
    }

    pub fn member_ids(&self) -> &[NodeId] {
        &self.spec.members
    }

    pub fn is_member(&self, id: NodeId) -> bool {
        self.spec.members.contains(&id)
    }

    /// The command word of the last committed vote, if any.
    pub fn last_command(&self) -> Option<u64> {
        self.lock().last_committed
    }

    /// True once the unit has outstanding demand.
    pub fn is_active(&self) -> bool {
        self.lock().phase == Phase::Active
    }

    /// Record `demand` against a member and recompute the unit's vote.
    ///
    /// A zero demand withdraws the member's outstanding request; that is
    /// an ordinary recompute trigger, not a cancellation of anything in
    /// flight. The update and the commit happen under one lock
    /// acquisition.
    pub fn set_demand(
        &self,
        id: NodeId,
        demand: Demand,
        voter: &str,
        bus: &dyn FabricBus,
    ) -> FabricResult<Vote> {
        let mut state = self.lock();
        if demand.is_zero() {
            state.demands.remove(&id);
        } else {
            state.demands.insert(id, demand);
        }
        self.recompute_locked(&mut state, voter, bus)
    }

    /// Re-derive the vote from the currently outstanding demand and
    /// commit it if it changed.
    pub fn recompute(&self, voter: &str, bus: &dyn FabricBus) -> FabricResult<Vote> {
        let mut state = self.lock();
        self.recompute_locked(&mut state, voter, bus)
    }

    /// Commit the keepalive floor before any consumer attaches. Runs
    /// under a one-shot init barrier at registry load, so ordering with
    /// consumer requests needs no further exclusion.
    pub fn commit_floor(&self, voter: &str, bus: &dyn FabricBus) -> FabricResult<Vote> {
        let floor = Vote { x: 1, y: 1 };
        let mut state = self.lock();
        state.phase = Phase::Idle;
        self.commit_locked(&mut state, floor, voter, bus)?;
        Ok(floor)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VoteState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn recompute_locked(
        &self,
        state: &mut VoteState,
        voter: &str,
        bus: &dyn FabricBus,
    ) -> FabricResult<Vote> {
        let sum_average: u64 = state.demands.values().map(|d| d.average).sum();
        let max_peak: u64 = state.demands.values().map(|d| d.peak).max().unwrap_or(0);

        let vote = self.vote_for(sum_average, max_peak)?;
        state.phase = if sum_average == 0 && max_peak == 0 {
            Phase::Idle
        } else {
            Phase::Active
        };
        self.commit_locked(state, vote, voter, bus)?;
        Ok(vote)
    }

    /// Derive the quantized vote for an aggregated demand.
    ///
    /// Quantization always rounds up: under-voting starves the fabric,
    /// over-voting only costs power margin. A result past the hardware
    /// ceiling is a configuration error and is surfaced, never clamped.
    fn vote_for(&self, sum_average: u64, max_peak: u64) -> FabricResult<Vote> {
        let mut vote = if self.spec.enable_mask != 0 {
            if sum_average > 0 || max_peak > 0 {
                Vote {
                    x: u64::from(self.spec.enable_mask),
                    y: 0,
                }
            } else {
                Vote::ZERO
            }
        } else {
            Vote {
                x: self.quantize(sum_average)?,
                y: self.quantize(max_peak)?,
            }
        };

        if vote.x > VOTE_MAX || vote.y > VOTE_MAX {
            return Err(FabricError::VoteOverflow {
                unit: self.spec.name.clone(),
                vote: vote.x.max(vote.y),
            });
        }

        if self.spec.keepalive && vote == Vote::ZERO {
            vote = Vote { x: 1, y: 1 };
        }
        Ok(vote)
    }

    fn quantize(&self, bytes_per_sec: u64) -> FabricResult<u64> {
        let scaled = bytes_per_sec
            .checked_mul(self.spec.vote_scale)
            .ok_or_else(|| FabricError::VoteOverflow {
                unit: self.spec.name.clone(),
                vote: u64::MAX,
            })?;
        Ok(scaled.div_ceil(self.spec.step))
    }

    fn commit_locked(
        &self,
        state: &mut VoteState,
        vote: Vote,
        voter: &str,
        bus: &dyn FabricBus,
    ) -> FabricResult<()> {
        let command = vote.command(true);
        if state.last_committed == Some(command) {
            debug!(
                "{}: vote unchanged ({command:#x}), skipping commit",
                self.spec.name
            );
            return Ok(());
        }
        bus.submit_vote(voter, &self.spec.name, command)?;
        debug!(
            "{}: committed x={} y={} on voter '{voter}'",
            self.spec.name, vote.x, vote.y
        );
        state.last_committed = Some(command);
        Ok(())
    }
}
