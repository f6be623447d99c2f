// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Bus doubles shared by the crate's tests and by downstream crates.

use std::sync::{Mutex, PoisonError};

use crate::bus::FabricBus;
use crate::transport_error;
use crate::types::FabricResult;

/// One recorded vote submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteRecord {
    pub voter: String,
    pub unit: String,
    pub command: u64,
}

/// A [FabricBus] that records all traffic instead of touching hardware.
#[derive(Default)]
pub struct RecordingBus {
    registers: Mutex<Vec<(u32, u32)>>,
    votes: Mutex<Vec<VoteRecord>>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every register write in issue order, as (offset, value).
    pub fn register_writes(&self) -> Vec<(u32, u32)> {
        self.registers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Every vote submission in issue order.
    pub fn votes(&self) -> Vec<VoteRecord> {
        self.votes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Command words submitted for one unit, in issue order.
    pub fn votes_for(&self, unit: &str) -> Vec<u64> {
        self.votes()
            .into_iter()
            .filter(|record| record.unit == unit)
            .map(|record| record.command)
            .collect()
    }

    /// The most recent command word submitted for one unit.
    pub fn last_vote(&self, unit: &str) -> Option<u64> {
        self.votes_for(unit).last().copied()
    }
}

impl FabricBus for RecordingBus {
    fn write_register(&self, offset: u32, value: u32) -> FabricResult<()> {
        self.registers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((offset, value));
        Ok(())
    }

    fn submit_vote(&self, voter: &str, unit: &str, command: u64) -> FabricResult<()> {
        self.votes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(VoteRecord {
                voter: voter.to_string(),
                unit: unit.to_string(),
                command,
            });
        Ok(())
    }
}

/// A [FabricBus] whose every transaction fails, for exercising transport
/// error propagation.
pub struct FailingBus;

impl FabricBus for FailingBus {
    fn write_register(&self, offset: u32, _value: u32) -> FabricResult<()> {
        transport_error!(format!("register write at {offset:#x} refused"))
    }

    fn submit_vote(&self, voter: &str, unit: &str, _command: u64) -> FabricResult<()> {
        transport_error!(format!("vote for '{unit}' on '{voter}' refused"))
    }
}
