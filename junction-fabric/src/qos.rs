// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Static per-master arbitration (QoS) configuration.
//!
//! Each request-originating node can carry one [QosConfig], programming a
//! QoS generator block per physical port. The values are opaque to this
//! model: the hardware defines what a priority bucket means, and no
//! ordering policy is inferred here.

use std::sync::{Mutex, PoisonError};

use log::debug;

use crate::bus::FabricBus;
use crate::types::FabricResult;

/// Offset of the main control register inside a per-port QoS generator
/// block.
pub const QOSGEN_MAINCTL_LO: u32 = 0x8;

const DFLT_PRIO_SHIFT: u32 = 4;
const URG_FWD_EN: u32 = 1 << 3;
const PRIO_FWD_DISABLE: u32 = 1 << 7;

/// Arbitration configuration for one node, covering 1..N ports.
///
/// Immutable once constructed; only the last-written cache mutates, so
/// that repeated [apply](QosConfig::apply) calls with unchanged fields do
/// not re-issue bus traffic.
#[derive(Debug)]
pub struct QosConfig {
    priority: u8,
    urgent_forward: bool,
    priority_forward_disable: bool,
    port_offsets: Vec<u32>,
    last_written: Mutex<Vec<Option<u32>>>,
}

impl QosConfig {
    pub fn new(
        priority: u8,
        urgent_forward: bool,
        priority_forward_disable: bool,
        port_offsets: &[u32],
    ) -> Self {
        Self {
            priority,
            urgent_forward,
            priority_forward_disable,
            last_written: Mutex::new(vec![None; port_offsets.len()]),
            port_offsets: port_offsets.to_vec(),
        }
    }

    pub fn num_ports(&self) -> usize {
        self.port_offsets.len()
    }

    pub fn port_offsets(&self) -> &[u32] {
        &self.port_offsets
    }

    /// The register value carrying every field of this configuration.
    fn main_ctl(&self) -> u32 {
        let mut value = u32::from(self.priority) << DFLT_PRIO_SHIFT;
        if self.urgent_forward {
            value |= URG_FWD_EN;
        }
        if self.priority_forward_disable {
            value |= PRIO_FWD_DISABLE;
        }
        value
    }

    /// Program the QoS generator of every port.
    ///
    /// Ports whose last-written value already matches are skipped. Must
    /// run before the first vote involving the owning node's aggregation
    /// unit is committed; that sequencing belongs to the caller.
    pub fn apply(&self, owner: &str, bus: &dyn FabricBus) -> FabricResult<()> {
        let value = self.main_ctl();
        let mut last = self
            .last_written
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for (port, &base) in self.port_offsets.iter().enumerate() {
            if last[port] == Some(value) {
                debug!("{owner}: QoS port {port} unchanged, skipping write");
                continue;
            }
            bus.write_register(base + QOSGEN_MAINCTL_LO, value)?;
            last[port] = Some(value);
        }
        Ok(())
    }
}
