// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! A single traffic endpoint or routing point in a fabric.

use crate::qos::QosConfig;
use crate::types::NodeId;

/// One endpoint or routing point of the interconnect graph.
///
/// `links` name downstream nodes by global id; an id missing from the
/// owning descriptor's table belongs to another descriptor and is
/// resolved through the registry. A node with no links is a terminal
/// sink. The graph is acyclic by construction.
#[derive(Debug)]
pub struct Node {
    /// Global id, shared across every descriptor.
    pub id: NodeId,

    /// Diagnostic label, not semantically load-bearing.
    pub name: String,

    /// Number of independent physical channels this node represents.
    pub channels: u32,

    /// Data path width in bytes.
    pub buswidth: u32,

    /// Downstream node ids, in declaration order.
    pub links: Vec<NodeId>,

    /// Arbitration configuration, present only on request-originating
    /// nodes.
    pub qos: Option<QosConfig>,
}

impl Node {
    pub fn new(id: NodeId, name: &str, channels: u32, buswidth: u32, links: &[NodeId]) -> Self {
        Self {
            id,
            name: name.to_string(),
            channels,
            buswidth,
            links: links.to_vec(),
            qos: None,
        }
    }

    #[must_use]
    pub fn with_qos(mut self, qos: QosConfig) -> Self {
        self.qos = Some(qos);
        self
    }

    /// A node with zero links is a pure sink.
    pub fn is_terminal(&self) -> bool {
        self.links.is_empty()
    }

    /// Fabric clock in Hz needed to carry `bytes_per_sec` through this
    /// node's data path, rounded up so the clock never undershoots the
    /// requested bandwidth.
    pub fn required_clock_hz(&self, bytes_per_sec: u64) -> u64 {
        bytes_per_sec.div_ceil(u64::from(self.buswidth) * u64::from(self.channels))
    }
}
