// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Self-contained fabric sub-graphs and their construction-time
//! validation.
//!
//! A [FabricDescriptor] owns an indexed table of [Node]s, the
//! [AggregationUnit]s voting on their behalf, the voter-line names it can
//! submit votes through and the shape of its register space. Descriptors
//! are built once through [DescriptorBuilder], which validates the
//! topology invariants up front; an invalid descriptor is rejected whole
//! rather than registered partially.

use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use log::debug;

use crate::aggregate::{AggregationUnit, Demand, UnitSpec};
use crate::bus::FabricBus;
use crate::node::Node;
use crate::types::{FabricError, FabricResult, NodeId};

/// Register address width and stride of a descriptor's register space.
/// Consumers use this to construct the transport binding; the model never
/// performs the bus I/O itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RegisterShape {
    pub reg_bits: u32,
    pub reg_stride: u32,
    pub val_bits: u32,
}

impl RegisterShape {
    /// The shape shared by every QNoC-style register space.
    pub const QNOC: RegisterShape = RegisterShape {
        reg_bits: 32,
        reg_stride: 4,
        val_bits: 32,
    };
}

impl Default for RegisterShape {
    fn default() -> Self {
        RegisterShape::QNOC
    }
}

/// One self-contained sub-graph of the interconnect.
///
/// Read-only after construction; the only mutation afterwards happens
/// inside the per-unit vote state, never through the topology itself.
pub struct FabricDescriptor {
    name: String,
    nodes: Vec<Node>,
    index_by_id: HashMap<NodeId, usize>,
    units: Vec<AggregationUnit>,
    unit_by_member: HashMap<NodeId, usize>,
    voters: Vec<String>,
    register_shape: RegisterShape,
}

impl FabricDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn units(&self) -> &[AggregationUnit] {
        &self.units
    }

    pub fn voters(&self) -> &[String] {
        &self.voters
    }

    pub fn register_shape(&self) -> RegisterShape {
        self.register_shape
    }

    /// Whether this descriptor's table defines `id`. Ids absent here may
    /// still belong to another registered descriptor.
    pub fn contains(&self, id: NodeId) -> bool {
        self.index_by_id.contains_key(&id)
    }

    /// Look up a node. Lookups are always scoped to the descriptor
    /// queried; a miss never falls through to other descriptors.
    pub fn node(&self, id: NodeId) -> FabricResult<&Node> {
        match self.index_by_id.get(&id) {
            Some(&index) => Ok(&self.nodes[index]),
            None => Err(FabricError::UnknownNode {
                fabric: self.name.clone(),
                id,
            }),
        }
    }

    /// The aggregation unit voting for `id`, if any. Plain pass-through
    /// nodes have none.
    pub fn unit_for(&self, id: NodeId) -> Option<&AggregationUnit> {
        self.unit_by_member.get(&id).map(|&index| &self.units[index])
    }

    /// Find a unit by its voter-line name.
    pub fn unit(&self, name: &str) -> Option<&AggregationUnit> {
        self.units.iter().find(|unit| unit.name() == name)
    }

    /// Program every QoS generator declared in this descriptor. Runs at
    /// probe time, before the first vote is committed.
    pub fn apply_qos(&self, bus: &dyn FabricBus) -> FabricResult<()> {
        for node in &self.nodes {
            if let Some(qos) = &node.qos {
                qos.apply(&node.name, bus)?;
            }
        }
        Ok(())
    }

    /// Attach `demand` to a node and recompute the owning unit's vote.
    ///
    /// Nodes outside every unit accept the demand silently: they are
    /// plain links, and votes for them are carried by units elsewhere on
    /// the path.
    pub fn set_node_demand(
        &self,
        id: NodeId,
        demand: Demand,
        bus: &dyn FabricBus,
    ) -> FabricResult<()> {
        // Fail early on ids that do not belong to this table at all.
        self.node(id)?;
        if let Some(&index) = self.unit_by_member.get(&id) {
            let unit = &self.units[index];
            unit.set_demand(id, demand, self.voter_name(unit), bus)?;
        }
        Ok(())
    }

    /// Re-derive and commit every unit's vote from its outstanding
    /// demand.
    pub fn recompute_all(&self, bus: &dyn FabricBus) -> FabricResult<()> {
        for unit in &self.units {
            unit.recompute(self.voter_name(unit), bus)?;
        }
        Ok(())
    }

    /// Commit the floor vote of every `keepalive_early` unit. Called by
    /// the registry at load time.
    pub fn commit_early_floors(&self, bus: &dyn FabricBus) -> FabricResult<()> {
        for unit in &self.units {
            if unit.keepalive_early() {
                unit.commit_floor(self.voter_name(unit), bus)?;
            }
        }
        Ok(())
    }

    fn voter_name(&self, unit: &AggregationUnit) -> &str {
        // Index range is validated at build time.
        &self.voters[unit.voter_index()]
    }
}

impl fmt::Debug for FabricDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FabricDescriptor")
            .field("name", &self.name)
            .field("nodes", &self.nodes.len())
            .field("units", &self.units.len())
            .finish()
    }
}

/// Builder for [FabricDescriptor], collecting declarations and running
/// the construction-time validation in [build](DescriptorBuilder::build).
pub struct DescriptorBuilder {
    name: String,
    register_shape: RegisterShape,
    nodes: Vec<Node>,
    units: Vec<UnitSpec>,
    voters: Vec<String>,
}

impl DescriptorBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            register_shape: RegisterShape::default(),
            nodes: Vec::new(),
            units: Vec::new(),
            voters: Vec::new(),
        }
    }

    #[must_use]
    pub fn register_shape(mut self, shape: RegisterShape) -> Self {
        self.register_shape = shape;
        self
    }

    #[must_use]
    pub fn node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    #[must_use]
    pub fn unit(mut self, spec: UnitSpec) -> Self {
        self.units.push(spec);
        self
    }

    #[must_use]
    pub fn voter(mut self, name: &str) -> Self {
        self.voters.push(name.to_string());
        self
    }

    /// Validate and freeze the descriptor.
    ///
    /// Rejected whole on: a node id declared twice, a unit with no
    /// members, a member id the descriptor does not define, a member
    /// claimed by two units, or a voter index with no matching voter.
    /// Links leaving the descriptor are legal; they stitch sub-graphs
    /// together and resolve through the registry.
    pub fn build(self) -> FabricResult<FabricDescriptor> {
        if let Some(id) = self.nodes.iter().map(|node| node.id).duplicates().next() {
            return Err(FabricError::DuplicateNode {
                fabric: self.name,
                id,
            });
        }

        let index_by_id: HashMap<NodeId, usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (node.id, index))
            .collect();

        let mut unit_by_member = HashMap::new();
        for (unit_index, spec) in self.units.iter().enumerate() {
            if spec.members.is_empty() {
                return Err(FabricError::EmptyUnit(spec.name.clone()));
            }
            if spec.voter_index >= self.voters.len() {
                return Err(FabricError::UnknownVoter {
                    unit: spec.name.clone(),
                    index: spec.voter_index,
                });
            }
            for &member in &spec.members {
                if !index_by_id.contains_key(&member) {
                    return Err(FabricError::ForeignMember {
                        unit: spec.name.clone(),
                        id: member,
                    });
                }
                if unit_by_member.insert(member, unit_index).is_some() {
                    return Err(FabricError::SharedMember {
                        fabric: self.name,
                        id: member,
                    });
                }
            }
        }

        debug!(
            "built fabric '{}': {} nodes, {} units, {} voters",
            self.name,
            self.nodes.len(),
            self.units.len(),
            self.voters.len()
        );
        Ok(FabricDescriptor {
            name: self.name,
            nodes: self.nodes,
            index_by_id,
            units: self.units.into_iter().map(AggregationUnit::new).collect(),
            unit_by_member,
            voters: self.voters,
            register_shape: self.register_shape,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_nodes() -> DescriptorBuilder {
        DescriptorBuilder::new("test_noc")
            .voter("hlos")
            .node(Node::new(NodeId(0), "qhm_a", 1, 4, &[NodeId(1)]))
            .node(Node::new(NodeId(1), "qns_b", 1, 4, &[]))
    }

    #[test]
    fn duplicate_node_is_rejected() {
        let err = two_nodes()
            .node(Node::new(NodeId(0), "qhm_a_again", 1, 4, &[]))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FabricError::DuplicateNode {
                fabric: "test_noc".to_string(),
                id: NodeId(0),
            }
        );
    }

    #[test]
    fn foreign_member_is_rejected() {
        let err = two_nodes()
            .unit(UnitSpec::new("U0", 0).member(NodeId(99)))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FabricError::ForeignMember {
                unit: "U0".to_string(),
                id: NodeId(99),
            }
        );
    }

    #[test]
    fn empty_unit_is_rejected() {
        let err = two_nodes().unit(UnitSpec::new("U0", 0)).build().unwrap_err();
        assert_eq!(err, FabricError::EmptyUnit("U0".to_string()));
    }

    #[test]
    fn shared_member_is_rejected() {
        let err = two_nodes()
            .unit(UnitSpec::new("U0", 0).member(NodeId(1)))
            .unit(UnitSpec::new("U1", 0).member(NodeId(1)))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FabricError::SharedMember {
                fabric: "test_noc".to_string(),
                id: NodeId(1),
            }
        );
    }

    #[test]
    fn voter_index_must_resolve() {
        let err = two_nodes()
            .unit(UnitSpec::new("U0", 3).member(NodeId(1)))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FabricError::UnknownVoter {
                unit: "U0".to_string(),
                index: 3,
            }
        );
    }

    #[test]
    fn lookups_are_scoped_to_the_descriptor() {
        let descriptor = two_nodes().build().unwrap();
        assert_eq!(descriptor.node(NodeId(0)).unwrap().name, "qhm_a");
        assert_eq!(
            descriptor.node(NodeId(7)).unwrap_err(),
            FabricError::UnknownNode {
                fabric: "test_noc".to_string(),
                id: NodeId(7),
            }
        );
    }

    #[test]
    fn links_may_leave_the_descriptor() {
        // Cross-descriptor stitching: the link target lives elsewhere.
        let descriptor = DescriptorBuilder::new("edge_noc")
            .voter("hlos")
            .node(Node::new(NodeId(0), "qns_out", 1, 8, &[NodeId(200)]))
            .build()
            .unwrap();
        assert!(!descriptor.contains(NodeId(200)));
    }
}
