// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use junction_fabric::descriptor::{DescriptorBuilder, FabricDescriptor};
use junction_fabric::node::Node;
use junction_fabric::registry::FabricRegistry;
use junction_fabric::test_helpers::RecordingBus;
use junction_fabric::types::{FabricError, NodeId};

const MASTER_A: NodeId = NodeId(0);
const SLAVE_GATE: NodeId = NodeId(1);
const MASTER_GATE: NodeId = NodeId(2);
const SLAVE_MEM: NodeId = NodeId(3);

/// Peripheral-facing fabric whose egress node links into the memory
/// fabric.
fn periph_noc() -> FabricDescriptor {
    DescriptorBuilder::new("periph_noc")
        .voter("hlos")
        .node(Node::new(MASTER_A, "qhm_a", 1, 4, &[SLAVE_GATE]))
        .node(Node::new(SLAVE_GATE, "qns_gate", 1, 8, &[MASTER_GATE]))
        .build()
        .unwrap()
}

fn mem_noc() -> FabricDescriptor {
    DescriptorBuilder::new("mem_noc")
        .voter("hlos")
        .node(Node::new(MASTER_GATE, "qnm_gate", 1, 8, &[SLAVE_MEM]))
        .node(Node::new(SLAVE_MEM, "ebi", 1, 4, &[]))
        .build()
        .unwrap()
}

#[test]
fn paths_stitch_across_descriptors() {
    let bus = RecordingBus::new();
    let mut registry = FabricRegistry::new();
    registry.register("test,periph-noc", periph_noc(), &bus).unwrap();
    registry.register("test,mem-noc", mem_noc(), &bus).unwrap();

    let path = registry.resolve_path(MASTER_A, SLAVE_MEM).unwrap();
    let ids: Vec<NodeId> = path.iter().map(|hop| hop.id).collect();
    assert_eq!(ids, vec![MASTER_A, SLAVE_GATE, MASTER_GATE, SLAVE_MEM]);

    // The crossing hop carries the descriptor that defines it.
    assert_eq!(path[2].fabric.name(), "mem_noc");
    let node = path[2].fabric.node(MASTER_GATE).unwrap();
    assert_eq!(node.name, "qnm_gate");
}

#[test]
fn unstitched_link_is_unreachable() {
    let bus = RecordingBus::new();
    let mut registry = FabricRegistry::new();
    registry.register("test,periph-noc", periph_noc(), &bus).unwrap();

    // Without mem_noc registered the gate's link dangles.
    let err = registry.resolve_path(MASTER_A, SLAVE_MEM).unwrap_err();
    assert_eq!(
        err,
        FabricError::UnreachableNode {
            from: SLAVE_GATE,
            to: MASTER_GATE,
        }
    );

    assert!(registry.verify_connectivity().is_err());
}

#[test]
fn unknown_source_is_unreachable() {
    let bus = RecordingBus::new();
    let mut registry = FabricRegistry::new();
    registry.register("test,mem-noc", mem_noc(), &bus).unwrap();

    let err = registry.resolve_path(NodeId(99), SLAVE_MEM).unwrap_err();
    assert_eq!(
        err,
        FabricError::UnreachableNode {
            from: NodeId(99),
            to: SLAVE_MEM,
        }
    );
}

#[test]
fn overlapping_id_ranges_stay_scoped() {
    let bus = RecordingBus::new();
    let mut registry = FabricRegistry::new();

    // Both descriptors legally define NodeId(0) for their own tables.
    let first = DescriptorBuilder::new("first_noc")
        .voter("hlos")
        .node(Node::new(NodeId(0), "qhm_first", 1, 4, &[]))
        .build()
        .unwrap();
    let second = DescriptorBuilder::new("second_noc")
        .voter("hlos")
        .node(Node::new(NodeId(0), "qhm_second", 1, 8, &[]))
        .build()
        .unwrap();

    let first = registry.register("test,first", first, &bus).unwrap();
    let second = registry.register("test,second", second, &bus).unwrap();

    assert_eq!(first.node(NodeId(0)).unwrap().name, "qhm_first");
    assert_eq!(second.node(NodeId(0)).unwrap().name, "qhm_second");
    assert_eq!(second.node(NodeId(0)).unwrap().buswidth, 8);
}

#[test]
fn duplicate_compatible_is_rejected() {
    let bus = RecordingBus::new();
    let mut registry = FabricRegistry::new();
    registry.register("test,mem-noc", mem_noc(), &bus).unwrap();

    let err = registry.register("test,mem-noc", mem_noc(), &bus).unwrap_err();
    assert_eq!(err, FabricError::DuplicateFabric("test,mem-noc".to_string()));
}

#[test]
fn lookup_by_compatible() {
    let bus = RecordingBus::new();
    let mut registry = FabricRegistry::new();
    registry.register("test,mem-noc", mem_noc(), &bus).unwrap();

    assert_eq!(registry.lookup("test,mem-noc").unwrap().name(), "mem_noc");
    assert_eq!(
        registry.lookup("test,absent").unwrap_err(),
        FabricError::UnknownFabric("test,absent".to_string())
    );
}

#[test]
fn source_equal_to_target_resolves_to_itself() {
    let bus = RecordingBus::new();
    let mut registry = FabricRegistry::new();
    registry.register("test,mem-noc", mem_noc(), &bus).unwrap();

    let path = registry.resolve_path(SLAVE_MEM, SLAVE_MEM).unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path[0].id, SLAVE_MEM);
}
