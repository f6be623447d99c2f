// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use junction_fabric::aggregate::{Demand, UnitSpec};
use junction_fabric::descriptor::{DescriptorBuilder, FabricDescriptor};
use junction_fabric::node::Node;
use junction_fabric::registry::FabricRegistry;
use junction_fabric::test_helpers::{FailingBus, RecordingBus};
use junction_fabric::types::{FabricError, NodeId};

const A: NodeId = NodeId(0);
const B: NodeId = NodeId(1);
const SINK: NodeId = NodeId(2);

/// Two masters feeding one voted sink, vote scale 1, granularity 50.
fn voted_noc() -> FabricDescriptor {
    DescriptorBuilder::new("voted_noc")
        .voter("hlos")
        .node(Node::new(A, "qhm_a", 1, 4, &[SINK]))
        .node(Node::new(B, "qhm_b", 1, 4, &[SINK]))
        .node(Node::new(SINK, "qns_sink", 1, 8, &[]))
        .unit(
            UnitSpec::new("U0", 0)
                .members(&[A, B])
                .vote_scale(1)
                .step(50),
        )
        .build()
        .unwrap()
}

fn vote_x(command: u64) -> u64 {
    (command >> 14) & 0x3fff
}

#[test]
fn two_members_aggregate_to_one_commit() {
    let bus = RecordingBus::new();
    let noc = voted_noc();

    noc.set_node_demand(A, Demand::new(100, 100), &bus).unwrap();
    noc.set_node_demand(B, Demand::new(150, 150), &bus).unwrap();

    // 100 + 150 = 250 raw, exactly 5 steps of 50.
    let committed = bus.votes_for("U0");
    assert_eq!(vote_x(*committed.last().unwrap()), 5);
    // One commit per demand change, none redundant.
    assert_eq!(committed.len(), 2);
}

#[test]
fn withdrawal_recomputes_to_the_remaining_member() {
    let bus = RecordingBus::new();
    let noc = voted_noc();

    noc.set_node_demand(A, Demand::new(100, 0), &bus).unwrap();
    noc.set_node_demand(B, Demand::new(150, 0), &bus).unwrap();
    let before = bus.votes_for("U0").len();

    noc.set_node_demand(A, Demand::ZERO, &bus).unwrap();
    let committed = bus.votes_for("U0");
    assert_eq!(committed.len(), before + 1);
    assert_eq!(vote_x(*committed.last().unwrap()), 3);
}

#[test]
fn recompute_all_without_change_issues_no_writes() {
    let bus = RecordingBus::new();
    let noc = voted_noc();

    noc.set_node_demand(A, Demand::new(100, 0), &bus).unwrap();
    let before = bus.votes().len();
    noc.recompute_all(&bus).unwrap();
    noc.recompute_all(&bus).unwrap();
    assert_eq!(bus.votes().len(), before);
}

#[test]
fn demand_on_a_plain_link_node_is_accepted_without_a_vote() {
    let bus = RecordingBus::new();
    let noc = voted_noc();

    // The sink is not a member of any unit; demand against it raises no
    // vote but is not an error.
    noc.set_node_demand(SINK, Demand::new(500, 500), &bus).unwrap();
    assert!(bus.votes().is_empty());
}

#[test]
fn demand_on_an_unknown_id_fails() {
    let bus = RecordingBus::new();
    let noc = voted_noc();

    let err = noc
        .set_node_demand(NodeId(42), Demand::new(1, 1), &bus)
        .unwrap_err();
    assert_eq!(
        err,
        FabricError::UnknownNode {
            fabric: "voted_noc".to_string(),
            id: NodeId(42),
        }
    );
}

#[test]
fn keepalive_early_floor_is_committed_at_registry_load() {
    let bus = RecordingBus::new();
    let mut registry = FabricRegistry::new();

    let descriptor = DescriptorBuilder::new("clk_virt")
        .voter("hlos")
        .node(Node::new(NodeId(10), "qup_core_master", 1, 4, &[NodeId(11)]))
        .node(Node::new(NodeId(11), "qup_core_slave", 1, 4, &[]))
        .unit(
            UnitSpec::new("QUP0", 0)
                .member(NodeId(11))
                .vote_scale(1)
                .keepalive_early(),
        )
        .build()
        .unwrap();

    registry.register("test,clk-virt", descriptor, &bus).unwrap();

    // Non-zero vote committed before any request was issued.
    let command = bus.last_vote("QUP0").unwrap();
    assert_eq!(vote_x(command), 1);
    assert_ne!(command & (1 << 29), 0, "floor vote must carry the valid flag");
}

#[test]
fn keepalive_unit_never_votes_zero() {
    let bus = RecordingBus::new();
    let noc = DescriptorBuilder::new("mem_noc")
        .voter("hlos")
        .node(Node::new(NodeId(20), "qns_llcc", 1, 16, &[]))
        .unit(UnitSpec::new("SH0", 0).member(NodeId(20)).keepalive())
        .build()
        .unwrap();

    noc.set_node_demand(NodeId(20), Demand::new(1 << 20, 1 << 20), &bus)
        .unwrap();
    noc.set_node_demand(NodeId(20), Demand::ZERO, &bus).unwrap();

    let command = bus.last_vote("SH0").unwrap();
    assert_eq!(vote_x(command), 1);
}

#[test]
fn transport_failures_propagate_verbatim() {
    let noc = voted_noc();

    let err = noc
        .set_node_demand(A, Demand::new(100, 0), &FailingBus)
        .unwrap_err();
    assert!(matches!(err, FabricError::Transport(_)));

    // The failed commit must not poison the topology: a later attempt
    // against a working bus still goes through.
    let bus = RecordingBus::new();
    noc.recompute_all(&bus).unwrap();
    assert_eq!(bus.votes_for("U0").len(), 1);
}
