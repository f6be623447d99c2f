// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Virtual clock fabric carrying the QUP core clock vote. No physical
//! register space; the QUP0 unit is flagged `keepalive_early` so the
//! serial engines keep their core clock from load time onwards.

use junction_fabric::aggregate::UnitSpec;
use junction_fabric::descriptor::{DescriptorBuilder, FabricDescriptor};
use junction_fabric::node::Node;
use junction_fabric::types::FabricResult;

use crate::ids::*;

pub fn descriptor() -> FabricResult<FabricDescriptor> {
    DescriptorBuilder::new("clk_virt")
        .voter("hlos")
        .node(Node::new(
            MASTER_QUP_CORE_0,
            "qup0_core_master",
            1,
            4,
            &[SLAVE_QUP_CORE_0],
        ))
        .node(Node::new(SLAVE_QUP_CORE_0, "qup0_core_slave", 1, 4, &[]))
        .unit(
            UnitSpec::new("QUP0", 0)
                .member(SLAVE_QUP_CORE_0)
                .vote_scale(1)
                .keepalive_early(),
        )
        .build()
}
