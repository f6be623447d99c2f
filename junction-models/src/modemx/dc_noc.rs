// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! DDR configuration fabric, reached from the configuration fabric's
//! DDRSS window.

use junction_fabric::descriptor::{DescriptorBuilder, FabricDescriptor};
use junction_fabric::node::Node;
use junction_fabric::types::FabricResult;

use crate::ids::*;

pub fn descriptor() -> FabricResult<FabricDescriptor> {
    DescriptorBuilder::new("dc_noc")
        .voter("hlos")
        .node(Node::new(
            MASTER_CNOC_DC_NOC,
            "qnm_cnoc",
            1,
            4,
            &[SLAVE_LAGG_CFG, SLAVE_MCCC_MASTER],
        ))
        .node(Node::new(SLAVE_LAGG_CFG, "qhs_lagg", 1, 4, &[]))
        .node(Node::new(SLAVE_MCCC_MASTER, "qhs_mccc_master", 1, 4, &[]))
        .build()
}
