// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Virtual memory-controller fabric: the LLCC-to-DRAM hop.
//!
//! Two units share this fabric. MC0 keeps the memory controller clocked
//! whenever the platform is up; ACV gates the DRAM channel and votes a
//! fixed enable mask rather than a scaled bandwidth.

use junction_fabric::aggregate::UnitSpec;
use junction_fabric::descriptor::{DescriptorBuilder, FabricDescriptor};
use junction_fabric::node::Node;
use junction_fabric::types::FabricResult;

use crate::ids::*;

pub fn descriptor() -> FabricResult<FabricDescriptor> {
    DescriptorBuilder::new("mc_virt")
        .voter("hlos")
        .node(Node::new(MASTER_LLCC, "llcc_mc", 1, 4, &[SLAVE_EBI1]))
        .node(Node::new(SLAVE_EBI1, "ebi", 1, 4, &[]))
        .unit(UnitSpec::new("MC0", 0).member(MASTER_LLCC).keepalive())
        .unit(UnitSpec::new("ACV", 0).member(SLAVE_EBI1).enable_mask(0x8))
        .build()
}
