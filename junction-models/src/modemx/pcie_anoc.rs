// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! PCIe aggregation fabric: the inbound PCIe traffic path towards
//! memory.

use junction_fabric::aggregate::UnitSpec;
use junction_fabric::descriptor::{DescriptorBuilder, FabricDescriptor};
use junction_fabric::node::Node;
use junction_fabric::qos::QosConfig;
use junction_fabric::types::FabricResult;

use crate::ids::*;

pub fn descriptor() -> FabricResult<FabricDescriptor> {
    DescriptorBuilder::new("pcie_anoc")
        .voter("hlos")
        .node(
            Node::new(
                MASTER_PCIE_0,
                "xm_pcie3_0",
                1,
                8,
                &[SLAVE_ANOC_PCIE_GEM_NOC],
            )
            .with_qos(QosConfig::new(0, false, true, &[0xa000])),
        )
        .node(Node::new(
            SLAVE_ANOC_PCIE_GEM_NOC,
            "qns_pcie_memnoc",
            1,
            8,
            &[MASTER_ANOC_PCIE_GEM_NOC],
        ))
        .unit(UnitSpec::new("SN1", 0).member(MASTER_PCIE_0).enable_mask(0x1))
        .build()
}
