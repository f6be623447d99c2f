// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! System fabric. Routes aggregated peripheral traffic towards memory
//! and carries the outbound PCIe path.

use junction_fabric::aggregate::UnitSpec;
use junction_fabric::descriptor::{DescriptorBuilder, FabricDescriptor};
use junction_fabric::node::Node;
use junction_fabric::qos::QosConfig;
use junction_fabric::types::FabricResult;

use crate::ids::*;

pub fn descriptor() -> FabricResult<FabricDescriptor> {
    DescriptorBuilder::new("system_noc")
        .voter("hlos")
        .node(
            Node::new(MASTER_CPUCP, "qhm_cpucp", 1, 4, &[SLAVE_SNOC_MEM_NOC_SF])
                .with_qos(QosConfig::new(0, false, true, &[0x13000])),
        )
        .node(Node::new(
            MASTER_ANOC_SNOC,
            "qnm_aggre_noc",
            1,
            8,
            &[SLAVE_SNOC_MEM_NOC_SF, SLAVE_PCIE_0],
        ))
        .node(Node::new(
            MASTER_CNOC_SNOC,
            "qnm_cnoc_datapath",
            1,
            4,
            &[SLAVE_SNOC_MEM_NOC_SF, SLAVE_PCIE_0],
        ))
        .node(Node::new(
            MASTER_GEM_NOC_PCIE_SNOC,
            "qnm_memnoc_pcie",
            1,
            8,
            &[SLAVE_PCIE_0],
        ))
        .node(Node::new(
            MASTER_MSS_NAV,
            "qxm_mss_nav_ce",
            1,
            8,
            &[SLAVE_SNOC_MEM_NOC_SF, SLAVE_PCIE_0],
        ))
        .node(
            Node::new(
                MASTER_TME,
                "qxm_tme",
                1,
                8,
                &[SLAVE_SNOC_MEM_NOC_SF, SLAVE_PCIE_0],
            )
            .with_qos(QosConfig::new(0, false, true, &[0x11000])),
        )
        .node(
            Node::new(MASTER_IPA_PCIE, "xm_ipa2pcie", 1, 8, &[SLAVE_PCIE_0])
                .with_qos(QosConfig::new(0, false, true, &[0x14000])),
        )
        .node(Node::new(
            SLAVE_SNOC_MEM_NOC_SF,
            "qns_memnoc_sf",
            1,
            8,
            &[MASTER_SNOC_SF_MEM_NOC],
        ))
        .node(Node::new(SLAVE_PCIE_0, "xs_pcie_0", 1, 8, &[]))
        .unit(UnitSpec::new("SN0", 0).member(SLAVE_SNOC_MEM_NOC_SF).keepalive())
        .unit(UnitSpec::new("SN2", 0).member(MASTER_ANOC_SNOC))
        .unit(UnitSpec::new("SN4", 0).member(MASTER_MSS_NAV))
        .unit(UnitSpec::new("SN7", 0).member(SLAVE_PCIE_0))
        .build()
}
