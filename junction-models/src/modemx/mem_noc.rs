// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Memory fabric. Every cacheable requester converges here on the way
//! to the LLCC, and the configuration-space return path branches off
//! towards the configuration fabric.

use junction_fabric::aggregate::UnitSpec;
use junction_fabric::descriptor::{DescriptorBuilder, FabricDescriptor};
use junction_fabric::node::Node;
use junction_fabric::qos::QosConfig;
use junction_fabric::types::FabricResult;

use crate::ids::*;

pub fn descriptor() -> FabricResult<FabricDescriptor> {
    DescriptorBuilder::new("mem_noc")
        .voter("hlos")
        .node(
            Node::new(
                MASTER_SYS_TCU,
                "alm_sys_tcu",
                1,
                8,
                &[SLAVE_LLCC, SLAVE_GEM_NOC_CNOC],
            )
            .with_qos(QosConfig::new(6, false, true, &[0x2a000])),
        )
        .node(Node::new(
            MASTER_MSS_PROC,
            "qnm_mdsp",
            1,
            8,
            &[SLAVE_LLCC, SLAVE_GEM_NOC_CNOC, SLAVE_MEM_NOC_PCIE_SNOC],
        ))
        .node(Node::new(
            MASTER_GEM_NOC_CFG,
            "qnm_memnoc_cfg",
            1,
            4,
            &[SLAVE_SERVICE_GEM_NOC],
        ))
        .node(
            Node::new(
                MASTER_ANOC_PCIE_GEM_NOC,
                "qnm_pcie",
                1,
                8,
                &[SLAVE_LLCC, SLAVE_GEM_NOC_CNOC],
            )
            .with_qos(QosConfig::new(0, true, false, &[0x2c000])),
        )
        .node(
            Node::new(
                MASTER_SNOC_SF_MEM_NOC,
                "qnm_snoc_sf",
                1,
                8,
                &[SLAVE_LLCC, SLAVE_GEM_NOC_CNOC],
            )
            .with_qos(QosConfig::new(0, true, false, &[0x2b000])),
        )
        .node(
            Node::new(
                MASTER_APPSS_PROC,
                "xm_apps0",
                1,
                16,
                &[SLAVE_LLCC, SLAVE_GEM_NOC_CNOC, SLAVE_MEM_NOC_PCIE_SNOC],
            )
            .with_qos(QosConfig::new(0, false, true, &[0x2d000])),
        )
        .node(Node::new(SLAVE_LLCC, "qns_llcc", 1, 16, &[MASTER_LLCC]))
        .node(Node::new(
            SLAVE_GEM_NOC_CNOC,
            "qns_memnoc_cnoc",
            1,
            8,
            &[MASTER_GEM_NOC_CNOC],
        ))
        .node(Node::new(
            SLAVE_MEM_NOC_PCIE_SNOC,
            "qns_pcie",
            1,
            8,
            &[MASTER_GEM_NOC_PCIE_SNOC],
        ))
        .node(Node::new(SLAVE_SERVICE_GEM_NOC, "srvc_memnoc", 1, 4, &[]))
        .unit(UnitSpec::new("SH0", 0).member(SLAVE_LLCC).keepalive())
        .unit(
            UnitSpec::new("SH1", 0)
                .members(&[SLAVE_GEM_NOC_CNOC, SLAVE_MEM_NOC_PCIE_SNOC])
                .enable_mask(0x1),
        )
        .build()
}
