// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Peripheral aggregation fabric. Collects low-bandwidth peripheral
//! masters into one egress link towards the system fabric.

use junction_fabric::aggregate::UnitSpec;
use junction_fabric::descriptor::{DescriptorBuilder, FabricDescriptor};
use junction_fabric::node::Node;
use junction_fabric::qos::QosConfig;
use junction_fabric::types::FabricResult;

use crate::ids::*;

pub fn descriptor() -> FabricResult<FabricDescriptor> {
    DescriptorBuilder::new("aggre_noc")
        .voter("hlos")
        .node(
            Node::new(MASTER_AUDIO, "qhm_audio", 1, 4, &[SLAVE_A1NOC_CFG])
                .with_qos(QosConfig::new(0, false, true, &[0x28000])),
        )
        .node(
            Node::new(MASTER_QDSS_BAM, "qhm_qdss_bam", 1, 4, &[SLAVE_A1NOC_CFG])
                .with_qos(QosConfig::new(0, false, true, &[0x26000])),
        )
        .node(
            Node::new(MASTER_QPIC, "qhm_qpic", 1, 4, &[SLAVE_A1NOC_CFG])
                .with_qos(QosConfig::new(0, false, true, &[0x25000])),
        )
        .node(
            Node::new(MASTER_QUP_0, "qhm_qup0", 1, 4, &[SLAVE_A1NOC_CFG])
                .with_qos(QosConfig::new(0, false, true, &[0x24000])),
        )
        .node(
            Node::new(MASTER_CRYPTO, "qxm_crypto", 1, 8, &[SLAVE_A1NOC_CFG])
                .with_qos(QosConfig::new(0, false, true, &[0x23000])),
        )
        .node(
            Node::new(MASTER_IPA, "qxm_ipa", 1, 8, &[SLAVE_A1NOC_CFG])
                .with_qos(QosConfig::new(0, false, true, &[0x2a000])),
        )
        .node(
            Node::new(MASTER_EMAC, "xm_emac_0", 1, 8, &[SLAVE_A1NOC_CFG])
                .with_qos(QosConfig::new(0, false, true, &[0x29000])),
        )
        .node(
            Node::new(MASTER_QDSS_ETR, "xm_qdss_etr0", 1, 8, &[SLAVE_A1NOC_CFG])
                .with_qos(QosConfig::new(0, false, true, &[0x22000])),
        )
        .node(
            Node::new(MASTER_QDSS_ETR_1, "xm_qdss_etr1", 1, 8, &[SLAVE_A1NOC_CFG])
                .with_qos(QosConfig::new(0, false, true, &[0x21000])),
        )
        .node(
            Node::new(MASTER_SDCC_4, "xm_sdc4", 1, 8, &[SLAVE_A1NOC_CFG])
                .with_qos(QosConfig::new(0, false, true, &[0x27000])),
        )
        .node(
            Node::new(MASTER_USB3_0, "xm_usb3", 1, 8, &[SLAVE_A1NOC_CFG])
                .with_qos(QosConfig::new(0, false, true, &[0x20000])),
        )
        .node(Node::new(SLAVE_A1NOC_CFG, "qns_a1noc", 1, 8, &[MASTER_ANOC_SNOC]))
        .unit(UnitSpec::new("CE0", 0).member(MASTER_CRYPTO))
        .build()
}
