// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Configuration fabric. Three ingress masters fan out over the
//! register windows of every on-chip peripheral; the single CN0 unit
//! votes for the whole fabric and must never drop to zero, or the
//! configuration path to the always-on blocks disappears.

use junction_fabric::aggregate::UnitSpec;
use junction_fabric::descriptor::{DescriptorBuilder, FabricDescriptor};
use junction_fabric::node::Node;
use junction_fabric::types::{FabricResult, NodeId};

use crate::ids::*;

/// Register windows reachable from every ingress master. The RSC and
/// SNOC windows below are reachable from a subset only.
const CONFIG_WINDOWS: [NodeId; 34] = [
    SLAVE_AHB2PHY,
    SLAVE_AOSS,
    SLAVE_APPSS,
    SLAVE_AUDIO,
    SLAVE_CLK_CTL,
    SLAVE_RBCPR_CX_CFG,
    SLAVE_RBCPR_MXA_CFG,
    SLAVE_RBCPR_MXC_CFG,
    SLAVE_CRYPTO_0_CFG,
    SLAVE_EMAC_CFG,
    SLAVE_IMEM_CFG,
    SLAVE_IPA_CFG,
    SLAVE_IPC_ROUTER_CFG,
    SLAVE_CNOC_MSS,
    SLAVE_PCIE_0_CFG,
    SLAVE_PDM,
    SLAVE_PMU_WRAPPER_CFG,
    SLAVE_PRNG,
    SLAVE_QDSS_CFG,
    SLAVE_QPIC,
    SLAVE_QUP_0,
    SLAVE_SDCC_4,
    SLAVE_SPMI_VGI_COEX,
    SLAVE_TCSR,
    SLAVE_TLMM,
    SLAVE_TME_CFG,
    SLAVE_USB3,
    SLAVE_VSENSE_CTRL_CFG,
    SLAVE_DDRSS_CFG,
    SLAVE_ANOC_THROTTLE_CFG,
    SLAVE_BOOT_IMEM,
    SLAVE_IMEM,
    SLAVE_QDSS_STM,
    SLAVE_TCU,
];

fn memnoc_links() -> Vec<NodeId> {
    let mut links = CONFIG_WINDOWS.to_vec();
    links.push(SLAVE_PCIE_RSC_CFG);
    links
}

fn qdss_dap_links() -> Vec<NodeId> {
    let mut links = memnoc_links();
    links.push(SLAVE_SNOC_CNOC);
    links
}

pub fn descriptor() -> FabricResult<FabricDescriptor> {
    let mut builder = DescriptorBuilder::new("cnoc_main")
        .voter("hlos")
        .node(Node::new(
            MASTER_PCIE_RSCC,
            "qhm_pcie_rscc",
            1,
            4,
            &CONFIG_WINDOWS,
        ))
        .node(Node::new(
            MASTER_GEM_NOC_CNOC,
            "qnm_memnoc_cnoc",
            1,
            8,
            &memnoc_links(),
        ))
        .node(Node::new(
            MASTER_QDSS_DAP,
            "xm_qdss_dap",
            1,
            8,
            &qdss_dap_links(),
        ));

    // (id, name, buswidth, links)
    let windows: [(NodeId, &str, u32, &[NodeId]); 36] = [
        (SLAVE_AHB2PHY, "qhs_ahb2_phy", 4, &[]),
        (SLAVE_AOSS, "qhs_aoss", 4, &[]),
        (SLAVE_APPSS, "qhs_apss", 4, &[]),
        (SLAVE_AUDIO, "qhs_audio", 4, &[]),
        (SLAVE_CLK_CTL, "qhs_clk_ctl", 4, &[]),
        (SLAVE_RBCPR_CX_CFG, "qhs_cpr_cx", 4, &[]),
        (SLAVE_RBCPR_MXA_CFG, "qhs_cpr_mxa", 4, &[]),
        (SLAVE_RBCPR_MXC_CFG, "qhs_cpr_mxc", 4, &[]),
        (SLAVE_CRYPTO_0_CFG, "qhs_crypto_cfg", 4, &[]),
        (SLAVE_EMAC_CFG, "qhs_emac0_cfg", 4, &[]),
        (SLAVE_IMEM_CFG, "qhs_imem_cfg", 4, &[]),
        (SLAVE_IPA_CFG, "qhs_ipa", 4, &[]),
        (SLAVE_IPC_ROUTER_CFG, "qhs_ipc_router", 4, &[]),
        (SLAVE_CNOC_MSS, "qhs_mss_cfg", 4, &[]),
        (SLAVE_PCIE_0_CFG, "qhs_pcie0_cfg", 4, &[]),
        (SLAVE_PCIE_RSC_CFG, "qhs_pcie_rscc", 4, &[]),
        (SLAVE_PDM, "qhs_pdm", 4, &[]),
        (SLAVE_PMU_WRAPPER_CFG, "qhs_pmu_wrapper_cfg", 4, &[]),
        (SLAVE_PRNG, "qhs_prng", 4, &[]),
        (SLAVE_QDSS_CFG, "qhs_qdss_cfg", 4, &[]),
        (SLAVE_QPIC, "qhs_qpic", 4, &[]),
        (SLAVE_QUP_0, "qhs_qup0", 4, &[]),
        (SLAVE_SDCC_4, "qhs_sdc4", 4, &[]),
        (SLAVE_SPMI_VGI_COEX, "qhs_spmi_vgi_coex", 4, &[]),
        (SLAVE_TCSR, "qhs_tcsr", 4, &[]),
        (SLAVE_TLMM, "qhs_tlmm", 4, &[]),
        (SLAVE_TME_CFG, "qhs_tme_cfg", 4, &[]),
        (SLAVE_USB3, "qhs_usb3", 4, &[]),
        (SLAVE_VSENSE_CTRL_CFG, "qhs_vsense_ctrl_cfg", 4, &[]),
        (SLAVE_DDRSS_CFG, "qns_ddrss_cfg", 4, &[MASTER_CNOC_DC_NOC]),
        (SLAVE_SNOC_CNOC, "qns_snoc_datapath", 4, &[MASTER_CNOC_SNOC]),
        (SLAVE_ANOC_THROTTLE_CFG, "qss_anoc_throttle_cfg", 4, &[]),
        (SLAVE_BOOT_IMEM, "qxs_boot_imem", 8, &[]),
        (SLAVE_IMEM, "qxs_imem", 8, &[]),
        (SLAVE_QDSS_STM, "xs_qdss_stm", 4, &[]),
        (SLAVE_TCU, "xs_sys_tcu_cfg", 8, &[]),
    ];
    let members: Vec<NodeId> = windows.iter().map(|&(id, ..)| id).collect();
    for (id, name, buswidth, links) in windows {
        builder = builder.node(Node::new(id, name, 1, buswidth, links));
    }

    builder
        .unit(
            UnitSpec::new("CN0", 0)
                .members(&members)
                .enable_mask(0x1)
                .keepalive(),
        )
        .build()
}
