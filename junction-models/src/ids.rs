// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Global endpoint ids shared by every fabric of the modemx platform.
//!
//! Ids are global across the whole interconnect: a link naming an id
//! outside its own fabric's table crosses into the fabric that defines
//! it. Masters occupy the low range, slaves follow.

use junction_fabric::types::NodeId;

pub const MASTER_AUDIO: NodeId = NodeId(0);
pub const MASTER_QDSS_BAM: NodeId = NodeId(1);
pub const MASTER_QPIC: NodeId = NodeId(2);
pub const MASTER_QUP_0: NodeId = NodeId(3);
pub const MASTER_CRYPTO: NodeId = NodeId(4);
pub const MASTER_IPA: NodeId = NodeId(5);
pub const MASTER_EMAC: NodeId = NodeId(6);
pub const MASTER_QDSS_ETR: NodeId = NodeId(7);
pub const MASTER_QDSS_ETR_1: NodeId = NodeId(8);
pub const MASTER_SDCC_4: NodeId = NodeId(9);
pub const MASTER_USB3_0: NodeId = NodeId(10);
pub const MASTER_QUP_CORE_0: NodeId = NodeId(11);
pub const MASTER_PCIE_RSCC: NodeId = NodeId(12);
pub const MASTER_GEM_NOC_CNOC: NodeId = NodeId(13);
pub const MASTER_QDSS_DAP: NodeId = NodeId(14);
pub const MASTER_CNOC_DC_NOC: NodeId = NodeId(15);
pub const MASTER_LLCC: NodeId = NodeId(16);
pub const MASTER_SYS_TCU: NodeId = NodeId(17);
pub const MASTER_MSS_PROC: NodeId = NodeId(18);
pub const MASTER_GEM_NOC_CFG: NodeId = NodeId(19);
pub const MASTER_ANOC_PCIE_GEM_NOC: NodeId = NodeId(20);
pub const MASTER_SNOC_SF_MEM_NOC: NodeId = NodeId(21);
pub const MASTER_APPSS_PROC: NodeId = NodeId(22);
pub const MASTER_PCIE_0: NodeId = NodeId(23);
pub const MASTER_CPUCP: NodeId = NodeId(24);
pub const MASTER_ANOC_SNOC: NodeId = NodeId(25);
pub const MASTER_CNOC_SNOC: NodeId = NodeId(26);
pub const MASTER_GEM_NOC_PCIE_SNOC: NodeId = NodeId(27);
pub const MASTER_MSS_NAV: NodeId = NodeId(28);
pub const MASTER_TME: NodeId = NodeId(29);
pub const MASTER_IPA_PCIE: NodeId = NodeId(30);

pub const SLAVE_A1NOC_CFG: NodeId = NodeId(31);
pub const SLAVE_QUP_CORE_0: NodeId = NodeId(32);
pub const SLAVE_AHB2PHY: NodeId = NodeId(33);
pub const SLAVE_AOSS: NodeId = NodeId(34);
pub const SLAVE_APPSS: NodeId = NodeId(35);
pub const SLAVE_AUDIO: NodeId = NodeId(36);
pub const SLAVE_CLK_CTL: NodeId = NodeId(37);
pub const SLAVE_RBCPR_CX_CFG: NodeId = NodeId(38);
pub const SLAVE_RBCPR_MXA_CFG: NodeId = NodeId(39);
pub const SLAVE_RBCPR_MXC_CFG: NodeId = NodeId(40);
pub const SLAVE_CRYPTO_0_CFG: NodeId = NodeId(41);
pub const SLAVE_EMAC_CFG: NodeId = NodeId(42);
pub const SLAVE_IMEM_CFG: NodeId = NodeId(43);
pub const SLAVE_IPA_CFG: NodeId = NodeId(44);
pub const SLAVE_IPC_ROUTER_CFG: NodeId = NodeId(45);
pub const SLAVE_CNOC_MSS: NodeId = NodeId(46);
pub const SLAVE_PCIE_0_CFG: NodeId = NodeId(47);
pub const SLAVE_PCIE_RSC_CFG: NodeId = NodeId(48);
pub const SLAVE_PDM: NodeId = NodeId(49);
pub const SLAVE_PMU_WRAPPER_CFG: NodeId = NodeId(50);
pub const SLAVE_PRNG: NodeId = NodeId(51);
pub const SLAVE_QDSS_CFG: NodeId = NodeId(52);
pub const SLAVE_QPIC: NodeId = NodeId(53);
pub const SLAVE_QUP_0: NodeId = NodeId(54);
pub const SLAVE_SDCC_4: NodeId = NodeId(55);
pub const SLAVE_SPMI_VGI_COEX: NodeId = NodeId(56);
pub const SLAVE_TCSR: NodeId = NodeId(57);
pub const SLAVE_TLMM: NodeId = NodeId(58);
pub const SLAVE_TME_CFG: NodeId = NodeId(59);
pub const SLAVE_USB3: NodeId = NodeId(60);
pub const SLAVE_VSENSE_CTRL_CFG: NodeId = NodeId(61);
pub const SLAVE_DDRSS_CFG: NodeId = NodeId(62);
pub const SLAVE_SNOC_CNOC: NodeId = NodeId(63);
pub const SLAVE_ANOC_THROTTLE_CFG: NodeId = NodeId(64);
pub const SLAVE_BOOT_IMEM: NodeId = NodeId(65);
pub const SLAVE_IMEM: NodeId = NodeId(66);
pub const SLAVE_QDSS_STM: NodeId = NodeId(67);
pub const SLAVE_TCU: NodeId = NodeId(68);
pub const SLAVE_LAGG_CFG: NodeId = NodeId(69);
pub const SLAVE_MCCC_MASTER: NodeId = NodeId(70);
pub const SLAVE_EBI1: NodeId = NodeId(71);
pub const SLAVE_LLCC: NodeId = NodeId(72);
pub const SLAVE_GEM_NOC_CNOC: NodeId = NodeId(73);
pub const SLAVE_MEM_NOC_PCIE_SNOC: NodeId = NodeId(74);
pub const SLAVE_SERVICE_GEM_NOC: NodeId = NodeId(75);
pub const SLAVE_ANOC_PCIE_GEM_NOC: NodeId = NodeId(76);
pub const SLAVE_SNOC_MEM_NOC_SF: NodeId = NodeId(77);
pub const SLAVE_PCIE_0: NodeId = NodeId(78);
