// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Interconnect topology of the modemx platform: eight fabrics stitched
//! into one graph, from the peripheral aggregation fabric down to the
//! memory controller.
//!
//! Each fabric module holds one descriptor-building function; the
//! [catalogue] maps platform compatible strings to them, and
//! [register_all] loads the whole platform into a registry in
//! dependency order (virtual clock and memory-controller fabrics first,
//! so their keepalive floors land before any traffic path opens).

use junction_fabric::bus::FabricBus;
use junction_fabric::descriptor::FabricDescriptor;
use junction_fabric::registry::FabricRegistry;
use junction_fabric::types::FabricResult;

pub mod aggre_noc;
pub mod clk_virt;
pub mod cnoc_main;
pub mod dc_noc;
pub mod mc_virt;
pub mod mem_noc;
pub mod pcie_anoc;
pub mod system_noc;

pub const AGGRE_NOC: &str = "junction,modemx-aggre_noc";
pub const CLK_VIRT: &str = "junction,modemx-clk_virt";
pub const CNOC_MAIN: &str = "junction,modemx-cnoc_main";
pub const DC_NOC: &str = "junction,modemx-dc_noc";
pub const MC_VIRT: &str = "junction,modemx-mc_virt";
pub const MEM_NOC: &str = "junction,modemx-mem_noc";
pub const PCIE_ANOC: &str = "junction,modemx-pcie_anoc";
pub const SYSTEM_NOC: &str = "junction,modemx-system_noc";

/// Signature of one fabric's descriptor-building function.
pub type BuildFn = fn() -> FabricResult<FabricDescriptor>;

/// Every fabric of the platform, keyed by compatible string, in load
/// order.
pub fn catalogue() -> [(&'static str, BuildFn); 8] {
    [
        (CLK_VIRT, clk_virt::descriptor),
        (MC_VIRT, mc_virt::descriptor),
        (MEM_NOC, mem_noc::descriptor),
        (SYSTEM_NOC, system_noc::descriptor),
        (PCIE_ANOC, pcie_anoc::descriptor),
        (AGGRE_NOC, aggre_noc::descriptor),
        (CNOC_MAIN, cnoc_main::descriptor),
        (DC_NOC, dc_noc::descriptor),
    ]
}

/// Build and register the whole platform.
pub fn register_all(registry: &mut FabricRegistry, bus: &dyn FabricBus) -> FabricResult<()> {
    for (compatible, build) in catalogue() {
        registry.register(compatible, build()?, bus)?;
    }
    Ok(())
}
