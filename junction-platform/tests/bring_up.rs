// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use std::io::Write;
use std::sync::Arc;

use junction_fabric::aggregate::Demand;
use junction_fabric::test_helpers::RecordingBus;
use junction_models::ids::*;
use junction_platform::Platform;

const MODEMX: &str = "
name: modemx
fabrics:
  - compatible: junction,modemx-clk_virt
  - compatible: junction,modemx-mc_virt
  - compatible: junction,modemx-mem_noc
  - compatible: junction,modemx-system_noc
  - compatible: junction,modemx-pcie_anoc
  - compatible: junction,modemx-aggre_noc
  - compatible: junction,modemx-cnoc_main
  - compatible: junction,modemx-dc_noc
";

fn vote_x(command: u64) -> u64 {
    (command >> 14) & 0x3fff
}

#[test]
fn full_platform_bring_up() {
    let bus = Arc::new(RecordingBus::new());
    let platform = Platform::from_string(MODEMX, bus.clone()).unwrap();

    assert_eq!(platform.name(), "modemx");
    assert_eq!(platform.num_fabrics(), 8);
    platform.registry().verify_connectivity().unwrap();

    // The QUP core floor is up before any request exists.
    assert_eq!(vote_x(bus.last_vote("QUP0").unwrap()), 1);

    // QoS generators were programmed: spot-check the TCU master's
    // priority 6 with priority forwarding disabled.
    assert!(
        bus.register_writes()
            .contains(&(0x2a000 + 0x8, (6 << 4) | (1 << 7)))
    );
}

#[test]
fn request_votes_every_unit_on_the_path() {
    let bus = Arc::new(RecordingBus::new());
    let platform = Platform::from_string(MODEMX, bus.clone()).unwrap();

    // 100 MB/s from the audio master down to DRAM.
    let path = platform
        .request(MASTER_AUDIO, SLAVE_EBI1, Demand::new(100_000_000, 0))
        .unwrap();
    assert_eq!(path.len(), 8);

    // Bandwidth-voted units quantize to one step per MB/s.
    assert_eq!(vote_x(bus.last_vote("SH0").unwrap()), 100);
    assert_eq!(vote_x(bus.last_vote("MC0").unwrap()), 100);
    assert_eq!(vote_x(bus.last_vote("SN0").unwrap()), 100);
    assert_eq!(vote_x(bus.last_vote("SN2").unwrap()), 100);
    // The DRAM channel unit votes its enable mask, not a bandwidth.
    assert_eq!(vote_x(bus.last_vote("ACV").unwrap()), 0x8);
}

#[test]
fn release_falls_back_to_floors() {
    let bus = Arc::new(RecordingBus::new());
    let platform = Platform::from_string(MODEMX, bus.clone()).unwrap();

    platform
        .request(MASTER_AUDIO, SLAVE_EBI1, Demand::new(100_000_000, 0))
        .unwrap();
    platform.release(MASTER_AUDIO, SLAVE_EBI1).unwrap();

    // Keepalive units never drop below one step.
    assert_eq!(vote_x(bus.last_vote("SH0").unwrap()), 1);
    assert_eq!(vote_x(bus.last_vote("MC0").unwrap()), 1);
    assert_eq!(vote_x(bus.last_vote("SN0").unwrap()), 1);
    // Plain units revote zero with the valid flag cleared.
    let sn2 = bus.last_vote("SN2").unwrap();
    assert_eq!(vote_x(sn2), 0);
    assert_eq!(sn2 & (1 << 29), 0);
    let acv = bus.last_vote("ACV").unwrap();
    assert_eq!(vote_x(acv), 0);
    assert_eq!(acv & (1 << 29), 0);
}

#[test]
fn initial_requests_are_applied_at_bring_up() {
    let bus = Arc::new(RecordingBus::new());
    let config = format!(
        "
fabrics:
  - compatible: junction,modemx-mem_noc
  - compatible: junction,modemx-mc_virt
requests:
  - src: {}
    dst: {}
    average: 200MB
",
        MASTER_APPSS_PROC.0, SLAVE_EBI1.0,
    );
    Platform::from_string(&config, bus.clone()).unwrap();

    assert_eq!(vote_x(bus.last_vote("SH0").unwrap()), 200);
    // Omitted peak defaults to the average.
    assert_eq!(bus.last_vote("SH0").unwrap() & 0x3fff, 200);
}

#[test]
fn platforms_load_from_files() {
    let bus = Arc::new(RecordingBus::new());
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MODEMX.as_bytes()).unwrap();

    let platform = Platform::from_file(file.path(), bus).unwrap();
    assert_eq!(platform.num_fabrics(), 8);
}
