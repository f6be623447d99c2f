// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use std::sync::Arc;

use junction_fabric::aggregate::Demand;
use junction_fabric::test_helpers::RecordingBus;
use junction_models::ids::{MASTER_AUDIO, SLAVE_EBI1};
use junction_platform::Platform;

#[test]
#[should_panic(expected = "No fabric model")]
fn unknown_compatible() {
    let bus = Arc::new(RecordingBus::new());
    Platform::from_string(
        "
fabrics:
  - compatible: junction,modemx-made_up_noc
",
        bus,
    )
    .unwrap();
}

#[test]
#[should_panic(expected = "DuplicateFabric")]
fn fabric_named_twice() {
    let bus = Arc::new(RecordingBus::new());
    Platform::from_string(
        "
fabrics:
  - compatible: junction,modemx-mem_noc
  - compatible: junction,modemx-mem_noc
",
        bus,
    )
    .unwrap();
}

#[test]
#[should_panic(expected = "serde_yaml::from_str failed")]
fn malformed_description() {
    let bus = Arc::new(RecordingBus::new());
    Platform::from_string(
        "
fabrics:
  - compatible: [not, a, string
",
        bus,
    )
    .unwrap();
}

#[test]
#[should_panic(expected = "Unable to read")]
fn missing_platform_file() {
    let bus = Arc::new(RecordingBus::new());
    Platform::from_file(std::path::Path::new("/nonexistent/platform.yaml"), bus).unwrap();
}

#[test]
#[should_panic(expected = "UnreachableNode")]
fn request_beyond_the_loaded_fabrics() {
    let bus = Arc::new(RecordingBus::new());
    // Only the aggregation fabric is loaded; its egress link dangles.
    let platform = Platform::from_string(
        "
fabrics:
  - compatible: junction,modemx-aggre_noc
",
        bus,
    )
    .unwrap();
    platform
        .request(MASTER_AUDIO, SLAVE_EBI1, Demand::new(1_000_000, 0))
        .unwrap();
}
