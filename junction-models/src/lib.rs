// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Topology catalogue for the platforms junction models.
//!
//! Each platform module declares its fabrics as constant data feeding
//! the `junction-fabric` descriptor builder, plus a catalogue of
//! compatible strings for registry loading. Topology lives here;
//! behaviour lives in `junction-fabric`.

pub mod ids;
pub mod modemx;
