// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Core model of on-chip interconnect fabrics.
//!
//! An interconnect is declared as a set of [FabricDescriptor]s — indexed
//! node tables with per-master QoS configuration and hardware-voted
//! [AggregationUnit]s — registered in a [FabricRegistry] under platform
//! compatible strings. At request time a path of nodes is resolved
//! (possibly spanning several descriptors joined by shared link ids),
//! bandwidth demand is attached to the traversed nodes, and each
//! affected unit re-derives the single vote it presents to the shared
//! voting hardware.
//!
//! The model owns no persisted state and performs no bus I/O; register
//! writes and vote submissions go through the [FabricBus] seam.
//!
//! [FabricDescriptor]: descriptor::FabricDescriptor
//! [AggregationUnit]: aggregate::AggregationUnit
//! [FabricRegistry]: registry::FabricRegistry
//! [FabricBus]: bus::FabricBus

pub mod aggregate;
pub mod bus;
pub mod descriptor;
pub mod node;
pub mod qos;
pub mod registry;
pub mod test_helpers;
pub mod types;
