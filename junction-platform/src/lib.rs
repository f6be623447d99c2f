// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Bring-up of whole interconnect platforms from a YAML description.
//!
//! A platform file names the fabrics to load by compatible string and,
//! optionally, bandwidth requests to establish immediately. Building a
//! [Platform] registers every named fabric from the `junction-models`
//! catalogue, programs its QoS generators, commits the keepalive-early
//! floor votes, and then applies the initial requests. Afterwards
//! [Platform::request] and [Platform::release] are the consumer-facing
//! surface: resolve a path, attach demand along it, let the affected
//! units revote.

use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;

use junction_fabric::aggregate::Demand;
use junction_fabric::bus::FabricBus;
use junction_fabric::config_error;
use junction_fabric::descriptor::FabricDescriptor;
use junction_fabric::registry::{FabricRegistry, PathHop};
use junction_fabric::types::{FabricResult, NodeId};
use junction_models::modemx;
use log::{debug, info};

use crate::types::PlatformConfig;

pub mod types;

pub struct Platform {
    name: String,
    registry: FabricRegistry,
    bus: Arc<dyn FabricBus>,
}

impl Platform {
    pub fn from_file(platform_path: &Path, bus: Arc<dyn FabricBus>) -> FabricResult<Self> {
        let s = match std::fs::read_to_string(platform_path) {
            Ok(s) => s,
            Err(e) => config_error!("Unable to read {}: {e}", platform_path.display()),
        };
        Platform::from_string(&s, bus)
    }

    pub fn from_string(platform_config: &str, bus: Arc<dyn FabricBus>) -> FabricResult<Self> {
        let cfg: PlatformConfig = match serde_yaml::from_str(platform_config) {
            Ok(cfg) => cfg,
            Err(e) => config_error!("serde_yaml::from_str failed: {e}"),
        };
        Platform::build(&cfg, bus)
    }

    fn build(cfg: &PlatformConfig, bus: Arc<dyn FabricBus>) -> FabricResult<Self> {
        let catalogue: HashMap<&str, modemx::BuildFn> = modemx::catalogue().into_iter().collect();

        let mut registry = FabricRegistry::new();
        for fabric in &cfg.fabrics {
            let Some(build) = catalogue.get(fabric.compatible.as_str()) else {
                config_error!("No fabric model for compatible '{}'", fabric.compatible);
            };
            registry.register(&fabric.compatible, build()?, bus.as_ref())?;
        }

        // QoS generators are programmed once per bring-up, before any
        // vote beyond the early floors is committed.
        for descriptor in registry.descriptors() {
            descriptor.apply_qos(bus.as_ref())?;
        }

        let platform = Platform {
            name: cfg.name.clone().unwrap_or_else(|| "platform".to_string()),
            registry,
            bus,
        };
        info!(
            "brought up platform '{}' with {} fabrics",
            platform.name,
            platform.registry.compatibles().count()
        );

        if let Some(requests) = &cfg.requests {
            for request in requests {
                let demand = Demand::new(request.average, request.peak.unwrap_or(request.average));
                platform.request(NodeId(request.src), NodeId(request.dst), demand)?;
            }
        }
        Ok(platform)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &FabricRegistry {
        &self.registry
    }

    #[must_use]
    pub fn num_fabrics(&self) -> usize {
        self.registry.compatibles().count()
    }

    pub fn fabric(&self, compatible: &str) -> FabricResult<&Arc<FabricDescriptor>> {
        self.registry.lookup(compatible)
    }

    /// Establish a bandwidth demand from `src` to `dst`.
    ///
    /// The demand is attached to every node on the resolved path and each
    /// affected aggregation unit revotes. A repeated request for the same
    /// endpoints replaces the previous demand on the shared nodes rather
    /// than adding to it.
    pub fn request(&self, src: NodeId, dst: NodeId, demand: Demand) -> FabricResult<Vec<PathHop>> {
        let path = self.registry.resolve_path(src, dst)?;
        for hop in &path {
            hop.fabric.set_node_demand(hop.id, demand, self.bus.as_ref())?;
        }
        debug!(
            "request {src} -> {dst}: avg {} peak {} over {} hops",
            demand.average,
            demand.peak,
            path.len()
        );
        Ok(path)
    }

    /// Withdraw the demand from `src` to `dst`. Keepalive units on the
    /// path fall back to their floor vote, everything else revotes zero.
    pub fn release(&self, src: NodeId, dst: NodeId) -> FabricResult<()> {
        self.request(src, dst, Demand::ZERO)?;
        Ok(())
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Platform '{}':", self.name)?;
        for (i, compatible) in self.registry.compatibles().enumerate() {
            writeln!(f, "  {i}: {compatible}")?;
        }
        Ok(())
    }
}
