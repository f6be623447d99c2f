// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Registry of fabric descriptors keyed by platform compatible string.
//!
//! The registry is the stitching point between independently declared
//! sub-graphs: when a node's link names an id its own descriptor does not
//! define, path resolution consults the other registered descriptors in
//! registration order. This is how a request originating in a
//! peripheral-facing fabric reaches the memory-controller fabric.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use log::info;

use crate::bus::FabricBus;
use crate::descriptor::FabricDescriptor;
use crate::types::{FabricError, FabricResult, NodeId};

/// One step of a resolved path: the node id and the descriptor whose
/// table defines it.
#[derive(Clone, Debug)]
pub struct PathHop {
    pub fabric: Arc<FabricDescriptor>,
    pub id: NodeId,
}

/// Maps external compatible strings to fabric descriptors.
#[derive(Default)]
pub struct FabricRegistry {
    descriptors: Vec<(String, Arc<FabricDescriptor>)>,
    index_by_compatible: HashMap<String, usize>,
}

impl FabricRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor under `compatible` and commit the floor votes
    /// of its `keepalive_early` units, before any consumer-facing
    /// request path can reach them.
    pub fn register(
        &mut self,
        compatible: &str,
        descriptor: FabricDescriptor,
        bus: &dyn FabricBus,
    ) -> FabricResult<Arc<FabricDescriptor>> {
        if self.index_by_compatible.contains_key(compatible) {
            return Err(FabricError::DuplicateFabric(compatible.to_string()));
        }
        let descriptor = Arc::new(descriptor);
        descriptor.commit_early_floors(bus)?;
        info!(
            "registered fabric '{}' as '{compatible}'",
            descriptor.name()
        );
        self.index_by_compatible
            .insert(compatible.to_string(), self.descriptors.len());
        self.descriptors
            .push((compatible.to_string(), descriptor.clone()));
        Ok(descriptor)
    }

    pub fn lookup(&self, compatible: &str) -> FabricResult<&Arc<FabricDescriptor>> {
        match self.index_by_compatible.get(compatible) {
            Some(&index) => Ok(&self.descriptors[index].1),
            None => Err(FabricError::UnknownFabric(compatible.to_string())),
        }
    }

    pub fn compatibles(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|(compatible, _)| compatible.as_str())
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &Arc<FabricDescriptor>> {
        self.descriptors.iter().map(|(_, descriptor)| descriptor)
    }

    /// The first registered descriptor whose table defines `id`.
    /// Registration order breaks ties when descriptors legally reuse
    /// overlapping id ranges.
    fn containing(&self, id: NodeId) -> Option<(usize, &Arc<FabricDescriptor>)> {
        self.descriptors
            .iter()
            .enumerate()
            .find(|(_, (_, descriptor))| descriptor.contains(id))
            .map(|(index, (_, descriptor))| (index, descriptor))
    }

    /// Resolve a path of nodes from `src` to `dst`, following `links`
    /// and crossing into other descriptors where an id is not defined
    /// locally.
    ///
    /// Fails with `UnreachableNode` when a traversed link names an id no
    /// registered descriptor defines, or when every downstream walk
    /// terminates without reaching `dst`.
    pub fn resolve_path(&self, src: NodeId, dst: NodeId) -> FabricResult<Vec<PathHop>> {
        let Some((start_index, _)) = self.containing(src) else {
            return Err(FabricError::UnreachableNode { from: src, to: dst });
        };

        let mut queue = VecDeque::from([(start_index, src)]);
        let mut visited = HashSet::from([(start_index, src)]);
        let mut parents: HashMap<(usize, NodeId), (usize, NodeId)> = HashMap::new();

        while let Some((descriptor_index, id)) = queue.pop_front() {
            if id == dst {
                return Ok(self.walk_back(&parents, (descriptor_index, id)));
            }
            let descriptor = &self.descriptors[descriptor_index].1;
            let node = descriptor.node(id)?;
            for &next in &node.links {
                let next_index = if descriptor.contains(next) {
                    descriptor_index
                } else {
                    match self.containing(next) {
                        Some((index, _)) => index,
                        None => {
                            return Err(FabricError::UnreachableNode { from: id, to: next });
                        }
                    }
                };
                if visited.insert((next_index, next)) {
                    parents.insert((next_index, next), (descriptor_index, id));
                    queue.push_back((next_index, next));
                }
            }
        }
        Err(FabricError::UnreachableNode { from: src, to: dst })
    }

    /// Check that every link of every registered descriptor resolves to
    /// a node somewhere in the registry.
    pub fn verify_connectivity(&self) -> FabricResult<()> {
        for (_, descriptor) in &self.descriptors {
            for node in descriptor.nodes() {
                for &link in &node.links {
                    if !descriptor.contains(link) && self.containing(link).is_none() {
                        return Err(FabricError::UnreachableNode {
                            from: node.id,
                            to: link,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn walk_back(
        &self,
        parents: &HashMap<(usize, NodeId), (usize, NodeId)>,
        end: (usize, NodeId),
    ) -> Vec<PathHop> {
        let mut hops = Vec::new();
        let mut current = end;
        loop {
            let (descriptor_index, id) = current;
            hops.push(PathHop {
                fabric: self.descriptors[descriptor_index].1.clone(),
                id,
            });
            match parents.get(&current) {
                Some(&parent) => current = parent,
                None => break,
            }
        }
        hops.reverse();
        hops
    }
}
