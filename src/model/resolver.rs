//! Graph resolver: identifier index plus two-phase reference linking.
//!
//! References in the document may point forward to records that appear later,
//! so every node is constructed and indexed before any reference is resolved.
//! Resolution is all-or-nothing: any inconsistency fails the whole model.

use super::order::order_events;
use crate::parser::record::Node;
use crate::utils::error::ReferenceError;
use log::debug;
use std::collections::HashMap;

/// The identifier-to-node index over one document.
///
/// Built once by [`resolve`] and read-only afterwards. Iteration follows
/// document traversal order, not map order.
#[derive(Debug, Clone)]
pub struct ModelIndex {
    nodes: HashMap<String, Node>,
    order: Vec<String>,
}

impl ModelIndex {
    /// Look up a node by identifier
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Iterate nodes in document traversal order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Index all nodes, then resolve every declared reference
///
/// **Public** - the linking entry point, called once per document
///
/// # Errors
/// * `ReferenceError::DuplicateId` - two nodes share an identifier
/// * `ReferenceError::UnknownId` - a reference points outside the index
/// * `ReferenceError::WrongKind` - a schedule-item reference resolves to
///   something that is not an event
pub fn resolve(all_nodes: Vec<Node>) -> Result<ModelIndex, ReferenceError> {
    // Phase 1: build the index; every node must exist before linking starts
    let mut nodes: HashMap<String, Node> = HashMap::with_capacity(all_nodes.len());
    let mut order = Vec::with_capacity(all_nodes.len());

    for node in all_nodes {
        let id = node.id().to_string();
        if nodes.insert(id.clone(), node).is_some() {
            return Err(ReferenceError::DuplicateId(id));
        }
        order.push(id);
    }

    debug!("Indexed {} nodes", order.len());

    // Phase 2: swap each node's outgoing references for resolved nodes
    for id in &order {
        let refs = match nodes.get(id) {
            Some(node) if !node.outgoing_refs().is_empty() => node.outgoing_refs().to_vec(),
            _ => continue,
        };

        let mut resolved = Vec::with_capacity(refs.len());
        for reference in &refs {
            let target = nodes
                .get(&reference.id)
                .ok_or_else(|| ReferenceError::UnknownId(reference.id.clone()))?;
            resolved.push(target.clone());
        }

        // Only tracks declare references today, but resolution stays generic
        // over "nodes with outgoing references" so new kinds slot in here.
        if let Some(Node::Track(track)) = nodes.get_mut(id) {
            let mut events = Vec::with_capacity(resolved.len());
            for node in resolved {
                match node {
                    Node::Event(event) => events.push(event),
                    other => {
                        return Err(ReferenceError::WrongKind(other.id().to_string()));
                    }
                }
            }
            order_events(&mut events);
            track.events = events;
        }
    }

    Ok(ModelIndex { nodes, order })
}
