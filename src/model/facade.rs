//! Data access facade over the finished model.
//!
//! Buckets every node by category for the rendering layer. Lookup of an
//! empty category returns an empty slice by contract, so consumers never
//! need existence checks.

use super::order::{order_events, order_tracks};
use super::resolver::ModelIndex;
use crate::parser::record::{Event, Node, Track};
use serde::Serialize;
use std::collections::HashMap;

/// Logical grouping of nodes handed to rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AppInfo,
    Track,
    Event,
    Other,
}

impl Category {
    fn of(node: &Node) -> Self {
        match node {
            Node::AppInfo(_) => Category::AppInfo,
            Node::Track(_) => Category::Track,
            Node::Event(_) => Category::Event,
            Node::Generic(_) => Category::Other,
        }
    }
}

/// The terminal artifact of normalization: category to ordered nodes
#[derive(Debug, Clone, Serialize)]
pub struct CategorizedModel {
    buckets: HashMap<Category, Vec<Node>>,
}

impl CategorizedModel {
    /// Bucket every node of the index by its variant.
    ///
    /// Buckets keep document traversal order, except the event bucket, which
    /// is sorted by start instant.
    pub fn from_index(index: &ModelIndex) -> Self {
        let mut buckets: HashMap<Category, Vec<Node>> = HashMap::new();

        for node in index.nodes() {
            buckets
                .entry(Category::of(node))
                .or_default()
                .push(node.clone());
        }

        if let Some(bucket) = buckets.get_mut(&Category::Event) {
            let mut events: Vec<Event> = bucket
                .iter()
                .filter_map(|node| match node {
                    Node::Event(event) => Some(event.clone()),
                    _ => None,
                })
                .collect();
            order_events(&mut events);
            *bucket = events.into_iter().map(Node::Event).collect();
        }

        Self { buckets }
    }

    /// Nodes of a category, in order.
    ///
    /// A category with no members yields an empty slice; absence is never an
    /// error. This defaulting is part of the contract so rendering code can
    /// iterate unconditionally.
    pub fn get(&self, category: Category) -> &[Node] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Name of the app this schedule belongs to, if the document carried one
    pub fn app_name(&self) -> Option<&str> {
        self.get(Category::AppInfo).iter().find_map(|node| match node {
            Node::AppInfo(app) => app.name.as_deref(),
            _ => None,
        })
    }

    /// All tracks, sorted by their declared sort order
    pub fn tracks(&self) -> Vec<&Track> {
        let mut tracks: Vec<&Track> = self
            .get(Category::Track)
            .iter()
            .filter_map(|node| match node {
                Node::Track(track) => Some(track),
                _ => None,
            })
            .collect();
        order_tracks(&mut tracks);
        tracks
    }

    /// All events, sorted by start instant
    pub fn events(&self) -> Vec<&Event> {
        self.get(Category::Event)
            .iter()
            .filter_map(|node| match node {
                Node::Event(event) => Some(event),
                _ => None,
            })
            .collect()
    }
}
