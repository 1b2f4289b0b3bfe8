//! Department hierarchy
//!
//! Turns flat department rows into a forest of nested nodes, prunes that
//! forest for a search term, and renders it as a Mermaid chart. Everything
//! here is pure and synchronous: each call allocates its own output and never
//! touches shared state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod builder;
mod chart;
mod filter;

pub use builder::build;
pub use chart::render_mermaid;
pub use filter::filter;

/// A department row as fetched from the store
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRecord {
    pub id: i64,
    pub parent_id: Option<i64>,
    /// Depth hint from the source data; not checked against the parent chain
    pub level: i32,
    pub organization: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A department with its direct children
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentNode {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub level: i32,
    pub organization: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Children attached by the builder; filtering leaves it unchanged
    #[serde(default)]
    pub child_count: usize,
    #[serde(default)]
    pub children: Vec<DepartmentNode>,
}

impl From<DepartmentRecord> for DepartmentNode {
    fn from(record: DepartmentRecord) -> Self {
        Self {
            id: record.id,
            parent_id: record.parent_id,
            level: record.level,
            organization: record.organization,
            name: record.name,
            description: record.description,
            child_count: 0,
            children: Vec::new(),
        }
    }
}

impl DepartmentNode {
    /// Total number of nodes in this subtree, including `self`
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(DepartmentNode::subtree_len).sum::<usize>()
    }
}

/// Total number of nodes in a forest
pub fn forest_len(forest: &[DepartmentNode]) -> usize {
    forest.iter().map(DepartmentNode::subtree_len).sum()
}

/// Bodies whose structures the directory publishes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Organization {
    Ulb,
    Mcg,
    Gmda,
    Ward,
}

impl Organization {
    pub const ALL: [Organization; 4] = [
        Organization::Ulb,
        Organization::Mcg,
        Organization::Gmda,
        Organization::Ward,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Organization::Ulb => "ULB",
            Organization::Mcg => "MCG",
            Organization::Gmda => "GMDA",
            Organization::Ward => "WARD",
        }
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Organization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Organization::ALL
            .into_iter()
            .find(|org| org.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown organization '{}'", s))
    }
}

/// Which records become roots of the forest
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RootPolicy {
    /// Records without a parent are the roots
    #[default]
    NullParent,
    /// Direct children of the given container record are the roots
    Container(i64),
}

/// Per-organization build parameters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HierarchyPolicy {
    pub root: RootPolicy,
    /// Name markers promoted ahead of their siblings, strongest first
    pub priority: Vec<String>,
}

impl HierarchyPolicy {
    pub fn container(id: i64) -> Self {
        Self {
            root: RootPolicy::Container(id),
            priority: Vec::new(),
        }
    }

    pub fn with_priority<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority = markers.into_iter().map(Into::into).collect();
        self
    }
}
