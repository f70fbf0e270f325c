//! Relay-style paginated lists (`edges { node { ... } }`)

use serde::{Deserialize, Serialize};

/// A paginated list of nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
    #[serde(default)]
    pub count: Option<i64>,
}

/// One entry in a paginated list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    pub node: T,
    #[serde(default)]
    pub cursor: Option<String>,
}

impl<T> Connection<T> {
    /// Iterate over the nodes
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|e| &e.node)
    }

    /// Consume into the nodes
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|e| e.node).collect()
    }

    /// Cursor of the last edge, for fetching the next page
    pub fn end_cursor(&self) -> Option<&str> {
        self.edges.last().and_then(|e| e.cursor.as_deref())
    }
}
