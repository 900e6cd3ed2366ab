//! Route objects handed to the host renderer.

use serde::{Deserialize, Serialize};

/// One node of the render tree, in the host router's shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,

    /// Marks the default child of its parent.
    #[serde(default, skip_serializing_if = "is_false")]
    pub index: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RouteObject>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<serde_json::Value>,
}

impl RouteObject {
    /// The synthetic default child of a route with an `index` element.
    pub fn index_entry(element: impl Into<String>) -> Self {
        Self {
            index: true,
            element: Some(element.into()),
            ..Self::default()
        }
    }

    /// Whether the node renders anything: an element or at least one child.
    pub fn has_content(&self) -> bool {
        self.element.is_some() || self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Total number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(RouteObject::node_count)
            .sum::<usize>()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
