//! Serializable capture of an element tree after layout.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::geometry::{Position, Size};
use crate::LayoutError;

/// Geometry of one element and, recursively, its children.
///
/// `path` names the element by its child indices from the root, e.g. `"0/2/1"`.
/// The root's path is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub path: String,
    pub position: Position,
    pub size: Size,
    pub min_size: Size,
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSnapshot>,
}

impl ElementSnapshot {
    /// Record `root` and everything below it.
    pub fn capture(root: &dyn Element) -> Self {
        Self::capture_at(root, String::new())
    }

    fn capture_at(element: &dyn Element, path: String) -> Self {
        let children = element
            .children()
            .iter()
            .enumerate()
            .map(|(i, child)| {
                let child_path = if path.is_empty() {
                    i.to_string()
                } else {
                    format!("{path}/{i}")
                };
                Self::capture_at(child.as_ref(), child_path)
            })
            .collect();

        Self {
            path,
            position: element.position(),
            size: element.size(),
            min_size: element.min_size(),
            visible: element.visible(),
            children,
        }
    }

    /// Visit this snapshot and every descendant, depth first.
    pub fn walk(&self, visit: &mut dyn FnMut(&ElementSnapshot)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Number of elements in the tree, root included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    pub fn to_json(&self) -> Result<String, LayoutError> {
        serde_json::to_string_pretty(self).map_err(LayoutError::Snapshot)
    }
}
