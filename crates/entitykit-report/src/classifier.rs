//! Shape classification.

use entitykit_core::NodeKind;
use serde::Serialize;

/// Per-group shape counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShapeTally {
    pub rectangles: usize,
    pub ellipses: usize,
    pub polygons: usize,
    pub stars: usize,
    pub lines: usize,
    pub vectors: usize,
    /// Shapes named "core", whatever their kind
    pub cores: usize,
}

impl ShapeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one shape.
    ///
    /// Kinds without a counter are not counted; the core counter is
    /// independent of the kind.
    pub fn record(&mut self, kind: NodeKind, name: &str) {
        match kind {
            NodeKind::Rectangle => self.rectangles += 1,
            NodeKind::Ellipse => self.ellipses += 1,
            NodeKind::Polygon => self.polygons += 1,
            NodeKind::Star => self.stars += 1,
            NodeKind::Line => self.lines += 1,
            NodeKind::Vector => self.vectors += 1,
            NodeKind::Group | NodeKind::Other => {
                tracing::trace!("No counter for {} '{}'", kind, name);
            }
        }
        if is_core_name(name) {
            self.cores += 1;
        }
    }

    /// The six geometric counters plus the core counter
    pub fn total(&self) -> usize {
        self.rectangles
            + self.ellipses
            + self.polygons
            + self.stars
            + self.lines
            + self.vectors
            + self.cores
    }
}

pub fn is_core_name(name: &str) -> bool {
    name.to_lowercase() == "core"
}
