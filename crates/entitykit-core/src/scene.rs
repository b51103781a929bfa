//! Scene model supplied by the design tool.
//!
//! These types mirror the JSON the host hands over for the current
//! selection. Only the attributes the report pipeline reads are modelled;
//! everything else in the host payload is ignored during decoding.

use serde::{Deserialize, Serialize};

/// Geometric kind of a scene node, as tagged by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Group,
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Line,
    Vector,
    /// Any tag the pipeline has no dedicated handling for (frames, text, ...)
    #[serde(other)]
    Other,
}

impl NodeKind {
    pub fn is_group(&self) -> bool {
        matches!(self, NodeKind::Group)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Group => write!(f, "GROUP"),
            Self::Rectangle => write!(f, "RECTANGLE"),
            Self::Ellipse => write!(f, "ELLIPSE"),
            Self::Polygon => write!(f, "POLYGON"),
            Self::Star => write!(f, "STAR"),
            Self::Line => write!(f, "LINE"),
            Self::Vector => write!(f, "VECTOR"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}

/// Row-major 2x3 affine matrix `[[a, c, tx], [b, d, ty]]`.
///
/// This is the node's transform relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AffineMatrix(pub [[f64; 3]; 2]);

impl AffineMatrix {
    pub const fn identity() -> Self {
        Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
    }

    /// Matrix rotated by `angle` radians about the origin.
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self([[cos, -sin, 0.0], [sin, cos, 0.0]])
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

/// RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    #[serde(other)]
    Other,
}

/// One entry of a node's fill list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    #[serde(default)]
    pub color: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Paint {
    pub fn solid(r: f64, g: f64, b: f64) -> Self {
        Self {
            kind: PaintKind::Solid,
            color: Rgb { r, g, b },
            opacity: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// One outline path entry; `data` is a path description string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorPath {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winding_rule: Option<String>,
    pub data: String,
}

impl VectorPath {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            winding_rule: None,
            data: data.into(),
        }
    }
}

/// A node of the current selection, with its direct children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub relative_transform: AffineMatrix,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_paths: Option<Vec<VectorPath>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Creates a node at the origin with an identity transform.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            x: 0.0,
            y: 0.0,
            relative_transform: AffineMatrix::identity(),
            fills: None,
            vector_paths: None,
            children: Vec::new(),
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_transform(mut self, transform: AffineMatrix) -> Self {
        self.relative_transform = transform;
        self
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.get_or_insert_with(Vec::new).push(paint);
        self
    }

    pub fn with_path(mut self, data: impl Into<String>) -> Self {
        self.vector_paths
            .get_or_insert_with(Vec::new)
            .push(VectorPath::new(data));
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Depth-first search for a node by id.
pub fn find_node_mut<'a>(nodes: &'a mut [SceneNode], id: &str) -> Option<&'a mut SceneNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}
