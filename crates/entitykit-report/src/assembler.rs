//! Report assembly.
//!
//! Walks the selected groups once and collects one [`ShapeRecord`] per
//! child. Text formatting happens later, in [`crate::artifacts`], so the
//! collected data can be checked independently of the output syntax.

use entitykit_core::SceneNode;
use entitykit_geometry::{
    dedup_paths, matrix_rotation, resolve_placement, Coordinate, GlobalPlacement,
};
use entitykit_settings::{GroupRotation, ReportSettings};
use serde::Serialize;

use crate::classifier::ShapeTally;
use crate::fill::resolve_fill;
use crate::naming::{lowercase_first_letter, Rename};

/// Everything emitted for one child of a group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeRecord {
    /// Normalized name
    pub name: String,
    pub placement: GlobalPlacement,
    pub fill: String,
    /// Deduplicated outline points in local shape space
    pub outline: Vec<Coordinate>,
}

/// One selected group and its children, in document order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupReport {
    /// Normalized name
    pub name: String,
    pub shapes: Vec<ShapeRecord>,
    pub tally: ShapeTally,
}

/// Result of one pass over the selection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    /// Number of top-level nodes in the selection, groups or not
    pub selection_len: usize,
    pub groups: Vec<GroupReport>,
    /// Nodes whose document name is not yet normalized
    pub renames: Vec<Rename>,
}

impl Report {
    pub fn is_empty_selection(&self) -> bool {
        self.selection_len == 0
    }

    pub fn has_groups(&self) -> bool {
        !self.groups.is_empty()
    }

    pub fn shape_count(&self) -> usize {
        self.groups.iter().map(|g| g.shapes.len()).sum()
    }
}

/// Build the report for a selection.
///
/// Only group nodes are processed; anything else is skipped silently.
pub fn assemble(selection: &[SceneNode], settings: &ReportSettings) -> Report {
    let mut report = Report {
        selection_len: selection.len(),
        ..Default::default()
    };

    for node in selection {
        if !node.kind.is_group() {
            tracing::trace!("Skipping non-group selection node '{}' ({})", node.name, node.kind);
            continue;
        }
        let group = assemble_group(node, settings, &mut report.renames);
        report.groups.push(group);
    }

    tracing::debug!(
        "Assembled {} group(s), {} shape(s) from {} selected node(s)",
        report.groups.len(),
        report.shape_count(),
        report.selection_len
    );
    report
}

fn assemble_group(
    group: &SceneNode,
    settings: &ReportSettings,
    renames: &mut Vec<Rename>,
) -> GroupReport {
    let origin = Coordinate::new(group.x, group.y);
    let parent_rotation = match settings.group_rotation {
        GroupRotation::Fixed => 0.0,
        GroupRotation::FromTransform => matrix_rotation(&group.relative_transform.0),
    };

    renames.extend(Rename::needed(&group.id, &group.name));

    let mut tally = ShapeTally::new();
    let mut shapes = Vec::with_capacity(group.children.len());
    for child in &group.children {
        tally.record(child.kind, &child.name);
        renames.extend(Rename::needed(&child.id, &child.name));
        shapes.push(assemble_shape(child, origin, parent_rotation, settings));
    }

    GroupReport {
        name: lowercase_first_letter(&group.name),
        shapes,
        tally,
    }
}

fn assemble_shape(
    shape: &SceneNode,
    origin: Coordinate,
    parent_rotation: f64,
    settings: &ReportSettings,
) -> ShapeRecord {
    let placement = resolve_placement(
        origin,
        parent_rotation,
        Coordinate::new(shape.x, shape.y),
        &shape.relative_transform.0,
    );

    let outline = shape
        .vector_paths
        .as_deref()
        .map(|paths| dedup_paths(paths.iter().map(|p| p.data.as_str())))
        .unwrap_or_default();

    let record = ShapeRecord {
        name: lowercase_first_letter(&shape.name),
        placement,
        fill: resolve_fill(shape.fills.as_deref(), &settings.fallback_fill),
        outline,
    };
    tracing::trace!(
        "Shape '{}': origin ({}, {}), {} outline point(s)",
        record.name,
        record.placement.position.x,
        record.placement.position.y,
        record.outline.len()
    );
    record
}
