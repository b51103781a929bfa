//! # EntityKit Report
//!
//! Turns a selection of groups into the three text artifacts consumed by
//! the game code: a summary for the panel, a placement/styling config and
//! the outline data.
//!
//! The pipeline is split in two. [`assemble`] collects one record per
//! shape, then [`Artifacts::render`] formats the records. [`Plugin`] wires
//! both to a [`Host`](entitykit_core::Host) and the event bus.

pub mod artifacts;
pub mod assembler;
pub mod classifier;
pub mod fill;
pub mod naming;
pub mod number;
pub mod plugin;

pub use artifacts::{Artifacts, ConfigBuilder, DataBuilder, InfoBuilder};
pub use assembler::{assemble, GroupReport, Report, ShapeRecord};
pub use classifier::{is_core_name, ShapeTally};
pub use fill::resolve_fill;
pub use naming::{lowercase_first_letter, Rename};
pub use number::{format_fixed, js_number, js_round, to_fixed};
pub use plugin::{CurrentArtifacts, Plugin};
