//! # EntityKit Geometry
//!
//! Pure geometry for shape extraction:
//!
//! - **Path parsing**: path description strings into typed drawing commands
//! - **Deduplication**: collapsing repeated outline points in first-seen order
//! - **Transform resolution**: local offsets and matrices into global placement
//!
//! Nothing in this crate fails. Malformed numbers become `NaN` and
//! unsupported path commands are skipped, so callers always get output.
//!
//! ## Usage
//!
//! ```rust
//! use entitykit_geometry::{dedup_paths, resolve_placement, Coordinate, IDENTITY};
//!
//! let outline = dedup_paths(["M 0 0 L 10 10 Z", "M 10 10 L 0 0"]);
//! assert_eq!(outline, vec![Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 10.0)]);
//!
//! let placement = resolve_placement(
//!     Coordinate::new(10.0, 20.0),
//!     0.0,
//!     Coordinate::new(5.0, 5.0),
//!     &IDENTITY,
//! );
//! assert_eq!(placement.position, Coordinate::new(15.0, 25.0));
//! ```

pub mod coordinate;
pub mod dedup;
pub mod path;
pub mod transform;

pub use coordinate::{Coordinate, CoordinateKey};
pub use dedup::{dedup_coordinates, dedup_paths};
pub use path::{extract_coordinates, parse_path, PathCommand, PathLexer, PathToken};
pub use transform::{
    matrix_rotation, resolve_placement, to_global, GlobalPlacement, Matrix2x3, IDENTITY,
};
