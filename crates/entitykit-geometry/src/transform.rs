//! Local-to-global transform resolution.
//!
//! A shape's placement is derived from its parent group's origin and
//! rotation, the shape's local offset and the shape's own affine matrix.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Row-major 2x3 affine matrix `[[a, c, tx], [b, d, ty]]`.
pub type Matrix2x3 = [[f64; 3]; 2];

pub const IDENTITY: Matrix2x3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

/// Where a shape sits in the group's frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalPlacement {
    pub position: Coordinate,
    /// The shape's own rotation, independent of the parent's
    pub rotation_radians: f64,
    pub flipped_horizontally: bool,
}

/// Rotate `local` by `parent_rotation` and translate it by `origin`.
pub fn to_global(origin: Coordinate, parent_rotation: f64, local: Coordinate) -> Coordinate {
    let (sin, cos) = parent_rotation.sin_cos();
    Coordinate::new(
        origin.x + local.x * cos - local.y * sin,
        origin.y + local.x * sin + local.y * cos,
    )
}

/// Rotation encoded in a matrix, in radians.
pub fn matrix_rotation(matrix: &Matrix2x3) -> f64 {
    matrix[1][0].atan2(matrix[0][0])
}

/// Resolve a shape's global placement.
pub fn resolve_placement(
    origin: Coordinate,
    parent_rotation: f64,
    local: Coordinate,
    matrix: &Matrix2x3,
) -> GlobalPlacement {
    GlobalPlacement {
        position: to_global(origin, parent_rotation, local),
        rotation_radians: matrix_rotation(matrix),
        flipped_horizontally: matrix[0][0] < 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_zero_parent_rotation_is_translation() {
        let placement = resolve_placement(
            Coordinate::new(10.0, 20.0),
            0.0,
            Coordinate::new(5.0, 5.0),
            &IDENTITY,
        );
        assert_eq!(
            placement,
            GlobalPlacement {
                position: Coordinate::new(15.0, 25.0),
                rotation_radians: 0.0,
                flipped_horizontally: false,
            }
        );
    }

    #[test]
    fn test_horizontal_flip() {
        let matrix = [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let placement = resolve_placement(Coordinate::default(), 0.0, Coordinate::default(), &matrix);
        assert!(placement.flipped_horizontally);
        assert_eq!(placement.rotation_radians, PI);
    }

    #[test]
    fn test_shape_rotation() {
        let (sin, cos) = FRAC_PI_4.sin_cos();
        let matrix = [[cos, -sin, 0.0], [sin, cos, 0.0]];
        assert!((matrix_rotation(&matrix) - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn test_parent_rotation() {
        let global = to_global(Coordinate::new(1.0, 1.0), FRAC_PI_2, Coordinate::new(2.0, 0.0));
        assert!((global.x - 1.0).abs() < 1e-12);
        assert!((global.y - 3.0).abs() < 1e-12);
    }
}
