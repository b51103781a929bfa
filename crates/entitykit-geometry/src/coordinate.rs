use serde::{Deserialize, Serialize};

/// A 2-D point in either local shape space or global group space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Identity used for deduplication.
    pub fn key(&self) -> CoordinateKey {
        CoordinateKey(canonical_bits(self.x), canonical_bits(self.y))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Exact-value identity of a coordinate.
///
/// Two coordinates share a key when both components are the same number:
/// `-0` and `0` are one value, and every `NaN` is the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateKey(u64, u64);

fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}
