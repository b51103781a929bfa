//! Coordinate deduplication.
//!
//! Outline points are compared by exact value (see [`CoordinateKey`]); the
//! first occurrence of each point is kept and order is preserved.

use std::collections::HashSet;

use crate::coordinate::{Coordinate, CoordinateKey};
use crate::path::extract_coordinates;

/// Remove repeated coordinates, keeping first-seen order.
pub fn dedup_coordinates<I>(coordinates: I) -> Vec<Coordinate>
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut seen: HashSet<CoordinateKey> = HashSet::new();
    coordinates
        .into_iter()
        .filter(|c| seen.insert(c.key()))
        .collect()
}

/// Outline of a shape made of several path descriptions.
///
/// All paths are concatenated before deduplication, so a point shared by
/// two sub-paths is emitted once.
pub fn dedup_paths<'a, I>(paths: I) -> Vec<Coordinate>
where
    I: IntoIterator<Item = &'a str>,
{
    dedup_coordinates(paths.into_iter().flat_map(extract_coordinates))
}
