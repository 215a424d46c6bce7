#![doc = document_features::document_features!()]
//! Two planar layout algorithms on top of a small geometry toolkit:
//! greedy packing of oriented rectangles into a closed boundary, and detection of
//! the major edge direction of a closed polygon.

/// Major direction detection of closed polygons
pub mod direction;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing shapes into and exporting placements out of this library
pub mod io;

/// Greedy grid packing of oriented rectangles
pub mod packing;

/// Helper functions which do not belong to any specific module
pub mod util;
