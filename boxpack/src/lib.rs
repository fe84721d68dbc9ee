#![doc = document_features::document_features!()]
//! `boxpack` packs rectangular items into rectangular containers.
//!
//! Items are placed greedily at pivot positions derived from the items already in a [`Bin`](entities::Bin),
//! trying all six axis-aligned orientations at each pivot.
//! The [`service`] module runs one or more packing algorithms over one or more containers in parallel.

/// Packing algorithms: the common contract, the algorithm identifiers and the pivot-rotation heuristic
pub mod algorithms;

/// Items, bins and the results of packing them
pub mod entities;

/// Errors raised by the packing core
pub mod error;

/// Geometric primitives: positions, axes, orientations and axis-aligned boxes
pub mod geometry;

/// Importing packing requests into and exporting results out of this library
pub mod io;

/// Orchestration of packing runs over multiple containers and algorithms
pub mod service;

/// Helper functions which do not belong to any specific module
pub mod util;
