//! Core geometry types for the painting-region toolkit.
//!
//! This crate provides the foundational types the rest of the workspace
//! builds on:
//!
//! - [`IndexedMesh`] - A triangle mesh with indexed vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero GUI or engine dependencies**. It can
//! be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Coordinate System
//!
//! Miniatures stand along the **Y axis**:
//! - X: width (left/right)
//! - Y: height (up/down)
//! - Z: depth (front/back)
//!
//! Face winding is counter-clockwise (CCW) when viewed from outside.
//!
//! # Example
//!
//! ```
//! use paint_types::{IndexedMesh, Point3};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(0.5, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;

pub use bounds::Aabb;
pub use mesh::{unit_cube, IndexedMesh};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
