//! Geometric painting-region classification for miniature meshes.
//!
//! This crate partitions the vertices of a miniature figurine into named
//! painting regions (base, legs, torso, arms, head) using purely geometric
//! heuristics: normalized vertical position and normalized radial distance
//! from the model's central axis. No topology analysis, no learning.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero GUI or engine dependencies**. It can
//! be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//!
//! # Overview
//!
//! - [`classify_points`] - Partition a point cloud into region buckets
//! - [`RegionPartition`] - The resulting name → vertex-index mapping
//! - [`RegionCatalog`] / [`RegionDefinition`] - Display metadata (colors,
//!   descriptions) for region names
//!
//! # Catalog vs. decision tree
//!
//! Classification routing is a fixed decision tree over normalized height
//! and radial distance; it always emits the same five region names. The
//! catalog never influences routing — it only supplies the color and
//! description a region is later labeled with. Swapping in the
//! [`creature`](RegionCatalog::creature) or
//! [`vehicle`](RegionCatalog::vehicle) profile changes labels, not which
//! bucket a vertex lands in; names the active catalog does not know fall
//! back to gray and an empty description. The catalog is an explicit
//! per-call parameter wherever it is consulted, so concurrent callers with
//! different profiles never observe each other's catalog.
//!
//! # Quick Start
//!
//! ```
//! use paint_region::{classify_points, RegionCatalog};
//! use paint_types::Point3;
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),  // lowest -> base
//!     Point3::new(0.0, 1.0, 0.0),  // highest -> torso (fallback)
//!     Point3::new(0.0, 0.2, 0.0),  // lower body -> legs
//! ];
//!
//! let partition = classify_points(&points).unwrap();
//! assert_eq!(partition.get("base"), Some(&[0u32][..]));
//!
//! let catalog = RegionCatalog::humanoid();
//! assert_eq!(catalog.color_for("base"), "#8B4513");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod catalog;
mod classify;
mod error;
mod partition;

pub use catalog::{RegionCatalog, RegionDefinition, FALLBACK_COLOR};
pub use classify::{classify_points, TREE_REGIONS};
pub use error::{RegionError, RegionResult};
pub use partition::RegionPartition;

// Re-export for convenience
pub use paint_types::Point3;
