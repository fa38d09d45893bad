//! Analysis façade and report shaping for the painting-region toolkit.
//!
//! This crate is the boundary layer around
//! [`paint_region`](paint_region::classify_points): it accepts either a raw
//! STL byte buffer or a direct array of point coordinates, runs the
//! classification, and shapes the result into [`Report`] structures carrying
//! per-region display metadata and stats.
//!
//! Two formatting decisions live here, not in the core:
//!
//! - **Preview capping**: the file-upload path returns at most 100 vertex
//!   indices per region to bound response size; the direct-array path
//!   returns full lists ([`IndexDetail`]).
//! - **Export**: region groups can be re-emitted as JSON or as OBJ
//!   group-marker text (no geometry re-export).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod export;
mod report;

pub use error::{ReportError, ReportResult};
pub use export::{export_regions, ExportFormat};
pub use report::{
    analyze_mesh, analyze_mesh_with, classify_vertices, BoundsInfo, IndexDetail, MeshInfo,
    Region, Report, PREVIEW_LIMIT,
};
