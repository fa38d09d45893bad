//! STL decoding for the painting-region toolkit.
//!
//! This crate turns uploaded STL buffers (or files) into an
//! [`IndexedMesh`](paint_types::IndexedMesh) for classification.
//! Both binary and ASCII STL are supported and auto-detected.
//!
//! Decode-only by design: the toolkit never re-exports geometry, so there
//! is no save path here.
//!
//! # Example
//!
//! ```no_run
//! use paint_io::load_stl;
//!
//! let mesh = load_stl("model.stl").unwrap();
//! println!("Loaded {} faces", mesh.faces.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::{load_stl, load_stl_bytes};
