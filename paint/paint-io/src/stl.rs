//! STL (Stereolithography) decoding.
//!
//! Supports both ASCII and binary STL, auto-detected from the buffer:
//! - ASCII buffers start with "solid" (after optional whitespace)
//! - Binary buffers have an 80-byte header followed by a face count
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored, often contains file info)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector (ignored)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (usually 0)
//! end
//! ```

use std::path::Path;

use paint_types::{IndexedMesh, Point3};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record in binary STL (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Decode a mesh from an in-memory STL buffer.
///
/// Automatically detects ASCII vs binary format. This is the primary entry
/// point for uploaded model data.
///
/// # Errors
///
/// Returns an error if the buffer is too small to be STL, the declared face
/// count does not match the buffer length, or ASCII content fails to parse.
///
/// # Example
///
/// ```no_run
/// use paint_io::load_stl_bytes;
///
/// let data = std::fs::read("model.stl").unwrap();
/// let mesh = load_stl_bytes(&data).unwrap();
/// ```
pub fn load_stl_bytes(data: &[u8]) -> IoResult<IndexedMesh> {
    if data.len() < 6 {
        return Err(IoError::invalid_content("buffer too small to be valid STL"));
    }

    // ASCII starts with "solid", but some binary headers do too. Nulls in
    // the first 80 bytes mean binary.
    let prefix = String::from_utf8_lossy(&data[..data.len().min(HEADER_SIZE)]);
    let mesh = if prefix.trim_start().starts_with("solid") && !has_binary_header(data) {
        load_stl_ascii(data)?
    } else {
        load_stl_binary(data)?
    };

    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "decoded STL buffer"
    );

    Ok(mesh)
}

/// Decode a mesh from an STL file on disk.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the path does not exist, otherwise
/// the same errors as [`load_stl_bytes`].
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    load_stl_bytes(&data)
}

/// Check if the buffer looks binary despite starting with "solid".
fn has_binary_header(data: &[u8]) -> bool {
    if data.len() < HEADER_SIZE + 4 {
        return false;
    }
    data[..HEADER_SIZE].contains(&0)
}

/// Decode a binary STL buffer.
fn load_stl_binary(data: &[u8]) -> IoResult<IndexedMesh> {
    if data.len() < HEADER_SIZE + 4 {
        return Err(IoError::InvalidHeader {
            expected: HEADER_SIZE + 4,
            got: data.len(),
        });
    }

    let face_count = u32::from_le_bytes([
        data[HEADER_SIZE],
        data[HEADER_SIZE + 1],
        data[HEADER_SIZE + 2],
        data[HEADER_SIZE + 3],
    ]);

    let mut mesh = IndexedMesh::with_capacity((face_count as usize) * 3, face_count as usize);
    let mut offset = HEADER_SIZE + 4;

    for i in 0..face_count {
        if data.len() < offset + TRIANGLE_SIZE {
            return Err(IoError::TruncatedFaces {
                expected: face_count,
                got: i,
            });
        }
        let record = &data[offset..offset + TRIANGLE_SIZE];

        // Skip the 12-byte normal, read the 3 vertices
        let v0 = read_point(&record[12..24]);
        let v1 = read_point(&record[24..36]);
        let v2 = read_point(&record[36..48]);

        #[allow(clippy::cast_possible_truncation)]
        // Truncation: mesh indices are u32, meshes with >4B vertices are unsupported
        let base_idx = mesh.vertices.len() as u32;
        mesh.vertices.push(v0);
        mesh.vertices.push(v1);
        mesh.vertices.push(v2);
        mesh.faces.push([base_idx, base_idx + 1, base_idx + 2]);

        offset += TRIANGLE_SIZE;
    }

    Ok(mesh)
}

/// Read a point from 12 bytes (3 little-endian f32s).
fn read_point(buf: &[u8]) -> Point3<f64> {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Point3::new(f64::from(x), f64::from(y), f64::from(z))
}

/// Decode an ASCII STL buffer.
fn load_stl_ascii(data: &[u8]) -> IoResult<IndexedMesh> {
    let text = String::from_utf8_lossy(data);
    let mut mesh = IndexedMesh::new();
    let mut in_facet = false;
    let mut in_loop = false;
    let mut vertices_in_face: Vec<Point3<f64>> = Vec::with_capacity(3);

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        match parts[0].to_lowercase().as_str() {
            "facet" => {
                in_facet = true;
            }
            "outer" => {
                if parts.len() >= 2 && parts[1].eq_ignore_ascii_case("loop") {
                    in_loop = true;
                    vertices_in_face.clear();
                }
            }
            "vertex" => {
                if in_loop && parts.len() >= 4 {
                    let x: f64 = parts[1].parse()?;
                    let y: f64 = parts[2].parse()?;
                    let z: f64 = parts[3].parse()?;
                    vertices_in_face.push(Point3::new(x, y, z));
                }
            }
            "endloop" => {
                in_loop = false;
            }
            "endfacet" => {
                if in_facet && vertices_in_face.len() == 3 {
                    #[allow(clippy::cast_possible_truncation)]
                    // Truncation: mesh indices are u32, meshes with >4B vertices unsupported
                    let base_idx = mesh.vertices.len() as u32;
                    mesh.vertices.append(&mut vertices_in_face);
                    mesh.faces.push([base_idx, base_idx + 1, base_idx + 2]);
                }
                in_facet = false;
            }
            "endsolid" => {
                break;
            }
            _ => {
                // Ignore unknown lines
            }
        }
    }

    Ok(mesh)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    /// Build a binary STL buffer with the given triangles.
    fn binary_stl(triangles: &[[[f32; 3]; 3]]) -> Vec<u8> {
        let mut data = vec![0u8; HEADER_SIZE];
        data.extend_from_slice(&u32::try_from(triangles.len()).unwrap().to_le_bytes());
        for tri in triangles {
            data.extend_from_slice(&[0u8; 12]); // normal
            for v in tri {
                for c in v {
                    data.extend_from_slice(&c.to_le_bytes());
                }
            }
            data.extend_from_slice(&0u16.to_le_bytes()); // attribute
        }
        data
    }

    #[test]
    fn binary_decode() {
        let data = binary_stl(&[[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]]);
        let mesh = load_stl_bytes(&data).unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.vertices[1].x, 1.0);
    }

    #[test]
    fn ascii_decode() {
        let ascii = b"solid test
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid test";

        let mesh = load_stl_bytes(ascii).unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn buffer_too_small() {
        let result = load_stl_bytes(b"sol");
        assert!(matches!(result, Err(IoError::InvalidContent { .. })));
    }

    #[test]
    fn truncated_binary() {
        let mut data = binary_stl(&[[[0.0; 3]; 3]]);
        // Declare two faces but only provide one
        data[HEADER_SIZE..HEADER_SIZE + 4].copy_from_slice(&2u32.to_le_bytes());
        let result = load_stl_bytes(&data);
        assert!(matches!(
            result,
            Err(IoError::TruncatedFaces {
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn binary_with_solid_prefix() {
        // A binary STL whose header happens to start with "solid"
        let mut data = binary_stl(&[[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]]);
        data[..5].copy_from_slice(b"solid");
        let mesh = load_stl_bytes(&data).unwrap();
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn ascii_bad_float() {
        let ascii = b"solid test
  facet normal 0 0 1
    outer loop
      vertex nope 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid test";
        let result = load_stl_bytes(ascii);
        assert!(matches!(result, Err(IoError::ParseFloat(_))));
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_stl("nonexistent_file_12345.stl");
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tri.stl");
        let data = binary_stl(&[[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]]);
        std::fs::write(&path, &data).unwrap();

        let mesh = load_stl(&path).unwrap();
        assert_eq!(mesh.face_count(), 1);
    }
}
