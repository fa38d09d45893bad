//! Report structures and the analysis façade.

use paint_region::{classify_points, RegionCatalog, RegionPartition};
use paint_types::Point3;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ReportResult;

/// Maximum vertex indices per region on the preview path.
pub const PREVIEW_LIMIT: usize = 100;

/// How much of each region's index list a report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexDetail {
    /// Cap index lists at [`PREVIEW_LIMIT`] entries (file-upload path).
    Preview,
    /// Full index lists (direct-array path).
    Full,
}

/// Axis-aligned bounds of the analyzed mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundsInfo {
    /// Minimum corner `[x, y, z]`.
    pub min: [f64; 3],
    /// Maximum corner `[x, y, z]`.
    pub max: [f64; 3],
}

/// Statistics about the analyzed mesh (file path only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshInfo {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of triangle faces.
    pub faces: usize,
    /// Enclosed volume. Meaningful only for closed meshes; 0.0 when empty.
    pub volume: f64,
    /// Bounding box.
    pub bounds: BoundsInfo,
}

/// One classified region with its display metadata and stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Region identifier (the classifier's name, e.g. "torso").
    pub id: String,
    /// Display name (title-cased id).
    pub name: String,
    /// Human-readable description from the active catalog.
    pub description: String,
    /// Display color from the active catalog (hex).
    pub color: String,
    /// Number of vertices assigned to this region.
    pub vertex_count: usize,
    /// Percentage of all vertices assigned to this region.
    pub vertex_percentage: f64,
    /// Assigned vertex indices (possibly preview-capped).
    pub vertex_indices: Vec<u32>,
}

/// Classification report: optional mesh statistics plus the region list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Mesh statistics; present only on the file-upload path.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mesh_info: Option<MeshInfo>,
    /// Classified regions in classifier order (non-empty only).
    pub regions: Vec<Region>,
}

/// Analyze an STL byte buffer and build a preview report.
///
/// Decodes the buffer, classifies the vertices, and shapes a report with
/// mesh statistics and preview-capped index lists.
///
/// # Errors
///
/// Returns an error if the buffer is not valid STL or the decoded vertices
/// contain non-finite coordinates.
pub fn analyze_mesh(data: &[u8], catalog: &RegionCatalog) -> ReportResult<Report> {
    analyze_mesh_with(data, catalog, IndexDetail::Preview)
}

/// Analyze an STL byte buffer with an explicit index-detail choice.
///
/// # Errors
///
/// Same as [`analyze_mesh`].
pub fn analyze_mesh_with(
    data: &[u8],
    catalog: &RegionCatalog,
    detail: IndexDetail,
) -> ReportResult<Report> {
    let mesh = paint_io::load_stl_bytes(data)?;
    let partition = classify_points(&mesh.vertices)?;

    let bounds = mesh.bounds();
    let bounds_info = if bounds.is_empty() {
        BoundsInfo {
            min: [0.0; 3],
            max: [0.0; 3],
        }
    } else {
        BoundsInfo {
            min: [bounds.min.x, bounds.min.y, bounds.min.z],
            max: [bounds.max.x, bounds.max.y, bounds.max.z],
        }
    };

    let mesh_info = MeshInfo {
        vertices: mesh.vertex_count(),
        faces: mesh.face_count(),
        volume: mesh.volume(),
        bounds: bounds_info,
    };

    info!(
        vertices = mesh_info.vertices,
        faces = mesh_info.faces,
        regions = partition.region_count(),
        "mesh analysis complete"
    );

    Ok(Report {
        mesh_info: Some(mesh_info),
        regions: shape_regions(&partition, catalog, detail),
    })
}

/// Classify a direct array of vertex coordinates.
///
/// No mesh statistics are computed and index lists are returned in full.
///
/// # Errors
///
/// Returns an error if any coordinate is non-finite.
pub fn classify_vertices(points: &[[f64; 3]], catalog: &RegionCatalog) -> ReportResult<Report> {
    let points: Vec<Point3<f64>> = points
        .iter()
        .map(|&[x, y, z]| Point3::new(x, y, z))
        .collect();
    let partition = classify_points(&points)?;

    Ok(Report {
        mesh_info: None,
        regions: shape_regions(&partition, catalog, IndexDetail::Full),
    })
}

/// Shape partition buckets into report regions with catalog metadata.
fn shape_regions(
    partition: &RegionPartition,
    catalog: &RegionCatalog,
    detail: IndexDetail,
) -> Vec<Region> {
    partition
        .iter()
        .map(|(name, indices)| {
            let vertex_indices = match detail {
                IndexDetail::Preview => indices[..indices.len().min(PREVIEW_LIMIT)].to_vec(),
                IndexDetail::Full => indices.to_vec(),
            };
            Region {
                id: name.to_string(),
                name: title_case(name),
                description: catalog.description_for(name).to_string(),
                color: catalog.color_for(name).to_string(),
                vertex_count: indices.len(),
                vertex_percentage: partition.percentage(name),
                vertex_indices,
            }
        })
        .collect()
}

/// Capitalize the first letter of a region id for display.
fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
mod tests {
    use super::*;
    use paint_region::FALLBACK_COLOR;

    /// Binary STL with `count` flat triangles at y = 0 (everything base).
    fn flat_binary_stl(count: u32) -> Vec<u8> {
        let mut data = vec![0u8; 80];
        data.extend_from_slice(&count.to_le_bytes());
        for i in 0..count {
            data.extend_from_slice(&[0u8; 12]);
            let x = i as f32;
            for v in [[x, 0.0, 0.0], [x + 1.0, 0.0, 0.0], [x, 0.0, 1.0]] {
                for c in v {
                    data.extend_from_slice(&c.to_le_bytes());
                }
            }
            data.extend_from_slice(&0u16.to_le_bytes());
        }
        data
    }

    #[test]
    fn analyze_reports_mesh_info() {
        let data = flat_binary_stl(2);
        let report = analyze_mesh(&data, &RegionCatalog::humanoid()).unwrap();

        let info = report.mesh_info.unwrap();
        assert_eq!(info.vertices, 6);
        assert_eq!(info.faces, 2);
        assert!((info.volume).abs() < 1e-12);
        assert_eq!(info.bounds.min[1], 0.0);
    }

    #[test]
    fn analyze_caps_preview_indices() {
        // 40 flat triangles = 120 vertices, all in base
        let data = flat_binary_stl(40);
        let report = analyze_mesh(&data, &RegionCatalog::humanoid()).unwrap();

        assert_eq!(report.regions.len(), 1);
        let base = &report.regions[0];
        assert_eq!(base.id, "base");
        assert_eq!(base.vertex_count, 120);
        assert_eq!(base.vertex_indices.len(), PREVIEW_LIMIT);
        assert!((base.vertex_percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn full_detail_keeps_all_indices() {
        let data = flat_binary_stl(40);
        let report =
            analyze_mesh_with(&data, &RegionCatalog::humanoid(), IndexDetail::Full).unwrap();
        assert_eq!(report.regions[0].vertex_indices.len(), 120);
    }

    #[test]
    fn direct_array_path_is_uncapped_and_bare() {
        let points: Vec<[f64; 3]> = (0..150).map(|i| [0.0, 0.0, f64::from(i)]).collect();
        let report = classify_vertices(&points, &RegionCatalog::humanoid()).unwrap();

        assert!(report.mesh_info.is_none());
        assert_eq!(report.regions[0].vertex_indices.len(), 150);
    }

    #[test]
    fn regions_carry_catalog_metadata() {
        let points = vec![[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.2, 0.0]];
        let report = classify_vertices(&points, &RegionCatalog::humanoid()).unwrap();

        let legs = report.regions.iter().find(|r| r.id == "legs").unwrap();
        assert_eq!(legs.name, "Legs");
        assert_eq!(legs.color, "#4682B4");
        assert_eq!(legs.description, "Legs and lower body armor");
    }

    #[test]
    fn swapped_catalog_changes_labels_not_routing() {
        let points = vec![[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.2, 0.0]];
        let report = classify_vertices(&points, &RegionCatalog::creature()).unwrap();

        // The decision tree still emits "legs"; the creature catalog does
        // not know that name, so metadata falls back.
        let legs = report.regions.iter().find(|r| r.id == "legs").unwrap();
        assert_eq!(legs.color, FALLBACK_COLOR);
        assert_eq!(legs.description, "");
        // Known names keep their profile color
        let base = report.regions.iter().find(|r| r.id == "base").unwrap();
        assert_eq!(base.color, "#8B4513");
    }

    #[test]
    fn empty_vertex_array_gives_empty_report() {
        let report = classify_vertices(&[], &RegionCatalog::humanoid()).unwrap();
        assert!(report.regions.is_empty());
    }

    #[test]
    fn non_finite_vertex_is_an_error() {
        let result = classify_vertices(&[[f64::NAN, 0.0, 0.0]], &RegionCatalog::humanoid());
        assert!(result.is_err());
    }

    #[test]
    fn bad_buffer_is_an_io_error() {
        let result = analyze_mesh(b"not an stl", &RegionCatalog::humanoid());
        assert!(matches!(result, Err(crate::ReportError::Io(_))));
    }

    #[test]
    fn title_case_single_word() {
        assert_eq!(title_case("torso"), "Torso");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn report_round_trips_through_json() {
        let points = vec![[0.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let report = classify_vertices(&points, &RegionCatalog::humanoid()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
