//! Region export formats.
//!
//! Regions can be re-emitted as JSON or as OBJ group-marker text. The OBJ
//! form writes one group line per region with a vertex-count comment; it
//! deliberately carries no geometry.

use std::fmt;
use std::str::FromStr;

use crate::error::{ReportError, ReportResult};
use crate::report::Region;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON of the region list.
    Json,
    /// OBJ group markers with vertex-count comments.
    Obj,
}

impl FromStr for ExportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "obj" => Ok(Self::Obj),
            other => Err(ReportError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Obj => write!(f, "obj"),
        }
    }
}

/// Serialize regions in the requested export format.
///
/// # Errors
///
/// Returns [`ReportError::Json`] if JSON encoding fails.
pub fn export_regions(regions: &[Region], format: ExportFormat) -> ReportResult<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(regions)?),
        ExportFormat::Obj => {
            let mut content = String::from("# Miniature painting regions\n");
            for region in regions {
                content.push_str(&format!("g {}\n", region.id));
                content.push_str(&format!("# {} vertices\n", region.vertex_count));
            }
            Ok(content)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_regions() -> Vec<Region> {
        vec![
            Region {
                id: "base".to_string(),
                name: "Base".to_string(),
                description: "Base and ground elements".to_string(),
                color: "#8B4513".to_string(),
                vertex_count: 12,
                vertex_percentage: 60.0,
                vertex_indices: vec![0, 1, 2],
            },
            Region {
                id: "head".to_string(),
                name: "Head".to_string(),
                description: String::new(),
                color: "#F5DEB3".to_string(),
                vertex_count: 8,
                vertex_percentage: 40.0,
                vertex_indices: vec![3, 4],
            },
        ]
    }

    #[test]
    fn obj_export_shape() {
        let text = export_regions(&sample_regions(), ExportFormat::Obj).unwrap();
        assert_eq!(
            text,
            "# Miniature painting regions\n\
             g base\n\
             # 12 vertices\n\
             g head\n\
             # 8 vertices\n"
        );
    }

    #[test]
    fn json_export_round_trips() {
        let regions = sample_regions();
        let json = export_regions(&regions, ExportFormat::Json).unwrap();
        let back: Vec<Region> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, regions);
    }

    #[test]
    fn format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("OBJ".parse::<ExportFormat>().unwrap(), ExportFormat::Obj);
        let err = "ply".parse::<ExportFormat>();
        assert!(matches!(
            err,
            Err(ReportError::UnsupportedFormat { format }) if format == "ply"
        ));
    }
}
