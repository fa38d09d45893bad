//! Geometric region classification.
//!
//! Partitions a point cloud into painting regions by normalized vertical
//! position, with a radial carve-out for arms. Routing is a fixed decision
//! tree; the display catalog plays no part here (see crate docs).

use paint_types::{Aabb, Point3};
use tracing::{debug, info};

use crate::error::{RegionError, RegionResult};
use crate::partition::RegionPartition;

/// Region names the decision tree can emit, in bucket order.
pub const TREE_REGIONS: [&str; 5] = ["base", "legs", "torso", "arms", "head"];

/// Normalized heights below this are base.
const BASE_HEIGHT_MAX: f64 = 0.05;
/// Normalized heights below this (and at least `BASE_HEIGHT_MAX`) are legs.
const LEGS_HEIGHT_MAX: f64 = 0.35;
/// Normalized heights below this are torso, or arms if radially outboard.
const TORSO_HEIGHT_MAX: f64 = 0.65;
/// Normalized heights below this (and at least `TORSO_HEIGHT_MAX`) are head;
/// anything higher falls back to torso.
const HEAD_HEIGHT_MAX: f64 = 0.85;
/// Arms must sit further than this from the central axis...
const ARMS_RADIAL_MIN: f64 = 0.4;
/// ...and higher than this.
const ARMS_HEIGHT_MIN: f64 = 0.4;

/// Bucket positions matching [`TREE_REGIONS`].
const BASE: usize = 0;
const LEGS: usize = 1;
const TORSO: usize = 2;
const ARMS: usize = 3;
const HEAD: usize = 4;

/// Classify a point cloud into painting regions.
///
/// Heights are normalized to `[0, 1]` across the bounding box; radial
/// distances are measured from the bounding-box center axis in the XZ
/// plane and normalized by the maximum. Each point is then assigned to
/// exactly one of `base`, `legs`, `torso`, `arms` or `head` by a fixed
/// priority sequence (first match wins):
///
/// 1. height < 0.05 → `base`
/// 2. height < 0.35 → `legs`
/// 3. height < 0.65 → `arms` if radial > 0.4 and height > 0.4, else `torso`
/// 4. height < 0.85 → `head`
/// 5. otherwise → `torso`
///
/// # Degenerate inputs
///
/// - Empty input returns an empty partition.
/// - Zero vertical extent (a flat object) puts every point in `base`; no
///   radial computation is performed.
/// - All points on one vertical axis get radial distance 0, so none can be
///   `arms`.
///
/// # Errors
///
/// Returns [`RegionError::NonFinitePoint`] if any coordinate is NaN or
/// infinite, and [`RegionError::TooManyPoints`] if there are more points
/// than u32 indices.
///
/// # Example
///
/// ```
/// use paint_region::classify_points;
/// use paint_types::Point3;
///
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 0.5, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let partition = classify_points(&points).unwrap();
/// assert_eq!(partition.get("base"), Some(&[0u32][..]));
/// assert_eq!(partition.get("torso"), Some(&[1u32, 2][..]));
/// ```
pub fn classify_points(points: &[Point3<f64>]) -> RegionResult<RegionPartition> {
    if points.is_empty() {
        return Ok(RegionPartition::empty());
    }
    if u32::try_from(points.len()).is_err() {
        return Err(RegionError::TooManyPoints {
            count: points.len(),
        });
    }
    for (index, point) in points.iter().enumerate() {
        if !(point.x.is_finite() && point.y.is_finite() && point.z.is_finite()) {
            return Err(RegionError::NonFinitePoint { index });
        }
    }

    let bounds = Aabb::from_points(points.iter());
    let height_extent = bounds.max.y - bounds.min.y;

    // Flat object: everything is base.
    if height_extent == 0.0 {
        #[allow(clippy::cast_possible_truncation)]
        // Truncation: length checked against u32 above
        let all: Vec<u32> = (0..points.len() as u32).collect();
        let partition =
            RegionPartition::from_buckets([("base".to_string(), all)], points.len());
        log_stats(&partition);
        return Ok(partition);
    }

    // Radial distances from the bounding-box center axis (XZ plane).
    let center = bounds.center();
    let radial_distances: Vec<f64> = points
        .iter()
        .map(|p| (p.x - center.x).hypot(p.z - center.z))
        .collect();
    let max_radial = radial_distances.iter().fold(0.0_f64, |a, &r| a.max(r));

    let mut buckets: [Vec<u32>; 5] = Default::default();

    for (index, point) in points.iter().enumerate() {
        let height = (point.y - bounds.min.y) / height_extent;
        let radial = if max_radial > 0.0 {
            radial_distances[index] / max_radial
        } else {
            0.0
        };

        let bucket = if height < BASE_HEIGHT_MAX {
            BASE
        } else if height < LEGS_HEIGHT_MAX {
            LEGS
        } else if height < TORSO_HEIGHT_MAX {
            if radial > ARMS_RADIAL_MIN && height > ARMS_HEIGHT_MIN {
                ARMS
            } else {
                TORSO
            }
        } else if height < HEAD_HEIGHT_MAX {
            HEAD
        } else {
            // Above every range: fall back to torso
            TORSO
        };

        #[allow(clippy::cast_possible_truncation)]
        // Truncation: length checked against u32 above
        buckets[bucket].push(index as u32);
    }

    let partition = RegionPartition::from_buckets(
        TREE_REGIONS
            .iter()
            .zip(buckets)
            .map(|(name, indices)| ((*name).to_string(), indices)),
        points.len(),
    );
    log_stats(&partition);
    Ok(partition)
}

fn log_stats(partition: &RegionPartition) {
    info!(
        points = partition.total_points(),
        regions = partition.region_count(),
        "classification complete"
    );
    for (name, indices) in partition.iter() {
        debug!(
            region = name,
            count = indices.len(),
            percentage = format!("{:.1}", partition.percentage(name)),
            "region populated"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Points spanning y in [0, 1] on the vertical axis, plus outriggers to
    /// make radial normalization meaningful.
    fn figurine() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),  // 0: base
            Point3::new(0.0, 0.2, 0.0),  // 1: legs
            Point3::new(0.0, 0.5, 0.0),  // 2: torso (on axis)
            Point3::new(1.0, 0.5, 0.0),  // 3: arms (outboard at mid height)
            Point3::new(0.0, 0.7, 0.0),  // 4: head
            Point3::new(0.0, 1.0, 0.0),  // 5: fallback torso
            Point3::new(-1.0, 0.5, 0.0), // 6: arms (other side)
        ]
    }

    #[test]
    fn empty_input_returns_empty_partition() {
        let partition = classify_points(&[]).unwrap();
        assert!(partition.is_empty());
    }

    #[test]
    fn flat_object_is_all_base() {
        let points = vec![
            Point3::new(0.0, 3.0, 0.0),
            Point3::new(5.0, 3.0, 2.0),
            Point3::new(-1.0, 3.0, 7.0),
        ];
        let partition = classify_points(&points).unwrap();
        assert_eq!(partition.region_count(), 1);
        assert_eq!(partition.get("base"), Some(&[0u32, 1, 2][..]));
    }

    #[test]
    fn figurine_buckets() {
        let partition = classify_points(&figurine()).unwrap();
        assert_eq!(partition.get("base"), Some(&[0u32][..]));
        assert_eq!(partition.get("legs"), Some(&[1u32][..]));
        assert_eq!(partition.get("torso"), Some(&[2u32, 5][..]));
        assert_eq!(partition.get("arms"), Some(&[3u32, 6][..]));
        assert_eq!(partition.get("head"), Some(&[4u32][..]));
    }

    #[test]
    fn every_point_assigned_exactly_once() {
        let points = figurine();
        let partition = classify_points(&points).unwrap();

        let mut seen = vec![false; points.len()];
        for (_, indices) in partition.iter() {
            for &i in indices {
                assert!(!seen[i as usize], "index {i} assigned twice");
                seen[i as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "some index never assigned");
    }

    #[test]
    fn thresholds_are_exclusive_at_the_top() {
        // y spans [0, 1] so normalized height equals y directly.
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.05, 0.0), // exactly at base cutoff -> legs
            Point3::new(0.0, 0.35, 0.0), // exactly at legs cutoff -> torso
            Point3::new(0.0, 0.65, 0.0), // exactly at torso cutoff -> head
            Point3::new(0.0, 0.85, 0.0), // exactly at head cutoff -> torso
        ];
        let partition = classify_points(&points).unwrap();
        assert_eq!(partition.get("base"), Some(&[0u32][..]));
        assert!(partition.get("legs").unwrap().contains(&2));
        assert!(partition.get("torso").unwrap().contains(&3));
        assert!(partition.get("head").unwrap().contains(&4));
        assert!(partition.get("torso").unwrap().contains(&5));
    }

    #[test]
    fn arm_carve_out_requires_radial_distance() {
        // Anchors at the corners fix the bounding box so that the probe
        // points land at normalized height 0.5 and radial 0.5 / 0.3.
        let points = vec![
            Point3::new(-2.0, 0.0, 0.0), // 0: base, radial 1.0
            Point3::new(2.0, 1.0, 0.0),  // 1: fallback torso, radial 1.0
            Point3::new(1.0, 0.5, 0.0),  // 2: radial 0.5 at height 0.5 -> arms
            Point3::new(0.6, 0.5, 0.0),  // 3: radial 0.3 at height 0.5 -> torso
        ];
        let partition = classify_points(&points).unwrap();
        assert_eq!(partition.get("arms"), Some(&[2u32][..]));
        assert!(partition.get("torso").unwrap().contains(&3));
    }

    #[test]
    fn collinear_points_never_make_arms() {
        // All points share (x, z): radial distance is 0 everywhere.
        let points: Vec<Point3<f64>> = (0..=10)
            .map(|i| Point3::new(4.0, f64::from(i) / 10.0, -2.0))
            .collect();
        let partition = classify_points(&points).unwrap();
        assert!(partition.get("arms").is_none());
    }

    #[test]
    fn high_points_fall_back_to_torso() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.9, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let partition = classify_points(&points).unwrap();
        assert_eq!(partition.get("torso"), Some(&[1u32, 2][..]));
    }

    #[test]
    fn single_point_is_flat_and_base() {
        let partition = classify_points(&[Point3::new(3.0, 7.0, -1.0)]).unwrap();
        assert_eq!(partition.get("base"), Some(&[0u32][..]));
    }

    #[test]
    fn nan_coordinate_is_rejected() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, f64::NAN, 0.0),
        ];
        let result = classify_points(&points);
        assert!(matches!(
            result,
            Err(RegionError::NonFinitePoint { index: 1 })
        ));
    }

    #[test]
    fn infinite_coordinate_is_rejected() {
        let points = vec![Point3::new(f64::INFINITY, 0.0, 0.0)];
        let result = classify_points(&points);
        assert!(matches!(
            result,
            Err(RegionError::NonFinitePoint { index: 0 })
        ));
    }

    #[test]
    fn indices_are_ascending_within_buckets() {
        let points = figurine();
        let partition = classify_points(&points).unwrap();
        for (_, indices) in partition.iter() {
            assert!(indices.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
