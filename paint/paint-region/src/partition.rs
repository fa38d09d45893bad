//! Classification result.

use serde::{Deserialize, Serialize};

/// The result of classifying a point cloud: an ordered mapping from region
/// name to the vertex indices assigned to it.
///
/// Invariants:
/// - Every input index appears in exactly one bucket.
/// - Indices within a bucket are ascending (points are scanned once in
///   index order).
/// - Empty buckets are omitted.
/// - Bucket order follows the classifier's fixed region order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionPartition {
    buckets: Vec<(String, Vec<u32>)>,
    total_points: usize,
}

impl RegionPartition {
    /// Create an empty partition (the result for empty input).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            buckets: Vec::new(),
            total_points: 0,
        }
    }

    /// Create a partition from named buckets, dropping empty ones.
    ///
    /// `total_points` is the size of the classified input, used for
    /// percentage stats.
    pub(crate) fn from_buckets(
        buckets: impl IntoIterator<Item = (String, Vec<u32>)>,
        total_points: usize,
    ) -> Self {
        Self {
            buckets: buckets
                .into_iter()
                .filter(|(_, indices)| !indices.is_empty())
                .collect(),
            total_points,
        }
    }

    /// Get the indices assigned to a region, if any were.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[u32]> {
        self.buckets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, indices)| indices.as_slice())
    }

    /// Number of non-empty regions.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.buckets.len()
    }

    /// Check if no points were classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of points that were classified.
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.total_points
    }

    /// Number of points assigned to a region (0 if absent).
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.get(name).map_or(0, <[u32]>::len)
    }

    /// Percentage of all points assigned to a region.
    ///
    /// Returns 0.0 for absent regions and for an empty partition.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision loss: counts are far below 2^52
    pub fn percentage(&self, name: &str) -> f64 {
        if self.total_points == 0 {
            return 0.0;
        }
        self.count(name) as f64 / self.total_points as f64 * 100.0
    }

    /// Iterate over `(name, indices)` pairs in region order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.buckets
            .iter()
            .map(|(name, indices)| (name.as_str(), indices.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> RegionPartition {
        RegionPartition::from_buckets(
            [
                ("base".to_string(), vec![0, 1]),
                ("legs".to_string(), vec![]),
                ("torso".to_string(), vec![2, 3, 4, 5]),
            ],
            6,
        )
    }

    #[test]
    fn empty_buckets_are_dropped() {
        let partition = sample();
        assert_eq!(partition.region_count(), 2);
        assert!(partition.get("legs").is_none());
    }

    #[test]
    fn counts_and_percentages() {
        let partition = sample();
        assert_eq!(partition.count("torso"), 4);
        assert_eq!(partition.count("legs"), 0);
        assert_relative_eq!(partition.percentage("base"), 100.0 / 3.0);
        assert_relative_eq!(partition.percentage("absent"), 0.0);
    }

    #[test]
    fn empty_partition() {
        let partition = RegionPartition::empty();
        assert!(partition.is_empty());
        assert_eq!(partition.total_points(), 0);
        assert_relative_eq!(partition.percentage("base"), 0.0);
    }

    #[test]
    fn iteration_preserves_order() {
        let partition = sample();
        let names: Vec<&str> = partition.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["base", "torso"]);
    }
}
