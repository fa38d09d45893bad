//! Region display catalogs.
//!
//! A [`RegionCatalog`] is an ordered set of [`RegionDefinition`]s: the
//! color, description and declared extent of each named region. Catalogs
//! are display configuration only — see the crate docs for why they never
//! drive classification routing.

use serde::{Deserialize, Serialize};

/// Color used for region names the active catalog does not define.
pub const FALLBACK_COLOR: &str = "#808080";

/// Display metadata for one named region.
///
/// `height_range` and `radial_threshold` describe the region's nominal
/// extent in normalized coordinates. They are descriptive: the classifier
/// routes with its own fixed thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionDefinition {
    /// Region name (e.g. "torso").
    pub name: String,

    /// Suggested paint color as a hex string (e.g. "#C0C0C0").
    pub color: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Nominal normalized-height extent, `(low, high)` in `[0, 1]`.
    pub height_range: (f64, f64),

    /// Nominal normalized radial threshold in `[0, 1]`, for regions that
    /// sit away from the central axis (arms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radial_threshold: Option<f64>,
}

impl RegionDefinition {
    /// Create a definition with a name, color, description and height range.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        description: impl Into<String>,
        height_range: (f64, f64),
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            description: description.into(),
            height_range,
            radial_threshold: None,
        }
    }

    /// Set the nominal radial threshold.
    #[must_use]
    pub fn with_radial_threshold(mut self, threshold: f64) -> Self {
        self.radial_threshold = Some(threshold);
        self
    }
}

/// An ordered collection of region definitions.
///
/// Substituting a catalog replaces it wholesale — profiles are never
/// merged. Pass the catalog per call; there is no process-wide catalog.
///
/// # Example
///
/// ```
/// use paint_region::RegionCatalog;
///
/// let catalog = RegionCatalog::humanoid();
/// assert_eq!(catalog.len(), 5);
/// assert_eq!(catalog.description_for("head"), "Head, helmet and accessories");
///
/// // Names outside the catalog fall back to defaults
/// let creature = RegionCatalog::creature();
/// assert_eq!(creature.color_for("torso"), "#808080");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCatalog {
    definitions: Vec<RegionDefinition>,
}

impl RegionCatalog {
    /// Create a catalog from a list of definitions.
    #[must_use]
    pub const fn from_definitions(definitions: Vec<RegionDefinition>) -> Self {
        Self { definitions }
    }

    /// The standard humanoid miniature profile (base, legs, torso, arms,
    /// head).
    #[must_use]
    pub fn humanoid() -> Self {
        Self::from_definitions(vec![
            RegionDefinition::new(
                "base",
                "#8B4513",
                "Base and ground elements",
                (0.0, 0.05),
            ),
            RegionDefinition::new(
                "legs",
                "#4682B4",
                "Legs and lower body armor",
                (0.05, 0.35),
            ),
            RegionDefinition::new(
                "torso",
                "#C0C0C0",
                "Main torso and chest armor",
                (0.35, 0.65),
            ),
            RegionDefinition::new("arms", "#CD853F", "Arms and shoulder pads", (0.4, 0.7))
                .with_radial_threshold(0.4),
            RegionDefinition::new(
                "head",
                "#F5DEB3",
                "Head, helmet and accessories",
                (0.65, 1.0),
            ),
        ])
    }

    /// Simplified profile for creature miniatures (base, body, head).
    #[must_use]
    pub fn creature() -> Self {
        Self::from_definitions(vec![
            RegionDefinition::new("base", "#8B4513", "", (0.0, 0.1)),
            RegionDefinition::new("body", "#D2691E", "", (0.1, 0.7)),
            RegionDefinition::new("head", "#F5DEB3", "", (0.7, 1.0)),
        ])
    }

    /// Profile for vehicle miniatures (chassis, hull, turret).
    #[must_use]
    pub fn vehicle() -> Self {
        Self::from_definitions(vec![
            RegionDefinition::new("chassis", "#2F4F4F", "", (0.0, 0.3)),
            RegionDefinition::new("hull", "#708090", "", (0.3, 0.7)),
            RegionDefinition::new("turret", "#696969", "", (0.7, 1.0)),
        ])
    }

    /// Get a definition by region name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegionDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// Get the display color for a region name.
    ///
    /// Falls back to [`FALLBACK_COLOR`] for names the catalog does not
    /// define.
    #[must_use]
    pub fn color_for(&self, name: &str) -> &str {
        self.get(name).map_or(FALLBACK_COLOR, |d| d.color.as_str())
    }

    /// Get the description for a region name.
    ///
    /// Falls back to the empty string for names the catalog does not
    /// define.
    #[must_use]
    pub fn description_for(&self, name: &str) -> &str {
        self.get(name).map_or("", |d| d.description.as_str())
    }

    /// Get the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if the catalog has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate over the definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegionDefinition> {
        self.definitions.iter()
    }

    /// Iterate over the defined region names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.name.as_str())
    }
}

impl Default for RegionCatalog {
    /// The humanoid profile.
    fn default() -> Self {
        Self::humanoid()
    }
}

impl<'a> IntoIterator for &'a RegionCatalog {
    type Item = &'a RegionDefinition;
    type IntoIter = std::slice::Iter<'a, RegionDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn humanoid_has_five_regions() {
        let catalog = RegionCatalog::humanoid();
        assert_eq!(catalog.len(), 5);
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, ["base", "legs", "torso", "arms", "head"]);
    }

    #[test]
    fn humanoid_colors() {
        let catalog = RegionCatalog::humanoid();
        assert_eq!(catalog.color_for("base"), "#8B4513");
        assert_eq!(catalog.color_for("legs"), "#4682B4");
        assert_eq!(catalog.color_for("torso"), "#C0C0C0");
        assert_eq!(catalog.color_for("arms"), "#CD853F");
        assert_eq!(catalog.color_for("head"), "#F5DEB3");
    }

    #[test]
    fn arms_have_radial_threshold() {
        let catalog = RegionCatalog::humanoid();
        let arms = catalog.get("arms").unwrap();
        assert_eq!(arms.radial_threshold, Some(0.4));
        assert!(catalog.get("legs").unwrap().radial_threshold.is_none());
    }

    #[test]
    fn unknown_name_falls_back() {
        let catalog = RegionCatalog::vehicle();
        assert_eq!(catalog.color_for("torso"), FALLBACK_COLOR);
        assert_eq!(catalog.description_for("torso"), "");
    }

    #[test]
    fn default_is_humanoid() {
        assert_eq!(RegionCatalog::default(), RegionCatalog::humanoid());
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let catalog = RegionCatalog::humanoid();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: RegionCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
