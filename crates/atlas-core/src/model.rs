// crates/atlas-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Continent classification derived from the ISO-2 code.
///
/// Derived, not authoritative: it comes from a static code→continent table
/// and falls back to `Unknown` for codes the table does not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    Asia,
    Europe,
    Africa,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Oceania,
    Antarctica,
    Unknown,
}

impl Continent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::Africa => "Africa",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Antarctica => "Antarctica",
            Continent::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accepted sovereign state, flattened from a raw feature.
///
/// Constructed once per pipeline run and never mutated afterwards.
/// Persistence is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCountry {
    /// Ordinal position in the filtered sequence (1-based). Stable only
    /// within a single run.
    pub source_index: usize,
    /// Canonical ISO-3166 alpha-2 code, post-repair. Exactly two ASCII
    /// letters for every record the pipeline emits.
    pub iso_code: String,
    pub iso_code3: Option<String>,
    /// Localized display name; falls back to the English name when no
    /// localized form exists.
    pub name_display: String,
    pub name_english: String,
    pub name_local: String,
    pub continent: Continent,
    pub region: String,
    pub subregion: String,
    pub economy: String,
    pub income_level: String,
    /// Non-negative; 0 when absent or invalid in the source.
    pub population: f64,
    /// Non-negative; 0 when absent or invalid in the source.
    pub area_sqkm: f64,
    /// Bounding-box midpoint, `[lon, lat]`.
    pub center: [f64; 2],
    /// Unweighted vertex mean, `[lon, lat]`. Kept alongside `center`
    /// because consumers use either depending on rendering need.
    pub centroid: [f64; 2],
    /// `[min_lon, min_lat, max_lon, max_lat]`; all zeros for empty geometry.
    pub bbox: [f64; 4],
    pub vertex_count: usize,
}

impl NormalizedCountry {
    /// The simplified projection written alongside the full records.
    pub fn summary(&self) -> CountrySummary {
        CountrySummary {
            iso_code: self.iso_code.clone(),
            iso_code3: self.iso_code3.clone(),
            name_display: self.name_display.clone(),
            name_english: self.name_english.clone(),
            center: self.center,
            continent: self.continent,
            population: self.population,
            area_sqkm: self.area_sqkm,
        }
    }
}

/// Trimmed-down country record for lightweight consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub iso_code: String,
    pub iso_code3: Option<String>,
    pub name_display: String,
    pub name_english: String,
    pub center: [f64; 2],
    pub continent: Continent,
    pub population: f64,
    pub area_sqkm: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continent_serializes_with_spaced_names() {
        let json = serde_json::to_string(&Continent::NorthAmerica).unwrap();
        assert_eq!(json, "\"North America\"");
        let back: Continent = serde_json::from_str("\"South America\"").unwrap();
        assert_eq!(back, Continent::SouthAmerica);
    }
}
