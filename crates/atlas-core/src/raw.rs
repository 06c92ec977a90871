// crates/atlas-core/src/raw.rs
//
// Raw GeoJSON input model. Everything here is tolerant by construction: a
// feature with missing or malformed pieces deserializes to defaults instead
// of failing, so defects stay local to the feature (the sovereignty filter
// drops featureless records via the code-validity check).

use crate::error::{AtlasError, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::{Map, Value};

static EMPTY_PROPS: Lazy<Map<String, Value>> = Lazy::new(Map::new);

/// A GeoJSON document as handed over by the fetch/cache collaborator.
///
/// Built through [`FeatureCollection::from_value`], which enforces the
/// document-shape contract (`type == "FeatureCollection"` plus a `features`
/// array) and is the only fatal validation in the whole pipeline.
#[derive(Debug, Clone, Default)]
pub struct FeatureCollection {
    pub features: Vec<RawFeature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<RawFeature>) -> Self {
        Self { features }
    }

    /// Validates the document shape and extracts the feature list.
    ///
    /// Individual features that fail to deserialize (e.g. a string where an
    /// object is expected) collapse to an all-default [`RawFeature`] rather
    /// than aborting the run.
    pub fn from_value(doc: Value) -> Result<Self> {
        let Value::Object(mut obj) = doc else {
            return Err(AtlasError::InputShape("document is not a JSON object".into()));
        };

        let kind = obj.get("type").and_then(Value::as_str).unwrap_or_default();
        if kind != "FeatureCollection" {
            return Err(AtlasError::InputShape(format!(
                "expected type \"FeatureCollection\", got {kind:?}"
            )));
        }

        let Some(Value::Array(features)) = obj.remove("features") else {
            return Err(AtlasError::InputShape("missing \"features\" array".into()));
        };

        let features = features
            .into_iter()
            .map(|f| serde_json::from_value(f).unwrap_or_default())
            .collect();

        Ok(Self { features })
    }
}

/// One candidate country/territory: a property bag plus a geometry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFeature {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
}

impl RawFeature {
    /// The property bag, or an empty one when the source had none.
    pub fn props(&self) -> &Map<String, Value> {
        self.properties.as_ref().unwrap_or(&EMPTY_PROPS)
    }
}

/// Geometry envelope. The coordinate tree stays untyped: the extractor's
/// pair-vs-container heuristic works at any nesting depth, so there is no
/// need to model Point/LineString/Polygon/MultiPolygon separately.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGeometry {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub coordinates: Value,
}

/// Returns the first non-empty string value among `keys`.
pub fn first_str<'a>(props: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|k| props.get(*k).and_then(Value::as_str))
        .find(|s| !s.is_empty())
}

/// String property accessor; `None` for absent, null, or empty values.
pub fn prop_str<'a>(props: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    props.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Numeric property accessor. Accepts JSON numbers and numeric strings
/// (the upstream dataset mixes both); anything else is `None`.
pub fn prop_f64(props: &Map<String, Value>, key: &str) -> Option<f64> {
    match props.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Returns the first property among `keys` that parses as a number.
pub fn first_f64(props: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| prop_f64(props, k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_shape_is_enforced() {
        let err = FeatureCollection::from_value(json!({"type": "Feature"})).unwrap_err();
        assert!(matches!(err, AtlasError::InputShape(_)));

        let err = FeatureCollection::from_value(json!({"type": "FeatureCollection"})).unwrap_err();
        assert!(matches!(err, AtlasError::InputShape(_)));

        let err = FeatureCollection::from_value(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, AtlasError::InputShape(_)));
    }

    #[test]
    fn empty_features_array_is_a_valid_empty_run() {
        let fc =
            FeatureCollection::from_value(json!({"type": "FeatureCollection", "features": []}))
                .unwrap();
        assert!(fc.features.is_empty());
    }

    #[test]
    fn malformed_features_collapse_to_defaults() {
        let fc = FeatureCollection::from_value(json!({
            "type": "FeatureCollection",
            "features": ["not a feature", {"properties": null, "geometry": null}]
        }))
        .unwrap();
        assert_eq!(fc.features.len(), 2);
        assert!(fc.features[0].props().is_empty());
        assert!(fc.features[1].geometry.is_none());
    }

    #[test]
    fn numeric_properties_accept_numbers_and_strings() {
        let props = json!({"POP_EST": 125000000.0, "AREA": " 377915 ", "ECONOMY": true});
        let props = props.as_object().unwrap();
        assert_eq!(prop_f64(props, "POP_EST"), Some(125000000.0));
        assert_eq!(prop_f64(props, "AREA"), Some(377915.0));
        assert_eq!(prop_f64(props, "ECONOMY"), None);
        assert_eq!(first_f64(props, &["MISSING", "AREA"]), Some(377915.0));
    }
}
