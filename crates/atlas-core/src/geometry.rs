// crates/atlas-core/src/geometry.rs

//! # Coordinate Extraction & Geometry Summaries
//!
//! Flattens a GeoJSON geometry's nested coordinate tree into a point
//! sequence and derives bounding box, center, centroid and vertex count
//! from it. Operates on untyped `serde_json::Value` trees; the geometry
//! `type` tag is never consulted.

use crate::raw::RawGeometry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Summary statistics derived from one geometry's coordinate tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoSummary {
    /// `[min_lon, min_lat, max_lon, max_lat]`
    pub bbox: [f64; 4],
    /// Bounding-box midpoint, `[lon, lat]`.
    pub center: [f64; 2],
    /// Unweighted arithmetic mean of all vertices, `[lon, lat]`.
    pub centroid: [f64; 2],
    /// Total number of coordinate pairs across the geometry.
    pub vertex_count: usize,
}

impl GeoSummary {
    /// The all-zero summary used for empty or missing geometry.
    pub const EMPTY: GeoSummary = GeoSummary {
        bbox: [0.0; 4],
        center: [0.0; 2],
        centroid: [0.0; 2],
        vertex_count: 0,
    };
}

/// Flattens an arbitrarily nested coordinate tree into `[lon, lat]` pairs.
///
/// An array node whose length is at least 2 and whose first element is
/// numeric is one coordinate pair; every other array is a ring/part
/// container and is recursed into. The single rule holds at any nesting
/// depth (Point, LineString, Polygon rings, MultiPolygon parts) without
/// looking at the geometry `type`.
///
/// Points come back in depth-first, left-to-right traversal order.
/// Non-array input yields an empty sequence. A leaf that passes the pair
/// test but has a non-numeric second element is skipped.
///
/// Known ambiguity: a bare two-point ring `[[a,b],[c,d]]` cannot be told
/// apart from two nested pairs; both read as two points.
pub fn extract_points(coordinates: &Value) -> Vec<[f64; 2]> {
    let mut points = Vec::new();
    collect(coordinates, &mut points);
    points
}

fn collect(node: &Value, out: &mut Vec<[f64; 2]>) {
    let Value::Array(items) = node else {
        return;
    };
    if items.len() >= 2 && items[0].is_number() {
        // One coordinate pair [lon, lat].
        if let (Some(lon), Some(lat)) = (items[0].as_f64(), items[1].as_f64()) {
            out.push([lon, lat]);
        }
        return;
    }
    for item in items {
        collect(item, out);
    }
}

/// Summarizes a geometry per the extractor's point sequence.
///
/// Missing geometry or an empty point sequence yields [`GeoSummary::EMPTY`].
///
/// The centroid is the plain mean of all vertices, not the area centroid:
/// dense coastlines pull it toward themselves. Longitudes are not unwrapped
/// either, so a geometry crossing the ±180° antimeridian gets a bbox that
/// spans nearly the whole globe. Both are accepted approximations.
pub fn summarize(geometry: Option<&RawGeometry>) -> GeoSummary {
    match geometry {
        Some(g) => summarize_points(&extract_points(&g.coordinates)),
        None => GeoSummary::EMPTY,
    }
}

/// Single-pass bbox/center/centroid over an already-flattened sequence.
pub fn summarize_points(points: &[[f64; 2]]) -> GeoSummary {
    if points.is_empty() {
        return GeoSummary::EMPTY;
    }

    let (mut min_lon, mut min_lat) = (f64::INFINITY, f64::INFINITY);
    let (mut max_lon, mut max_lat) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    let (mut sum_lon, mut sum_lat) = (0.0_f64, 0.0_f64);

    for &[lon, lat] in points {
        min_lon = min_lon.min(lon);
        max_lon = max_lon.max(lon);
        min_lat = min_lat.min(lat);
        max_lat = max_lat.max(lat);
        sum_lon += lon;
        sum_lat += lat;
    }

    let n = points.len() as f64;
    GeoSummary {
        bbox: [min_lon, min_lat, max_lon, max_lat],
        center: [(min_lon + max_lon) / 2.0, (min_lat + max_lat) / 2.0],
        centroid: [sum_lon / n, sum_lat / n],
        vertex_count: points.len(),
    }
}
