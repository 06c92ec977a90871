// crates/atlas-core/src/lib.rs

pub mod atlas;
pub mod common;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod loader; // Input transport (file + optional gzip)
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod snapshot; // Binary save/load for processed atlases
pub mod tables;
pub mod text;
// Shared Raw Input (consumed by loader and pipeline)
pub mod raw;

// Re-exports
pub use crate::atlas::WorldAtlas;
pub use crate::common::AtlasStats;
pub use crate::error::{AtlasError, Result};
pub use crate::filter::SovereigntyFilter;
pub use crate::geometry::{extract_points, summarize, GeoSummary};
pub use crate::model::{Continent, CountrySummary, NormalizedCountry};
pub use crate::normalize::{Identity, Normalizer};
pub use crate::pipeline::{CollisionPolicy, Pipeline, PipelineOptions};
pub use crate::raw::{FeatureCollection, RawFeature, RawGeometry};
pub use crate::tables::WorldTables;
// Export Text Utils
pub use crate::text::{equals_folded, fold_key};
