//! Crop Recommendation Engine
//!
//! Maps one submitted soil sample to an ordered list of crop suggestions
//! plus a derived 0-100 soil health score. Evaluation is pure and
//! deterministic: the same sample always produces the same report, and every
//! sample in the declared domain produces a report.
//!
//! ## Architecture
//! - `crops.rs` - crop catalog: fixed per-crop display payloads + suitability tiers
//! - `rules.rs` - ordered rule table mapping sample thresholds to crops
//! - `health.rs` - composite 0-100 health score
//! - `report.rs` - SoilReport output struct + builder

pub mod crops;
pub mod health;
pub mod report;
pub mod rules;

// Re-export public API
pub use crops::{Crop, CropProfile, CropRecommendation, Suitability};
pub use health::{HealthBand, HealthScore};
pub use report::{build_report, SoilReport};
pub use rules::recommend_crops;
