//! Ordered rule table
//!
//! Rules are evaluated independently, in table order, and every hit appends
//! one recommendation. Order matters: whenever the corn pH window matches,
//! Corn is the first entry. The wheat fallback fires on the accumulated
//! count alone, so a sample matching nothing still yields one suggestion.

use super::crops::{Crop, CropRecommendation, Suitability};
use crate::soil::SoilSample;

/// One predicate/payload pair in the fixed evaluation order.
struct CropRule {
    crop: Crop,
    suitability: Suitability,
    applies: fn(&SoilSample) -> bool,
}

fn ph_suits_corn(sample: &SoilSample) -> bool {
    sample.ph >= 6.0 && sample.ph <= 7.5
}

fn drains_for_tomatoes(sample: &SoilSample) -> bool {
    sample.soil_type.is_well_draining()
}

fn phosphorus_rich(sample: &SoilSample) -> bool {
    sample.phosphorus > 30.0
}

fn nitrogen_lean(sample: &SoilSample) -> bool {
    sample.nitrogen < 40.0
}

const RULES: &[CropRule] = &[
    CropRule {
        crop: Crop::Corn,
        suitability: Suitability::Excellent,
        applies: ph_suits_corn,
    },
    CropRule {
        crop: Crop::Tomatoes,
        suitability: Suitability::Good,
        applies: drains_for_tomatoes,
    },
    CropRule {
        crop: Crop::Soybeans,
        suitability: Suitability::Excellent,
        applies: phosphorus_rich,
    },
    CropRule {
        crop: Crop::Beans,
        suitability: Suitability::Good,
        applies: nitrogen_lean,
    },
];

/// Fallback fires while the list is shorter than this.
const MIN_RECOMMENDATIONS: usize = 3;

/// Hard cap on returned suggestions.
const MAX_RECOMMENDATIONS: usize = 4;

/// Evaluate the rule table against one sample.
///
/// Total over the sample domain: every input yields between one and four
/// recommendations, in rule order. The fallback looks only at how many
/// entries accumulated, never at which rules produced them.
pub fn recommend_crops(sample: &SoilSample) -> Vec<CropRecommendation> {
    let mut recommendations: Vec<CropRecommendation> = RULES
        .iter()
        .filter(|rule| (rule.applies)(sample))
        .map(|rule| CropRecommendation::new(rule.crop, rule.suitability))
        .collect();

    if recommendations.len() < MIN_RECOMMENDATIONS {
        recommendations.push(CropRecommendation::new(Crop::Wheat, Suitability::Fair));
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
