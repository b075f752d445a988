//! Report builder
//!
//! Assembles the complete analysis output handed to the presentation layer.

use serde::Serialize;

use super::crops::CropRecommendation;
use super::health::HealthScore;
use super::rules::recommend_crops;
use crate::soil::SoilSample;

/// Complete analysis result for one submitted sample.
#[derive(Debug, Clone, Serialize)]
pub struct SoilReport {
    /// The sample the report was computed from.
    pub sample: SoilSample,

    /// Derived 0-100 health indicator.
    pub health: HealthScore,

    /// Ordered crop suggestions, earliest-matching rules first.
    pub recommendations: Vec<CropRecommendation>,
}

/// Build the report for one sample.
pub fn build_report(sample: SoilSample) -> SoilReport {
    let health = HealthScore::of(&sample);
    let recommendations = recommend_crops(&sample);

    SoilReport {
        sample,
        health,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soil::SoilType;

    #[test]
    fn test_report_echoes_sample_and_derivations() {
        let sample = SoilSample {
            location: "California, USA".to_string(),
            soil_type: SoilType::Loam,
            ph: 6.5,
            nitrogen: 30.0,
            phosphorus: 40.0,
            potassium: 50.0,
            moisture: 50.0,
        };

        let report = build_report(sample.clone());

        assert_eq!(report.sample.location, "California, USA");
        assert_eq!(report.health.score, HealthScore::of(&sample).score);
        assert_eq!(report.recommendations.len(), 4);
        assert_eq!(report.recommendations[0].name, "Corn");
    }

    #[test]
    fn test_resubmission_is_deterministic() {
        let sample = SoilSample {
            location: "Test Plot".to_string(),
            soil_type: SoilType::Sandy,
            ph: 5.0,
            nitrogen: 45.0,
            phosphorus: 20.0,
            potassium: 60.0,
            moisture: 30.0,
        };

        let first = build_report(sample.clone());
        let second = build_report(sample);

        assert_eq!(first.health.score, second.health.score);
        let first_names: Vec<_> = first.recommendations.iter().map(|r| r.name).collect();
        let second_names: Vec<_> = second.recommendations.iter().map(|r| r.name).collect();
        assert_eq!(first_names, second_names);
    }
}
