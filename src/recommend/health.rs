//! Soil health score
//!
//! Composite 0-100 indicator: one pH term plus capped N/P/K terms. The score
//! is recomputed on demand from the sample; nothing is stored.

use serde::Serialize;

use crate::soil::SoilSample;

/// pH term: full credit inside the 6-7.5 window, partial credit in the wider
/// 5.5-8 window, floor credit everywhere else.
pub fn ph_component(ph: f64) -> f64 {
    if (6.0..=7.5).contains(&ph) {
        25.0
    } else if (5.5..=8.0).contains(&ph) {
        15.0
    } else {
        5.0
    }
}

/// Nutrient term: a quarter of the index, capped at 25 points.
pub fn nutrient_component(level: f64) -> f64 {
    (level / 4.0).min(25.0)
}

/// Qualitative band shown under the score meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl HealthBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            HealthBand::Excellent
        } else if score >= 60 {
            HealthBand::Good
        } else {
            HealthBand::NeedsImprovement
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            HealthBand::Excellent => "Excellent",
            HealthBand::Good => "Good",
            HealthBand::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Derived 0-100 soil quality indicator.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthScore {
    pub score: u8,
    pub band: HealthBand,
}

impl HealthScore {
    /// Score one sample.
    ///
    /// The four terms cap at 100 in total. The float-to-integer cast
    /// saturates, so inputs outside the declared domain clamp the score
    /// rather than wrapping or panicking.
    pub fn of(sample: &SoilSample) -> Self {
        let total = ph_component(sample.ph)
            + nutrient_component(sample.nitrogen)
            + nutrient_component(sample.phosphorus)
            + nutrient_component(sample.potassium);

        let score = total.round() as u8;
        HealthScore {
            score,
            band: HealthBand::from_score(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soil::SoilType;
    use approx::assert_relative_eq;

    fn sample(ph: f64, nitrogen: f64, phosphorus: f64, potassium: f64) -> SoilSample {
        SoilSample {
            location: "Test Plot".to_string(),
            soil_type: SoilType::Clay,
            ph,
            nitrogen,
            phosphorus,
            potassium,
            moisture: 50.0,
        }
    }

    #[test]
    fn test_ph_component_windows() {
        // Inner window, boundaries inclusive
        assert_relative_eq!(ph_component(6.0), 25.0);
        assert_relative_eq!(ph_component(7.5), 25.0);
        // Outer window, boundaries inclusive
        assert_relative_eq!(ph_component(5.5), 15.0);
        assert_relative_eq!(ph_component(8.0), 15.0);
        assert_relative_eq!(ph_component(5.9), 15.0);
        // Floor
        assert_relative_eq!(ph_component(5.4), 5.0);
        assert_relative_eq!(ph_component(8.1), 5.0);
        assert_relative_eq!(ph_component(0.0), 5.0);
        assert_relative_eq!(ph_component(14.0), 5.0);
    }

    #[test]
    fn test_nutrient_component_caps_at_25() {
        assert_relative_eq!(nutrient_component(30.0), 7.5);
        assert_relative_eq!(nutrient_component(100.0), 25.0);
        assert_relative_eq!(nutrient_component(99.9), 24.975);
        assert_relative_eq!(nutrient_component(0.0), 0.0);
    }

    #[test]
    fn test_loam_reference_sample_scores_55() {
        // 25 + 30/4 + 40/4 + 50/4 = 25 + 7.5 + 10 + 12.5 = 55
        let health = HealthScore::of(&sample(6.5, 30.0, 40.0, 50.0));
        assert_eq!(health.score, 55);
        assert_eq!(health.band, HealthBand::NeedsImprovement);
    }

    #[test]
    fn test_acid_clay_sample_scores_30() {
        // 5 + 80/4 (capped term stays 20) + 10/4 + 10/4 = 30
        let health = HealthScore::of(&sample(2.0, 80.0, 10.0, 10.0));
        assert_eq!(health.score, 30);
        assert_eq!(health.band, HealthBand::NeedsImprovement);
    }

    #[test]
    fn test_maximum_attainable_is_100() {
        let health = HealthScore::of(&sample(7.0, 100.0, 100.0, 100.0));
        assert_eq!(health.score, 100);
        assert_eq!(health.band, HealthBand::Excellent);
    }

    #[test]
    fn test_score_bounded_over_domain_grid() {
        for ph in [0.0, 3.5, 5.5, 6.5, 8.0, 11.0, 14.0] {
            for level in [0.0, 25.0, 50.0, 75.0, 100.0] {
                let health = HealthScore::of(&sample(ph, level, level, level));
                assert!(health.score <= 100);
            }
        }
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(HealthBand::from_score(80), HealthBand::Excellent);
        assert_eq!(HealthBand::from_score(79), HealthBand::Good);
        assert_eq!(HealthBand::from_score(60), HealthBand::Good);
        assert_eq!(HealthBand::from_score(59), HealthBand::NeedsImprovement);
        assert_eq!(HealthBand::from_score(0), HealthBand::NeedsImprovement);
    }
}
