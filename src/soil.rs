//! Soil sample definition
//!
//! Defines the SoilSample struct representing one submitted set of soil
//! measurements, plus the soil texture classes offered by the analysis form.

use serde::{Deserialize, Serialize};

/// Soil texture classes selectable in the analysis form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Sandy,
    Loam,
    Silt,
    Chalky,
    Peaty,
}

impl SoilType {
    /// Every selectable type, in form display order.
    pub const ALL: [SoilType; 6] = [
        SoilType::Clay,
        SoilType::Sandy,
        SoilType::Loam,
        SoilType::Silt,
        SoilType::Chalky,
        SoilType::Peaty,
    ];

    /// Display label for select options and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Sandy => "Sandy",
            SoilType::Loam => "Loam",
            SoilType::Silt => "Silt",
            SoilType::Chalky => "Chalky",
            SoilType::Peaty => "Peaty",
        }
    }

    /// Wire value as submitted by the form (lowercase).
    pub fn value(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Sandy => "sandy",
            SoilType::Loam => "loam",
            SoilType::Silt => "silt",
            SoilType::Chalky => "chalky",
            SoilType::Peaty => "peaty",
        }
    }

    /// Textures that drain freely enough for deep root development.
    pub fn is_well_draining(&self) -> bool {
        matches!(self, SoilType::Loam | SoilType::Sandy)
    }
}

/// Rejection reasons for a submitted sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    #[error("location is required")]
    MissingLocation,
}

/// One user-submitted set of soil measurements.
///
/// Constructed once per submission and never mutated; a fresh submission
/// builds a fresh sample. Numeric fields are percentage-like indices in
/// [0, 100] except `ph` ([0, 14]). Values outside those ranges are not
/// rejected; the downstream arithmetic degrades instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilSample {
    /// Free-text location for display (e.g., "California, USA")
    pub location: String,

    /// Soil texture class
    pub soil_type: SoilType,

    /// Soil pH (0 = acidic, 7 = neutral, 14 = alkaline)
    pub ph: f64,

    /// Nitrogen index (%)
    pub nitrogen: f64,

    /// Phosphorus index (%)
    pub phosphorus: f64,

    /// Potassium index (%)
    pub potassium: f64,

    /// Moisture index (%). Collected and echoed back; no rule reads it.
    pub moisture: f64,
}

impl SoilSample {
    /// Required-field presence check.
    ///
    /// The form marks `location` and the soil type select as `required`, so
    /// browsers block empty submissions; this is the server-side guard for
    /// clients that skip the form. Soil type presence is already enforced by
    /// deserialization (an unknown or missing variant fails to parse).
    pub fn validate(&self) -> Result<(), SampleError> {
        if self.location.trim().is_empty() {
            return Err(SampleError::MissingLocation);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_with_location(location: &str) -> SoilSample {
        SoilSample {
            location: location.to_string(),
            soil_type: SoilType::Loam,
            ph: 7.0,
            nitrogen: 50.0,
            phosphorus: 50.0,
            potassium: 50.0,
            moisture: 50.0,
        }
    }

    #[test]
    fn test_wire_values_round_trip_serde() {
        for soil_type in SoilType::ALL {
            let parsed: SoilType =
                serde_json::from_value(serde_json::Value::String(soil_type.value().to_string()))
                    .unwrap();
            assert_eq!(parsed, soil_type);
        }
    }

    #[test]
    fn test_well_draining_textures() {
        assert!(SoilType::Loam.is_well_draining());
        assert!(SoilType::Sandy.is_well_draining());
        assert!(!SoilType::Clay.is_well_draining());
        assert!(!SoilType::Silt.is_well_draining());
        assert!(!SoilType::Chalky.is_well_draining());
        assert!(!SoilType::Peaty.is_well_draining());
    }

    #[test]
    fn test_blank_location_rejected() {
        assert_eq!(
            sample_with_location("   ").validate(),
            Err(SampleError::MissingLocation)
        );
        assert_eq!(
            sample_with_location("").validate(),
            Err(SampleError::MissingLocation)
        );
        assert!(sample_with_location("California, USA").validate().is_ok());
    }
}
