//! Crop Catalog
//!
//! Fixed display payloads for every crop the rule table can suggest. Yield,
//! season, description and tips are curated copy, not computed agronomy.

use serde::Serialize;

/// Crops the rule table knows how to suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crop {
    Corn,
    Tomatoes,
    Soybeans,
    Beans,
    Wheat,
}

impl Crop {
    /// Every catalog entry, in catalog order.
    pub const ALL: [Crop; 5] = [
        Crop::Corn,
        Crop::Tomatoes,
        Crop::Soybeans,
        Crop::Beans,
        Crop::Wheat,
    ];

    /// Case-insensitive catalog lookup by display name.
    pub fn from_name(name: &str) -> Option<Crop> {
        Crop::ALL
            .iter()
            .copied()
            .find(|crop| crop.profile().name.eq_ignore_ascii_case(name))
    }

    /// Fixed catalog entry for this crop.
    pub fn profile(&self) -> CropProfile {
        match self {
            Crop::Corn => CropProfile {
                name: "Corn",
                expected_yield: "High",
                season: "Spring-Summer",
                description: "Ideal pH range for optimal corn growth",
                tips: &[
                    "Plant after soil temperature reaches 60°F",
                    "Ensure adequate nitrogen supply",
                ],
            },
            Crop::Tomatoes => CropProfile {
                name: "Tomatoes",
                expected_yield: "Medium-High",
                season: "Spring-Fall",
                description: "Well-draining soil supports healthy root development",
                tips: &[
                    "Maintain consistent moisture",
                    "Support with stakes or cages",
                ],
            },
            Crop::Soybeans => CropProfile {
                name: "Soybeans",
                expected_yield: "High",
                season: "Late Spring-Fall",
                description: "High phosphorus content promotes strong root development",
                tips: &[
                    "No-till planting recommended",
                    "Rotate with corn for best results",
                ],
            },
            Crop::Beans => CropProfile {
                name: "Beans",
                expected_yield: "Medium",
                season: "Spring-Summer",
                description: "Nitrogen-fixing properties improve soil fertility",
                tips: &["Plant after last frost", "Good for soil improvement"],
            },
            Crop::Wheat => CropProfile {
                name: "Wheat",
                expected_yield: "Medium",
                season: "Fall-Spring",
                description: "Adaptable to various soil conditions",
                tips: &["Winter variety recommended", "Monitor for pest issues"],
            },
        }
    }
}

/// Static display payload for one crop.
#[derive(Debug, Clone, Copy)]
pub struct CropProfile {
    pub name: &'static str,
    pub expected_yield: &'static str,
    pub season: &'static str,
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

/// Ordinal quality tier attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suitability {
    Excellent,
    Good,
    Fair,
}

impl Suitability {
    /// Badge text as shown on the recommendation card.
    pub fn display_text(&self) -> &'static str {
        match self {
            Suitability::Excellent => "excellent",
            Suitability::Good => "good",
            Suitability::Fair => "fair",
        }
    }

    /// Badge styling hook for the results template.
    pub fn css_class(&self) -> &'static str {
        match self {
            Suitability::Excellent => "badge-excellent",
            Suitability::Good => "badge-good",
            Suitability::Fair => "badge-fair",
        }
    }
}

/// One suggested crop as returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct CropRecommendation {
    pub name: &'static str,
    pub suitability: Suitability,
    #[serde(rename = "yield")]
    pub expected_yield: &'static str,
    pub season: &'static str,
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

impl CropRecommendation {
    /// Build a recommendation from a catalog entry plus its tier.
    pub fn new(crop: Crop, suitability: Suitability) -> Self {
        let profile = crop.profile();
        Self {
            name: profile.name,
            suitability,
            expected_yield: profile.expected_yield,
            season: profile.season,
            description: profile.description,
            tips: profile.tips,
        }
    }
}
