//! Harvester
//!
//! Soil analysis and crop recommendation site: a visitor submits six soil
//! measurements and gets back an ordered list of crop suggestions plus a
//! 0-100 soil health score, rendered as HTML fragments or JSON.
//!
//! - `soil`: the submitted sample record and soil texture classes
//! - `recommend`: rule evaluator, crop catalog, health score
//! - `api_server`: application state, router, JSON handlers
//! - `web`: Askama page and fragment handlers

pub mod api_server;
pub mod recommend;
pub mod soil;
pub mod web;

// Re-export commonly used types
pub use api_server::{create_router, AppState};
pub use recommend::{build_report, SoilReport};
pub use soil::{SoilSample, SoilType};
