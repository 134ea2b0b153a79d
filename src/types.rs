use serde::{Deserialize, Serialize};

use crate::fields::{Choice, CropType, IrrigationType, Region, Season, SoilType};

// ---------- Request types ----------

/// One submitted form: raw text for the numeric fields (possibly empty),
/// constrained selections for the categorical ones. Keys follow the model
/// schema, not the display names.
#[derive(Debug, Deserialize)]
pub struct RawForm {
    #[serde(rename = "N")]
    pub n: String,
    #[serde(rename = "P")]
    pub p: String,
    #[serde(rename = "K")]
    pub k: String,
    #[serde(rename = "Soil_pH")]
    pub soil_ph: String,
    #[serde(rename = "Soil_Moisture")]
    pub soil_moisture: String,
    #[serde(rename = "Organic_Carbon")]
    pub organic_carbon: String,
    #[serde(rename = "Temperature")]
    pub temperature: String,
    #[serde(rename = "Humidity")]
    pub humidity: String,
    #[serde(rename = "Rainfall")]
    pub rainfall: String,
    #[serde(rename = "Sunlight_Hours")]
    pub sunlight_hours: String,
    #[serde(rename = "Wind_Speed")]
    pub wind_speed: String,
    #[serde(rename = "Altitude")]
    pub altitude: String,
    #[serde(rename = "Fertilizer_Used")]
    pub fertilizer_used: String,
    #[serde(rename = "Pesticide_Used")]
    pub pesticide_used: String,
    #[serde(rename = "Soil_Type")]
    pub soil_type: Choice<SoilType>,
    #[serde(rename = "Region")]
    pub region: Choice<Region>,
    #[serde(rename = "Season")]
    pub season: Choice<Season>,
    #[serde(rename = "Crop_Type")]
    pub crop_type: Choice<CropType>,
    #[serde(rename = "Irrigation_Type")]
    pub irrigation_type: Choice<IrrigationType>,
}

// ---------- Diagnostics ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Success,
}

/// One human-readable line for the client to render; only the triggering
/// conditions and the field names inside `message` are fixed here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: String) -> Self {
        Self { severity, message }
    }
}

// ---------- Response types ----------

#[derive(Debug, Serialize)]
pub struct ValidateOut {
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Serialize)]
pub struct PredictOut {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<f64>,
    pub diagnostics: Vec<Diagnostic>,
}
