/// Schema keys for the 14 numeric features, in the order the model expects.
pub const NUMERIC_FIELDS: [&str; 14] = [
    "N",
    "P",
    "K",
    "Soil_pH",
    "Soil_Moisture",
    "Organic_Carbon",
    "Temperature",
    "Humidity",
    "Rainfall",
    "Sunlight_Hours",
    "Wind_Speed",
    "Altitude",
    "Fertilizer_Used",
    "Pesticide_Used",
];

/// Schema keys for the 5 categorical features.
pub const CATEGORICAL_FIELDS: [&str; 5] = [
    "Soil_Type",
    "Region",
    "Season",
    "Crop_Type",
    "Irrigation_Type",
];

/// The fixed-schema feature record handed to the predictor.
///
/// Built once per request from the parsed form values and immutable after
/// that. `None` is the absent marker for fields the user left empty or
/// unselected; the predictor imputes those itself, so they are passed
/// through untouched rather than pre-filled here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureRecord {
    pub n: Option<f64>,
    pub p: Option<f64>,
    pub k: Option<f64>,
    pub soil_ph: Option<f64>,
    pub soil_moisture: Option<f64>,
    pub organic_carbon: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
    pub sunlight_hours: Option<f64>,
    pub wind_speed: Option<f64>,
    pub altitude: Option<f64>,
    pub fertilizer_used: Option<f64>,
    pub pesticide_used: Option<f64>,
    pub soil_type: Option<&'static str>,
    pub region: Option<&'static str>,
    pub season: Option<&'static str>,
    pub crop_type: Option<&'static str>,
    pub irrigation_type: Option<&'static str>,
}

impl FeatureRecord {
    /// Numeric features keyed by schema name, in schema order.
    pub fn numeric_values(&self) -> [(&'static str, Option<f64>); 14] {
        [
            ("N", self.n),
            ("P", self.p),
            ("K", self.k),
            ("Soil_pH", self.soil_ph),
            ("Soil_Moisture", self.soil_moisture),
            ("Organic_Carbon", self.organic_carbon),
            ("Temperature", self.temperature),
            ("Humidity", self.humidity),
            ("Rainfall", self.rainfall),
            ("Sunlight_Hours", self.sunlight_hours),
            ("Wind_Speed", self.wind_speed),
            ("Altitude", self.altitude),
            ("Fertilizer_Used", self.fertilizer_used),
            ("Pesticide_Used", self.pesticide_used),
        ]
    }

    /// Categorical feature labels keyed by schema name, in schema order.
    pub fn categorical_values(&self) -> [(&'static str, Option<&'static str>); 5] {
        [
            ("Soil_Type", self.soil_type),
            ("Region", self.region),
            ("Season", self.season),
            ("Crop_Type", self.crop_type),
            ("Irrigation_Type", self.irrigation_type),
        ]
    }
}
