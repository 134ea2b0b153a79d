use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};
use thiserror::Error;

use crate::record::{FeatureRecord, CATEGORICAL_FIELDS, NUMERIC_FIELDS};

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("model artifact has no term for field {0:?}")]
    MissingTerm(&'static str),
    #[error("model artifact has no {field} weight for label {label:?}")]
    UnknownLabel { field: &'static str, label: String },
}

/// The one capability the gate relies on. Loaded once at startup, shared
/// read-only across requests.
pub trait Predictor {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictError>;
}

#[derive(Deserialize)]
struct NumericTerm {
    weight: f64,
    impute: f64,
}

#[derive(Deserialize)]
struct CategoricalTerm {
    weights: HashMap<String, f64>,
    impute: String,
}

/// Linear regression artifact: intercept plus one weighted term per numeric
/// feature and one-hot weights per categorical feature. Each term carries
/// its own imputation value, so absent fields in the record are filled by
/// the model, never by the caller.
#[derive(Deserialize)]
pub struct LinearModel {
    intercept: f64,
    numeric: HashMap<String, NumericTerm>,
    categorical: HashMap<String, CategoricalTerm>,
}

impl LinearModel {
    pub fn load(path: &str) -> Result<Self> {
        let txt = fs::read_to_string(Path::new(path))
            .with_context(|| format!("failed to read model artifact at {}", path))?;
        Self::from_json(&txt).with_context(|| format!("invalid model artifact at {}", path))
    }

    /// Parse and validate an artifact. Every schema field must have a term,
    /// and every categorical impute label must have a weight, so a malformed
    /// artifact dies at startup instead of mid-request.
    pub fn from_json(txt: &str) -> Result<Self> {
        let model: LinearModel =
            serde_json::from_str(txt).context("failed to parse model artifact JSON")?;

        for name in NUMERIC_FIELDS {
            if !model.numeric.contains_key(name) {
                bail!("artifact is missing a numeric term for {}", name);
            }
        }
        for name in CATEGORICAL_FIELDS {
            let term = match model.categorical.get(name) {
                Some(t) => t,
                None => bail!("artifact is missing a categorical term for {}", name),
            };
            if !term.weights.contains_key(term.impute.as_str()) {
                bail!(
                    "artifact impute label {:?} for {} has no weight entry",
                    term.impute,
                    name
                );
            }
        }
        Ok(model)
    }
}

impl Predictor for LinearModel {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictError> {
        let mut acc = self.intercept;
        for (name, value) in record.numeric_values() {
            let term = self
                .numeric
                .get(name)
                .ok_or(PredictError::MissingTerm(name))?;
            acc += term.weight * value.unwrap_or(term.impute);
        }
        for (name, label) in record.categorical_values() {
            let term = self
                .categorical
                .get(name)
                .ok_or(PredictError::MissingTerm(name))?;
            let label = label.unwrap_or(term.impute.as_str());
            let weight = term.weights.get(label).ok_or_else(|| PredictError::UnknownLabel {
                field: name,
                label: label.to_string(),
            })?;
            acc += *weight;
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    // Flat artifact: intercept 2.0, unit weight on N, +0.5 for Loamy soil,
    // zero everywhere else. Impute mean for N is 40.0, impute soil is Loamy.
    fn artifact() -> Value {
        let mut numeric = json!({});
        for name in NUMERIC_FIELDS {
            numeric[name] = json!({ "weight": 0.0, "impute": 1.0 });
        }
        numeric["N"] = json!({ "weight": 1.0, "impute": 40.0 });

        let labels: [(&str, &[&str]); 5] = [
            ("Soil_Type", &["Clay", "Sandy", "Silt", "Loamy"]),
            ("Region", &["South", "East", "North", "West", "Central"]),
            ("Season", &["Rabi", "Kharif", "Zaid"]),
            ("Crop_Type", &["Rice", "Wheat", "Potato", "Cotton", "Maize", "Sugarcane"]),
            ("Irrigation_Type", &["Drip", "Canal", "Rainfed", "Sprinkler"]),
        ];
        let mut categorical = json!({});
        for (field, options) in labels {
            let mut weights = json!({});
            for opt in options {
                weights[*opt] = json!(0.0);
            }
            categorical[field] = json!({ "weights": weights, "impute": options[0] });
        }
        categorical["Soil_Type"]["weights"]["Loamy"] = json!(0.5);
        categorical["Soil_Type"]["impute"] = json!("Loamy");

        json!({ "intercept": 2.0, "numeric": numeric, "categorical": categorical })
    }

    fn model() -> LinearModel {
        LinearModel::from_json(&artifact().to_string()).expect("artifact should validate")
    }

    #[test]
    fn test_predict_with_present_values() {
        let record = FeatureRecord {
            n: Some(10.0),
            soil_type: Some("Clay"),
            ..FeatureRecord::default()
        };
        // 2.0 intercept + 1.0 * 10.0 + 0.0 for Clay; everything else imputed at weight 0
        let y = model().predict(&record).unwrap();
        assert!((y - 12.0).abs() < 1e-9, "got {}", y);
        println!("✓ Present values flow straight into the linear sum");
    }

    #[test]
    fn test_absent_fields_are_imputed_by_the_model() {
        // All-absent record: N imputes to 40.0, Soil_Type to Loamy (+0.5)
        let y = model().predict(&FeatureRecord::default()).unwrap();
        assert!((y - 42.5).abs() < 1e-9, "got {}", y);
        println!("✓ Absent markers fall back to the artifact's impute values");
    }

    #[test]
    fn test_unknown_label_is_an_error_not_a_panic() {
        let mut doc = artifact();
        doc["categorical"]["Soil_Type"]["weights"]
            .as_object_mut()
            .unwrap()
            .remove("Sandy");
        let model = LinearModel::from_json(&doc.to_string()).unwrap();

        let record = FeatureRecord {
            soil_type: Some("Sandy"),
            ..FeatureRecord::default()
        };
        match model.predict(&record) {
            Err(PredictError::UnknownLabel { field, label }) => {
                assert_eq!(field, "Soil_Type");
                assert_eq!(label, "Sandy");
            }
            other => panic!("expected UnknownLabel, got {:?}", other.map(|_| ())),
        }
        println!("✓ A label without a weight surfaces as PredictError");
    }

    #[test]
    fn test_artifact_validation_rejects_gaps() {
        let mut doc = artifact();
        doc["numeric"].as_object_mut().unwrap().remove("Rainfall");
        assert!(LinearModel::from_json(&doc.to_string()).is_err());

        let mut doc = artifact();
        doc["categorical"]["Region"]["impute"] = json!("Offworld");
        assert!(LinearModel::from_json(&doc.to_string()).is_err());
        println!("✓ Incomplete artifacts are rejected at load time");
    }
}
