use crate::fields::{parse_category, parse_numeric, ValidationLedger};
use crate::model::{PredictError, Predictor};
use crate::record::FeatureRecord;
use crate::types::{Diagnostic, RawForm, Severity};

/// Parse every form field in display order and build the feature record.
///
/// The ledger comes back alongside the record: display names of missing and
/// invalid fields, in the order they were parsed (numerics first, then
/// categoricals).
pub fn assemble(form: &RawForm) -> (FeatureRecord, ValidationLedger) {
    let mut ledger = ValidationLedger::default();

    let n = parse_numeric(&form.n, "Nitrogen", &mut ledger);
    let p = parse_numeric(&form.p, "Phosphorus", &mut ledger);
    let k = parse_numeric(&form.k, "Potassium", &mut ledger);
    let soil_ph = parse_numeric(&form.soil_ph, "Soil pH", &mut ledger);
    let soil_moisture = parse_numeric(&form.soil_moisture, "Soil Moisture", &mut ledger);
    let organic_carbon = parse_numeric(&form.organic_carbon, "Organic Carbon", &mut ledger);
    let temperature = parse_numeric(&form.temperature, "Temperature", &mut ledger);
    let humidity = parse_numeric(&form.humidity, "Humidity", &mut ledger);
    let rainfall = parse_numeric(&form.rainfall, "Rainfall", &mut ledger);
    let sunlight_hours = parse_numeric(&form.sunlight_hours, "Sunlight Hours", &mut ledger);
    let wind_speed = parse_numeric(&form.wind_speed, "Wind Speed", &mut ledger);
    let altitude = parse_numeric(&form.altitude, "Altitude", &mut ledger);
    let fertilizer_used = parse_numeric(&form.fertilizer_used, "Fertilizer Used", &mut ledger);
    let pesticide_used = parse_numeric(&form.pesticide_used, "Pesticide Used", &mut ledger);

    let soil_type =
        parse_category(form.soil_type, "Soil Type", &mut ledger).map(|v| v.as_str());
    let region = parse_category(form.region, "Region", &mut ledger).map(|v| v.as_str());
    let season = parse_category(form.season, "Season", &mut ledger).map(|v| v.as_str());
    let crop_type =
        parse_category(form.crop_type, "Crop Type", &mut ledger).map(|v| v.as_str());
    let irrigation_type =
        parse_category(form.irrigation_type, "Irrigation Type", &mut ledger).map(|v| v.as_str());

    let record = FeatureRecord {
        n,
        p,
        k,
        soil_ph,
        soil_moisture,
        organic_carbon,
        temperature,
        humidity,
        rainfall,
        sunlight_hours,
        wind_speed,
        altitude,
        fertilizer_used,
        pesticide_used,
        soil_type,
        region,
        season,
        crop_type,
        irrigation_type,
    };
    (record, ledger)
}

/// Passive diagnostics shown after parsing, before any predict decision.
/// Invalid fields get an error line, missing fields a warning line; the two
/// are independent and can both appear.
pub fn input_diagnostics(ledger: &ValidationLedger) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    if !ledger.invalid_numeric.is_empty() {
        out.push(Diagnostic::new(
            Severity::Error,
            format!(
                "Invalid numeric input detected in: {}",
                ledger.invalid_numeric.join(", ")
            ),
        ));
    }
    if ledger.has_missing() {
        out.push(Diagnostic::new(
            Severity::Warning,
            format!(
                "Some fields were left empty and will be auto-filled by the model:\n{}",
                ledger.missing_names().join(", ")
            ),
        ));
    }
    out
}

/// Terminal state of one predict action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Invalid fields present; the predictor was never invoked.
    Blocked,
    /// Prediction succeeded; value is rounded to two decimals.
    Predicted { yield_tons_per_ha: f64 },
}

/// The predict gate. Invalid input short-circuits to `Blocked` without
/// touching the predictor; otherwise the record is passed through with its
/// absent markers intact and the predictor's own imputation fills them.
/// Predictor failures are not caught here.
pub fn run_predict<P: Predictor>(
    predictor: &P,
    record: &FeatureRecord,
    ledger: &ValidationLedger,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Outcome, PredictError> {
    if ledger.blocks_prediction() {
        return Ok(Outcome::Blocked);
    }

    let raw = predictor.predict(record)?;
    let rounded = (raw * 100.0).round() / 100.0;

    diagnostics.push(Diagnostic::new(
        Severity::Success,
        format!("Predicted Crop Yield: {:.2} tons/hectare", rounded),
    ));
    if ledger.has_missing() {
        diagnostics.push(Diagnostic::new(
            Severity::Info,
            format!(
                "The following fields were missing and were auto-imputed:\n{}",
                ledger.missing_names().join(", ")
            ),
        ));
    }
    Ok(Outcome::Predicted {
        yield_tons_per_ha: rounded,
    })
}
