use axum::{extract::State, http::StatusCode, routing::post, Json};
use serde_json::json;
use std::sync::Arc;

use yield_predictor::model::{LinearModel, Predictor};
use yield_predictor::record::FeatureRecord;
use yield_predictor::session::{self, Outcome};
use yield_predictor::types::{PredictOut, RawForm, ValidateOut};

// ---------- Server state ----------

#[derive(Clone)]
struct AppState {
    mdl: Arc<LinearModel>,
}

// ---------- Handlers ----------

// Passive pass: parse everything, report invalid/missing fields, never predict.
async fn validate(Json(form): Json<RawForm>) -> Json<ValidateOut> {
    let (_record, ledger) = session::assemble(&form);
    tracing::info!(
        "validate: invalid=[{}] missing=[{}]",
        ledger.invalid_numeric.join(", "),
        ledger.missing_names().join(", ")
    );
    Json(ValidateOut {
        diagnostics: session::input_diagnostics(&ledger),
    })
}

// The "Predict Crop Yield" trigger: same parse, then the gate decides.
async fn predict(
    State(state): State<AppState>,
    Json(form): Json<RawForm>,
) -> Result<Json<PredictOut>, (StatusCode, Json<serde_json::Value>)> {
    let (record, ledger) = session::assemble(&form);
    let mut diagnostics = session::input_diagnostics(&ledger);

    let outcome = session::run_predict(state.mdl.as_ref(), &record, &ledger, &mut diagnostics)
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        })?;

    let out = match outcome {
        Outcome::Blocked => {
            tracing::warn!(
                "predict blocked: invalid=[{}]",
                ledger.invalid_numeric.join(", ")
            );
            PredictOut {
                status: "blocked",
                prediction: None,
                diagnostics,
            }
        }
        Outcome::Predicted { yield_tons_per_ha } => {
            tracing::info!(
                "predicted {:.2} t/ha ({} fields imputed)",
                yield_tons_per_ha,
                ledger.missing_names().len()
            );
            PredictOut {
                status: "predicted",
                prediction: Some(yield_tons_per_ha),
                diagnostics,
            }
        }
    };
    Ok(Json(out))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let model_path = std::env::var("MODEL_PATH").expect("MODEL_PATH not set");
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    let mdl = LinearModel::load(&model_path)?;
    // Warmup on an all-absent record; the artifact imputes every field
    let estimate = mdl.predict(&FeatureRecord::default())?;
    tracing::info!("loaded model from {}; warmup estimate {:.2}", model_path, estimate);

    let state = AppState { mdl: Arc::new(mdl) };

    let app = axum::Router::new()
        .route("/validate", post(validate))
        .route("/predict", post(predict))
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
