use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::circuit;

use super::{error::ApiError, extract::Json, health};

pub fn router() -> Router {
    Router::new()
        .route("/ohms_law", post(ohms_law))
        .route("/power", post(power))
        .route("/voltage_divider", post(voltage_divider))
        .route("/rc_time_constant", post(rc_time_constant))
        .route("/series_resistance", post(series_resistance))
        .route("/parallel_resistance", post(parallel_resistance))
        .route("/health", get(health::health_check))
        .route("/healthz", get(healthz))
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

#[derive(Debug, Deserialize)]
pub struct OhmsLawRequest {
    pub voltage: f64,
    pub resistance: f64,
}

/// POST /ohms_law - current through a resistor (I = V / R)
pub async fn ohms_law(Json(req): Json<OhmsLawRequest>) -> Result<Json<CurrentResponse>, ApiError> {
    let current = circuit::current_from_ohms_law(req.voltage, req.resistance)?;
    Ok(Json(CurrentResponse { current }))
}

#[derive(Debug, Deserialize)]
pub struct PowerRequest {
    pub voltage: f64,
    pub current: f64,
}

/// POST /power - electrical power (P = V * I)
///
/// Defined for all real inputs; the only possible rejection is a missing
/// or malformed field at the boundary.
pub async fn power(Json(req): Json<PowerRequest>) -> Json<PowerResponse> {
    let power = circuit::power(req.voltage, req.current);
    Json(PowerResponse { power })
}

#[derive(Debug, Deserialize)]
pub struct VoltageDividerRequest {
    pub input_voltage: f64,
    pub r1: f64,
    pub r2: f64,
}

/// POST /voltage_divider - output voltage across r2
pub async fn voltage_divider(
    Json(req): Json<VoltageDividerRequest>,
) -> Result<Json<CalcResponse>, ApiError> {
    let result = circuit::voltage_divider(req.input_voltage, req.r1, req.r2)?;
    Ok(Json(CalcResponse { result }))
}

#[derive(Debug, Deserialize)]
pub struct RcTimeConstantRequest {
    pub resistance: f64,
    pub capacitance: f64,
}

/// POST /rc_time_constant - RC circuit time constant (tau = R * C)
pub async fn rc_time_constant(
    Json(req): Json<RcTimeConstantRequest>,
) -> Result<Json<CalcResponse>, ApiError> {
    let result = circuit::rc_time_constant(req.resistance, req.capacitance)?;
    Ok(Json(CalcResponse { result }))
}

#[derive(Debug, Deserialize)]
pub struct ResistanceListRequest {
    pub resistances: Vec<f64>,
}

/// POST /series_resistance - total resistance of a series network
pub async fn series_resistance(
    Json(req): Json<ResistanceListRequest>,
) -> Result<Json<CalcResponse>, ApiError> {
    let result = circuit::series_resistance(&req.resistances)?;
    Ok(Json(CalcResponse { result }))
}

/// POST /parallel_resistance - total resistance of a parallel network
pub async fn parallel_resistance(
    Json(req): Json<ResistanceListRequest>,
) -> Result<Json<CalcResponse>, ApiError> {
    let result = circuit::parallel_resistance(&req.resistances)?;
    Ok(Json(CalcResponse { result }))
}

// Response types

#[derive(Debug, Serialize)]
pub struct CurrentResponse {
    pub current: f64,
}

#[derive(Debug, Serialize)]
pub struct PowerResponse {
    pub power: f64,
}

#[derive(Debug, Serialize)]
pub struct CalcResponse {
    pub result: f64,
}
