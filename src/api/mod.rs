//! HTTP API module for the take-home pay engine.
//!
//! This module provides the JSON endpoints for the employee and contractor
//! scenarios, comparisons, the layered calculation and the reference data.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AbnScenarioRequest, CalculateRequest, CompareRequest, FifoRequest, TfnScenarioRequest,
};
pub use response::{
    ApiError, ComparisonDisplay, ComparisonResponse, DisplaySummary, ScenarioResponse,
    TaxReferenceResponse,
};
pub use state::AppState;
