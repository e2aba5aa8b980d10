//! Response types for the take-home pay API.
//!
//! This module defines the success payloads that are not plain engine
//! results, plus the error response structures and mapping from
//! [`EngineError`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::ScenarioComparison;
use crate::config::ReferenceMetadata;
use crate::error::EngineError;
use crate::format::format_currency;
use crate::models::TaxBracket;

/// Reference tax tables returned by `/reference/tax-brackets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxReferenceResponse {
    /// Financial year and source of the tables.
    pub metadata: ReferenceMetadata,
    /// Resident income tax brackets, lowest first.
    pub brackets: Vec<TaxBracket>,
    /// Medicare levy rate.
    pub medicare_levy_rate: Decimal,
    /// Income at or below which no Medicare levy is payable.
    pub medicare_levy_threshold: Decimal,
    /// Maximum low income tax offset.
    pub lito_max_offset: Decimal,
    /// Super guarantee rate.
    pub super_guarantee_rate: Decimal,
}

/// Headline figures formatted for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySummary {
    /// Annual net take-home, e.g. `$54,908.00`.
    pub net_take_home: String,
    /// Weekly net take-home.
    pub weekly_take_home: String,
}

impl DisplaySummary {
    /// Formats a net and weekly amount.
    pub fn new(net_take_home: Decimal, weekly_take_home: Decimal) -> Self {
        Self {
            net_take_home: format_currency(net_take_home),
            weekly_take_home: format_currency(weekly_take_home),
        }
    }
}

/// A calculation result with its display summary alongside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResponse<T> {
    /// The full engine result.
    pub result: T,
    /// Headline figures as currency strings.
    pub display: DisplaySummary,
}

/// Comparison headline figures formatted for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonDisplay {
    /// Employee annual net take-home.
    pub tfn_net_take_home: String,
    /// Contractor annual net take-home.
    pub abn_net_take_home: String,
    /// ABN minus TFN net take-home.
    pub difference: String,
}

/// A comparison with its display summary alongside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResponse {
    /// The full comparison.
    pub comparison: ScenarioComparison,
    /// Headline figures as currency strings.
    pub display: ComparisonDisplay,
}

impl From<ScenarioComparison> for ComparisonResponse {
    fn from(comparison: ScenarioComparison) -> Self {
        let display = ComparisonDisplay {
            tfn_net_take_home: format_currency(comparison.tfn.net_take_home),
            abn_net_take_home: format_currency(comparison.abn.net_take_home),
            difference: format_currency(comparison.difference),
        };
        Self {
            comparison,
            display,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidTaxTable { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid tax table", message),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input '{}': {}", field, message),
                    "The request contains a value outside its permitted range",
                ),
            },
            EngineError::PresetNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "PRESET_NOT_FOUND",
                    format!("Preset not found: {}", id),
                    format!("The preset id '{}' is not in the catalog", id),
                ),
            },
            EngineError::ScenarioNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "SCENARIO_NOT_FOUND",
                    format!("Saved scenario not found: {}", id),
                ),
            },
            error @ EngineError::ScenarioLimitReached { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("SCENARIO_LIMIT_REACHED", error.to_string()),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
