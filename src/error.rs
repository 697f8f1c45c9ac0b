//! Error handling

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use tracing::{error, info};

/// Error definitions for the mandala application.
#[derive(Debug)]
pub enum MandalaError {
    /// The submitted thought was empty after trimming.
    EmptyThought,
    /// Description synthesis produced nothing. Synthesis always falls back to
    /// a canned template, so this arm exists for robustness only.
    SynthesisUnavailable,
    /// The placeholder image could not be fetched or stored.
    ImageProvisioning,
    /// Anything else that escapes the pipeline.
    Unexpected(String),
}

impl From<std::io::Error> for MandalaError {
    fn from(err: std::io::Error) -> Self {
        MandalaError::Unexpected(err.to_string())
    }
}

impl From<url::ParseError> for MandalaError {
    fn from(err: url::ParseError) -> Self {
        MandalaError::Unexpected(err.to_string())
    }
}

impl From<reqwest::Error> for MandalaError {
    fn from(err: reqwest::Error) -> Self {
        MandalaError::Unexpected(err.to_string())
    }
}

impl IntoResponse for MandalaError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            MandalaError::EmptyThought => {
                info!("Rejected empty thought");
                (
                    StatusCode::BAD_REQUEST,
                    "Por favor, digite um pensamento ou ideia".to_string(),
                )
            }
            MandalaError::SynthesisUnavailable => {
                error!("Description synthesis returned nothing");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Falha ao gerar a descrição da mandala".to_string(),
                )
            }
            MandalaError::ImageProvisioning => {
                error!("Image provisioning failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Falha ao gerar a imagem da mandala".to_string(),
                )
            }
            MandalaError::Unexpected(message) => {
                error!("Error generating mandala: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Ocorreu um erro: {}", message),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
