//! Web layer: routing, request orchestration and static image serving.

use std::path::PathBuf;

use askama::Template;
use askama_web::WebTemplate;
use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tracing::{error, info};

use crate::cli::CliOptions;
use crate::constants::{IMAGE_FILE_EXTENSION, IMAGE_FILE_PREFIX};
use crate::error::MandalaError;
use crate::{description, image, qr};

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    base_url: String,
    image_dir: PathBuf,
    quote_api_url: String,
    image_api_url: String,
    client: reqwest::Client,
}

impl AppState {
    fn new(base_url: &str, image_dir: PathBuf, quote_api_url: &str, image_api_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            image_dir,
            quote_api_url: quote_api_url.trim_end_matches('/').to_string(),
            image_api_url: image_api_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Publicly reachable URL for a stored image file.
    fn image_url(&self, filename: &str) -> String {
        format!("{}/static/images/{}", self.base_url, filename)
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate;

#[derive(Deserialize)]
pub(crate) struct GenerateRequest {
    #[serde(default)]
    thought: String,
}

#[derive(Serialize)]
pub(crate) struct GenerateResponse {
    description: String,
    image_url: String,
    qr_code: String,
    success: bool,
}

async fn index_handler() -> IndexTemplate {
    IndexTemplate
}

async fn styles_handler() -> impl IntoResponse {
    const STYLES: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/styles.css"));
    ([(CONTENT_TYPE, "text/css")], STYLES)
}

/// Unique filename for a freshly provisioned image, `mandala_<32-hex>.png`.
fn image_filename() -> String {
    let id: u128 = rand::rng().random();
    format!("{}{:032x}.{}", IMAGE_FILE_PREFIX, id, IMAGE_FILE_EXTENSION)
}

/// Handles `POST /generate_mandala`: validates the thought, synthesizes the
/// description, provisions the image and returns the assembled payload.
async fn generate_mandala_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, MandalaError> {
    let Json(request) = payload.map_err(|err| MandalaError::Unexpected(err.body_text()))?;
    let thought = request.thought.trim();
    if thought.is_empty() {
        return Err(MandalaError::EmptyThought);
    }

    info!("Generating mandala for thought: {}", thought);

    let mut rng = StdRng::from_os_rng();
    let description =
        description::synthesize(&state.client, &state.quote_api_url, thought, &mut rng).await;
    // Synthesis always produces a fallback; kept for robustness.
    if description.is_empty() {
        return Err(MandalaError::SynthesisUnavailable);
    }
    info!("Generated description: {}", description);

    let filename = image_filename();
    let image_path = state.image_dir.join(&filename);
    if let Err(err) =
        image::provision(&state.client, &state.image_api_url, &description, &image_path).await
    {
        error!("Error generating mandala image: {:?}", err);
        return Err(MandalaError::ImageProvisioning);
    }
    info!("Generated image saved to: {}", image_path.display());

    let image_url = state.image_url(&filename);
    let qr_code = qr::qr_code_url(&image_url)?;

    Ok(Json(GenerateResponse {
        description,
        image_url,
        qr_code,
        success: true,
    }))
}

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", axum::routing::get(index_handler))
        .route("/static/styles.css", axum::routing::get(styles_handler))
        .route(
            "/generate_mandala",
            axum::routing::post(generate_mandala_handler),
        )
        .nest_service("/static/images", ServeDir::new(state.image_dir.clone()))
        .with_state(state)
}

/// Starts the HTTP server with the given options.
pub async fn setup_server(cli: &CliOptions) -> Result<(), anyhow::Error> {
    let state = AppState::new(
        &cli.base_url,
        cli.image_dir.clone(),
        &cli.quote_api_url,
        &cli.image_api_url,
    );
    let app = create_router(state);

    let addr = format!("{}:{}", cli.listen_address, cli.port);
    info!("Starting server on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server error: {}", err);
    }
    Ok(())
}
