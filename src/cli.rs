//! CLI parser
use clap::Parser;
use std::num::NonZeroU16;
use std::path::PathBuf;

use crate::constants::{DEFAULT_IMAGE_API_URL, DEFAULT_QUOTE_API_URL};

#[derive(Parser, Debug)]
/// CLI Options
pub struct CliOptions {
    #[clap(long, help = "Enable debug logging", env = "MANDALA_DEBUG")]
    /// Enable debug logging. Env: MANDALA_DEBUG
    pub debug: bool,
    #[clap(long, short, default_value = "5000", env = "MANDALA_PORT")]
    /// http listener port, defaults to `5000`.
    /// Env: MANDALA_PORT
    pub port: NonZeroU16,
    #[clap(
        long,
        short,
        default_value = "127.0.0.1",
        env = "MANDALA_LISTEN_ADDRESS"
    )]
    /// Listen address, defaults to `127.0.0.1`.
    /// Env: MANDALA_LISTEN_ADDRESS
    pub listen_address: String,
    #[clap(
        long,
        short,
        default_value = "http://localhost:5000",
        env = "MANDALA_BASE_URL"
    )]
    /// Public base URL used to build image and QR links, needs to be the
    /// externally reachable origin in prod.
    /// Env: MANDALA_BASE_URL
    pub base_url: String,
    #[clap(long, default_value = "./static/images", env = "MANDALA_IMAGE_DIR")]
    /// Directory where generated mandala images are stored and served from.
    /// Env: MANDALA_IMAGE_DIR
    pub image_dir: PathBuf,
    #[clap(long, default_value = DEFAULT_QUOTE_API_URL, env = "MANDALA_QUOTE_API_URL")]
    /// Base URL of the random-quote service.
    /// Env: MANDALA_QUOTE_API_URL
    pub quote_api_url: String,
    #[clap(long, default_value = DEFAULT_IMAGE_API_URL, env = "MANDALA_IMAGE_API_URL")]
    /// Base URL of the placeholder-image service.
    /// Env: MANDALA_IMAGE_API_URL
    pub image_api_url: String,
    #[clap(long, env = "SESSION_SECRET", hide_env_values = true)]
    /// Session signing secret, accepted for deployment parity. The request
    /// pipeline itself is stateless and does not read it.
    /// Env: SESSION_SECRET
    pub session_secret: Option<String>,
}
