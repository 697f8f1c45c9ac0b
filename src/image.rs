//! Image provisioning from the placeholder-image service.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::Path;

use tracing::{error, info};

use crate::constants::{IMAGE_SEED_MODULUS, IMAGE_SIZE, IMAGE_TIMEOUT};

/// Failure modes when provisioning an image. Callers treat every variant the
/// same way; the split exists for logging.
#[derive(Debug)]
pub enum ImageError {
    /// The request to the image service failed or timed out.
    Fetch(reqwest::Error),
    /// The image service answered with a non-success status.
    Status(reqwest::StatusCode),
    /// Writing the downloaded bytes to disk failed.
    Write(std::io::Error),
}

/// Derives the placeholder-service seed from a description.
///
/// Stable for identical input within a process, always in `[0, 1000)`. The
/// seed only pins the placeholder service's output for repeat calls with the
/// same description.
pub fn seed(description: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    description.hash(&mut hasher);
    hasher.finish() % IMAGE_SEED_MODULUS
}

/// Downloads the seeded 512x512 placeholder image and writes it to `path`,
/// overwriting any existing file. No partial file is left behind on failure;
/// the body is fully buffered before anything touches the disk.
pub async fn provision(
    client: &reqwest::Client,
    image_api_url: &str,
    description: &str,
    path: &Path,
) -> Result<(), ImageError> {
    let url = format!(
        "{}/seed/{}/{}/{}",
        image_api_url.trim_end_matches('/'),
        seed(description),
        IMAGE_SIZE,
        IMAGE_SIZE
    );

    let response = match client.get(&url).timeout(IMAGE_TIMEOUT).send().await {
        Ok(response) => response,
        Err(err) => {
            error!("Error fetching image: {}", err);
            return Err(ImageError::Fetch(err));
        }
    };

    let status = response.status();
    if !status.is_success() {
        error!("Failed to download image: {}", status);
        return Err(ImageError::Status(status));
    }

    let bytes = response.bytes().await.map_err(|err| {
        error!("Error reading image body: {}", err);
        ImageError::Fetch(err)
    })?;
    tokio::fs::write(path, &bytes).await.map_err(|err| {
        error!("Error writing image to {}: {}", path.display(), err);
        ImageError::Write(err)
    })?;

    info!("Mandala image downloaded successfully to {}", path.display());
    Ok(())
}
