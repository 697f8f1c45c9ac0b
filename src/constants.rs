//! Shared constants for the generation pipeline
//!

use std::time::Duration;

/// Width and height (in pixels) requested from the placeholder-image service.
pub const IMAGE_SIZE: u32 = 512;

/// Modulus applied to the description hash when deriving an image seed.
pub const IMAGE_SEED_MODULUS: u64 = 1000;

/// Prefix for stored image filenames.
pub const IMAGE_FILE_PREFIX: &str = "mandala_";

/// Extension for stored image filenames.
pub const IMAGE_FILE_EXTENSION: &str = "png";

/// Timeout for the random-quote fetch.
pub const QUOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for the placeholder-image fetch.
pub const IMAGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Rendered size requested from the QR service.
pub const QR_SIZE: &str = "150x150";

/// Endpoint of the QR rendering service.
pub const QR_API_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Default base URL of the random-quote service.
pub const DEFAULT_QUOTE_API_URL: &str = "https://api.quotable.io";

/// Default base URL of the placeholder-image service.
pub const DEFAULT_IMAGE_API_URL: &str = "https://picsum.photos";
