//! QR code URL construction.
//!
//! No network I/O happens here; the returned URL points at an external
//! renderer that draws the code when a client dereferences it.

use url::Url;

use crate::constants::{QR_API_URL, QR_SIZE};

/// Builds the QR-service URL that renders a 150x150 code for `target`. The
/// target ends up percent-encoded in the `data` query parameter.
pub fn qr_code_url(target: &str) -> Result<String, url::ParseError> {
    let url = Url::parse_with_params(QR_API_URL, &[("size", QR_SIZE), ("data", target)])?;
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_the_target_percent_encoded() {
        let target = "http://localhost:5000/static/images/mandala_0123abcd.png";
        let qr = qr_code_url(target).expect("build QR URL");
        assert_eq!(
            qr,
            "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=http%3A%2F%2Flocalhost%3A5000%2Fstatic%2Fimages%2Fmandala_0123abcd.png"
        );
    }

    #[test]
    fn output_is_deterministic() {
        let target = "https://example.org/a.png";
        assert_eq!(
            qr_code_url(target).expect("build QR URL"),
            qr_code_url(target).expect("build QR URL")
        );
    }
}
