//! Sharing a vendor's public stand page.
//!
//! A vendor prints a QR code that sends customers to their stand page. The
//! portal's part is building the URL; turning it into an image is the QR
//! encoder capability's job.

use thiserror::Error;
use url::Url;

use farmstand_core::VendorId;

/// Errors from a QR encoder implementation.
#[derive(Debug, Error)]
pub enum QrError {
    /// The encoder could not produce an image.
    #[error("QR encoding failed: {0}")]
    Encode(String),
}

/// Capability trait for the external QR image generator.
///
/// Pure: the same URL always yields the same image bytes.
pub trait QrImageEncoder: Send + Sync {
    /// Encode `url` as a QR image (PNG bytes).
    ///
    /// # Errors
    ///
    /// Returns `QrError` if encoding fails.
    fn encode(&self, url: &Url) -> Result<Vec<u8>, QrError>;
}

/// The public stand page URL for a vendor, under the configured base URL.
///
/// # Errors
///
/// Returns `url::ParseError` if `base_url` is not a valid absolute URL.
pub fn vendor_page_url(base_url: &str, vendor_id: &VendorId) -> Result<Url, url::ParseError> {
    // ensure a trailing slash so join appends instead of replacing the
    // last path segment
    let base = if base_url.ends_with('/') {
        Url::parse(base_url)?
    } else {
        Url::parse(&format!("{base_url}/"))?
    };
    base.join(&format!("adjuststock/{vendor_id}"))
}
