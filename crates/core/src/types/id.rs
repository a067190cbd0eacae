//! Vendor identity type.
//!
//! A vendor's identity is the opaque id assigned by the authentication
//! provider at sign-up. It doubles as the document key in the `vendors`
//! collection and never changes for the lifetime of the record.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`VendorId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum VendorIdError {
    /// The input string is empty.
    #[error("vendor id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("vendor id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character that is not allowed in a document key.
    #[error("vendor id contains invalid character {0:?}")]
    InvalidChar(char),
}

/// An opaque vendor identity issued by the auth provider.
///
/// The id is also the document key, so it is restricted to characters that
/// are safe in a document path and in a URL segment.
///
/// ## Constraints
///
/// - Length: 1-128 characters
/// - Allowed characters: ASCII alphanumerics, `-` and `_`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct VendorId(String);

impl VendorId {
    /// Maximum length of a vendor id.
    pub const MAX_LENGTH: usize = 128;

    /// Parse a `VendorId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 128 characters,
    /// or contains characters outside `[A-Za-z0-9_-]`.
    pub fn parse(s: &str) -> Result<Self, VendorIdError> {
        if s.is_empty() {
            return Err(VendorIdError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(VendorIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = s
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
        {
            return Err(VendorIdError::InvalidChar(c));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the vendor id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `VendorId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for VendorId {
    type Err = VendorIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for VendorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
