//! Data-URI downloads.
//!
//! [`export_svg`] packages the markup held by a [`Surface`] as a base64
//! `data:image/svg+xml` URI with a fixed file name. The host decides what to
//! do with it: a browser follows the link, the CLI saves or prints it.

use std::{fs, path::Path};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use log::info;

use crate::{error::PhasorError, surface::Surface};

/// File name suggested for every exported diagram.
pub const FILE_NAME: &str = "phasor-diagram.svg";

/// MIME type of exported diagrams.
pub const MIME_TYPE: &str = "image/svg+xml";

/// An exported diagram, ready to hand to a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    href: String,
}

impl Download {
    /// Encodes `markup` as a data URI.
    pub fn new(markup: &str) -> Self {
        let encoded = BASE64_STANDARD.encode(markup.as_bytes());
        Self {
            href: format!("data:{MIME_TYPE};base64,{encoded}"),
        }
    }

    /// Returns the suggested file name.
    pub fn file_name(&self) -> &'static str {
        FILE_NAME
    }

    /// Returns the MIME type.
    pub fn mime_type(&self) -> &'static str {
        MIME_TYPE
    }

    /// Returns the data URI.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Decodes the data URI back into SVG markup.
    ///
    /// # Errors
    ///
    /// Returns [`PhasorError::Export`] if the URI is not a base64 SVG data
    /// URI or its payload is not UTF-8.
    pub fn decode(&self) -> Result<String, PhasorError> {
        let payload = self
            .href
            .strip_prefix(&format!("data:{MIME_TYPE};base64,"))
            .ok_or_else(|| PhasorError::Export("not an SVG data URI".to_string()))?;

        let bytes = BASE64_STANDARD
            .decode(payload)
            .map_err(|err| PhasorError::Export(format!("invalid base64 payload: {err}")))?;

        String::from_utf8(bytes)
            .map_err(|err| PhasorError::Export(format!("payload is not UTF-8: {err}")))
    }

    /// Writes the decoded diagram to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PhasorError`] if decoding or writing fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PhasorError> {
        let path = path.as_ref();
        let markup = self.decode()?;
        fs::write(path, markup)?;
        info!(path = path.display().to_string(); "Diagram saved");
        Ok(())
    }
}

/// Exports whatever `surface` last rendered.
///
/// An empty surface exports an empty image.
pub fn export_svg(surface: &Surface) -> Download {
    info!(bytes = surface.markup().len(); "Exporting diagram");
    Download::new(surface.markup())
}
