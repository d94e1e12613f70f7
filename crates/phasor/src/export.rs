//! Turning scenes into files.
//!
//! - [`svg`] - The SVG backend that draws a [`Scene`](crate::Scene)
//! - [`download`] - Packaging rendered markup as a downloadable data URI

pub mod download;
pub mod svg;
