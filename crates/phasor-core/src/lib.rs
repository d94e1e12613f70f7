//! Phasor Core Types and Definitions
//!
//! This crate provides the foundational types shared by the phasor diagram
//! pipeline. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Palette**: The cyclic per-vector color palette ([`palette::Palette`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Drawing primitives that render to SVG ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod palette;
