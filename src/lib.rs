//! Single-page portfolio
//!
//! Exposes the page's modules for testing and reuse.

pub mod content;
pub mod cursor;
pub mod links;
pub mod modal;
pub mod navigation;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod theme;
