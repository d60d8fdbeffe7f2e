//! Cyberpunk neon theme for Neonfolio.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
