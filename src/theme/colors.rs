//! Color constants for the cyberpunk neon palette.
//!
//! Neon-on-void aesthetic: near-black backgrounds, three accent neons,
//! and a sky/teal pair reserved for the projects carousel.

#![allow(dead_code)]

// === VOID (Backgrounds) ===
pub const VOID_BLACK: &str = "#07070d";
pub const VOID_PANEL: &str = "#0d0d16";
pub const VOID_BORDER: &str = "#1c1c2a";

// === NEON ACCENTS ===
pub const NEON_CYAN: &str = "#00f0ff";
pub const NEON_CYAN_GLOW: &str = "rgba(0, 240, 255, 0.35)";
pub const NEON_PINK: &str = "#ff2bd6";
pub const NEON_PINK_GLOW: &str = "rgba(255, 43, 214, 0.35)";
pub const NEON_GREEN: &str = "#39ff14";
pub const NEON_GREEN_GLOW: &str = "rgba(57, 255, 20, 0.35)";

// === CAROUSEL (Sky / Teal) ===
pub const SKY: &str = "#38bdf8";
pub const SKY_GLOW: &str = "rgba(56, 189, 248, 0.2)";
pub const TEAL_BORDER: &str = "rgba(94, 234, 212, 0.2)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#e8e8f0";
pub const TEXT_SECONDARY: &str = "rgba(232, 232, 240, 0.7)";
pub const TEXT_MUTED: &str = "rgba(232, 232, 240, 0.45)";

/// The three accent colors shared by buttons, skill bars, and links.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NeonColor {
    #[default]
    Cyan,
    Pink,
    Green,
}

impl NeonColor {
    /// Class that colors text with the accent's glow.
    pub fn text_class(&self) -> &'static str {
        match self {
            NeonColor::Cyan => "neon-cyan",
            NeonColor::Pink => "neon-pink",
            NeonColor::Green => "neon-green",
        }
    }

    /// Class that draws a glowing border in the accent.
    pub fn border_class(&self) -> &'static str {
        match self {
            NeonColor::Cyan => "neon-border-cyan",
            NeonColor::Pink => "neon-border-pink",
            NeonColor::Green => "neon-border-green",
        }
    }

    /// Class for a filled bar/indicator in the accent.
    pub fn fill_class(&self) -> &'static str {
        match self {
            NeonColor::Cyan => "neon-fill-cyan",
            NeonColor::Pink => "neon-fill-pink",
            NeonColor::Green => "neon-fill-green",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_classes_match_their_color() {
        assert_eq!(NeonColor::Pink.text_class(), "neon-pink");
        assert_eq!(NeonColor::Green.border_class(), "neon-border-green");
        assert_eq!(NeonColor::Cyan.fill_class(), "neon-fill-cyan");
    }
}
