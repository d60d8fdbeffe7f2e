//! Pointer-proximity weight and font-variation interpolation.
//!
//! Drives the "magnetic ink" text effect: a text element's variable-font
//! axes slide between a rest preset and an activated preset as the
//! pointer approaches its center. The weight is a pure function of the
//! latest pointer distance; nothing is accumulated over time.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How the proximity weight decays with distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Falloff {
    /// Weight decays linearly from 1 at the center to 0 at the radius.
    #[default]
    Linear,
    /// Weight decays with the square of the normalized distance,
    /// tightening the effect around the center.
    Quadratic,
}

/// Error for an unrecognized falloff mode name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown falloff mode: {0:?}")]
pub struct ParseFalloffError(String);

impl FromStr for Falloff {
    type Err = ParseFalloffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "quadratic" => Ok(Self::Quadratic),
            _ => Err(ParseFalloffError(s.to_string())),
        }
    }
}

impl Falloff {
    /// Maps a distance to an interpolation weight in `[0, 1]`.
    ///
    /// The boundary is excluded: `distance == radius` already yields 0.
    /// A non-positive radius disables the effect entirely.
    pub fn weight(self, distance: f64, radius: f64) -> f64 {
        if radius <= 0.0 || distance >= radius {
            return 0.0;
        }
        let t = 1.0 - distance / radius;
        match self {
            Self::Linear => t,
            Self::Quadratic => t * t,
        }
    }

    /// Weight for a pointer position against an element center.
    pub fn weight_at(self, pointer: (f64, f64), center: (f64, f64), radius: f64) -> f64 {
        let dx = pointer.0 - center.0;
        let dy = pointer.1 - center.1;
        self.weight(dx.hypot(dy), radius)
    }
}

/// A named set of numeric font-variation axes, e.g. `wght 400, opsz 9`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct VariationAxes {
    axes: BTreeMap<String, f64>,
}

impl VariationAxes {
    /// Parses a CSS-style preset string such as `"'wght' 400, 'opsz' 9"`.
    ///
    /// Entries that don't look like `'name' value` are skipped; the input
    /// is caller-controlled, so a malformed entry degrades the effect
    /// rather than failing it.
    pub fn parse(input: &str) -> Self {
        let mut axes = BTreeMap::new();
        for part in input.split(',') {
            if let Some((name, value)) = parse_axis_entry(part) {
                axes.insert(name.to_string(), value);
            }
        }
        Self { axes }
    }

    /// Value of a single axis, if present.
    pub fn get(&self, axis: &str) -> Option<f64> {
        self.axes.get(axis).copied()
    }

    /// Whether no axes are present.
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Interpolates between two presets at `weight`.
    ///
    /// Every axis named in either preset participates: an axis missing
    /// from `from` starts at 0, and an axis missing from `to` keeps its
    /// `from` value (it stays constant across the whole range).
    pub fn lerp(from: &Self, to: &Self, weight: f64) -> Self {
        let mut axes = BTreeMap::new();
        for name in from.axes.keys().chain(to.axes.keys()) {
            if axes.contains_key(name) {
                continue;
            }
            let a = from.get(name).unwrap_or(0.0);
            let b = to.get(name).unwrap_or(a);
            axes.insert(name.clone(), a + (b - a) * weight);
        }
        Self { axes }
    }
}

impl fmt::Display for VariationAxes {
    /// Renders as a `font-variation-settings` value:
    /// `'opsz' 9.00, 'wght' 400.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in &self.axes {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "'{name}' {value:.2}")?;
            first = false;
        }
        Ok(())
    }
}

/// Parses one `'name' value` entry, returning `None` on anything malformed.
fn parse_axis_entry(part: &str) -> Option<(&str, f64)> {
    let part = part.trim();
    let rest = part.strip_prefix('\'')?;
    let (name, tail) = rest.split_once('\'')?;
    if name.is_empty() {
        return None;
    }
    let value: f64 = tail.trim().parse().ok()?;
    Some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_at_center_is_one() {
        assert_eq!(Falloff::Linear.weight(0.0, 100.0), 1.0);
        assert_eq!(Falloff::Quadratic.weight(0.0, 100.0), 1.0);
    }

    #[test]
    fn weight_at_radius_is_zero() {
        assert_eq!(Falloff::Linear.weight(100.0, 100.0), 0.0);
        assert_eq!(Falloff::Quadratic.weight(100.0, 100.0), 0.0);
    }

    #[test]
    fn weight_beyond_radius_is_zero() {
        assert_eq!(Falloff::Linear.weight(250.0, 100.0), 0.0);
    }

    #[test]
    fn quadratic_decays_faster_than_linear() {
        for d in [1.0, 25.0, 50.0, 99.0] {
            let linear = Falloff::Linear.weight(d, 100.0);
            let quadratic = Falloff::Quadratic.weight(d, 100.0);
            assert!(quadratic < linear, "d={d}: {quadratic} !< {linear}");
        }
    }

    #[test]
    fn zero_radius_disables_the_effect() {
        assert_eq!(Falloff::Linear.weight(0.0, 0.0), 0.0);
    }

    #[test]
    fn weight_at_uses_euclidean_distance() {
        // 3-4-5 triangle: distance 50 inside a radius of 100
        let w = Falloff::Linear.weight_at((130.0, 240.0), (100.0, 200.0), 100.0);
        assert!((w - 0.5).abs() < 1e-9);
    }

    #[test]
    fn falloff_parses_from_str() {
        assert_eq!("linear".parse::<Falloff>(), Ok(Falloff::Linear));
        assert_eq!("Quadratic".parse::<Falloff>(), Ok(Falloff::Quadratic));
        assert!("cubic".parse::<Falloff>().is_err());
    }

    #[test]
    fn parses_preset_string() {
        let axes = VariationAxes::parse("'wght' 400, 'opsz' 9");
        assert_eq!(axes.get("wght"), Some(400.0));
        assert_eq!(axes.get("opsz"), Some(9.0));
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let axes = VariationAxes::parse("'wght' 400, nonsense, 'opsz'");
        assert_eq!(axes.get("wght"), Some(400.0));
        assert_eq!(axes.get("opsz"), None);
    }

    #[test]
    fn empty_input_yields_no_axes() {
        assert!(VariationAxes::parse("").is_empty());
    }

    #[test]
    fn lerp_interpolates_shared_axes() {
        let from = VariationAxes::parse("'wght' 400, 'opsz' 9");
        let to = VariationAxes::parse("'wght' 900, 'opsz' 36");
        let mid = VariationAxes::lerp(&from, &to, 0.5);
        assert_eq!(mid.get("wght"), Some(650.0));
        assert_eq!(mid.get("opsz"), Some(22.5));
    }

    #[test]
    fn lerp_at_zero_and_one_hits_the_presets() {
        let from = VariationAxes::parse("'wght' 400");
        let to = VariationAxes::parse("'wght' 900");
        assert_eq!(VariationAxes::lerp(&from, &to, 0.0).get("wght"), Some(400.0));
        assert_eq!(VariationAxes::lerp(&from, &to, 1.0).get("wght"), Some(900.0));
    }

    #[test]
    fn axis_missing_from_rest_preset_starts_at_zero() {
        let from = VariationAxes::parse("'wght' 400");
        let to = VariationAxes::parse("'wght' 900, 'slnt' 10");
        let mid = VariationAxes::lerp(&from, &to, 0.5);
        assert_eq!(mid.get("slnt"), Some(5.0));
    }

    #[test]
    fn axis_missing_from_target_preset_stays_constant() {
        let from = VariationAxes::parse("'wght' 400, 'opsz' 9");
        let to = VariationAxes::parse("'wght' 900");
        for weight in [0.0, 0.3, 1.0] {
            let v = VariationAxes::lerp(&from, &to, weight);
            assert_eq!(v.get("opsz"), Some(9.0));
        }
    }

    #[test]
    fn display_formats_css_value() {
        let axes = VariationAxes::parse("'wght' 612.5, 'opsz' 24");
        assert_eq!(axes.to_string(), "'opsz' 24.00, 'wght' 612.50");
    }
}
