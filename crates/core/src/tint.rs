//! Cosmetic RGBA color carried by particles for the rendering collaborator.

use crate::error::SimError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit RGBA color.
///
/// Serializes as `"#rrggbbaa"`. Parsing also accepts `"#rrggbb"` (opaque)
/// and omits the leading `#` if absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    /// Pale steel blue at ~60% opacity.
    pub const IRON: Tint = Tint::rgba(200, 200, 255, 150);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: &str) -> Result<Tint, SimError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return Err(SimError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {}",
                hex.len()
            )));
        }
        let channel = |i: usize, name: &str| {
            hex.get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| SimError::InvalidColor(format!("invalid {name} component")))
        };
        Ok(Tint {
            r: channel(0, "red")?,
            g: channel(2, "green")?,
            b: channel(4, "blue")?,
            a: if hex.len() == 8 {
                channel(6, "alpha")?
            } else {
                u8::MAX
            },
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Channels scaled to [0, 1], in RGBA order.
    pub fn to_unit(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a].map(|c| c as f64 / 255.0)
    }
}

impl Default for Tint {
    fn default() -> Self {
        Tint::IRON
    }
}

impl Serialize for Tint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Tint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Tint::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_iron() {
        assert_eq!(Tint::default(), Tint::rgba(200, 200, 255, 150));
    }

    #[test]
    fn from_hex_parses_rgba_and_rgb() {
        assert_eq!(
            Tint::from_hex("#c8c8ff96").unwrap(),
            Tint::rgba(200, 200, 255, 150)
        );
        assert_eq!(Tint::from_hex("FF0000").unwrap(), Tint::rgba(255, 0, 0, 255));
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(Tint::from_hex("#fff").is_err());
        assert!(Tint::from_hex("#gg0000").is_err());
        assert!(Tint::from_hex("#ff0000zz").is_err());
        // Multi-byte characters must not panic on slicing.
        assert!(Tint::from_hex("ééé").is_err());
    }

    #[test]
    fn to_hex_is_lowercase_with_alpha() {
        assert_eq!(Tint::IRON.to_hex(), "#c8c8ff96");
    }

    #[test]
    fn to_unit_scales_channels() {
        let [r, g, b, a] = Tint::rgba(255, 0, 51, 255).to_unit();
        assert_eq!((r, g, a), (1.0, 0.0, 1.0));
        assert!((b - 0.2).abs() < 1e-12);
    }

    #[test]
    fn serde_uses_hex_string() {
        let json = serde_json::to_string(&Tint::IRON).unwrap();
        assert_eq!(json, "\"#c8c8ff96\"");
        let back: Tint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tint::IRON);
        assert!(serde_json::from_str::<Tint>("\"nope\"").is_err());
    }
}
