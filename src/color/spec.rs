use std::fmt;

use crate::foundation::core::Rgba8;

const BLACK: Rgba8 = image::Rgba([0, 0, 0, 255]);

/// Color specification for one role.
///
/// Textual form: empty for the role default, `#RRGGBB` for a solid color, `#RRGGBB:#RRGGBB` for a
/// 256-step blend indexed by the variant's resolution number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorSpec {
    /// Use the role's built-in color.
    #[default]
    Default,
    /// One color for every variant.
    Solid(Rgba8),
    /// Interpolate from the first color (resolution 0) to the second (resolution 255).
    Blend(Rgba8, Rgba8),
}

impl ColorSpec {
    /// Parse a spec leniently. Unreadable hex values become opaque black with a warning; parts
    /// after the second `:` are ignored.
    pub fn parse(s: &str) -> Self {
        let mut parts = s.split(':');
        let first = parts.next().unwrap_or_default();
        match parts.next() {
            None if first.trim().is_empty() => Self::Default,
            None => Self::Solid(hex_or_black(first)),
            Some(second) => Self::Blend(hex_or_black(first), hex_or_black(second)),
        }
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => Ok(()),
            Self::Solid(c) => write_hex(f, *c),
            Self::Blend(a, b) => {
                write_hex(f, *a)?;
                f.write_str(":")?;
                write_hex(f, *b)
            }
        }
    }
}

impl serde::Serialize for ColorSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ColorSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// Parse `RGB`, `RRGGBB` or `RRGGBBAA` (optional leading `#`, case-insensitive) into straight
/// RGBA8.
pub fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(format!("invalid hex color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    let rgba = match s.len() {
        3 => {
            let mut out = [0u8, 0, 0, 255];
            for (i, ch) in s.char_indices() {
                let nibble = hex_byte(&ch.to_string())?;
                out[i] = nibble * 17;
            }
            out
        }
        6 => [
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        ],
        8 => [
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ],
        _ => {
            return Err("hex color must be #RGB, #RRGGBB or #RRGGBBAA".to_owned());
        }
    };
    Ok(image::Rgba(rgba))
}

fn hex_or_black(s: &str) -> Rgba8 {
    parse_hex(s).unwrap_or_else(|e| {
        tracing::warn!(input = s, error = %e, "bad color, substituting black");
        BLACK
    })
}

fn write_hex(f: &mut fmt::Formatter<'_>, c: Rgba8) -> fmt::Result {
    let [r, g, b, a] = c.0;
    if a == 255 {
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    } else {
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/spec.rs"]
mod tests;
