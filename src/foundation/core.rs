use std::fmt;

use crate::foundation::error::{StoreError, StoreResult};

pub use kurbo::{Point, Rect, Size};

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Canvas bounds as a rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Opaque sRGB color token, written as `#RRGGBB` in data files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `#RGB` (case-insensitive, `#` optional).
    pub fn from_hex(s: &str) -> StoreResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn nibble(c: u8) -> Option<u8> {
            (c as char).to_digit(16).map(|d| d as u8)
        }

        let bytes = s.as_bytes();
        let parsed = match bytes.len() {
            6 => {
                let mut ch = [0u8; 3];
                for (i, pair) in bytes.chunks_exact(2).enumerate() {
                    ch[i] = nibble(pair[0])
                        .zip(nibble(pair[1]))
                        .map(|(hi, lo)| (hi << 4) | lo)
                        .ok_or_else(|| {
                            StoreError::validation(format!("invalid hex color \"{s}\""))
                        })?;
                }
                Self::new(ch[0], ch[1], ch[2])
            }
            3 => {
                let mut ch = [0u8; 3];
                for (i, &c) in bytes.iter().enumerate() {
                    let d = nibble(c).ok_or_else(|| {
                        StoreError::validation(format!("invalid hex color \"{s}\""))
                    })?;
                    ch[i] = (d << 4) | d;
                }
                Self::new(ch[0], ch[1], ch[2])
            }
            _ => {
                return Err(StoreError::validation(
                    "hex color must be #RRGGBB or #RGB (case-insensitive)",
                ));
            }
        };
        Ok(parsed)
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent pixel.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Premultiply a straight-alpha color.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Channel array in RGBA order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Rgb8> for Rgba8Premul {
    fn from(c: Rgb8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: 255,
        }
    }
}

/// Currencies the storefront prices in.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Vietnamese dong (no minor unit).
    #[default]
    Vnd,
    /// US dollar (cents).
    Usd,
}

impl Currency {
    /// Number of decimal digits in one major unit.
    pub fn minor_digits(self) -> u32 {
        match self {
            Self::Vnd => 0,
            Self::Usd => 2,
        }
    }
}

/// Currency-tagged decimal price stored in minor units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Price {
    /// Amount in the currency's minor unit (dong, cents).
    pub amount_minor: u64,
    /// Currency tag.
    pub currency: Currency,
}

impl Price {
    /// Price in dong.
    pub const fn vnd(amount: u64) -> Self {
        Self {
            amount_minor: amount,
            currency: Currency::Vnd,
        }
    }

    /// Price in US cents.
    pub const fn usd_cents(cents: u64) -> Self {
        Self {
            amount_minor: cents,
            currency: Currency::Usd,
        }
    }

    /// Zero in `currency`.
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount_minor: 0,
            currency,
        }
    }

    /// Multiply by a quantity, failing on overflow.
    pub fn times(self, quantity: u32) -> StoreResult<Self> {
        let amount_minor = self
            .amount_minor
            .checked_mul(u64::from(quantity))
            .ok_or_else(|| StoreError::validation("price overflow"))?;
        Ok(Self {
            amount_minor,
            ..self
        })
    }

    /// Add two prices of the same currency.
    pub fn plus(self, other: Self) -> StoreResult<Self> {
        if self.currency != other.currency {
            return Err(StoreError::validation(format!(
                "cannot add {:?} to {:?}",
                other.currency, self.currency
            )));
        }
        let amount_minor = self
            .amount_minor
            .checked_add(other.amount_minor)
            .ok_or_else(|| StoreError::validation("price overflow"))?;
        Ok(Self {
            amount_minor,
            ..self
        })
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.currency {
            Currency::Vnd => write!(f, "{} đ", group_thousands(self.amount_minor, '.')),
            Currency::Usd => {
                let scale = 10u64.pow(self.currency.minor_digits());
                write!(
                    f,
                    "${}.{:02}",
                    group_thousands(self.amount_minor / scale, ','),
                    self.amount_minor % scale
                )
            }
        }
    }
}

fn group_thousands(n: u64, sep: char) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
