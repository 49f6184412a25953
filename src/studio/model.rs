use std::{fmt, str::FromStr, sync::Arc};

use crate::foundation::{
    core::{Point, Rgb8},
    error::StoreError,
};

/// Garment colors offered by the logo studio.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GarmentColor {
    /// Trắng.
    #[default]
    White,
    /// Đen.
    Black,
    /// Be.
    Beige,
    /// Xám.
    Gray,
    /// Navy.
    Navy,
}

impl GarmentColor {
    /// Every garment color in picker order.
    pub const ALL: [GarmentColor; 5] = [
        GarmentColor::White,
        GarmentColor::Black,
        GarmentColor::Beige,
        GarmentColor::Gray,
        GarmentColor::Navy,
    ];

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Beige => "beige",
            Self::Gray => "gray",
            Self::Navy => "navy",
        }
    }

    /// Picker display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "Trắng",
            Self::Black => "Đen",
            Self::Beige => "Be",
            Self::Gray => "Xám",
            Self::Navy => "Navy",
        }
    }

    /// Fabric fill color.
    pub fn hex(self) -> Rgb8 {
        match self {
            Self::White => Rgb8::new(0xff, 0xff, 0xff),
            Self::Black => Rgb8::new(0x11, 0x11, 0x11),
            Self::Beige => Rgb8::new(0xd7, 0xc4, 0xa8),
            Self::Gray => Rgb8::new(0x9a, 0x9a, 0x9a),
            Self::Navy => Rgb8::new(0x1e, 0x33, 0x5a),
        }
    }

    /// Light fabrics get an outline and no logo drop shadow.
    pub fn is_light(self) -> bool {
        matches!(self, Self::White | Self::Beige)
    }
}

impl FromStr for GarmentColor {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| StoreError::validation(format!("unknown garment color '{s}'")))
    }
}

impl fmt::Display for GarmentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Print positions on the garment mockup.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Ngực trái.
    #[default]
    LeftChest,
    /// Giữa ngực.
    Center,
    /// Trước ngực lớn.
    FullFront,
}

impl Placement {
    /// Every placement in picker order.
    pub const ALL: [Placement; 3] = [
        Placement::LeftChest,
        Placement::Center,
        Placement::FullFront,
    ];

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::LeftChest => "left-chest",
            Self::Center => "center",
            Self::FullFront => "full-front",
        }
    }

    /// Picker display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::LeftChest => "Ngực trái",
            Self::Center => "Giữa ngực",
            Self::FullFront => "Trước ngực lớn",
        }
    }

    /// Logo center as fractions of the garment box (x from left, y from top).
    pub fn anchor(self) -> Point {
        match self {
            Self::LeftChest => Point::new(0.25, 0.30),
            Self::Center => Point::new(0.50, 0.35),
            Self::FullFront => Point::new(0.50, 0.45),
        }
    }

    /// Logo width budget as a fraction of the garment width.
    pub fn base_size_fraction(self) -> f64 {
        match self {
            Self::LeftChest => 0.20,
            Self::Center => 0.35,
            Self::FullFront => 0.50,
        }
    }
}

impl FromStr for Placement {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| StoreError::validation(format!("unknown placement '{s}'")))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Logo size slider value, always within [`LogoScale::MIN`]..=[`LogoScale::MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct LogoScale(u16);

impl LogoScale {
    /// Smallest slider value (percent).
    pub const MIN: u16 = 50;
    /// Largest slider value (percent).
    pub const MAX: u16 = 150;

    /// Clamp any integer input onto the slider range.
    pub fn clamped(percent: i64) -> Self {
        Self(clamp_scale(percent))
    }

    /// Slider value in percent.
    pub fn percent(self) -> u16 {
        self.0
    }

    /// Slider value as a multiplier (`percent / 100`).
    pub fn factor(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for LogoScale {
    fn default() -> Self {
        Self(100)
    }
}

impl<'de> serde::Deserialize<'de> for LogoScale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Self::clamped(i64::deserialize(deserializer)?))
    }
}

/// Clamp a scale percentage to `[50, 150]`.
pub fn clamp_scale(percent: i64) -> u16 {
    percent.clamp(i64::from(LogoScale::MIN), i64::from(LogoScale::MAX)) as u16
}

/// Decoded logo bitmap in premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 pixels.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl LogoImage {
    /// Height over width; 1.0 for degenerate images.
    pub fn aspect(&self) -> f64 {
        if self.width == 0 || self.height == 0 {
            return 1.0;
        }
        f64::from(self.height) / f64::from(self.width)
    }
}

/// State of one visit to the upload page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadSession {
    /// Most recently ingested logo.
    pub logo: Option<LogoImage>,
    /// Chosen garment color.
    pub garment: GarmentColor,
    /// Chosen print position.
    pub placement: Placement,
    /// Chosen logo scale.
    pub scale: LogoScale,
}

impl UploadSession {
    /// Fresh session with the page defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Slider input; clamped before it is stored.
    pub fn set_scale(&mut self, percent: i64) {
        self.scale = LogoScale::clamped(percent);
    }

    /// The order button is enabled only once a logo is present.
    pub fn can_order(&self) -> bool {
        self.logo.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/studio/model.rs"]
mod tests;
