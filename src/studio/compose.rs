use crate::{
    foundation::core::{Point, Rect, Rgb8, Rgba8Premul},
    studio::model::{GarmentColor, LogoImage, LogoScale, Placement},
};

/// Pixel height cap on logos, measured against a reference mockup height.
///
/// The cap scales with the rendered garment, so it stays a fraction of the
/// garment height whatever the output resolution.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogoLimits {
    /// Maximum logo height in reference pixels.
    pub max_height_px: u32,
    /// Garment height the cap is expressed against.
    pub reference_garment_height_px: u32,
}

impl Default for LogoLimits {
    fn default() -> Self {
        Self {
            max_height_px: 120,
            reference_garment_height_px: 384,
        }
    }
}

impl LogoLimits {
    /// Height cap as a fraction of the garment height.
    pub fn max_height_fraction(self) -> f64 {
        if self.reference_garment_height_px == 0 {
            return 1.0;
        }
        (f64::from(self.max_height_px) / f64::from(self.reference_garment_height_px)).min(1.0)
    }
}

/// Renderer-agnostic layered description of the studio preview.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderDescription {
    /// Panel color behind the garment.
    pub backdrop: Rgb8,
    /// Flat-colored garment silhouette.
    pub garment: GarmentLayer,
    /// Logo or placeholder drawn over the garment.
    pub mark: MarkLayer,
}

/// Garment body layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GarmentLayer {
    /// Selected garment color.
    pub color: GarmentColor,
    /// Fabric fill.
    pub fill: Rgb8,
    /// Light fabrics get a hairline outline.
    pub outline: Option<Rgba8Premul>,
    /// Tint of the collar strip.
    pub collar_shade: Rgba8Premul,
}

/// What sits on the placement anchor.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkLayer {
    /// Dashed "your logo" box while nothing is uploaded.
    Placeholder(PlaceholderLayer),
    /// The uploaded logo.
    Logo(LogoLayer),
}

/// Placeholder marker centered on the placement anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaceholderLayer {
    /// Center, as fractions of the garment box.
    pub anchor: Point,
    /// Dashed border color.
    pub border: Rgba8Premul,
}

/// Logo layer centered on the placement anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct LogoLayer {
    /// Bitmap to draw.
    pub image: LogoImage,
    /// Center, as fractions of the garment box.
    pub anchor: Point,
    /// Logo width as a fraction of the garment width.
    pub width_fraction: f64,
    /// Logo height cap as a fraction of the garment height.
    pub max_height_fraction: f64,
    /// Dark fabrics get a soft drop shadow under the logo.
    pub drop_shadow: bool,
}

impl LogoLayer {
    /// Pixel rectangle of the logo inside `garment`, aspect ratio preserved.
    pub fn fit(&self, garment: Rect) -> Rect {
        let aspect = self.image.aspect();
        let mut w = self.width_fraction * garment.width();
        let mut h = w * aspect;
        let cap = self.max_height_fraction * garment.height();
        if h > cap {
            h = cap;
            w = h / aspect;
        }
        let cx = garment.x0 + self.anchor.x * garment.width();
        let cy = garment.y0 + self.anchor.y * garment.height();
        Rect::from_center_size(Point::new(cx, cy), (w, h))
    }
}

/// Width fraction actually used: the slider caps the placement's own budget.
pub fn effective_width_fraction(placement: Placement, scale: LogoScale) -> f64 {
    placement.base_size_fraction().min(scale.factor())
}

/// Compose the preview with the default logo height cap.
pub fn compose_preview(
    logo: Option<&LogoImage>,
    garment: GarmentColor,
    placement: Placement,
    scale: LogoScale,
) -> RenderDescription {
    compose_preview_with(logo, garment, placement, scale, LogoLimits::default())
}

/// Compose the preview layers. Pure: identical inputs give identical output.
pub fn compose_preview_with(
    logo: Option<&LogoImage>,
    garment: GarmentColor,
    placement: Placement,
    scale: LogoScale,
    limits: LogoLimits,
) -> RenderDescription {
    let light = garment.is_light();

    let backdrop = if garment == GarmentColor::White {
        Rgb8::new(0xf0, 0xf0, 0xf0)
    } else {
        Rgb8::new(0xff, 0xff, 0xff)
    };

    let garment_layer = GarmentLayer {
        color: garment,
        fill: garment.hex(),
        outline: light.then(|| Rgba8Premul::from_straight_rgba(0, 0, 0, 13)),
        collar_shade: if light {
            Rgba8Premul::from_straight_rgba(0, 0, 0, 13)
        } else {
            Rgba8Premul::from_straight_rgba(255, 255, 255, 26)
        },
    };

    let mark = match logo {
        Some(image) => MarkLayer::Logo(LogoLayer {
            image: image.clone(),
            anchor: placement.anchor(),
            width_fraction: effective_width_fraction(placement, scale),
            max_height_fraction: limits.max_height_fraction(),
            drop_shadow: !light,
        }),
        None => MarkLayer::Placeholder(PlaceholderLayer {
            anchor: placement.anchor(),
            border: if light {
                Rgba8Premul::from_straight_rgba(0, 0, 0, 51)
            } else {
                Rgba8Premul::from_straight_rgba(255, 255, 255, 77)
            },
        }),
    };

    RenderDescription {
        backdrop,
        garment: garment_layer,
        mark,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/studio/compose.rs"]
mod tests;
