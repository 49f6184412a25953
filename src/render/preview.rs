use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::{Canvas, Point, Rect, Rgba8Premul},
        error::{StoreError, StoreResult},
    },
    render::composite::{blit_over, fill_rect_over, stroke_rect_over},
    studio::compose::{LogoLayer, MarkLayer, PlaceholderLayer, RenderDescription},
};

// Mockup proportions, in pixels of the 288x384 reference shirt.
const REF_W: f64 = 288.0;
const REF_H: f64 = 384.0;
const COLLAR: (f64, f64) = (64.0, 16.0);
const SLEEVE_TOP: f64 = 32.0;
const SLEEVE: (f64, f64) = (32.0, 80.0);
const PLACEHOLDER: (f64, f64) = (120.0, 40.0);
const SHADOW_OFFSET: f64 = 2.0;

/// Largest accepted canvas side, in pixels.
pub const MAX_CANVAS_DIM: u32 = 16_384;

/// Output settings for [`render_preview`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PreviewSettings {
    /// Output size.
    pub canvas: Canvas,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 640,
                height: 640,
            },
        }
    }
}

/// Rendered preview in premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 pixels.
    pub data: Vec<u8>,
}

impl PreviewFrame {
    /// Pixel at `(x, y)`; panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Write the frame as a PNG, creating parent directories.
    #[tracing::instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn write_png(&self, path: &Path) -> StoreResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        // The backdrop is opaque, so premultiplied and straight alpha coincide.
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Garment box inside `canvas`: a centered 3:4 rectangle leaving room for sleeves.
pub fn garment_box(canvas: Canvas) -> Rect {
    let cw = f64::from(canvas.width);
    let ch = f64::from(canvas.height);
    let mut h = ch * 0.75;
    let mut w = h * REF_W / REF_H;
    let max_w = cw * 0.75;
    if w > max_w {
        w = max_w;
        h = w * REF_H / REF_W;
    }
    Rect::from_center_size(Point::new(cw / 2.0, ch / 2.0), (w, h))
}

/// Rasterize a composed preview on the CPU.
#[tracing::instrument(skip(desc), fields(garment = %desc.garment.color))]
pub fn render_preview(
    desc: &RenderDescription,
    settings: &PreviewSettings,
) -> StoreResult<PreviewFrame> {
    let Canvas { width, height } = settings.canvas;
    if width == 0 || height == 0 {
        return Err(StoreError::render(
            "preview canvas width/height must be > 0",
        ));
    }
    if width > MAX_CANVAS_DIM || height > MAX_CANVAS_DIM {
        return Err(StoreError::render(format!(
            "preview canvas too large: {width}x{height} (max {MAX_CANVAS_DIM}x{MAX_CANVAS_DIM})"
        )));
    }
    let pixels = (width as usize)
        .checked_mul(height as usize)
        .filter(|n| n.checked_mul(4).is_some())
        .ok_or_else(|| StoreError::render(format!("preview canvas {width}x{height} overflows")))?;

    let backdrop = Rgba8Premul::from(desc.backdrop).to_array();
    let mut data = backdrop.repeat(pixels);

    let body = garment_box(settings.canvas);
    let unit_x = body.width() / REF_W;
    let unit_y = body.height() / REF_H;
    let fill = Rgba8Premul::from(desc.garment.fill).to_array();

    for left in [true, false] {
        let x0 = if left {
            body.x0 - SLEEVE.0 / 2.0 * unit_x
        } else {
            body.x1 - SLEEVE.0 / 2.0 * unit_x
        };
        let sleeve = Rect::new(
            x0,
            body.y0 + SLEEVE_TOP * unit_y,
            x0 + SLEEVE.0 * unit_x,
            body.y0 + (SLEEVE_TOP + SLEEVE.1) * unit_y,
        );
        fill_rect_over(&mut data, width, height, sleeve, fill, 0.9)?;
    }
    fill_rect_over(&mut data, width, height, body, fill, 1.0)?;

    let collar = Rect::from_center_size(
        Point::new(body.center().x, body.y0 + COLLAR.1 * unit_y / 2.0),
        (COLLAR.0 * unit_x, COLLAR.1 * unit_y),
    );
    fill_rect_over(
        &mut data,
        width,
        height,
        collar,
        desc.garment.collar_shade.to_array(),
        1.0,
    )?;

    if let Some(outline) = desc.garment.outline {
        stroke_rect_over(
            &mut data,
            width,
            height,
            body,
            outline.to_array(),
            1.0,
            None,
        )?;
    }

    match &desc.mark {
        MarkLayer::Placeholder(p) => draw_placeholder(&mut data, width, height, body, p)?,
        MarkLayer::Logo(l) => draw_logo(&mut data, width, height, body, l)?,
    }

    Ok(PreviewFrame {
        width,
        height,
        data,
    })
}

fn draw_placeholder(
    data: &mut [u8],
    width: u32,
    height: u32,
    body: Rect,
    p: &PlaceholderLayer,
) -> StoreResult<()> {
    let unit = body.width() / REF_W;
    let center = Point::new(
        body.x0 + p.anchor.x * body.width(),
        body.y0 + p.anchor.y * body.height(),
    );
    let rect = Rect::from_center_size(center, (PLACEHOLDER.0 * unit, PLACEHOLDER.1 * unit));
    let dash = (6.0 * unit).max(1.0);
    stroke_rect_over(
        data,
        width,
        height,
        rect,
        p.border.to_array(),
        (2.0 * unit).max(1.0),
        Some((dash, dash * 0.66)),
    )
}

fn draw_logo(
    data: &mut [u8],
    width: u32,
    height: u32,
    body: Rect,
    layer: &LogoLayer,
) -> StoreResult<()> {
    let target = layer.fit(body);
    let tw = target.width().round().max(1.0) as u32;
    let th = target.height().round().max(1.0) as u32;

    let src = image::RgbaImage::from_raw(
        layer.image.width,
        layer.image.height,
        layer.image.rgba8_premul.as_ref().clone(),
    )
    .ok_or_else(|| StoreError::render("logo buffer does not match its dimensions"))?;
    let scaled = image::imageops::resize(&src, tw, th, image::imageops::FilterType::Triangle);

    let left = target.x0.round() as i64;
    let top = target.y0.round() as i64;

    if layer.drop_shadow {
        let offset = (SHADOW_OFFSET * body.height() / REF_H).round().max(1.0) as i64;
        let shadow: Vec<u8> = scaled
            .as_raw()
            .chunks_exact(4)
            .flat_map(|px| [0, 0, 0, px[3]])
            .collect();
        blit_over(
            data,
            width,
            height,
            &shadow,
            tw,
            th,
            left,
            top + offset,
            0.3,
        )?;
    }

    blit_over(data, width, height, scaled.as_raw(), tw, th, left, top, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;
