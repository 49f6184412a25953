use crate::foundation::error::{StoreError, StoreResult};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over for one premultiplied pixel.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Integer pixel span of `[x0, x1) x [y0, y1)` clipped to a `width x height` surface.
pub(crate) fn clip_span(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    width: u32,
    height: u32,
) -> Option<(u32, u32, u32, u32)> {
    let cx0 = x0.round().max(0.0) as i64;
    let cy0 = y0.round().max(0.0) as i64;
    let cx1 = (x1.round() as i64).min(i64::from(width));
    let cy1 = (y1.round() as i64).min(i64::from(height));
    if cx0 >= cx1 || cy0 >= cy1 {
        return None;
    }
    Some((cx0 as u32, cy0 as u32, cx1 as u32, cy1 as u32))
}

/// Composite `color` over every pixel inside the rectangle.
pub fn fill_rect_over(
    dst: &mut [u8],
    width: u32,
    height: u32,
    rect: kurbo::Rect,
    color: PremulRgba8,
    opacity: f32,
) -> StoreResult<()> {
    check_surface(dst, width, height)?;
    let Some((x0, y0, x1, y1)) = clip_span(rect.x0, rect.y0, rect.x1, rect.y1, width, height)
    else {
        return Ok(());
    };
    for y in y0..y1 {
        let row = (y * width) as usize * 4;
        for x in x0..x1 {
            let i = row + x as usize * 4;
            let out = over([dst[i], dst[i + 1], dst[i + 2], dst[i + 3]], color, opacity);
            dst[i..i + 4].copy_from_slice(&out);
        }
    }
    Ok(())
}

/// Draw the rectangle's border, `thickness` pixels wide.
///
/// With `dash = Some((on, off))` the border is broken into dashes measured along
/// each edge.
pub fn stroke_rect_over(
    dst: &mut [u8],
    width: u32,
    height: u32,
    rect: kurbo::Rect,
    color: PremulRgba8,
    thickness: f64,
    dash: Option<(f64, f64)>,
) -> StoreResult<()> {
    let t = thickness.max(1.0);
    let horizontal = [
        kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y0 + t),
        kurbo::Rect::new(rect.x0, rect.y1 - t, rect.x1, rect.y1),
    ];
    let vertical = [
        kurbo::Rect::new(rect.x0, rect.y0 + t, rect.x0 + t, rect.y1 - t),
        kurbo::Rect::new(rect.x1 - t, rect.y0 + t, rect.x1, rect.y1 - t),
    ];

    for edge in horizontal {
        for seg in dashes(edge.x0, edge.x1, dash) {
            let r = kurbo::Rect::new(seg.0, edge.y0, seg.1, edge.y1);
            fill_rect_over(dst, width, height, r, color, 1.0)?;
        }
    }
    for edge in vertical {
        for seg in dashes(edge.y0, edge.y1, dash) {
            let r = kurbo::Rect::new(edge.x0, seg.0, edge.x1, seg.1);
            fill_rect_over(dst, width, height, r, color, 1.0)?;
        }
    }
    Ok(())
}

fn dashes(start: f64, end: f64, dash: Option<(f64, f64)>) -> Vec<(f64, f64)> {
    let Some((on, off)) = dash.filter(|(on, off)| *on > 0.0 && *off >= 0.0) else {
        return vec![(start, end)];
    };
    let mut out = Vec::new();
    let mut pos = start;
    while pos < end {
        out.push((pos, (pos + on).min(end)));
        pos += on + off;
    }
    out
}

/// Composite a premultiplied `src_w x src_h` image with its top-left at `(left, top)`.
#[allow(clippy::too_many_arguments)]
pub fn blit_over(
    dst: &mut [u8],
    width: u32,
    height: u32,
    src: &[u8],
    src_w: u32,
    src_h: u32,
    left: i64,
    top: i64,
    opacity: f32,
) -> StoreResult<()> {
    check_surface(dst, width, height)?;
    check_surface(src, src_w, src_h)?;

    for sy in 0..src_h {
        let dy = top + i64::from(sy);
        if dy < 0 || dy >= i64::from(height) {
            continue;
        }
        for sx in 0..src_w {
            let dx = left + i64::from(sx);
            if dx < 0 || dx >= i64::from(width) {
                continue;
            }
            let si = ((sy * src_w + sx) as usize) * 4;
            let di = ((dy as u32 * width + dx as u32) as usize) * 4;
            let out = over(
                [dst[di], dst[di + 1], dst[di + 2], dst[di + 3]],
                [src[si], src[si + 1], src[si + 2], src[si + 3]],
                opacity,
            );
            dst[di..di + 4].copy_from_slice(&out);
        }
    }
    Ok(())
}

fn check_surface(buf: &[u8], width: u32, height: u32) -> StoreResult<()> {
    if buf.len() != (width as usize) * (height as usize) * 4 {
        return Err(StoreError::render(format!(
            "rgba8 buffer of {} bytes does not match {width}x{height}",
            buf.len()
        )));
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
