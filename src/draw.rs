// Drawing straight onto the window surface (the overlay path).
// The surface is top-row-first, but callers pass y-up coordinates like the
// pixel buffer uses, so both paths agree on where the body is.

use crate::types::FrameBuffer;

/// Put a pixel on the surface if (x,y) is inside bounds. `y` counts up from the bottom row.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = (fb.height - 1 - y) * fb.width + x;
    fb.pixels[idx] = color;
}

/// Pixel columns (or rows) covered by `[c - half, c + half)`.
/// Floors both ends so a square keeps its width when it crosses below zero.
#[inline]
fn span(c: f32, half: f32) -> (i32, i32) {
    ((c - half).floor() as i32, (c + half).floor() as i32)
}

/// Fill an axis-aligned square of half-width `half` centred on (cx,cy).
/// Visual: a solid block; whatever hangs off the surface edge is cut away.
pub fn fill_quad(fb: &mut FrameBuffer, cx: f32, cy: f32, half: f32, color: u32) {
    let (x0, x1) = span(cx, half);
    let (y0, y1) = span(cy, half);
    for y in y0..y1 {
        for x in x0..x1 {
            put_pixel(fb, x, y, color);
        }
    }
}
