// The off-screen pixel buffer: the only surface the renderer draws into.
// Layout: RGBA bytes, row-major, row 0 is the *bottom* of the screen.

use crate::error::Error;
use crate::types::{FrameBuffer, Rgb, pack_rgb};
use image::RgbaImage;

/// Visual: never shown directly; `blit_to` copies it into the window surface.
pub struct PixelBuffer {
    image: RgbaImage, // width * height * 4 bytes, R G B + one unused byte
}

impl PixelBuffer {
    /// Allocate a zero-filled buffer of `width * height * 4` bytes.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        Ok(Self { image: allocate(width, height)? })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.image.height() as usize
    }

    /// Raw RGBA bytes, `width * height * 4` long.
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Reallocate for a new size. Nothing survives a resize; callers clear before drawing.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), Error> {
        self.image = allocate(width, height)?;
        Ok(())
    }

    /// Byte offset of pixel (x,y), or None when it falls outside the buffer.
    #[inline]
    pub fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(y * self.width() * 4 + x * 4)
    }

    /// Write three channels at (x,y). Off-buffer writes are discarded; returns whether it wrote.
    #[inline]
    pub fn write_pixel(&mut self, x: i32, y: i32, rgb: Rgb) -> bool {
        match self.offset(x, y) {
            Some(at) => {
                let bytes: &mut [u8] = &mut self.image;
                bytes[at..at + 3].copy_from_slice(&rgb.0);
                true
            }
            None => false,
        }
    }

    /// First three channels of pixel (x,y).
    pub fn read_pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        let at = self.offset(x, y)?;
        let px = &self.as_bytes()[at..at + 3];
        Some(image::Rgb([px[0], px[1], px[2]]))
    }

    /// Set every pixel's colour channels to `rgb`. The fourth byte is left as is.
    /// Visual: the whole frame becomes one flat colour.
    pub fn clear(&mut self, rgb: Rgb) {
        for px in self.image.chunks_exact_mut(4) {
            px[..3].copy_from_slice(&rgb.0);
        }
    }

    /// Paint a `w x h` block with its lower-left corner at (x,y), clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, rgb: Rgb) {
        for i in 0..w {
            for j in 0..h {
                self.write_pixel(x + i, y + j, rgb);
            }
        }
    }

    /// Pack into the window surface, flipping rows so row 0 lands at the bottom.
    pub fn blit_to(&self, surface: &mut FrameBuffer) {
        if surface.width != self.width() || surface.height != self.height() {
            surface.resize(self.width(), self.height());
        }
        let row_bytes = self.width() * 4;
        if row_bytes == 0 {
            return;
        }
        let rows = self.image.chunks_exact(row_bytes).rev();
        for (dst, src) in surface.pixels.chunks_exact_mut(self.width()).zip(rows) {
            for (out, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
                *out = pack_rgb(px[0], px[1], px[2]);
            }
        }
    }
}

/// Zero-filled store for a `width x height` image. Overflow or OOM is an error, not a panic.
fn allocate(width: usize, height: usize) -> Result<RgbaImage, Error> {
    let too_big = || Error::Allocation { width, height };
    let len = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(too_big)?;
    let w = u32::try_from(width).map_err(|_| too_big())?;
    let h = u32::try_from(height).map_err(|_| too_big())?;

    let mut store: Vec<u8> = Vec::new();
    store.try_reserve_exact(len).map_err(|_| too_big())?;
    store.resize(len, 0);
    RgbaImage::from_raw(w, h, store).ok_or_else(too_big)
}
