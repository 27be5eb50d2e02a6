// Core types shared by the buffer, the renderers and the window.

/// Three colour channels, as written into the pixel buffer.
pub type Rgb = image::Rgb<u8>;

pub const BLACK: Rgb = image::Rgb([0, 0, 0]);
pub const RED: Rgb = image::Rgb([255, 0, 0]);
pub const GREEN: Rgb = image::Rgb([0, 255, 0]);

/// The presentation surface handed to the window every frame.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb, top row first
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Match the surface to a new window size. Old contents are dropped.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, 0);
    }
}

#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Position or velocity of the moving body. `z` is carried but never integrated.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}
