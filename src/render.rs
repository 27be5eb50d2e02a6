// Turning the simulation into a frame.
// Two strategies exist and the frame loop runs whichever the config enables:
//   PixelPath  - always on: draws into the pixel buffer and copies it to the surface.
//   VectorPath - diagnostic view: wipes the surface white and draws one quad on it,
//                never reading or writing the pixel buffer.
// Visual: with the diagnostic flag you only ever see the white + blue quad view;
// the pixel-buffer picture is replaced, never blended underneath.

use crate::buffer::PixelBuffer;
use crate::draw::fill_quad;
use crate::physics::Body;
use crate::types::{BLACK, FrameBuffer, GREEN, RED, pack_rgb};

/// Side of both squares drawn by the pixel path.
pub const SQUARE: i32 = 20;
/// Half-width of the overlay quad.
pub const QUAD_HALF: f32 = 40.0;
/// Background the vector path clears to before drawing its quad.
pub const OVERLAY_BACKGROUND: u32 = 0x00_FF_FF_FF;

/// Everything a strategy may touch while drawing one frame.
pub struct FrameContext<'a> {
    pub buffer: &'a mut PixelBuffer,
    pub surface: &'a mut FrameBuffer,
}

pub trait RenderStrategy {
    /// Shown in the startup log so the active paths are never a surprise.
    fn name(&self) -> &'static str;
    /// Draw one frame for `body`. Runs after physics, before present.
    fn draw(&mut self, frame: &mut FrameContext<'_>, body: &Body);
}

pub struct PixelPath;

impl RenderStrategy for PixelPath {
    fn name(&self) -> &'static str {
        "pixel buffer"
    }

    /// Visual: black window, red square bottom-left, green square on the body.
    fn draw(&mut self, frame: &mut FrameContext<'_>, body: &Body) {
        draw_scene(frame.buffer, body);
        frame.buffer.blit_to(frame.surface);
    }
}

/// Clear, then the fixed red square at the origin, then the body's square on top.
pub fn draw_scene(buffer: &mut PixelBuffer, body: &Body) {
    buffer.clear(BLACK);
    buffer.fill_rect(0, 0, SQUARE, SQUARE, RED);
    // 400 single-pixel writes; anything off the buffer is dropped by write_pixel
    let half = SQUARE / 2;
    for i in -half..half {
        for j in -half..half {
            let x = (body.pos.x + i as f32) as i32;
            let y = (body.pos.y + j as f32) as i32;
            buffer.write_pixel(x, y, GREEN);
        }
    }
}

pub struct VectorPath {
    color: u32,
}

impl Default for VectorPath {
    fn default() -> Self {
        Self { color: pack_rgb(30, 60, 90) }
    }
}

impl RenderStrategy for VectorPath {
    fn name(&self) -> &'static str {
        "vector overlay"
    }

    /// Visual: a white window with one dark blue 80x80 quad following the body.
    fn draw(&mut self, frame: &mut FrameContext<'_>, body: &Body) {
        frame.surface.pixels.fill(OVERLAY_BACKGROUND);
        fill_quad(frame.surface, body.pos.x, body.pos.y, QUAD_HALF, self.color);
    }
}

/// The strategies to run each frame, in order.
pub fn strategies(vector_overlay: bool) -> Vec<Box<dyn RenderStrategy>> {
    let mut out: Vec<Box<dyn RenderStrategy>> = vec![Box::new(PixelPath)];
    if vector_overlay {
        out.push(Box::new(VectorPath::default()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec3;

    fn body_at(x: f32, y: f32) -> Body {
        Body { pos: Vec3::new(x, y, 0.0), vel: Vec3::default() }
    }

    #[test]
    fn scene_has_both_squares_on_black() {
        let mut buf = PixelBuffer::new(100, 100).unwrap();
        draw_scene(&mut buf, &body_at(50.0, 50.0));
        assert_eq!(buf.read_pixel(0, 0), Some(RED));
        assert_eq!(buf.read_pixel(19, 19), Some(RED));
        assert_eq!(buf.read_pixel(20, 20), Some(BLACK));
        assert_eq!(buf.read_pixel(40, 40), Some(GREEN));
        assert_eq!(buf.read_pixel(59, 59), Some(GREEN));
        assert_eq!(buf.read_pixel(60, 60), Some(BLACK));
        assert_eq!(buf.read_pixel(39, 50), Some(BLACK));
    }

    #[test]
    fn moving_square_wins_the_overlap() {
        let mut buf = PixelBuffer::new(64, 64).unwrap();
        draw_scene(&mut buf, &body_at(10.0, 10.0));
        assert_eq!(buf.read_pixel(5, 5), Some(GREEN));
        assert_eq!(buf.read_pixel(0, 0), Some(GREEN));
    }

    #[test]
    fn square_partly_off_buffer_is_clipped() {
        let mut buf = PixelBuffer::new(64, 64).unwrap();
        draw_scene(&mut buf, &body_at(63.0, 200.0));
        assert_eq!(buf.as_bytes().len(), 64 * 64 * 4);
        assert_eq!(buf.read_pixel(63, 63), Some(BLACK));
        draw_scene(&mut buf, &body_at(63.0, 63.0));
        assert_eq!(buf.read_pixel(63, 63), Some(GREEN));
    }

    #[test]
    fn overlay_leaves_pixel_buffer_alone() {
        let mut buf = PixelBuffer::new(200, 200).unwrap();
        let mut surface = FrameBuffer::new(200, 200);
        let body = body_at(100.0, 100.0);
        let mut passes = strategies(true);
        let names: Vec<&str> = passes.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["pixel buffer", "vector overlay"]);

        let mut frame = FrameContext { buffer: &mut buf, surface: &mut surface };
        passes[0].draw(&mut frame, &body);
        let before = frame.buffer.as_bytes().to_vec();
        passes[1].draw(&mut frame, &body);
        assert_eq!(frame.buffer.as_bytes(), &before[..]);
        // centre of the surface now shows the overlay colour
        assert_eq!(surface.pixels[100 * 200 + 100], pack_rgb(30, 60, 90));
    }

    #[test]
    fn vector_view_hides_the_pixel_path() {
        let mut buf = PixelBuffer::new(640, 480).unwrap();
        let mut surface = FrameBuffer::new(640, 480);
        let body = Body::default();
        let mut frame = FrameContext { buffer: &mut buf, surface: &mut surface };
        for pass in strategies(true).iter_mut() {
            pass.draw(&mut frame, &body);
        }
        // red corner square and black background are both gone
        assert_eq!(surface.pixels[479 * 640], OVERLAY_BACKGROUND);
        assert_eq!(surface.pixels[0], OVERLAY_BACKGROUND);
        assert_eq!(surface.pixels[640 * 480 - 1], OVERLAY_BACKGROUND);
        let blue = pack_rgb(30, 60, 90);
        let quad = surface.pixels.iter().filter(|&&p| p == blue).count();
        // body at (20, 200): quad spans x -20..60 (clipped to 0..60) and y 160..240
        assert_eq!(quad, 60 * 80);
        assert!(surface.pixels.iter().all(|&p| p == OVERLAY_BACKGROUND || p == blue));
    }

    #[test]
    fn overlay_is_off_by_default() {
        assert_eq!(strategies(false).len(), 1);
    }
}
