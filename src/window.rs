// The window: the one piece of the program that talks to the display.
// minifb only offers polling, so each frame we compare what the window reports
// with what we saw last frame and turn the differences into events.

use crate::config::{Config, WindowMode};
use crate::error::Error;
use crate::types::FrameBuffer;
use display_info::DisplayInfo;
use minifb::{KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub use minifb::Key;

pub const TITLE: &str = "Draw only to frame buffer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Middle,
    Right,
}

const BUTTONS: [(Button, MouseButton); 3] = [
    (Button::Left, MouseButton::Left),
    (Button::Middle, MouseButton::Middle),
    (Button::Right, MouseButton::Right),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    Resize { width: usize, height: usize },
    PointerMove { x: f32, y: f32 },
    ButtonPress { button: Button, x: f32, y: f32 },
    ButtonRelease { button: Button, x: f32, y: f32 },
    KeyPress(Key),
    KeyRelease(Key),
    CloseRequested,
}

/// What the frame loop needs from a window.
pub trait Backend {
    fn is_open(&self) -> bool;

    /// Size of the drawable area right now, in pixels.
    fn size(&self) -> (usize, usize);

    /// Append everything that happened since the last call.
    fn poll_events(&mut self, out: &mut Vec<WindowEvent>);

    /// Show a finished frame.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error>;

    fn set_title(&mut self, title: &str);
}

pub struct MinifbWindow {
    window: Window, // the on-screen window you see
    size: (usize, usize),
    pointer: Option<(f32, f32)>,
    held: [bool; 3],
    close_reported: bool,
}

/// Width and height of the primary display, or None if it cannot be asked.
/// minifb has no such query, so this goes straight to the OS.
pub fn primary_display_size() -> Option<(usize, usize)> {
    let displays = match DisplayInfo::all() {
        Ok(displays) => displays,
        Err(e) => {
            log::warn!("cannot query displays: {e}");
            return None;
        }
    };
    let display = displays.iter().find(|d| d.is_primary).or_else(|| displays.first())?;
    Some((display.width as usize, display.height as usize))
}

impl MinifbWindow {
    /// Open the window described by `config`.
    /// Visual: fullscreen is a borderless window on top of everything, as big as the display.
    pub fn open(config: &Config) -> Result<Self, Error> {
        let options = match config.mode {
            WindowMode::Fullscreen => WindowOptions {
                borderless: true,
                topmost: true,
                resize: true,
                ..WindowOptions::default()
            },
            WindowMode::Windowed { .. } => {
                WindowOptions { resize: true, ..WindowOptions::default() }
            }
        };
        let display = match config.mode {
            WindowMode::Fullscreen => primary_display_size(),
            WindowMode::Windowed { .. } => None,
        };
        let (width, height) = config.window_size(display);

        let window = Window::new(TITLE, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        log::info!("opened {width}x{height} window ({:?})", config.mode);
        Ok(Self {
            window,
            size: (width, height),
            pointer: None,
            held: [false; 3],
            close_reported: false,
        })
    }
}

impl Backend for MinifbWindow {
    /// Returns false when the user closes the window (so we can stop the loop).
    fn is_open(&self) -> bool {
        self.window.is_open()
    }

    fn size(&self) -> (usize, usize) {
        self.size
    }

    fn poll_events(&mut self, out: &mut Vec<WindowEvent>) {
        if !self.window.is_open() {
            if !self.close_reported {
                self.close_reported = true;
                out.push(WindowEvent::CloseRequested);
            }
            return;
        }

        let size = self.window.get_size();
        if size != self.size && size.0 > 0 && size.1 > 0 {
            self.size = size;
            out.push(WindowEvent::Resize { width: size.0, height: size.1 });
        }

        // Pointer position in window pixels, top-left origin.
        let pointer = self.window.get_mouse_pos(MouseMode::Discard);
        if let Some((x, y)) = pointer {
            if self.pointer != pointer {
                out.push(WindowEvent::PointerMove { x, y });
            }
        }
        self.pointer = pointer;
        let (x, y) = self.pointer.unwrap_or((0.0, 0.0));

        for (slot, (button, mb)) in BUTTONS.iter().enumerate() {
            let down = self.window.get_mouse_down(*mb);
            match (self.held[slot], down) {
                (false, true) => out.push(WindowEvent::ButtonPress { button: *button, x, y }),
                (true, false) => out.push(WindowEvent::ButtonRelease { button: *button, x, y }),
                _ => {}
            }
            self.held[slot] = down;
        }

        let pressed = self.window.get_keys_pressed(KeyRepeat::No);
        out.extend(pressed.into_iter().map(WindowEvent::KeyPress));
        out.extend(self.window.get_keys_released().into_iter().map(WindowEvent::KeyRelease));
    }

    /// Push the pixels for this frame to the screen.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }
}
