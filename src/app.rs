// The frame loop: events -> resize -> physics -> render -> present -> frame rate.
// Everything it touches is owned here and only touched from `run_frame`.

use crate::buffer::PixelBuffer;
use crate::config::Config;
use crate::error::Error;
use crate::frame_rate::FrameRate;
use crate::physics::{self, Body};
use crate::render::{self, FrameContext, RenderStrategy};
use crate::ticks::TickSource;
use crate::types::FrameBuffer;
use crate::window::{Backend, Button, Key, TITLE, WindowEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running, // keep drawing frames
    Terminating, // escape or window closed: this frame is the last one
}

/// Last known pointer position and which buttons are held. Nothing reacts to it yet.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct InputState {
    pub pointer: (f32, f32),
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl InputState {
    fn button_mut(&mut self, button: Button) -> &mut bool {
        match button {
            Button::Left => &mut self.left,
            Button::Middle => &mut self.middle,
            Button::Right => &mut self.right,
        }
    }
}

/// Owns every piece of per-run state; nothing in the program is global.
pub struct App<B: Backend, C: TickSource> {
    backend: B, // the window we present to
    clock: C, // millisecond ticks for the frame rate
    buffer: PixelBuffer, // what the pixel path draws into
    surface: FrameBuffer, // what the window actually shows
    body: Body, // the bouncing square
    frame_rate: FrameRate, // 32-frame fps sampler
    passes: Vec<Box<dyn RenderStrategy>>, // enabled render paths, in order
    input: InputState,
    events: Vec<WindowEvent>, // reused every frame
    state: LoopState,
    frames: u64,
}

impl<B: Backend, C: TickSource> App<B, C> {
    /// Set up the loop for an already opened window.
    /// The buffer starts at whatever size the window really has.
    pub fn new(backend: B, config: &Config, clock: C) -> Result<Self, Error> {
        let (width, height) = backend.size();
        let buffer = PixelBuffer::new(width, height)?;
        let passes = render::strategies(config.vector_overlay);
        let names: Vec<&str> = passes.iter().map(|p| p.name()).collect();
        log::info!("rendering {width}x{height} with {}", names.join(" + "));

        Ok(Self {
            backend,
            frame_rate: FrameRate::new(&clock),
            clock,
            buffer,
            surface: FrameBuffer::new(width, height),
            body: Body::default(),
            passes,
            input: InputState::default(),
            events: Vec::new(),
            state: LoopState::Running,
            frames: 0,
        })
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run until escape or the window closes. Returns the number of frames shown.
    pub fn run(mut self) -> Result<u64, Error> {
        while self.run_frame()? == LoopState::Running {}
        log::info!("stopping after {} frames", self.frames);
        Ok(self.frames)
    }

    /// One full iteration. The frame is still drawn on the iteration that asks to stop.
    pub fn run_frame(&mut self) -> Result<LoopState, Error> {
        /* 1) Drain input: resizes reallocate the buffer, escape asks to stop. */
        let mut events = std::mem::take(&mut self.events);
        events.clear();
        self.backend.poll_events(&mut events);
        for event in events.iter() {
            self.handle_event(event)?;
        }
        self.events = events;
        if !self.backend.is_open() {
            self.state = LoopState::Terminating;
        }

        /* 2) One physics step inside the current buffer bounds.
           Visual: the green square moves 1 frame's worth. */
        let (width, height) = (self.buffer.width() as f32, self.buffer.height() as f32);
        physics::step(&mut self.body, width, height);

        /* 3) Render every enabled path, then present.
           Visual: this is when the on-screen image updates. */
        let mut frame = FrameContext { buffer: &mut self.buffer, surface: &mut self.surface };
        for pass in self.passes.iter_mut() {
            pass.draw(&mut frame, &self.body);
        }
        // only now is the frame complete
        self.backend.present(&self.surface)?;
        self.frames += 1;

        /* 4) Frame rate, printed to the terminal every 32 frames. */
        if let Some(fps) = self.frame_rate.sample(&self.clock) {
            println!("frame rate: {fps:.6}");
        }
        Ok(self.state)
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Result<(), Error> {
        match *event {
            WindowEvent::Resize { width, height } => {
                if (width, height) != (self.buffer.width(), self.buffer.height()) {
                    log::info!("window resized to {width}x{height}");
                    self.buffer.resize(width, height)?;
                    self.surface.resize(width, height);
                    self.backend.set_title(TITLE);
                }
            }
            WindowEvent::PointerMove { x, y } => {
                log::trace!("pointer at ({x}, {y})");
                self.input.pointer = (x, y);
            }
            WindowEvent::ButtonPress { button, x, y } => {
                log::debug!("{button:?} button down at ({x}, {y})");
                *self.input.button_mut(button) = true;
            }
            WindowEvent::ButtonRelease { button, .. } => {
                *self.input.button_mut(button) = false;
            }
            WindowEvent::KeyPress(Key::Escape) => {
                log::info!("escape pressed");
                self.state = LoopState::Terminating;
            }
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.state = LoopState::Terminating;
            }
            WindowEvent::KeyPress(_) | WindowEvent::KeyRelease(_) => {}
        }
        Ok(())
    }
}
