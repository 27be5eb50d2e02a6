// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    WindowInit(String),   // No display / no usable window: fatal before the loop starts
    WindowUpdate(String), // Presenting the surface to the window failed
    Allocation { width: usize, height: usize }, // Pixel buffer could not be (re)allocated
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "cannot open window: {s}"),
            Error::WindowUpdate(s) => write!(f, "cannot present frame: {s}"),
            Error::Allocation { width, height } => {
                write!(f, "cannot allocate a {width}x{height} pixel buffer")
            }
        }
    }
}

impl std::error::Error for Error {}
