// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong. The filter itself never
// fails; these only come out of the demo viewer's window and file I/O.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Updating the window buffer failed
    ImageLoad(String),    // Opening/decoding the input picture failed
    ImageSave(String),    // Writing the censored PNG failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::ImageLoad(s) => write!(f, "Image load error: {s}"),
            Error::ImageSave(s) => write!(f, "Image save error: {s}"),
        }
    }
}
