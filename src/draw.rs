// Window utilities for the demo viewer.
// 1) A window that shows the frame before/after censoring.
// 2) Packing of RGBA bytes into the u32 pixels minifb wants.

use crate::error::Error;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the frame.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push an already-packed pixel buffer to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, pixels: &[u32], width: usize, height: usize) -> Result<(), Error> {
        self.window
            .update_with_buffer(pixels, width, height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    // we flip a boolean in main to switch the displayed buffer.
    pub fn space_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::Space, KeyRepeat::No)
    }
}

/// Pack RGBA bytes (4 per pixel, row-major) into 0x00RRGGBB u32s for minifb.
/// The 4th byte is dropped for display only; the frame itself keeps it.
pub fn pack_rgba_for_display(frame: &[u8]) -> Vec<u32> {
    frame
        .chunks_exact(4)
        .map(|px| (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::pack_rgba_for_display;

    #[test]
    fn packs_rgb_and_drops_the_fourth_byte() {
        let frame = [0x12, 0x34, 0x56, 0xFF, 0, 0, 0, 0x80];
        assert_eq!(pack_rgba_for_display(&frame), vec![0x0012_3456, 0]);
    }
}
