// Core types shared by the filter and the demo viewer.

/// Rectangular region (position + size) to be censored.
/// `x`/`y` may be negative or past the map edge; the filter does not clamp them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Sprite {
    pub x: i32,      // left edge in pixels (signed; off-map values allowed)
    pub y: i32,      // top edge in pixels (signed; off-map values allowed)
    pub width: u32,  // box width in pixels (0 = nothing to censor)
    pub height: u32, // box height in pixels (0 = nothing to censor)
}

/// Scene description: pixel dimensions plus the sprite boxes found in it.
/// Built elsewhere (level loader, sprite tracker, ...); read-only here.
#[derive(Clone, Debug, Default)]
pub struct Map {
    pub width: usize,         // frame width in pixels
    pub height: usize,        // frame height in pixels
    pub sprites: Vec<Sprite>, // ordered; order does not affect the output
}
