// The censor filter: blacks out every sprite box in an RGBA frame.
// Visual outcome: each sprite region turns solid black; the 4th channel is
// never written, so a transparent frame stays transparent where it was.

use crate::types::Map;

/// Bytes per pixel in the frame (RGBA or any 4-channel layout).
pub const BYTES_PER_PIXEL: usize = 4;

/// Zero the first three channels of every pixel covered by a sprite box.
///
/// `frame` is row-major, 4 bytes per pixel; the caller guarantees its length
/// is at least `map.width * map.height * 4`. Mutated in place — nothing is
/// read back, resized or returned. Overlapping boxes just re-zero the same
/// bytes, so sprite order never changes the result and applying the filter
/// twice equals applying it once.
///
/// Two inherited quirks are load-bearing and kept bit-for-bit:
/// - rows stop at `map.height - 1`, so a box touching the bottom edge keeps
///   its last row uncensored;
/// - columns are not clamped, so a box poking past a side edge wraps into
///   the neighboring rows of the flat buffer.
/// Any offset that would land outside the buffer is skipped, not written.
pub fn apply(map: &Map, frame: &mut [u8]) {
    let w = map.width as i64;
    let h = map.height as i64;
    for s in &map.sprites {
        let y_end = (h - 1).min(i64::from(s.y) + i64::from(s.height));
        for sy in i64::from(s.y)..y_end {
            for sx in i64::from(s.x)..i64::from(s.x) + i64::from(s.width) {
                // Signed flat-buffer index: off-row columns land in
                // neighboring rows; negative or past-the-end offsets do not
                // exist in the buffer and are skipped.
                let start = (sy * w + sx) * BYTES_PER_PIXEL as i64;
                if start < 0 {
                    continue;
                }
                let start = start as usize;
                if let Some(rgb) = frame.get_mut(start..start + 3) {
                    rgb.fill(0);
                }
            }
        }
    }
}
