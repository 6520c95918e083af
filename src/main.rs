// What you SEE:
// • The input picture (PNG/JPEG path as first argument), or a synthetic
//   gradient when no path is given, with a handful of sprite boxes
//   blacked out.
// • SPACE toggles between the censored and the original frame. ESC quits.
// • The censored frame is also written to censored.png for offline checks.

use sprite_censor::censor;
use sprite_censor::draw::{Drawer, pack_rgba_for_display};
use sprite_censor::error::Error;
use sprite_censor::types::{Map, Sprite};

fn main() -> Result<(), Error> {
    /* --- Frame acquisition ---
       Visual: this is the base image the boxes get punched into. */
    let path = std::env::args().nth(1);
    let (width, height, mut frame) = match &path {
        Some(p) => load_rgba(p)?,
        None => synthetic_frame(320, 240),
    };

    /* --- The sprite list ---
       A host system (level loader, sprite tracker) would hand us these; the
       demo scatters a few boxes, including ones that poke past the edges so
       the inherited wraparound and bottom-row behavior are visible. */
    let map = Map {
        width,
        height,
        sprites: demo_sprites(width, height),
    };

    /* --- Censor ---
       Keep the original around for the SPACE toggle, then mutate in place. */
    let original = frame.clone();
    censor::apply(&map, &mut frame);

    image::save_buffer(
        "censored.png",
        &frame,
        width as u32,
        height as u32,
        image::ExtendedColorType::Rgba8,
    )
    .map_err(|e| Error::ImageSave(e.to_string()))?;
    println!(
        "Censored {} sprite box(es) in a {width}x{height} frame; wrote censored.png",
        map.sprites.len()
    );

    /* --- Window loop ---
       Visual: censored frame by default; SPACE flips to the original. */
    let mut drawer = Drawer::new("Sprite Censor — SPACE: toggle, ESC: quit", width, height)?;
    let censored_px = pack_rgba_for_display(&frame);
    let original_px = pack_rgba_for_display(&original);
    let mut show_original = false;

    while drawer.is_open() && !drawer.esc_pressed() {
        if drawer.space_pressed_once() {
            show_original = !show_original;
        }
        let px = if show_original { &original_px } else { &censored_px };
        drawer.present(px, width, height)?;
    }

    Ok(())
}

/// Decode a picture from disk into a flat RGBA byte buffer.
fn load_rgba(path: &str) -> Result<(usize, usize, Vec<u8>), Error> {
    let img = image::open(path)
        .map_err(|e| Error::ImageLoad(format!("{path}: {e}")))?
        .to_rgba8();
    let (w, h) = img.dimensions();
    Ok((w as usize, h as usize, img.into_raw()))
}

/// Software test pattern: a diagonal color wash, fully opaque, so the black
/// boxes are obvious against it.
fn synthetic_frame(width: usize, height: usize) -> (usize, usize, Vec<u8>) {
    let mut frame = vec![0u8; width * height * censor::BYTES_PER_PIXEL];
    for y in 0..height {
        for x in 0..width {
            let i = (y * width + x) * 4;
            frame[i] = (x * 255 / width.max(1)) as u8; // red ramps left→right
            frame[i + 1] = (y * 255 / height.max(1)) as u8; // green ramps top→bottom
            frame[i + 2] = 160; // steady blue base
            frame[i + 3] = 255; // opaque
        }
    }
    (width, height, frame)
}

/// A few boxes sized relative to the frame. Two sit fully inside; one pokes
/// past the right edge (wraps in the flat buffer); one rests on the bottom
/// edge (its last row stays uncensored).
fn demo_sprites(width: usize, height: usize) -> Vec<Sprite> {
    let (w, h) = (width as i32, height as i32);
    vec![
        Sprite { x: w / 8, y: h / 8, width: 48, height: 32 },
        Sprite { x: w / 2, y: h / 3, width: 64, height: 64 },
        Sprite { x: w - 20, y: 2 * h / 3, width: 40, height: 24 },
        Sprite { x: w / 4, y: h - 16, width: 56, height: 16 },
    ]
}
