use std::hash::{DefaultHasher, Hash, Hasher};

/// Density ramp used to map intensity values to terminal characters,
/// darkest first.
const ASCII_CHARS: [char; 11] = ['@', '#', 'S', '%', '?', '*', '+', ';', ':', ',', '.'];

/// Renders a deterministic identicon-style block of ASCII art for a seed
/// string.
///
/// The same seed always produces the same art, so a profile's avatar panel
/// is stable across invocations. The pattern is mirrored around its vertical
/// axis, identicon-fashion, and every cell's intensity is mapped through the
/// same character ramp an image-luminance conversion would use.
///
/// # Parameters
///
/// * `seed` - Identity string the pattern is derived from (e.g. a login).
/// * `width` - Number of characters per output row.
/// * `height` - Number of output rows.
///
/// # Returns
///
/// A `width x height` block of ramp characters, rows joined with `\n`.
pub fn render_identicon(seed: &str, width: usize, height: usize) -> String {
    let mut rows = Vec::with_capacity(height);
    let half = (width + 1) / 2;

    for row in 0..height {
        let mut cells = Vec::with_capacity(width);
        for col in 0..half {
            cells.push(intensity_char(cell_intensity(seed, row, col)));
        }
        // mirror the left half onto the right, skipping the center column
        // when the width is odd
        for col in (0..width - half).rev() {
            cells.push(intensity_char(cell_intensity(seed, row, col)));
        }
        rows.push(cells.into_iter().collect::<String>());
    }

    rows.join("\n")
}

/// Derives a stable 0-255 intensity for one cell of the pattern.
fn cell_intensity(seed: &str, row: usize, col: usize) -> u8 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    row.hash(&mut hasher);
    col.hash(&mut hasher);
    (hasher.finish() & 0xff) as u8
}

/// Maps a grayscale intensity to a ramp character (one step per 25 units).
fn intensity_char(value: u8) -> char {
    let index = (value as usize / 25).min(ASCII_CHARS.len() - 1);
    ASCII_CHARS[index]
}
