use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use thiserror::Error;

use super::Canvas;
use crate::config::FontPaths;
use crate::geometry::{Color, Point};

const BITMAP_GLYPH_SIZE: i32 = 8;
const BITMAP_UNITS_PER_STEP: f32 = 16.0;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font file: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse font file: {path}")]
    Parse { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Bold,
    Regular,
}

/// The bold and regular fonts one asset draws with. Both come from their font
/// files, or both are the built-in bitmap font; an asset never mixes the two.
#[derive(Clone)]
pub enum FontSet {
    Outline {
        bold: Arc<FontVec>,
        regular: Arc<FontVec>,
    },
    Builtin,
}

impl FontSet {
    /// Loads both font files, switching every face to the built-in font when
    /// either one is missing or unreadable.
    pub fn load(paths: &FontPaths) -> Self {
        let loaded = read_font(&paths.bold)
            .and_then(|bold| read_font(&paths.regular).map(|regular| (bold, regular)));
        match loaded {
            Ok((bold, regular)) => Self::Outline {
                bold: Arc::new(bold),
                regular: Arc::new(regular),
            },
            Err(err) => {
                tracing::debug!(%err, "preferred fonts unavailable; using built-in font");
                Self::Builtin
            }
        }
    }

    pub fn face(&self, weight: FontWeight, size: f32) -> Typeface {
        match self {
            Self::Outline { bold, regular } => {
                let font = match weight {
                    FontWeight::Bold => bold,
                    FontWeight::Regular => regular,
                };
                Typeface::outline(Arc::clone(font), size)
            }
            Self::Builtin => Typeface::builtin(size),
        }
    }
}

/// A font ready to draw at one fixed size.
pub enum Typeface {
    /// TrueType/OpenType outlines, scaled so the em square spans the requested pixel size.
    Outline { font: Arc<FontVec>, scale: PxScale },
    /// Built-in 8x8 bitmap glyphs, each dot drawn as a `scale`-sized block.
    Bitmap { scale: u32 },
}

impl Typeface {
    pub fn outline(font: Arc<FontVec>, size: f32) -> Self {
        let units_per_em = font.units_per_em().unwrap_or(1000.0);
        let scale = PxScale::from(size * font.height_unscaled() / units_per_em);
        Self::Outline { font, scale }
    }

    pub fn builtin(size: f32) -> Self {
        Self::Bitmap {
            scale: bitmap_scale(size),
        }
    }
}

fn read_font(path: &Path) -> Result<FontVec, FontError> {
    let data = fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    FontVec::try_from_vec(data).map_err(|_| FontError::Parse {
        path: path.to_path_buf(),
    })
}

/// Draws `text` with its top-left corner (ascender line) at `origin`.
pub fn draw_text(canvas: &mut Canvas, origin: Point, text: &str, color: Color, face: &Typeface) {
    match face {
        Typeface::Outline { font, scale } => {
            draw_outline_text(canvas, origin, text, color, font, *scale)
        }
        Typeface::Bitmap { scale } => draw_bitmap_text(canvas, origin, text, color, *scale),
    }
}

/// Advance width and line height of `text` in pixels.
pub fn measure_text(text: &str, face: &Typeface) -> (u32, u32) {
    match face {
        Typeface::Outline { font, scale } => {
            let font: &FontVec = font;
            let scaled = font.as_scaled(*scale);
            let mut width = 0.0_f32;
            let mut previous: Option<GlyphId> = None;
            for ch in text.chars() {
                let id = scaled.glyph_id(ch);
                if let Some(previous) = previous {
                    width += scaled.kern(previous, id);
                }
                width += scaled.h_advance(id);
                previous = Some(id);
            }
            (
                width.max(0.0).ceil() as u32,
                scaled.height().max(0.0).ceil() as u32,
            )
        }
        Typeface::Bitmap { scale } => {
            let step = BITMAP_GLYPH_SIZE as u32 * scale;
            let count = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
            (count.saturating_mul(step), step)
        }
    }
}

fn draw_outline_text(
    canvas: &mut Canvas,
    origin: Point,
    text: &str,
    color: Color,
    font: &FontVec,
    scale: PxScale,
) {
    let scaled = font.as_scaled(scale);
    let baseline = origin.y as f32 + scaled.ascent();
    let mut caret = origin.x as f32;
    let mut previous: Option<GlyphId> = None;

    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(previous) = previous {
            caret += scaled.kern(previous, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id);
        previous = Some(id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        let left = bounds.min.x as i32;
        let top = bounds.min.y as i32;
        outlined.draw(|x, y, coverage| {
            canvas.blend(left + x as i32, top + y as i32, color, coverage);
        });
    }
}

fn draw_bitmap_text(canvas: &mut Canvas, origin: Point, text: &str, color: Color, scale: u32) {
    let scale = i32::try_from(scale.max(1)).unwrap_or(1);
    let step = BITMAP_GLYPH_SIZE * scale;
    let mut caret = origin.x;
    for ch in text.chars() {
        draw_bitmap_glyph(canvas, Point::new(caret, origin.y), ch, color, scale);
        caret = caret.saturating_add(step);
    }
}

fn draw_bitmap_glyph(canvas: &mut Canvas, at: Point, ch: char, color: Color, scale: i32) {
    let Some(rows) = BASIC_FONTS.get(ch) else {
        // hollow box for anything outside basic latin
        let last = BITMAP_GLYPH_SIZE - 1;
        for i in 0..BITMAP_GLYPH_SIZE {
            for (column, row) in [(i, 0), (i, last), (0, i), (last, i)] {
                fill_block(canvas, at, column, row, color, scale);
            }
        }
        return;
    };

    for (row, bits) in (0..).zip(rows) {
        for column in 0..BITMAP_GLYPH_SIZE {
            if bits & (1 << column) != 0 {
                fill_block(canvas, at, column, row, color, scale);
            }
        }
    }
}

fn fill_block(canvas: &mut Canvas, at: Point, column: i32, row: i32, color: Color, scale: i32) {
    let left = at.x + column * scale;
    let top = at.y + row * scale;
    for y in top..top + scale {
        canvas.fill_span(y, left, left + scale - 1, color);
    }
}

fn bitmap_scale(size: f32) -> u32 {
    (size / BITMAP_UNITS_PER_STEP).round().max(1.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ColorMode;
    use crate::config::{DEFAULT_BOLD_FONT, DEFAULT_REGULAR_FONT};
    use crate::palette::{DARK_GRAY, WHITE};

    fn fixture_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("listing-graphics-font-{pid}-{nanos}-{name}"));
        path
    }

    fn painted(canvas: &Canvas, background: Color) -> usize {
        let (width, height) = canvas.dimensions();
        (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) != Some(background))
            .count()
    }

    fn font_paths(bold: &str, regular: &str) -> FontPaths {
        FontPaths {
            bold: bold.into(),
            regular: regular.into(),
        }
    }

    fn is_builtin(face: &Typeface) -> bool {
        matches!(face, Typeface::Bitmap { .. })
    }

    #[test]
    fn missing_fonts_fall_back_to_builtin() {
        let fonts = FontSet::load(&font_paths(
            "/nonexistent/fonts/Missing-Bold.ttf",
            "/nonexistent/fonts/Missing.ttf",
        ));
        assert!(matches!(fonts, FontSet::Builtin));
        assert!(is_builtin(&fonts.face(FontWeight::Bold, 60.0)));
    }

    #[test]
    fn one_missing_font_switches_every_face_to_builtin() {
        let fonts = FontSet::load(&font_paths(
            DEFAULT_BOLD_FONT,
            "/nonexistent/fonts/Missing.ttf",
        ));
        assert!(matches!(fonts, FontSet::Builtin));
        for (weight, size) in [
            (FontWeight::Bold, 60.0),
            (FontWeight::Bold, 48.0),
            (FontWeight::Regular, 28.0),
            (FontWeight::Regular, 24.0),
        ] {
            assert!(is_builtin(&fonts.face(weight, size)), "{weight:?} at {size}");
        }

        let fonts = FontSet::load(&font_paths(
            "/nonexistent/fonts/Missing-Bold.ttf",
            DEFAULT_REGULAR_FONT,
        ));
        assert!(matches!(fonts, FontSet::Builtin));
    }

    #[test]
    fn read_font_reports_read_error_for_missing_file() {
        let result = read_font(Path::new("/nonexistent/fonts/Missing.ttf"));
        assert!(matches!(result, Err(FontError::Read { .. })));
    }

    #[test]
    fn read_font_reports_parse_error_for_invalid_font_data() {
        let path = fixture_path("garbage.ttf");
        fs::write(&path, b"definitely not a font").unwrap();

        let result = read_font(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(FontError::Parse { .. })));
    }

    #[test]
    fn unparsable_regular_font_switches_every_face_to_builtin() {
        let path = fixture_path("broken-regular.ttf");
        fs::write(&path, b"definitely not a font").unwrap();

        let fonts = FontSet::load(&FontPaths {
            bold: DEFAULT_BOLD_FONT.into(),
            regular: path.clone(),
        });
        let _ = fs::remove_file(&path);

        assert!(matches!(fonts, FontSet::Builtin));
    }

    #[test]
    fn bitmap_scale_tracks_requested_size() {
        assert_eq!(bitmap_scale(60.0), 4);
        assert_eq!(bitmap_scale(48.0), 3);
        assert_eq!(bitmap_scale(28.0), 2);
        assert_eq!(bitmap_scale(24.0), 2);
        assert_eq!(bitmap_scale(4.0), 1);
    }

    #[test]
    fn builtin_text_measures_fixed_advance() {
        let face = Typeface::builtin(24.0);
        assert_eq!(measure_text("Feature 1", &face), (144, 16));
        assert_eq!(measure_text("", &face), (0, 16));
    }

    #[test]
    fn builtin_text_paints_inside_its_measured_box() {
        let mut canvas = Canvas::new(64, 32, ColorMode::Rgb, WHITE);
        let face = Typeface::builtin(16.0);
        draw_text(&mut canvas, Point::new(4, 4), "Hi", DARK_GRAY, &face);

        assert!(painted(&canvas, WHITE) > 0);
        for y in 0..32 {
            for x in 0..64 {
                let inside = (4..20).contains(&x) && (4..12).contains(&y);
                if !inside {
                    assert_eq!(canvas.pixel(x, y), Some(WHITE), "stray pixel at {x},{y}");
                }
            }
        }
    }

    #[test]
    fn builtin_text_draws_box_for_unsupported_characters() {
        let mut canvas = Canvas::new(16, 16, ColorMode::Rgb, WHITE);
        let face = Typeface::builtin(16.0);
        draw_text(&mut canvas, Point::new(0, 0), "\u{2713}", DARK_GRAY, &face);

        assert_eq!(canvas.pixel(0, 0), Some(DARK_GRAY));
        assert_eq!(canvas.pixel(7, 7), Some(DARK_GRAY));
        assert_eq!(canvas.pixel(3, 3), Some(WHITE));
        assert_eq!(painted(&canvas, WHITE), 28);
    }

    #[test]
    fn text_running_off_canvas_is_clipped() {
        let mut canvas = Canvas::new(20, 10, ColorMode::Rgb, WHITE);
        let face = Typeface::builtin(32.0);
        draw_text(&mut canvas, Point::new(-5, 4), "Get Started", DARK_GRAY, &face);
        assert!(painted(&canvas, WHITE) > 0);
    }

    #[test]
    fn system_fonts_render_when_installed() {
        if !Path::new(DEFAULT_BOLD_FONT).exists() || !Path::new(DEFAULT_REGULAR_FONT).exists() {
            return;
        }
        let fonts = FontSet::load(&font_paths(DEFAULT_BOLD_FONT, DEFAULT_REGULAR_FONT));
        assert!(matches!(fonts, FontSet::Outline { .. }));

        for weight in [FontWeight::Bold, FontWeight::Regular] {
            let face = fonts.face(weight, 48.0);
            assert!(!is_builtin(&face));

            let (width, height) = measure_text("MyRecipeApp", &face);
            assert!(width > 200 && width < 500, "unexpected width {width}");
            assert!(height >= 48);

            let mut canvas = Canvas::new(600, 120, ColorMode::Rgb, WHITE);
            draw_text(&mut canvas, Point::new(10, 10), "MyRecipeApp", DARK_GRAY, &face);
            assert!(painted(&canvas, WHITE) > 0);
            assert_eq!(canvas.pixel(599, 119), Some(WHITE));
        }
    }
}
