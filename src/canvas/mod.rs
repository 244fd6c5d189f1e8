pub mod draw;
pub mod text;

use image::{DynamicImage, RgbaImage};

use crate::geometry::Color;

pub use draw::ShapeStyle;
pub use text::{FontSet, FontWeight, Typeface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Rgba,
}

impl ColorMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
        }
    }

    #[cfg(test)]
    pub const fn color_type(self) -> image::ColorType {
        match self {
            Self::Rgb => image::ColorType::Rgb8,
            Self::Rgba => image::ColorType::Rgba8,
        }
    }
}

/// Raster buffer with fixed dimensions. Pixels are kept as RGBA internally and
/// narrowed to the canvas [`ColorMode`] when exported.
#[derive(Debug, Clone)]
pub struct Canvas {
    mode: ColorMode,
    pixels: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, mode: ColorMode, background: Color) -> Self {
        Self {
            mode,
            pixels: RgbaImage::from_pixel(width, height, background.to_rgba()),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (x, y) = self.index(x, y)?;
        let [r, g, b, _] = self.pixels.get_pixel(x, y).0;
        Some(Color::new(r, g, b))
    }

    #[cfg(test)]
    pub fn alpha(&self, x: i32, y: i32) -> Option<u8> {
        let (x, y) = self.index(x, y)?;
        Some(self.pixels.get_pixel(x, y).0[3])
    }

    pub(crate) fn put(&mut self, x: i32, y: i32, color: Color) {
        if let Some((x, y)) = self.index(x, y) {
            self.pixels.put_pixel(x, y, color.to_rgba());
        }
    }

    /// Paints `color` over the existing pixel with the given coverage in `0..=1`.
    pub(crate) fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if coverage <= 0.0 {
            return;
        }
        if coverage >= 1.0 {
            self.put(x, y, color);
            return;
        }
        let Some((x, y)) = self.index(x, y) else {
            return;
        };

        let dst = self.pixels.get_pixel_mut(x, y);
        let dst_alpha = f32::from(dst.0[3]) / 255.0;
        let out_alpha = coverage + dst_alpha * (1.0 - coverage);
        if out_alpha <= 0.0 {
            return;
        }
        let src = [color.r, color.g, color.b];
        for (channel, source) in dst.0.iter_mut().take(3).zip(src) {
            let blended = (f32::from(source) * coverage
                + f32::from(*channel) * dst_alpha * (1.0 - coverage))
                / out_alpha;
            *channel = blended.round().clamp(0.0, 255.0) as u8;
        }
        dst.0[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    /// Fills the clipped horizontal run `x1..=x2` on row `y`.
    pub(crate) fn fill_span(&mut self, y: i32, x1: i32, x2: i32, color: Color) {
        let height = i32::try_from(self.height()).unwrap_or(i32::MAX);
        let width = i32::try_from(self.width()).unwrap_or(i32::MAX);
        if y < 0 || y >= height || width == 0 {
            return;
        }
        let left = x1.min(x2).max(0);
        let right = x1.max(x2).min(width - 1);
        let rgba = color.to_rgba();
        for x in left..=right {
            self.pixels.put_pixel(x as u32, y as u32, rgba);
        }
    }

    pub fn into_image(self) -> DynamicImage {
        let image = DynamicImage::ImageRgba8(self.pixels);
        match self.mode {
            ColorMode::Rgba => image,
            ColorMode::Rgb => DynamicImage::ImageRgb8(image.into_rgb8()),
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.pixels.width() && y < self.pixels.height()).then_some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ColorType;
    use crate::palette::{DARK_GRAY, PRIMARY_ORANGE, WHITE};

    #[test]
    fn new_canvas_is_filled_with_background() {
        let canvas = Canvas::new(8, 4, ColorMode::Rgb, DARK_GRAY);
        assert_eq!(canvas.dimensions(), (8, 4));
        assert_eq!(canvas.pixel(0, 0), Some(DARK_GRAY));
        assert_eq!(canvas.pixel(7, 3), Some(DARK_GRAY));
        assert_eq!(canvas.alpha(7, 3), Some(255));
    }

    #[test]
    fn pixel_lookup_outside_canvas_is_none() {
        let canvas = Canvas::new(8, 4, ColorMode::Rgb, WHITE);
        assert_eq!(canvas.pixel(-1, 0), None);
        assert_eq!(canvas.pixel(8, 0), None);
        assert_eq!(canvas.pixel(0, 4), None);
    }

    #[test]
    fn writes_outside_canvas_are_clipped() {
        let mut canvas = Canvas::new(4, 4, ColorMode::Rgb, WHITE);
        canvas.put(-3, 2, PRIMARY_ORANGE);
        canvas.put(2, 10, PRIMARY_ORANGE);
        canvas.fill_span(1, -20, 20, PRIMARY_ORANGE);
        canvas.fill_span(9, 0, 3, PRIMARY_ORANGE);

        assert_eq!(canvas.pixel(0, 1), Some(PRIMARY_ORANGE));
        assert_eq!(canvas.pixel(3, 1), Some(PRIMARY_ORANGE));
        assert_eq!(canvas.pixel(0, 2), Some(WHITE));
    }

    #[test]
    fn blend_mixes_with_existing_pixel() {
        let mut canvas = Canvas::new(2, 2, ColorMode::Rgb, WHITE);
        canvas.blend(0, 0, Color::new(0, 0, 0), 0.5);
        canvas.blend(1, 0, Color::new(0, 0, 0), 0.0);
        canvas.blend(1, 1, Color::new(0, 0, 0), 1.0);

        assert_eq!(canvas.pixel(0, 0), Some(Color::new(128, 128, 128)));
        assert_eq!(canvas.pixel(1, 0), Some(WHITE));
        assert_eq!(canvas.pixel(1, 1), Some(Color::new(0, 0, 0)));
        assert_eq!(canvas.alpha(0, 0), Some(255));
    }

    #[test]
    fn into_image_narrows_to_canvas_mode() {
        let rgb = Canvas::new(3, 2, ColorMode::Rgb, WHITE).into_image();
        assert_eq!(rgb.color(), ColorType::Rgb8);
        assert_eq!((rgb.width(), rgb.height()), (3, 2));

        let rgba = Canvas::new(3, 2, ColorMode::Rgba, WHITE).into_image();
        assert_eq!(rgba.color(), ColorType::Rgba8);
    }

    #[test]
    fn color_mode_maps_to_image_color_type() {
        assert_eq!(ColorMode::Rgb.color_type(), ColorType::Rgb8);
        assert_eq!(ColorMode::Rgba.color_type(), ColorType::Rgba8);
        assert_eq!(ColorMode::Rgba.label(), "RGBA");
    }
}
