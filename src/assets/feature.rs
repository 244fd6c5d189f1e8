use super::{AssetKind, APP_NAME};
use crate::canvas::draw::{ellipse, vertical_gradient};
use crate::canvas::text::draw_text;
use crate::canvas::{Canvas, FontSet, FontWeight, ShapeStyle};
use crate::config::FontPaths;
use crate::geometry::{Bounds, Point};
use crate::palette::{ACCENT_BLUE, LIGHT_GRAY, LIGHT_ORANGE, PRIMARY_GREEN, PRIMARY_ORANGE, WHITE};

pub(super) const TAGLINE: &str = "AI-Powered Recipe Management";

const TITLE_SIZE: f32 = 60.0;
const TAGLINE_SIZE: f32 = 28.0;
const CIRCLE_OUTLINE: u32 = 3;

pub(super) fn render(fonts: &FontPaths) -> Canvas {
    let mut canvas = AssetKind::FeatureGraphic.blank_canvas(LIGHT_GRAY);
    vertical_gradient(&mut canvas, PRIMARY_GREEN, ACCENT_BLUE);

    ellipse(
        &mut canvas,
        Bounds::new(50, 50, 250, 250),
        ShapeStyle::filled(PRIMARY_ORANGE).with_outline(WHITE, CIRCLE_OUTLINE),
    );
    ellipse(
        &mut canvas,
        Bounds::new(750, 250, 950, 450),
        ShapeStyle::filled(LIGHT_ORANGE).with_outline(WHITE, CIRCLE_OUTLINE),
    );

    let fonts = FontSet::load(fonts);
    let title_face = fonts.face(FontWeight::Bold, TITLE_SIZE);
    let tagline_face = fonts.face(FontWeight::Regular, TAGLINE_SIZE);
    draw_text(&mut canvas, Point::new(150, 180), APP_NAME, WHITE, &title_face);
    draw_text(
        &mut canvas,
        Point::new(150, 260),
        TAGLINE,
        LIGHT_ORANGE,
        &tagline_face,
    );

    canvas
}
