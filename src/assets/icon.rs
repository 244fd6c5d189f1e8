use super::AssetKind;
use crate::canvas::draw::{ellipse, line};
use crate::canvas::{Canvas, ShapeStyle};
use crate::geometry::{Bounds, Point};
use crate::palette::{LIGHT_ORANGE, PRIMARY_GREEN, PRIMARY_ORANGE, WHITE};

const TINE_XS: [i32; 3] = [180, 240, 300];
const TINE_WIDTH: u32 = 15;
const HANDLE_WIDTH: u32 = 20;

/// Two concentric discs with a white fork and spoon on top.
pub(super) fn render() -> Canvas {
    let mut canvas = AssetKind::AppIcon.blank_canvas(WHITE);

    ellipse(
        &mut canvas,
        Bounds::new(0, 0, 512, 512),
        ShapeStyle::filled(PRIMARY_GREEN),
    );
    ellipse(
        &mut canvas,
        Bounds::new(100, 100, 412, 412),
        ShapeStyle::filled(PRIMARY_ORANGE),
    );

    // fork
    for x in TINE_XS {
        line(
            &mut canvas,
            Point::new(x, 200),
            Point::new(x, 350),
            WHITE,
            TINE_WIDTH,
        );
    }
    line(
        &mut canvas,
        Point::new(240, 350),
        Point::new(240, 420),
        WHITE,
        HANDLE_WIDTH,
    );

    // spoon
    ellipse(
        &mut canvas,
        Bounds::new(330, 180, 400, 250),
        ShapeStyle::filled(LIGHT_ORANGE).with_outline(WHITE, 2),
    );
    line(
        &mut canvas,
        Point::new(365, 250),
        Point::new(365, 420),
        WHITE,
        HANDLE_WIDTH,
    );

    canvas
}
