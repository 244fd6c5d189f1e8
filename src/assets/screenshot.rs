use super::{AssetKind, APP_NAME};
use crate::canvas::draw::rectangle;
use crate::canvas::text::{draw_text, measure_text};
use crate::canvas::{Canvas, FontSet, FontWeight, ShapeStyle};
use crate::config::FontPaths;
use crate::geometry::{Bounds, Color, Point};
use crate::palette::{DARK_GRAY, LIGHT_GRAY, SCREEN_LAYOUT, WHITE};

const CLOCK: &str = "9:41";
const CALL_TO_ACTION: &str = "Get Started";
const FEATURE_BOX_OUTLINE: u32 = 2;

/// Phone-screen mockup: status bar, accent header, feature list and a
/// call-to-action button.
pub(super) fn render(
    fonts: &FontPaths,
    index: u8,
    title: &str,
    subtitle: &str,
    accent: Color,
) -> Canvas {
    let layout = SCREEN_LAYOUT;
    let mut canvas = AssetKind::Screenshot(index).blank_canvas(LIGHT_GRAY);
    let right = layout.width as i32;
    let bottom = layout.height as i32;

    rectangle(
        &mut canvas,
        Bounds::new(0, 0, right, layout.status_bar_bottom),
        ShapeStyle::filled(DARK_GRAY),
    );
    rectangle(
        &mut canvas,
        Bounds::new(0, layout.status_bar_bottom, right, layout.header_bottom),
        ShapeStyle::filled(accent),
    );
    rectangle(
        &mut canvas,
        Bounds::new(0, layout.header_bottom, right, bottom),
        ShapeStyle::filled(WHITE),
    );

    let fonts = FontSet::load(fonts);
    let title_face = fonts.face(FontWeight::Bold, layout.title_size);
    let subtitle_face = fonts.face(FontWeight::Regular, layout.subtitle_size);
    let body_face = fonts.face(FontWeight::Regular, layout.body_size);

    draw_text(
        &mut canvas,
        Point::new(layout.margin, layout.clock_y),
        CLOCK,
        WHITE,
        &title_face,
    );
    draw_text(
        &mut canvas,
        Point::new(layout.margin, layout.app_name_y),
        APP_NAME,
        WHITE,
        &title_face,
    );
    draw_text(
        &mut canvas,
        Point::new(layout.margin, layout.title_y),
        title,
        accent,
        &title_face,
    );
    draw_text(
        &mut canvas,
        Point::new(layout.margin, layout.subtitle_y),
        subtitle,
        DARK_GRAY,
        &subtitle_face,
    );

    let box_style = ShapeStyle::filled(LIGHT_GRAY).with_outline(accent, FEATURE_BOX_OUTLINE);
    for number in 1..=layout.feature_box_count as i32 {
        let top = layout.feature_box_top + (number - 1) * layout.feature_box_pitch;
        rectangle(
            &mut canvas,
            Bounds::new(
                layout.margin,
                top,
                right - layout.margin,
                top + layout.feature_box_height,
            ),
            box_style,
        );
        draw_text(
            &mut canvas,
            Point::new(
                layout.margin + layout.feature_label_dx,
                top + layout.feature_label_dy,
            ),
            &format!("Feature {number}"),
            DARK_GRAY,
            &body_face,
        );
    }

    rectangle(
        &mut canvas,
        Bounds::new(
            layout.button_left,
            layout.button_top,
            layout.button_right,
            layout.button_bottom,
        ),
        ShapeStyle::filled(accent),
    );
    let (label_width, _) = measure_text(CALL_TO_ACTION, &subtitle_face);
    let label_width = i32::try_from(label_width).unwrap_or(0);
    let label_x = (layout.button_left + layout.button_right - label_width) / 2;
    draw_text(
        &mut canvas,
        Point::new(label_x, layout.button_label_y),
        CALL_TO_ACTION,
        WHITE,
        &subtitle_face,
    );

    canvas
}
