use super::Canvas;
use crate::geometry::{Bounds, Color, Point};

/// Fill and stroke settings shared by the box-shaped primitives. Outlines are
/// painted inside the bounds, on top of the fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeStyle {
    pub fill: Option<Color>,
    pub outline: Option<Color>,
    pub width: u32,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: None,
            outline: None,
            width: 1,
        }
    }
}

impl ShapeStyle {
    pub const fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            outline: None,
            width: 1,
        }
    }

    pub const fn with_outline(self, color: Color, width: u32) -> Self {
        Self {
            fill: self.fill,
            outline: Some(color),
            width,
        }
    }

    const fn stroke_width(&self) -> i32 {
        if self.width == 0 {
            1
        } else if self.width > i32::MAX as u32 {
            i32::MAX
        } else {
            self.width as i32
        }
    }
}

pub fn rectangle(canvas: &mut Canvas, bounds: Bounds, style: ShapeStyle) {
    let bounds = normalized(bounds);
    let Some((top, bottom)) = visible_rows(canvas, bounds) else {
        return;
    };

    if let Some(fill) = style.fill {
        for y in top..=bottom {
            canvas.fill_span(y, bounds.x1, bounds.x2, fill);
        }
    }

    if let Some(outline) = style.outline {
        let inner = bounds.inset(style.stroke_width());
        for y in top..=bottom {
            if inner.is_empty() || y < inner.y1 || y > inner.y2 {
                canvas.fill_span(y, bounds.x1, bounds.x2, outline);
            } else {
                canvas.fill_span(y, bounds.x1, inner.x1 - 1, outline);
                canvas.fill_span(y, inner.x2 + 1, bounds.x2, outline);
            }
        }
    }
}

pub fn ellipse(canvas: &mut Canvas, bounds: Bounds, style: ShapeStyle) {
    let bounds = normalized(bounds);
    let Some((top, bottom)) = visible_rows(canvas, bounds) else {
        return;
    };
    let shape = EllipseShape::inscribed(bounds);

    if let Some(fill) = style.fill {
        for y in top..=bottom {
            if let Some((left, right)) = shape.span(y, 0.0) {
                canvas.fill_span(y, left, right, fill);
            }
        }
    }

    if let Some(outline) = style.outline {
        let inset = style.stroke_width() as f64;
        for y in top..=bottom {
            let Some((left, right)) = shape.span(y, 0.0) else {
                continue;
            };
            match shape.span(y, inset) {
                Some((inner_left, inner_right)) => {
                    canvas.fill_span(y, left, inner_left - 1, outline);
                    canvas.fill_span(y, inner_right + 1, right, outline);
                }
                None => canvas.fill_span(y, left, right, outline),
            }
        }
    }
}

/// Straight segment from `from` to `to` inclusive. Wide strokes are centered on
/// the segment and end flush with its endpoints.
pub fn line(canvas: &mut Canvas, from: Point, to: Point, color: Color, width: u32) {
    if width <= 1 {
        thin_line(canvas, from, to, color);
        return;
    }

    let half = f64::from(width) / 2.0;
    let reach = half.ceil() as i32 + 1;
    let (ax, ay) = (f64::from(from.x), f64::from(from.y));
    let (dx, dy) = (f64::from(to.x) - ax, f64::from(to.y) - ay);
    let length = dx.hypot(dy);

    let x_min = from.x.min(to.x).saturating_sub(reach).max(0);
    let x_max = from
        .x
        .max(to.x)
        .saturating_add(reach)
        .min(last_index(canvas.width()));
    let y_min = from.y.min(to.y).saturating_sub(reach).max(0);
    let y_max = from
        .y
        .max(to.y)
        .saturating_add(reach)
        .min(last_index(canvas.height()));

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let (px, py) = (f64::from(x) - ax, f64::from(y) - ay);
            let covered = if length == 0.0 {
                (-half..half).contains(&px) && (-half..half).contains(&py)
            } else {
                let along = (px * dx + py * dy) / length;
                let across = (py * dx - px * dy) / length;
                (0.0..=length).contains(&along) && (-half..half).contains(&across)
            };
            if covered {
                canvas.put(x, y, color);
            }
        }
    }
}

/// Rounded box made of two overlapping rectangles and four corner ellipses.
pub fn rounded_rectangle(canvas: &mut Canvas, bounds: Bounds, radius: i32, style: ShapeStyle) {
    let Bounds { x1, y1, x2, y2 } = normalized(bounds);
    let diameter = radius * 2;

    rectangle(canvas, Bounds::new(x1 + radius, y1, x2 - radius, y2), style);
    rectangle(canvas, Bounds::new(x1, y1 + radius, x2, y2 - radius), style);
    ellipse(canvas, Bounds::new(x1, y1, x1 + diameter, y1 + diameter), style);
    ellipse(canvas, Bounds::new(x2 - diameter, y1, x2, y1 + diameter), style);
    ellipse(canvas, Bounds::new(x1, y2 - diameter, x1 + diameter, y2), style);
    ellipse(canvas, Bounds::new(x2 - diameter, y2 - diameter, x2, y2), style);
}

/// Color of scanline `row` out of `rows` in a top-to-bottom linear blend.
/// The first row is exactly `top`, the last exactly `bottom`.
pub fn gradient_color(top: Color, bottom: Color, row: u32, rows: u32) -> Color {
    let t = if rows <= 1 {
        0.0
    } else {
        f64::from(row.min(rows - 1)) / f64::from(rows - 1)
    };
    let mix = |from: u8, to: u8| {
        let from = f64::from(from);
        (from + (f64::from(to) - from) * t) as u8
    };
    Color::new(mix(top.r, bottom.r), mix(top.g, bottom.g), mix(top.b, bottom.b))
}

pub fn vertical_gradient(canvas: &mut Canvas, top: Color, bottom: Color) {
    let rows = canvas.height();
    let right = last_index(canvas.width());
    for row in 0..rows {
        let color = gradient_color(top, bottom, row, rows);
        let y = i32::try_from(row).unwrap_or(i32::MAX);
        line(canvas, Point::new(0, y), Point::new(right, y), color, 1);
    }
}

fn thin_line(canvas: &mut Canvas, from: Point, to: Point, color: Color) {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };
    let (mut x, mut y) = (from.x, from.y);
    let mut error = dx + dy;

    loop {
        canvas.put(x, y, color);
        if x == to.x && y == to.y {
            break;
        }
        let doubled = error * 2;
        if doubled >= dy {
            error += dy;
            x += step_x;
        }
        if doubled <= dx {
            error += dx;
            y += step_y;
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct EllipseShape {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
}

impl EllipseShape {
    fn inscribed(bounds: Bounds) -> Self {
        Self {
            cx: (f64::from(bounds.x1) + f64::from(bounds.x2)) / 2.0,
            cy: (f64::from(bounds.y1) + f64::from(bounds.y2)) / 2.0,
            rx: (f64::from(bounds.x2) - f64::from(bounds.x1)) / 2.0,
            ry: (f64::from(bounds.y2) - f64::from(bounds.y1)) / 2.0,
        }
    }

    /// Horizontal extent of row `y` for the ellipse shrunk by `inset`.
    fn span(&self, y: i32, inset: f64) -> Option<(i32, i32)> {
        let rx = self.rx - inset;
        let ry = self.ry - inset;
        if inset > 0.0 && (rx <= 0.0 || ry <= 0.0) {
            return None;
        }
        let rx = rx.max(0.5);
        let ry = ry.max(0.5);

        let dy = (f64::from(y) - self.cy) / ry;
        let remaining = 1.0 - dy * dy;
        if remaining < 0.0 {
            return None;
        }
        let half = rx * remaining.sqrt();
        let left = (self.cx - half).ceil() as i32;
        let right = (self.cx + half).floor() as i32;
        (left <= right).then_some((left, right))
    }
}

fn normalized(bounds: Bounds) -> Bounds {
    Bounds::new(
        bounds.x1.min(bounds.x2),
        bounds.y1.min(bounds.y2),
        bounds.x1.max(bounds.x2),
        bounds.y1.max(bounds.y2),
    )
}

fn visible_rows(canvas: &Canvas, bounds: Bounds) -> Option<(i32, i32)> {
    let top = bounds.y1.max(0);
    let bottom = bounds.y2.min(last_index(canvas.height()));
    (top <= bottom).then_some((top, bottom))
}

fn last_index(extent: u32) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX) - 1
}
