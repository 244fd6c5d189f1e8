use crate::geometry::Color;

// Brand colors
pub const PRIMARY_ORANGE: Color = Color::new(255, 107, 53); // #FF6B35
pub const PRIMARY_GREEN: Color = Color::new(0, 78, 137); // #004E89
pub const ACCENT_BLUE: Color = Color::new(26, 127, 127); // #1A7F7F
pub const LIGHT_ORANGE: Color = Color::new(255, 230, 109); // #FFE66D
pub const LIGHT_GRAY: Color = Color::new(245, 245, 245); // #F5F5F5
pub const DARK_GRAY: Color = Color::new(51, 51, 51); // #333333
pub const WHITE: Color = Color::new(255, 255, 255);

/// Compile-time layout tokens for the phone screenshot mockups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    pub width: u32,
    pub height: u32,
    pub status_bar_bottom: i32,
    pub header_bottom: i32,
    pub margin: i32,
    pub clock_y: i32,
    pub app_name_y: i32,
    pub title_y: i32,
    pub subtitle_y: i32,
    pub feature_box_top: i32,
    pub feature_box_height: i32,
    pub feature_box_pitch: i32,
    pub feature_box_count: u32,
    pub feature_label_dx: i32,
    pub feature_label_dy: i32,
    pub button_left: i32,
    pub button_top: i32,
    pub button_right: i32,
    pub button_bottom: i32,
    pub button_label_y: i32,
    pub title_size: f32,
    pub subtitle_size: f32,
    pub body_size: f32,
}

pub const SCREEN_LAYOUT: ScreenLayout = ScreenLayout {
    width: 1080,
    height: 1920,
    status_bar_bottom: 80,
    header_bottom: 200,
    margin: 50,
    clock_y: 20,
    app_name_y: 100,
    title_y: 250,
    subtitle_y: 330,
    feature_box_top: 450,
    feature_box_height: 150,
    feature_box_pitch: 180,
    feature_box_count: 3,
    feature_label_dx: 30,
    feature_label_dy: 40,
    button_left: 150,
    button_top: 1750,
    button_right: 930,
    button_bottom: 1850,
    button_label_y: 1770,
    title_size: 48.0,
    subtitle_size: 32.0,
    body_size: 24.0,
};
