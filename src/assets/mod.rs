mod feature;
mod icon;
mod screenshot;

use std::path::PathBuf;

use crate::canvas::{Canvas, ColorMode};
use crate::config::{FontPaths, GeneratorConfig};
use crate::error::AppResult;
use crate::geometry::Color;
use crate::palette::{ACCENT_BLUE, PRIMARY_GREEN, PRIMARY_ORANGE};
use crate::storage::StorageService;

pub const APP_NAME: &str = "MyRecipeApp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    AppIcon,
    FeatureGraphic,
    Screenshot(u8),
}

impl AssetKind {
    pub fn file_name(self) -> String {
        let (width, height) = self.dimensions();
        match self {
            Self::AppIcon => format!("app_icon_{width}x{height}.png"),
            Self::FeatureGraphic => format!("feature_graphic_{width}x{height}.png"),
            Self::Screenshot(index) => format!("screenshot_{index}_{width}x{height}.png"),
        }
    }

    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            Self::AppIcon => (512, 512),
            Self::FeatureGraphic => (1024, 500),
            Self::Screenshot(_) => (1080, 1920),
        }
    }

    pub const fn color_mode(self) -> ColorMode {
        match self {
            Self::AppIcon => ColorMode::Rgba,
            Self::FeatureGraphic | Self::Screenshot(_) => ColorMode::Rgb,
        }
    }

    pub fn blank_canvas(self, background: Color) -> Canvas {
        let (width, height) = self.dimensions();
        Canvas::new(width, height, self.color_mode(), background)
    }
}

/// Record of one PNG written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub kind: AssetKind,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub mode: ColorMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenshotSpec {
    pub index: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub accent: Color,
}

pub const SCREENSHOTS: [ScreenshotSpec; 3] = [
    ScreenshotSpec {
        index: 1,
        title: "AI Recipe Extraction",
        subtitle: "Convert any recipe text instantly",
        accent: PRIMARY_ORANGE,
    },
    ScreenshotSpec {
        index: 2,
        title: "Multi-Timer Widget",
        subtitle: "Manage multiple cooking timers",
        accent: ACCENT_BLUE,
    },
    ScreenshotSpec {
        index: 3,
        title: "Recipe Management",
        subtitle: "Organize all your recipes",
        accent: PRIMARY_GREEN,
    },
];

/// Draws the store listing assets and hands each finished canvas to storage.
#[derive(Debug, Clone)]
pub struct AssetRenderer {
    storage: StorageService,
    fonts: FontPaths,
}

impl AssetRenderer {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            storage: StorageService::with_output_dir(config.output_dir()),
            fonts: config.fonts.clone(),
        }
    }

    pub fn storage(&self) -> &StorageService {
        &self.storage
    }

    pub fn generate_app_icon(&self) -> AppResult<GeneratedAsset> {
        self.save(AssetKind::AppIcon, icon::render())
    }

    pub fn generate_feature_graphic(&self) -> AppResult<GeneratedAsset> {
        self.save(AssetKind::FeatureGraphic, feature::render(&self.fonts))
    }

    pub fn generate_screenshot(
        &self,
        index: u8,
        title: &str,
        subtitle: &str,
        accent: Color,
    ) -> AppResult<GeneratedAsset> {
        let canvas = screenshot::render(&self.fonts, index, title, subtitle, accent);
        self.save(AssetKind::Screenshot(index), canvas)
    }

    fn save(&self, kind: AssetKind, canvas: Canvas) -> AppResult<GeneratedAsset> {
        let (width, height) = canvas.dimensions();
        let mode = canvas.mode();
        let path = self.storage.save_png(canvas, &kind.file_name())?;
        tracing::debug!(
            path = %path.display(),
            width,
            height,
            mode = mode.label(),
            "saved asset"
        );
        Ok(GeneratedAsset {
            kind,
            path,
            width,
            height,
            mode,
        })
    }
}
