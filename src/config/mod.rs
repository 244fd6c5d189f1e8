use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "graphics";
pub const DEFAULT_BOLD_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";
pub const DEFAULT_REGULAR_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Font files tried before falling back to the built-in bitmap font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontPaths {
    pub bold: PathBuf,
    pub regular: PathBuf,
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            bold: PathBuf::from(DEFAULT_BOLD_FONT),
            regular: PathBuf::from(DEFAULT_REGULAR_FONT),
        }
    }
}

/// Generator settings. The binary always runs with [`GeneratorConfig::default`];
/// there is no configuration file or command-line override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub fonts: FontPaths,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            fonts: FontPaths::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_fonts(mut self, bold: impl Into<PathBuf>, regular: impl Into<PathBuf>) -> Self {
        self.fonts = FontPaths {
            bold: bold.into(),
            regular: regular.into(),
        };
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_writes_into_relative_graphics_dir() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_dir(), Path::new("graphics"));
        assert!(config.output_dir().is_relative());
    }

    #[test]
    fn default_fonts_point_at_dejavu() {
        let fonts = FontPaths::default();
        assert!(fonts.bold.ends_with("DejaVuSans-Bold.ttf"));
        assert!(fonts.regular.ends_with("DejaVuSans.ttf"));
    }

    #[test]
    fn with_fonts_overrides_only_font_paths() {
        let config = GeneratorConfig::with_output_dir("/tmp/listing")
            .with_fonts("/tmp/missing-bold.ttf", "/tmp/missing.ttf");

        assert_eq!(config.output_dir(), Path::new("/tmp/listing"));
        assert_eq!(config.fonts.bold, PathBuf::from("/tmp/missing-bold.ttf"));
        assert_eq!(config.fonts.regular, PathBuf::from("/tmp/missing.ttf"));
    }
}
