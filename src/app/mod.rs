use std::path::Path;

use crate::assets::{AssetRenderer, GeneratedAsset, APP_NAME, SCREENSHOTS};
use crate::config::GeneratorConfig;
use crate::error::AppResult;

const RULE_WIDTH: usize = 50;

/// Runs the fixed generation sequence and reports progress on stdout.
#[derive(Debug, Clone)]
pub struct App {
    config: GeneratorConfig,
    renderer: AssetRenderer,
}

impl App {
    pub fn new(config: GeneratorConfig) -> Self {
        let renderer = AssetRenderer::new(&config);
        Self { config, renderer }
    }

    /// Writes the icon, the feature graphic and the three screenshots, in
    /// that order, into the configured output directory.
    pub fn start(&self) -> AppResult<Vec<GeneratedAsset>> {
        let rule = "=".repeat(RULE_WIDTH);
        println!("\n🎨 Generating {APP_NAME} Graphics...");
        println!("{rule}");

        self.renderer.storage().ensure_output_dir()?;
        tracing::info!(
            output_dir = %self.config.output_dir().display(),
            "output directory ready"
        );

        let mut generated = Vec::with_capacity(2 + SCREENSHOTS.len());
        generated.push(report(self.renderer.generate_app_icon()?));
        generated.push(report(self.renderer.generate_feature_graphic()?));
        for spec in SCREENSHOTS {
            generated.push(report(self.renderer.generate_screenshot(
                spec.index,
                spec.title,
                spec.subtitle,
                spec.accent,
            )?));
        }

        println!("{rule}");
        print!("{}", closing_notes(self.config.output_dir()));

        Ok(generated)
    }
}

fn closing_notes(output_dir: &Path) -> String {
    let dir = output_dir.display();
    format!(
        "✅ All graphics generated successfully!\n\
         \n📁 Graphics created in: {dir}/\n\
         \n⚠️  Note: These are placeholder graphics for testing.\n   \
         Use professional designs for actual Play Store submission.\n\
         \n📖 See {dir}/GRAPHICS_SPECIFICATIONS.md for requirements.\n\n"
    )
}

fn report(asset: GeneratedAsset) -> GeneratedAsset {
    println!("✅ Created: {}", asset.path.display());
    asset
}
