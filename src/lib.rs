pub mod app;
pub mod assets;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod palette;
pub mod storage;
pub use error::{AppError, AppResult};

use assets::GeneratedAsset;
use config::GeneratorConfig;

/// Entrypoint used by the `generate-graphics` binary.
pub fn run() -> AppResult<Vec<GeneratedAsset>> {
    logging::init();
    tracing::info!("starting listing graphics generator");

    let app = app::App::new(GeneratorConfig::default());
    let generated = app.start()?;

    tracing::info!(count = generated.len(), "generation complete");
    Ok(generated)
}
