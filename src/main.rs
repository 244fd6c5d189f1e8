use anyhow::Context;

fn main() -> anyhow::Result<()> {
    listing_graphics::run().context("failed to generate store listing graphics")?;
    Ok(())
}
