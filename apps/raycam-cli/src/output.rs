use std::path::Path;

use anyhow::Context;
use raycam_render::ImageBuffer;

/// Write the buffer as an 8-bit RGBA PNG. Channels are clamped to [0, 1].
pub fn save_png(image: &ImageBuffer, path: &Path) -> anyhow::Result<()> {
    let width = u32::try_from(image.width()).context("image too wide")?;
    let height = u32::try_from(image.height()).context("image too tall")?;
    let rgba = image::RgbaImage::from_raw(width, height, image.to_rgba8_top_down())
        .context("pixel buffer does not match image size")?;
    rgba.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("saved {}x{} image to {}", width, height, path.display());
    Ok(())
}
