//! CPU-side PNG rendering of an RGBA8 buffer.
//!
//! Feature-gated behind `png` (default on) so embedders can depend on the
//! registry without pulling in the `image` crate. The color mapping lives in
//! [`crate::pixel`].

use cellgrid_core::error::SimError;
use std::path::Path;
use tracing::debug;

/// Writes an RGBA8 buffer of `width x height` pixels as a PNG.
///
/// Returns `SimError::InvalidDimensions` if the dimensions overflow `u32`,
/// or `SimError::Io` on a size mismatch or write failure.
pub fn write_png(rgba: Vec<u8>, width: usize, height: usize, path: &Path) -> Result<(), SimError> {
    let w = u32::try_from(width).map_err(|_| SimError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| SimError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| SimError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SimError::Io(e.to_string()))?;
    debug!(path = %path.display(), width, height, "wrote png");
    Ok(())
}
