//! # Textures
//!
//! Image loading and the procedural fallback texture.

use crate::app::AppContext;
use crate::{PrimerError, PrimerResult};
use macroquad::prelude::{Color, Image};
use tracing::info;

/// Builds a two-color checkerboard with square cells of `cell` pixels.
///
/// # Examples
///
/// ```
/// use macroquad::prelude::{BLACK, WHITE};
/// use primer::checkerboard;
///
/// let image = checkerboard(4, 4, 2, WHITE, BLACK);
/// assert_eq!(image.get_pixel(0, 0), WHITE);
/// assert_eq!(image.get_pixel(2, 0), BLACK);
/// ```
pub fn checkerboard(width: u16, height: u16, cell: u16, first: Color, second: Color) -> Image {
    let cell = cell.max(1) as u32;
    let mut image = Image::gen_image_color(width, height, first);
    for y in 0..height as u32 {
        for x in 0..width as u32 {
            if (x / cell + y / cell) % 2 == 1 {
                image.set_pixel(x, y, second);
            }
        }
    }
    image
}

/// Decodes an encoded image (BMP, PNG, TGA) into RGBA8.
pub fn decode_image(bytes: &[u8]) -> PrimerResult<Image> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();

    let too_large = || {
        PrimerError::Render(format!(
            "Image of {}x{} exceeds the {} pixel texture limit",
            width,
            height,
            u16::MAX
        ))
    };

    Ok(Image {
        width: u16::try_from(width).map_err(|_| too_large())?,
        height: u16::try_from(height).map_err(|_| too_large())?,
        bytes: rgba.into_raw(),
    })
}

/// Loads `<base>/images/<filename>` as RGBA8.
pub fn load_image(ctx: &AppContext, filename: &str) -> PrimerResult<Image> {
    let path = ctx.locate_asset("images", filename);
    info!("Load image from path: {}", path.display());

    let bytes = std::fs::read(&path)?;
    let image = decode_image(&bytes)?;

    info!("Image width: {} height: {}", image.width, image.height);
    Ok(image)
}
