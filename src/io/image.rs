//! PNG export of a finished tiling

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{BACKGROUND_COLOR, FREE_COLOR, orientation_color};
use crate::io::error::{Result, TilingError, ensure_parent_dir, invalid_parameter};
use crate::spatial::grid::{Cell, Grid};

/// Draw the grid with `cell_px` pixels per cell
///
/// Blocked cells use the background colour, so the diamond sits on a
/// transparent square.
///
/// # Errors
///
/// Returns an error if `cell_px` is zero
pub fn render_grid(grid: &Grid, cell_px: u32) -> Result<RgbaImage> {
    if cell_px == 0 {
        return Err(invalid_parameter(
            "cell_px",
            &cell_px,
            &"cells need at least one pixel",
        ));
    }

    let px = grid.side() as u32 * cell_px;
    let mut img = RgbaImage::from_pixel(px, px, Rgba(BACKGROUND_COLOR));

    for coordinate in grid.coordinates() {
        let color = match grid.cell(coordinate)? {
            Cell::Blocked => continue,
            Cell::Free => FREE_COLOR,
            Cell::Occupied(domino) => orientation_color(domino.orientation()),
        };

        let x0 = coordinate.x as u32 * cell_px;
        let y0 = coordinate.y as u32 * cell_px;
        for x in x0..x0 + cell_px {
            for y in y0..y0 + cell_px {
                if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
                    *pixel = Rgba(color);
                }
            }
        }
    }

    Ok(img)
}

/// Export the grid as a PNG image with transparent background
///
/// # Errors
///
/// Returns an error if:
/// - `cell_px` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_tiling_png(grid: &Grid, cell_px: u32, output_path: &Path) -> Result<()> {
    let img = render_grid(grid, cell_px)?;

    ensure_parent_dir(output_path)?;
    img.save(output_path)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
