use crate::error::Result;
use crate::export::bitmap::scale_grid;
use crate::pattern::Plan;
use crate::terminal::colors::{shade_color, shade_for_count, BACKGROUND};
use image::{ImageBuffer, RgbImage};
use std::path::Path;
use tracing::info;

/// Pixels per day square, including the gap.
pub const CELL_SIZE: u32 = 12;
/// Blank pixels on the right and bottom edge of each square.
pub const CELL_GAP: u32 = 2;

/// Draw the plan the way the contribution graph will show it.
pub fn render_heatmap(plan: &Plan) -> RgbImage {
    let shades: Vec<Vec<usize>> = plan
        .grid_counts()
        .iter()
        .map(|row| row.iter().map(|c| shade_for_count(*c)).collect())
        .collect();
    let scaled = scale_grid(&shades, CELL_SIZE as usize);

    let width = plan.weeks as u32 * CELL_SIZE;
    let height = shades.len() as u32 * CELL_SIZE;

    ImageBuffer::from_fn(width.max(1), height.max(1), |x, y| {
        let in_gap = x % CELL_SIZE >= CELL_SIZE - CELL_GAP || y % CELL_SIZE >= CELL_SIZE - CELL_GAP;
        if in_gap {
            return BACKGROUND.to_rgb();
        }
        scaled
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .map(|shade| shade_color(*shade).to_rgb())
            .unwrap_or_else(|| BACKGROUND.to_rgb())
    })
}

pub fn save_heatmap(plan: &Plan, output_path: &Path) -> Result<()> {
    let img = render_heatmap(plan);
    img.save(output_path)?;
    info!(path = %output_path.display(), width = img.width(), height = img.height(), "saved heatmap");
    println!(
        "Heatmap preview ({}x{}) written to {}",
        img.width(),
        img.height(),
        output_path.display()
    );
    Ok(())
}
