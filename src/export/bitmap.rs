// Grid of cells, row-major
pub type Grid<T> = Vec<Vec<T>>;

// Scale a grid so each cell becomes a `scale` x `scale` block
pub fn scale_grid<T: Clone>(grid: &[Vec<T>], scale: usize) -> Grid<T> {
    if scale <= 1 {
        return grid.to_vec();
    }

    let mut scaled = Vec::with_capacity(grid.len() * scale);

    for row in grid {
        let scaled_row: Vec<T> = row
            .iter()
            .flat_map(|cell| std::iter::repeat(cell.clone()).take(scale))
            .collect();

        for _ in 0..scale {
            scaled.push(scaled_row.clone());
        }
    }

    scaled
}
