//! Tests for PNG rendering of a tiling

#[cfg(test)]
mod tests {
    use domino_shuffle::io::configuration::{BACKGROUND_COLOR, FREE_COLOR, orientation_color};
    use domino_shuffle::io::image::{export_tiling_png, render_grid};
    use domino_shuffle::spatial::coordinate::{Coordinate, Orientation};
    use domino_shuffle::spatial::grid::Grid;
    use domino_shuffle::spatial::tiles::{Domino, TileId};
    use tempfile::tempdir;

    #[test]
    fn test_render_grid_colors_cells() {
        let mut grid = Grid::new(2).expect("valid half size");
        let domino = Domino::new(
            TileId(0),
            [Coordinate::new(1, 0), Coordinate::new(2, 0)],
            Orientation::Up,
        )
        .expect("valid domino");
        grid.put(&domino).expect("cells are free");

        let image = render_grid(&grid, 3).expect("rendered");

        assert_eq!(image.dimensions(), (12, 12));
        assert_eq!(image.get_pixel(0, 0).0, BACKGROUND_COLOR);
        assert_eq!(image.get_pixel(4, 1).0, orientation_color(Orientation::Up));
        assert_eq!(image.get_pixel(8, 2).0, orientation_color(Orientation::Up));
        assert_eq!(image.get_pixel(4, 4).0, FREE_COLOR);
    }

    #[test]
    fn test_render_grid_rejects_zero_cell_size() {
        let grid = Grid::new(1).expect("valid half size");
        assert!(render_grid(&grid, 0).is_err());
    }

    #[test]
    fn test_export_tiling_png() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("out").join("tiling.png");
        let grid = Grid::new(3).expect("valid half size");

        export_tiling_png(&grid, 2, &path).expect("export succeeds");

        let image = image::open(&path).expect("readable PNG").to_rgba8();
        assert_eq!(image.dimensions(), (12, 12));
        assert_eq!(image.get_pixel(6, 6).0, FREE_COLOR);
    }
}
