//! Tests for PNG conversion between images and binary grids

#[cfg(test)]
mod tests {
    use convchain::io::configuration::{SET_COLOR, UNSET_COLOR};
    use convchain::io::error::AlgorithmError;
    use convchain::io::image::{export_grid_as_png, grid_to_image, load_grid, load_sample_grid};
    use convchain::spatial::BinaryGrid;
    use image::{Rgba, RgbaImage};
    use std::path::Path;
    use tempfile::TempDir;

    fn diagonal() -> BinaryGrid {
        BinaryGrid::from_fn(3, 2, |x, y| x == y).expect("valid grid")
    }

    // Tests rendering maps set and unset cells to their colors
    // Verified by swapping the color arguments
    #[test]
    fn test_grid_to_image() {
        let image = grid_to_image(&diagonal(), [1, 2, 3, 255], [9, 9, 9, 255]);
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(1, 1), &Rgba([1, 2, 3, 255]));
        assert_eq!(image.get_pixel(2, 1), &Rgba([9, 9, 9, 255]));
    }

    // Tests exported images load back as the same grid
    // Verified by inverting the luma threshold comparison
    #[test]
    fn test_export_then_load() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("nested").join("grid.png");

        export_grid_as_png(&diagonal(), &path).expect("export succeeds");
        assert!(path.exists());
        assert_eq!(load_sample_grid(&path).expect("load succeeds"), diagonal());
    }

    // Tests dark opaque pixels are set while light or transparent ones are not
    // Verified by ignoring the alpha channel
    #[test]
    fn test_load_threshold_and_alpha() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("mixed.png");
        let mut image = RgbaImage::from_pixel(4, 1, Rgba(UNSET_COLOR));
        image.put_pixel(0, 0, Rgba(SET_COLOR));
        image.put_pixel(1, 0, Rgba([100, 100, 100, 255]));
        image.put_pixel(2, 0, Rgba([0, 0, 0, 0]));
        image.save(&path).expect("write image");

        let grid = load_sample_grid(&path).expect("load succeeds");
        assert_eq!(grid.to_vec(), vec![true, true, false, false]);

        let strict = load_grid(&path, 50).expect("load succeeds");
        assert_eq!(strict.to_vec(), vec![true, false, false, false]);
    }

    // Tests missing files report an image load error with the path
    // Verified by mapping load failures to file system errors
    #[test]
    fn test_load_missing_file() {
        let result = load_sample_grid(Path::new("definitely/not/here.png"));
        assert!(matches!(result, Err(AlgorithmError::ImageLoad { .. })));
    }
}
