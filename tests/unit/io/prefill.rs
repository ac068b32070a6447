//! Tests for loading starting fields from prefill images

#[cfg(test)]
mod tests {
    use convchain::algorithm::executor::Dimensions;
    use convchain::io::error::AlgorithmError;
    use convchain::io::image::export_grid_as_png;
    use convchain::io::prefill::{PrefillData, prefill_path};
    use convchain::spatial::BinaryGrid;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_prefill(dir: &Path) -> (PathBuf, BinaryGrid) {
        let grid = BinaryGrid::from_fn(5, 3, |x, y| (x + y) % 3 == 0).expect("valid grid");
        let path = dir.join("room_pre.png");
        export_grid_as_png(&grid, &path).expect("export succeeds");
        (path, grid)
    }

    // Tests prefill images sit next to their sample
    // Verified by using the output suffix
    #[test]
    fn test_prefill_path() {
        assert_eq!(
            prefill_path(Path::new("maps/room.png")),
            PathBuf::from("maps/room_pre.png")
        );
        assert_eq!(prefill_path(Path::new("room.png")), PathBuf::from("room_pre.png"));
    }

    // Tests a prefill decodes to the field it was exported from
    // Verified by initializing the field from noise instead
    #[test]
    fn test_from_png() {
        let temp_dir = TempDir::new().expect("temp dir");
        let (path, grid) = write_prefill(temp_dir.path());

        let prefill = PrefillData::from_png(&path, None).expect("load succeeds");
        assert_eq!(prefill.dimensions(), Dimensions::new(5, 3));
        assert_eq!(prefill.source, path);
        assert_eq!(prefill.into_field().grid(), &grid);
    }

    // Tests the prefill must match the requested result size
    // Verified by removing the dimension check
    #[test]
    fn test_from_png_size_mismatch() {
        let temp_dir = TempDir::new().expect("temp dir");
        let (path, _) = write_prefill(temp_dir.path());

        assert!(PrefillData::from_png(&path, Some(Dimensions::new(5, 3))).is_ok());
        assert!(matches!(
            PrefillData::from_png(&path, Some(Dimensions::new(3, 5))),
            Err(AlgorithmError::InvalidSourceData { .. })
        ));
    }

    // Tests a missing prefill reports a load error
    // Verified by returning an empty field for missing files
    #[test]
    fn test_missing_prefill() {
        let temp_dir = TempDir::new().expect("temp dir");
        let result = PrefillData::from_png(&temp_dir.path().join("absent_pre.png"), None);
        assert!(matches!(result, Err(AlgorithmError::ImageLoad { .. })));
    }
}
