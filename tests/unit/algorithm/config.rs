//! Tests for generation parameter validation and scaling

#[cfg(test)]
mod tests {
    use tilewall::WallpaperError;
    use tilewall::algorithm::config::{GenerationConfig, Mode};

    fn rejected_parameter(config: &GenerationConfig) -> &'static str {
        match config.validate() {
            Err(WallpaperError::InvalidParameter { parameter, .. }) => parameter,
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
    }

    // Tests the default configuration is valid
    // Verified by setting a zero default supersample factor
    #[test]
    fn test_default_is_valid() {
        assert!(GenerationConfig::default().validate().is_ok());
    }

    // Tests non-positive dimensions are rejected
    // Verified by removing the width check
    #[test]
    fn test_zero_dimensions() {
        let config = GenerationConfig {
            width: 0,
            ..GenerationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), "width");

        let config = GenerationConfig {
            height: 0,
            ..GenerationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), "height");
    }

    // Tests depth must be positive and above the floor
    // Verified by allowing min_depth equal to max_depth
    #[test]
    fn test_depth_bounds() {
        let config = GenerationConfig {
            max_depth: 0,
            min_depth: 0,
            ..GenerationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), "max_depth");

        let config = GenerationConfig {
            max_depth: 3,
            min_depth: 3,
            ..GenerationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), "min_depth");

        let config = GenerationConfig {
            max_depth: 40,
            min_depth: 0,
            ..GenerationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), "max_depth");
    }

    // Tests probability and palette checks
    // Verified by accepting an empty palette in fill modes
    #[test]
    fn test_fill_parameters() {
        let config = GenerationConfig {
            fill_probability: 1.5,
            ..GenerationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), "fill_probability");

        let config = GenerationConfig {
            palette: Vec::new(),
            mode: Mode::QuadrantFillWithMerge,
            ..GenerationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), "palette");

        let config = GenerationConfig {
            palette: Vec::new(),
            mode: Mode::LineGrid,
            ..GenerationConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    // Tests negative lengths and bad ratios are rejected
    // Verified by skipping the ratio range check
    #[test]
    fn test_lengths_and_ratios() {
        let config = GenerationConfig {
            inner_gap: -1.0,
            ..GenerationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), "inner_gap");

        let config = GenerationConfig {
            split_ratios: vec![0.5, 1.0],
            ..GenerationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), "split_ratios");

        let config = GenerationConfig {
            supersample: 0,
            ..GenerationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), "supersample");
    }

    // Tests a bar and gap that consume the screen are rejected
    // Verified by skipping the container check in validate
    #[test]
    fn test_empty_container() {
        let config = GenerationConfig {
            width: 100,
            height: 60,
            bar_height: 40.0,
            outer_gap: 12.0,
            ..GenerationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), "outer_gap");
    }

    // Tests scaling touches lengths but not dimensions or counts
    // Verified by scaling the output width
    #[test]
    fn test_scaled_lengths() {
        let config = GenerationConfig::default();
        let scaled = config.scaled_lengths(3.0);
        assert_eq!(scaled.width, config.width);
        assert_eq!(scaled.max_depth, config.max_depth);
        assert!((scaled.inner_gap - config.inner_gap * 3.0).abs() < 1e-9);
        assert!((scaled.corner_radius - config.corner_radius * 3.0).abs() < 1e-9);
    }

    // Tests levels count the distance to the floor
    // Verified by returning max_depth alone
    #[test]
    fn test_levels() {
        let config = GenerationConfig {
            max_depth: 4,
            min_depth: 2,
            ..GenerationConfig::default()
        };
        assert_eq!(config.levels(), 2);
        assert_eq!(Mode::QuadrantFillWithMerge.label(), "quadrant-fill-with-merge");
        assert!(Mode::BinaryFill.is_fill());
        assert!(!Mode::BspLines.is_fill());
    }

    // Tests dense uniform lattices are refused before synthesis
    // Verified by removing the lattice point limit from validate
    #[test]
    fn test_dense_lattice_rejected() {
        let config = GenerationConfig {
            width: 400,
            height: 300,
            grid_spacing: 0.05,
            mode: Mode::UniformDotLattice,
            ..GenerationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), "grid_spacing");

        let config = GenerationConfig {
            width: 3840,
            height: 2160,
            grid_spacing: 1e-4,
            mode: Mode::UniformDotLattice,
            ..GenerationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), "grid_spacing");

        let config = GenerationConfig {
            width: 3840,
            height: 2160,
            grid_spacing: 18.0,
            mode: Mode::UniformDotLattice,
            ..GenerationConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    // Tests line modes refuse a separation wider than the container
    // Verified by validating the separation only against the width
    #[test]
    fn test_separation_wider_than_container() {
        let config = GenerationConfig {
            width: 400,
            height: 100,
            bar_height: 0.0,
            outer_gap: 10.0,
            min_separation: 90.0,
            mode: Mode::BspLines,
            ..GenerationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), "min_separation");

        let config = GenerationConfig {
            mode: Mode::QuadrantFill,
            ..config
        };
        assert!(config.validate().is_ok());
    }
}
