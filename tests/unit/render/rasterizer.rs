//! Tests for command application and supersampled rendering

#[cfg(test)]
mod tests {
    use image::Rgb;
    use tilewall::WallpaperError;
    use tilewall::algorithm::commands::DrawCommand;
    use tilewall::render::Rasterizer;
    use tilewall::render::rasterizer::apply;
    use tilewall::render::surface::ImageSurface;
    use tilewall::spatial::geometry::Rect;

    const BACKGROUND: [u8; 3] = [10, 20, 30];

    // Tests an empty command list yields a background-only image
    // Verified by skipping the background fill
    #[test]
    fn test_empty_render() {
        let image = Rasterizer::new(8, 6, 3, BACKGROUND).render(&[]).unwrap();
        assert_eq!(image.dimensions(), (8, 6));
        assert!(image.pixels().all(|p| *p == Rgb(BACKGROUND)));
    }

    // Tests oversize surfaces are refused before allocation
    // Verified by removing the pixel limit check
    #[test]
    fn test_surface_too_large() {
        let result = Rasterizer::new(16_384, 16_384, 2, BACKGROUND).render(&[]);
        match result {
            Err(WallpaperError::SurfaceTooLarge { width, height, .. }) => {
                assert_eq!((width, height), (32_768, 32_768));
            }
            _ => unreachable!("Expected SurfaceTooLarge error"),
        }
    }

    // Tests the supersampling factor never drops below one
    // Verified by storing the factor unclamped
    #[test]
    fn test_supersample_floor() {
        let rasterizer = Rasterizer::new(100, 50, 0, BACKGROUND);
        assert_eq!(rasterizer.supersample(), 1);
        assert_eq!(rasterizer.surface_dimensions(), (100, 50));
        assert_eq!(
            Rasterizer::new(100, 50, 4, BACKGROUND).surface_dimensions(),
            (400, 200)
        );
    }

    // Tests commands are applied in list order
    // Verified by applying commands in reverse
    #[test]
    fn test_apply_order() {
        let mut surface = ImageSurface::blank(4, 4, BACKGROUND);
        let commands = [
            DrawCommand::filled_rect(Rect::new(0.0, 0.0, 4.0, 4.0), [255, 0, 0], 0.0).unwrap(),
            DrawCommand::filled_rect(Rect::new(0.0, 0.0, 2.0, 2.0), [0, 0, 255], 0.0).unwrap(),
        ];
        apply(&mut surface, &commands);
        assert_eq!(*surface.image().get_pixel(0, 0), Rgb([0, 0, 255]));
        assert_eq!(*surface.image().get_pixel(3, 3), Rgb([255, 0, 0]));
    }

    // Tests a supersampled rectangle aligned to output pixels stays solid
    // Verified by downsampling with nearest-neighbour filtering
    #[test]
    fn test_supersampled_aligned_rect() {
        let command =
            DrawCommand::filled_rect(Rect::new(0.0, 0.0, 8.0, 8.0), [255, 255, 255], 0.0)
                .unwrap();
        let image = Rasterizer::new(4, 4, 4, [0, 0, 0])
            .render(&[command])
            .unwrap();
        assert!(image.get_pixel(0, 0).0.iter().all(|&c| c >= 250));
        assert!(image.get_pixel(1, 1).0.iter().all(|&c| c >= 250));
        assert!(image.get_pixel(2, 2).0.iter().all(|&c| c <= 5));
    }
}
