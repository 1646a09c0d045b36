//! Tests for pixel-center shape filling on the image surface

#[cfg(test)]
mod tests {
    use image::Rgb;
    use tilewall::render::surface::{ImageSurface, Surface, distance_to_segment};
    use tilewall::spatial::geometry::{Point, Rect};

    const WHITE: [u8; 3] = [255, 255, 255];
    const BLACK: [u8; 3] = [0, 0, 0];

    fn painted(surface: &ImageSurface, x: u32, y: u32) -> bool {
        *surface.image().get_pixel(x, y) == Rgb(WHITE)
    }

    // Tests a sharp rectangle covers exactly its pixels
    // Verified by painting the far edge inclusively
    #[test]
    fn test_fill_rect_sharp() {
        let mut surface = ImageSurface::blank(10, 10, BLACK);
        surface.fill_rect(&Rect::new(2.0, 2.0, 4.0, 4.0), 0.0, WHITE);
        assert!(painted(&surface, 2, 2));
        assert!(painted(&surface, 5, 5));
        assert!(!painted(&surface, 1, 1));
        assert!(!painted(&surface, 6, 6));
    }

    // Tests rounded corners leave the outer corner pixels untouched
    // Verified by ignoring the corner radius
    #[test]
    fn test_fill_rect_rounded() {
        let mut surface = ImageSurface::blank(10, 10, BLACK);
        surface.fill_rect(&Rect::new(0.0, 0.0, 10.0, 10.0), 5.0, WHITE);
        assert!(!painted(&surface, 0, 0));
        assert!(!painted(&surface, 9, 9));
        assert!(painted(&surface, 5, 5));
        assert!(painted(&surface, 5, 0));
    }

    // Tests shapes partly off the surface are clipped
    // Verified by removing the span clamp
    #[test]
    fn test_clipping() {
        let mut surface = ImageSurface::blank(4, 4, BLACK);
        surface.fill_rect(&Rect::new(-5.0, -5.0, 7.0, 7.0), 0.0, WHITE);
        surface.fill_ellipse(Point::new(10.0, 10.0), 10.0, WHITE);
        assert!(painted(&surface, 0, 0));
        assert!(painted(&surface, 3, 3));
        assert!(!painted(&surface, 3, 0));
    }

    // Tests circles paint pixels whose centers are within the radius
    // Verified by testing pixel corners instead of centers
    #[test]
    fn test_fill_ellipse() {
        let mut surface = ImageSurface::blank(10, 10, BLACK);
        surface.fill_ellipse(Point::new(5.0, 5.0), 2.0, WHITE);
        assert!(painted(&surface, 5, 5));
        assert!(painted(&surface, 4, 4));
        assert!(!painted(&surface, 7, 5));
        assert!(!painted(&surface, 2, 2));
    }

    // Tests lines are stroked to half their width on each side
    // Verified by using the full width as the distance threshold
    #[test]
    fn test_draw_line() {
        let mut surface = ImageSurface::blank(10, 10, BLACK);
        surface.draw_line(Point::new(0.0, 5.0), Point::new(10.0, 5.0), 2.0, WHITE);
        assert!(painted(&surface, 3, 4));
        assert!(painted(&surface, 3, 5));
        assert!(!painted(&surface, 3, 3));
        assert!(!painted(&surface, 3, 6));
    }

    // Tests segment distance clamps to the endpoints
    // Verified by measuring distance to the infinite line
    #[test]
    fn test_distance_to_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!((distance_to_segment(Point::new(3.0, 5.0), a, b) - 5.0).abs() < 1e-9);
        assert!((distance_to_segment(Point::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-9);
        assert!((distance_to_segment(Point::new(3.0, 4.0), a, a) - 5.0).abs() < 1e-9);
    }

    // Tests downsampling averages covered and uncovered pixels
    // Verified by sampling the nearest pixel instead of averaging
    #[test]
    fn test_resized_averages() {
        let mut surface = ImageSurface::blank(2, 2, BLACK);
        surface.fill_rect(&Rect::new(0.0, 0.0, 1.0, 2.0), 0.0, WHITE);
        let small = surface.resized(1, 1);
        let value = small.image().get_pixel(0, 0).0[0];
        assert!((120..=135).contains(&value), "averaged value {value}");
    }
}
