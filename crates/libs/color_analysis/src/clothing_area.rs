use image::RgbImage;

/// Narrows an image down to the garment before its colors are extracted.
pub trait ClothingAreaDetector: Send + Sync {
    fn identify_clothing_area(&self, image: RgbImage) -> RgbImage;
}

/// Treats the whole photo as clothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct WholeImage;

impl ClothingAreaDetector for WholeImage {
    fn identify_clothing_area(&self, image: RgbImage) -> RgbImage {
        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_whole_image_is_passthrough() {
        let image = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8 * 60, y as u8 * 80, 7]));
        let area = WholeImage.identify_clothing_area(image.clone());
        assert_eq!(area, image);
    }
}
