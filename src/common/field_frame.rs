use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};

/// A captured frame handed to one analysis call.
#[derive(Debug, Clone, Default)]
pub struct FieldFrame {
    pub image: RgbImage,
    pub img_width: u32,
    pub img_height: u32,
}

impl std::ops::Deref for FieldFrame {
    type Target = RgbImage;

    fn deref(&self) -> &Self::Target {
        &self.image
    }
}

impl From<DynamicImage> for FieldFrame {
    fn from(image: DynamicImage) -> Self {
        Self::new(image.to_rgb8())
    }
}

impl From<GrayImage> for FieldFrame {
    fn from(image: GrayImage) -> Self {
        Self::new(DynamicImage::from(image).to_rgb8())
    }
}

impl From<RgbImage> for FieldFrame {
    fn from(image: RgbImage) -> Self {
        Self::new(image)
    }
}

impl From<RgbaImage> for FieldFrame {
    fn from(image: RgbaImage) -> Self {
        Self::new(DynamicImage::from(image).to_rgb8())
    }
}

impl FieldFrame {
    pub fn new(image: RgbImage) -> Self {
        let (img_width, img_height) = image.dimensions();
        Self {
            image,
            img_width,
            img_height,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.img_width, self.img_height)
    }

    pub fn width(&self) -> u32 {
        self.img_width
    }

    pub fn height(&self) -> u32 {
        self.img_height
    }

    pub fn is_empty(&self) -> bool {
        self.img_width == 0 || self.img_height == 0
    }

    pub fn into_rgb8(self) -> RgbImage {
        self.image
    }
}
