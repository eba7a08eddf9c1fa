use super::*;

pub(crate) const IMAGE_SIZE: u32 = 224;
pub(crate) const CHANNELS: usize = 3;
/// Flattened length of one preprocessed image, the network's input width.
pub(crate) const TENSOR_LEN: usize =
  (IMAGE_SIZE as usize) * (IMAGE_SIZE as usize) * CHANNELS;

pub(crate) fn decode_image(bytes: &[u8]) -> Result<DynamicImage, ClassifyError> {
  image::load_from_memory(bytes).map_err(ClassifyError::UnreadableImage)
}

/// Turns a decoded image of any size and color mode into the model's input
/// tensor: RGB, 224x224, f32 scaled to [0, 1], with a leading batch
/// dimension of 1.
pub(crate) fn preprocess(image: &DynamicImage) -> Array4<f32> {
  let rgb = image.to_rgb8();

  let resized = image::imageops::resize(
    &rgb,
    IMAGE_SIZE,
    IMAGE_SIZE,
    image::imageops::FilterType::Triangle,
  );

  Array4::from_shape_fn(
    (1, IMAGE_SIZE as usize, IMAGE_SIZE as usize, CHANNELS),
    |(_, y, x, c)| f32::from(resized[(x as u32, y as u32)][c]) / 255.0,
  )
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    image::{GrayImage, Luma, Rgb, RgbImage},
    std::io::Cursor,
  };

  #[test]
  fn preprocess_yields_fixed_shape_in_unit_range() {
    let image =
      DynamicImage::ImageRgb8(RgbImage::from_pixel(37, 91, Rgb([255, 128, 0])));

    let tensor = preprocess(&image);

    assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
    assert!(tensor.iter().all(|&value| (0.0..=1.0).contains(&value)));
  }

  #[test]
  fn preprocess_converts_grayscale_to_three_channels() {
    let image =
      DynamicImage::ImageLuma8(GrayImage::from_pixel(64, 64, Luma([200])));

    let tensor = preprocess(&image);

    assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
    assert!(tensor
      .iter()
      .all(|&value| (value - 200.0 / 255.0).abs() < 1e-6));
  }

  #[test]
  fn preprocess_is_deterministic() {
    let image = DynamicImage::ImageRgb8(RgbImage::from_fn(50, 40, |x, y| {
      Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }));

    assert_eq!(preprocess(&image), preprocess(&image));
  }

  #[test]
  fn decode_rejects_non_image_bytes() {
    let error = decode_image(b"definitely not a raster image").unwrap_err();

    assert!(matches!(error, ClassifyError::UnreadableImage(_)));
  }

  #[test]
  fn decode_reads_encoded_png_bytes() {
    let mut bytes = Vec::new();

    DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([0, 255, 0])))
      .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
      .unwrap();

    let decoded = decode_image(&bytes).unwrap();

    let tensor = preprocess(&decoded);

    assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
  }
}
