use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use tracing::{debug, info};

use crate::{
	error::PixmemError,
	mem_codec,
	mem_codec::MemFormat,
	shared_types::ImageData,
};


fn require_file(source_file: &Path) -> Result<(), PixmemError> {
	match source_file.try_exists() {
		Ok(true) => Ok(()),
		Ok(false) => Err(PixmemError::FileNotFound { path: source_file.to_path_buf() }),
		Err(error) => Err(PixmemError::io(source_file, error)),
	}
}


/// Decode a PNG/JPEG into RGB888 pixels.
/// With `resize` the image is resampled to `width` x `height`, otherwise it must already match.
pub fn get_image(source_file: &Path, width: u32, height: u32, resize: bool) -> Result<ImageData<[u8; 3]>, PixmemError> {
	require_file(source_file)?;

	let mut image: DynamicImage = image::open(source_file)?;
	info!("Opened image {} ({}x{})", source_file.display(), image.width(), image.height());

	if resize && (image.width() != width || image.height() != height) {
		image = image.resize_exact(width, height, FilterType::CatmullRom);
		debug!("Resized to {}x{}", width, height);
	}

	if image.width() != width || image.height() != height {
		return Err(PixmemError::DimensionMismatch {
			expected_width: width,
			expected_height: height,
			actual: image.width() as usize * image.height() as usize,
		});
	}

	let rgb: RgbImage = image.into_rgb8();
	let pixels: Vec<[u8; 3]> = rgb.pixels().map(|pixel| pixel.0).collect();

	return ImageData::new(width, height, pixels);
}


/// Read a mem file holding exactly `width * height` values.
pub fn get_mem(source_file: &Path, format: MemFormat, width: u32, height: u32) -> Result<ImageData<u32>, PixmemError> {
	require_file(source_file)?;

	let file: File = File::open(source_file).map_err(|error| PixmemError::io(source_file, error))?;
	let values: Vec<u32> = mem_codec::read_mem(BufReader::new(file), source_file, format)?;
	debug!("Read {} values from {}", values.len(), source_file.display());

	return ImageData::new(width, height, values);
}
