use std::path::PathBuf;

use crate::error::PixmemError;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

#[derive(Debug, Clone)]
pub struct Parameters {
	pub input_path: PathBuf,
	pub output_path: PathBuf,
	pub reference_path: PathBuf,
	pub width: u32,
	pub height: u32,
	pub mode: ConversionMode,
	pub resize: bool,
	pub verbose: bool,
	pub overwrite: bool,
}

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum ConversionMode {
	/// PNG/JPEG to 4-digit hex RGB565 mem
	ImageToRgb565,
	/// PNG/JPEG to 3-digit binary mem, threshold reducer
	ImageTo3Bit,
	/// RGB565 mem to 1-digit hex mem, bit-extraction reducer
	Rgb565To3Bit,
	/// RGB565 mem to RGB PNG
	Rgb565ToImage,
	/// Line-by-line diff of two mem files
	Compare,
}

impl ConversionMode {
	pub fn from_name(name: &str) -> Option<ConversionMode> {
		match name {
			"rgb565" => Some(ConversionMode::ImageToRgb565),
			"3bit" => Some(ConversionMode::ImageTo3Bit),
			"565to3bit" => Some(ConversionMode::Rgb565To3Bit),
			"image" => Some(ConversionMode::Rgb565ToImage),
			"compare" => Some(ConversionMode::Compare),
			_ => None,
		}
	}

	/// Output path derived from the input stem when -o is not given.
	pub fn default_output(&self, input_path: &PathBuf) -> PathBuf {
		let stem: String = match input_path.file_stem() {
			Some(stem) => stem.to_string_lossy().into_owned(),
			None => String::from("image"),
		};

		let file_name: String = match self {
			ConversionMode::ImageToRgb565 | ConversionMode::ImageTo3Bit => format!("{}.mem", stem),
			ConversionMode::Rgb565To3Bit => format!("{}_3bit.mem", stem),
			ConversionMode::Rgb565ToImage => format!("{}.png", stem),
			ConversionMode::Compare => return PathBuf::new(),
		};

		return input_path.with_file_name(file_name);
	}
}


/// Row-major pixel buffer. `pixels.len() == width * height` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData<P> {
	width: u32,
	height: u32,
	pixels: Vec<P>,
}

impl<P> ImageData<P> {
	pub fn new(width: u32, height: u32, pixels: Vec<P>) -> Result<ImageData<P>, PixmemError> {
		if pixels.len() != width as usize * height as usize {
			return Err(PixmemError::DimensionMismatch {
				expected_width: width,
				expected_height: height,
				actual: pixels.len(),
			});
		}

		Ok(ImageData { width, height, pixels })
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn pixels(&self) -> &[P] {
		&self.pixels
	}

	pub fn len(&self) -> usize {
		self.pixels.len()
	}

	/// Convert every pixel, keeping dimensions and order.
	pub fn map<Q, F: Fn(&P) -> Q>(&self, convert: F) -> ImageData<Q> {
		ImageData {
			width: self.width,
			height: self.height,
			pixels: self.pixels.iter().map(convert).collect(),
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn image_data_checks_pixel_count() {
		let data: ImageData<u16> = ImageData::new(2, 2, vec![0, 1, 2, 3]).unwrap();
		assert_eq!(data.len(), 4);
		assert_eq!(data.pixels(), &[0, 1, 2, 3]);

		match ImageData::new(2, 2, vec![0u16; 3]) {
			Err(PixmemError::DimensionMismatch { expected_width: 2, expected_height: 2, actual: 3 }) => (),
			other => panic!("unexpected result: {:?}", other),
		}

		assert!(ImageData::new(1, 1, vec![0u16; 2]).is_err());
	}

	#[test]
	fn map_keeps_dimensions_and_order() {
		let data: ImageData<u8> = ImageData::new(3, 1, vec![1, 2, 3]).unwrap();
		let doubled: ImageData<u16> = data.map(|&value| value as u16 * 2);

		assert_eq!(doubled.width(), 3);
		assert_eq!(doubled.height(), 1);
		assert_eq!(doubled.pixels(), &[2, 4, 6]);
	}

	#[test]
	fn mode_names_and_default_outputs() {
		assert_eq!(ConversionMode::from_name("rgb565"), Some(ConversionMode::ImageToRgb565));
		assert_eq!(ConversionMode::from_name("565to3bit"), Some(ConversionMode::Rgb565To3Bit));
		assert_eq!(ConversionMode::from_name("jpeg"), None);

		let input: PathBuf = PathBuf::from("assets/colors.jpg");
		assert_eq!(ConversionMode::ImageToRgb565.default_output(&input), PathBuf::from("assets/colors.mem"));
		assert_eq!(ConversionMode::ImageTo3Bit.default_output(&input), PathBuf::from("assets/colors.mem"));

		let mem: PathBuf = PathBuf::from("image.mem");
		assert_eq!(ConversionMode::Rgb565To3Bit.default_output(&mem), PathBuf::from("image_3bit.mem"));
		assert_eq!(ConversionMode::Rgb565ToImage.default_output(&mem), PathBuf::from("image.png"));
	}
}
