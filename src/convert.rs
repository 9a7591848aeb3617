use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
	bit_depth,
	error::PixmemError,
	image_get,
	image_make,
	mem_compare,
	mem_compare::Comparison,
	mem_codec::MemFormat,
	shared_types::{ConversionMode, ImageData, Parameters},
};

#[derive(Debug, PartialEq)]
pub enum Outcome {
	Written { output_path: PathBuf, count: usize },
	Compared(Comparison),
}


pub fn process(parameters: &Parameters) -> Result<Outcome, PixmemError> {
	let source: &Path = parameters.input_path.as_path();
	let target: &Path = parameters.output_path.as_path();
	let (width, height): (u32, u32) = (parameters.width, parameters.height);

	let count: usize = match parameters.mode {
		ConversionMode::ImageToRgb565 => {
			let image: ImageData<[u8; 3]> = image_get::get_image(source, width, height, parameters.resize)?;
			let packed: ImageData<u32> = image.map(|&[r, g, b]| bit_depth::rgb888_to_rgb565(r, g, b) as u32);
			info!("Packed {} pixels to RGB565", packed.len());

			image_make::make_mem(target, &packed, MemFormat::Hex4, parameters.overwrite)?
		},

		ConversionMode::ImageTo3Bit => {
			let image: ImageData<[u8; 3]> = image_get::get_image(source, width, height, parameters.resize)?;
			let reduced: ImageData<u32> = image.map(|&[r, g, b]| bit_depth::rgb888_to_3bit_threshold(r, g, b) as u32);
			info!("Reduced {} pixels to 3-bit by threshold", reduced.len());

			image_make::make_mem(target, &reduced, MemFormat::Bin3, parameters.overwrite)?
		},

		ConversionMode::Rgb565To3Bit => {
			let packed: ImageData<u32> = image_get::get_mem(source, MemFormat::Hex4, width, height)?;
			let reduced: ImageData<u32> = packed.map(|&pixel| bit_depth::rgb565_to_rgb3bit(pixel as u16) as u32);
			info!("Reduced {} RGB565 pixels to 3-bit by bit extraction", reduced.len());

			image_make::make_mem(target, &reduced, MemFormat::Hex1, parameters.overwrite)?
		},

		ConversionMode::Rgb565ToImage => {
			let packed: ImageData<u32> = image_get::get_mem(source, MemFormat::Hex4, width, height)?;
			let image: ImageData<[u8; 3]> = packed.map(|&pixel| {
				let (r, g, b) = bit_depth::rgb565_to_rgb888(pixel as u16);
				[r, g, b]
			});
			info!("Expanded {} RGB565 pixels to RGB888", image.len());

			image_make::make_png(target, &image, parameters.overwrite)?
		},

		ConversionMode::Compare => {
			let comparison: Comparison = mem_compare::compare(source, &parameters.reference_path)?;
			return Ok(Outcome::Compared(comparison));
		},
	};

	Ok(Outcome::Written { output_path: parameters.output_path.clone(), count: count })
}


#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use image::RgbImage;

	fn scratch_dir(name: &str) -> PathBuf {
		let path: PathBuf = std::env::temp_dir().join(format!("pixmem-convert-{}-{}", name, std::process::id()));
		fs::create_dir_all(&path).unwrap();
		path
	}

	fn parameters(mode: ConversionMode, input_path: PathBuf, output_path: PathBuf, width: u32, height: u32) -> Parameters {
		Parameters {
			input_path,
			output_path,
			reference_path: PathBuf::new(),
			width,
			height,
			mode,
			resize: false,
			verbose: false,
			overwrite: true,
		}
	}

	fn red_green_png(directory: &PathBuf) -> PathBuf {
		let path: PathBuf = directory.join("pair.png");
		let mut source: RgbImage = RgbImage::new(2, 1);
		source.put_pixel(0, 0, image::Rgb([255, 0, 0]));
		source.put_pixel(1, 0, image::Rgb([0, 255, 0]));
		source.save(&path).unwrap();
		path
	}

	#[test]
	fn image_to_rgb565_mem() {
		let directory: PathBuf = scratch_dir("rgb565");
		let output: PathBuf = directory.join("pair.mem");
		let run: Parameters = parameters(ConversionMode::ImageToRgb565, red_green_png(&directory), output.clone(), 2, 1);

		assert_eq!(process(&run).unwrap(), Outcome::Written { output_path: output.clone(), count: 2 });
		assert_eq!(fs::read_to_string(&output).unwrap(), "f800\n07e0\n");
	}

	#[test]
	fn image_to_threshold_3bit_mem() {
		let directory: PathBuf = scratch_dir("3bit");
		let output: PathBuf = directory.join("pair.mem");
		let run: Parameters = parameters(ConversionMode::ImageTo3Bit, red_green_png(&directory), output.clone(), 2, 1);

		process(&run).unwrap();
		assert_eq!(fs::read_to_string(&output).unwrap(), "100\n010\n");
	}

	#[test]
	fn rgb565_mem_to_3bit_mem() {
		let directory: PathBuf = scratch_dir("565to3bit");
		let input: PathBuf = directory.join("image.txt");
		let output: PathBuf = directory.join("image_3bit.mem");
		fs::write(&input, "F800\n07E0\n001F\nffff\n").unwrap();

		let run: Parameters = parameters(ConversionMode::Rgb565To3Bit, input, output.clone(), 2, 2);
		assert_eq!(process(&run).unwrap(), Outcome::Written { output_path: output.clone(), count: 4 });
		assert_eq!(fs::read_to_string(&output).unwrap(), "4\n2\n1\n7\n");
	}

	#[test]
	fn rgb565_mem_to_png() {
		let directory: PathBuf = scratch_dir("image");
		let input: PathBuf = directory.join("captured_output.mem");
		let output: PathBuf = directory.join("output_image.png");
		fs::write(&input, "f800\n07e0\n").unwrap();

		let run: Parameters = parameters(ConversionMode::Rgb565ToImage, input, output.clone(), 2, 1);
		process(&run).unwrap();

		let decoded: RgbImage = image::open(&output).unwrap().into_rgb8();
		assert_eq!(decoded.get_pixel(0, 0).0, [248, 0, 0]);
		assert_eq!(decoded.get_pixel(1, 0).0, [0, 252, 0]);
	}

	#[test]
	fn short_mem_writes_nothing() {
		let directory: PathBuf = scratch_dir("short");
		let input: PathBuf = directory.join("short.mem");
		let output: PathBuf = directory.join("never.png");
		fs::write(&input, "f800\n").unwrap();

		let run: Parameters = parameters(ConversionMode::Rgb565ToImage, input, output.clone(), 2, 1);
		assert!(matches!(process(&run), Err(PixmemError::DimensionMismatch { actual: 1, .. })));
		assert!(!output.exists());
	}

	#[test]
	fn bad_token_aborts_the_pass() {
		let directory: PathBuf = scratch_dir("parse");
		let input: PathBuf = directory.join("bad.mem");
		let output: PathBuf = directory.join("bad_3bit.mem");
		fs::write(&input, "f800\nzz\n").unwrap();

		let run: Parameters = parameters(ConversionMode::Rgb565To3Bit, input, output.clone(), 2, 1);
		assert!(matches!(process(&run), Err(PixmemError::Parse { line: 2, .. })));
		assert!(!output.exists());
	}

	#[test]
	fn compare_mode_reports_mismatch() {
		let directory: PathBuf = scratch_dir("compare");
		let left: PathBuf = directory.join("image.mem");
		let right: PathBuf = directory.join("captured_output.mem");
		fs::write(&left, "f800\n07e0\n").unwrap();
		fs::write(&right, "F800\n07E1\n").unwrap();

		let mut run: Parameters = parameters(ConversionMode::Compare, left, PathBuf::new(), 2, 1);
		run.reference_path = right;

		assert_eq!(
			process(&run).unwrap(),
			Outcome::Compared(Comparison::Mismatch {
				index: 1,
				left: Some(String::from("07e0")),
				right: Some(String::from("07e1")),
			}),
		);
	}
}
