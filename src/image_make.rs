use std::io::{Write, BufWriter};
use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::{
	error::PixmemError,
	mem_codec,
	mem_codec::MemFormat,
	shared_types::ImageData,
};


fn overwrite_blocked(target_path: &Path, overwrite: bool) -> Result<(), PixmemError> {
	if overwrite {
		return Ok(());
	}

	match target_path.try_exists() {
		Ok(true) => Err(PixmemError::OutputExists { path: target_path.to_path_buf() }),
		Ok(false) => Ok(()),
		Err(error) => Err(PixmemError::io(target_path, error)),
	}
}


fn create_target(target_path: &Path, overwrite: bool) -> Result<BufWriter<File>, PixmemError> {
	overwrite_blocked(target_path, overwrite)?;

	match File::create(target_path) {
		Ok(file) => Ok(BufWriter::new(file)),
		Err(error) => Err(PixmemError::io(target_path, error)),
	}
}


/// Write one mem line per pixel, returning the line count.
pub fn make_mem(target_path: &Path, data: &ImageData<u32>, format: MemFormat, overwrite: bool) -> Result<usize, PixmemError> {
	let mut buffer: BufWriter<File> = create_target(target_path, overwrite)?;

	let lines: usize = mem_codec::write_mem(&mut buffer, data.pixels(), format)
		.map_err(|error| PixmemError::io(target_path, error))?;

	debug!("Wrote {} lines to {}", lines, target_path.display());
	Ok(lines)
}


/// Write an 8-bit RGB PNG, returning the pixel count.
pub fn make_png(target_path: &Path, data: &ImageData<[u8; 3]>, overwrite: bool) -> Result<usize, PixmemError> {
	let mut buffer: BufWriter<File> = create_target(target_path, overwrite)?;

	let mut encoder = png::Encoder::new(&mut buffer, data.width(), data.height());
	encoder.set_color(png::ColorType::Rgb);
	encoder.set_depth(png::BitDepth::Eight);

	let working_pixels: Vec<u8> = data.pixels().iter().flatten().copied().collect();

	let mut writer = encoder.write_header()?;
	writer.write_image_data(&working_pixels)?;
	writer.finish()?;

	buffer.flush().map_err(|error| PixmemError::io(target_path, error))?;

	debug!("Wrote {}x{} PNG to {}", data.width(), data.height(), target_path.display());
	Ok(data.len())
}
