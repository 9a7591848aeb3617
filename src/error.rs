use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PixmemError {
	#[error("could not locate '{}'", path.display())]
	FileNotFound { path: PathBuf },

	#[error("i/o error on '{}': {source}", path.display())]
	Io { path: PathBuf, source: io::Error },

	#[error("'{}' line {line}: could not parse '{text}' ({source})", path.display())]
	Parse { path: PathBuf, line: usize, text: String, source: ParseIntError },

	#[error("'{}' line {line}: value {value:#x} exceeds format maximum {max:#x}", path.display())]
	ValueOutOfRange { path: PathBuf, line: usize, value: u32, max: u32 },

	#[error("expected {expected_width}x{expected_height} ({} pixels), found {actual}", *expected_width as usize * *expected_height as usize)]
	DimensionMismatch { expected_width: u32, expected_height: u32, actual: usize },

	#[error("'{}' already exists, use -w to allow overwriting files", path.display())]
	OutputExists { path: PathBuf },

	#[error(transparent)]
	Image(#[from] image::ImageError),

	#[error(transparent)]
	Png(#[from] png::EncodingError),
}

impl PixmemError {
	pub fn io(path: impl Into<PathBuf>, source: io::Error) -> PixmemError {
		PixmemError::Io { path: path.into(), source }
	}
}
