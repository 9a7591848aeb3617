use std::io::{BufRead, Write};
use std::num::ParseIntError;
use std::path::Path;

use crate::error::PixmemError;

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum MemFormat {
	/// RGB565, 4 hex digits
	Hex4,
	/// 3-bit color, 1 hex digit
	Hex1,
	/// 3-bit color, 3 binary digits
	Bin3,
}

impl MemFormat {
	pub fn radix(&self) -> u32 {
		match self {
			MemFormat::Hex4 | MemFormat::Hex1 => 16,
			MemFormat::Bin3 => 2,
		}
	}

	pub fn digits(&self) -> usize {
		match self {
			MemFormat::Hex4 => 4,
			MemFormat::Hex1 => 1,
			MemFormat::Bin3 => 3,
		}
	}

	pub fn max_value(&self) -> u32 {
		match self {
			MemFormat::Hex4 => 0xFFFF,
			MemFormat::Hex1 | MemFormat::Bin3 => 0x7,
		}
	}
}


pub fn encode_mem_line(value: u32, format: MemFormat) -> String {
	let width: usize = format.digits();

	match format {
		MemFormat::Hex4 | MemFormat::Hex1 => format!("{:0width$x}\n", value, width = width),
		MemFormat::Bin3 => format!("{:0width$b}\n", value, width = width),
	}
}


/// `Ok(None)` for blank lines, which carry no value.
pub fn decode_mem_line(line: &str, radix: u32) -> Result<Option<u32>, ParseIntError> {
	let token: &str = line.trim();

	if token.is_empty() {
		return Ok(None);
	}

	u32::from_str_radix(token, radix).map(Some)
}


pub fn write_mem<W: Write>(writer: &mut W, values: &[u32], format: MemFormat) -> std::io::Result<usize> {
	for value in values {
		writer.write_all(encode_mem_line(*value, format).as_bytes())?;
	}

	writer.flush()?;
	Ok(values.len())
}


/// Decode every non-blank line. `source` is only used to label errors.
pub fn read_mem<R: BufRead>(reader: R, source: &Path, format: MemFormat) -> Result<Vec<u32>, PixmemError> {
	let mut values: Vec<u32> = Vec::new();

	for (index, line) in reader.lines().enumerate() {
		let line: String = line.map_err(|error| PixmemError::io(source, error))?;

		let value: u32 = match decode_mem_line(&line, format.radix()) {
			Ok(Some(value)) => value,
			Ok(None) => continue,

			Err(error) => {
				return Err(PixmemError::Parse {
					path: source.to_path_buf(),
					line: index + 1,
					text: line.trim().to_string(),
					source: error,
				});
			},
		};

		if value > format.max_value() {
			return Err(PixmemError::ValueOutOfRange {
				path: source.to_path_buf(),
				line: index + 1,
				value: value,
				max: format.max_value(),
			});
		}

		values.push(value);
	}

	Ok(values)
}
