use std::env;
use std::process::ExitCode;
use std::time::Instant;

use tracing::level_filters::LevelFilter;

pub mod error;
pub mod shared_types;
pub mod param_validator;
pub mod bit_depth;
pub mod mem_codec;
pub mod mem_compare;
pub mod image_get;
pub mod image_make;
pub mod convert;

use crate::convert::Outcome;
use crate::mem_compare::Comparison;
use crate::shared_types::Parameters;


pub fn main() -> ExitCode {
	let args: Vec<String> = env::args().collect();

	// At a minimum, will need 5 arguments ('pixmem', '-i', file name, '-m', mode)
	if args.len() < 5 {
		help_message();
		return ExitCode::SUCCESS;
	}

	let parameters: Parameters = match param_validator::validate(&args) {
		Some(parameters) => parameters,
		None => {
			println!("Call 'pixmem' by itself for help.");
			return ExitCode::FAILURE;
		},
	};

	let level: LevelFilter = if parameters.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
	tracing_subscriber::fmt().with_max_level(level).init();

	if parameters.verbose {
		println!("Processing '{}'", parameters.input_path.display());
	}

	println!("Working...");
	let instant = Instant::now();

	match convert::process(&parameters) {
		Ok(Outcome::Written { output_path, count }) => {
			println!("Wrote {} entries to '{}' in {}ms.", count, output_path.display(), instant.elapsed().as_millis());
			ExitCode::SUCCESS
		},

		Ok(Outcome::Compared(Comparison::Identical)) => {
			println!("The files are identical.");
			ExitCode::SUCCESS
		},

		Ok(Outcome::Compared(Comparison::Mismatch { index, left, right })) => {
			println!("The files are different.");
			println!(
				"Mismatch at line {}: {} != {}",
				index,
				left.as_deref().unwrap_or("<end of file>"),
				right.as_deref().unwrap_or("<end of file>"),
			);
			ExitCode::FAILURE
		},

		Err(error) => {
			println!("Error: {}", error);
			ExitCode::FAILURE
		},
	}
}


pub fn help_message() {
	println!();
	println!("Tool for converting images to and from FPGA memory initialization files.");
	println!("Handles RGB888, RGB565 and 3-bit color as PNG/JPEG images or .mem text files.");
	println!();
	println!("Usage:");
	println!("    pixmem -i <input path> -m <mode> [-o <output path>] [-d <W>x<H>] [-s] [-r <reference path>] [-w] [-l]");
	println!();
	println!("Modes:");
	println!("    rgb565     PNG/JPEG image to RGB565 .mem (4 hex digits per line)");
	println!("    3bit       PNG/JPEG image to 3-bit .mem (3 binary digits per line, channel > 127)");
	println!("    565to3bit  RGB565 .mem to 3-bit .mem (1 hex digit per line, top bit of each field)");
	println!("    image      RGB565 .mem to PNG image");
	println!("    compare    Compare input .mem against -r <reference path> line by line");
	println!();
	println!("Available parameters:");
	println!("    -i   or -input      <path>     Set the input file");
	println!("    -o   or -output     <path>     Set the output file, defaults to the input name with a new extension");
	println!("    -m   or -mode       <mode>     Select the conversion");
	println!("    -d   or -dimensions <W>x<H>    Image dimensions, defaults to 640x480");
	println!("    -s   or -scale                 Resize input images to the dimensions instead of rejecting them");
	println!("    -r   or -reference  <path>     Second file for compare mode");
	println!("    -w   or -overwrite             Overwrite pre-existing files");
	println!("    -l   or -list                  Print progress details to the console");
	println!();
}
