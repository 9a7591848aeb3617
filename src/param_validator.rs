use std::path::PathBuf;

use crate::shared_types::{
	ConversionMode,
	Parameters,
	DEFAULT_WIDTH,
	DEFAULT_HEIGHT,
};

enum ArgumentType {
	NONE,
	INPUT,
	OUTPUT,
	MODE,
	DIMENSIONS,
	REFERENCE,
}


/// Parse `<width>x<height>`, both non-zero.
pub fn parse_dimensions(text: &str) -> Option<(u32, u32)> {
	let lowered: String = text.to_lowercase();
	let (width, height) = lowered.split_once('x')?;

	match (width.trim().parse::<u32>(), height.trim().parse::<u32>()) {
		(Ok(width), Ok(height)) if width > 0 && height > 0 => Some((width, height)),
		_ => None,
	}
}


pub fn validate(args: &[String]) -> Option<Parameters> {
	let mut input_path: &str = "";
	let mut output_path: &str = "";
	let mut reference_path: &str = "";
	let mut mode: Option<ConversionMode> = None;
	let mut width: u32 = DEFAULT_WIDTH;
	let mut height: u32 = DEFAULT_HEIGHT;
	let mut resize: bool = false;
	let mut verbose: bool = false;
	let mut overwrite: bool = false;

	let mut next_arg: ArgumentType = ArgumentType::NONE;

	// Skip executable name
	for argument in args.iter().skip(1) {
		match next_arg {
			ArgumentType::INPUT => {
				input_path = argument.as_str();
				next_arg = ArgumentType::NONE;
				continue;
			},

			ArgumentType::OUTPUT => {
				output_path = argument.as_str();
				next_arg = ArgumentType::NONE;
				continue;
			},

			ArgumentType::REFERENCE => {
				reference_path = argument.as_str();
				next_arg = ArgumentType::NONE;
				continue;
			},

			ArgumentType::MODE => {
				match ConversionMode::from_name(&argument.to_lowercase()) {
					Some(value) => mode = Some(value),
					None => {
						println!("Unsupported mode '{}'. Supported modes: 'rgb565', '3bit', '565to3bit', 'image', 'compare'.", argument);
						return None;
					},
				}

				next_arg = ArgumentType::NONE;
				continue;
			},

			ArgumentType::DIMENSIONS => {
				match parse_dimensions(argument) {
					Some((w, h)) => {
						width = w;
						height = h;
					},
					None => {
						println!("Invalid dimensions '{}'. Use '<width>x<height>', e.g. '640x480'.", argument);
						return None;
					},
				}

				next_arg = ArgumentType::NONE;
				continue;
			},

			ArgumentType::NONE => (),
		}

		match &argument.to_lowercase() as &str {
			"-i" | "-input" => next_arg = ArgumentType::INPUT,
			"-o" | "-output" => next_arg = ArgumentType::OUTPUT,
			"-m" | "-mode" => next_arg = ArgumentType::MODE,
			"-d" | "-dimensions" => next_arg = ArgumentType::DIMENSIONS,
			"-r" | "-reference" => next_arg = ArgumentType::REFERENCE,
			"-s" | "-scale" => resize = true,
			"-l" | "-list" => verbose = true,
			"-w" | "-overwrite" => overwrite = true,
			_ => {
				println!("Ignoring unknown argument '{}'.", argument);
			},
		}
	}

	// Insufficient parameters
	if input_path.is_empty() {
		println!("No input file was specified. Use '-i <input file>'.");
		return None;
	}

	let mode: ConversionMode = match mode {
		Some(mode) => mode,
		None => {
			println!("No mode was specified. Use '-m <mode>'.");
			return None;
		},
	};

	if mode == ConversionMode::Compare && reference_path.is_empty() {
		println!("Compare mode needs a second file. Use '-r <reference file>'.");
		return None;
	}

	let input_pathbuf: PathBuf = PathBuf::from(input_path);

	let output_pathbuf: PathBuf = if output_path.is_empty() {
		mode.default_output(&input_pathbuf)
	} else {
		PathBuf::from(output_path)
	};

	// Final output
	return Some(Parameters {
		input_path: input_pathbuf,
		output_path: output_pathbuf,
		reference_path: PathBuf::from(reference_path),
		width: width,
		height: height,
		mode: mode,
		resize: resize,
		verbose: verbose,
		overwrite: overwrite,
	});
}
