use std::fs;
use std::path::Path;

use crate::error::PixmemError;

#[derive(Debug, PartialEq)]
pub enum Comparison {
	Identical,

	/// First differing line, 0-based. A side is `None` past the end of its file.
	Mismatch {
		index: usize,
		left: Option<String>,
		right: Option<String>,
	},
}


fn normalized_lines(text: &str) -> Vec<String> {
	text.lines().map(|line| line.trim().to_lowercase()).collect()
}


pub fn compare_lines(left: &str, right: &str) -> Comparison {
	let left_lines: Vec<String> = normalized_lines(left);
	let right_lines: Vec<String> = normalized_lines(right);
	let longest: usize = std::cmp::max(left_lines.len(), right_lines.len());

	for index in 0..longest {
		let a: Option<&String> = left_lines.get(index);
		let b: Option<&String> = right_lines.get(index);

		if a != b {
			return Comparison::Mismatch {
				index: index,
				left: a.cloned(),
				right: b.cloned(),
			};
		}
	}

	return Comparison::Identical;
}


pub fn compare(left_file: &Path, right_file: &Path) -> Result<Comparison, PixmemError> {
	let mut texts: Vec<String> = Vec::with_capacity(2);

	for path in [left_file, right_file] {
		match fs::read_to_string(path) {
			Ok(text) => texts.push(text),

			Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
				return Err(PixmemError::FileNotFound { path: path.to_path_buf() });
			},

			Err(error) => return Err(PixmemError::io(path, error)),
		}
	}

	Ok(compare_lines(&texts[0], &texts[1]))
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn case_and_padding_are_ignored() {
		assert_eq!(compare_lines("F800\n07E0\n", "f800  \n 07e0\n"), Comparison::Identical);
		assert_eq!(compare_lines("", ""), Comparison::Identical);
	}

	#[test]
	fn first_mismatch_is_reported() {
		assert_eq!(
			compare_lines("f800\n07e0\n001f\n", "f800\n07e1\n001e\n"),
			Comparison::Mismatch {
				index: 1,
				left: Some(String::from("07e0")),
				right: Some(String::from("07e1")),
			},
		);
	}

	#[test]
	fn shorter_file_differs_at_its_end() {
		assert_eq!(
			compare_lines("f800\n07e0\n", "f800\n"),
			Comparison::Mismatch { index: 1, left: Some(String::from("07e0")), right: None },
		);
	}

	#[test]
	fn missing_file_is_an_error() {
		let path = std::env::temp_dir().join(format!("pixmem-compare-missing-{}.mem", std::process::id()));

		assert!(matches!(
			compare(&path, &path),
			Err(PixmemError::FileNotFound { .. })
		));
	}
}
