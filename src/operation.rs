use std::fmt;
use std::str::FromStr;

use crate::editor::ImageProcessor;
use crate::error::{Error, Result};

/// One edit, carrying the raw scalar the user supplied.
///
/// Parsing only checks the shape (`name` or `name=value`); the processor
/// decides whether the value is in range when the edit is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Grayscale,
    Blur(i32),
    Edges,
    Brightness(f64),
    Contrast(f64),
    Rotate(i32),
    Flip(String),
    Resize(f64),
}

impl Operation {
    /// Forward to the matching processor method
    pub fn apply(&self, processor: &mut ImageProcessor) -> Result<()> {
        match self {
            Operation::Grayscale => processor.convert_grayscale(),
            Operation::Blur(intensity) => processor.apply_blur(*intensity),
            Operation::Edges => processor.edge_detection(),
            Operation::Brightness(value) => processor.adjust_brightness(*value),
            Operation::Contrast(value) => processor.adjust_contrast(*value),
            Operation::Rotate(angle) => processor.rotate_image(*angle),
            Operation::Flip(direction) => processor.flip_image(direction),
            Operation::Resize(scale) => processor.resize_image(*scale),
        }
    }

    /// Human-readable name (used in logs and debug file names)
    pub fn name(&self) -> &str {
        match self {
            Operation::Grayscale => "Grayscale",
            Operation::Blur(_) => "Gaussian Blur",
            Operation::Edges => "Edge Detection",
            Operation::Brightness(_) => "Brightness",
            Operation::Contrast(_) => "Contrast",
            Operation::Rotate(_) => "Rotate",
            Operation::Flip(_) => "Flip",
            Operation::Resize(_) => "Resize",
        }
    }
}

fn parse_value<T: FromStr>(arg: &'static str, value: Option<&str>) -> Result<T> {
    let value = value.ok_or_else(|| Error::invalid(arg, "", "missing value, expected name=value"))?;
    value
        .trim()
        .parse()
        .map_err(|_| Error::invalid(arg, value, "not a number"))
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, value) = match s.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value)),
            None => (s.trim(), None),
        };

        let op = match name.to_ascii_lowercase().as_str() {
            "grayscale" | "gray" => Operation::Grayscale,
            "edges" => Operation::Edges,
            "blur" => Operation::Blur(parse_value("blur", value)?),
            "brightness" => Operation::Brightness(parse_value("brightness", value)?),
            "contrast" => Operation::Contrast(parse_value("contrast", value)?),
            "rotate" => Operation::Rotate(parse_value("rotate", value)?),
            "flip" => Operation::Flip(
                value
                    .ok_or_else(|| Error::invalid("flip", "", "missing value, expected name=value"))?
                    .trim()
                    .to_string(),
            ),
            "resize" => Operation::Resize(parse_value("resize", value)?),
            _ => return Err(Error::invalid("operation", s, "unknown operation")),
        };

        let takes_value = !matches!(op, Operation::Grayscale | Operation::Edges);
        if !takes_value && value.is_some() {
            return Err(Error::invalid("operation", s, "operation takes no value"));
        }
        Ok(op)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Grayscale => write!(f, "grayscale"),
            Operation::Blur(intensity) => write!(f, "blur={intensity}"),
            Operation::Edges => write!(f, "edges"),
            Operation::Brightness(value) => write!(f, "brightness={value}"),
            Operation::Contrast(value) => write!(f, "contrast={value}"),
            Operation::Rotate(angle) => write!(f, "rotate={angle}"),
            Operation::Flip(direction) => write!(f, "flip={direction}"),
            Operation::Resize(scale) => write!(f, "resize={scale}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("grayscale", Operation::Grayscale)]
    #[case("edges", Operation::Edges)]
    #[case("blur=5", Operation::Blur(5))]
    #[case("brightness=-50", Operation::Brightness(-50.0))]
    #[case("contrast=1.5", Operation::Contrast(1.5))]
    #[case("rotate=90", Operation::Rotate(90))]
    #[case("flip=horizontal", Operation::Flip("horizontal".to_string()))]
    #[case("resize=0.5", Operation::Resize(0.5))]
    fn parses_cli_form(#[case] input: &str, #[case] expected: Operation) {
        assert_eq!(input.parse::<Operation>().unwrap(), expected);
    }

    #[rstest]
    #[case("sharpen")]
    #[case("blur")]
    #[case("blur=soft")]
    #[case("grayscale=1")]
    #[case("flip")]
    fn rejects_malformed(#[case] input: &str) {
        let err = input.parse::<Operation>().unwrap_err();
        assert!(err.is_invalid_argument(), "{input}: {err}");
    }

    #[test]
    fn out_of_range_values_still_parse() {
        // range checks belong to the processor
        assert_eq!("rotate=45".parse::<Operation>().unwrap(), Operation::Rotate(45));
        assert_eq!(
            "flip=diagonal".parse::<Operation>().unwrap(),
            Operation::Flip("diagonal".to_string())
        );
    }
}
