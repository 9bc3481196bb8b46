//! Command-line arguments.
//!
//! `pixfilter <in-file> <out-file> <filter> [filter-param]`

use clap::{CommandFactory, Parser, ValueEnum, error::ErrorKind};
use pixmap::{ImageEffect, blur_effect::MotionBlurConfig};
use std::{ffi::OsString, fmt, path::PathBuf};

/// Filter selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterKind {
    Grayscale,
    Invert,
    Emboss,
    #[value(name = "motionblur")]
    MotionBlur,
}

/// Apply a filter to a plain-text pixel map image
#[derive(Parser, Debug)]
#[command(name = "pixfilter")]
#[command(version, about = "Apply a filter to a plain-text pixel map image", long_about = None)]
pub struct Args {
    /// Source image
    pub in_file: PathBuf,

    /// Destination image, replaced if it exists
    pub out_file: PathBuf,

    /// Filter to apply
    pub filter: FilterKind,

    /// Blur length in pixels (motionblur only)
    #[arg(allow_negative_numbers = true)]
    pub param: Option<i64>,
}

impl Args {
    /// Parse and validate an explicit argument vector. The first item is the
    /// program name.
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Self::try_parse_from(args)?;
        args.effect()?;
        Ok(args)
    }

    /// The effect described by `filter` and `param`.
    pub fn effect(&self) -> Result<ImageEffect, clap::Error> {
        match (self.filter, self.param) {
            (FilterKind::MotionBlur, Some(length)) => Ok(ImageEffect::MotionBlur(
                MotionBlurConfig::new().with_length(length),
            )),
            (FilterKind::MotionBlur, None) => Err(Self::command().error(
                ErrorKind::MissingRequiredArgument,
                "motionblur requires a numeric blur length",
            )),
            (_, Some(param)) => Err(Self::command().error(
                ErrorKind::TooManyValues,
                format!("'{}' takes no parameter, got '{param}'", self.filter),
            )),
            (FilterKind::Grayscale, None) => Ok(ImageEffect::Grayscale),
            (FilterKind::Invert, None) => Ok(ImageEffect::Invert),
            (FilterKind::Emboss, None) => Ok(ImageEffect::Emboss),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::parse_from_args(std::iter::once("pixfilter").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_simple_filters() {
        for (name, kind) in [
            ("grayscale", FilterKind::Grayscale),
            ("invert", FilterKind::Invert),
            ("emboss", FilterKind::Emboss),
        ] {
            let args = parse(&["in.ppm", "out.ppm", name]).unwrap();
            assert_eq!(args.in_file, PathBuf::from("in.ppm"));
            assert_eq!(args.out_file, PathBuf::from("out.ppm"));
            assert_eq!(args.filter, kind);
            assert_eq!(args.effect().unwrap().name(), name);
        }
    }

    #[test]
    fn test_parse_motion_blur() {
        let args = parse(&["in.ppm", "out.ppm", "motionblur", "7"]).unwrap();
        assert_eq!(args.param, Some(7));

        match args.effect().unwrap() {
            ImageEffect::MotionBlur(config) => assert_eq!(config.length(), 7),
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_motion_blur() {
        let args = parse(&["in.ppm", "out.ppm", "motionblur", "-5"]).unwrap();
        assert_eq!(args.param, Some(-5));
    }

    #[test]
    fn test_motion_blur_requires_length() {
        let err = parse(&["in.ppm", "out.ppm", "motionblur"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_motion_blur_length_must_be_numeric() {
        let err = parse(&["in.ppm", "out.ppm", "motionblur", "long"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_unknown_filter() {
        let err = parse(&["in.ppm", "out.ppm", "sepia"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["in.ppm"]).is_err());
        assert!(parse(&["in.ppm", "out.ppm"]).is_err());

        let err = parse(&["in.ppm", "out.ppm", "motionblur", "3", "4"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_parameter_rejected_for_plain_filters() {
        let err = parse(&["in.ppm", "out.ppm", "invert", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooManyValues);
        assert!(err.to_string().contains("'invert' takes no parameter"));
    }

    #[test]
    fn test_help_is_not_a_usage_error() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_filter_display_matches_cli_names() {
        for kind in FilterKind::value_variants() {
            let parsed = FilterKind::from_str(&kind.to_string(), false).unwrap();
            assert_eq!(parsed, *kind);
        }
        assert_eq!(FilterKind::MotionBlur.to_string(), "motionblur");
    }

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }
}
