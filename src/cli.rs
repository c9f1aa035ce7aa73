use std::path::PathBuf;

use crate::CompareError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub sequential: PathBuf,
    pub parallel: PathBuf,
}

impl CommandLineConfig {
    /// Expects the program name followed by exactly two table paths.
    pub fn from_args(args: &[&str]) -> Result<Self, CompareError> {
        match args {
            [_, sequential, parallel] => Ok(Self {
                sequential: PathBuf::from(*sequential),
                parallel: PathBuf::from(*parallel),
            }),
            _ => Err(CompareError::usage(Self::help())),
        }
    }

    pub fn help() -> &'static str {
        "Usage: catchcompare sequential.csv parallel.csv"
    }
}
