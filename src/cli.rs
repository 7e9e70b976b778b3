//! cli component of glitcher.
//!
//! > `$exename [input path] [output path] [--seed <u64>]`
//!
//! both paths are optional and default to `input.png` and `glitched.png` in the working directory.
//! the input is read as raw bytes, so any file works, image or not. the output is overwritten.
//!
//! the glitch itself is fixed: the first 100 bytes are left alone and 100 random bits after them
//! are flipped. passing `--seed` makes the flips reproducible; the same seed on the same input
//! always gives the same output.

use clap::Parser;
use std::path::PathBuf;

pub mod glitch;

pub const DEFAULT_INPUT: &str = "input.png";
pub const DEFAULT_OUTPUT: &str = "glitched.png";

/// Flip random bits in a file to make glitch art, leaving its header intact
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File to glitch
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the glitched copy
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Seed for the bit flips, random when absent
    #[arg(long)]
    pub seed: Option<u64>,
}
