use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "base58", author, version, about = "Encode or decode base58 data", long_about = None)]
struct Arguments {
    /// Treat the input as base58-encoded and decode it
    #[arg(short, long)]
    decode: bool,

    /// File to read instead of standard input
    #[arg()]
    file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    Encode,
    Decode,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Configuration {
    mode: Mode,
    input: Input,
}

impl From<Arguments> for Configuration {
    fn from(arguments: Arguments) -> Self {
        let mode = if arguments.decode { Mode::Decode } else { Mode::Encode };
        let input = match arguments.file {
            Some(path) => Input::File(path),
            None => Input::Stdin,
        };
        Self { mode, input }
    }
}

impl Configuration {
    pub fn new() -> Self {
        Arguments::parse().into()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn input_path(&self) -> Option<&Path> {
        match &self.input {
            Input::File(path) => Some(path),
            Input::Stdin => None,
        }
    }
}
