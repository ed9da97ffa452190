use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 64 * 1024; // 64KB, plenty for conversational text

pub struct InputReader;

impl InputReader {
    /// Reads translation input from a file, or stdin when no path is given.
    pub fn read(file_path: Option<&str>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        if metadata.len() as usize > MAX_INPUT_SIZE {
            bail!(
                "Error: Input exceeds maximum allowed size ({} KB).\n\n\
                 The translation endpoint is meant for short conversational text.",
                MAX_INPUT_SIZE / 1024
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        io::stdin()
            .lock()
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;

        if buffer.len() > MAX_INPUT_SIZE {
            bail!(
                "Error: Input exceeds maximum allowed size ({} KB).\n\n\
                 The translation endpoint is meant for short conversational text.",
                MAX_INPUT_SIZE / 1024
            );
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
