mod configuration;

use anyhow::Context;
use base58_codec::base58;
use configuration::{Configuration, Input, Mode};
use std::{
    fs,
    io::{self, Read, Write},
};
use tracing_subscriber::{fmt::time::uptime, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_timer(uptime())
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let configuration = Configuration::new();
    let input = read_input(configuration.input())?;
    tracing::debug!(bytes = input.len(), mode = ?configuration.mode(), path = ?configuration.input_path(), "Read input");

    let output = match configuration.mode() {
        Mode::Encode => base58::encode(&input).into_bytes(),
        Mode::Decode => base58::decode(&input).context("invalid base58 given, failed to decode")?,
    };
    tracing::debug!(bytes = output.len(), "Writing output");

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output).context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

fn read_input(input: &Input) -> anyhow::Result<Vec<u8>> {
    match input {
        Input::Stdin => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer).context("failed to read from stdin")?;
            Ok(buffer)
        }
        Input::File(path) => fs::read(path).with_context(|| format!("failed to read file {}", path.display())),
    }
}
