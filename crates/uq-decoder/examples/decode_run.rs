//! Decode one run directory and print the response as JSON.
//!
//! Usage: cargo run --example decode_run -- path/to/run_dir

use uq_decoder::{DEFAULT_TARGET_FILENAME, MfileDecoder, OutputColumn, RunInfo};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let run_dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());

    let decoder = MfileDecoder::new(
        DEFAULT_TARGET_FILENAME,
        vec![
            OutputColumn::name("concost"),
            OutputColumn::name("cdirt"),
        ],
    )?;

    let response = decoder.decode(&RunInfo::new(run_dir))?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
