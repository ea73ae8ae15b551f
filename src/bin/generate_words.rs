use std::path::PathBuf;

use clap::{error::ErrorKind, Parser};
use rand::{rngs::SmallRng, SeedableRng};
use wordgen::generate;

#[derive(Parser)]
struct Args {
    filename: PathBuf,

    size: u64,
}

fn main() -> anyhow::Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| "generate_words".to_string());
            println!("{} filename size", program);
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    let mut prng = SmallRng::from_entropy();
    let report = generate(&args.filename, args.size, &mut prng)?;

    println!(
        "Words written: {}. Bytes written: {}",
        report.words_written, report.bytes_written
    );
    Ok(())
}
