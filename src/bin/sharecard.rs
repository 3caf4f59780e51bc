use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use sharecard::{CancelToken, CardEngine, EngineConfig, VideoCardData};

/// Render a share card from a video metadata JSON record.
#[derive(Parser, Debug)]
#[command(name = "sharecard", version, about)]
struct Args {
    /// Path to the metadata JSON record (the upstream fetcher's output).
    #[arg(long)]
    input: PathBuf,

    /// Output PNG path.
    #[arg(long, default_value = "card.png")]
    output: PathBuf,

    /// Print the card as a data URI to stdout instead of writing a file.
    #[arg(long)]
    data_uri: bool,

    /// Resource-load timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let data: VideoCardData = serde_json::from_str(&json).context("parse metadata record")?;

    let config = EngineConfig {
        load_timeout: Duration::from_secs(args.timeout_secs),
        ..EngineConfig::default()
    };
    let mut engine = CardEngine::new(config)?;
    let cancel = CancelToken::new();
    let card = engine.render(&data, &cancel).await?;

    if args.data_uri {
        println!("{}", card.to_data_uri()?);
    } else {
        let png = card.encode_png()?;
        std::fs::write(&args.output, png)
            .with_context(|| format!("write {}", args.output.display()))?;
        eprintln!(
            "wrote {} ({}x{}, {} title line(s))",
            args.output.display(),
            card.width,
            card.height,
            card.geometry.title_lines
        );
    }
    Ok(())
}
