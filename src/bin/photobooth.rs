use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "photobooth", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose photos into a decorated PNG strip.
    Compose(ComposeArgs),
    /// Print the frame templates as JSON.
    Templates,
    /// Print the color filters as JSON.
    Filters,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Input photo (PNG, JPEG, ...). Repeat in slot order.
    #[arg(long = "photo", required = true)]
    photos: Vec<PathBuf>,

    /// Photo count driving the layout. Defaults to the number of photos.
    #[arg(long)]
    count: Option<usize>,

    /// Frame template id.
    #[arg(long, default_value_t = 1)]
    template: u32,

    /// Color filter id (1 pink, 2 sunset, 3 vintage, 4 bright).
    #[arg(long)]
    filter: Option<u32>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Templates => print_json(photobooth::frame_configs()),
        Command::Filters => print_json(&photobooth::filter_catalog()),
    }
}

fn read_photo(path: &Path) -> anyhow::Result<photobooth::PhotoSource> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read photo '{}'", path.display()))?;
    Ok(photobooth::PhotoSource::Encoded(bytes))
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let sources = args
        .photos
        .iter()
        .map(|p| read_photo(p))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let count = args.count.unwrap_or(sources.len());

    let opts = photobooth::ComposeOpts::from_env();
    let image =
        photobooth::compose_with_opts(&sources, count, args.template, args.filter, &opts)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let png = image.encode_png()?;
    std::fs::write(&args.out, png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    let blank = image.drawn.iter().filter(|d| !**d).count();
    eprintln!(
        "wrote {} ({}x{}, {} blank slot(s))",
        args.out.display(),
        image.width,
        image.height,
        blank
    );
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize catalog")?;
    println!("{text}");
    Ok(())
}
