use {
    anyhow::{Context, Result},
    clap::Parser,
    seat::{SeatRange, generate},
    std::path::PathBuf,
};

/// Write one printable QR code PNG per seat.
#[derive(Debug, Parser)]
#[command(name = "seat-codes", version, about, long_about = None)]
struct Cli {
    /// First seat number
    #[arg(long, default_value_t = 1)]
    start: u32,

    /// Last seat number, inclusive
    #[arg(long)]
    end: u32,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out: PathBuf,
}

fn main() -> Result<()> {
    base::init_stdout_logger();
    let cli = Cli::parse();

    let range = SeatRange::new(cli.start, cli.end)?;
    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating {}", cli.out.display()))?;

    for code in generate(&range)? {
        let path = cli.out.join(code.file_name());
        std::fs::write(&path, &code.png).with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }
    println!("{} seat codes written to {}", range.len(), cli.out.display());
    Ok(())
}
