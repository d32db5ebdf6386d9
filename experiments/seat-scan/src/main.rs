use {
    anyhow::{Result, anyhow},
    clap::{Parser, ValueEnum},
    scan::{Inversion, QrDecoder, RqrrDecoder, ScanConfig, Session},
    seat::normalize_seat_label,
    std::{path::PathBuf, time::Duration},
    tokio::sync::oneshot,
    video::{MediaDevices, V4l2Devices},
};

/// Scan seat QR codes with a V4L2 camera and print the seat numbers.
#[derive(Debug, Parser)]
#[command(name = "seat-scan", version, about, long_about = None)]
struct Cli {
    /// Camera used when no rear camera is available
    #[arg(long, value_name = "PATH", default_value = "/dev/video0")]
    device: PathBuf,

    /// Rear-facing camera, tried first
    #[arg(long, value_name = "PATH", env = "SEAT_SCAN_REAR")]
    rear: Option<PathBuf>,

    /// Number of seats to scan before exiting
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Which code polarities to look for
    #[arg(long, value_enum, default_value = "normal")]
    polarity: Polarity,

    /// Milliseconds between decode attempts
    #[arg(long, default_value_t = 16)]
    interval: u64,

    /// Write logs into this directory instead of stdout
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Polarity {
    Normal,
    Inverted,
    Both,
}

impl From<Polarity> for Inversion {
    fn from(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Normal => Inversion::DontInvert,
            Polarity::Inverted => Inversion::OnlyInvert,
            Polarity::Both => Inversion::AttemptBoth,
        }
    }
}

async fn scan_once<M: MediaDevices, D: QrDecoder>(session: &Session<M, D>) -> Result<String> {
    let (tx, rx) = oneshot::channel();
    session.start(move |payload| {
        let _ = tx.send(payload);
    });
    tokio::select! {
        payload = rx => payload.map_err(|_| {
            anyhow!(session.error().unwrap_or_else(|| "scan cancelled".to_string()))
        }),
        _ = tokio::signal::ctrl_c() => {
            session.stop();
            Err(anyhow!("interrupted"))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.log_dir {
        Some(dir) => base::init_file_logger(dir)?,
        None => base::init_stdout_logger(),
    }

    let mut devices = V4l2Devices::new().with_default_path(&cli.device);
    if let Some(rear) = &cli.rear {
        devices = devices.with_environment(rear);
    }
    let config = ScanConfig::default()
        .with_frame_interval(Duration::from_millis(cli.interval))
        .with_inversion(cli.polarity.into());
    let session = Session::new(devices, RqrrDecoder::new(), config);

    let mut scanned = 0;
    while scanned < cli.count {
        println!("Point the camera at a seat code...");
        let payload = scan_once(&session).await?;
        match normalize_seat_label(&payload) {
            Some(seat) => {
                println!("Seat {seat}");
                scanned += 1;
            }
            None => log::warn!("scanned code has no seat number"),
        }
    }
    Ok(())
}
