use adash_core::session::Session;
use adash_data::Dataset;
use clap::Parser;

#[derive(Parser)]
#[command(name = "adash", about = "adash — terminal admin dashboard")]
struct Cli {
    /// Write debug logs to /tmp/adash-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Load the record collections from a JSON dataset file instead of the
    /// built-in sample data.
    #[arg(long, value_name = "FILE")]
    data: Option<std::path::PathBuf>,

    /// Sign in as this account (looked up in the dataset's users).
    #[arg(long, default_value = "alisher@email.com")]
    user: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/adash-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("adash debug log started — tail -f /tmp/adash-debug.log");
    }

    let dataset = match cli.data {
        Some(path) => Dataset::from_json_file(path)?,
        None => Dataset::seed(),
    };

    let session = Session::sign_in(&dataset.users, &cli.user)?;
    tracing::info!(user = %session.user().email, "session opened");

    adash_tui::run(dataset, session)
}
