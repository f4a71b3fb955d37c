use anyhow::Context;
use clap::Parser;
use counterview::cli::Args;
use counterview::config::Config;
use counterview::logging::init_tracing;
use counterview::ui::runtime;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match &args.config {
        Some(path) => {
            anyhow::ensure!(path.exists(), "config file '{}' not found", path.display());
            Config::load_from(path)?
        }
        None => Config::load()?,
    };
    tracing::debug!(?config, "config loaded");

    let view = args.build_view(&config);

    if args.snapshot {
        let json = serde_json::to_string_pretty(&view.render())
            .context("failed to serialize view tree")?;
        println!("{json}");
        return Ok(());
    }

    let count = runtime::run(&config.ui, view).context("terminal UI failed")?;
    tracing::info!(count, "exited");
    Ok(())
}
