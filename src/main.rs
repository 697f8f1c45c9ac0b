use clap::Parser;
use mandala::config::setup_logging;
use tracing::error;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let cli = mandala::cli::CliOptions::parse();

    if let Err(err) = setup_logging(cli.debug) {
        eprintln!("Failed to set up logging: {}", err);
        return;
    }

    if let Err(err) = tokio::fs::create_dir_all(&cli.image_dir).await {
        error!(
            "Failed to create image directory {}: {}",
            cli.image_dir.display(),
            err
        );
        return;
    }

    if let Err(err) = mandala::web::setup_server(&cli).await {
        error!("Application error: {}", err);
    }
}
