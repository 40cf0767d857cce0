use clap::Parser;
use humfin::utils::{logger, validation::Validate};
use humfin::{CliConfig, DatastoreClient, LookupEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting humfin lookup");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration loading failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let params = settings.params.clone();
    let client = DatastoreClient::new(settings);
    let engine = LookupEngine::new(client);

    match engine.run(params).await {
        Ok(report) => {
            let stdout = std::io::stdout();
            report.render(&mut stdout.lock())?;
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
