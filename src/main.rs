// ABOUTME: CLI entrypoint for confluence-export command
// ABOUTME: Loads config, runs the export, and prints the top-level failure

use clap::Parser;
use confluence_export::{
    api::ApiClient, cli::Cli, export, render::Wkhtmltopdf, report::describe_failure,
    storage::ExportLayout, Config,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("confluence_export=warn"))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;
    Ok(())
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("confluence-export: logging disabled: {}", e);
    }

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("confluence-export: [E{}] {}", e.exit_code(), e);
            std::process::exit(e.exit_code());
        }
    };

    let renderer = Wkhtmltopdf::default().with_binary(cli.wkhtmltopdf);
    let layout = ExportLayout::for_root(&cli.output_root, &cli.page_id);

    let result = ApiClient::new(&config).and_then(|client| {
        export::run(
            &client,
            &renderer,
            &cli.page_id,
            &layout,
            &mut std::io::stdout().lock(),
        )
    });

    if let Err(e) = result {
        tracing::debug!(exit_code = e.exit_code(), "export aborted");
        println!("{}", describe_failure(&e));
    }
}
