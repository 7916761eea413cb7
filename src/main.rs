use clap::Parser;
use lasttag::application::ResolveTagService;
use lasttag::cli::Cli;
use lasttag::error::LastTagError;
use lasttag::infrastructure::{logging, RegctlLister, Settings};
use tracing::debug;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbosity()) {
        eprintln!("Warning: {}", e);
    }

    match run(cli) {
        Ok(tag) => {
            // stdout carries the tag and nothing else
            println!("{}", tag);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<String, LastTagError> {
    // Defaults, then the settings file, then flags and environment
    let settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::default(),
    }
    .with_overrides(cli.overrides())?;
    debug!(?settings, "Resolved settings");

    let lister = RegctlLister::new(&settings);
    let service = ResolveTagService::new(
        lister,
        settings.match_policy.classifier(),
        settings.default_registry.clone(),
    );

    service.execute(&cli.repository_url, cli.repository_tag.as_deref())
}
