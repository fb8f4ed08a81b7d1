use bzr::cli::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bzr=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path }) => {
            bzr::cli::init::run(&path)?;
        }
        Some(Commands::Migrate { command }) => {
            bzr::cli::migrate::run(&cli.config, command)?;
        }
        Some(Commands::Transliterate { text }) => {
            bzr::cli::slug::transliterate_text(&text);
        }
        Some(Commands::Slug { text }) => {
            bzr::cli::slug::slug(&text);
        }
        Some(Commands::Unique { base, existing }) => {
            bzr::cli::slug::unique(&base, &existing);
        }
        Some(Commands::Reserve {
            title,
            namespace,
            slug,
            json,
        }) => {
            bzr::cli::registry::reserve(&cli.config, title, namespace, slug, json)?;
        }
        Some(Commands::List { namespace, json }) => {
            bzr::cli::registry::list(&cli.config, namespace, json)?;
        }
        Some(Commands::Release { slug, namespace }) => {
            bzr::cli::registry::release(&cli.config, &slug, namespace)?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
