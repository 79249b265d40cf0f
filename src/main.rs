//! CLI entry point for squiggly-lines

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use squiggly_lines::commands::list::ListOptions;

#[derive(Parser)]
#[command(name = "squiggly")]
#[command(author = "slesa")]
#[command(version)]
#[command(about = "Validate and inspect the squiggly lines blog content", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every post against the content schema
    Check,

    /// List site content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Include drafts
        #[arg(long)]
        drafts: bool,

        /// Show a single page of posts
        #[arg(short, long)]
        page: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show site constants and build configuration
    Info {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "squiggly_lines=debug,info"
    } else {
        "squiggly_lines=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Check => {
            let site = squiggly_lines::Site::new(&base_dir)?;
            tracing::info!("Checking content in {:?}", site.content_dir);
            let count = squiggly_lines::commands::check::run(&site)?;
            println!("{} posts valid", count);
        }

        Commands::List {
            r#type,
            drafts,
            page,
            json,
        } => {
            let site = squiggly_lines::Site::new(&base_dir)?;
            let options = ListOptions { drafts, page, json };
            squiggly_lines::commands::list::run(&site, &r#type, &options)?;
        }

        Commands::Info { json } => {
            let site = squiggly_lines::Site::new(&base_dir)?;
            squiggly_lines::commands::info::run(&site, json)?;
        }

        Commands::Version => {
            println!("squiggly version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
