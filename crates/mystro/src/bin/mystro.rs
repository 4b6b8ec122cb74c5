//! MystroGPT CLI - Run the pipeline and browse saved topics
//!
//! Usage:
//!   mystro run "Mystery of the Dyatlov Pass"
//!   mystro library
//!   mystro show mystery_of_the_dyatlov_pass

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use mystro::{Library, MystroBrain, MystroConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mystro")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a script, shorts, SEO pack and thumbnail concept for a topic")]
struct Cli {
    /// Base directory for generated topic folders
    #[arg(long, env = "MYSTRO_OUTPUTS_DIR", default_value = "outputs")]
    outputs_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline for a topic and print the result
    Run {
        /// Topic text
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,
    },

    /// List topics that already have a saved folder
    Library,

    /// Print everything saved for a topic folder
    Show {
        /// Folder name as listed by `library`
        slug: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("mystro={},warn", log_level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = MystroConfig::default().with_outputs_dir(cli.outputs_dir);

    match cli.command {
        Commands::Run { topic } => {
            let topic = topic.join(" ");
            if topic.trim().is_empty() {
                bail!("Please enter a topic first");
            }

            let brain = MystroBrain::new(&config);
            let payload = brain
                .run_pipeline(&topic)
                .with_context(|| format!("Pipeline failed for '{}'", topic.trim()))?;

            println!("{}", serde_json::to_string_pretty(&payload)?);
            eprintln!("Output saved → {}", payload.saved_folder);
        }
        Commands::Library => {
            let library = Library::new(&config.outputs_dir);
            let topics = library.list_topics()?;
            if topics.is_empty() {
                println!("No topics generated yet in {}", config.outputs_dir.display());
            }
            for topic in topics {
                println!("{topic}");
            }
        }
        Commands::Show { slug } => {
            let library = Library::new(&config.outputs_dir);
            match library.load(&slug)? {
                Some(saved) => println!("{}", serde_json::to_string_pretty(&saved)?),
                None => bail!("No saved topic named '{}'", slug),
            }
        }
    }

    Ok(())
}
