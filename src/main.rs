//! CLI entry point for puente

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use puente::content::Language;

#[derive(Parser)]
#[command(name = "puente")]
#[command(version)]
#[command(about = "A bilingual markdown blog engine", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the blog server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List site content
    List {
        /// Type of content to list (post, category)
        #[arg(default_value = "post")]
        r#type: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "puente=debug,info"
    } else {
        "puente=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Serve { port, ip } => {
            let blog = puente::Blog::new(&base_dir)?;
            tracing::info!("Serving {:?} at http://{}:{}", blog.content_dir, ip, port);
            puente::server::start(&blog, &ip, port).await?;
        }

        Commands::List { r#type } => {
            let blog = puente::Blog::new(&base_dir)?;
            list_content(&blog, &r#type)?;
        }
    }

    Ok(())
}

/// List site content by type
fn list_content(blog: &puente::Blog, content_type: &str) -> Result<()> {
    let catalog = blog.catalog();

    match content_type {
        "post" | "posts" => {
            let articles = catalog.list_all()?;
            println!("Articles ({}):", articles.len());
            for article in articles {
                println!(
                    "  {} [{}] {} ({})",
                    article.date, article.lang, article.title, article.slug
                );
            }
        }
        "category" | "categories" => {
            for lang in [Language::En, Language::Es] {
                let categories = catalog.categories(lang)?;
                println!("Categories [{}] ({}):", lang, categories.len());
                for category in categories {
                    println!("  {}", category);
                }
            }
        }
        other => {
            println!("Unknown content type: {}", other);
            println!("Available types: post, category");
        }
    }

    Ok(())
}
