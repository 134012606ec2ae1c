//! Portfolio backend CLI.
//!
//! One binary drives all four pieces: the standalone server, the
//! single-invocation handler, and the two client components.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use folio::client::{ContactForm, ResumeDownloader, SubmitOutcome};
use folio::config::Settings;
use folio::function::{self, Event, Route};
use folio::server;
use folio::services::PortfolioService;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Portfolio site backend: contact relay and resume delivery", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the standalone HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on (defaults to PORT, then 5000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Handle one function-platform event read from stdin
    Invoke {
        /// Which endpoint the event targets
        route: InvokeRoute,
    },

    /// Submit a contact message through the client form component
    Send {
        /// Submitter name
        #[arg(long)]
        name: String,

        /// Submitter email (used as the reply-to address)
        #[arg(long)]
        email: String,

        /// Message body
        #[arg(long)]
        message: String,

        /// Relay endpoint
        #[arg(long, default_value = "http://localhost:5000/api/contact")]
        api_url: String,
    },

    /// Download the resume through the client component
    Download {
        /// Download endpoint
        #[arg(long, default_value = "http://localhost:5000/api/resume")]
        api_url: String,

        /// Directory to save into
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum InvokeRoute {
    Contact,
    Resume,
}

impl From<InvokeRoute> for Route {
    fn from(route: InvokeRoute) -> Self {
        match route {
            InvokeRoute::Contact => Route::Contact,
            InvokeRoute::Resume => Route::Resume,
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let settings = Settings::from_env();
            let port = port.unwrap_or(settings.port);
            server::serve(&settings, &host, port).await?;
        }

        Commands::Invoke { route } => {
            let settings = Settings::from_env();
            let service = PortfolioService::new(&settings);

            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            let event: Event = if raw.trim().is_empty() {
                Event::default()
            } else {
                serde_json::from_str(&raw)?
            };

            let response = function::handle(&service, route.into(), &event).await;
            println!("{}", serde_json::to_string(&response)?);
        }

        Commands::Send {
            name,
            email,
            message,
            api_url,
        } => {
            let mut form = ContactForm::new(api_url);
            form.fill(&name, &email, &message);

            match form.submit().await {
                Some(SubmitOutcome::Success { message }) => println!("{message}"),
                Some(SubmitOutcome::Failure { message }) => anyhow::bail!(message),
                None => anyhow::bail!("a submission is already in flight"),
            }
        }

        Commands::Download { api_url, output } => {
            let downloader = ResumeDownloader::new(api_url);
            let path = downloader.save_to(&output).await?;
            println!("Saved {}", path.display());
        }
    }

    Ok(())
}
