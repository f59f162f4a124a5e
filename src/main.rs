use anyhow::Result;
use clap::{Parser, Subcommand};
use project_records_inquiry::InquiryForm;

mod cli;

/// project-records - Project Records LLC studio site
#[derive(Parser)]
#[command(name = "project-records")]
#[command(about = "Single-page site for the Project Records studio", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the mailto link the contact form composes for these values
    Mailto {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Project type
        #[arg(long = "type", default_value = "")]
        project_type: String,

        #[arg(long, default_value = "")]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = project_records::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    match cli.command {
        Commands::Serve { host, port } => {
            project_records::observability::init_observability(
                "project-records",
                env!("CARGO_PKG_VERSION"),
                &config.logging,
            )?;

            cli::server::serve(config, host, port).await
        }
        Commands::Mailto {
            name,
            email,
            project_type,
            message,
        } => cli::mailto::print(
            &config,
            InquiryForm {
                name,
                email,
                project_type,
                message,
            },
        ),
    }
}
