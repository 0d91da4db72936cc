//! CLI command implementations

use anyhow::{Context, bail};
use clap::Subcommand;
use coursecast_core::{CourseContext, CoursecastConfig, RuntimeMode, ThumbnailVariant};
use coursecast_search::SearchResponse;
use coursecast_web::{AppState, HeadlessPage, SearchSubmitController, SubmitOutcome, run_server};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search videos for a keyword and print the result cards
    Search {
        /// Keyword to search for
        keyword: String,
        /// Course the found videos would be added to
        #[arg(short, long)]
        course: String,
        /// Base URL of the search backend
        #[arg(long)]
        base_url: Option<String>,
        /// Use demo data instead of the remote backend
        #[arg(long)]
        demo: bool,
        /// Thumbnail resolution shown on the cards
        #[arg(long, value_enum)]
        thumbnail: Option<ThumbnailVariant>,
        /// Print the backend response as JSON instead of HTML cards
        #[arg(long)]
        json: bool,
    },
    /// Start the development server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
        /// Use demo data for development
        #[arg(long)]
        demo: bool,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Search {
            keyword,
            course,
            base_url,
            demo,
            thumbnail,
            json,
        } => {
            let mut config = CoursecastConfig::from_env();
            if let Some(base_url) = base_url {
                config.search.base_url = base_url;
            }
            if let Some(thumbnail) = thumbnail {
                config.search.thumbnail = thumbnail;
            }
            if demo {
                config.runtime_mode = RuntimeMode::Development;
            }
            run_search(config, &keyword, &course, json).await
        }
        Commands::Serve { host, port, demo } => {
            let mut config = CoursecastConfig::from_env();
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if demo {
                config.runtime_mode = RuntimeMode::Development;
            }
            run_server(config).await.context("Development server stopped")
        }
    }
}

/// Run one headless keyword submission and print what the page would show.
///
/// # Errors
/// - Course identifier is not a valid number
/// - Backend rejected the keyword or could not be reached
async fn run_search(
    config: CoursecastConfig,
    keyword: &str,
    course: &str,
    json: bool,
) -> anyhow::Result<()> {
    let course = CourseContext::from_page_value(course)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let state = AppState::from_config(&config)?;

    let page = HeadlessPage::with_keyword(keyword);
    let controller = SearchSubmitController::new(state.backend, page.elements(), course)
        .with_thumbnail(state.thumbnail);

    if json {
        let response = controller
            .submit_search(keyword)
            .await
            .map_err(|e| anyhow::anyhow!(e.user_message()))?;
        println!("{}", serde_json::to_string_pretty(&response)?);
        if let SearchResponse::Errors { .. } = response {
            bail!("Search rejected by the backend");
        }
        return Ok(());
    }

    match controller.handle_submit().await {
        SubmitOutcome::Rendered { cards } => {
            if cards == 0 {
                eprintln!("No videos found for '{keyword}'");
            }
            println!("{}", page.results.to_html());
            Ok(())
        }
        SubmitOutcome::Rejected { message } => {
            bail!(message.unwrap_or_else(|| "Search rejected by the backend".to_string()))
        }
        SubmitOutcome::Failed { message } => bail!(message),
        SubmitOutcome::Superseded => bail!("Search was superseded"),
    }
}
