use std::sync::Arc;

use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use groovecli::{cli, config, error, types::{CurationRequest, PkceToken}};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// One-time setup: store your Spotify API keys
    Setup,

    /// Authorize with Spotify API
    Auth,

    /// Scan your saved tracks and build the genre index
    Scan,

    /// List selectable genres from the last scan
    Genres(GenresOptions),

    /// Show library statistics from the last scan
    Stats,

    #[clap(about = "Create a curated playlist from selected genres")]
    Create(CreateOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct GenresOptions {
    /// Filter genres by substring
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CreateOptions {
    /// Name of the playlist to create
    #[clap(long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub name: String,

    /// Genre tag to include, as listed by `groovecli genres`; can be repeated
    #[clap(
        long = "genre",
        required = true,
        action = ArgAction::Append,
        num_args = 1
    )]
    pub genres: Vec<String>,

    /// Discovery spice: percentage of recommended tracks to blend in (0-100)
    #[clap(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub spice: u8,

    /// Keep only instrumental tracks (no lyrics)
    #[clap(long)]
    pub instrumental: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    // Everything that talks to the API needs credentials; setup creates them.
    let needs_credentials = !matches!(cli.command, Command::Setup | Command::Completions(_));
    if needs_credentials && !config::has_credentials() {
        error!("No API credentials found. Run groovecli setup first.");
    }

    match cli.command {
        Command::Setup => cli::setup().await,
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Scan => cli::scan().await,
        Command::Genres(opt) => cli::list_genres(opt.search).await,
        Command::Stats => cli::stats().await,
        Command::Create(opt) => {
            cli::create(CurationRequest {
                name: opt.name,
                genres: opt.genres,
                spice: opt.spice,
                instrumental_only: opt.instrumental,
            })
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
