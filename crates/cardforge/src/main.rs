#![forbid(unsafe_code)]

//! # Cardforge CLI
//!
//! Compile card request URLs, preview rendered cards, and inspect the
//! surrounding endpoints.
//!
//! ## Usage
//!
//! ```bash
//! cardforge compile --card jokes-card --theme galactic_dusk
//! cardforge compile --card my-card --theme custom --text "Hello" --bg-color "rgb(255,0,0)"
//! cardforge preview --host https://cards.example --card jokes-card --theme techy
//! cardforge stats --owner someone --repo some-repo
//! cardforge fact --dataset facts.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cardfetch::{help_document, load_dataset, pick, PreviewClient, StatsClient};
use cardform::{session, CardForm, PreviewSession};
use cardwire::gradient;

#[derive(Parser)]
#[command(name = "cardforge", version, about = "SVG card request toolbox")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a card request into its query string and embed snippets.
    Compile {
        #[command(flatten)]
        style: StyleArgs,
        /// Service origin used for embed snippets.
        #[arg(long)]
        host: Option<String>,
    },
    /// Compile a card request and fetch the rendered SVG.
    Preview {
        #[command(flatten)]
        style: StyleArgs,
        /// Service origin to fetch from.
        #[arg(long)]
        host: String,
    },
    /// Show repository statistics (serves cached estimates on failure).
    Stats {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        repo: String,
    },
    /// Pick a random fact from a JSON dataset.
    Fact {
        /// Path to a JSON array of `{ "quote": ..., "lang": ... }` items.
        #[arg(long)]
        dataset: PathBuf,
        /// Heading for English items.
        #[arg(long, default_value = "Fact of the Day:")]
        heading: String,
        /// Heading for Hindi-tagged items.
        #[arg(long, default_value = "आज का तथ्य:")]
        heading_hi: String,
    },
    /// Print the theme/card help catalog as JSON.
    HelpDoc {
        /// Service origin embedded in the example URLs.
        #[arg(long, default_value = "https://cards.example")]
        base_url: String,
    },
    /// Print a random CSS linear gradient.
    Gradient,
}

/// Style flags shared by `compile` and `preview`. Every flag maps onto a
/// form field; absent flags mean "not provided".
#[derive(Args)]
struct StyleArgs {
    /// Card template slug (`my-card` is the free-text variant).
    #[arg(long, default_value = "random-facts-card")]
    card: String,
    /// Theme token, or `custom` to enable the style flags below.
    #[arg(long, default_value = "techy")]
    theme: String,
    /// Free-text body for `my-card`.
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    card_color: Option<String>,
    #[arg(long)]
    bg_color: Option<String>,
    #[arg(long)]
    font_color: Option<String>,
    #[arg(long)]
    shadow_color: Option<String>,
    #[arg(long)]
    google_font: Option<String>,
    /// Alignment token: tl, tm, tr, ml, mm, mr, bl, bm, br.
    #[arg(long)]
    align: Option<String>,
    #[arg(long)]
    outer_pad: Option<u32>,
    #[arg(long)]
    inner_pad: Option<u32>,
    #[arg(long)]
    font_size: Option<u32>,
    #[arg(long)]
    card_width: Option<u32>,
    #[arg(long)]
    card_min_height: Option<u32>,
}

impl StyleArgs {
    fn into_form(self) -> CardForm {
        let px = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();
        CardForm {
            card_name: self.card,
            theme: self.theme,
            custom_text: self.text.unwrap_or_default(),
            card_color: self.card_color.unwrap_or_default(),
            bg_color: self.bg_color.unwrap_or_default(),
            font_color: self.font_color.unwrap_or_default(),
            shadow_color: self.shadow_color.unwrap_or_default(),
            google_font: self.google_font.unwrap_or_default(),
            text_align: self.align.unwrap_or_default(),
            outer_pad: px(self.outer_pad),
            inner_pad: px(self.inner_pad),
            font_size: px(self.font_size),
            card_width: px(self.card_width),
            card_min_height: px(self.card_min_height),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Compile { style, host } => {
            let form = style.into_form();
            let request = form.build().map_err(|e| e.to_string())?;
            let url = request.url();
            println!("query: {}", request.query());
            println!("url:   {url}");
            if let Some(host) = host {
                let title = session::title_case(request.kind.path());
                println!("md:    {}", session::markdown_snippet(&title, &host, &url));
                println!("html:  {}", session::html_snippet(&title, &host, &url));
            }
            Ok(())
        }
        Command::Preview { style, host } => {
            let form = style.into_form();
            let request = form.build().map_err(|e| e.to_string())?;
            let url = request.url();

            let mut session = PreviewSession::new();
            if !session.submit(&url) {
                return Ok(());
            }
            let client = PreviewClient::new().map_err(|e| e.to_string())?;
            let svg = client.fetch(&host, &url).map_err(|e| e.to_string())?;
            println!("{svg}");
            Ok(())
        }
        Command::Stats { owner, repo } => {
            let stats = StatsClient::new().repo_stats(&owner, &repo);
            let json = serde_json::to_string_pretty(&stats).map_err(|e| e.to_string())?;
            println!("{json}");
            Ok(())
        }
        Command::Fact {
            dataset,
            heading,
            heading_hi,
        } => {
            let facts = load_dataset(&dataset).map_err(|e| e.to_string())?;
            let fact = pick(&facts).ok_or_else(|| "dataset is empty".to_string())?;
            println!("{}", cardfetch::card_text(fact, &heading, &heading_hi));
            Ok(())
        }
        Command::HelpDoc { base_url } => {
            let doc = help_document(&base_url);
            let json = serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())?;
            println!("{json}");
            Ok(())
        }
        Command::Gradient => {
            println!("{}", gradient::random());
            Ok(())
        }
    }
}
