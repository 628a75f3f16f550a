use {
  anyhow::{Context, bail},
  arguments::Arguments,
  clap::Parser,
  client::Client,
  crossterm::style::Stylize,
  document::Document,
  extractor::extract_stories,
  fragment::Fragment,
  futures::stream::{self, StreamExt, TryStreamExt},
  listing_item::ListingItem,
  ranker::rank,
  report::Report,
  serde::Serialize,
  std::{
    backtrace::BacktraceStatus,
    fmt::{self, Display, Formatter},
    io::{self, IsTerminal},
    process,
  },
  story::Story,
  tracing::{debug, info},
  tracing_subscriber::EnvFilter,
  utils::parse_votes,
};

mod arguments;
mod client;
mod document;
mod extractor;
mod fragment;
mod listing_item;
mod ranker;
mod report;
mod story;
mod utils;

const DEFAULT_LOG_FILTER: &str = "warn";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  initialize_logging();

  for notice in arguments.notices() {
    println!("{notice}");
  }

  let pages = arguments.page_count();

  let client = Client::default();

  let documents = client.fetch_documents(pages).await?;

  let items = Document::listing_items(&documents)?;

  let stories = rank(extract_stories(&items)?);

  info!(pages, stories = stories.len(), "ranked popular stories");

  print!("{}", Report::new(stories));

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
