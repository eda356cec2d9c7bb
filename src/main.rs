//! MovieFight-RS: debounced movie search with head-to-head comparison
//!
//! Terminal driver for the two search widgets. Typed text feeds the
//! debounced engines, numbered picks select a movie for each side, and a
//! scoreboard prints once both sides have chosen.

use anyhow::{Context, Result};
use moviefight_rs::autocomplete::{
    Autocomplete, AutocompleteConfig, ClickTarget, PageClicks, RootId, Update,
};
use moviefight_rs::compare::{Comparison, Side};
use moviefight_rs::config::{self, Settings};
use moviefight_rs::network::HttpClient;
use moviefight_rs::omdb::{MovieSummary, OmdbClient};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::io::AsyncBufReadExt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    load_settings()?;
    let settings = config::get();

    let default_level = if settings.general.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    info!("Starting MovieFight-RS v{}", moviefight_rs::VERSION);

    let client = HttpClient::with_settings(&settings.outgoing)?;
    let omdb = Arc::new(
        OmdbClient::new(client, &settings.api)
            .context("OMDb client setup failed")?,
    );
    info!("OMDb client initialized");

    let comparison = Arc::new(Mutex::new(Comparison::new()));
    let left = spawn_widget(
        Side::Left,
        Arc::clone(&omdb),
        Arc::clone(&comparison),
        settings,
    );
    let right = spawn_widget(Side::Right, omdb, comparison, settings);

    let mut page = PageClicks::new();
    page.register(left.click_listener());
    page.register(right.click_listener());

    println!("commands:");
    println!("  l <text>   type into the left search");
    println!("  r <text>   type into the right search");
    println!("  pl <n>     pick option n on the left");
    println!("  pr <n>     pick option n on the right");
    println!("  click l|r|out   simulate a page click");
    println!("  quit");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        match command {
            "l" => left.input(rest),
            "r" => right.input(rest),
            "pl" => pick(&left, rest),
            "pr" => pick(&right, rest),
            "click" => {
                let target = match rest {
                    "l" => ClickTarget::inside(left.root()),
                    "r" => ClickTarget::inside(right.root()),
                    _ => ClickTarget::outside(),
                };
                page.dispatch(&target);
            }
            "quit" | "q" => break,
            "" => {}
            other => println!("unknown command: {other}"),
        }
    }

    left.shutdown();
    right.shutdown();
    Ok(())
}

fn pick(widget: &Autocomplete<MovieSummary>, rest: &str) {
    match rest.parse() {
        Ok(index) => widget.click_option(index),
        Err(_) => println!("usage: pl <n> / pr <n>"),
    }
}

/// Build one search widget: selection triggers the detail lookup and
/// reports it to the comparison coordinator.
fn spawn_widget(
    side: Side,
    omdb: Arc<OmdbClient>,
    comparison: Arc<Mutex<Comparison>>,
    settings: &Settings,
) -> Autocomplete<MovieSummary> {
    let lookup = Arc::clone(&omdb);
    let widget_config = AutocompleteConfig::new(
        RootId::next(),
        |movie: &MovieSummary| movie.label(),
        |movie: &MovieSummary| movie.title.clone(),
        move |movie: &MovieSummary| {
            let omdb = Arc::clone(&lookup);
            let comparison = Arc::clone(&comparison);
            let imdb_id = movie.imdb_id.clone();
            tokio::spawn(async move {
                match omdb.lookup(&imdb_id).await {
                    Ok(detail) => {
                        let scoreboard = comparison.lock().unwrap().report(side, detail);
                        if let Some(scoreboard) = scoreboard {
                            println!("{scoreboard}");
                        }
                    }
                    Err(err) => error!(error = %err, "detail lookup failed"),
                }
            });
        },
    )
    .with_debounce(settings.autocomplete.debounce());

    let (widget, mut updates) = Autocomplete::spawn(widget_config, omdb);

    let tag = match side {
        Side::Left => "left",
        Side::Right => "right",
    };
    tokio::spawn(async move {
        while let Some(update) = updates.recv().await {
            match update {
                Update::DropdownOpened(options) => {
                    println!("[{tag}] results:");
                    for (index, option) in options.iter().enumerate() {
                        println!("[{tag}]   {index}: {option}");
                    }
                }
                Update::DropdownClosed => println!("[{tag}] (dropdown closed)"),
                Update::InputValueSet(text) => println!("[{tag}] input = {text}"),
                Update::FetchFailed(err) => error!(side = tag, error = %err, "search failed"),
            }
        }
    });

    widget
}

/// Load settings from the conventional locations or fall back to defaults
fn load_settings() -> Result<()> {
    if let Ok(path) = std::env::var("MOVIEFIGHT_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return config::init_from_file(path);
        }
    }

    let paths = [
        PathBuf::from("moviefight.yml"),
        PathBuf::from("config/moviefight.yml"),
        dirs::config_dir()
            .map(|p| p.join("moviefight-rs/settings.yml"))
            .unwrap_or_default(),
    ];
    for path in paths.iter() {
        if path.exists() {
            return config::init_from_file(path);
        }
    }

    config::init_default()
}
