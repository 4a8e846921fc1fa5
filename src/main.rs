// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use siftbox::index::load_index_file;
use siftbox::options::{SearchOptions, DEFAULT_LIMIT};
use siftbox::scoring::{count_tokens, field_norm};
use siftbox::types::RecordField;
use siftbox::widget::SearchWidget;

mod cli;
use cli::display::{
    row, section_bot, section_top, themed, TerminalRenderer, BOLD, CYAN, GRAY, YELLOW,
};
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "siftbox=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            params,
            json,
        } => run_search(&file, &query, limit, params.as_deref(), json),
        Commands::Inspect { file, params } => run_inspect(&file, params.as_deref()),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Options from a site params file. An unreadable file is an error; a file
/// that is not JSON falls back to the defaults, the way the page does.
fn load_options(params: Option<&str>) -> Result<SearchOptions> {
    let Some(path) = params else {
        return Ok(SearchOptions::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading params file {}", path))?;
    Ok(SearchOptions::from_site_params_json(&text).unwrap_or_else(|e| {
        tracing::warn!(path, error = %e, "invalid site params, using defaults");
        SearchOptions::default()
    }))
}

fn run_search(
    file: &str,
    query: &str,
    limit: Option<usize>,
    params: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut options = load_options(params)?;
    if let Some(limit) = limit {
        options.limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
    }

    let records = load_index_file(file).with_context(|| format!("loading index {}", file))?;
    let mut widget = SearchWidget::new(options);
    widget.finish_load(Ok(records));
    let view = widget.on_input(query);

    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        print!("{}", widget.render_with(&mut TerminalRenderer));
    }
    Ok(())
}

fn run_inspect(file: &str, params: Option<&str>) -> Result<()> {
    let options = load_options(params)?;
    let records = load_index_file(file).with_context(|| format!("loading index {}", file))?;

    section_top("INDEX");
    row(&format!(" {:<24}{}", "file", file));
    row(&format!(" {:<24}{}", "records", records.len()));
    for field in RecordField::ALL {
        let filled = records
            .iter()
            .filter(|r| !r.field(field).trim().is_empty())
            .count();
        let tokens: usize = records.iter().map(|r| count_tokens(r.field(field))).sum();
        let avg = if filled == 0 {
            0.0
        } else {
            tokens as f64 / filled as f64
        };
        row(&format!(
            " {:<24}{:>6} filled  {:>8.1} avg tokens",
            field.as_str(),
            filled,
            avg
        ));
    }
    section_bot();

    section_top("OPTIONS");
    for key in &options.keys {
        row(&format!(
            " key {:<20}{}",
            themed(YELLOW, &[BOLD], key.field.as_str()),
            themed(CYAN, &[], &format!("{:.3}", key.weight))
        ));
    }
    row(&format!(" {:<24}{}", "threshold", options.threshold));
    row(&format!(" {:<24}{}", "distance", options.distance));
    row(&format!(" {:<24}{}", "location", options.location));
    row(&format!(" {:<24}{}", "ignoreLocation", options.ignore_location));
    row(&format!(" {:<24}{}", "isCaseSensitive", options.is_case_sensitive));
    row(&format!(" {:<24}{}", "ignoreDiacritics", options.ignore_diacritics));
    row(&format!(" {:<24}{}", "minMatchCharLength", options.min_match_char_length));
    row(&format!(" {:<24}{}", "limit", options.limit));
    section_bot();

    if let Some(longest) = records.iter().max_by_key(|r| count_tokens(&r.content)) {
        println!(
            "{}",
            themed(
                GRAY,
                &[],
                &format!(
                    "longest content: {} ({} tokens, norm {})",
                    longest.permalink,
                    count_tokens(&longest.content),
                    field_norm(&longest.content)
                )
            )
        );
    }
    Ok(())
}
