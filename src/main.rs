//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `go2web` library that handles:
//! - Command-line argument parsing
//! - Logger and TLS provider initialization
//! - User-facing output formatting and exit codes
//!
//! All fetching, caching, rendering, and search extraction is implemented in
//! the library crate.

use clap::{CommandFactory, Parser};
use std::process;

use go2web::config::{ACCEPT_HTML, ACCEPT_JSON, Cli, MAX_REDIRECT_HOPS};
use go2web::initialization::{init_crypto_provider, init_logger_with};
use go2web::{
    build_search_url, default_cache_dir, exit_code, extract_results, fetch_url, to_readable,
    ResponseCache,
};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logger_with(cli.log_level.clone().into(), cli.log_format.clone()) {
        eprintln!("go2web: {e}");
        process::exit(1);
    }
    init_crypto_provider();

    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let cache_dir = cli.cache_dir.clone().unwrap_or_else(default_cache_dir);
    let cache = match ResponseCache::open(cache_dir) {
        Ok(cache) => cache,
        Err(e) => {
            eprintln!("go2web: {e:#}");
            return 1;
        }
    };

    if let Some(url) = &cli.url {
        fetch_and_print(url, cli.json, &cache)
    } else if let Some(terms) = &cli.search {
        search_and_list(&terms.join(" "), &cache)
    } else {
        // Neither mode requested: show usage help.
        let _ = Cli::command().print_help();
        println!();
        0
    }
}

/// URL mode: fetch one resource and print it in readable form.
fn fetch_and_print(url: &str, prefer_json: bool, cache: &ResponseCache) -> i32 {
    let accept = if prefer_json { ACCEPT_JSON } else { ACCEPT_HTML };
    match fetch_url(url, accept, cache, MAX_REDIRECT_HOPS) {
        Ok(page) => {
            println!("{}", to_readable(&page.content_type, &page.body));
            0
        }
        Err(e) => {
            eprintln!("go2web: failed to retrieve the page: {e}");
            exit_code(&e)
        }
    }
}

/// Search mode: fetch the results page and list (title, link) pairs.
fn search_and_list(query: &str, cache: &ResponseCache) -> i32 {
    let search_url = build_search_url(query);
    match fetch_url(&search_url, ACCEPT_HTML, cache, MAX_REDIRECT_HOPS) {
        Ok(page) => {
            let results = extract_results(&page.body);
            if results.is_empty() {
                println!("No results found.");
            } else {
                for (index, result) in results.iter().enumerate() {
                    println!("{}. {}\n   {}\n", index + 1, result.title, result.link);
                }
            }
            0
        }
        Err(e) => {
            eprintln!("go2web: search failed: {e}");
            exit_code(&e)
        }
    }
}
