use std::collections::HashSet;
use std::io::{self, Write};

use itertools::Itertools;

use crate::{
    configuration::Settings,
    domain::{
        engine::Engine,
        search_target::{parse_engine_selection, validate_domain, SearchTarget},
    },
    services::{
        engine_scraper::scrape_engine,
        fetcher::{parse_proxy, FetchConfig, Fetcher},
        report::save_results,
    },
};

/// One interactive session: prompt, validate, scrape the selected engines
/// sequentially, display, optionally save. All input validation happens
/// before the first network call. Returns Ok on every non-panic path so the
/// process exits 0 regardless of outcome.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    print_banner();

    let domain_input = prompt("\n[?] Enter target domain (e.g., example.com): ")?;
    let Some(domain) = validate_domain(&domain_input) else {
        println!("[-] Invalid domain format!");
        return Ok(());
    };

    let limit_input = prompt(&format!(
        "[?] Enter search limit (default {}): ",
        settings.default_limit
    ))?;
    let limit = limit_input
        .trim()
        .parse::<usize>()
        .unwrap_or(settings.default_limit);

    println!("\n[?] Select search engines:");
    for engine in Engine::ALL {
        println!("{}. {}", engine.menu_key(), engine.label());
    }
    println!("5. All engines");

    let choice = prompt("\n[?] Enter your choice (1,2,3,4,5 or multiple like 1,3): ")?;
    let Some(engines) = parse_engine_selection(&choice) else {
        println!("[-] Invalid choice! Please select from 1,2,3,4,5");
        return Ok(());
    };

    let proxy_input = prompt("[?] Enter proxy (optional, e.g., http://127.0.0.1:8080): ")?;
    let proxy = match proxy_input.trim() {
        "" => None,
        raw => match parse_proxy(raw) {
            Some(url) => Some(url),
            None => {
                println!("[-] Invalid proxy format!");
                return Ok(());
            }
        },
    };

    let save_file = prompt("[?] Save results to file (optional, enter filename): ")?
        .trim()
        .to_string();

    let target = SearchTarget {
        domain,
        limit,
        engines,
    };
    let fetcher = Fetcher::new(&FetchConfig {
        user_agent: settings.user_agent.clone(),
        proxy,
        timeout: settings.timeout(),
    })?;

    println!("\n=== STARTING EMAIL SEARCH ===");

    let mut emails: HashSet<String> = HashSet::new();
    for engine in &target.engines {
        let found = scrape_engine(
            &fetcher,
            *engine,
            &target.domain,
            target.limit,
            settings.page_delay(*engine),
        )
        .await;
        emails.extend(found);
    }

    println!("\n{}", "=".repeat(60));
    println!("SEARCH RESULTS FOR: {}", target.domain);
    println!("{}", "=".repeat(60));

    if emails.is_empty() {
        println!("[-] No email addresses found!");
        return Ok(());
    }

    println!("[+] Found {} unique email addresses:\n", emails.len());
    for (i, email) in emails.iter().sorted().enumerate() {
        println!("{:2}. {}", i + 1, email);
    }

    if !save_file.is_empty() {
        match save_results(&save_file, &target.domain, &emails) {
            Ok(path) => println!("\n[+] Results saved to: {}", path.display()),
            Err(e) => log::error!("Error saving file: {:?}", e),
        }
    }

    println!("\n[+] Search completed successfully!");
    Ok(())
}

fn print_banner() {
    println!("{}", "=".repeat(60));
    println!("         MAILHUNT - domain to email finder");
    println!("  Harvests addresses for a domain via public search engines");
    println!("{}", "=".repeat(60));
}

fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
