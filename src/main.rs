use clap::Parser;
use log::debug;
use std::io;

use crate::cli::CliArgs;
use crate::config::resolve_settings;
use crate::generator::generate;
use crate::output::write_list;

mod cli;
mod config;
mod filter;
mod generator;
mod output;
mod phone;
mod pool;
mod variants;

/// Entries of the final list echoed to stdout as a sample.
const SAMPLE_SIZE: usize = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = CliArgs::parse();
    let settings = resolve_settings(&args)?;
    debug!("Resolved settings: {settings:?}");

    let base = match &args.base {
        Some(base) => base.clone(),
        None => prompt("Enter base text (e.g. a name): ")?,
    };
    let phone = match &args.phone {
        Some(phone) => phone.clone(),
        None => prompt("Enter phone number (optional): ")?,
    };
    let phone = if phone.trim().is_empty() {
        None
    } else {
        Some(phone)
    };

    let candidates = generate(&base, phone.as_deref(), &settings);
    if candidates.is_empty() {
        println!("No candidates generated. Provide a longer base text.");
        return Ok(());
    }

    write_list(&settings.output, &candidates)?;

    println!(
        "Wrote {} candidates to {}",
        candidates.len(),
        settings.output.display()
    );
    println!("Sample:");
    for candidate in candidates.iter().take(SAMPLE_SIZE) {
        println!("  {candidate}");
    }

    Ok(())
}

fn prompt(message: &str) -> Result<String, Box<dyn std::error::Error>> {
    println!("{message}");
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
