//! atlasquiz: country learning and quiz tool on the terminal
//!
//! This binary drives `atlasquiz-core` from the command line: it loads the
//! catalog once, then either answers a single query or runs an interactive
//! learn/quiz session.
//!
//! Usage examples
//! --------------
//!
//! - Show catalog statistics
//!   $ atlasquiz stats
//!
//! - List the countries of a region
//!   $ atlasquiz countries --region europe
//!
//! - See how a (possibly misspelled) name resolves
//!   $ atlasquiz resolve Kossovo
//!
//! - Print the render plan of a country as JSON
//!   $ atlasquiz plan Italien --mode quiz
//!
//! - Play
//!   $ atlasquiz play --mode quiz --region africa
//!
//! Data source
//! -----------
//!
//! The data directory must hold `europe.json`, `asia_oceania.json`,
//! `africa.json`, `north_america.json`, `south_america.json` (lists of
//! `{"country": "..."}`) and `geo.json` (a GeoJSON FeatureCollection whose
//! feature ids are alpha-3 codes). A catalog snapshot is cached next to them.
mod args;
mod logger;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use atlasquiz_core::loader::GEO_FEATURES_URL;
use atlasquiz_core::prelude::*;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logger::init_logger(args.verbose);

    let data_dir = args.data_dir.unwrap_or_else(Catalog::default_data_dir);
    let mut sources = DataSources::in_dir(&data_dir);
    if args.no_cache {
        sources = sources.without_snapshot();
    }
    log::debug!("data directory: {}", data_dir.display());

    // Commands that don't need the catalog
    match &args.command {
        Commands::Regions => {
            for choice in RegionChoice::list() {
                println!("{choice}");
            }
            return Ok(());
        }
        Commands::Resolve { name } => {
            let resolver = sources.resolver().with_context(|| {
                format!("cannot read {}", sources.aliases.display())
            })?;
            let id = resolver.resolve(name);
            println!("Display name:   {}", id.display_name);
            println!("Canonical name: {}", id.canonical_name);
            println!(
                "Feature code:   {}",
                id.feature_code.as_deref().unwrap_or("(none)")
            );
            return Ok(());
        }
        _ => {}
    }

    let catalog = Catalog::load_from(&sources).with_context(|| {
        format!(
            "cannot build the country catalog from {} (country outlines: {GEO_FEATURES_URL})",
            data_dir.display()
        )
    })?;

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats();
            println!("Catalog statistics:");
            println!("  Countries: {}", stats.entries);
            println!("  Europe:    {}", stats.europe);
            println!("  Asia:      {}", stats.asia);
            println!("  Africa:    {}", stats.africa);
            println!("  Americas:  {}", stats.americas);
            println!("  Oceania:   {}", stats.oceania);
            println!("  Without feature code: {}", stats.unmapped);
            println!("  Without shape:        {}", stats.degenerate);
        }

        Commands::Countries { region } => {
            for name in catalog.names_for(region) {
                match catalog.by_display_name(name) {
                    Some(e) => println!(
                        "{} ({}, {})",
                        name,
                        e.canonical_name(),
                        e.feature_code().unwrap_or("-")
                    ),
                    None => println!("{name}"),
                }
            }
        }

        Commands::Plan { name, mode } => {
            if catalog.by_display_name(&name).is_none() {
                eprintln!("No country named: {name}");
            }
            let plan = render_plan_for(&catalog, &name, mode);
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }

        Commands::Play { mode, region, seed } => {
            let mut app = QuizApp::new(Arc::new(catalog));
            app.choose_mode(mode);
            match seed {
                Some(seed) => app.choose_region_with(region, &mut StdRng::seed_from_u64(seed)),
                None => app.choose_region(region),
            }
            play(&mut app)?;
        }

        Commands::Regions | Commands::Resolve { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn print_state(app: &QuizApp) {
    let state = app.current_display_state();
    let position = match app.session().order().len() {
        0 => String::new(),
        n => format!("[{}/{}] ", app.session().index() + 1, n),
    };
    println!("{position}{}  <{}>", state.headline(), app.current_render_plan().kind());
}

/// Ask until `label` parses; `None` when stdin closes or the user types `q`.
fn ask<T, I>(lines: &mut I, label: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        print!("{label}: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;
        let answer = line.trim();
        if answer == "q" {
            return Ok(None);
        }
        match answer.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(e) => eprintln!("{e}"),
        }
    }
}

/// Back at the menu: choose a mode, then a region. `false` ends the game.
fn menu<I>(app: &mut QuizApp, lines: &mut I) -> anyhow::Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
{
    print_state(app);
    let Some(mode) = ask::<Mode, _>(lines, "mode (learn, quiz)")? else {
        return Ok(false);
    };
    app.choose_mode(mode);

    let choices: Vec<String> = app.list_regions().iter().map(|c| c.to_string()).collect();
    let label = format!("region ({})", choices.join(", "));
    let Some(region) = ask::<RegionChoice, _>(lines, &label)? else {
        return Ok(false);
    };
    app.choose_region(region);
    Ok(true)
}

fn play(app: &mut QuizApp) -> anyhow::Result<()> {
    println!("n=next  b=back  s=show  p=plan  m=menu  q=quit");
    print_state(app);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while let Some(line) = lines.next() {
        match line?.trim() {
            "n" | "" => app.advance(),
            "b" => app.go_back(),
            "s" => app.reveal(),
            "p" => {
                println!("{}", serde_json::to_string_pretty(&app.current_render_plan())?);
                continue;
            }
            "m" => {
                app.return_to_menu();
                if !menu(app, &mut lines)? {
                    break;
                }
            }
            "q" => break,
            other => {
                eprintln!("unknown command: {other}");
                continue;
            }
        }
        print_state(app);
        io::stdout().flush()?;
    }
    Ok(())
}
