//! Letter Boxed Solver - CLI
//!
//! Finds chains of dictionary words that use every letter of a Letter Boxed
//! puzzle, streaming solutions as worker threads find them.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use letterboxed::{
    commands::{SolveConfig, list_graph, list_words, run_solve},
    core::{DEFAULT_MAX_CHAIN, DEFAULT_MIN_LENGTH, LetterBox},
    output::{
        formatters::format_box, print_graph, print_solution, print_solve_summary,
        print_wordlists, print_words,
    },
    solver::{CancelToken, Solver},
    wordlists::{self, DEFAULT_WORDLIST, load_wordlists},
};
use log::{debug, warn};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "letterboxed",
    about = "Letter Boxed solver: finds word chains covering every letter of the box",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: an embedded list name ('solutions', 'common') or a path to a file; repeat to merge
    #[arg(short = 'w', long, global = true, default_values_t = [DEFAULT_WORDLIST.to_string()])]
    wordlist: Vec<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    monochrome: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every solution for a box (default)
    Solve {
        #[command(flatten)]
        puzzle: BoxArgs,

        /// Stop after this many solutions
        #[arg(short, long)]
        limit: Option<usize>,

        /// Stop after this many seconds
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Print only the summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the words the box can spell
    Words {
        #[command(flatten)]
        puzzle: BoxArgs,
    },

    /// Show candidate words grouped by first and last letter
    Graph {
        #[command(flatten)]
        puzzle: BoxArgs,
    },

    /// List the embedded word lists
    Wordlists,
}

#[derive(Args)]
struct BoxArgs {
    /// Box sides: one 'rul-eya-gdh-opb' argument or four separate sides
    #[arg(default_values_t = ["rul-eya-gdh-opb".to_string()])]
    sides: Vec<String>,

    /// Shortest word allowed
    #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
    min: usize,

    /// Longest chain allowed
    #[arg(long, default_value_t = DEFAULT_MAX_CHAIN)]
    max: usize,

    /// Worker threads (default: one per core)
    #[arg(short, long)]
    concurrency: Option<usize>,
}

impl BoxArgs {
    fn letter_box(&self) -> Result<LetterBox> {
        let letter_box = LetterBox::parse(self.sides.as_slice())
            .with_context(|| format!("invalid box `{}`", self.sides.join(" ")))?
            .with_min_length(self.min)
            .with_max_chain(self.max);
        Ok(match self.concurrency {
            Some(concurrency) => letter_box.with_concurrency(concurrency),
            None => letter_box,
        })
    }
}

impl Default for BoxArgs {
    fn default() -> Self {
        Self {
            sides: vec!["rul-eya-gdh-opb".to_string()],
            min: DEFAULT_MIN_LENGTH,
            max: DEFAULT_MAX_CHAIN,
            concurrency: None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if cli.monochrome {
        colored::control::set_override(false);
    }

    let command = cli.command.unwrap_or(Commands::Solve {
        puzzle: BoxArgs::default(),
        limit: None,
        timeout: None,
        quiet: false,
    });

    match command {
        Commands::Solve {
            puzzle,
            limit,
            timeout,
            quiet,
        } => run_solve_command(&load_solver(&cli.wordlist)?, &puzzle, limit, timeout, quiet),
        Commands::Words { puzzle } => {
            let solver = load_solver(&cli.wordlist)?;
            print_words(&list_words(&solver, &puzzle.letter_box()?));
            Ok(())
        }
        Commands::Graph { puzzle } => {
            let solver = load_solver(&cli.wordlist)?;
            print_graph(&list_graph(&solver, &puzzle.letter_box()?));
            Ok(())
        }
        Commands::Wordlists => {
            run_wordlists_command();
            Ok(())
        }
    }
}

/// Build a solver over the merged `-w` lists
fn load_solver(lists: &[String]) -> Result<Solver> {
    let words = load_wordlists(lists).context("failed to load word lists")?;
    debug!("{} dictionary words from {}", words.len(), lists.join(", "));
    if words.is_empty() {
        warn!("word lists are empty, nothing can be solved");
    }
    Ok(Solver::new(&words))
}

fn run_solve_command(
    solver: &Solver,
    puzzle: &BoxArgs,
    limit: Option<usize>,
    timeout: Option<u64>,
    quiet: bool,
) -> Result<()> {
    let letter_box = puzzle.letter_box()?;

    let mut config = SolveConfig::new();
    if let Some(limit) = limit {
        config = config.with_limit(limit);
    }
    if let Some(secs) = timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let cancel = CancelToken::new();
    let handler_cancel = cancel.clone();
    ctrlc::set_handler(move || {
        eprintln!("\n{}", "Ctrl+C received, stopping workers...".yellow());
        handler_cancel.cancel();
    })
    .context("failed to install Ctrl+C handler")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .context("invalid spinner template")?,
    );
    let shown = format_box(&letter_box);
    spinner.set_message(format!("solving {shown}"));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut found = 0;
    let summary = run_solve(solver, &letter_box, config, &cancel, |solution| {
        found += 1;
        spinner.set_message(format!("solving {shown}: {found} found"));
        if !quiet {
            spinner.suspend(|| print_solution(solution));
        }
    });
    spinner.finish_and_clear();

    let summary = summary.context("solver failed")?;
    print_solve_summary(&summary);
    Ok(())
}

fn run_wordlists_command() {
    let lists: Vec<(&str, usize)> = wordlists::names()
        .into_iter()
        .filter_map(|name| wordlists::lookup(name).map(|words| (name, words.len())))
        .collect();
    print_wordlists(&lists);
}
