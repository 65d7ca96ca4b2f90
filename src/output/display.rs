//! Display functions for command results

use super::formatters::{create_progress_bar, format_chain, format_duration};
use crate::commands::{GraphListing, SolveSummary, StopReason, WordListing};
use crate::core::Solution;
use colored::Colorize;

/// Print one solution as it streams in
pub fn print_solution(solution: &Solution) {
    println!(
        "{} {}",
        format!("[{}]", solution.len()).bright_black(),
        format_chain(solution).bright_yellow()
    );
}

/// Print the summary of a solve run
pub fn print_solve_summary(summary: &SolveSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER BOXED:".bright_cyan().bold(),
        summary.letter_box.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   Candidate words:  {}", summary.candidates);
    println!(
        "   Solutions:        {}",
        summary.solutions.to_string().bright_yellow().bold()
    );
    println!("   Starting words:   {}", summary.report.started);
    println!("   States explored:  {}", summary.report.search.explored);
    println!("   Workers:          {}", summary.report.workers);
    println!("   Time taken:       {}", format_duration(summary.duration));

    if let Some(best) = &summary.shortest {
        println!(
            "   Shortest:         {} ({} letters)",
            format_chain(best).green(),
            best.letters()
        );
    }

    if !summary.by_length.is_empty() {
        println!("\n📈 {}", "By chain length:".bright_cyan().bold());
        let most = summary.by_length.values().copied().max().unwrap_or(0);
        for (&length, &count) in &summary.by_length {
            let bar = create_progress_bar(count as f64, most as f64, 40);
            println!("   {length} words: {} {count:5}", bar.green());
        }
    }

    println!();
    match summary.stopped {
        None if summary.solutions == 0 => println!(
            "{}",
            "❌ No solutions within the chain limit".red().bold()
        ),
        None => println!("{}", "✅ Search complete".green().bold()),
        Some(StopReason::Limit) => println!(
            "{}",
            "⏹  Stopped at the solution limit".yellow().bold()
        ),
        Some(StopReason::Timeout) => println!(
            "{}",
            "⏱  Timed out, results are partial".yellow().bold()
        ),
        Some(StopReason::Cancelled) => println!(
            "{}",
            "⏹  Cancelled, results are partial".yellow().bold()
        ),
    }
}

/// Print the candidate words of a box
pub fn print_words(listing: &WordListing) {
    println!(
        "{} {} {}",
        listing.words.len().to_string().bright_yellow().bold(),
        "candidate words for".bright_cyan(),
        listing.letter_box.to_uppercase().bright_yellow()
    );
    for word in &listing.words {
        println!("  {word}");
    }
}

/// Print candidate words grouped by first and last letter
pub fn print_graph(listing: &GraphListing) {
    println!(
        "{} {} {}",
        listing.candidates.to_string().bright_yellow().bold(),
        "candidate words for".bright_cyan(),
        listing.letter_box.to_uppercase().bright_yellow()
    );
    for (first, ends) in &listing.links {
        println!("\n{}", first.to_ascii_uppercase().to_string().bright_cyan().bold());
        for (last, words) in ends {
            println!(
                "  {} {}",
                format!("→ {}", last.to_ascii_uppercase()).bright_black(),
                words.join(", ")
            );
        }
    }
}

/// Print the embedded word lists
pub fn print_wordlists(lists: &[(&str, usize)]) {
    println!("{}", "Embedded word lists:".bright_cyan().bold());
    for (name, count) in lists {
        println!("  {} {count:>6} words", format!("{name:<12}").bright_yellow());
    }
    println!(
        "\n{}",
        "Any other -w value is read as a file with one word per line.".bright_black()
    );
}
