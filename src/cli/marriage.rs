use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::matching::MarriageMatching;
use crate::core::types::MarriageOptimality;
use crate::matching::{marriage_blocking_pairs, solve_stable_marriage};
use crate::parsing::instance::{parse_marriage_file, MarriageInstance};

#[derive(Args)]
pub struct MarriageArgs {
    /// Instance file (JSON with "suitors" and "reviewers")
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Side the matching should favour: suitor or reviewer
    #[arg(long, default_value = "suitor")]
    pub optimal: MarriageOptimality,

    /// Check the result for blocking pairs (exits with an error if any exist)
    #[arg(long)]
    pub verify: bool,
}

pub fn run(args: MarriageArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let instance = parse_marriage_file(&args.input)?;

    if verbose {
        eprintln!(
            "Loaded {} suitors and {} reviewers",
            instance.suitors.len(),
            instance.reviewers.len()
        );
    }

    let matching = solve_stable_marriage(&instance.suitors, &instance.reviewers, args.optimal)?;

    let blocking = args.verify.then(|| blocking_pairs(&instance, &matching, args.optimal));

    match format {
        OutputFormat::Text => print_text(&matching, args.optimal, blocking.as_deref()),
        OutputFormat::Json => print_json(&matching, args.optimal, blocking.as_deref())?,
        OutputFormat::Tsv => print_tsv(&matching, args.optimal),
    }

    if let Some(pairs) = &blocking {
        if !pairs.is_empty() {
            anyhow::bail!("Matching is not stable: {} blocking pair(s)", pairs.len());
        }
    }

    Ok(())
}

fn blocking_pairs(
    instance: &MarriageInstance,
    matching: &MarriageMatching<String>,
    optimal: MarriageOptimality,
) -> Vec<(String, String)> {
    match optimal {
        MarriageOptimality::Suitor => {
            marriage_blocking_pairs(&instance.suitors, &instance.reviewers, matching)
        }
        MarriageOptimality::Reviewer => {
            marriage_blocking_pairs(&instance.reviewers, &instance.suitors, matching)
        }
    }
}

fn sides(optimal: MarriageOptimality) -> (&'static str, &'static str) {
    match optimal {
        MarriageOptimality::Suitor => ("suitor", "reviewer"),
        MarriageOptimality::Reviewer => ("reviewer", "suitor"),
    }
}

fn print_text(
    matching: &MarriageMatching<String>,
    optimal: MarriageOptimality,
    blocking: Option<&[(String, String)]>,
) {
    println!("Stable Marriage ({optimal}-optimal)");
    println!("{}", "=".repeat(60));

    for (proposer, partner) in matching.iter() {
        println!("  {proposer} -> {partner}");
    }

    if let Some(pairs) = blocking {
        if pairs.is_empty() {
            println!("\nStable: yes");
        } else {
            println!("\nStable: no");
            for (a, b) in pairs {
                println!("  blocking pair: {a} / {b}");
            }
        }
    }
}

fn print_json(
    matching: &MarriageMatching<String>,
    optimal: MarriageOptimality,
    blocking: Option<&[(String, String)]>,
) -> anyhow::Result<()> {
    let mut output = serde_json::json!({
        "problem": "stable_marriage",
        "optimal": optimal,
        "matching": matching,
    });

    if let Some(pairs) = blocking {
        output["stable"] = serde_json::json!(pairs.is_empty());
        output["blocking_pairs"] = serde_json::json!(pairs);
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(matching: &MarriageMatching<String>, optimal: MarriageOptimality) {
    let (proposers, partners) = sides(optimal);
    println!("{proposers}\t{partners}");
    for (proposer, partner) in matching.iter() {
        println!("{proposer}\t{partner}");
    }
}
