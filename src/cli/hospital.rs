use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::matching::HospitalResidentMatching;
use crate::core::types::HospitalResidentOptimality;
use crate::matching::{hospital_resident_blocking_pairs, solve_hospital_resident};
use crate::parsing::instance::{parse_hospital_resident_file, HospitalResidentInstance};

#[derive(Args)]
pub struct HospitalResidentArgs {
    /// Instance file (JSON with "hospitals", "residents" and "capacities")
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Side the matching should favour: resident or hospital
    #[arg(long, default_value = "resident")]
    pub optimal: HospitalResidentOptimality,

    /// Check the result for blocking pairs (exits with an error if any exist)
    #[arg(long)]
    pub verify: bool,
}

pub fn run(args: HospitalResidentArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let instance = parse_hospital_resident_file(&args.input)?;

    if verbose {
        let places = instance
            .capacities
            .values()
            .fold(0usize, |acc, &capacity| acc.saturating_add(capacity));
        eprintln!(
            "Loaded {} hospitals ({} places) and {} residents",
            instance.hospitals.len(),
            places,
            instance.residents.len()
        );
    }

    let matching = solve_hospital_resident(
        &instance.hospitals,
        &instance.residents,
        &instance.capacities,
        args.optimal,
    )?;

    let blocking = args.verify.then(|| {
        hospital_resident_blocking_pairs(
            &instance.hospitals,
            &instance.residents,
            &instance.capacities,
            &matching,
        )
    });

    match format {
        OutputFormat::Text => print_text(&instance, &matching, args.optimal, blocking.as_deref()),
        OutputFormat::Json => print_json(&instance, &matching, args.optimal, blocking.as_deref())?,
        OutputFormat::Tsv => print_tsv(&matching),
    }

    if let Some(pairs) = &blocking {
        if !pairs.is_empty() {
            anyhow::bail!("Matching is not stable: {} blocking pair(s)", pairs.len());
        }
    }

    Ok(())
}

fn unmatched_residents<'a>(
    instance: &'a HospitalResidentInstance,
    matching: &HospitalResidentMatching<String>,
) -> Vec<&'a String> {
    instance
        .residents
        .players()
        .filter(|resident| matching.hospital_of(resident).is_none())
        .collect()
}

fn print_text(
    instance: &HospitalResidentInstance,
    matching: &HospitalResidentMatching<String>,
    optimal: HospitalResidentOptimality,
    blocking: Option<&[(String, String)]>,
) {
    println!("Hospital/Resident ({optimal}-optimal)");
    println!("{}", "=".repeat(60));

    for (hospital, residents) in matching.iter() {
        let capacity = instance.capacities.get(hospital).copied().unwrap_or(0);
        println!(
            "  {hospital} ({}/{capacity}): {}",
            residents.len(),
            residents.join(", ")
        );
    }

    let unmatched = unmatched_residents(instance, matching);
    if !unmatched.is_empty() {
        let names: Vec<&str> = unmatched.iter().map(|r| r.as_str()).collect();
        println!("\nUnmatched residents: {}", names.join(", "));
    }

    if let Some(pairs) = blocking {
        if pairs.is_empty() {
            println!("\nStable: yes");
        } else {
            println!("\nStable: no");
            for (resident, hospital) in pairs {
                println!("  blocking pair: {resident} / {hospital}");
            }
        }
    }
}

fn print_json(
    instance: &HospitalResidentInstance,
    matching: &HospitalResidentMatching<String>,
    optimal: HospitalResidentOptimality,
    blocking: Option<&[(String, String)]>,
) -> anyhow::Result<()> {
    let mut output = serde_json::json!({
        "problem": "hospital_resident",
        "optimal": optimal,
        "matching": matching,
        "unmatched_residents": unmatched_residents(instance, matching),
    });

    if let Some(pairs) = blocking {
        output["stable"] = serde_json::json!(pairs.is_empty());
        output["blocking_pairs"] = serde_json::json!(pairs);
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(matching: &HospitalResidentMatching<String>) {
    println!("hospital\tresident");
    for (hospital, residents) in matching.iter() {
        for resident in residents {
            println!("{hospital}\t{resident}");
        }
    }
}
