use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use needlework::bench::{load_corpora, run_benchmark};
use needlework::{upper_bound_search, ChainedHashTable, Matcher};

mod cli;
use cli::display;
use cli::{BenchArgs, Cli, Commands};

/// Sorted input for the `bisect` demo.
const BISECT_ARRAY: [f64; 8] = [0.5, 1.2, 2.8, 3.3, 4.7, 5.5, 6.1, 7.0];

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => run_bench(&BenchArgs::default()),
        Some(Commands::Bench(args)) => run_bench(&args),
        Some(Commands::Search {
            file,
            pattern,
            algorithm,
        }) => run_search(&file, &pattern, &algorithm.algorithms()),
        Some(Commands::HashTable { buckets }) => {
            run_hash_table(buckets);
            Ok(())
        }
        Some(Commands::Bisect { targets }) => {
            run_bisect(&targets);
            Ok(())
        }
    };

    if let Err(e) = result {
        display::error(&e);
        std::process::exit(1);
    }
}

/// Load corpora, time every matcher, print the report.
fn run_bench(args: &BenchArgs) -> Result<()> {
    let config = args.config();
    config.validate()?;

    let corpora = load_corpora(&args.corpora).context("Failed to load corpora")?;
    for (corpus, path) in corpora.iter().zip(&args.corpora) {
        display::status(&format!(
            "Loaded {} from {} ({} characters)",
            corpus.name,
            path,
            corpus.char_len()
        ));
    }

    let report = run_benchmark(&corpora, &config).context("Benchmark failed")?;

    if args.json {
        println!("{}", report.to_json().context("Failed to serialize report")?);
    } else {
        print!("{}", display::render_report(&report, display::use_colors()));
    }
    Ok(())
}

/// Run the chosen matchers once and print where each one found the pattern.
fn run_search(
    file: &std::path::Path,
    pattern: &str,
    algorithms: &[needlework::Algorithm],
) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let results: Vec<_> = algorithms
        .iter()
        .map(|algorithm| (*algorithm, algorithm.find_str(&text, pattern)))
        .collect();

    if results.windows(2).any(|pair| pair[0].1 != pair[1].1) {
        display::warn("matchers disagree on the first occurrence");
    }

    print!("{}", display::render_matches(&results, display::use_colors()));
    Ok(())
}

fn run_hash_table(buckets: usize) {
    let mut table = ChainedHashTable::new(buckets);
    table.insert("apple", 10);
    table.insert("orange", 20);
    table.insert("banana", 30);

    table.remove(&"banana");

    for key in ["apple", "orange", "banana"] {
        match table.get(&key) {
            Some(value) => println!("{}: {}", key, value),
            None => println!("{}: None", key),
        }
    }
    display::status(&format!(
        "{} buckets, chain lengths {:?}",
        table.bucket_count(),
        table.chain_lengths()
    ));
}

fn run_bisect(targets: &[f64]) {
    println!("Array: {:?}\n", BISECT_ARRAY);
    for &target in targets {
        let result = upper_bound_search(&BISECT_ARRAY, target);
        println!("Target: {}", target);
        println!("Number of iterations: {}", result.iterations);
        match result.upper_bound {
            Some(bound) => println!("Upper bound: {}\n", bound),
            None => println!("Upper bound: None\n"),
        }
    }
}
