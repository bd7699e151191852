use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use polyfinder::input::ShareDocument;
use polyfinder::reconstruct::reconstruct;

#[derive(Parser)]
#[command(name = "polyfinder")]
#[command(about = "Reconstructs a shared secret from base-encoded polynomial shares", long_about = None)]
struct Cli {
    /// Path to the JSON share document
    #[arg(default_value = "input.json")]
    input: PathBuf,

    /// Print the result as a single JSON object instead of a report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let document = ShareDocument::load(&cli.input)?;
    let shares = document.into_share_set()?;

    for key in &shares.skipped {
        eprintln!("Warning: skipping invalid share key '{key}'");
    }

    if !cli.json {
        println!("Polynomial information:");
        println!("  Shares provided (n): {}", shares.n);
        println!("  Threshold (k): {}", shares.k);
        println!("  Polynomial degree: {}", shares.k.saturating_sub(1));
        println!("\nDecoded points (x, y):");
        for point in &shares.points {
            println!("  {point}");
        }
    }

    let result = reconstruct(&shares)?;

    if cli.json {
        let verification = result.verification.as_ref().map(|v| {
            serde_json::json!({
                "alternate_secret": v.alternate_secret.to_string(),
                "matched": v.matched,
            })
        });
        let output = serde_json::json!({
            "secret": result.secret.to_string(),
            "contributions": result
                .contributions
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>(),
            "verification": verification,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("\nLagrange interpolation at x = 0:");
    for (i, contribution) in result.contributions.iter().enumerate() {
        println!("  L{i}(0) contribution: {contribution}");
    }

    println!("\n{}", "=".repeat(50));
    println!("Secret (constant term c): {}", result.secret);
    println!("{}", "=".repeat(50));

    if let Some(verification) = &result.verification {
        if verification.matched {
            println!(
                "\nVerification successful: alternate point set confirms {}",
                verification.alternate_secret
            );
        } else {
            println!(
                "\nVerification WARNING: alternate point set gave a different secret: {}",
                verification.alternate_secret
            );
        }
    }

    Ok(())
}
