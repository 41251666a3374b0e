//! Robust vs classical report for a few sample shapes
//!
//! Run with: RUST_LOG=debug cargo run --example summary_report

use anyhow::Result;
use statguard::{classical_summary, compare, huber_mean, robust_summary, to_csv, to_json_pretty};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== StatGuard Summary Report ===\n");

    let samples: [(&str, Vec<f64>); 3] = [
        (
            "Exam scores",
            vec![87.30, 84.00, 85.40, 78.00, 85.00, 89.00, 79.00, 89.00, 76.00, 86.50],
        ),
        ("Single spike", vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0]),
        ("Mild skew", vec![10.0, 11.0, 12.0, 13.0, 14.0, 19.0]),
    ];

    for (label, data) in &samples {
        info!(label, n = data.len(), "analysing sample");
        println!("--- {label} ({} values) ---", data.len());

        let robust = robust_summary(data, true, 2)?;
        let classical = classical_summary(data, 2)?;
        let huber = huber_mean(data)?;

        println!("  Median:            {}", robust.median);
        println!("  Mean:              {}", classical.mean);
        println!(
            "  Huber mean:        {:.3} ({} iterations{})",
            huber.value,
            huber.iterations,
            if huber.converged { "" } else { ", not converged" }
        );
        println!("  IQR / MAD:         {} / {}", robust.iqr, robust.mad);
        println!("  S* / std dev:      {} / {}", robust.robust_deviation, classical.standard_deviation);
        println!(
            "  95% CI:            [{:.3}, {:.3}]",
            robust.confidence_interval.lower, robust.confidence_interval.upper
        );
        println!("  Tukey outliers:    {:?}", robust.outliers);
        println!("  |Z| > 3 outliers:  {:?}", classical.z_score_outliers);

        let report = compare(data, 2)?;
        println!("  Verdict:           {}", report.verdict);
        println!();
    }

    let last = robust_summary(&samples[1].1, true, 2)?;
    println!("JSON export:\n{}\n", to_json_pretty(&last)?);
    println!("CSV export:\n{}", to_csv(&last, b',')?);

    Ok(())
}
