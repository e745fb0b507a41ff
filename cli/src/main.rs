//! Command-line driver for the cost projection engine.
//!
//! Runs the same engine the Python bindings expose, for scripting and
//! smoke-testing: one-month breakdowns, multi-month projections, summary
//! statistics, and full report files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use cost_projection_core_rs::{
    CallVolume, CostEngine, CostSummary, EngineConfig, ProjectionReport, SavingsScenario,
    DEFAULT_HORIZON_MONTHS,
};

/// Project contact center costs across Amazon Connect, Lex, and Bedrock.
#[derive(Parser, Debug)]
#[command(name = "costproj")]
#[command(version, about, long_about = None)]
struct Args {
    /// Baseline monthly call volume (100 to 10,000)
    #[arg(long, global = true, default_value_t = 1000)]
    volume: u32,

    /// JSON file overriding pricing and assumptions
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Emit JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Verbose diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One month's per-service cost breakdown
    Breakdown,

    /// Project costs month by month over a horizon
    Project {
        /// Number of months to project
        #[arg(long, default_value_t = DEFAULT_HORIZON_MONTHS)]
        months: usize,
    },

    /// Summary statistics and the savings scenario
    Summary {
        /// Number of months to project
        #[arg(long, default_value_t = DEFAULT_HORIZON_MONTHS)]
        months: usize,
    },

    /// Write a complete projection report as JSON
    Report {
        /// Number of months to project
        #[arg(long, default_value_t = DEFAULT_HORIZON_MONTHS)]
        months: usize,

        /// Output file for the report JSON
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Command::Project { months }
    | Command::Summary { months }
    | Command::Report { months, .. } = &args.command
    {
        ensure!(*months > 0, "--months must be at least 1");
    }

    let engine = build_engine(args.config.as_deref())?;
    let volume = CallVolume::new(args.volume).context("invalid --volume")?;

    match &args.command {
        Command::Breakdown => run_breakdown(&engine, volume, args.json),
        Command::Project { months } => run_project(&engine, volume, *months, args.json),
        Command::Summary { months } => run_summary(&engine, volume, *months, args.json),
        Command::Report { months, output } => run_report(&engine, volume, *months, output),
    }
}

/// Build the engine, applying JSON config overrides when given.
fn build_engine(config_path: Option<&Path>) -> Result<CostEngine> {
    let config = match config_path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            let config: EngineConfig = serde_json::from_str(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?;
            log::debug!("loaded config overrides from {}", path.display());
            config
        }
        None => EngineConfig::default(),
    };

    Ok(CostEngine::new(config)?)
}

fn run_breakdown(engine: &CostEngine, volume: CallVolume, json: bool) -> Result<()> {
    let breakdown = engine.monthly_costs(volume);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    println!("Monthly cost breakdown at {} interactions", group(volume.get() as u64));
    println!();
    println!("  Amazon Connect   {:>12}", format_usd(breakdown.connect.monthly_cost));
    println!("    voice minutes            {:>10}", group(breakdown.connect.voice_minutes));
    println!("    chat messages            {:>10}", group(breakdown.connect.chat_messages));
    println!("  Amazon Lex       {:>12}", format_usd(breakdown.lex.monthly_cost));
    println!("    voice requests           {:>10}", group(breakdown.lex.voice_requests));
    println!("    text requests            {:>10}", group(breakdown.lex.text_requests));
    println!("  Amazon Bedrock   {:>12}", format_usd(breakdown.bedrock.monthly_cost));
    println!("    knowledge base queries   {:>10}", group(breakdown.bedrock.knowledge_base_queries));
    println!("    agent invocations        {:>10}", group(breakdown.bedrock.agent_invocations));
    println!();
    println!("  Total            {:>12}", format_usd(breakdown.total_monthly_cost));

    Ok(())
}

fn run_project(engine: &CostEngine, volume: CallVolume, months: usize, json: bool) -> Result<()> {
    log::debug!("projecting {} months from baseline {}", months, volume);
    let projection = engine.project(volume, months);

    if json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
        return Ok(());
    }

    println!(
        "Cost projection: {} baseline interactions over {} months",
        group(volume.get() as u64),
        months
    );
    println!();
    println!("  {:>5}  {:>8}  {:>12}  {:>14}", "month", "volume", "monthly", "cumulative");
    for entry in projection.months() {
        println!(
            "  {:>5}  {:>8}  {:>12}  {:>14}",
            entry.month,
            group(entry.call_volume as u64),
            format_usd(entry.costs.total_monthly_cost),
            format_usd(entry.cumulative_cost)
        );
    }
    println!();
    println!("  Final cumulative cost: {}", format_usd(projection.final_cumulative_cost()));

    Ok(())
}

fn run_summary(engine: &CostEngine, volume: CallVolume, months: usize, json: bool) -> Result<()> {
    let projection = engine.project(volume, months);
    let summary = CostSummary::from_projection(&projection);
    let savings = SavingsScenario::from_projection(&projection);

    if json {
        let payload = serde_json::json!({
            "summary": summary,
            "savings": savings,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!(
        "Projection summary: {} baseline interactions over {} months",
        group(volume.get() as u64),
        months
    );
    println!();
    println!("  First year total     {:>14}", format_usd(summary.first_year_total));
    println!("  Horizon total        {:>14}", format_usd(summary.horizon_total));
    println!("  Average month (y1)   {:>14}", format_usd(summary.average_monthly_first_year));
    println!("  Average month (all)  {:>14}", format_usd(summary.average_monthly_total));
    println!("  Peak month           {:>14}", format_usd(summary.peak_monthly_cost));
    println!("  Lowest month         {:>14}", format_usd(summary.lowest_monthly_cost));
    println!();
    println!("  Standard             {:>14}", format_usd(savings.standard));
    println!("  Optimized            {:>14}", format_usd(savings.optimized));
    println!(
        "  Savings              {:>14}  ({:.2}%)",
        format_usd(savings.savings),
        savings.savings_percentage
    );

    Ok(())
}

fn run_report(engine: &CostEngine, volume: CallVolume, months: usize, output: &Path) -> Result<()> {
    let report = ProjectionReport::generate(engine, volume, months)?;
    let json = report.to_json()?;
    fs::write(output, &json).with_context(|| format!("failed to write {}", output.display()))?;

    println!("Report {} written to {}", report.report_id, output.display());
    println!("Config fingerprint: {}", report.config_hash);

    Ok(())
}

/// Format a dollar amount with thousands separators, e.g. `$12,345.60`.
fn format_usd(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}${}.{:02}", sign, group((cents / 100) as u64), cents % 100)
}

/// Group a count into thousands, e.g. `1234567` becomes `1,234,567`.
fn group(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
