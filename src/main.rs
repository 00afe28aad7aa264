use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use callrisk::{
    analyze_source, parse_transcript_file, render_analysis, render_report, write_analyses_json,
    AggregateReport, DirectorySource, FileReportSink, Lexicon, ReportSink, RiskEngine, RiskLevel,
    ScoringConfig, StdoutReportSink,
};

#[derive(Parser)]
#[command(name = "callrisk")]
#[command(author, version, about = "Collection risk assessment from call transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze every transcript in a directory and write a portfolio report
    Batch {
        /// Directory containing transcript JSON files
        #[arg(short, long, default_value = "transcripts")]
        dir: PathBuf,

        /// Output file for the text report (default: timestamped file name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the analyses as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Scoring configuration overrides (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a single transcript
    Analyze {
        /// Input transcript file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the analysis as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Scoring configuration overrides (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Batch {
            dir,
            output,
            json,
            config,
            verbose,
        } => {
            setup_logging(verbose);
            let engine = build_engine(config)?;
            run_batch(&engine, dir, output, json).await
        }
        Commands::Analyze {
            input,
            json,
            config,
            verbose,
        } => {
            setup_logging(verbose);
            let engine = build_engine(config)?;
            analyze_single(&engine, input, json)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn build_engine(config: Option<PathBuf>) -> Result<RiskEngine> {
    let config = match config {
        Some(path) => {
            info!("Loading scoring config from {:?}", path);
            ScoringConfig::from_json_file(&path)?
        }
        None => ScoringConfig::default(),
    };
    Ok(RiskEngine::new(Arc::new(Lexicon::builtin()), config)?)
}

async fn run_batch(
    engine: &RiskEngine,
    dir: PathBuf,
    output: Option<PathBuf>,
    json: Option<PathBuf>,
) -> Result<()> {
    info!("Analyzing transcripts in {:?}", dir);
    let source = DirectorySource::new(&dir)?;
    let outcome = analyze_source(engine, Arc::new(source)).await?;

    if outcome.analyses.is_empty() {
        println!("No transcripts could be analyzed in {:?}", dir);
        for skip in &outcome.skipped {
            println!("  • {}: {}", skip.source_id, skip.reason);
        }
        return Ok(());
    }

    if let Some(json_path) = json {
        write_analyses_json(&outcome.analyses, &json_path)?;
        info!("Analyses written to {:?}", json_path);
    }

    let generated_at = Local::now();
    let run_id = outcome.run_id.to_string();
    let report_text = render_report(
        outcome.analyses.clone(),
        generated_at,
        Some(&run_id),
        &outcome.skipped,
    );

    let output = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "risk_analysis_report_{}.txt",
            generated_at.format("%Y%m%d_%H%M%S")
        ))
    });
    let sink = FileReportSink::new(&output);
    sink.write_report(&report_text)?;

    println!("Analyzed {} transcripts", outcome.analyses.len());
    if !outcome.skipped.is_empty() {
        println!("Skipped {} transcripts (see report)", outcome.skipped.len());
    }

    let Some(report) = AggregateReport::build(outcome.analyses) else {
        return Ok(());
    };

    println!();
    println!("Risk Analysis Summary");
    println!("=====================");
    for level in RiskLevel::ALL {
        let count = report.level_count(level);
        if count > 0 {
            println!("{} Risk: {} customers", level, count);
        }
    }
    println!();
    println!("Full report saved to: {}", output.display());

    let priority: Vec<_> = report.priority_cases().collect();
    if !priority.is_empty() {
        println!();
        println!(
            "HIGH PRIORITY: {} customers need immediate attention:",
            priority.len()
        );
        for analysis in priority {
            println!(
                "  • {} - {} ({:.1}/100)",
                analysis.source_id, analysis.risk_level, analysis.risk_score
            );
        }
    }

    Ok(())
}

fn analyze_single(engine: &RiskEngine, input: PathBuf, json: Option<PathBuf>) -> Result<()> {
    info!("Analyzing transcript from {:?}", input);
    let record = parse_transcript_file(&input).context("Failed to load input transcript")?;

    let source_id = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    let analysis = engine.analyze(&record, &source_id);

    StdoutReportSink.write_report(render_analysis(&analysis).trim_end())?;

    if let Some(json_path) = json {
        write_analyses_json(std::slice::from_ref(&analysis), &json_path)?;
        info!("Analysis written to {:?}", json_path);
    }

    Ok(())
}
