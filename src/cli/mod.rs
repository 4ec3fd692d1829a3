// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap and hands each
// subcommand to its use case in Layer 2. Results are printed
// here; diagnostics go through tracing (stderr).

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{CheckArgs, Commands};

use crate::application::{
    check_use_case::CheckUseCase,
    clean_use_case::CleanUseCase,
    paragraphs_use_case::ParagraphsUseCase,
    preprocess_use_case::PreprocessUseCase,
    report::RunReport,
};

#[derive(Parser, Debug)]
#[command(
    name = "qa-corpus-clean",
    version,
    about = "Clean and normalise question/answer JSONL datasets."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case. Routes only, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Paragraphs(args) => {
                let report = ParagraphsUseCase::new(args.into()).execute()?;
                println!("Successfully processed {} entries", report.written);
                print_footer(&report);
            }
            Commands::Clean(args) => {
                let report = CleanUseCase::new(args.into()).execute()?;
                println!("Cleaned {} lines.", report.written);
                print_footer(&report);
            }
            Commands::Preprocess(args) => {
                let report = PreprocessUseCase::new(args.into()).execute()?;
                println!("Preprocessed {} records.", report.written);
                print_footer(&report);
            }
            Commands::Check(args) => run_check(args)?,
        }
        Ok(())
    }
}

fn print_footer(report: &RunReport) {
    if report.stats.skipped() > 0 {
        println!(
            "Skipped {} lines ({} malformed, {} non-record)",
            report.stats.skipped(),
            report.stats.malformed,
            report.stats.non_record
        );
    }
    println!("Saved to {}", report.output.display());
}

fn run_check(args: CheckArgs) -> Result<()> {
    let report = CheckUseCase::new(args.lexicon_dir.as_str(), args.sample).execute()?;
    println!(
        "Lexicon '{}': {} stopwords, {} lemma exceptions",
        args.lexicon_dir, report.stopwords, report.exceptions
    );
    println!("{:?}", report.tokens);
    Ok(())
}
