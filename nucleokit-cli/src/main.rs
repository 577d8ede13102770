use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "nucleokit")]
#[command(about = "ORF finding, translation and motif scanning for DNA sequences")]
#[command(version)]
#[command(long_about = "
nucleokit reads single-record FASTA files and reports open reading frames,
translations and position-weight-matrix scores.

Examples:
  nucleokit motif profile.txt genome.fa scores.tsv
  nucleokit orf genome.fa --all
  nucleokit translate cds.fa --frame 1
  nucleokit check-orf ATGAAATAG
  nucleokit stats genome.fa
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every window of a sequence against a motif profile on both strands
    Motif {
        /// Whitespace-delimited weight table with rows A, C, G, T
        profile: PathBuf,

        /// Sequence file (FASTA, single record)
        sequence: PathBuf,

        /// Output TSV path (stdout if omitted)
        output: Option<PathBuf>,
    },

    /// Report the longest open reading frame across the three forward frames
    Orf {
        /// Sequence file (FASTA, single record)
        sequence: PathBuf,

        /// List every ORF with its frame and start offset
        #[arg(long)]
        all: bool,
    },

    /// Translate a coding sequence into amino acids
    Translate {
        /// Sequence file (FASTA, single record)
        sequence: PathBuf,

        /// Reading frame offset
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
        frame: u8,
    },

    /// Print the reverse complement of a sequence
    Revcomp {
        /// Sequence file (FASTA, single record)
        sequence: PathBuf,
    },

    /// Print base counts, GC content and the last start codon
    Stats {
        /// Sequence file (FASTA, single record)
        sequence: PathBuf,
    },

    /// Check whether a literal string is a complete ORF
    CheckOrf {
        /// Candidate bases, e.g. ATGAAATAG
        candidate: String,
    },
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Motif {
            profile,
            sequence,
            output,
        } => commands::motif::execute(&profile, &sequence, output.as_deref(), &mut out)?,
        Commands::Orf { sequence, all } => commands::orf::execute(&sequence, all, &mut out)?,
        Commands::Translate { sequence, frame } => {
            commands::translate::execute(&sequence, frame as usize, &mut out)?
        }
        Commands::Revcomp { sequence } => commands::translate::revcomp(&sequence, &mut out)?,
        Commands::Stats { sequence } => commands::stats::execute(&sequence, &mut out)?,
        Commands::CheckOrf { candidate } => commands::orf::check(&candidate, &mut out)?,
    }

    Ok(())
}
