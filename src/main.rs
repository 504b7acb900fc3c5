extern crate env_logger;
#[macro_use]
extern crate log;

use anyhow::Result;
use clap::Parser;

use orfling::{is_valid_dna, is_valid_reading_frame, normalize, Dna, Orf, SequenceReport};

mod cli;

use cli::{Cli, Commands};

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Check { seq } => {
            let bases = normalize(seq);
            if !is_valid_dna(&bases) {
                return Err(orfling::InvalidSequence::NotDna.into());
            }
            println!("valid DNA ({} bases)", bases.len());
            if is_valid_reading_frame(&bases) {
                println!("valid open reading frame");
            } else {
                println!("not an open reading frame");
            }
        }
        Commands::Describe { seq, name, json } => {
            let dna = Dna::new(name, seq)?;
            if *json {
                let report = SequenceReport::from(&dna);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{dna}");
                println!("length: {}", dna.len());
                println!("GC content: {:.3}", dna.gc_content());
            }
        }
        Commands::Translate {
            seq,
            name,
            include_stop_codon,
        } => {
            let orf = Orf::new(name, seq)?;
            info!("Translating {} ({} bases)", orf.name(), orf.len());
            println!("{}", orf.translate(*include_stop_codon));
        }
        Commands::Concat { seq1, seq2, names } => {
            let first = Dna::new(&names.first, seq1)?;
            let second = Dna::new(&names.second, seq2)?;
            println!("{}", first.concat(&second));
        }
    };
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
