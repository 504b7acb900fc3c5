//! Validation and translation of short nucleotide sequences: generic DNA
//! strings, and open reading frames (ORFs) which translate into amino-acid
//! sequences.
//!
//! ```
//! use orfling::{Dna, Orf};
//!
//! let dna = Dna::new("seq1", "atg gcc")?;
//! assert_eq!(dna.bases(), "ATGGCC");
//!
//! let orf = Orf::new("orf1", "ATGGGCTAG")?;
//! assert_eq!(orf.translate(false), "MG");
//! # Ok::<(), orfling::InvalidSequence>(())
//! ```

pub mod codon;
mod dna;
mod errors;
mod orf;
mod report;
pub mod validate;

pub use dna::Dna;
pub use errors::InvalidSequence;
pub use orf::{is_valid_reading_frame, Orf};
pub use report::SequenceReport;
pub use validate::{is_valid_dna, normalize};
