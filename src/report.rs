use serde::Serialize;

use crate::dna::Dna;
use crate::orf::{is_valid_reading_frame, Orf};

/// Flat, serializable summary of a sequence. `protein` is present when the
/// bases also form a valid reading frame, translated without the stop
/// marker.
#[derive(Serialize, Debug)]
pub struct SequenceReport {
    pub name: String,
    pub bases: String,
    pub length: usize,
    pub gc_content: f64,
    pub reading_frame: bool,
    pub protein: Option<String>,
}

impl From<&Dna> for SequenceReport {
    fn from(dna: &Dna) -> Self {
        let protein = if is_valid_reading_frame(dna.bases()) {
            Orf::new(dna.name(), dna.bases())
                .ok()
                .map(|orf| orf.translate(false))
        } else {
            None
        };

        SequenceReport {
            name: dna.name().to_string(),
            bases: dna.bases().to_string(),
            length: dna.len(),
            gc_content: dna.gc_content(),
            reading_frame: protein.is_some(),
            protein,
        }
    }
}

impl From<&Orf> for SequenceReport {
    fn from(orf: &Orf) -> Self {
        SequenceReport {
            name: orf.name().to_string(),
            bases: orf.bases().to_string(),
            length: orf.len(),
            gc_content: orf.gc_content(),
            reading_frame: true,
            protein: Some(orf.translate(false)),
        }
    }
}
