use std::fmt;

use crate::codon;
use crate::dna::Dna;
use crate::errors::InvalidSequence;
use crate::validate;

/// Returns true iff `s` is a well-formed open reading frame:
/// at least 6 characters and a multiple of 3, first codon encodes 'M',
/// exactly one stop codon, that stop codon last, and every character in
/// {A,C,G,T} (case-insensitive).
///
/// The length rules are checked first so codon lookups only ever see
/// 3-character chunks.
pub fn is_valid_reading_frame(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 6 || bytes.len() % 3 != 0 {
        return false;
    }
    let stops = bytes
        .chunks_exact(3)
        .filter(|c| codon::is_stop_codon(c))
        .count();
    codon::is_start_codon(&bytes[..3])
        && stops == 1
        && codon::is_stop_codon(&bytes[bytes.len() - 3..])
        && validate::is_valid_dna(s)
}

/// An open reading frame: a DNA sequence that starts with ATG and ends with
/// its single stop codon.
///
/// Wraps a validated [`Dna`] payload; unlike plain DNA, reassignment does
/// not strip spaces, so a spaced string fails validation here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orf {
    dna: Dna,
}

impl Orf {
    /// Uppercases `raw` (no space stripping) and validates it as a reading
    /// frame.
    pub fn new(name: &str, raw: &str) -> Result<Orf, InvalidSequence> {
        let bases = Self::check(raw)?;
        Ok(Orf {
            dna: Dna::from_validated(name.to_string(), bases),
        })
    }

    fn check(raw: &str) -> Result<String, InvalidSequence> {
        if !is_valid_reading_frame(raw) {
            return Err(InvalidSequence::NotReadingFrame);
        }
        Ok(raw.to_ascii_uppercase())
    }

    /// Replaces the sequence under the same contract as construction;
    /// on failure the stored value is left untouched.
    pub fn set_sequence(&mut self, raw: &str) -> Result<(), InvalidSequence> {
        let bases = Self::check(raw)?;
        let name = self.dna.name().to_string();
        self.dna = Dna::from_validated(name, bases);
        Ok(())
    }

    /// The protein encoded by this reading frame: consecutive
    /// non-overlapping codons from position 0, mapped through the codon
    /// table. The trailing stop marker ('_') is included only when
    /// `include_stop_codon` is set.
    pub fn translate(&self, include_stop_codon: bool) -> String {
        let bytes = self.dna.bases().as_bytes();
        let end = if include_stop_codon {
            bytes.len()
        } else {
            bytes.len() - 3
        };
        bytes[..end]
            .chunks_exact(3)
            .map(|c| {
                // every codon over {A,C,G,T} is a table entry, and
                // validation restricted the bases to that alphabet
                codon::lookup(c).expect("validated reading frame") as char
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        self.dna.name()
    }

    pub fn bases(&self) -> &str {
        self.dna.bases()
    }

    pub fn len(&self) -> usize {
        self.dna.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dna.is_empty()
    }

    pub fn gc_content(&self) -> f64 {
        self.dna.gc_content()
    }

    /// The underlying DNA payload. Combining two reading frames goes
    /// through this: `a.as_dna().concat(b.as_dna())` yields plain DNA,
    /// since concatenation does not preserve reading-frame structure.
    pub fn as_dna(&self) -> &Dna {
        &self.dna
    }

    pub fn into_dna(self) -> Dna {
        self.dna
    }
}

impl fmt::Display for Orf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dna)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_minimal_reading_frame() {
        // 2 codons: the 6-character minimum
        assert!(is_valid_reading_frame("ATGTAA"));
        assert!(Orf::new("min", "ATGTAA").is_ok());
    }

    #[test]
    fn accepts_start_body_stop() {
        assert!(is_valid_reading_frame("ATGGGCTAG"));
        assert!(is_valid_reading_frame("atgggcctaaagtag"));
    }

    #[test]
    fn rejects_structural_violations() {
        // stop codon not last
        assert!(!is_valid_reading_frame("ATGGGCTAGCTA"));
        // two stop codons
        assert!(!is_valid_reading_frame("ATGTAAGGCTAG"));
        // no stop codon
        assert!(!is_valid_reading_frame("ATGGGCGGC"));
        // missing start
        assert!(!is_valid_reading_frame("GGGGGCTAG"));
        // length not a multiple of 3
        assert!(!is_valid_reading_frame("atgccca"));
        // below the 6-character minimum, always
        assert!(!is_valid_reading_frame("ATG"));
        assert!(!is_valid_reading_frame("TA"));
        assert!(!is_valid_reading_frame(""));
        // foreign characters
        assert!(!is_valid_reading_frame("ATGGXCTAG"));
    }

    #[test]
    fn spaces_are_not_stripped() {
        assert!(!is_valid_reading_frame("ATG GGC TAG"));
        assert_eq!(
            Orf::new("x", "ATG GGC TAG").unwrap_err(),
            InvalidSequence::NotReadingFrame
        );
    }

    #[test]
    fn construction_uppercases_and_reports_the_orf_error() {
        let orf = Orf::new("Random ORF 1", "atgggcctaaagtag").unwrap();
        assert_eq!(orf.bases(), "ATGGGCCTAAAGTAG");

        let err = Orf::new("Random ORF 2", "atgccca").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Sequence is invalid. That's not an open reading frame."
        );
    }

    #[test]
    fn translate_excludes_stop_by_default() {
        let orf = Orf::new("x", "ATGGGCTAG").unwrap();
        assert_eq!(orf.translate(false), "MG");
        assert_eq!(orf.translate(true), "MG_");
    }

    #[test]
    fn translate_the_demo_sequence() {
        let orf = Orf::new("Random ORF 1", "atgggcctaaagtag").unwrap();
        assert_eq!(orf.translate(false), "MGLK");
        assert_eq!(orf.translate(true), "MGLK_");
    }

    #[test]
    fn delegated_queries_match_the_payload() {
        let orf = Orf::new("x", "ATGGGCTAG").unwrap();
        assert_eq!(orf.len(), 9);
        assert!(!orf.is_empty());
        assert!((orf.gc_content() - 4.0 / 9.0).abs() < 1e-10);
        assert_eq!(orf.to_string(), "> x\nATGGGCTAG");
    }

    #[test]
    fn failed_set_sequence_leaves_entity_unchanged() {
        let mut orf = Orf::new("x", "ATGGGCTAG").unwrap();
        assert_eq!(
            orf.set_sequence("ATGGGCTAGCTA"),
            Err(InvalidSequence::NotReadingFrame)
        );
        assert_eq!(orf.bases(), "ATGGGCTAG");

        orf.set_sequence("ATGTAA").unwrap();
        assert_eq!(orf.bases(), "ATGTAA");
        assert_eq!(orf.name(), "x");
    }

    #[test]
    fn combining_reading_frames_yields_plain_dna() {
        let a = Orf::new("a", "ATGTAA").unwrap();
        let b = Orf::new("b", "ATGGGCTAG").unwrap();
        let joined = a.as_dna().concat(b.as_dna());
        assert_eq!(joined.name(), "a_b");
        assert_eq!(joined.bases(), "ATGTAAATGGGCTAG");
    }
}
