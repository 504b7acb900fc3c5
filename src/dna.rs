use std::fmt;

use crate::errors::InvalidSequence;
use crate::validate;

/// A named, validated DNA sequence.
///
/// The stored bases are always uppercase, space-free and drawn from
/// {A,C,G,T}; both construction and [`set_sequence`](Dna::set_sequence)
/// enforce this before anything is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dna {
    name: String,
    bases: String,
}

impl Dna {
    /// Normalizes `raw` (strips spaces, uppercases) and validates it.
    /// The name is stored verbatim.
    pub fn new(name: &str, raw: &str) -> Result<Dna, InvalidSequence> {
        let bases = Self::check(raw)?;
        Ok(Dna {
            name: name.to_string(),
            bases,
        })
    }

    // For bases already known to satisfy the alphabet invariant, e.g. the
    // result of concatenating two validated sequences.
    pub(crate) fn from_validated(name: String, bases: String) -> Dna {
        debug_assert!(validate::is_valid_dna(&bases));
        Dna { name, bases }
    }

    fn check(raw: &str) -> Result<String, InvalidSequence> {
        let bases = validate::normalize(raw);
        if !validate::is_valid_dna(&bases) {
            return Err(InvalidSequence::NotDna);
        }
        Ok(bases)
    }

    /// Replaces the sequence under the same normalize/validate contract as
    /// construction. On failure the stored value is left untouched.
    pub fn set_sequence(&mut self, raw: &str) -> Result<(), InvalidSequence> {
        self.bases = Self::check(raw)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bases(&self) -> &str {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Fraction of bases that are C or G, in [0, 1].
    ///
    /// On an empty sequence this is 0/0, which is NaN; an empty string
    /// passes the alphabet check, so callers wanting a finite value must
    /// guarantee non-empty input themselves.
    pub fn gc_content(&self) -> f64 {
        let gc = self
            .bases
            .bytes()
            .filter(|b| matches!(b, b'C' | b'G'))
            .count();
        gc as f64 / self.bases.len() as f64
    }

    /// Joins two sequences into a new one named `"{self}_{other}"`.
    /// Neither operand is mutated. Validity is closed under concatenation,
    /// so this cannot fail.
    pub fn concat(&self, other: &Dna) -> Dna {
        Dna::from_validated(
            format!("{}_{}", self.name, other.name),
            format!("{}{}", self.bases, other.bases),
        )
    }
}

impl fmt::Display for Dna {
    /// FASTA-style record: a `>`-prefixed header line, then the bases.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "> {}\n{}", self.name, self.bases)
    }
}
