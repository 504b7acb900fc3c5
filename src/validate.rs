//! Stateless character-set validation and normalization.

/// The four valid nucleotide bases.
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Returns true iff every character of `s` is one of A, C, G, T,
/// case-insensitively. The empty string is vacuously valid.
pub fn is_valid_dna(s: &str) -> bool {
    s.bytes()
        .all(|b| NUCLEOTIDES.contains(&b.to_ascii_uppercase()))
}

/// Removes spaces and uppercases, producing exactly the string that
/// [`Dna`](crate::Dna) construction will validate and store.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| *c != ' ')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
