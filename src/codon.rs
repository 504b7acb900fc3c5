//! The standard codon table as a process-wide immutable constant.

/// Amino acid encoded by the start codon (ATG).
pub const START_AA: u8 = b'M';

/// Marker used for the three stop codons (TAA, TAG, TGA).
pub const STOP_AA: u8 = b'_';

// Codon order: AAA, AAC, AAG, AAT, ACA, ACC, ACG, ACT, AGA, AGC, AGG, AGT,
//              ATA, ATC, ATG, ATT, CAA, CAC, CAG, CAT, CCA, CCC, CCG, CCT,
//              CGA, CGC, CGG, CGT, CTA, CTC, CTG, CTT, GAA, GAC, GAG, GAT,
//              GCA, GCC, GCG, GCT, GGA, GGC, GGG, GGT, GTA, GTC, GTG, GTT,
//              TAA, TAC, TAG, TAT, TCA, TCC, TCG, TCT, TGA, TGC, TGG, TGT,
//              TTA, TTC, TTG, TTT
const AMINO_ACIDS: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'_', b'Y', b'_', b'Y', b'S', b'S', b'S', b'S', b'_', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

// A=0, C=1, G=2, T=3
fn base_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// Amino-acid byte (or [`STOP_AA`]) for a 3-byte codon, case-insensitive.
/// `None` for any non-{A,C,G,T} byte or a slice that is not 3 bytes long.
pub fn lookup(codon: &[u8]) -> Option<u8> {
    if codon.len() != 3 {
        return None;
    }
    let idx = base_index(codon[0])? * 16 + base_index(codon[1])? * 4 + base_index(codon[2])?;
    Some(AMINO_ACIDS[idx])
}

pub fn is_start_codon(codon: &[u8]) -> bool {
    lookup(codon) == Some(START_AA)
}

pub fn is_stop_codon(codon: &[u8]) -> bool {
    lookup(codon) == Some(STOP_AA)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

    #[test]
    fn table_is_total_over_the_alphabet() {
        // every codon over {A,C,G,T} has an entry, and exactly 3 are stops
        let mut stops = 0;
        for &b1 in &BASES {
            for &b2 in &BASES {
                for &b3 in &BASES {
                    let aa = lookup(&[b1, b2, b3]).unwrap();
                    if aa == STOP_AA {
                        stops += 1;
                    }
                }
            }
        }
        assert_eq!(stops, 3);
    }

    #[test]
    fn known_codons() {
        assert_eq!(lookup(b"ATG"), Some(b'M'));
        assert_eq!(lookup(b"GGC"), Some(b'G'));
        assert_eq!(lookup(b"TAA"), Some(b'_'));
        assert_eq!(lookup(b"TAG"), Some(b'_'));
        assert_eq!(lookup(b"TGA"), Some(b'_'));
        assert_eq!(lookup(b"TGG"), Some(b'W'));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup(b"atg"), Some(b'M'));
        assert_eq!(lookup(b"tAa"), Some(b'_'));
    }

    #[test]
    fn lookup_rejects_malformed_codons() {
        assert_eq!(lookup(b"AT"), None);
        assert_eq!(lookup(b"ATGA"), None);
        assert_eq!(lookup(b"AXG"), None);
        assert_eq!(lookup(b"AT "), None);
    }

    #[test]
    fn start_and_stop_queries() {
        assert!(is_start_codon(b"ATG"));
        assert!(!is_start_codon(b"GTG"));
        assert!(is_stop_codon(b"TGA"));
        assert!(!is_stop_codon(b"ATG"));
    }
}
