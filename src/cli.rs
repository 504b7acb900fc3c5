use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::{Parser, Subcommand};

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 orfling version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   toy DNA validation and open-reading-frame translation";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    flatten_help = true,
    styles = STYLES
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a string is valid DNA, and whether it is additionally
    /// an open reading frame
    #[command(arg_required_else_help = true)]
    Check {
        /// the raw sequence; spaces and lowercase are normalized away
        seq: String,
    },

    /// Print a FASTA-style record, length and GC content for a sequence
    #[command(arg_required_else_help = true)]
    Describe {
        /// the raw sequence
        seq: String,

        /// label used in the FASTA header
        #[arg(long, default_value = "seq")]
        name: String,

        /// emit the report as JSON instead of plain text
        #[arg(long, action)]
        json: bool,
    },

    /// Translate an open reading frame into its protein sequence
    #[command(arg_required_else_help = true)]
    Translate {
        /// the raw sequence; must be a valid open reading frame
        seq: String,

        /// label used for the reading frame
        #[arg(long, default_value = "orf")]
        name: String,

        /// keep the trailing stop marker ('_') in the output
        #[arg(short, long, action)]
        include_stop_codon: bool,
    },

    /// Concatenate two sequences into one
    #[command(arg_required_else_help = true)]
    Concat {
        /// the first raw sequence
        seq1: String,

        /// the second raw sequence
        seq2: String,

        /// names for the two operands, in the format `a,b`.
        /// the combined sequence is named `a_b`.
        #[arg(
            long,
            value_parser = |x: &str| ConcatNames::try_from(x),
            default_value = "left,right",
            verbatim_doc_comment
        )]
        names: ConcatNames,
    },
}

#[derive(Clone, Debug)]
pub struct ConcatNames {
    pub first: String,
    pub second: String,
}

/// Error type for parsing a `--names` pair.
#[derive(Debug)]
pub struct ParseNamesErr(String);

impl std::fmt::Display for ParseNamesErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid names format: {}", self.0)
    }
}

impl std::error::Error for ParseNamesErr {}

impl<'a> TryFrom<&'a str> for ConcatNames {
    type Error = ParseNamesErr;

    fn try_from(arg: &'a str) -> Result<ConcatNames, Self::Error> {
        let parts: Vec<&str> = arg.split(',').collect();

        if parts.len() != 2 || parts.iter().any(|p| p.trim().is_empty()) {
            return Err(ParseNamesErr(indoc::formatdoc! {"
            Expected format '<first>,<second>', got '{arg}'. The expected format is \
            `a,b`, as in:
              --names left,right
              --names promoter,insert
            "}));
        }

        Ok(ConcatNames {
            first: parts[0].trim().to_string(),
            second: parts[1].trim().to_string(),
        })
    }
}
