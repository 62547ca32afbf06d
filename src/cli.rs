use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "antonym-iaa",
    version,
    about = "Inter-annotator agreement and WordNet antonym extraction for affixal antonym annotation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two annotators' labelings of the same antonym pairs.
    Agreement(AgreementArgs),
    /// Export every antonym relation of a WordNet database as a TSV file.
    Extract(ExtractArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AgreementArgs {
    #[arg(long, default_value = "annotations/annotator1.txt")]
    pub annotator_a: PathBuf,

    #[arg(long, default_value = "annotations/annotator2.txt")]
    pub annotator_b: PathBuf,

    /// Print the report as JSON instead of text.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also write the JSON report (with input hashes) to this path.
    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub skip_disagreements: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Directory holding the WordNet `data.*` files (usually `dict/`).
    #[arg(long)]
    pub wordnet_dir: PathBuf,

    #[arg(long, default_value = "antonyms.csv")]
    pub out: PathBuf,

    /// Only collect antonyms whose source synset has one of these parts of speech.
    #[arg(long = "pos", value_enum)]
    pub pos_filter: Vec<SynsetPos>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, ValueEnum)]
pub enum SynsetPos {
    #[value(name = "n")]
    Noun,
    #[value(name = "v")]
    Verb,
    #[value(name = "a")]
    Adjective,
    #[value(name = "s")]
    AdjectiveSatellite,
    #[value(name = "r")]
    Adverb,
}

impl SynsetPos {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "n",
            Self::Verb => "v",
            Self::Adjective => "a",
            Self::AdjectiveSatellite => "s",
            Self::Adverb => "r",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "n" => Some(Self::Noun),
            "v" => Some(Self::Verb),
            "a" => Some(Self::Adjective),
            "s" => Some(Self::AdjectiveSatellite),
            "r" => Some(Self::Adverb),
            _ => None,
        }
    }

    /// Numeric part-of-speech used inside WordNet sense keys.
    pub fn sense_key_number(self) -> u8 {
        match self {
            Self::Noun => 1,
            Self::Verb => 2,
            Self::Adjective => 3,
            Self::Adverb => 4,
            Self::AdjectiveSatellite => 5,
        }
    }
}
