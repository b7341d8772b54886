//! Command-line interface for exploring components from a starting MDS

use crate::explorer::component::{ComponentExplorer, ExplorerConfig};
use crate::io::configuration::{DEFAULT_ALPHABET_SIZE, DEFAULT_THREADS};
use crate::io::error::{IoResultExt, Result};
use crate::io::input::{parse_word_list, read_word_file};
use crate::io::progress::ExplorationProgress;
use crate::word::alphabet::{Alphabet, Word};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "mds-components")]
#[command(
    author,
    version,
    about = "Explore the I-move components of minimal decycling sets"
)]
/// Command-line arguments for the component explorer
pub struct Cli {
    /// Alphabet size
    #[arg(short, long, default_value_t = DEFAULT_ALPHABET_SIZE)]
    pub alpha: u32,

    /// Word length
    #[arg(short, long)]
    pub k: u32,

    /// Queue log file, truncated at start
    #[arg(short = 'c', long = "comps", value_name = "FILE")]
    pub queue: PathBuf,

    /// Component graph output (Graphviz DOT)
    #[arg(short, long, value_name = "FILE")]
    pub dot: PathBuf,

    /// Worker threads, 0 for one per core
    #[arg(short, long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Show a progress spinner
    #[arg(short, long)]
    pub progress: bool,

    /// Read starting words from a file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Starting words, decimal or 0x-prefixed hexadecimal
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,
}

impl Cli {
    /// Starting words from `--input` followed by the positional ones
    ///
    /// # Errors
    ///
    /// Returns a file system error if the input file cannot be read and
    /// `InvalidCandidate` if a word cannot be parsed
    pub fn starting_words(&self) -> Result<Vec<Word>> {
        let mut words = match &self.input {
            Some(path) => read_word_file(path)?,
            None => Vec::new(),
        };
        for argument in &self.words {
            words.extend(parse_word_list(argument)?);
        }
        Ok(words)
    }

    /// Validate the starting set, then explore and write the graph
    ///
    /// # Errors
    ///
    /// Returns a configuration or candidate error before any file is created,
    /// or the first error raised during exploration
    pub fn run(&self) -> Result<()> {
        let alphabet = Alphabet::new(self.alpha, self.k)?;
        let words = self.starting_words()?;
        let explorer = ComponentExplorer::new(alphabet, ExplorerConfig::with_threads(self.threads));
        let seed = explorer.seed(&words)?;

        let dot = File::create(&self.dot).at_path(&self.dot, "create graph output")?;
        let progress = ExplorationProgress::new(self.progress);
        let report = explorer.explore(seed, &self.queue, BufWriter::new(dot), &progress)?;

        info!(
            nodes = report.node_count(),
            edges = report.edges,
            graph = %self.dot.display(),
            "component graph written"
        );
        Ok(())
    }
}
