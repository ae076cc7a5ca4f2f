//! Command-line interface for polyseg
//!
//! Usage:
//!   polyseg [OPTIONS] [TEXT]
//!   echo "ไปเที่ยวกัน" | polyseg --language th

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::{info, LevelFilter};

use polyseg::{
    data_dir, top_frequencies, DirectoryStopwords, PolysegError, Result, Tokenizer,
    TokenizerConfig,
};

/// polyseg - A multi-script word tokenizer
#[derive(Parser, Debug)]
#[command(name = "polyseg")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Split text into words, with dictionary segmentation for Thai and Lao")]
struct Args {
    /// Text to tokenize (read from stdin when omitted)
    text: Option<String>,

    /// Language code, e.g. en, th, lo
    #[arg(short, long)]
    language: Option<String>,

    /// Dictionary file, one word per line
    #[arg(short, long, value_name = "FILE")]
    dict: Option<PathBuf>,

    /// Directory of <code>.json or <code>.txt stopword lists
    #[arg(long, value_name = "DIR")]
    stopwords_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Keep the original case
    #[arg(long)]
    no_lowercase: bool,

    /// Drop stopwords
    #[arg(short = 's', long)]
    remove_stopwords: bool,

    /// Apply the suffix stemmer
    #[arg(long)]
    stem: bool,

    /// Print n-grams of this size instead of tokens
    #[arg(short, long, value_name = "N", conflicts_with = "freq")]
    ngram: Option<usize>,

    /// Print token counts, most frequent first
    #[arg(short, long)]
    freq: bool,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    fn tokenizer_config(&self) -> Result<TokenizerConfig> {
        let mut config = match &self.config {
            Some(path) => TokenizerConfig::from_json_file(path)?,
            None => TokenizerConfig::default(),
        };
        if let Some(language) = &self.language {
            config = config.with_language(language.as_str());
        }
        if self.no_lowercase {
            config.lowercase = false;
        }
        if self.remove_stopwords {
            config.remove_stopwords = true;
        }
        if self.stem {
            config.stemming = true;
        }
        config.validate()?;
        Ok(config)
    }
}

fn build_tokenizer(args: &Args) -> Result<Tokenizer> {
    let config = args.tokenizer_config()?;
    let mut builder = Tokenizer::builder(config.clone());
    if let Some(dir) = &args.stopwords_dir {
        builder = builder.stopword_source(DirectoryStopwords::new(dir));
    }
    let mut tokenizer = builder.build();

    let dict_path = match &args.dict {
        Some(path) => Some(path.clone()),
        None if config.language.is_dictionary_eligible() => {
            let path = data_dir::dictionary_path(&config.language, None);
            path.is_file().then_some(path)
        }
        None => None,
    };
    if let Some(path) = dict_path {
        let count = tokenizer.load_dictionary(&path)?;
        info!("loaded {count} words from {}", path.display());
    }

    Ok(tokenizer)
}

fn read_input(text: Option<&str>) -> Result<String> {
    match text {
        Some(t) => Ok(t.to_string()),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| PolysegError::io("<stdin>", e))?;
            Ok(buf)
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let tokenizer = build_tokenizer(&args)?;
    let input = read_input(args.text.as_deref())?;

    if let Some(n) = args.ngram {
        if n == 0 {
            return Err(PolysegError::invalid_config("--ngram must be at least 1"));
        }
        let grams = tokenizer.ngram_tokenize(&input, n);
        if args.json {
            return print_json(&grams);
        }
        for gram in &grams {
            println!("{gram}");
        }
        return Ok(());
    }

    if args.freq {
        let counts = tokenizer.token_frequency(&input);
        let ranked = top_frequencies(&counts, counts.len());
        if args.json {
            return print_json(&ranked);
        }
        for (token, count) in ranked {
            println!("{token}\t{count}");
        }
        return Ok(());
    }

    let tokens = tokenizer.tokenize_detailed(&input);
    if args.json {
        return print_json(&tokens);
    }
    for token in &tokens {
        println!("{}\t{}\t{}", token.text, token.kind.as_str(), token.start);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
