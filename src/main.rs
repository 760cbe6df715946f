//! CLI entry point for file-mapper

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use file_mapper::{ListingConfig, split_patterns, write_output};

#[derive(Parser, Debug)]
#[command(name = "file-mapper")]
#[command(about = "A simple tool to map your project tree and file contents")]
#[command(version)]
struct Args {
    /// Root path to scan
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// Comma-separated file patterns to include (e.g. '*.go,*.txt')
    #[arg(short, long, value_name = "PATTERNS")]
    include: Option<String>,

    /// Comma-separated directories/files to exclude (e.g. '.git,.idea,.env')
    #[arg(short, long, value_name = "PATTERNS")]
    exclude: Option<String>,

    /// Only list Git-tracked files
    #[arg(short, long)]
    git: bool,

    /// Include file content (for text files)
    #[arg(short, long)]
    content: bool,

    /// Print the tree first, then all file contents afterward
    #[arg(long = "separate-content")]
    separate_content: bool,

    /// Output file path (prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show files in a flat list instead of the default tree
    #[arg(long)]
    flat: bool,

    /// Show line numbers for file content
    #[arg(long = "line-numbers")]
    line_numbers: bool,

    /// Show '----- CONTENT START -----' and '----- CONTENT END -----' markers
    /// (use --header-footer=false to hide them)
    #[arg(
        long = "header-footer",
        value_name = "BOOL",
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    header_footer: bool,
}

impl Args {
    fn into_config(self) -> ListingConfig {
        ListingConfig {
            root: self.path,
            include: self.include.as_deref().map(split_patterns).unwrap_or_default(),
            exclude: self.exclude.as_deref().map(split_patterns).unwrap_or_default(),
            git_tracked_only: self.git,
            show_tree: !self.flat,
            show_content: self.content,
            separate_content: self.separate_content,
            show_line_numbers: self.line_numbers,
            show_header_footers: self.header_footer,
            output: self.output,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config = Args::parse().into_config();
    log::debug!("{:?}", config);

    let result = file_mapper::run(&config)
        .and_then(|listing| write_output(&listing, config.output.as_deref()));

    if let Err(e) = result {
        eprintln!("file-mapper: {}", e);
        process::exit(1);
    }
}
