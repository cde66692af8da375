use clap::Parser;
use std::path::PathBuf;
use std::process;
use suspecies::{config, Config};

#[derive(Parser, Debug)]
#[command(name = "suspecies")]
#[command(author, version, about = "Build a static, browsable report of chemical-gene susceptibility interactions")]
struct Args {
    /// Path to the CTD chemical-gene interaction export (headerless CSV)
    #[arg(default_value = config::DEFAULT_INPUT)]
    input: PathBuf,

    /// Output report file (.html, .json)
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Lines starting with this character are skipped
    #[arg(long, default_value_t = '#')]
    comment_marker: char,

    /// Field separator within a record
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Only print the confirmation line
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let comment_marker = ascii_byte(args.comment_marker, "comment marker");
    let delimiter = ascii_byte(args.delimiter, "delimiter");

    let config = Config::new()
        .with_input(args.input)
        .with_output(args.output)
        .with_comment_marker(comment_marker)
        .with_delimiter(delimiter);

    if !args.quiet {
        eprintln!("\x1b[1mSUS-PECIES - Susceptibility Report Builder\x1b[0m");
        eprintln!("{}", "─".repeat(70));
        eprintln!("Reading {}", config.input.display());
    }

    match suspecies::run(&config) {
        Ok(summary) => {
            if !args.quiet {
                eprintln!("\n\x1b[1mSummary:\x1b[0m");
                eprintln!("  Interactions: {}", summary.records);
                eprintln!("  Chemicals:    {}", summary.chemicals);
                eprintln!("  Species:      {}", summary.species);
                eprintln!();
            }
            println!("\x1b[32mCreated {}\x1b[0m", config.output.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn ascii_byte(c: char, what: &str) -> u8 {
    match u8::try_from(c) {
        Ok(b) => b,
        Err(_) => {
            eprintln!("Error: {} must be a single-byte character, got '{}'", what, c);
            process::exit(1);
        }
    }
}
