//! Command-line interface for password analysis and generation.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use secrecy::SecretString;

use pwd_audit::{analyze, generate, render_report, AnalysisResult, Blacklist, GenerationConfig};

#[derive(Debug, Parser)]
#[command(name = "pwd-audit")]
#[command(about = "Password strength analyzer and generator", long_about = None)]
#[command(group(ArgGroup::new("mode").args(["password", "file", "generate"])))]
struct Cli {
    /// Password to analyze
    #[arg(short, long)]
    password: Option<String>,

    /// File with passwords to analyze (one per line)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Generate a secure password
    #[arg(short, long, default_value_t = false)]
    generate: bool,

    /// Password length for the generator
    #[arg(long, default_value_t = 16)]
    gen_length: usize,

    /// Exclude uppercase letters from generation
    #[arg(long, default_value_t = false)]
    no_upper: bool,

    /// Exclude digits from generation
    #[arg(long, default_value_t = false)]
    no_digits: bool,

    /// Exclude symbols from generation
    #[arg(long, default_value_t = false)]
    no_symbols: bool,

    /// Path to the blacklist file
    #[arg(long, default_value = "common_pass.txt")]
    blacklist: PathBuf,

    /// Print results as JSON instead of a text report
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn emit(result: &AnalysisResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", render_report(result));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let blacklist = Blacklist::load(&cli.blacklist)
        .with_context(|| format!("failed to read blacklist {}", cli.blacklist.display()))?;

    if cli.generate {
        let config = GenerationConfig {
            length: cli.gen_length,
            include_upper: !cli.no_upper,
            include_digits: !cli.no_digits,
            include_symbols: !cli.no_symbols,
        };
        let pwd = generate(&config)?;
        println!("\nGenerated password: {pwd}");
        let result = analyze(&SecretString::new(pwd.into()), Some(&blacklist));
        return emit(&result, cli.json);
    }

    if let Some(pwd) = cli.password {
        let result = analyze(&SecretString::new(pwd.into()), Some(&blacklist));
        return emit(&result, cli.json);
    }

    if let Some(path) = cli.file {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read password file {}", path.display()))?;
        let passwords: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        for pwd in &passwords {
            let result = analyze(&SecretString::new(pwd.to_string().into()), Some(&blacklist));
            emit(&result, cli.json)?;
        }
        println!("\nAnalyzed {} passwords.", passwords.len());
        return Ok(());
    }

    // Default interactive mode
    print!("Enter a password to analyze: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let pwd = line.trim_end_matches(['\r', '\n']);
    if pwd.is_empty() {
        println!("No password entered.");
        return Ok(());
    }
    let result = analyze(&SecretString::new(pwd.to_string().into()), Some(&blacklist));
    emit(&result, cli.json)
}
