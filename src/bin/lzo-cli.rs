//! lzo-cli - Command-line interface for the LZO1X-1 codec
//!
//! Compresses and decompresses whole files with LZO1X-1 and inspects
//! compressed files.

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use lzo::{BlockSize, CompressionStats, Lzo, DEFAULT_BLOCK_SIZE};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Inputs above this size get a progress spinner
const PROGRESS_THRESHOLD: usize = 1024 * 1024;

#[derive(Parser)]
#[command(name = "lzo-cli")]
#[command(about = "Compress and decompress files with LZO1X-1")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print block size, match and literal counts
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    Compress(Transform),

    /// Decompress an LZO1X stream
    Decompress(Transform),

    /// Decode a compressed file and report what it contains
    Info {
        /// Compressed file to inspect
        input: PathBuf,
    },
}

#[derive(Args)]
struct Transform {
    /// File to read
    input: PathBuf,

    /// File to write
    output: PathBuf,

    /// Output buffer growth granularity in bytes
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE as i64, allow_negative_numbers = true)]
    block_size: i64,

    /// Replace the output file if it exists
    #[arg(short, long)]
    force: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Compress,
    Decompress,
}

impl Direction {
    fn verb(self) -> &'static str {
        match self {
            Direction::Compress => "Compressing",
            Direction::Decompress => "Decompressing",
        }
    }
}

/// Output verbosity shared by all subcommands
#[derive(Clone, Copy)]
struct Verbosity {
    verbose: bool,
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    let verbosity = Verbosity {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let outcome = match cli.command {
        Commands::Compress(args) => run(&args, Direction::Compress, verbosity),
        Commands::Decompress(args) => run(&args, Direction::Decompress, verbosity),
        Commands::Info { input } => show_file_info(&input, verbosity.verbose),
    };

    if let Err(e) = outcome {
        eprintln!("lzo-cli: {e}");
        std::process::exit(1);
    }
}

/// Validate the block size before touching any file
fn codec(block_size: i64) -> CliResult<Lzo> {
    Ok(Lzo::from(BlockSize::try_from(block_size)?))
}

fn ensure_writable(input: &Path, output: &Path, force: bool) -> CliResult<()> {
    if !input.is_file() {
        return Err(format!("{}: no such file", input.display()).into());
    }
    if output.exists() && !force {
        return Err(format!("{}: already exists (pass --force to replace it)", output.display()).into());
    }
    Ok(())
}

fn spinner(size: usize, verbosity: Verbosity, direction: Direction) -> Option<ProgressBar> {
    if verbosity.quiet || size <= PROGRESS_THRESHOLD {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("{}...", direction.verb()));
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

/// Compress or decompress `args.input` into `args.output`
fn run(args: &Transform, direction: Direction, verbosity: Verbosity) -> CliResult<()> {
    let lzo = codec(args.block_size)?;
    ensure_writable(&args.input, &args.output, args.force)?;

    if verbosity.verbose {
        println!(
            "{} {} -> {} (block size {} bytes)",
            direction.verb(),
            args.input.display(),
            args.output.display(),
            lzo.block_size()
        );
    }

    let started = Instant::now();
    let source = fs::read(&args.input)?;
    let progress = spinner(source.len(), verbosity, direction);

    let (result, stats) = match direction {
        Direction::Compress => lzo.compress_with_stats(&source),
        Direction::Decompress => lzo
            .decompress_with_stats(&source)
            .map_err(|e| format!("{}: {e}", args.input.display()))?,
    };

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    fs::write(&args.output, &result)?;

    if !verbosity.quiet {
        report(&stats, started.elapsed(), verbosity.verbose);
        if direction == Direction::Compress && stats.output_bytes > stats.input_bytes {
            println!("  note: output is larger than the input (incompressible data)");
        }
    }

    Ok(())
}

fn report(stats: &CompressionStats, elapsed: Duration, verbose: bool) {
    println!("  uncompressed: {:>12} bytes", stats.input_bytes);
    println!("  compressed:   {:>12} bytes", stats.output_bytes);
    println!("  ratio:        {:>11.1}%", stats.compression_ratio * 100.0);
    println!("  elapsed:      {elapsed:>12.2?}");

    if verbose {
        println!("  matches:      {:>12}", stats.match_count);
        println!("  literals:     {:>12} bytes", stats.literal_count);
        println!("  longest match:{:>12} bytes", stats.longest_match);
    }
}

/// Describe the opening instruction of a stream
fn opening_instruction(first: u8) -> String {
    match first {
        0..=15 => "literal run".to_string(),
        16 | 17 => "match".to_string(),
        n => format!("initial literal run of {} bytes", n - 17),
    }
}

fn show_file_info(input: &Path, verbose: bool) -> CliResult<()> {
    let data = fs::read(input).map_err(|e| format!("{}: {e}", input.display()))?;
    let Some(&first) = data.first() else {
        return Err(format!("{}: empty file", input.display()).into());
    };

    println!("{}", input.display());
    println!("  file size:    {:>12} bytes", data.len());
    println!("  opens with:   {} ({first})", opening_instruction(first));

    if verbose && data.len() >= 3 {
        println!("  last bytes:   {:02x?}", &data[data.len() - 3..]);
    }

    match Lzo::new().decompress_with_stats(&data) {
        Ok((_, stats)) => {
            report(&stats, Duration::ZERO, verbose);
            println!("  status:       valid LZO1X stream");
        }
        Err(e) => {
            println!("  status:       corrupt stream");
            if verbose {
                println!("  cause:        {e}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn transform(input: &Path, output: &Path, force: bool) -> Transform {
        Transform {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            block_size: DEFAULT_BLOCK_SIZE as i64,
            force,
        }
    }

    const QUIET: Verbosity = Verbosity {
        verbose: false,
        quiet: true,
    };

    #[test]
    fn test_round_trip() -> CliResult<()> {
        let dir = tempdir()?;
        let plain = dir.path().join("plain.txt");
        let packed = dir.path().join("plain.lzo");
        let unpacked = dir.path().join("unpacked.txt");

        let text = b"Hello, World! This is a test of the LZO CLI tool. Hello, World!";
        fs::write(&plain, text)?;

        run(&transform(&plain, &packed, false), Direction::Compress, QUIET)?;
        run(&transform(&packed, &unpacked, false), Direction::Decompress, QUIET)?;
        assert_eq!(fs::read(&unpacked)?, text);

        show_file_info(&packed, true)?;
        Ok(())
    }

    #[test]
    fn test_refuses_overwrite() -> CliResult<()> {
        let dir = tempdir()?;
        let plain = dir.path().join("plain.txt");
        let packed = dir.path().join("plain.lzo");
        fs::write(&plain, b"data")?;
        fs::write(&packed, b"existing")?;

        assert!(run(&transform(&plain, &packed, false), Direction::Compress, QUIET).is_err());
        assert_eq!(fs::read(&packed)?, b"existing");

        run(&transform(&plain, &packed, true), Direction::Compress, QUIET)?;
        assert_eq!(lzo::decompress(fs::read(&packed)?)?, b"data");
        Ok(())
    }

    #[test]
    fn test_corrupt_input_writes_nothing() -> CliResult<()> {
        let dir = tempdir()?;
        let packed = dir.path().join("broken.lzo");
        let unpacked = dir.path().join("broken.txt");
        fs::write(&packed, [0x15, b'a'])?;

        assert!(run(&transform(&packed, &unpacked, false), Direction::Decompress, QUIET).is_err());
        assert!(!unpacked.exists());
        Ok(())
    }

    #[test]
    fn test_rejects_bad_block_size() {
        assert!(codec(0).is_err());
        assert!(codec(-1).is_err());
        assert_eq!(codec(4096).unwrap().block_size(), 4096);
    }

    #[test]
    fn test_opening_instruction() {
        assert_eq!(opening_instruction(0), "literal run");
        assert_eq!(opening_instruction(17), "match");
        assert_eq!(opening_instruction(30), "initial literal run of 13 bytes");
    }
}
