//! huffpack CLI
//! Usage:
//!   huffpack compress   <input> [-o <output>]
//!   huffpack decompress <input> [-o <output>]
//!   huffpack auto       <input> [-o <output>]
//!
//! Outputs land in the current directory unless `-o` is given.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use huffpack::format::{FILE_EXTENSION, RESTORED_SUFFIX};

#[derive(Parser)]
#[command(name = "huffpack", version, about = "Static Huffman file compressor")]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Compress a file into <name>.huff
    Compress(FileArgs),
    /// Restore a .huff file
    Decompress(FileArgs),
    /// Decompress .huff files, compress everything else
    Auto(FileArgs),
}

#[derive(Args)]
struct FileArgs {
    input: PathBuf,

    /// Output path (default: derived from the input name, in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Compress,
    Decompress,
}

struct Report {
    output:     PathBuf,
    original:   u64,
    compressed: u64,
    elapsed:    Duration,
}

fn main() {
    let cli = Cli::parse();

    let (direction, args) = match cli.mode {
        Mode::Compress(args)   => (Direction::Compress, args),
        Mode::Decompress(args) => (Direction::Decompress, args),
        Mode::Auto(args) => {
            let direction = detect_direction(&args.input);
            println!("[auto-detected: {:?}]", direction);
            (direction, args)
        }
    };

    let output = args.output.clone().unwrap_or_else(|| match direction {
        Direction::Compress   => compressed_name(&args.input),
        Direction::Decompress => restored_name(&args.input),
    });

    let result = match direction {
        Direction::Compress   => compress_file(&args.input, &output),
        Direction::Decompress => decompress_file(&args.input, &output),
    };

    match result {
        Ok(report) => print_report(direction, &args.input, &report),
        Err(e) => {
            eprintln!("Error: {}: {}", args.input.display(), e);
            process::exit(1);
        }
    }
}

fn detect_direction(input: &Path) -> Direction {
    if input.extension() == Some(OsStr::new(FILE_EXTENSION)) {
        Direction::Decompress
    } else {
        Direction::Compress
    }
}

/// `dir/notes.txt` → `notes.txt.huff`; the original extension survives for
/// [`restored_name`].
fn compressed_name(input: &Path) -> PathBuf {
    let name = input.file_name().unwrap_or_else(|| OsStr::new("output"));
    let mut packed = name.to_os_string();
    packed.push(".");
    packed.push(FILE_EXTENSION);
    PathBuf::from(packed)
}

/// `notes.txt.huff` → `notes_restored.txt`, `data.huff` → `data_restored`,
/// `blob.bin` → `blob.bin_restored`
fn restored_name(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dotted = format!(".{}", FILE_EXTENSION);

    let restored = match name.strip_suffix(&dotted) {
        Some(inner) if !inner.is_empty() => {
            let inner = Path::new(inner);
            match (inner.file_stem(), inner.extension()) {
                (Some(stem), Some(ext)) => format!(
                    "{}{}.{}",
                    stem.to_string_lossy(), RESTORED_SUFFIX, ext.to_string_lossy()
                ),
                _ => format!("{}{}", inner.display(), RESTORED_SUFFIX),
            }
        }
        _ => format!("{}{}", name, RESTORED_SUFFIX),
    };
    PathBuf::from(restored)
}

/// Output is only created once the whole container is built.
fn compress_file(input: &Path, output: &Path) -> huffpack::Result<Report> {
    let start = Instant::now();
    let data = fs::read(input)?;

    let mut packed = Vec::new();
    let stats = huffpack::compress_to(&data, &mut packed)?;
    fs::write(output, &packed)?;

    Ok(Report {
        output:     output.to_path_buf(),
        original:   stats.original_bytes,
        compressed: stats.compressed_bytes,
        elapsed:    start.elapsed(),
    })
}

/// Decodes fully in memory first; a bad container never creates the output
/// file and the container itself is only read.
fn decompress_file(input: &Path, output: &Path) -> huffpack::Result<Report> {
    let start = Instant::now();
    let packed = fs::read(input)?;

    let data = huffpack::decompress(&packed)?;
    fs::write(output, &data)?;

    Ok(Report {
        output:     output.to_path_buf(),
        original:   data.len() as u64,
        compressed: packed.len() as u64,
        elapsed:    start.elapsed(),
    })
}

fn print_report(direction: Direction, input: &Path, report: &Report) {
    match direction {
        Direction::Compress => {
            let saved = if report.original == 0 {
                0.0
            } else {
                (1.0 - report.compressed as f64 / report.original as f64) * 100.0
            };
            println!("\nCompression complete");
            println!("Input:      {}", input.display());
            println!("Output:     {}", report.output.display());
            println!("Original:   {}", format_bytes(report.original));
            println!("Compressed: {}", format_bytes(report.compressed));
            println!("Saved:      {:.1}%", saved);
            println!("Time:       {:.3}s", report.elapsed.as_secs_f64());
        }
        Direction::Decompress => {
            println!("\nDecompression complete");
            println!("Input:  {}", input.display());
            println!("Output: {}", report.output.display());
            println!("Size:   {}", format_bytes(report.original));
            println!("Time:   {:.3}s", report.elapsed.as_secs_f64());
        }
    }
}

/// 1024-based, two decimals, largest unit GB.
fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}
