use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use memio::{IntWidth, RawBuffer, RawMemory, Storage, StorageConfig, TypedMemory, TypedView};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "memio - Inspect and edit little-endian integers stored in a file")]
struct Cli {
    /// File holding the memory region
    file: PathBuf,

    /// Create the file if it does not exist
    #[arg(long)]
    create: bool,

    /// Access the file through a memory map
    #[cfg(feature = "mmap")]
    #[arg(long)]
    mmap: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the region size
    Info,
    /// Append zero bytes to the region
    Grow {
        /// Number of bytes to add
        bytes: u64,
    },
    /// Remove bytes from the end of the region
    Shrink {
        /// Number of bytes to remove
        bytes: u64,
    },
    /// Read an integer
    Read {
        /// Byte offset
        offset: u64,

        /// Integer width in bits (8, 16, 24 or 32)
        #[arg(short, long, default_value = "32", value_parser = parse_width)]
        width: IntWidth,

        /// Interpret the value as signed
        #[arg(short, long)]
        signed: bool,
    },
    /// Write an integer; values wider than the width are truncated
    Write {
        /// Byte offset
        offset: u64,

        /// Value, decimal or 0x-prefixed hex, optionally negative
        #[arg(allow_hyphen_values = true, value_parser = parse_value)]
        value: i128,

        /// Integer width in bits (8, 16, 24 or 32)
        #[arg(short, long, default_value = "32", value_parser = parse_width)]
        width: IntWidth,

        /// Encode the value as signed
        #[arg(short, long)]
        signed: bool,
    },
    /// Hex dump a byte range
    Dump {
        /// Byte offset
        offset: u64,
        /// Number of bytes
        len: usize,
    },
}

fn parse_width(s: &str) -> Result<IntWidth, String> {
    s.parse::<u32>()
        .ok()
        .and_then(IntWidth::from_bits)
        .ok_or_else(|| format!("unsupported width '{s}', expected 8, 16, 24 or 32"))
}

fn parse_value(s: &str) -> Result<i128, String> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i128::from_str_radix(hex, 16),
        None => digits.parse::<i128>(),
    }
    .map_err(|e| format!("invalid value '{s}': {e}"))?;

    let value = if negative { -magnitude } else { magnitude };
    if value < i128::from(i64::MIN) || value > i128::from(u64::MAX) {
        return Err(format!("value '{s}' does not fit in 64 bits"));
    }
    Ok(value)
}

fn run<S>(view: &mut TypedView<RawBuffer<S>>, command: &Commands) -> memio::Result<()>
where
    S: Storage<Error = io::Error>,
{
    match command {
        Commands::Info => {
            println!("size: {} bytes", view.size());
        }
        Commands::Grow { bytes } => {
            view.increase_size(*bytes)?;
            println!("size: {} bytes", view.size());
        }
        Commands::Shrink { bytes } => {
            view.reduce_size(*bytes)?;
            println!("size: {} bytes", view.size());
        }
        Commands::Read {
            offset,
            width,
            signed,
        } => {
            if *signed {
                println!("{}", view.read_int(*offset, *width)?);
            } else {
                let value = view.read_uint(*offset, *width)?;
                println!("{value} (0x{value:0digits$x})", digits = width.bytes() * 2);
            }
        }
        Commands::Write {
            offset,
            value,
            width,
            signed,
        } => {
            if *signed {
                view.write_int(*offset, *width, *value as i64)?;
            } else {
                view.write_uint(*offset, *width, *value as u64)?;
            }
        }
        Commands::Dump { offset, len } => {
            let bytes = view.read_buffer(*offset, *len)?;
            for (line, chunk) in bytes.chunks(16).enumerate() {
                let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
                println!("{:08x}  {}", offset + line as u64 * 16, hex.join(" "));
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = StorageConfig::default().with_create(cli.create);

    #[cfg(feature = "mmap")]
    if cli.mmap {
        let mut view = memio::open_mmap(&cli.file, &config)?;
        run(&mut view, &cli.command)?;
        return Ok(());
    }

    let mut view = memio::open_file(&cli.file, &config)?;
    run(&mut view, &cli.command)?;
    view.into_inner().into_inner().sync()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_width() {
        assert_eq!(parse_width("24"), Ok(IntWidth::W24));
        assert!(parse_width("64").is_err());
        assert!(parse_width("abc").is_err());
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42"), Ok(42));
        assert_eq!(parse_value("-1"), Ok(-1));
        assert_eq!(parse_value("0xDEADBEEF"), Ok(0xDEAD_BEEF));
        assert_eq!(parse_value("-0x80"), Ok(-128));
        assert_eq!(parse_value("0xFFFFFFFFFFFFFFFF"), Ok(u64::MAX as i128));
        assert!(parse_value("0x1FFFFFFFFFFFFFFFF").is_err());
        assert!(parse_value("twelve").is_err());
    }
}
