use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use dexvfy_file::{CodeItem, MethodId};
use dexvfy_isa::DalvikWidths;
use dexvfy_verify::{LogSink, MethodCode, VerifyMode, classify_const, prepare_method};

mod desc;
mod report;

#[derive(Parser)]
#[command(name = "dexvfy", about = "Structural pre-pass of a Dalvik bytecode verifier")]
struct Cli {
    /// Run as an ahead-of-time optimizer: rejections are not logged
    #[arg(long, global = true)]
    optimizing: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a method described in YAML
    Check {
        /// Path to the method description
        input: PathBuf,
    },
    /// Check a raw code_item inside a binary file
    Raw {
        /// Path to the file
        input: PathBuf,
        /// Byte offset of the code_item (decimal or 0x-prefixed hex)
        #[arg(long, value_parser = parse_offset)]
        offset: usize,
        /// Declaring class descriptor, for diagnostics
        #[arg(long, default_value = "LUnknown;")]
        class: String,
        /// Method name, for diagnostics
        #[arg(long, default_value = "unknown")]
        name: String,
        /// Prototype descriptor, for diagnostics
        #[arg(long, default_value = "()V")]
        proto: String,
    },
    /// Print the narrowest category of 32-bit constants
    Const {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<i32>,
    },
}

fn parse_offset(s: &str) -> Result<usize, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid offset '{s}': {e}"))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mode = if cli.optimizing {
        VerifyMode::Optimizing
    } else {
        VerifyMode::Runtime
    };
    let sink = LogSink::new(mode);

    let ok = match cli.command {
        Commands::Check { input } => cmd_check(&input, &sink),
        Commands::Raw {
            input,
            offset,
            class,
            name,
            proto,
        } => cmd_raw(&input, offset, MethodId::new(class, name, proto), &sink),
        Commands::Const { values } => {
            cmd_const(&values);
            true
        }
    };
    if !ok {
        std::process::exit(1);
    }
}

fn cmd_check(path: &Path, sink: &LogSink) -> bool {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            return false;
        }
    };
    let desc = match desc::MethodDesc::parse(&text) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", path.display());
            return false;
        }
    };
    let item = match desc.code_item() {
        Ok(item) => item,
        Err(e) => {
            eprintln!("Error in {}: {e}", path.display());
            return false;
        }
    };
    check_item(&item, &desc.method_id(), sink)
}

fn cmd_raw(path: &Path, offset: usize, id: MethodId, sink: &LogSink) -> bool {
    let file = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error opening {}: {e}", path.display());
            return false;
        }
    };
    // SAFETY: the mapping is read-only and dropped before this function
    // returns; concurrent truncation of the file by another process is not
    // guarded against, as with any mmap-based reader.
    let map = match unsafe { memmap2::Mmap::map(&file) } {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error mapping {}: {e}", path.display());
            return false;
        }
    };
    let item = match CodeItem::parse(&map, offset) {
        Ok(item) => item,
        Err(e) => {
            eprintln!("Error parsing code_item at {offset:#x}: {e}");
            return false;
        }
    };
    check_item(&item, &id, sink)
}

fn check_item(item: &CodeItem, id: &MethodId, sink: &LogSink) -> bool {
    log::debug!(
        "checking {id}: {} code units, {} tries",
        item.insns.len(),
        item.tries.len()
    );
    let code = MethodCode::from_code_item(item).with_method(id);
    match prepare_method(&code, &DalvikWidths, sink) {
        Ok(prepared) => {
            print!("{}", report::render(&code, &prepared));
            true
        }
        Err(e) => {
            eprintln!("Rejected {id}: {e}");
            false
        }
    }
}

fn cmd_const(values: &[i32]) {
    for &value in values {
        println!("{value}\t{:?}", classify_const(value));
    }
}
