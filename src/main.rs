//! Symbol table listing tool
//!
//! Loads `NAME ADDRESS` bindings from a symbol file into a [`SymbolTable`]
//! and prints them as a listing, or answers lookups against them.
//!
//! # Usage
//! ```bash
//! symtab program.sym --order name
//! symtab program.sym --find LOOP --at x3000
//! RUST_LOG=debug symtab program.sym --predefined --stats
//! ```

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process;

use symtab::predefined::predefined_count;
use symtab::symbol_table::DEFAULT_CAPACITY;
use symtab::symfile::parse_address;
use symtab::{Address, Order, SymbolLines, SymbolTable};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Parser, Debug)]
#[command(name = "symtab", version, about = "List and query assembler symbol files")]
struct Cli {
    /// Symbol file with one `NAME ADDRESS` binding per line
    input: String,

    /// Number of hash buckets
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Listing order: bucket, address or name
    #[arg(short, long, default_value_t = Order::ByAddress)]
    order: Order,

    /// Preload the LC-3 device registers
    #[arg(short, long, default_value_t = false)]
    predefined: bool,

    /// Look up a symbol by name (repeatable)
    #[arg(short, long = "find", value_name = "NAME")]
    find: Vec<String>,

    /// Look up the symbol at an address such as x3000 (repeatable)
    #[arg(short, long = "at", value_name = "ADDR", value_parser = parse_address_arg)]
    at: Vec<Address>,

    /// Print bucket statistics after the listing
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn parse_address_arg(text: &str) -> std::result::Result<Address, String> {
    parse_address(text).ok_or_else(|| format!("invalid address `{text}`"))
}

/// Reads the symbol file into memory
fn read_lines(path: &str) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .map_err(Into::into)
}

/// Inserts every binding, warning about redefinitions
///
/// Redefinitions keep the first binding and are not fatal. Returns the
/// number of rejected lines.
fn load_symbols(lines: &[String], table: &mut SymbolTable) -> Result<usize> {
    let mut reader = SymbolLines::from_lines(lines);
    let mut rejected = 0;

    while reader.advance() {
        let name = reader.name()?;
        let addr = reader.address()?;

        if !table.insert(name, addr)? {
            eprintln!(
                "warning: line {}: symbol `{name}` is already defined",
                reader.line_number()
            );
            rejected += 1;
        }
    }

    Ok(rejected)
}

fn predefined_summary(loaded: usize) -> String {
    format!("loaded {loaded} of {} predefined symbols", predefined_count())
}

fn write_listing<W: Write>(table: &SymbolTable, order: Order, out: &mut W) -> io::Result<()> {
    for symbol in table.order_by(order) {
        writeln!(out, "{symbol}")?;
    }
    Ok(())
}

fn write_lookups<W: Write>(table: &SymbolTable, cli: &Cli, out: &mut W) -> Result<()> {
    for name in &cli.find {
        match table.find_by_name(name) {
            Some(symbol) => writeln!(out, "{symbol}")?,
            None => writeln!(out, "{name}: not found")?,
        }
    }
    for &addr in &cli.at {
        match table.find_by_addr(addr)? {
            Some(name) => writeln!(out, "x{addr:04X} {name}")?,
            None => writeln!(out, "x{addr:04X}: no symbol")?,
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let lines = read_lines(&cli.input)?;

    let mut table = SymbolTable::new(cli.capacity)?;
    if cli.predefined {
        let loaded = table.load_predefined()?;
        info!("{}", predefined_summary(loaded));
    }
    let rejected = load_symbols(&lines, &mut table)?;
    info!(
        "loaded {} symbols from {} ({rejected} rejected)",
        table.len(),
        cli.input
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.find.is_empty() && cli.at.is_empty() {
        write_listing(&table, cli.order, &mut out)?;
    } else {
        write_lookups(&table, cli, &mut out)?;
    }

    if cli.stats {
        writeln!(
            out,
            "{} symbols, {} buckets, load factor {:.2}, longest chain {}",
            table.len(),
            table.capacity(),
            table.load_factor(),
            table.longest_chain()
        )?;
    }

    out.flush()?;
    table.destroy();
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
