//! Symbol table for LC-3 assemblers
//!
//! Maps label names to 16-bit addresses so a two-pass assembler can resolve
//! forward and backward references: labels are inserted during pass 1, looked
//! up by name during pass 2, and looked up by address for listings.
//!
//! # Architecture
//!
//! - [`symbol_table`]: Arena-backed hash table with fixed-size collision chains
//!   and a dense address index
//! - [`hash`]: Case-insensitive djb2 hashing and name comparison
//! - [`order`]: Ordering criteria for listings (bucket, address, name)
//! - [`predefined`]: LC-3 device registers via a compile-time perfect hash
//! - [`symfile`]: Reader for `NAME ADDRESS` symbol files
//! - [`macros`]: Constants, branch hints and the [`symbol_table!`] constructor
//!
//! Names compare case-insensitively everywhere but keep the spelling they were
//! inserted with.
//!
//! # Example
//!
//! ```rust
//! use symtab::{Order, SymbolTable};
//!
//! let mut table = SymbolTable::new(101).unwrap();
//! table.insert("MAIN", 0x3000).unwrap();
//! table.insert("loop", 0x3003).unwrap();
//! table.insert("Done", 0x3008).unwrap();
//!
//! // Pass 2: resolve operands by name, in any case
//! assert_eq!(table.find_by_name("LOOP").unwrap().addr(), 0x3003);
//!
//! // Listing: reverse lookup and ordered output
//! assert_eq!(table.find_by_addr(0x3008).unwrap(), Some("Done"));
//! let listing: Vec<_> = table.order_by(Order::ByName).iter().map(|s| s.name()).collect();
//! assert_eq!(listing, ["Done", "loop", "MAIN"]);
//! ```

#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

#[macro_use]
pub mod macros;

pub mod error;
pub mod hash;
pub mod order;
pub mod predefined;
pub mod symbol_table;
pub mod symfile;

// Re-export commonly used types for convenience
pub use error::{Result, SymbolError};
pub use order::Order;
pub use symbol_table::{Address, LC3_MEMORY_SIZE, Symbol, SymbolTable, TableConfig};
pub use symfile::{ParseError, SymbolLines};
