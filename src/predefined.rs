//! LC-3 memory-mapped device registers
//!
//! These addresses are fixed by the LC-3 platform. They are kept in a
//! compile-time perfect hash map and can be loaded into a table through the
//! regular insertion path.

use phf::phf_map;

use crate::error::Result;
use crate::symbol_table::{Address, SymbolTable};

/// Device registers with compile-time perfect hash
static DEVICE_REGISTERS: phf::Map<&'static str, Address> = phf_map! {
    // Keyboard status / data
    "KBSR" => 0xFE00,
    "KBDR" => 0xFE02,

    // Display status / data
    "DSR" => 0xFE04,
    "DDR" => 0xFE06,

    // Machine control
    "MCR" => 0xFFFE,
};

/// Address of a predefined register, ignoring case
///
/// # Example
/// ```
/// use symtab::predefined::predefined_address;
///
/// assert_eq!(predefined_address("kbsr"), Some(0xFE00));
/// assert_eq!(predefined_address("LOOP"), None);
/// ```
#[must_use]
pub fn predefined_address(name: &str) -> Option<Address> {
    DEVICE_REGISTERS
        .get(name.to_ascii_uppercase().as_str())
        .copied()
}

/// Number of predefined registers
#[must_use]
pub fn predefined_count() -> usize {
    DEVICE_REGISTERS.len()
}

impl SymbolTable {
    /// Inserts the LC-3 device registers
    ///
    /// Registers whose name is already bound, or whose address lies outside a
    /// reduced memory range, are skipped. Returns how many were inserted.
    ///
    /// # Errors
    /// Never fails for in-range tables; the `Result` mirrors [`SymbolTable::insert`].
    pub fn load_predefined(&mut self) -> Result<usize> {
        let mut inserted = 0;
        for (name, &addr) in &DEVICE_REGISTERS {
            if usize::from(addr) >= self.memory_size() {
                continue;
            }
            if self.insert(name, addr)? {
                inserted += 1;
            }
        }
        log::debug!("loaded {inserted} predefined symbols");
        Ok(inserted)
    }
}
