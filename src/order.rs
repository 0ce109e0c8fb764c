//! Ordering criteria for symbol listings

use phf::phf_map;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SymbolError;
use crate::hash::cmp_ignore_case;
use crate::symbol_table::Symbol;

/// Sort key used by [`SymbolTable::order_by`](crate::SymbolTable::order_by)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Listed like [`Order::ByAddress`]; raw bucket order comes from `iter()`
    BucketOrder,
    /// Address ascending, ties by name
    #[default]
    ByAddress,
    /// Name ascending, ignoring case
    ByName,
}

/// Accepted spellings, resolved at compile time
static ORDER_NAMES: phf::Map<&'static str, Order> = phf_map! {
    "bucket" => Order::BucketOrder,
    "hash" => Order::BucketOrder,
    "address" => Order::ByAddress,
    "addr" => Order::ByAddress,
    "name" => Order::ByName,
};

impl FromStr for Order {
    type Err = SymbolError;

    /// Parses a criterion name, ignoring case
    ///
    /// # Example
    /// ```
    /// use symtab::Order;
    ///
    /// assert_eq!("Name".parse::<Order>().unwrap(), Order::ByName);
    /// assert_eq!("addr".parse::<Order>().unwrap(), Order::ByAddress);
    /// assert!("size".parse::<Order>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ORDER_NAMES
            .get(s.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| SymbolError::UnknownOrder(s.to_string()))
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BucketOrder => "bucket",
            Self::ByAddress => "address",
            Self::ByName => "name",
        })
    }
}

/// Compares two symbols by name, ignoring case
#[must_use]
pub fn compare_names(a: &Symbol, b: &Symbol) -> Ordering {
    cmp_ignore_case(a.name(), b.name())
}

/// Compares two symbols by address, then by name
#[must_use]
pub fn compare_addresses(a: &Symbol, b: &Symbol) -> Ordering {
    a.addr().cmp(&b.addr()).then_with(|| compare_names(a, b))
}
