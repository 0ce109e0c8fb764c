//! Symbol table module for LC-3 assemblers
//!
//! One authoritative store with two derived indexes:
//! - An arena of entries owning every symbol, threaded into fixed-size
//!   collision chains keyed by a case-insensitive hash of the name
//! - A dense address index mapping each word of memory back to an arena slot
//!
//! The address index stores arena indices rather than references, so it can
//! never outlive the symbols it points at. Reset clears both indexes together.

use log::{debug, trace};
use std::fmt;

use crate::error::{Result, SymbolError};
use crate::hash::{eq_ignore_case, symbol_hash};
use crate::order::{Order, compare_addresses, compare_names};

/// A memory address in the 16-bit LC-3 address space
pub type Address = u16;

define_constants! {
    /// Number of addressable words in LC-3 memory.
    pub LC3_MEMORY_SIZE: usize = 1 << 16;
    /// Bucket count used by [`SymbolTable::default`].
    pub DEFAULT_CAPACITY: usize = 997;
}

/// A name bound to an address
///
/// The name keeps the spelling it was inserted with; comparisons elsewhere in
/// the table ignore case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    name: String,
    addr: Address,
}

impl Symbol {
    /// The name as originally inserted
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound address
    #[inline]
    #[must_use]
    pub fn addr(&self) -> Address {
        self.addr
    }
}

impl fmt::Display for Symbol {
    /// One listing line: left-aligned name, then the address in LC-3 hex form
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<20} x{:04X}", self.name, self.addr)
    }
}

/// Arena slot: the symbol, its precomputed hash and the next entry in its chain
#[derive(Debug)]
struct Entry {
    symbol: Symbol,
    hash: u32,
    next: Option<usize>,
}

/// Construction parameters for a [`SymbolTable`]
///
/// # Example
/// ```
/// use symtab::{SymbolTable, TableConfig};
///
/// let config = TableConfig::default().capacity(64).memory_size(0x4000);
/// let table = SymbolTable::with_config(config).unwrap();
/// assert_eq!(table.capacity(), 64);
/// assert_eq!(table.memory_size(), 0x4000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Fixed bucket count.
    pub capacity: usize,
    /// Addressable range `[0, memory_size)` enforced on insert and reverse lookup.
    pub memory_size: usize,
    /// Whether to keep the address to name index.
    pub address_index: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            memory_size: LC3_MEMORY_SIZE,
            address_index: true,
        }
    }
}

impl TableConfig {
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn memory_size(mut self, memory_size: usize) -> Self {
        self.memory_size = memory_size;
        self
    }

    #[must_use]
    pub fn address_index(mut self, enabled: bool) -> Self {
        self.address_index = enabled;
        self
    }
}

/// Fixed-capacity symbol table for a two-pass assembler
///
/// Labels are inserted during pass 1, resolved by name during pass 2 and
/// by address when producing listings.
///
/// # Performance Characteristics
/// - Insert and lookup by name: O(1 + chain length)
/// - Lookup by address: O(1)
/// - The bucket count never changes. With `len()` much larger than
///   `capacity()`, chains degrade into linear scans (O(n) worst case);
///   [`longest_chain`](Self::longest_chain) reports how far.
///
/// # Example
/// ```
/// use symtab::SymbolTable;
///
/// let mut table = SymbolTable::new(31).unwrap();
/// assert!(table.insert("LOOP", 0x3002).unwrap());
/// assert!(!table.insert("loop", 0x3010).unwrap()); // duplicate name
///
/// assert_eq!(table.find_by_name("Loop").unwrap().addr(), 0x3002);
/// assert_eq!(table.find_by_addr(0x3002).unwrap(), Some("LOOP"));
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug)]
pub struct SymbolTable {
    entries: Vec<Entry>,
    buckets: Box<[Option<usize>]>,
    addr_index: Option<Box<[Option<usize>]>>,
    memory_size: usize,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::build(TableConfig::default())
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SymbolTable({} symbols, {} buckets)",
            self.len(),
            self.capacity()
        )
    }
}

impl SymbolTable {
    /// Creates an empty table with `capacity` buckets and a full LC-3 address index
    ///
    /// # Errors
    /// [`SymbolError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(TableConfig::default().capacity(capacity))
    }

    /// Creates an empty table from an explicit configuration
    ///
    /// # Errors
    /// [`SymbolError::InvalidCapacity`] for a zero bucket count and
    /// [`SymbolError::InvalidMemorySize`] for a range beyond 16 bits.
    pub fn with_config(config: TableConfig) -> Result<Self> {
        if config.capacity == 0 {
            return Err(SymbolError::InvalidCapacity);
        }
        if config.memory_size > LC3_MEMORY_SIZE {
            return Err(SymbolError::InvalidMemorySize {
                size: config.memory_size,
            });
        }

        Ok(Self::build(config))
    }

    /// Allocates the arena and both indexes for an already validated configuration
    fn build(config: TableConfig) -> Self {
        debug!(
            "creating symbol table: {} buckets, memory size {}, address index {}",
            config.capacity, config.memory_size, config.address_index
        );

        Self {
            entries: Vec::new(),
            buckets: vec![None; config.capacity].into_boxed_slice(),
            addr_index: config
                .address_index
                .then(|| vec![None; config.memory_size].into_boxed_slice()),
            memory_size: config.memory_size,
        }
    }

    /// Fixed number of buckets
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of live symbols
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the addressable range
    #[inline]
    #[must_use]
    pub fn memory_size(&self) -> usize {
        self.memory_size
    }

    #[inline]
    #[must_use]
    pub fn has_address_index(&self) -> bool {
        self.addr_index.is_some()
    }

    #[inline]
    fn bucket_of(&self, hash: u32) -> usize {
        hash as usize % self.buckets.len()
    }

    fn check_range(&self, addr: Address) -> Result<()> {
        if usize::from(addr) < self.memory_size {
            Ok(())
        } else {
            Err(SymbolError::AddressOutOfRange {
                addr,
                limit: self.memory_size,
            })
        }
    }

    /// Walks one collision chain, newest entry first
    fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            entries: &self.entries,
            cursor: self.buckets[bucket],
        }
    }

    /// Finds the arena slot holding `name`
    ///
    /// The stored hash rejects most non-matches before the string compare.
    fn search(&self, name: &str, hash: u32) -> Option<usize> {
        self.chain(self.bucket_of(hash))
            .find(|&idx| {
                let entry = &self.entries[idx];
                entry.hash == hash && eq_ignore_case(&entry.symbol.name, name)
            })
    }

    /// Binds `name` to `addr`
    ///
    /// Returns `Ok(false)` without changing the table when the name (in any
    /// casing) is already present. When two names share an address, the
    /// address index reports the most recent one; both stay findable by name.
    ///
    /// # Errors
    /// [`SymbolError::AddressOutOfRange`] if `addr` is outside the table's
    /// addressable range.
    pub fn insert(&mut self, name: &str, addr: Address) -> Result<bool> {
        self.check_range(addr)?;

        let hash = symbol_hash(name);
        if unlikely!(self.search(name, hash).is_some()) {
            trace!("rejecting duplicate symbol {name}");
            return Ok(false);
        }

        let bucket = self.bucket_of(hash);
        let idx = self.entries.len();
        self.entries.push(Entry {
            symbol: Symbol {
                name: name.to_owned(),
                addr,
            },
            hash,
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(idx);

        if let Some(index) = self.addr_index.as_mut() {
            index[usize::from(addr)] = Some(idx);
        }

        trace!("inserted {name} at x{addr:04X} (bucket {bucket})");
        Ok(true)
    }

    /// Like [`insert`](Self::insert), but reports a redefinition as an error
    ///
    /// # Errors
    /// [`SymbolError::DuplicateName`] for an existing name, plus the errors of
    /// [`insert`](Self::insert).
    pub fn define(&mut self, name: &str, addr: Address) -> Result<()> {
        if self.insert(name, addr)? {
            Ok(())
        } else {
            Err(SymbolError::DuplicateName(name.to_owned()))
        }
    }

    /// Looks up a symbol by name, ignoring case
    ///
    /// # Example
    /// ```
    /// use symtab::SymbolTable;
    ///
    /// let mut table = SymbolTable::default();
    /// table.insert("Main", 0x3000).unwrap();
    /// assert_eq!(table.find_by_name("MAIN").unwrap().name(), "Main");
    /// assert!(table.find_by_name("missing").is_none());
    /// ```
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Symbol> {
        self.search(name, symbol_hash(name))
            .map(|idx| &self.entries[idx].symbol)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Looks up the name most recently bound to `addr`
    ///
    /// Returns `Ok(None)` when nothing maps there or the table was built
    /// without an address index.
    ///
    /// # Errors
    /// [`SymbolError::AddressOutOfRange`] if `addr` is outside the table's
    /// addressable range.
    pub fn find_by_addr(&self, addr: Address) -> Result<Option<&str>> {
        self.check_range(addr)?;

        Ok(self
            .addr_index
            .as_ref()
            .and_then(|index| index[usize::from(addr)])
            .map(|idx| self.entries[idx].symbol.name()))
    }

    /// Iterates over every symbol in bucket order, newest first within a bucket
    ///
    /// The order is deterministic for a given insertion history.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            table: self,
            bucket: 0,
            remaining: self.len(),
            chain: Chain {
                entries: &self.entries,
                cursor: None,
            },
        }
    }

    /// Calls `f` once for every symbol, in [`iter`](Self::iter) order
    ///
    /// State the callback needs is captured by the closure.
    pub fn for_each<'a, F>(&'a self, f: F)
    where
        F: FnMut(&'a Symbol),
    {
        self.iter().for_each(f);
    }

    /// Returns every symbol sorted by `order`
    ///
    /// The returned vector is freshly built and owned by the caller; the
    /// symbols themselves stay in the table. [`Order::BucketOrder`] sorts the
    /// same way as [`Order::ByAddress`]; use [`iter`](Self::iter) for raw
    /// bucket order.
    ///
    /// # Example
    /// ```
    /// use symtab::{Order, SymbolTable};
    ///
    /// let mut table = SymbolTable::new(7).unwrap();
    /// table.insert("Beta", 20).unwrap();
    /// table.insert("alpha", 10).unwrap();
    /// table.insert("Gamma", 20).unwrap();
    ///
    /// let names: Vec<_> = table.order_by(Order::ByName).iter().map(|s| s.name()).collect();
    /// assert_eq!(names, ["alpha", "Beta", "Gamma"]);
    /// ```
    #[must_use]
    pub fn order_by(&self, order: Order) -> Vec<&Symbol> {
        let mut symbols: Vec<&Symbol> = Vec::with_capacity(self.len());
        self.for_each(|symbol| symbols.push(symbol));

        match order {
            Order::ByName => symbols.sort_by(|a, b| compare_names(a, b)),
            Order::ByAddress | Order::BucketOrder => {
                symbols.sort_by(|a, b| compare_addresses(a, b));
            }
        }
        symbols
    }

    /// Removes every symbol and clears both indexes
    ///
    /// The bucket count and addressable range are kept.
    pub fn reset(&mut self) {
        debug!("resetting symbol table ({} symbols)", self.len());
        self.entries.clear();
        self.buckets.fill(None);
        if let Some(index) = self.addr_index.as_mut() {
            index.fill(None);
        }
    }

    /// Tears the table down, releasing all symbols and both indexes
    ///
    /// Equivalent to dropping the table.
    pub fn destroy(mut self) {
        self.reset();
        debug!("destroying symbol table");
    }

    /// Length of the longest collision chain
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        (0..self.capacity())
            .map(|bucket| self.chain(bucket).count())
            .max()
            .unwrap_or(0)
    }

    /// Average chain length (`len / capacity`)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }
}

/// Cursor over one chain, yielding arena indices
struct Chain<'a> {
    entries: &'a [Entry],
    cursor: Option<usize>,
}

impl Iterator for Chain<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let idx = self.cursor?;
        self.cursor = self.entries[idx].next;
        Some(idx)
    }
}

/// Iterator over a [`SymbolTable`] in bucket order
pub struct Iter<'a> {
    table: &'a SymbolTable,
    bucket: usize,
    remaining: usize,
    chain: Chain<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Symbol;

    fn next(&mut self) -> Option<&'a Symbol> {
        loop {
            if let Some(idx) = self.chain.next() {
                self.remaining -= 1;
                return Some(&self.table.entries[idx].symbol);
            }
            if self.bucket >= self.table.capacity() {
                return None;
            }
            self.chain = self.table.chain(self.bucket);
            self.bucket += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Symbol;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SymbolTable {
        let mut st = SymbolTable::new(7).unwrap();
        st.insert("Beta", 20).unwrap();
        st.insert("alpha", 10).unwrap();
        st.insert("Gamma", 20).unwrap();
        st
    }

    fn names(symbols: &[&Symbol]) -> Vec<String> {
        symbols.iter().map(|s| s.name().to_string()).collect()
    }

    #[test]
    fn test_new_rejects_zero_capacity() {
        assert_eq!(SymbolTable::new(0).unwrap_err(), SymbolError::InvalidCapacity);
    }

    #[test]
    fn test_with_config_rejects_oversized_memory() {
        let config = TableConfig::default().memory_size(LC3_MEMORY_SIZE + 1);
        assert_eq!(
            SymbolTable::with_config(config).unwrap_err(),
            SymbolError::InvalidMemorySize {
                size: LC3_MEMORY_SIZE + 1
            }
        );
    }

    #[test]
    fn test_default_table() {
        let st = SymbolTable::default();
        assert_eq!(st.capacity(), DEFAULT_CAPACITY);
        assert_eq!(st.memory_size(), LC3_MEMORY_SIZE);
        assert!(st.has_address_index());
        assert!(st.is_empty());
    }

    #[test]
    fn test_insert_and_find() {
        let mut st = SymbolTable::new(16).unwrap();

        assert!(st.insert("LOOP", 0x3002).unwrap());
        assert!(st.insert("END", 0x3010).unwrap());

        assert_eq!(st.find_by_name("LOOP").unwrap().addr(), 0x3002);
        assert_eq!(st.find_by_name("end").unwrap().addr(), 0x3010);
        assert!(st.contains("Loop"));
        assert!(!st.contains("UNKNOWN"));
        assert!(st.find_by_name("UNKNOWN").is_none());
        assert_eq!(st.len(), 2);
    }

    #[test]
    fn test_name_case_is_preserved() {
        let mut st = SymbolTable::new(16).unwrap();
        st.insert("MixedCase", 1).unwrap();
        assert_eq!(st.find_by_name("MIXEDCASE").unwrap().name(), "MixedCase");
    }

    #[test]
    fn test_duplicate_rejected_any_case() {
        let mut st = SymbolTable::new(16).unwrap();

        assert!(st.insert("Start", 0x3000).unwrap());
        assert!(!st.insert("Start", 0x3001).unwrap());
        assert!(!st.insert("START", 0x3002).unwrap());
        assert!(!st.insert("start", 0x3003).unwrap());

        assert_eq!(st.len(), 1);
        assert_eq!(st.find_by_name("start").unwrap().addr(), 0x3000);
        assert!(st.find_by_addr(0x3001).unwrap().is_none());
    }

    #[test]
    fn test_define_reports_duplicates() {
        let mut st = SymbolTable::new(16).unwrap();
        st.define("X", 1).unwrap();
        assert_eq!(
            st.define("x", 2).unwrap_err(),
            SymbolError::DuplicateName("x".to_string())
        );
        assert_eq!(st.len(), 1);
    }

    #[test]
    fn test_find_by_addr_last_insert_wins() {
        let st = sample();

        assert_eq!(st.find_by_addr(10).unwrap(), Some("alpha"));
        assert_eq!(st.find_by_addr(20).unwrap(), Some("Gamma"));
        // Both names at address 20 stay reachable by name
        assert_eq!(st.find_by_name("beta").unwrap().addr(), 20);
        assert!(st.find_by_addr(30).unwrap().is_none());
    }

    #[test]
    fn test_out_of_range_address() {
        let config = TableConfig::default().capacity(8).memory_size(0x100);
        let mut st = SymbolTable::with_config(config).unwrap();

        let err = SymbolError::AddressOutOfRange {
            addr: 0x100,
            limit: 0x100,
        };
        assert_eq!(st.insert("HIGH", 0x100).unwrap_err(), err);
        assert_eq!(st.find_by_addr(0x100).unwrap_err(), err);
        assert!(st.is_empty());

        assert!(st.insert("TOP", 0xFF).unwrap());
        assert_eq!(st.find_by_addr(0xFF).unwrap(), Some("TOP"));
    }

    #[test]
    fn test_full_range_accepts_every_address() {
        let mut st = SymbolTable::new(4).unwrap();
        st.insert("LAST", 0xFFFF).unwrap();
        assert_eq!(st.find_by_addr(0xFFFF).unwrap(), Some("LAST"));
    }

    #[test]
    fn test_without_address_index() {
        let config = TableConfig::default().capacity(8).address_index(false);
        let mut st = SymbolTable::with_config(config).unwrap();

        assert!(!st.has_address_index());
        st.insert("LOOP", 0x3000).unwrap();
        assert_eq!(st.find_by_addr(0x3000).unwrap(), None);
        assert_eq!(st.find_by_name("loop").unwrap().addr(), 0x3000);
    }

    #[test]
    fn test_single_bucket_holds_everything() {
        let mut st = SymbolTable::new(1).unwrap();
        for i in 0..100u16 {
            assert!(st.insert(&format!("L{i}"), i).unwrap());
        }

        assert_eq!(st.len(), 100);
        assert_eq!(st.longest_chain(), 100);
        for i in 0..100u16 {
            assert_eq!(st.find_by_name(&format!("l{i}")).unwrap().addr(), i);
        }
    }

    #[test]
    fn test_iter_bucket_order_newest_first() {
        let mut st = SymbolTable::new(1).unwrap();
        st.insert("first", 1).unwrap();
        st.insert("second", 2).unwrap();
        st.insert("third", 3).unwrap();

        let seen: Vec<_> = st.iter().map(Symbol::name).collect();
        assert_eq!(seen, ["third", "second", "first"]);
    }

    #[test]
    fn test_iter_follows_buckets() {
        let mut st = SymbolTable::new(5).unwrap();
        for name in ["a", "b", "c", "d", "e", "f", "g"] {
            st.insert(name, 0).unwrap();
        }

        let buckets: Vec<usize> = st
            .iter()
            .map(|s| symbol_hash(s.name()) as usize % 5)
            .collect();
        let mut sorted = buckets.clone();
        sorted.sort_unstable();
        assert_eq!(buckets, sorted);
    }

    #[test]
    fn test_for_each_visits_each_once() {
        let st = sample();
        let mut total = 0u32;
        let mut count = 0;
        st.for_each(|s| {
            total += u32::from(s.addr());
            count += 1;
        });
        assert_eq!(count, 3);
        assert_eq!(total, 50);
        assert_eq!((&st).into_iter().count(), 3);
    }

    #[test]
    fn test_for_each_collects_references() {
        let st = sample();
        let mut collected: Vec<&Symbol> = Vec::new();
        st.for_each(|s| collected.push(s));

        let expected: Vec<&Symbol> = st.iter().collect();
        assert_eq!(collected, expected);
        assert_eq!(collected.len(), 3);
        assert!(collected.iter().any(|s| s.name() == "alpha"));
    }

    #[test]
    fn test_iter_exact_size() {
        let mut st = SymbolTable::new(3).unwrap();
        for name in ["a", "b", "c", "d", "e"] {
            st.insert(name, 0).unwrap();
        }

        let mut iter = st.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.size_hint(), (5, Some(5)));
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.by_ref().count(), 3);
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_default_matches_default_config() {
        let st = SymbolTable::default();
        let built = SymbolTable::with_config(TableConfig::default()).unwrap();
        assert_eq!(st.capacity(), built.capacity());
        assert_eq!(st.memory_size(), built.memory_size());
        assert_eq!(st.has_address_index(), built.has_address_index());
    }

    #[test]
    fn test_order_by_name() {
        let st = sample();
        assert_eq!(names(&st.order_by(Order::ByName)), ["alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_order_by_address_breaks_ties_by_name() {
        let st = sample();
        let ordered = st.order_by(Order::ByAddress);
        assert_eq!(names(&ordered), ["alpha", "Beta", "Gamma"]);
        assert_eq!(
            ordered.iter().map(|s| s.addr()).collect::<Vec<_>>(),
            [10, 20, 20]
        );
    }

    #[test]
    fn test_bucket_order_sorts_like_address() {
        let st = sample();
        assert_eq!(st.order_by(Order::BucketOrder), st.order_by(Order::ByAddress));
    }

    #[test]
    fn test_order_by_empty() {
        let st = SymbolTable::new(3).unwrap();
        assert!(st.order_by(Order::ByName).is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut st = sample();
        st.reset();

        assert_eq!(st.len(), 0);
        assert_eq!(st.capacity(), 7);
        assert!(st.find_by_name("alpha").is_none());
        assert!(st.find_by_addr(10).unwrap().is_none());
        assert!(st.find_by_addr(20).unwrap().is_none());
        assert_eq!(st.iter().count(), 0);

        // Reusable after reset
        assert!(st.insert("alpha", 11).unwrap());
        assert_eq!(st.find_by_addr(11).unwrap(), Some("alpha"));
        assert_eq!(st.len(), 1);
    }

    #[test]
    fn test_count_tracks_successful_inserts() {
        let mut st = SymbolTable::new(3).unwrap();
        let mut ok = 0;
        for name in ["a", "B", "A", "c", "b", "d"] {
            if st.insert(name, 0).unwrap() {
                ok += 1;
            }
        }
        assert_eq!(ok, 4);
        assert_eq!(st.len(), ok);
    }

    #[test]
    fn test_load_factor() {
        let mut st = SymbolTable::new(4).unwrap();
        assert!(st.load_factor().abs() < f64::EPSILON);
        for name in ["a", "b", "c", "d", "e", "f"] {
            st.insert(name, 0).unwrap();
        }
        assert!((st.load_factor() - 1.5).abs() < f64::EPSILON);
        assert!(st.longest_chain() >= 2);
    }

    #[test]
    fn test_display() {
        let st = sample();
        assert_eq!(st.to_string(), "SymbolTable(3 symbols, 7 buckets)");
        let alpha = st.find_by_name("alpha").unwrap();
        assert_eq!(alpha.to_string(), format!("{:<20} x000A", "alpha"));
    }
}
