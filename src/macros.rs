//! Small macro utilities used across the symbol table
//!
//! Constants, branch hints and a literal constructor for tables.

/// Defines compile-time constants with less boilerplate
///
/// # Example
/// ```
/// use symtab::define_constants;
/// define_constants! {
///     pub PAGE_SIZE: usize = 512;
///     ORIGIN: u16 = 0x3000;
/// }
/// assert_eq!(PAGE_SIZE, 512);
/// assert_eq!(ORIGIN, 0x3000);
/// ```
#[macro_export]
macro_rules! define_constants {
    ($($(#[$attr:meta])* $vis:vis $name:ident: $type:ty = $value:expr;)*) => {
        $(
            $(#[$attr])*
            $vis const $name: $type = $value;
        )*
    };
}

/// Branch prediction hint: unlikely condition
///
/// Used on rejection paths (duplicate names) that well-formed sources rarely take.
#[macro_export]
macro_rules! unlikely {
    ($expr:expr) => {{
        #[cold]
        #[inline(always)]
        fn cold() {}

        if !$expr {
            false
        } else {
            cold();
            true
        }
    }};
}

/// Builds a [`SymbolTable`](crate::SymbolTable) from literal bindings
///
/// Evaluates to `Result<SymbolTable, SymbolError>`. Duplicate names are
/// rejected with [`SymbolError::DuplicateName`](crate::SymbolError::DuplicateName).
///
/// # Example
/// ```
/// use symtab::symbol_table;
/// let table = symbol_table! {
///     capacity: 8,
///     "MAIN" => 0x3000,
///     "LOOP" => 0x3004,
/// }
/// .unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.find_by_name("loop").unwrap().addr(), 0x3004);
/// ```
#[macro_export]
macro_rules! symbol_table {
    (capacity: $cap:expr $(, $name:expr => $addr:expr)* $(,)?) => {
        (|| -> $crate::Result<$crate::SymbolTable> {
            #[allow(unused_mut)]
            let mut table = $crate::SymbolTable::new($cap)?;
            $(table.define($name, $addr)?;)*
            Ok(table)
        })()
    };
}
