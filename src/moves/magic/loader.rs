//! Entry point callers use to obtain the magic tables. Construction happens
//! at most once per process (via `OnceCell`); every call after the first
//! returns a clone of the cached tables.

use crate::moves::magic::precompute::{MagicTableSeed, generate_magic_tables};
use crate::moves::magic::structs::MagicTables;
use once_cell::sync::OnceCell;

fn seed() -> MagicTableSeed {
    if cfg!(feature = "deterministic_magic") {
        MagicTableSeed::Fixed(0xC0FF_EE15_B00B_5EED)
    } else {
        MagicTableSeed::Random
    }
}

/// Returns the rook/bishop magic attack tables, building them on first use.
pub fn load_magic_tables() -> MagicTables {
    static TABLES: OnceCell<MagicTables> = OnceCell::new();
    TABLES
        .get_or_init(|| generate_magic_tables(seed()).expect("magic table construction failed"))
        .clone()
}
