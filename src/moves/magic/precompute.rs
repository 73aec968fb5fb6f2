//! Offline construction of the magic-bitboard attack tables. Not on any
//! runtime hot path: tables are built once (lazily, via `loader::load_magic_tables`)
//! and then treated as immutable static data.

use crate::bitboard::expand_occupancy;
use crate::moves::magic::attacks::{bishop_attacks_per_square, rook_attacks_per_square};
use crate::moves::magic::search::find_magic_number_for_square;
use crate::moves::magic::structs::{BishopMagicTables, MagicEntry, MagicTables, RookMagicTables};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

const RANK1: u64 = 0x0000_0000_0000_00FF;
const RANK8: u64 = 0xFF00_0000_0000_0000;
const FILE_A: u64 = 0x0101_0101_0101_0101;
const FILE_H: u64 = 0x8080_8080_8080_8080;

/// Squares whose occupancy affects a rook's attack set from `square`,
/// excluding the board rim along each ray (a blocker on the rim can't
/// occlude anything beyond it).
pub fn rook_relevant_mask(square: usize) -> u64 {
    let rank = square / 8;
    let file = square % 8;
    let rank_bb = RANK1 << (rank * 8);
    let file_bb = FILE_A << file;
    let edges = ((RANK1 | RANK8) & !rank_bb) | ((FILE_A | FILE_H) & !file_bb);
    rook_attacks_per_square(square, 0) & !edges
}

/// Squares whose occupancy affects a bishop's attack set from `square`,
/// excluding the board rim (every bishop ray terminates there).
pub fn bishop_relevant_mask(square: usize) -> u64 {
    bishop_attacks_per_square(square, 0) & !(RANK1 | RANK8 | FILE_A | FILE_H)
}

/// How to seed the magic-number search's RNG.
pub enum MagicTableSeed {
    /// Reproducible: used under the `deterministic_magic` feature so the
    /// resulting tables are byte-identical across runs.
    Fixed(u64),
    /// OS-entropy seeded; a fresh table is generated each process start
    /// (a valid magic number is still a valid magic number regardless of
    /// which one the search happens to find first).
    Random,
}

fn make_rng(seed: &MagicTableSeed) -> StdRng {
    match seed {
        MagicTableSeed::Fixed(s) => StdRng::seed_from_u64(*s),
        MagicTableSeed::Random => {
            let mut seed = [0u8; 32];
            rand::rng().fill_bytes(&mut seed);
            StdRng::from_seed(seed)
        }
    }
}

fn build_entry(
    square: usize,
    mask: u64,
    naive: impl Fn(usize, u64) -> u64,
    rng: &mut StdRng,
) -> Result<MagicEntry, String> {
    let bits = mask.count_ones();
    let n = 1usize << bits;
    let mut blockers = Vec::with_capacity(n);
    let mut attacks = Vec::with_capacity(n);
    for idx in 0..n as u32 {
        let occ = expand_occupancy(idx, mask);
        blockers.push(occ);
        attacks.push(naive(square, occ));
    }

    let shift = 64 - bits;
    let magic = find_magic_number_for_square(&blockers, &attacks, shift, rng)?;

    let mut table = vec![0u64; n];
    for (occ, attack) in blockers.iter().zip(attacks.iter()) {
        let index = ((occ.wrapping_mul(magic)) >> shift) as usize;
        table[index] = *attack;
    }

    Ok(MagicEntry {
        magic,
        shift,
        mask,
        table: table.into_boxed_slice(),
    })
}

/// Builds both the rook and bishop magic tables for all 64 squares,
/// verifying every entry against the naive ray-walker as it goes.
pub fn generate_magic_tables(seed: MagicTableSeed) -> Result<MagicTables, String> {
    let mut rng = make_rng(&seed);

    let mut rook_entries = Vec::with_capacity(64);
    for square in 0..64 {
        let mask = rook_relevant_mask(square);
        rook_entries.push(build_entry(square, mask, rook_attacks_per_square, &mut rng)?);
    }

    let mut bishop_entries = Vec::with_capacity(64);
    for square in 0..64 {
        let mask = bishop_relevant_mask(square);
        bishop_entries.push(build_entry(
            square,
            mask,
            bishop_attacks_per_square,
            &mut rng,
        )?);
    }

    Ok(MagicTables {
        rook: RookMagicTables {
            entries: rook_entries,
        },
        bishop: BishopMagicTables {
            entries: bishop_entries,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_relevant_mask_excludes_rim() {
        let mask = rook_relevant_mask(0); // a1
        assert_eq!(mask & (RANK8 | FILE_H), 0);
    }

    #[test]
    fn bishop_relevant_mask_excludes_rim() {
        let mask = bishop_relevant_mask(27); // d4
        assert_eq!(mask & (RANK1 | RANK8 | FILE_A | FILE_H), 0);
    }

    #[test]
    fn every_subset_matches_naive_walker() {
        let square = 27; // d4
        let mask = rook_relevant_mask(square);
        let bits = mask.count_ones();
        let mut rng = StdRng::seed_from_u64(0x45);
        let entry = build_entry(square, mask, rook_attacks_per_square, &mut rng).unwrap();
        for idx in 0..(1u32 << bits) {
            let occ = expand_occupancy(idx, mask);
            let expected = rook_attacks_per_square(square, occ);
            let index = ((occ.wrapping_mul(entry.magic)) >> entry.shift) as usize;
            assert_eq!(entry.table[index], expected);
        }
    }
}
