//! Optimal parser: dynamic programming over literal/match decompositions.
//!
//! For every input position the parser keeps the cheapest known decision
//! chain ending there, considering, at each admissible offset, a literal run
//! flowing into a match, a match run extending, and a match run closing into
//! literals. Costs are exact encoded bit counts, so the terminal chain is the
//! globally cheapest decomposition of the buffer.

use crate::block::{BlockId, BlockPool, INITIAL_OFFSET};

/// Progress milestone scale: one step per 2% of the input.
const MAX_SCALE: usize = 50;

/// Bit cost of the interlaced Elias-gamma code for `value >= 1`:
/// `1 + 2 * floor(log2 value)`.
pub(crate) fn elias_gamma_bits(value: u32) -> u32 {
    let mut bits = 1;
    let mut v = value;
    while v > 1 {
        bits += 2;
        v >>= 1;
    }
    bits
}

/// Admissible back-reference ceiling at `index`: bounded by the configured
/// window and by the bytes actually behind the position.
pub(crate) fn offset_ceiling(index: usize, offset_limit: usize) -> usize {
    if index > offset_limit {
        offset_limit
    } else if index < INITIAL_OFFSET {
        INITIAL_OFFSET
    } else {
        index
    }
}

/// Cost of the cheapest chain ending at `index`.
///
/// Every position from `skip` onward has a candidate by the time it is
/// consulted: the offset-1 tracker always produces one.
fn chain_cost(pool: &BlockPool, optimal: &[Option<BlockId>], index: usize) -> i64 {
    let id = optimal[index].expect("parsed position has a candidate chain");
    pool[id].bits
}

/// Find the cheapest decision chain covering `input[skip..]`.
///
/// Returns the terminal node of the winning decomposition; for degenerate
/// inputs (`input.len() <= skip`) the synthetic root is returned, which
/// encodes to an end-marker-only stream.
///
/// `progress`, when present, is invoked at fixed percentage milestones and
/// has no effect on the result.
pub(crate) fn optimize(
    pool: &mut BlockPool,
    input: &[u8],
    skip: usize,
    offset_limit: usize,
    mut progress: Option<&mut dyn FnMut(u8)>,
) -> BlockId {
    let input_size = input.len();
    let max_offset = offset_ceiling(input_size.saturating_sub(1), offset_limit);

    let mut last_literal: Vec<Option<BlockId>> = vec![None; max_offset + 1];
    let mut last_match: Vec<Option<BlockId>> = vec![None; max_offset + 1];
    let mut optimal: Vec<Option<BlockId>> = vec![None; input_size + 1];
    let mut match_length: Vec<usize> = vec![0; max_offset + 1];

    // Amortized cache of the cheapest admissible match length. Encoding cost
    // as a function of length is quasi-convex, so the cursor only ever moves
    // forward within one position.
    let mut best_length: Vec<usize> = vec![0; input_size + 1];
    if best_length.len() > 2 {
        best_length[2] = 2;
    }

    // Synthetic root the first real decision chains from.
    let root = pool.allocate(-1, skip as i64 - 1, INITIAL_OFFSET as u32, 0, None);
    last_match[INITIAL_OFFSET] = pool.assign(last_match[INITIAL_OFFSET], root);

    if input_size <= skip {
        return root;
    }

    let mut dots = 2;
    for index in skip..input_size {
        let mut best_length_size = 2;
        let max_offset = offset_ceiling(index, offset_limit);
        for offset in 1..=max_offset {
            if index != skip && index >= offset && input[index] == input[index - offset] {
                // A literal run at this offset flows into a match.
                if let Some(literal) = last_literal[offset] {
                    let length = (index as i64 - pool[literal].index) as usize;
                    let bits =
                        pool[literal].bits + 1 + i64::from(elias_gamma_bits(length as u32));
                    let candidate =
                        pool.allocate(bits, index as i64, offset as u32, length as u32, Some(literal));
                    last_match[offset] = pool.assign(last_match[offset], candidate);
                    if optimal[index].map_or(true, |best| pool[best].bits > bits) {
                        optimal[index] = pool.assign(optimal[index], candidate);
                    }
                }

                // The match run at this offset extends by one byte.
                match_length[offset] += 1;
                if match_length[offset] > 1 {
                    if best_length_size < match_length[offset] {
                        let anchor = best_length[best_length_size];
                        let mut bits = chain_cost(pool, &optimal, index - anchor)
                            + i64::from(elias_gamma_bits((anchor - 1) as u32));
                        loop {
                            best_length_size += 1;
                            let bits2 = chain_cost(pool, &optimal, index - best_length_size)
                                + i64::from(elias_gamma_bits((best_length_size - 1) as u32));
                            if bits2 <= bits {
                                best_length[best_length_size] = best_length_size;
                                bits = bits2;
                            } else {
                                best_length[best_length_size] = best_length[best_length_size - 1];
                            }
                            if best_length_size >= match_length[offset] {
                                break;
                            }
                        }
                    }

                    let length = best_length[match_length[offset]];
                    let anchor = optimal[index - length]
                        .expect("parsed position has a candidate chain");
                    let bits = pool[anchor].bits
                        + 8
                        + i64::from(elias_gamma_bits(((offset - 1) / 128 + 1) as u32))
                        + i64::from(elias_gamma_bits((length - 1) as u32));
                    let replace = match last_match[offset] {
                        Some(current) => {
                            pool[current].index != index as i64 || pool[current].bits > bits
                        }
                        None => true,
                    };
                    if replace {
                        let candidate = pool.allocate(
                            bits,
                            index as i64,
                            offset as u32,
                            length as u32,
                            Some(anchor),
                        );
                        last_match[offset] = pool.assign(last_match[offset], candidate);
                        if optimal[index].map_or(true, |best| pool[best].bits > bits) {
                            optimal[index] = pool.assign(optimal[index], candidate);
                        }
                    }
                }
            } else {
                // The match run at this offset is broken; close it into a
                // literal run.
                match_length[offset] = 0;
                if let Some(matched) = last_match[offset] {
                    let length = (index as i64 - pool[matched].index) as usize;
                    let bits = pool[matched].bits
                        + 1
                        + i64::from(elias_gamma_bits(length as u32))
                        + 8 * length as i64;
                    let candidate =
                        pool.allocate(bits, index as i64, 0, length as u32, Some(matched));
                    last_literal[offset] = pool.assign(last_literal[offset], candidate);
                    if optimal[index].map_or(true, |best| pool[best].bits > bits) {
                        optimal[index] = pool.assign(optimal[index], candidate);
                    }
                }
            }
        }

        if let Some(report) = progress.as_deref_mut() {
            if index * MAX_SCALE / input_size > dots {
                dots += 1;
                report((dots * 100 / MAX_SCALE) as u8);
            }
        }
    }

    optimal[input_size - 1].expect("parse covers the final position")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elias_gamma_bits() {
        assert_eq!(elias_gamma_bits(1), 1);
        assert_eq!(elias_gamma_bits(2), 3);
        assert_eq!(elias_gamma_bits(3), 3);
        assert_eq!(elias_gamma_bits(4), 5);
        assert_eq!(elias_gamma_bits(7), 5);
        assert_eq!(elias_gamma_bits(8), 7);
        assert_eq!(elias_gamma_bits(255), 15);
        assert_eq!(elias_gamma_bits(256), 17);
    }

    #[test]
    fn test_offset_ceiling_boundaries() {
        let limit = 32640;
        assert_eq!(offset_ceiling(0, limit), 1);
        assert_eq!(offset_ceiling(1, limit), 1);
        assert_eq!(offset_ceiling(2, limit), 2);
        assert_eq!(offset_ceiling(limit - 1, limit), limit - 1);
        assert_eq!(offset_ceiling(limit, limit), limit);
        assert_eq!(offset_ceiling(limit + 1, limit), limit);
    }

    #[test]
    fn test_single_byte_costs_nine_bits() {
        // One literal: gamma(1) + 8 raw bits.
        let mut pool = BlockPool::new();
        let terminal = optimize(&mut pool, &[0x2a], 0, 32640, None);
        assert_eq!(pool[terminal].bits, 9);
        assert_eq!(pool[terminal].offset, 0);
        assert_eq!(pool[terminal].length, 1);
    }

    #[test]
    fn test_empty_input_returns_root() {
        let mut pool = BlockPool::new();
        let terminal = optimize(&mut pool, &[], 0, 32640, None);
        assert_eq!(pool[terminal].bits, -1);
        assert_eq!(pool[terminal].index, -1);
        assert_eq!(pool[terminal].chain, None);
    }

    #[test]
    fn test_skip_beyond_input_returns_root() {
        let mut pool = BlockPool::new();
        let terminal = optimize(&mut pool, &[1, 2, 3], 3, 32640, None);
        assert_eq!(pool[terminal].bits, -1);
        assert_eq!(pool[terminal].index, 2);
    }

    #[test]
    fn test_repeated_pair_prefers_match() {
        // "abab": literal "ab" then a length-2 match at offset 2.
        let mut pool = BlockPool::new();
        let terminal = optimize(&mut pool, b"abab", 0, 32640, None);
        assert_eq!(pool[terminal].bits, 29);
        assert_eq!(pool[terminal].offset, 2);
        assert_eq!(pool[terminal].length, 2);
    }

    #[test]
    fn test_repeated_triplet_prefers_match() {
        // "abcabc": literal "abc" then a length-3 match at offset 3.
        let mut pool = BlockPool::new();
        let terminal = optimize(&mut pool, b"abcabc", 0, 32640, None);
        assert_eq!(pool[terminal].bits, 39);
        assert_eq!(pool[terminal].offset, 3);
        assert_eq!(pool[terminal].length, 3);
    }

    #[test]
    fn test_identical_run_cheaper_than_literals() {
        // A run of n identical bytes must never cost more than one literal
        // run: 8n + gamma(n) + 1 bits.
        for n in [2usize, 3, 17, 64, 200] {
            let data = vec![0xaau8; n];
            let mut pool = BlockPool::new();
            let terminal = optimize(&mut pool, &data, 0, 32640, None);
            let literal_bits = 8 * n as i64 + i64::from(elias_gamma_bits(n as u32));
            assert!(
                pool[terminal].bits <= literal_bits,
                "run of {} cost {} bits, literal ceiling {}",
                n,
                pool[terminal].bits,
                literal_bits
            );
        }
    }

    #[test]
    fn test_progress_observer_hits_milestones_without_changing_result() {
        let data: Vec<u8> = (0..400u32).map(|i| (i % 7) as u8).collect();

        let mut pool = BlockPool::new();
        let silent = optimize(&mut pool, &data, 0, 32640, None);
        let silent_bits = pool[silent].bits;

        let mut milestones = Vec::new();
        let mut observed = |pct: u8| milestones.push(pct);
        let mut pool = BlockPool::new();
        let reported = optimize(&mut pool, &data, 0, 32640, Some(&mut observed));

        assert_eq!(pool[reported].bits, silent_bits);
        assert!(!milestones.is_empty());
        assert!(milestones.windows(2).all(|w| w[0] < w[1]));
        assert!(milestones.iter().all(|&pct| pct <= 100));
    }
}
