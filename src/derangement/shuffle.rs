//! Permutation and derangement sampling over index arrays.

use crate::ports::Entropy;

/// Shuffles `items` in place with the Fisher–Yates algorithm.
///
/// Every permutation is equally likely given a uniform `entropy`.
// https://en.wikipedia.org/wiki/Fisher%E2%80%93Yates_shuffle
pub fn fisher_yates<T>(items: &mut [T], entropy: &dyn Entropy) {
    for i in (1..items.len()).rev() {
        let j = entropy.index_below(i + 1);
        items.swap(i, j);
    }
}

/// Returns `true` if `perm[i] != i` for every index.
#[must_use]
pub fn is_derangement(perm: &[usize]) -> bool {
    perm.iter().enumerate().all(|(i, &p)| i != p)
}

/// Samples a uniformly random derangement of `0..n` in a single pass.
///
/// Early-refusal algorithm of Martínez, Panholzer and Prodinger
/// ("Generating random derangements", ANALCO 2008). Each step either closes
/// a cycle (marking `j`) or keeps extending one, with the closing
/// probability chosen so the final distribution is uniform over
/// derangements. Requires `n >= 2`.
///
/// Each redraw of `j` only terminates because an unmarked index below `i`
/// always exists and a uniform source hits it with probability at least
/// `1 / i`. An entropy source that never returns one would loop forever.
pub fn random_derangement(n: usize, entropy: &dyn Entropy) -> Vec<usize> {
    debug_assert!(n >= 2, "derangements of fewer than 2 elements do not exist");

    let ratios = closing_ratios(n);
    let mut perm: Vec<usize> = (0..n).collect();
    let mut marked = vec![false; n];
    let mut i = n - 1;
    let mut unmarked = n;

    // Invariant: exactly `unmarked` indices in 0..=i are unmarked, so i >= 1
    // whenever unmarked >= 2.
    while unmarked >= 2 {
        if !marked[i] {
            debug_assert!(marked[..i].contains(&false), "no unmarked index below {i}");
            let j = loop {
                let candidate = entropy.index_below(i);
                if !marked[candidate] {
                    break candidate;
                }
            };
            perm.swap(i, j);
            if entropy.unit() < ratios[unmarked] {
                marked[j] = true;
                unmarked -= 1;
            }
            unmarked -= 1;
        }
        i -= 1;
    }
    perm
}

/// `ratios[u] = (u - 1) * D(u - 2) / D(u)` for `2 <= u <= n`, where `D` is
/// the derangement count.
///
/// Computed through `E(k) = D(k) / k!` (partial sums of the series for
/// `1/e`) so that large `n` cannot overflow: the ratio equals
/// `E(u - 2) / (u * E(u))`.
// Indices stay far below 2^53, so the float conversions are exact.
#[allow(clippy::cast_precision_loss)]
fn closing_ratios(n: usize) -> Vec<f64> {
    let mut scaled = Vec::with_capacity(n + 1);
    let mut term = 1.0_f64;
    let mut sum = 0.0_f64;
    for k in 0..=n {
        if k > 0 {
            term = -term / k as f64;
        }
        sum += term;
        scaled.push(sum);
    }

    let mut ratios = vec![0.0; n + 1];
    for u in 2..=n {
        ratios[u] = scaled[u - 2] / (u as f64 * scaled[u]);
    }
    ratios
}
