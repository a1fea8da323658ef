//! Skill partitioning: split a pool into two sides with skill sums as close as possible.
//!
//! All functions are pure: pool in, split out. Side A is always the first element of the
//! returned tuple.

use crate::models::{total_skill, Participant};
use rand::seq::SliceRandom;
use rand::Rng;

/// Largest pool size solved exactly. `C(10, 5) = 252` splits is the worst case.
pub const EXACT_BALANCE_MAX_POOL: usize = 10;

/// Two sides: `(side_a, side_b)`.
pub type Split = (Vec<Participant>, Vec<Participant>);

/// Which algorithm `balance` uses for a pool of a given size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BalancePath {
    /// Fewer than two participants: nothing to split.
    Trivial,
    Exact,
    Greedy,
}

impl BalancePath {
    /// Path taken for a pool of `n` participants.
    pub fn for_pool_size(n: usize) -> Self {
        if n < 2 {
            BalancePath::Trivial
        } else if n <= EXACT_BALANCE_MAX_POOL {
            BalancePath::Exact
        } else {
            BalancePath::Greedy
        }
    }
}

/// Absolute difference between the two sides' skill sums.
pub fn skill_difference(side_a: &[Participant], side_b: &[Participant]) -> u64 {
    total_skill(side_a).abs_diff(total_skill(side_b))
}

/// Exhaustive search over every way to put `floor(n/2)` participants on side A.
///
/// Combinations are enumerated as ascending index tuples in lexicographic order
/// (`[0,1,2]`, `[0,1,3]`, ...). The first split reaching the minimum difference wins, and
/// the search stops at the first perfect (difference 0) split. Both sides keep input order.
///
/// For `n < 2` returns `(participants, [])`.
pub fn exact_balance(participants: &[Participant]) -> Split {
    let n = participants.len();
    if n < 2 {
        return (participants.to_vec(), Vec::new());
    }
    let half = n / 2;
    let total = total_skill(participants);

    let mut combo: Vec<usize> = (0..half).collect();
    let mut best_combo = combo.clone();
    let mut best_diff = u64::MAX;
    loop {
        let sum_a: u64 = combo
            .iter()
            .map(|&i| u64::from(participants[i].skill_rating))
            .sum();
        let diff = sum_a.abs_diff(total - sum_a);
        if diff < best_diff {
            best_diff = diff;
            best_combo.clone_from(&combo);
            if diff == 0 {
                break;
            }
        }
        if !next_combination(&mut combo, n) {
            break;
        }
    }

    let mut on_a = vec![false; n];
    for i in best_combo {
        on_a[i] = true;
    }
    let mut side_a = Vec::with_capacity(half);
    let mut side_b = Vec::with_capacity(n - half);
    for (p, a) in participants.iter().zip(on_a) {
        if a {
            side_a.push(p.clone());
        } else {
            side_b.push(p.clone());
        }
    }
    (side_a, side_b)
}

/// Advance `combo` to the next k-combination of `0..n` in lexicographic order.
/// Returns false once the last combination has been passed.
fn next_combination(combo: &mut [usize], n: usize) -> bool {
    let k = combo.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        if combo[i] < n - k + i {
            combo[i] += 1;
            for j in i + 1..k {
                combo[j] = combo[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Highest rating first, each participant goes to the side with the smaller running sum.
/// Ties go to side A. Equal ratings keep their input order (stable sort).
///
/// A side stops taking participants once it holds `ceil(n/2)`, so side sizes never differ
/// by more than one.
pub fn greedy_balance(participants: &[Participant]) -> Split {
    let mut sorted = participants.to_vec();
    sorted.sort_by(|a, b| b.skill_rating.cmp(&a.skill_rating));

    let cap = participants.len().div_ceil(2);
    let mut side_a = Vec::with_capacity(cap);
    let mut side_b = Vec::with_capacity(cap);
    let (mut sum_a, mut sum_b) = (0u64, 0u64);
    for p in sorted {
        let rating = u64::from(p.skill_rating);
        let to_a = if side_a.len() == cap {
            false
        } else if side_b.len() == cap {
            true
        } else {
            sum_a <= sum_b
        };
        if to_a {
            sum_a += rating;
            side_a.push(p);
        } else {
            sum_b += rating;
            side_b.push(p);
        }
    }
    (side_a, side_b)
}

/// Exact for pools up to [`EXACT_BALANCE_MAX_POOL`], greedy beyond.
pub fn balance(participants: &[Participant]) -> Split {
    let path = BalancePath::for_pool_size(participants.len());
    let split = match path {
        BalancePath::Trivial => (participants.to_vec(), Vec::new()),
        BalancePath::Exact => exact_balance(participants),
        BalancePath::Greedy => greedy_balance(participants),
    };
    log::debug!(
        "balanced {} participants via {:?}: difference {}",
        participants.len(),
        path,
        skill_difference(&split.0, &split.1)
    );
    split
}

/// Uniform random split, ignoring skill. Side A gets `floor(n/2)` participants.
pub fn random_split(participants: &[Participant]) -> Split {
    random_split_with(participants, &mut rand::thread_rng())
}

/// [`random_split`] with a caller-supplied RNG.
pub fn random_split_with<R: Rng + ?Sized>(participants: &[Participant], rng: &mut R) -> Split {
    let mut shuffled = participants.to_vec();
    shuffled.shuffle(rng);
    let side_b = shuffled.split_off(shuffled.len() / 2);
    (shuffled, side_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combos(k: usize, n: usize) -> Vec<Vec<usize>> {
        let mut combo: Vec<usize> = (0..k).collect();
        let mut out = vec![combo.clone()];
        while next_combination(&mut combo, n) {
            out.push(combo.clone());
        }
        out
    }

    #[test]
    fn combinations_are_lexicographic() {
        assert_eq!(
            combos(2, 4),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn combination_count_for_ten_choose_five() {
        assert_eq!(combos(5, 10).len(), 252);
    }

    #[test]
    fn path_thresholds() {
        assert_eq!(BalancePath::for_pool_size(0), BalancePath::Trivial);
        assert_eq!(BalancePath::for_pool_size(1), BalancePath::Trivial);
        assert_eq!(BalancePath::for_pool_size(2), BalancePath::Exact);
        assert_eq!(BalancePath::for_pool_size(10), BalancePath::Exact);
        assert_eq!(BalancePath::for_pool_size(11), BalancePath::Greedy);
    }
}
