//! Integration tests for skill partitioning: exact, greedy, dispatch and random splits.

use match_roster_web::{
    balance, exact_balance, greedy_balance, random_split, skill_difference, BalancePath,
    Participant,
};
use match_roster_web::logic::{random_split_with, EXACT_BALANCE_MAX_POOL};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn pool(ratings: &[u32]) -> Vec<Participant> {
    ratings
        .iter()
        .enumerate()
        .map(|(i, r)| Participant::new(format!("P{}", i + 1), *r))
        .collect()
}

fn names(side: &[Participant]) -> Vec<&str> {
    side.iter().map(|p| p.name.as_str()).collect()
}

/// Smallest difference over every subset of size floor(n/2), by bitmask.
fn brute_force_min_diff(ratings: &[u32]) -> u64 {
    let n = ratings.len();
    let total: u64 = ratings.iter().map(|r| u64::from(*r)).sum();
    (0u32..(1 << n))
        .filter(|mask| mask.count_ones() as usize == n / 2)
        .map(|mask| {
            let sum_a: u64 = (0..n)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| u64::from(ratings[i]))
                .sum();
            sum_a.abs_diff(total - sum_a)
        })
        .min()
        .unwrap_or(0)
}

#[test]
fn exact_finds_perfect_split_for_known_pool() {
    let p = pool(&[90, 80, 10, 20]);
    let (a, b) = exact_balance(&p);
    assert_eq!(skill_difference(&a, &b), 0);
    // First perfect split in lexicographic order is {P1, P3}.
    assert_eq!(names(&a), vec!["P1", "P3"]);
    assert_eq!(names(&b), vec!["P2", "P4"]);
}

#[test]
fn exact_matches_brute_force_for_small_pools() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in 2..=EXACT_BALANCE_MAX_POOL {
        for _ in 0..20 {
            let ratings: Vec<u32> = (0..n).map(|_| rng.gen_range(1..=100)).collect();
            let p = pool(&ratings);
            let (a, b) = exact_balance(&p);
            assert_eq!(a.len(), n / 2);
            assert_eq!(a.len() + b.len(), n);
            assert_eq!(
                skill_difference(&a, &b),
                brute_force_min_diff(&ratings),
                "ratings {:?}",
                ratings
            );
        }
    }
}

#[test]
fn exact_keeps_first_minimal_split() {
    // Every split of two equal players has difference 0; the first is {P1}.
    let p = pool(&[50, 50]);
    let (a, b) = exact_balance(&p);
    assert_eq!(names(&a), vec!["P1"]);
    assert_eq!(names(&b), vec!["P2"]);
}

#[test]
fn exact_small_pools_go_to_side_a() {
    let (a, b) = exact_balance(&[]);
    assert!(a.is_empty() && b.is_empty());

    let single = pool(&[70]);
    let (a, b) = exact_balance(&single);
    assert_eq!(names(&a), vec!["P1"]);
    assert!(b.is_empty());
}

#[test]
fn exact_odd_pool_puts_smaller_half_on_a() {
    let p = pool(&[10, 20, 30, 40, 50]);
    let (a, b) = exact_balance(&p);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 3);
    assert_eq!(skill_difference(&a, &b), brute_force_min_diff(&[10, 20, 30, 40, 50]));
}

#[test]
fn greedy_alternates_by_running_sum() {
    let p = pool(&[10, 40, 30, 20]);
    let (a, b) = greedy_balance(&p);
    // 40 -> A (0 <= 0), 30 -> B, 20 -> B (40 > 30), 10 -> A (40 <= 50)
    assert_eq!(names(&a), vec!["P2", "P1"]);
    assert_eq!(names(&b), vec!["P3", "P4"]);
}

#[test]
fn greedy_ties_favor_side_a_and_keep_input_order() {
    let p = pool(&[25, 25, 25]);
    let (a, b) = greedy_balance(&p);
    assert_eq!(names(&a), vec!["P1", "P3"]);
    assert_eq!(names(&b), vec!["P2"]);
}

#[test]
fn greedy_caps_side_size() {
    // Uncapped, the star would sit alone against four.
    let p = pool(&[1000, 1, 1, 1, 1]);
    let (a, b) = greedy_balance(&p);
    assert_eq!(names(&a), vec!["P1", "P5"]);
    assert_eq!(names(&b), vec!["P2", "P3", "P4"]);
}

#[test]
fn greedy_of_empty_pool_is_empty() {
    let (a, b) = greedy_balance(&[]);
    assert!(a.is_empty() && b.is_empty());
}

#[test]
fn balance_dispatches_to_greedy_above_ten() {
    let mut rng = StdRng::seed_from_u64(11);
    let ratings: Vec<u32> = (0..11).map(|_| rng.gen_range(1..=100)).collect();
    let p = pool(&ratings);
    assert_eq!(BalancePath::for_pool_size(p.len()), BalancePath::Greedy);
    assert_eq!(balance(&p), greedy_balance(&p));
}

#[test]
fn balance_dispatches_to_exact_up_to_ten() {
    let p = pool(&[90, 80, 10, 20, 55, 45, 30, 70, 60, 40]);
    assert_eq!(BalancePath::for_pool_size(p.len()), BalancePath::Exact);
    assert_eq!(balance(&p), exact_balance(&p));
}

#[test]
fn balance_trivial_pools() {
    let (a, b) = balance(&[]);
    assert!(a.is_empty() && b.is_empty());
    let one = pool(&[5]);
    assert_eq!(balance(&one), (one.clone(), Vec::new()));
}

#[test]
fn balance_sizes_differ_by_at_most_one() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in 0..=16 {
        let ratings: Vec<u32> = (0..n).map(|_| rng.gen_range(0..=1000)).collect();
        let p = pool(&ratings);
        let (a, b) = balance(&p);
        assert_eq!(a.len() + b.len(), n);
        if n >= 2 {
            assert!(a.len().abs_diff(b.len()) <= 1, "n = {}", n);
        }
    }
}

#[test]
fn balance_is_stable_across_runs() {
    let p = pool(&[13, 71, 2, 99, 45, 45, 8, 60, 33, 21, 77, 5]);
    let first = balance(&p);
    for _ in 0..5 {
        let again = balance(&p);
        assert_eq!(
            skill_difference(&again.0, &again.1),
            skill_difference(&first.0, &first.1)
        );
    }
}

#[test]
fn exact_quality_does_not_depend_on_input_order() {
    let mut p = pool(&[17, 3, 88, 41, 29, 64, 50, 12]);
    let (a, b) = exact_balance(&p);
    let diff = skill_difference(&a, &b);
    p.reverse();
    let (a, b) = exact_balance(&p);
    assert_eq!(skill_difference(&a, &b), diff);
}

#[test]
fn random_split_partitions_the_pool() {
    let p = pool(&[1, 2, 3, 4, 5, 6, 7]);
    let (a, b) = random_split(&p);
    assert_eq!(a.len(), 3);
    assert_eq!(b.len(), 4);
    let seen: HashSet<_> = a.iter().chain(b.iter()).map(|x| x.id).collect();
    let expected: HashSet<_> = p.iter().map(|x| x.id).collect();
    assert_eq!(seen, expected);
}

#[test]
fn random_split_sizes_hold_for_every_small_pool() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 0..=16u32 {
        let ratings: Vec<u32> = (0..n).map(|_| rng.gen_range(0..100)).collect();
        let p = pool(&ratings);
        let (a, b) = random_split_with(&p, &mut rng);
        let n = n as usize;
        assert_eq!(a.len(), n / 2, "side A size for n = {}", n);
        assert_eq!(b.len(), n - n / 2, "side B size for n = {}", n);
        let seen: HashSet<_> = a.iter().chain(b.iter()).map(|x| x.id).collect();
        assert_eq!(seen.len(), n);
        assert!(p.iter().all(|x| seen.contains(&x.id)));
    }
}

#[test]
fn random_split_is_reproducible_with_seed() {
    let p = pool(&[1, 2, 3, 4, 5, 6, 7, 8]);
    let first = random_split_with(&p, &mut StdRng::seed_from_u64(99));
    let second = random_split_with(&p, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);
}

#[test]
fn random_split_of_empty_pool() {
    let (a, b) = random_split(&[]);
    assert!(a.is_empty() && b.is_empty());
}
