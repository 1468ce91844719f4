use deckshuffle::lcg::{self, Lcg};
use deckshuffle::shuffle::{is_permutation, permutation, shuffle};
use deckshuffle::table::{shuffle_columns, shuffle_rows, Anchors, Table};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_pcg::Pcg64;
use std::collections::HashSet;

#[test]
fn test_concrete_vector_seed_one() {
    let (value, seed) = lcg::next(1);
    assert_eq!(seed, (1_103_515_245u64 + 12_345) as u32 % 2_147_483_648);
    assert_eq!(seed, 1_103_527_590);
    assert!((value - 0.513_870_078).abs() < 1e-9, "value was {value}");
}

#[test]
fn test_determinism_and_bijection() {
    let mut rng = Pcg64::seed_from_u64(42);

    for _ in 0..500 {
        let n = rng.gen_range(0..40);
        let seed: u32 = rng.gen();
        let items: Vec<u64> = (0..n).map(|_| rng.gen_range(0..10)).collect();

        let (a, seed_a) = shuffle(&items, seed);
        let (b, seed_b) = shuffle(&items, seed);
        assert_eq!(a, b, "same seed must give same order");
        assert_eq!(seed_a, seed_b, "same seed must give same final seed");

        let mut sorted_in = items.clone();
        let mut sorted_out = a.clone();
        sorted_in.sort_unstable();
        sorted_out.sort_unstable();
        assert_eq!(sorted_in, sorted_out, "multiset changed for n={n}, seed={seed}");

        let (perm, _) = permutation(n, seed);
        assert!(is_permutation(&perm, n));
    }
}

#[test]
fn test_identity_on_degenerate_input() {
    for seed in [0, 1, 12_345, u32::MAX] {
        let empty: Vec<&str> = Vec::new();
        assert_eq!(shuffle(&empty, seed), (vec![], seed));
        assert_eq!(shuffle(&["x"], seed), (vec!["x"], seed));
    }
}

#[test]
fn test_final_seed_is_n_minus_one_draws() {
    for n in 2..20 {
        let mut rng = Lcg::new(7);
        for _ in 1..n {
            rng.next_u32();
        }
        assert_eq!(permutation(n, 7).1, rng.state());
    }
}

#[test]
fn test_cross_seed_independence() {
    // Statistical: distinct seeds nearly always disagree for n >= 5.
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let pairs = 2_000;
    let mut collisions = 0;

    for _ in 0..pairs {
        let s1 = rng.next_u32();
        let mut s2 = rng.next_u32();
        if s1 == s2 {
            s2 = s2.wrapping_add(1);
        }
        if permutation(8, s1).0 == permutation(8, s2).0 {
            collisions += 1;
        }
    }

    println!("collisions: {collisions}/{pairs}");
    // 8! = 40320 orders; expected collisions are well under 1.
    assert!(collisions <= 5, "too many identical permutations: {collisions}");
}

#[test]
fn test_permutations_cover_all_orders() {
    let seen: HashSet<Vec<usize>> = (0..2_000u32).map(|s| permutation(3, s * 7919).0).collect();
    assert_eq!(seen.len(), 6, "every order of three items should appear");
}

#[test]
fn test_end_to_end_header_and_columns() {
    let mut table = Table::new(vec![
        vec!["H1", "H2", "H3"],
        vec!["A1", "A2", "A3"],
        vec!["B1", "B2", "B3"],
    ]);
    let anchors = Anchors::default();

    let final_seed = shuffle_columns(&mut table, 1, anchors);
    let (expected, expected_seed) = shuffle(&[1usize, 2], 1);
    assert_eq!(final_seed, expected_seed);

    for (row, prefix) in table.rows().iter().zip(["H", "A", "B"]) {
        assert_eq!(row[0], format!("{prefix}1"), "anchor column moved");
        let order: Vec<String> = expected.iter().map(|c| format!("{prefix}{}", c + 1)).collect();
        assert_eq!(&row[1..], order.as_slice(), "rows disagree on column order");
    }
}

#[test]
fn test_anchor_invariance_random_tables() {
    let mut rng = Pcg64::seed_from_u64(7);

    for _ in 0..200 {
        let rows = rng.gen_range(0..8);
        let cols = rng.gen_range(1..8);
        let cells: Vec<Vec<(usize, usize)>> =
            (0..rows).map(|r| (0..cols).map(|c| (r, c)).collect()).collect();
        let mut table = Table::new(cells);
        let seed: u32 = rng.gen();

        shuffle_columns(&mut table, seed, Anchors::default());
        shuffle_rows(&mut table, seed, Anchors::default());

        if rows > 0 {
            let header_cols: Vec<usize> = table.rows()[0].iter().map(|cell| cell.1).collect();
            assert!(table.rows()[0].iter().all(|cell| cell.0 == 0), "header row moved");
            for row in table.rows() {
                assert_eq!(row[0].1, 0, "first column moved");
                let cols_here: Vec<usize> = row.iter().map(|cell| cell.1).collect();
                assert_eq!(cols_here, header_cols, "columns not moved as a unit");
            }
        }
    }
}
