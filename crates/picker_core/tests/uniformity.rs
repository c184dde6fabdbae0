use picker_core::draw;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Chi-square statistic of observed counts against a uniform expectation.
fn chi_square(counts: &[u64], trials: u64) -> f64 {
    let expected = trials as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

#[test]
fn draws_are_uniform_over_eight_items() {
    let pool: Vec<usize> = (0..8).collect();
    let trials = 100_000u64;
    let mut counts = vec![0u64; pool.len()];
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..trials {
        let picked = draw(&pool, &mut rng).unwrap();
        counts[*picked] += 1;
    }

    // 7 degrees of freedom; 24.32 is the 99.9th percentile.
    let statistic = chi_square(&counts, trials);
    assert!(statistic < 24.32, "chi-square {statistic} counts {counts:?}");
}

#[test]
fn draws_are_uniform_over_odd_sized_pool() {
    // Pool sizes that do not divide 2^32 are where modulo bias would show.
    let pool: Vec<usize> = (0..3).collect();
    let trials = 90_000u64;
    let mut counts = vec![0u64; pool.len()];
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..trials {
        counts[*draw(&pool, &mut rng).unwrap()] += 1;
    }

    // 2 degrees of freedom; 13.82 is the 99.9th percentile.
    let statistic = chi_square(&counts, trials);
    assert!(statistic < 13.82, "chi-square {statistic} counts {counts:?}");
}
