use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("draw requested on an empty pool")]
pub struct EmptyPoolError;

/// Picks one element of `pool`, each with probability `1 / pool.len()`.
///
/// `gen_range` rejects out-of-zone samples, so there is no modulo bias
/// whatever the pool size.
pub fn draw<'p, T, R>(pool: &'p [T], rng: &mut R) -> Result<&'p T, EmptyPoolError>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return Err(EmptyPoolError);
    }
    let index = rng.gen_range(0..pool.len());
    Ok(&pool[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_pool_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool: [u8; 0] = [];
        assert_eq!(draw(&pool, &mut rng), Err(EmptyPoolError));
    }

    #[test]
    fn single_item_pool_always_returns_it() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            assert_eq!(draw(&["only"], &mut rng), Ok(&"only"));
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let pool = [1, 2, 3, 4, 5, 6, 7];
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(draw(&pool, &mut a), draw(&pool, &mut b));
        }
    }
}
