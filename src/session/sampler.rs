use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Question;

/// Sample an exam set from a subject pool using the given random source.
///
/// The pool is copied, uniformly permuted, and truncated to `limit`. Pools
/// no larger than `limit` come back whole, permuted. An empty pool yields an
/// empty set; starting a session on it fails with `EmptyPool`.
pub fn sample_with<R: Rng>(pool: &[Question], limit: usize, rng: &mut R) -> Vec<Question> {
    let mut set: Vec<Question> = pool.to_vec();
    set.shuffle(rng);
    set.truncate(limit);
    set
}

/// Sample with the thread-local random source.
pub fn sample(pool: &[Question], limit: usize) -> Vec<Question> {
    sample_with(pool, limit, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn pool(size: u32) -> Vec<Question> {
        (0..size)
            .map(|id| Question {
                id,
                text: format!("Question {}", id),
                options: [
                    "a".to_string(),
                    "b".to_string(),
                    "c".to_string(),
                    "d".to_string(),
                ],
                correct_answer: 0,
            })
            .collect()
    }

    #[test]
    fn test_large_pool_truncated_to_limit_without_duplicates() {
        let pool = pool(50);
        let mut rng = StdRng::seed_from_u64(7);
        let set = sample_with(&pool, 20, &mut rng);

        assert_eq!(set.len(), 20);
        let ids: HashSet<u32> = set.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_small_pool_returned_whole_permuted() {
        let pool = pool(5);
        let mut rng = StdRng::seed_from_u64(7);
        let set = sample_with(&pool, 20, &mut rng);

        assert_eq!(set.len(), 5);
        let ids: HashSet<u32> = set.iter().map(|q| q.id).collect();
        let expected: HashSet<u32> = pool.iter().map(|q| q.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_empty_pool_yields_empty_set() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(sample_with(&[], 20, &mut rng).is_empty());
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let pool = pool(30);
        let a = sample_with(&pool, 20, &mut StdRng::seed_from_u64(42));
        let b = sample_with(&pool, 20, &mut StdRng::seed_from_u64(42));

        let ids_a: Vec<u32> = a.iter().map(|q| q.id).collect();
        let ids_b: Vec<u32> = b.iter().map(|q| q.id).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn test_pool_is_not_mutated() {
        let pool = pool(10);
        let before: Vec<u32> = pool.iter().map(|q| q.id).collect();
        let _ = sample_with(&pool, 5, &mut StdRng::seed_from_u64(1));
        let after: Vec<u32> = pool.iter().map(|q| q.id).collect();
        assert_eq!(before, after);
    }
}
