//! 결정적 학습/검증 분할

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// 학습/검증 인덱스
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSplit {
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
}

impl DatasetSplit {
    pub fn train_len(&self) -> usize {
        self.train_indices.len()
    }

    pub fn test_len(&self) -> usize {
        self.test_indices.len()
    }
}

/// `n` 개 샘플을 섞어 `test_ratio` 비율만큼 검증용으로 나눈다.
///
/// 검증 개수는 `ceil(n * test_ratio)`. 섞는 순서는 ChaCha8 시드에만 의존하므로
/// 같은 `n`, `seed` 에 대해 플랫폼과 무관하게 같은 분할이 나온다.
pub fn train_test_split(n: usize, test_ratio: f64, seed: u64) -> DatasetSplit {
    let ratio = test_ratio.clamp(0.0, 1.0);
    let n_test = ((n as f64) * ratio).ceil() as usize;
    let n_test = n_test.min(n);

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let train_indices = indices.split_off(n_test);
    DatasetSplit {
        train_indices,
        test_indices: indices,
    }
}
