//! 데이터 분포와 특징 통계

use super::samples::Dataset;
use crate::core::features::{FEATURE_COUNT, FEATURE_NAMES};
use std::fmt;

/// 자세 점수 구간
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostureBand {
    /// 80 이상
    Good,
    /// 50 이상 80 미만
    Medium,
    /// 50 미만
    Bad,
}

impl PostureBand {
    pub const ALL: [PostureBand; 3] = [PostureBand::Good, PostureBand::Medium, PostureBand::Bad];

    pub fn from_label(label: f64) -> Self {
        if label >= 80.0 {
            PostureBand::Good
        } else if label >= 50.0 {
            PostureBand::Medium
        } else {
            PostureBand::Bad
        }
    }

    pub fn index(self) -> usize {
        match self {
            PostureBand::Good => 0,
            PostureBand::Medium => 1,
            PostureBand::Bad => 2,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            PostureBand::Good => "Good posture (80-100)",
            PostureBand::Medium => "Medium posture (50-79)",
            PostureBand::Bad => "Bad posture (0-49)",
        }
    }
}

/// 특징 하나의 요약
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSummary {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// `PostureBand::index()` 순서의 구간별 평균. 샘플이 없는 구간은 None
    pub band_means: [Option<f64>; 3],
}

/// 데이터셋 전체 요약
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub samples: usize,
    /// `PostureBand::index()` 순서의 구간별 샘플 수
    pub band_counts: [usize; 3],
    pub features: Vec<FeatureSummary>,
}

impl DatasetSummary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut band_counts = [0usize; 3];
        let mut sums = [[0.0f64; 3]; FEATURE_COUNT];
        let mut totals = [0.0f64; FEATURE_COUNT];
        let mut mins = [f64::INFINITY; FEATURE_COUNT];
        let mut maxs = [f64::NEG_INFINITY; FEATURE_COUNT];

        for sample in &dataset.samples {
            let band = PostureBand::from_label(sample.label).index();
            band_counts[band] += 1;

            for (i, value) in sample.features.to_array().into_iter().enumerate() {
                sums[i][band] += value;
                totals[i] += value;
                mins[i] = mins[i].min(value);
                maxs[i] = maxs[i].max(value);
            }
        }

        let n = dataset.len();
        let features = (0..FEATURE_COUNT)
            .map(|i| {
                let mut band_means = [None; 3];
                for band in PostureBand::ALL {
                    let count = band_counts[band.index()];
                    if count > 0 {
                        band_means[band.index()] = Some(sums[i][band.index()] / count as f64);
                    }
                }
                FeatureSummary {
                    name: FEATURE_NAMES[i],
                    min: if n > 0 { mins[i] } else { f64::NAN },
                    max: if n > 0 { maxs[i] } else { f64::NAN },
                    mean: if n > 0 { totals[i] / n as f64 } else { f64::NAN },
                    band_means,
                }
            })
            .collect();

        Self {
            samples: n,
            band_counts,
            features,
        }
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data Distribution:")?;
        for band in PostureBand::ALL {
            writeln!(f, "{}: {} samples", band.describe(), self.band_counts[band.index()])?;
        }

        writeln!(f, "\nFeature Statistics:")?;
        for feature in &self.features {
            writeln!(f, "\n{}:", feature.name)?;
            writeln!(f, "  Range: {:.4} to {:.4}", feature.min, feature.max)?;
            writeln!(f, "  Average: {:.4}", feature.mean)?;
            for band in PostureBand::ALL {
                match feature.band_means[band.index()] {
                    Some(mean) => writeln!(f, "  {:?} posture avg: {:.4}", band, mean)?,
                    None => writeln!(f, "  {:?} posture avg: -", band)?,
                }
            }
        }
        Ok(())
    }
}
