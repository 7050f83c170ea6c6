mod trainer_test;

use crate::core::dataset::Dataset;
use crate::core::features::LandmarkRow;

/// 고개를 숙일수록 점수가 낮아지는 결정적 합성 데이터
pub(super) fn 합성_데이터셋(n: usize) -> Dataset {
    let rows: Vec<LandmarkRow> = (0..n)
        .map(|i| {
            let drop = (i % 20) as f64 * 4.0;
            let sway = ((i * 7) % 11) as f64 - 5.0;
            LandmarkRow::from_pixels(
                640.0,
                480.0,
                (320.0 + sway, 200.0 + drop),
                (250.0, 330.0),
                (390.0, 330.0),
                (290.0 + sway, 190.0 + drop * 0.5),
                (350.0 + sway, 190.0 + drop * 0.5),
                95.0 - drop,
            )
        })
        .collect();
    Dataset::from_rows(&rows).0
}
