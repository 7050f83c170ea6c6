//! 회귀 지표 (MSE, RMSE, R²)

use std::fmt;

/// 검증 세트 회귀 지표
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionMetrics {
    pub mse: f64,
    pub rmse: f64,
    pub r2: f64,
    pub samples: usize,
}

impl RegressionMetrics {
    /// 실제값과 예측값으로 지표 계산. 길이가 다르면 짧은 쪽에 맞춘다.
    ///
    /// 실제값 분산이 0 이면 R² 는 완전 일치일 때 1.0, 아니면 0.0.
    /// 샘플이 없으면 모든 지표가 NaN.
    pub fn compute(y_true: &[f64], y_pred: &[f64]) -> Self {
        let n = y_true.len().min(y_pred.len());
        if n == 0 {
            return Self {
                mse: f64::NAN,
                rmse: f64::NAN,
                r2: f64::NAN,
                samples: 0,
            };
        }

        let (y_true, y_pred) = (&y_true[..n], &y_pred[..n]);
        let ss_res: f64 = y_true
            .iter()
            .zip(y_pred)
            .map(|(t, p)| (t - p).powi(2))
            .sum();

        let mean = y_true.iter().sum::<f64>() / n as f64;
        let ss_tot: f64 = y_true.iter().map(|t| (t - mean).powi(2)).sum();

        let mse = ss_res / n as f64;
        let r2 = if ss_tot > 0.0 {
            1.0 - ss_res / ss_tot
        } else if ss_res == 0.0 {
            1.0
        } else {
            0.0
        };

        Self {
            mse,
            rmse: mse.sqrt(),
            r2,
            samples: n,
        }
    }

    /// 표준 출력용 보고 줄
    pub fn report_lines(&self) -> [String; 3] {
        [
            format!("Test MSE: {:.2}", self.mse),
            format!("Test RMSE: {:.2}", self.rmse),
            format!("Test R^2: {:.3}", self.r2),
        ]
    }
}

impl fmt::Display for RegressionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mse={:.4} rmse={:.4} r2={:.4} (n={})",
            self.mse, self.rmse, self.r2, self.samples
        )
    }
}
