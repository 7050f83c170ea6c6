//! 랜드마크 행 → 7개 기하 특징

use super::geometry::{angle_abc, distance_2d};
use super::landmarks::{LandmarkRow, Point2};

/// 특징 개수 (모델 입력 차원)
pub const FEATURE_COUNT: usize = 7;

/// 특징 이름 (학습 데이터와 내보낸 모델이 공유하는 순서)
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "dist_nose_shoulders",
    "ratio_noseShoulders",
    "neck_tilt_angle",
    "dist_leftEar_nose",
    "dist_rightEar_nose",
    "angle_leftShoulder",
    "angle_rightShoulder",
];

/// 자세 특징 벡터. 계산할 수 없는 값은 NaN
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    /// 코 ↔ 어깨 중점 거리
    pub dist_nose_shoulders: f64,
    /// 위 거리 / 어깨 너비
    pub ratio_nose_shoulders: f64,
    /// 코를 꼭짓점으로 양쪽 귀가 이루는 각
    pub neck_tilt_angle: f64,
    pub dist_left_ear_nose: f64,
    pub dist_right_ear_nose: f64,
    /// 왼쪽 어깨를 꼭짓점으로 왼쪽 귀와 코가 이루는 각
    pub angle_left_shoulder: f64,
    pub angle_right_shoulder: f64,
}

impl FeatureVector {
    /// 모든 특징이 NaN 인 벡터
    pub fn undefined() -> Self {
        Self::from_array([f64::NAN; FEATURE_COUNT])
    }

    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            dist_nose_shoulders: values[0],
            ratio_nose_shoulders: values[1],
            neck_tilt_angle: values[2],
            dist_left_ear_nose: values[3],
            dist_right_ear_nose: values[4],
            angle_left_shoulder: values[5],
            angle_right_shoulder: values[6],
        }
    }

    /// `FEATURE_NAMES` 순서의 배열
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.dist_nose_shoulders,
            self.ratio_nose_shoulders,
            self.neck_tilt_angle,
            self.dist_left_ear_nose,
            self.dist_right_ear_nose,
            self.angle_left_shoulder,
            self.angle_right_shoulder,
        ]
    }

    /// 모델 입력용 f32 배열
    pub fn to_f32_array(&self) -> [f32; FEATURE_COUNT] {
        self.to_array().map(|v| v as f32)
    }

    /// 모든 특징이 유한한지
    pub fn is_complete(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// (이름, 값) 쌍
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.to_array())
    }
}

/// 랜드마크 한 행에서 특징 벡터 계산
///
/// 프레임 크기가 없거나 0 이하이면 전부 NaN 이고, 개별 좌표 파싱 실패는
/// 해당 좌표를 쓰는 특징만 NaN 으로 만든다. 어떤 입력에도 패닉하지 않는다.
pub fn extract_features(row: &LandmarkRow) -> FeatureVector {
    let Some(lm) = row.normalized() else {
        return FeatureVector::undefined();
    };

    let mid_shoulder = Point2::midpoint(lm.left_shoulder, lm.right_shoulder);

    let dist_nose_shoulders = distance_2d(lm.nose, mid_shoulder);
    let shoulder_width = distance_2d(lm.left_shoulder, lm.right_shoulder);
    let ratio_nose_shoulders = if shoulder_width > 0.0 {
        dist_nose_shoulders / shoulder_width
    } else {
        f64::NAN
    };

    FeatureVector {
        dist_nose_shoulders,
        ratio_nose_shoulders,
        neck_tilt_angle: angle_abc(lm.left_ear, lm.nose, lm.right_ear),
        dist_left_ear_nose: distance_2d(lm.left_ear, lm.nose),
        dist_right_ear_nose: distance_2d(lm.right_ear, lm.nose),
        angle_left_shoulder: angle_abc(lm.left_ear, lm.left_shoulder, lm.nose),
        angle_right_shoulder: angle_abc(lm.right_ear, lm.right_shoulder, lm.nose),
    }
}
