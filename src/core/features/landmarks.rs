//! 랜드마크 행(row)과 정규화 좌표

use serde::Serialize;

/// 입력 CSV에 반드시 있어야 하는 컬럼들
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "videoWidth",
    "videoHeight",
    "nose_x",
    "nose_y",
    "left_shoulder_x",
    "left_shoulder_y",
    "right_shoulder_x",
    "right_shoulder_y",
    "left_ear_x",
    "left_ear_y",
    "right_ear_x",
    "right_ear_y",
    "label",
];

/// 정규화된 2D 좌표
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 두 점의 산술 평균
    pub fn midpoint(a: Point2, b: Point2) -> Self {
        Self {
            x: (a.x + b.x) / 2.0,
            y: (a.y + b.y) / 2.0,
        }
    }
}

/// CSV 한 줄. 파싱 실패가 필드 단위로만 영향을 주도록 원문 그대로 보관한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LandmarkRow {
    #[serde(rename = "videoWidth")]
    pub video_width: String,
    #[serde(rename = "videoHeight")]
    pub video_height: String,
    pub nose_x: String,
    pub nose_y: String,
    pub left_shoulder_x: String,
    pub left_shoulder_y: String,
    pub right_shoulder_x: String,
    pub right_shoulder_y: String,
    pub left_ear_x: String,
    pub left_ear_y: String,
    pub right_ear_x: String,
    pub right_ear_y: String,
    pub label: String,
}

/// 정규화된 랜드마크 묶음
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedLandmarks {
    pub nose: Point2,
    pub left_shoulder: Point2,
    pub right_shoulder: Point2,
    pub left_ear: Point2,
    pub right_ear: Point2,
}

impl LandmarkRow {
    /// 숫자 필드로 행 생성 (테스트와 데이터 생성용)
    #[allow(clippy::too_many_arguments)]
    pub fn from_pixels(
        width: f64,
        height: f64,
        nose: (f64, f64),
        left_shoulder: (f64, f64),
        right_shoulder: (f64, f64),
        left_ear: (f64, f64),
        right_ear: (f64, f64),
        label: f64,
    ) -> Self {
        Self {
            video_width: width.to_string(),
            video_height: height.to_string(),
            nose_x: nose.0.to_string(),
            nose_y: nose.1.to_string(),
            left_shoulder_x: left_shoulder.0.to_string(),
            left_shoulder_y: left_shoulder.1.to_string(),
            right_shoulder_x: right_shoulder.0.to_string(),
            right_shoulder_y: right_shoulder.1.to_string(),
            left_ear_x: left_ear.0.to_string(),
            left_ear_y: left_ear.1.to_string(),
            right_ear_x: right_ear.0.to_string(),
            right_ear_y: right_ear.1.to_string(),
            label: label.to_string(),
        }
    }

    /// 컬럼 이름으로 원문 필드 조회
    pub fn field(&self, column: &str) -> Option<&str> {
        let value = match column {
            "videoWidth" => &self.video_width,
            "videoHeight" => &self.video_height,
            "nose_x" => &self.nose_x,
            "nose_y" => &self.nose_y,
            "left_shoulder_x" => &self.left_shoulder_x,
            "left_shoulder_y" => &self.left_shoulder_y,
            "right_shoulder_x" => &self.right_shoulder_x,
            "right_shoulder_y" => &self.right_shoulder_y,
            "left_ear_x" => &self.left_ear_x,
            "left_ear_y" => &self.left_ear_y,
            "right_ear_x" => &self.right_ear_x,
            "right_ear_y" => &self.right_ear_y,
            "label" => &self.label,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// 컬럼 이름으로 원문 필드 설정. 모르는 컬럼은 무시한다.
    pub fn set_field(&mut self, column: &str, value: &str) {
        let slot = match column {
            "videoWidth" => &mut self.video_width,
            "videoHeight" => &mut self.video_height,
            "nose_x" => &mut self.nose_x,
            "nose_y" => &mut self.nose_y,
            "left_shoulder_x" => &mut self.left_shoulder_x,
            "left_shoulder_y" => &mut self.left_shoulder_y,
            "right_shoulder_x" => &mut self.right_shoulder_x,
            "right_shoulder_y" => &mut self.right_shoulder_y,
            "left_ear_x" => &mut self.left_ear_x,
            "left_ear_y" => &mut self.left_ear_y,
            "right_ear_x" => &mut self.right_ear_x,
            "right_ear_y" => &mut self.right_ear_y,
            "label" => &mut self.label,
            _ => return,
        };
        *slot = value.to_string();
    }

    /// 라벨 (자세 점수). 숫자가 아니면 NaN
    pub fn label_value(&self) -> f64 {
        safe_float(&self.label)
    }

    /// 프레임 크기. 누락/비숫자/0 이하이면 None
    pub fn frame_size(&self) -> Option<(f64, f64)> {
        let width = safe_float(&self.video_width);
        let height = safe_float(&self.video_height);
        // NaN 비교는 항상 false 이므로 `> 0.0` 으로 한 번에 거른다
        if width > 0.0 && height > 0.0 {
            Some((width, height))
        } else {
            None
        }
    }

    /// 프레임 크기로 정규화한 랜드마크. 프레임이 유효하지 않으면 None
    pub fn normalized(&self) -> Option<NormalizedLandmarks> {
        let (width, height) = self.frame_size()?;
        let point = |x: &str, y: &str| Point2::new(safe_float(x) / width, safe_float(y) / height);

        Some(NormalizedLandmarks {
            nose: point(&self.nose_x, &self.nose_y),
            left_shoulder: point(&self.left_shoulder_x, &self.left_shoulder_y),
            right_shoulder: point(&self.right_shoulder_x, &self.right_shoulder_y),
            left_ear: point(&self.left_ear_x, &self.left_ear_y),
            right_ear: point(&self.right_ear_x, &self.right_ear_y),
        })
    }
}

/// 유한한 숫자로 읽을 수 없는 값은 NaN
pub fn safe_float(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => f64::NAN,
    }
}
