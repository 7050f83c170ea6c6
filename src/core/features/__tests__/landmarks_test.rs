use crate::core::features::landmarks::{safe_float, LandmarkRow, Point2, REQUIRED_COLUMNS};

#[test]
fn safe_float_파싱_테스트() {
    assert_eq!(safe_float("42"), 42.0);
    assert_eq!(safe_float(" 3.5 "), 3.5);
    assert_eq!(safe_float("-1e2"), -100.0);
    assert!(safe_float("").is_nan());
    assert!(safe_float("abc").is_nan());
    assert!(safe_float("inf").is_nan(), "무한대는 유한한 숫자가 아님");
    assert!(safe_float("NaN").is_nan());
}

#[test]
fn 프레임크기_검증_테스트() {
    let mut row = LandmarkRow::from_pixels(640.0, 480.0, (0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (0.0, 0.0), 1.0);
    assert_eq!(row.frame_size(), Some((640.0, 480.0)));

    row.video_width = "0".to_string();
    assert_eq!(row.frame_size(), None);

    row.video_width = "-640".to_string();
    assert_eq!(row.frame_size(), None);

    row.video_width = "wide".to_string();
    assert_eq!(row.frame_size(), None);

    row.video_width = "640".to_string();
    row.video_height = String::new();
    assert_eq!(row.frame_size(), None);
}

#[test]
fn 정규화_좌표_테스트() {
    let row = LandmarkRow::from_pixels(200.0, 100.0, (50.0, 50.0), (20.0, 80.0), (180.0, 80.0), (40.0, 45.0), (160.0, 45.0), 70.0);
    let lm = row.normalized().expect("유효한 프레임");
    assert_eq!(lm.nose, Point2::new(0.25, 0.5));
    assert_eq!(lm.left_shoulder, Point2::new(0.1, 0.8));
    assert_eq!(lm.right_ear, Point2::new(0.8, 0.45));
}

#[test]
fn 필드_조회_설정_테스트() {
    let mut row = LandmarkRow::default();
    for column in REQUIRED_COLUMNS {
        row.set_field(column, column);
    }
    for column in REQUIRED_COLUMNS {
        assert_eq!(row.field(column), Some(column));
    }
    assert_eq!(row.field("unknown"), None);

    // 모르는 컬럼은 무시
    row.set_field("extra", "1");
    assert_eq!(row.label, "label");
}
