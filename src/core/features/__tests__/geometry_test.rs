use crate::core::features::geometry::{angle_abc, distance_2d};
use crate::core::features::landmarks::Point2;
use approx::assert_abs_diff_eq;

#[test]
fn 거리_대칭성_테스트() {
    let points = [
        Point2::new(0.5, 0.5),
        Point2::new(0.3, 0.7),
        Point2::new(0.75, 0.45),
        Point2::new(-1.25, 3.0),
        Point2::new(1e-9, 1e9),
    ];

    for &a in &points {
        for &b in &points {
            assert_eq!(distance_2d(a, b), distance_2d(b, a), "거리는 대칭이어야 함: {:?} {:?}", a, b);
        }
    }
}

#[test]
fn 거리_기본값_테스트() {
    let d = distance_2d(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
    assert_abs_diff_eq!(d, 5.0, epsilon = 1e-12);
    assert_eq!(distance_2d(Point2::new(0.2, 0.2), Point2::new(0.2, 0.2)), 0.0);
}

#[test]
fn 직각_각도_테스트() {
    let angle = angle_abc(Point2::new(1.0, 0.0), Point2::new(0.0, 0.0), Point2::new(0.0, 1.0));
    assert_abs_diff_eq!(angle, 90.0, epsilon = 1e-9);
}

#[test]
fn 일직선_각도_테스트() {
    // 같은 방향 → 0도, 반대 방향 → 180도
    let same = angle_abc(Point2::new(1.0, 0.0), Point2::new(0.0, 0.0), Point2::new(2.0, 0.0));
    let opposite = angle_abc(Point2::new(1.0, 0.0), Point2::new(0.0, 0.0), Point2::new(-3.0, 0.0));
    assert_abs_diff_eq!(same, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(opposite, 180.0, epsilon = 1e-6);
}

#[test]
fn 길이0_반직선은_180도_테스트() {
    let b = Point2::new(0.4, 0.4);
    assert_eq!(angle_abc(b, b, Point2::new(0.9, 0.1)), 180.0);
    assert_eq!(angle_abc(Point2::new(0.9, 0.1), b, b), 180.0);
}

#[test]
fn 각도_범위_테스트() {
    // 결정적인 격자 위의 점들로 [0, 180] 범위 확인
    let coords = [-1.0, -0.3, 0.0, 0.1, 0.5, 0.99, 2.0];
    for &ax in &coords {
        for &cy in &coords {
            for &bx in &coords {
                let angle = angle_abc(Point2::new(ax, 0.7), Point2::new(bx, 0.2), Point2::new(0.3, cy));
                assert!((0.0..=180.0).contains(&angle), "각도 범위 벗어남: {}", angle);
            }
        }
    }
}

#[test]
fn NaN_입력은_NaN_테스트() {
    let angle = angle_abc(Point2::new(f64::NAN, 0.0), Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
    assert!(angle.is_nan());
    assert!(distance_2d(Point2::new(f64::NAN, 0.0), Point2::new(0.0, 0.0)).is_nan());
}
