//! 거리와 각도 계산

use super::landmarks::Point2;

/// 두 점 사이의 유클리드 거리
pub fn distance_2d(a: Point2, b: Point2) -> f64 {
    // hypot 은 부호를 버리므로 distance(a, b) == distance(b, a) 가 비트 단위로 성립
    (b.x - a.x).hypot(b.y - a.y)
}

/// 꼭짓점 `b` 에서 `a`, `c` 로 향하는 두 반직선 사이의 각도 (도 단위, [0, 180])
///
/// 반직선 중 하나라도 길이가 0이면 180.0 을 돌려준다.
/// 입력에 NaN 이 있으면 결과도 NaN 이다.
pub fn angle_abc(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = (a.x - b.x, a.y - b.y);
    let cb = (c.x - b.x, c.y - b.y);

    let dot = ab.0 * cb.0 + ab.1 * cb.1;
    let mag_ab = ab.0.hypot(ab.1);
    let mag_cb = cb.0.hypot(cb.1);
    if mag_ab == 0.0 || mag_cb == 0.0 {
        return 180.0;
    }

    // 부동소수점 오차로 [-1, 1] 을 벗어나는 경우 보정
    let cos_theta = (dot / (mag_ab * mag_cb)).clamp(-1.0, 1.0);
    cos_theta.acos().to_degrees()
}
