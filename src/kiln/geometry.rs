use crate::config::{EconomicsConfig, KilnDefaults};

/// 킬른 한 측정 구간(원통 띠)의 방열 면적을 계산한다. [m²]
///
/// 구간 면적 = π × 외경 × 측정 간격.
pub fn section_area_m2(kiln: &KilnDefaults) -> f64 {
    std::f64::consts::PI * kiln.diameter_m * kiln.interval_m
}

/// 내화 벽돌 교체 수량 산출 결과.
#[derive(Debug, Clone, Copy)]
pub struct BrickCount {
    /// 링 1개당 벽돌 수
    pub bricks_per_ring: f64,
    /// 킬른 1m당 벽돌 수
    pub bricks_per_meter: f64,
}

/// 손상 구간 보수에 필요한 벽돌 수를 추정한다.
///
/// 내경(mm) = 외경 − 2×쉘두께. 링당 벽돌 수는 벽돌 중심 원주를
/// 표준 벽돌 폭(71.5mm)으로 나눈 값의 내림이다.
pub fn brick_count(kiln: &KilnDefaults, econ: &EconomicsConfig) -> BrickCount {
    const BRICK_WIDTH_MM: f64 = 71.5;
    let internal_diameter_mm = kiln.diameter_m * 1000.0 - 2.0 * econ.shell_thickness_mm;
    let bricks_per_ring =
        (std::f64::consts::PI * (internal_diameter_mm - econ.brick_height_mm) / BRICK_WIDTH_MM)
            .floor();
    BrickCount {
        bricks_per_ring,
        bricks_per_meter: bricks_per_ring * econ.rings_per_meter,
    }
}
