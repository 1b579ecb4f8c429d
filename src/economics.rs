use crate::config::{Config, EconomicsConfig, KilnDefaults};
use crate::kiln::geometry;

/// 1 W = 0.859845 kcal/h. 석탄 발열량이 kcal 단위라 환산이 필요하다.
const KCAL_PER_H_PER_W: f64 = 0.859_845;

/// 보수 경제성 입력.
#[derive(Debug, Clone, Copy)]
pub struct RepairEconomicsInput {
    /// 보수로 절감되는 전력 [W]
    pub saved_w: f64,
    /// 손상 구간 길이 [m]
    pub damaged_length_m: f64,
}

/// 보수 경제성 결과.
#[derive(Debug, Clone)]
pub struct RepairEconomicsResult {
    /// 연간 절감 열량 [kcal/년]
    pub saved_kcal_per_year: f64,
    /// 연간 절감 석탄 [ton/년]
    pub coal_saved_ton_per_year: f64,
    /// 연간 연료비 절감액 [원/년]
    pub fuel_saving_per_year: f64,
    /// 교체 벽돌 수
    pub bricks_required: f64,
    /// 보수 비용 [원]
    pub repair_cost: f64,
    /// 첫해 순절감액 [원] (연료비 절감 − 보수 비용)
    pub net_saving_first_year: f64,
}

/// 절감 전력과 손상 길이로부터 연간 연료비 절감과 벽돌 보수 비용을 추정한다.
pub fn repair_economics(input: RepairEconomicsInput, cfg: &Config) -> RepairEconomicsResult {
    let econ: &EconomicsConfig = &cfg.economics;
    let kiln: &KilnDefaults = &cfg.kiln;

    let working_hours = econ.working_days_per_year * 24.0;
    let saved_kcal_per_year = input.saved_w * KCAL_PER_H_PER_W * working_hours;
    let coal_saved_ton_per_year =
        saved_kcal_per_year / econ.coal_calorific_kcal_per_kg / 1000.0;
    let fuel_saving_per_year = coal_saved_ton_per_year * econ.coal_cost_per_ton;

    let bricks = geometry::brick_count(kiln, econ);
    let bricks_required = bricks.bricks_per_meter * input.damaged_length_m;
    let repair_cost = bricks_required * econ.brick_cost;

    RepairEconomicsResult {
        saved_kcal_per_year,
        coal_saved_ton_per_year,
        fuel_saving_per_year,
        bricks_required,
        repair_cost,
        net_saving_first_year: fuel_saving_per_year - repair_cost,
    }
}
