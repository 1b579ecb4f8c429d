use serde::{Deserialize, Serialize};

/// 풍속 단위. 내부 기준은 m/s이다. 풍속계(아네모미터)는 ft/min 표기가 흔하다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    KilometerPerHour,
    FootPerMinute,
}

/// 주어진 풍속을 m/s로 변환한다.
pub fn to_meter_per_second(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::KilometerPerHour => value / 3.6,
        VelocityUnit::FootPerMinute => value * 0.3048 / 60.0,
    }
}

fn from_meter_per_second(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::KilometerPerHour => value * 3.6,
        VelocityUnit::FootPerMinute => value * 60.0 / 0.3048,
    }
}

/// 풍속을 서로 다른 단위로 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    let base = to_meter_per_second(value, from);
    from_meter_per_second(base, to)
}
