//! 단위 정의 및 변환 모듈 모음. 코어 계산은 켈빈/m·s⁻¹ 기준으로만 동작하고,
//! 단위 변환은 측정값 유입 경계에서만 수행한다.

pub mod temperature;
pub mod velocity;

pub use temperature::{convert_temperature, to_kelvin, TemperatureUnit};
pub use velocity::{convert_velocity, to_meter_per_second, VelocityUnit};
