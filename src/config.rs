use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::units::{TemperatureUnit, VelocityUnit};

/// 슈테판-볼츠만 상수 기본값 [W/m²K⁴].
pub const STEFAN_BOLTZMANN_W_PER_M2_K4: f64 = 5.670374e-8;

/// 강제 대류 열전달계수 경험식 `h = a + b·v^c`의 계수.
///
/// 기본값은 Jürges 평판 풍속 상관식(h = 5.7 + 3.8·v, W/m²K)이며,
/// 현장 킬른 형상에 맞춰 보정한 값을 config.toml에 넣어 쓴다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConvectionFit {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for ConvectionFit {
    fn default() -> Self {
        Self {
            a: 5.7,
            b: 3.8,
            c: 1.0,
        }
    }
}

/// 킬른 형상 기본값. 측정 간격과 직경으로 구간 면적을 산출한다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KilnDefaults {
    /// 쉘 외경 [m]
    pub diameter_m: f64,
    /// 연속 측정점 간 거리 [m]
    pub interval_m: f64,
}

impl Default for KilnDefaults {
    fn default() -> Self {
        Self {
            diameter_m: 4.75,
            interval_m: 1.0,
        }
    }
}

/// 보수 경제성 계산 상수. 현장 단가에 맞춰 조정한다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EconomicsConfig {
    /// 연간 가동일수 [일]
    pub working_days_per_year: f64,
    /// 석탄 발열량 [kcal/kg]
    pub coal_calorific_kcal_per_kg: f64,
    /// 석탄 단가 [원/ton]
    pub coal_cost_per_ton: f64,
    /// 내화 벽돌 단가 [원/장]
    pub brick_cost: f64,
    /// 벽돌 높이 [mm]
    pub brick_height_mm: f64,
    /// 미터당 벽돌 링 수
    pub rings_per_meter: f64,
    /// 쉘 두께 [mm]
    pub shell_thickness_mm: f64,
}

impl Default for EconomicsConfig {
    fn default() -> Self {
        Self {
            working_days_per_year: 330.0,
            coal_calorific_kcal_per_kg: 4500.0,
            coal_cost_per_ton: 4500.0,
            brick_cost: 100.0,
            brick_height_mm: 220.0,
            rings_per_meter: 5.0,
            shell_thickness_mm: 16.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다. 두 계산 단계(열손실/이상치)가 모두 이 값만 참조한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 쉘 표면 방사율 (0~1]. 산화 강판 기준 0.8.
    pub emissivity: f64,
    /// 슈테판-볼츠만 상수 [W/m²K⁴]
    pub stefan_boltzmann_w_per_m2_k4: f64,
    /// 대류 경험식 계수
    pub convection: ConvectionFit,
    /// 측정점에 면적이 지정되지 않았을 때 쓰는 기본 면적 [m²]
    pub default_surface_area_m2: f64,
    /// IQR 이상치 배율 k. 1.5가 통상값, 3.0은 극단 이상치 모드.
    pub outlier_k: f64,
    /// 클링커 생산량 [kg/h]. 지정하면 총손실을 클링커 kg당 손실로도 보고한다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinker_production_kg_per_h: Option<f64>,
    /// 입력 온도 단위 (유입 경계에서 켈빈으로 정규화)
    pub input_temperature_unit: TemperatureUnit,
    /// 입력 풍속 단위 (유입 경계에서 m/s로 정규화)
    pub input_velocity_unit: VelocityUnit,
    pub kiln: KilnDefaults,
    pub economics: EconomicsConfig,
}

impl Default for Config {
    fn default() -> Self {
        let kiln = KilnDefaults::default();
        Self {
            emissivity: 0.8,
            stefan_boltzmann_w_per_m2_k4: STEFAN_BOLTZMANN_W_PER_M2_K4,
            convection: ConvectionFit::default(),
            default_surface_area_m2: std::f64::consts::PI * kiln.diameter_m * kiln.interval_m,
            outlier_k: 1.5,
            clinker_production_kg_per_h: None,
            input_temperature_unit: TemperatureUnit::Celsius,
            input_velocity_unit: VelocityUnit::MeterPerSecond,
            kiln,
            economics: EconomicsConfig::default(),
        }
    }
}

/// 설정 로드/저장/검증 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// 물리적으로 유효하지 않은 설정 값
    Invalid { field: &'static str, value: f64 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
            ConfigError::Invalid { field, value } => {
                write!(f, "설정 값이 유효하지 않습니다: {field} = {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    let cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        cfg
    };
    cfg.validate()?;
    Ok(cfg)
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

fn require(ok: bool, field: &'static str, value: f64) -> Result<(), ConfigError> {
    if ok && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, value })
    }
}

/// 대화형 설정 메뉴에서 변경할 수 있는 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    Emissivity,
    OutlierK,
    KilnDiameter,
    KilnInterval,
    ClinkerProduction,
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }

    /// 설정 항목 하나를 검증과 함께 변경한다.
    ///
    /// 변경 결과가 유효하지 않으면 원래 값으로 되돌리고 오류를 반환하므로,
    /// 이 함수를 거친 설정은 항상 저장 가능한 상태다.
    pub fn apply_setting(&mut self, field: SettingField, value: f64) -> Result<(), ConfigError> {
        let previous = self.clone();
        match field {
            SettingField::Emissivity => self.emissivity = value,
            SettingField::OutlierK => self.outlier_k = value,
            SettingField::KilnDiameter => self.kiln.diameter_m = value,
            SettingField::KilnInterval => self.kiln.interval_m = value,
            SettingField::ClinkerProduction => {
                self.clinker_production_kg_per_h = if value > 0.0 { Some(value) } else { None }
            }
        }
        if let Err(e) = self.validate() {
            *self = previous;
            return Err(e);
        }
        Ok(())
    }

    /// 계산 시작 전에 호출해 비물리적 상수를 조기에 걸러낸다.
    ///
    /// 대류 경험식은 임의의 v ≥ 0에서 h > 0이어야 하므로 a > 0, b ≥ 0, c > 0을 요구한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require(
            self.emissivity > 0.0 && self.emissivity <= 1.0,
            "emissivity",
            self.emissivity,
        )?;
        require(
            self.stefan_boltzmann_w_per_m2_k4 > 0.0,
            "stefan_boltzmann_w_per_m2_k4",
            self.stefan_boltzmann_w_per_m2_k4,
        )?;
        require(self.convection.a > 0.0, "convection.a", self.convection.a)?;
        require(self.convection.b >= 0.0, "convection.b", self.convection.b)?;
        require(self.convection.c > 0.0, "convection.c", self.convection.c)?;
        require(
            self.default_surface_area_m2 > 0.0,
            "default_surface_area_m2",
            self.default_surface_area_m2,
        )?;
        require(self.outlier_k > 0.0, "outlier_k", self.outlier_k)?;
        if let Some(production) = self.clinker_production_kg_per_h {
            require(production > 0.0, "clinker_production_kg_per_h", production)?;
        }
        require(self.kiln.diameter_m > 0.0, "kiln.diameter_m", self.kiln.diameter_m)?;
        require(self.kiln.interval_m > 0.0, "kiln.interval_m", self.kiln.interval_m)?;
        Ok(())
    }
}
