use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::kiln::geometry;
use crate::kiln::heat_loss::Measurement;
use crate::units::{to_kelvin, to_meter_per_second};

/// 측정 파일 파싱 오류.
#[derive(Debug)]
pub enum IngestError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 숫자 해석 실패 등 형식 오류 (1부터 세는 행 번호 포함)
    Parse { line: usize, reason: String },
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            IngestError::Parse { line, reason } => {
                write!(f, "측정 파일 {line}행 파싱 오류: {reason}")
            }
        }
    }
}

impl std::error::Error for IngestError {}

impl From<std::io::Error> for IngestError {
    fn from(value: std::io::Error) -> Self {
        IngestError::Io(value)
    }
}

/// 한 행의 온도 판독값(여러 열 허용)을 평균한다.
fn parse_row(line: usize, text: &str) -> Result<f64, IngestError> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for token in text.split([',', ';', '\t']) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value: f64 = token.parse().map_err(|_| IngestError::Parse {
            line,
            reason: format!("숫자가 아닌 값: {token:?}"),
        })?;
        sum += value;
        count += 1;
    }
    if count == 0 {
        return Err(IngestError::Parse {
            line,
            reason: "온도 값이 없는 행".to_string(),
        });
    }
    Ok(sum / count as f64)
}

/// 표면 온도 측정 파일을 읽어 측정 레코드 배치를 만든다.
///
/// 각 비어 있지 않은 행이 한 측정점이다. 같은 행의 여러 열은 같은 지점을
/// 여러 번 읽은 값으로 보고 평균한다. 측정 위치는 킬른 배출구에서부터
/// 설정된 간격으로 자동 생성한다 (첫 행 = interval, 둘째 행 = 2×interval …).
/// 온도/풍속은 설정된 입력 단위에서 켈빈/m·s⁻¹로 정규화한다.
pub fn read_readings_file(
    path: &Path,
    ambient_temp: f64,
    wind_velocity: f64,
    cfg: &Config,
) -> Result<Vec<Measurement>, IngestError> {
    let content = fs::read_to_string(path)?;
    parse_readings(&content, ambient_temp, wind_velocity, cfg)
}

/// `read_readings_file`의 본체. 문자열 입력이라 테스트가 쉽다.
pub fn parse_readings(
    content: &str,
    ambient_temp: f64,
    wind_velocity: f64,
    cfg: &Config,
) -> Result<Vec<Measurement>, IngestError> {
    let ambient_temp_k = to_kelvin(ambient_temp, cfg.input_temperature_unit);
    let wind_m_per_s = to_meter_per_second(wind_velocity, cfg.input_velocity_unit);
    let area = geometry::section_area_m2(&cfg.kiln);

    let mut measurements = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let avg = parse_row(idx + 1, text)?;
        let position_m = cfg.kiln.interval_m * (measurements.len() + 1) as f64;
        measurements.push(Measurement {
            location_id: format!("{position_m}m"),
            surface_temp_k: to_kelvin(avg, cfg.input_temperature_unit),
            ambient_temp_k,
            wind_velocity_m_per_s: wind_m_per_s,
            surface_area_m2: Some(area),
        });
    }
    Ok(measurements)
}
