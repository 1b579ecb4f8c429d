use crate::config::{Config, ConfigError};
use crate::kiln::heat_loss::{compute_loss, LossResult, Measurement, MeasurementError};
use crate::stats::outlier::{detect, OutlierDirection, OutlierReport, StatsError};

/// 보고 계층에 넘기는 읽기 전용 행. (측정점, 손실 성분, 이상치 여부)
#[derive(Debug, Clone)]
pub struct SurveyRow {
    pub location_id: String,
    pub surface_temp_k: f64,
    pub radiation_w: f64,
    pub convection_w: f64,
    pub total_w: f64,
    pub is_outlier: bool,
}

/// 한 배치 측량의 전체 결과.
#[derive(Debug, Clone)]
pub struct SurveyResult {
    /// 유효 측정점의 행 (입력 순서 유지)
    pub rows: Vec<SurveyRow>,
    pub report: OutlierReport,
    /// 배치 총손실 [W]
    pub total_w: f64,
    /// 클링커 kg당 총손실 [Wh/kg]. 설정에 생산량이 있을 때만 계산한다.
    /// (W ÷ kg/h = Wh/kg)
    pub specific_total_wh_per_kg: Option<f64>,
    /// 상방 이상치(쉘 손상 후보)의 `rows` 인덱스
    pub high_outliers: Vec<usize>,
    /// 하방 이상치(코팅 형성 후보)의 `rows` 인덱스
    pub low_outliers: Vec<usize>,
    /// 검증에 실패해 배치에서 제외된 측정값들. 처리 여부는 호출자가 결정한다.
    pub skipped: Vec<MeasurementError>,
}

/// 측량 파이프라인 오류.
#[derive(Debug)]
pub enum SurveyError {
    /// 계산 시작 전 설정 검증 실패
    Config(ConfigError),
    /// 유효 측정점이 이상치 판정 최소 표본에 못 미침
    Stats(StatsError),
}

impl std::fmt::Display for SurveyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurveyError::Config(e) => write!(f, "설정 오류: {e}"),
            SurveyError::Stats(e) => write!(f, "이상치 판정 오류: {e}"),
        }
    }
}

impl std::error::Error for SurveyError {}

impl From<ConfigError> for SurveyError {
    fn from(value: ConfigError) -> Self {
        SurveyError::Config(value)
    }
}

impl From<StatsError> for SurveyError {
    fn from(value: StatsError) -> Self {
        SurveyError::Stats(value)
    }
}

/// 측정 배치 전체를 분석한다: 지점별 열손실 → 배치 IQR 이상치 → 주석 행.
///
/// 각 지점 계산은 독립이라 순서에 영향을 받지 않는다. 검증에 실패한 측정값은
/// 그 지점만 제외하고 `skipped`에 모은다. 이상치 판정은 남은 전체 배치
/// 하나로만 수행하며 부분 보고서를 만들지 않는다.
pub fn run_survey(measurements: &[Measurement], cfg: &Config) -> Result<SurveyResult, SurveyError> {
    cfg.validate()?;

    let mut losses: Vec<LossResult> = Vec::with_capacity(measurements.len());
    let mut kept: Vec<&Measurement> = Vec::with_capacity(measurements.len());
    let mut skipped = Vec::new();
    for m in measurements {
        match compute_loss(m, cfg) {
            Ok(loss) => {
                losses.push(loss);
                kept.push(m);
            }
            Err(e) => skipped.push(e),
        }
    }

    let totals: Vec<f64> = losses.iter().map(|l| l.total_w).collect();
    let report = detect(&totals, cfg.outlier_k)?;

    let mut rows = Vec::with_capacity(losses.len());
    let mut high_outliers = Vec::new();
    let mut low_outliers = Vec::new();
    for (i, (loss, m)) in losses.iter().zip(&kept).enumerate() {
        match report.classify(loss.total_w) {
            Some(OutlierDirection::High) => high_outliers.push(i),
            Some(OutlierDirection::Low) => low_outliers.push(i),
            None => {}
        }
        rows.push(SurveyRow {
            location_id: loss.location_id.clone(),
            surface_temp_k: m.surface_temp_k,
            radiation_w: loss.radiation_w,
            convection_w: loss.convection_w,
            total_w: loss.total_w,
            is_outlier: report.is_outlier[i],
        });
    }

    let total_w: f64 = rows.iter().map(|r| r.total_w).sum();
    let specific_total_wh_per_kg = cfg
        .clinker_production_kg_per_h
        .map(|production| total_w / production);
    Ok(SurveyResult {
        rows,
        report,
        total_w,
        specific_total_wh_per_kg,
        high_outliers,
        low_outliers,
        skipped,
    })
}

/// 보수 시뮬레이션 결과. 상방 이상치 지점의 표면 온도를 정상 지점 중앙값으로
/// 치환해 다시 계산한 가상의 "보수 후" 상태.
#[derive(Debug, Clone)]
pub struct RepairEstimate {
    /// 치환에 사용한 표면 온도 중앙값 [K]
    pub median_surface_temp_k: f64,
    /// 보수 전 배치 총손실 [W]
    pub total_before_w: f64,
    /// 보수 후 배치 총손실 [W]
    pub total_after_w: f64,
    /// 절감 전력 [W]
    pub saved_w: f64,
    /// 손상 구간 길이 [m] (상방 이상치 수 × 측정 간격)
    pub damaged_length_m: f64,
}

fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

/// 상방 이상치를 보수했다고 가정하고 절감량을 추정한다.
///
/// 상방 이상치가 없으면 `None`. 치환 후 재계산은 해당 지점의 표면 온도만
/// 바꾼 원본 측정값으로 동일한 계산식을 다시 돌린다.
pub fn simulate_repairs(
    measurements: &[Measurement],
    survey: &SurveyResult,
    cfg: &Config,
) -> Result<Option<RepairEstimate>, MeasurementError> {
    if survey.high_outliers.is_empty() {
        return Ok(None);
    }

    let normal_temps: Vec<f64> = survey
        .rows
        .iter()
        .filter(|r| !r.is_outlier)
        .map(|r| r.surface_temp_k)
        .collect();
    if normal_temps.is_empty() {
        return Ok(None);
    }
    let median_temp = median(normal_temps);

    // skipped 측정이 있으면 rows와 measurements의 인덱스가 어긋나므로
    // 행과 같은 순서로 유효 측정만 다시 추려 쓴다.
    let kept: Vec<&Measurement> = measurements
        .iter()
        .filter(|m| compute_loss(m, cfg).is_ok())
        .collect();

    let mut total_after = 0.0;
    for (i, row) in survey.rows.iter().enumerate() {
        if survey.high_outliers.contains(&i) {
            let mut repaired = kept[i].clone();
            repaired.surface_temp_k = median_temp;
            total_after += compute_loss(&repaired, cfg)?.total_w;
        } else {
            total_after += row.total_w;
        }
    }

    Ok(Some(RepairEstimate {
        median_surface_temp_k: median_temp,
        total_before_w: survey.total_w,
        total_after_w: total_after,
        saved_w: survey.total_w - total_after,
        damaged_length_m: survey.high_outliers.len() as f64 * cfg.kiln.interval_m,
    }))
}
