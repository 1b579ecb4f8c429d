/// 사분위수 계산이 의미를 갖는 최소 표본 수.
pub const MIN_SAMPLES: usize = 4;

/// 이상치 판정 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// 사분위수를 계산하기엔 표본이 부족함
    InsufficientData { count: usize, min: usize },
    /// k가 0 이하이거나 유한하지 않음
    InvalidFence(f64),
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::InsufficientData { count, min } => {
                write!(f, "표본 {count}개로는 사분위수를 계산할 수 없습니다 (최소 {min}개)")
            }
            StatsError::InvalidFence(k) => write!(f, "이상치 배율 k = {k} 는 양수여야 합니다"),
        }
    }
}

impl std::error::Error for StatsError {}

/// 이상치 방향. 상방 이상치는 쉘 손상, 하방 이상치는 코팅 형성 후보다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlierDirection {
    Low,
    High,
}

/// 한 배치의 IQR 이상치 판정 결과. 배치가 바뀌면 전체를 다시 계산한다.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierReport {
    pub k: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// 입력 순서 그대로의 이상치 플래그
    pub is_outlier: Vec<bool>,
}

impl OutlierReport {
    /// 경계값과 엄격 부등호로 한 값을 판정한다. 경계에 정확히 걸린 값은 이상치가 아니다.
    pub fn classify(&self, value: f64) -> Option<OutlierDirection> {
        if value < self.lower_bound {
            Some(OutlierDirection::Low)
        } else if value > self.upper_bound {
            Some(OutlierDirection::High)
        } else {
            None
        }
    }
}

/// 오름차순 정렬된 표본에서 분위수 p(0~1)를 선형 보간으로 구한다.
///
/// 인덱스 = p·(n−1), 소수부는 이웃 순서통계량 사이를 보간한다
/// (pandas `Series.quantile` 기본 방식과 동일).
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let idx = p * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    let frac = idx - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// 총손실 값 배치에서 IQR 이상치를 판정한다.
///
/// Q1/Q3는 정렬 사본에서 구하고, 플래그는 입력 순서를 그대로 따른다.
/// IQR이 0인 조밀 군집에서는 경계가 상수로 붕괴하며, 그 상수와 다른 값은
/// 전부 이상치로 판정된다. 이는 오류가 아니라 의도된 동작이다.
pub fn detect(values: &[f64], k: f64) -> Result<OutlierReport, StatsError> {
    if !(k > 0.0 && k.is_finite()) {
        return Err(StatsError::InvalidFence(k));
    }
    if values.len() < MIN_SAMPLES {
        return Err(StatsError::InsufficientData {
            count: values.len(),
            min: MIN_SAMPLES,
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let q1 = quantile_sorted(&sorted, 0.25);
    let q3 = quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower_bound = q1 - k * iqr;
    let upper_bound = q3 + k * iqr;

    let is_outlier = values
        .iter()
        .map(|&v| v < lower_bound || v > upper_bound)
        .collect();

    Ok(OutlierReport {
        k,
        q1,
        q3,
        iqr,
        lower_bound,
        upper_bound,
        is_outlier,
    })
}
