use crate::config::Config;

/// 킬른 쉘 한 지점의 측정값. 유입 단계에서 단위 정규화를 마친 읽기 전용 레코드다.
#[derive(Debug, Clone)]
pub struct Measurement {
    /// 측정점 식별자 (예: "12m"). 배치 내에서 고유해야 한다.
    pub location_id: String,
    /// 쉘 표면 온도 [K]
    pub surface_temp_k: f64,
    /// 주변 공기 온도 [K]
    pub ambient_temp_k: f64,
    /// 쉘을 지나는 풍속 [m/s], 0 이상
    pub wind_velocity_m_per_s: f64,
    /// 이 지점에 귀속되는 방열 면적 [m²]. `None`이면 설정 기본값을 쓴다.
    pub surface_area_m2: Option<f64>,
}

/// 한 측정점의 열손실 계산 결과. 생성 후 변경하지 않는다.
#[derive(Debug, Clone)]
pub struct LossResult {
    pub location_id: String,
    /// 복사 열손실 [W]
    pub radiation_w: f64,
    /// 대류 열손실 [W]. 표면이 주변보다 차가우면 음수(열 유입)가 될 수 있다.
    pub convection_w: f64,
    /// 총 열손실 [W]. 항상 복사+대류의 합이다.
    pub total_w: f64,
}

/// 측정값 검증 오류. 어느 지점의 어느 필드가 문제인지 함께 전달한다.
#[derive(Debug, Clone)]
pub enum MeasurementError {
    /// 물리적으로 유효하지 않은 필드 값
    InvalidField {
        location_id: String,
        field: &'static str,
        value: f64,
    },
}

impl std::fmt::Display for MeasurementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementError::InvalidField {
                location_id,
                field,
                value,
            } => write!(
                f,
                "측정값 오류 ({location_id}): {field} = {value} 는 허용되지 않습니다"
            ),
        }
    }
}

impl std::error::Error for MeasurementError {}

fn check(
    ok: bool,
    location_id: &str,
    field: &'static str,
    value: f64,
) -> Result<(), MeasurementError> {
    if ok && value.is_finite() {
        Ok(())
    } else {
        Err(MeasurementError::InvalidField {
            location_id: location_id.to_string(),
            field,
            value,
        })
    }
}

/// 대류 열전달계수 h [W/m²K]를 경험식 `h = a + b·v^c`로 구한다.
pub fn convection_coefficient(cfg: &Config, wind_velocity_m_per_s: f64) -> f64 {
    let fit = &cfg.convection;
    fit.a + fit.b * wind_velocity_m_per_s.powf(fit.c)
}

/// 한 측정점의 복사/대류/총 열손실을 계산한다.
///
/// 복사: ε·σ·A·(Ts⁴ − Ta⁴) (슈테판-볼츠만).
/// 대류: h·A·(Ts − Ta), h는 풍속 경험식.
/// 표면이 주변보다 차가운 경우는 오류가 아니라 음의 손실(열 유입)로 계산한다.
/// 입력과 설정이 같으면 결과도 항상 같다(은닉 상태 없음).
pub fn compute_loss(m: &Measurement, cfg: &Config) -> Result<LossResult, MeasurementError> {
    check(m.surface_temp_k > 0.0, &m.location_id, "surface_temp_k", m.surface_temp_k)?;
    check(m.ambient_temp_k > 0.0, &m.location_id, "ambient_temp_k", m.ambient_temp_k)?;
    check(
        m.wind_velocity_m_per_s >= 0.0,
        &m.location_id,
        "wind_velocity_m_per_s",
        m.wind_velocity_m_per_s,
    )?;
    let area = m.surface_area_m2.unwrap_or(cfg.default_surface_area_m2);
    check(area > 0.0, &m.location_id, "surface_area_m2", area)?;

    let radiation_w = cfg.emissivity
        * cfg.stefan_boltzmann_w_per_m2_k4
        * area
        * (m.surface_temp_k.powi(4) - m.ambient_temp_k.powi(4));

    let h = convection_coefficient(cfg, m.wind_velocity_m_per_s);
    let convection_w = h * area * (m.surface_temp_k - m.ambient_temp_k);

    Ok(LossResult {
        location_id: m.location_id.clone(),
        radiation_w,
        convection_w,
        // 총손실은 항상 두 성분의 합으로만 만든다.
        total_w: radiation_w + convection_w,
    })
}
