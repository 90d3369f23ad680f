//! 등온변태(TTT) 곡선, 냉각 경로, 그리고 두 곡선의 겹쳐보기용 병합.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::process::QuenchMedium;
use crate::tables::ReferenceTables;

const TTT_START_C: f64 = 720.0;
const TTT_END_C: f64 = 150.0;
const TTT_STEP_C: f64 = 20.0;
const TTT_MAX_TIME_S: f64 = 10_000.0;

const AUSTENITIZE_C: f64 = 900.0;
const AMBIENT_C: f64 = 25.0;
const COOLING_STOP_C: f64 = 30.0;
const COOLING_START_S: f64 = 0.1;
const COOLING_GROWTH: f64 = 1.25;
const COOLING_MAX_S: f64 = 200.0;

/// 곡선 위의 한 점 (온도 °C, 경과 시간 s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub temperature_c: f64,
    pub time_s: f64,
}

/// TTT 곡선. `points`는 고온부터 저온 순서.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TttCurve {
    pub nose_time_s: f64,
    pub nose_temperature_c: f64,
    pub points: Vec<CurvePoint>,
}

/// CE로 TTT 곡선의 코(nose)를 잡고 720 °C부터 20 °C 간격으로 변태 개시 시간을 계산한다.
///
/// t = t_nose · exp(0.01·Δ²/t_nose), Δ = T − T_nose, 최대 10 000 s.
pub fn ttt_curve(carbon_equivalent: f64) -> TttCurve {
    let nose_time_s = 1.0 + carbon_equivalent * 50.0;
    let nose_temperature_c = 550.0 - carbon_equivalent * 30.0;

    let mut points = Vec::new();
    let mut step = 0u32;
    loop {
        // 누적 오차가 생기지 않도록 정수 스텝으로 온도를 만든다
        let temperature_c = TTT_START_C - TTT_STEP_C * f64::from(step);
        if temperature_c < TTT_END_C {
            break;
        }
        let delta = temperature_c - nose_temperature_c;
        let time_s =
            (nose_time_s * (0.01 * delta * delta / nose_time_s).exp()).min(TTT_MAX_TIME_S);
        points.push(CurvePoint {
            temperature_c,
            time_s,
        });
        step += 1;
    }

    TttCurve {
        nose_time_s,
        nose_temperature_c,
        points,
    }
}

/// 900 °C에서 매체별 일정 냉각속도로 식는 경로를 기하급수 시간축으로 샘플링한다.
///
/// 0.1 s부터 1.25배씩 늘리며, 200 s를 넘거나 온도가 30 °C 이하가 된 점(포함)에서 멈춘다.
pub fn cooling_path(medium: QuenchMedium, tables: &ReferenceTables) -> Vec<CurvePoint> {
    let rate = tables.quench_profile(medium).cooling_rate_c_per_s;
    let mut points = Vec::new();
    let mut time_s = COOLING_START_S;
    while time_s <= COOLING_MAX_S {
        let temperature_c = (AUSTENITIZE_C - rate * time_s).max(AMBIENT_C);
        points.push(CurvePoint {
            temperature_c,
            time_s,
        });
        if temperature_c <= COOLING_STOP_C {
            break;
        }
        time_s *= COOLING_GROWTH;
    }
    points
}

/// 겹쳐보기용 병합 점. TTT 샘플 온도마다 하나씩 존재한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayPoint {
    pub temperature_c: f64,
    pub ttt_time_s: f64,
    /// 이 온도 구간에 처음 도달한 냉각 경로 시간
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooling_time_s: Option<f64>,
}

fn bucket_of(temperature_c: f64) -> i64 {
    ((temperature_c / TTT_STEP_C).round() * TTT_STEP_C) as i64
}

/// 냉각 경로를 20 °C 단위로 묶어 TTT 샘플 온도에 맞춘다.
///
/// TTT에 없는 온도 구간은 버리고, 같은 구간에 여러 점이 있으면 가장 먼저 도달한 시간을 쓴다.
/// 결과는 온도 내림차순.
pub fn merge_for_overlay(ttt: &TttCurve, cooling: &[CurvePoint]) -> Vec<OverlayPoint> {
    let mut first_arrival: BTreeMap<i64, f64> = BTreeMap::new();
    for p in cooling {
        first_arrival.entry(bucket_of(p.temperature_c)).or_insert(p.time_s);
    }

    let mut merged: Vec<OverlayPoint> = ttt
        .points
        .iter()
        .map(|p| OverlayPoint {
            temperature_c: p.temperature_c,
            ttt_time_s: p.time_s,
            cooling_time_s: first_arrival.get(&bucket_of(p.temperature_c)).copied(),
        })
        .collect();
    merged.sort_by(|a, b| b.temperature_c.total_cmp(&a.temperature_c));
    merged
}

/// 냉각 경로가 TTT 곡선을 가로지르는(확산 변태가 시작되는) 첫 온도 구간.
/// 교차가 없으면 마르텐사이트 변태까지 확산 변태를 피한 것으로 본다.
pub fn first_nose_crossing(overlay: &[OverlayPoint]) -> Option<OverlayPoint> {
    overlay
        .iter()
        .find(|p| p.cooling_time_s.is_some_and(|t| t >= p.ttt_time_s))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_round_to_nearest_twenty() {
        assert_eq!(bucket_of(709.9), 700);
        assert_eq!(bucket_of(710.0), 720);
        assert_eq!(bucket_of(25.0), 20);
        assert_eq!(bucket_of(900.0), 900);
    }
}
