//! 計画1件あたりの指標（実行時間・ステップ数・ロボット移動数）

use serde::Serialize;

use crate::durations::step_duration;

/// ステップ区切り
pub const STEP_SEPARATOR: char = '\n';
/// アクション1件に1つだけ現れる区切り（`robot(t):label` の `:`）
pub const MOVE_MARKER: char = ':';

/// 計画の総実行時間。
///
/// 各行（ステップ）は複数ロボットの同期動作なので、ステップの時間は
/// その中の最大値とし、全ステップで合計する。
/// `r2(3):b1\nr1(3):b2-r3(5):b3` なら 3 + 5 = 8。
/// 所要時間を含まないステップは 0 として扱う。
pub fn total_time(plan: &str) -> f64 {
    plan.split(STEP_SEPARATOR).map(step_duration).sum()
}

/// ステップ数（改行で分割したセグメント数。空文字列でも 1）
pub fn step_count(plan: &str) -> usize {
    plan.split(STEP_SEPARATOR).count()
}

/// ロボット移動数（`:` の出現数）
pub fn move_count(plan: &str) -> usize {
    plan.chars().filter(|&c| c == MOVE_MARKER).count()
}

/// 1計画分の指標をまとめて計算した結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanMetrics {
    pub total_time: f64,
    pub steps: usize,
    pub moves: usize,
}

impl PlanMetrics {
    /// 3指標を一度に計算する
    pub fn of(plan: &str) -> Self {
        PlanMetrics {
            total_time: total_time(plan),
            steps: step_count(plan),
            moves: move_count(plan),
        }
    }
}
