//! ステップ文字列からの所要時間抽出

use std::sync::LazyLock;

use regex::Regex;

/// `(34)` / `(23.678)` の形の括弧付き数値
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+(?:\.\d+)?)\)").expect("invalid DURATION_RE pattern"));

/// `r1(3.5):b1-r3(5.0):b3` のようなステップから `[3.5, 5.0]` を返す。
///
/// 出現順に並ぶ。括弧の中身が数値として読めないもの（`(x)`, `(1.)` など）や
/// 括弧外のテキストは無視する。一致が無ければ空。
pub fn extract_durations(step: &str) -> Vec<f64> {
    DURATION_RE
        .captures_iter(step)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// ステップの所要時間（同期ステップなので各ロボットの最大値）。数値が無ければ 0。
pub(crate) fn step_duration(step: &str) -> f64 {
    extract_durations(step).into_iter().fold(0.0, f64::max)
}
