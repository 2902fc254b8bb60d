//! 代表計画（best plan）を選ぶための順序付け
//!
//! どの基準でも同値なら先に現れた計画を優先する。

use std::cmp::Ordering;

use crate::metrics::{step_count, total_time};

/// 代表計画の選択基準
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// 総実行時間が短いほど良い
    Time,
    /// ステップ数が少ないほど良い
    Steps,
}

impl Criterion {
    /// `a` が `b` より良ければ `Less`
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Criterion::Time => total_time(a).total_cmp(&total_time(b)),
            Criterion::Steps => step_count(a).cmp(&step_count(b)),
        }
    }
}

/// 計画列の中で `criterion` について最良のものを返す。同値なら先頭側。
pub fn best_plan<'a, I>(plans: I, criterion: Criterion) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    // min_by は同値のとき最初の要素を返す
    plans.into_iter().min_by(|a, b| criterion.compare(a, b))
}

/// 実行時間についての "best so far" 畳み込み。
///
/// `current_best` が空文字列なら未初期化とみなして `candidate` を返す。
/// それ以外は `candidate` が厳密に短い場合のみ置き換える。
pub fn select_best<'a>(current_best: &'a str, candidate: &'a str) -> &'a str {
    if current_best.is_empty() || total_time(candidate) < total_time(current_best) {
        candidate
    } else {
        current_best
    }
}

/// ステップ数についての "best so far" 畳み込み。
///
/// 実際の計画は必ず 1 ステップ以上あるので、ステップ数 0
/// （= 空の `current_best`）を未初期化の番兵として扱う。
pub fn select_fewest_steps<'a>(current_best: &'a str, candidate: &'a str) -> &'a str {
    let current_steps = if current_best.is_empty() { 0 } else { step_count(current_best) };
    if current_steps == 0 || step_count(candidate) < current_steps {
        candidate
    } else {
        current_best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_best_empty_sentinel() {
        assert_eq!(select_best("", "r1(9):a"), "r1(9):a");
    }

    #[test]
    fn test_select_best_prefers_strictly_shorter() {
        assert_eq!(select_best("r1(5):a", "r1(3):b"), "r1(3):b");
        assert_eq!(select_best("r1(3):a", "r1(5):b"), "r1(3):a");
        assert_eq!(select_best("r1(5):a", "r1(5):b"), "r1(5):a");
    }

    #[test]
    fn test_select_best_fold() {
        let plans = ["r1(4):a", "r1(2):b\nr2(1):c", "r1(3):d", "r1(3):e"];
        let best = plans.iter().fold("", |acc, p| select_best(acc, p));
        assert_eq!(best, "r1(3):d");
    }

    #[test]
    fn test_select_fewest_steps() {
        assert_eq!(select_fewest_steps("", "r1(1):a\nr2(1):b"), "r1(1):a\nr2(1):b");
        assert_eq!(select_fewest_steps("r1(1):a\nr2(1):b", "r1(9):c"), "r1(9):c");
        assert_eq!(select_fewest_steps("r1(1):a", "r1(9):c"), "r1(1):a");
    }

    #[test]
    fn test_best_plan_ties_keep_earliest() {
        let plans = ["r1(5):a", "r1(5):b"];
        assert_eq!(best_plan(plans, Criterion::Time), Some("r1(5):a"));

        let plans = ["r1(1):a", "r1(1):a-r2(1):b", "r1(1):a\nr2(1):b\nr3(1):c"];
        assert_eq!(best_plan(plans, Criterion::Steps), Some("r1(1):a"));
    }

    #[test]
    fn test_best_plan_by_time() {
        let plans = ["r1(3):a-r2(7):b", "r1(2):a", "r1(1):a\nr1(1.5):b"];
        assert_eq!(best_plan(plans, Criterion::Time), Some("r1(2):a"));
        assert_eq!(best_plan(std::iter::empty::<&str>(), Criterion::Time), None);
    }
}
