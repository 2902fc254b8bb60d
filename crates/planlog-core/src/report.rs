//! 全計画の集計とテキストレコードへの整形

use log::{debug, warn};
use serde::Serialize;

use crate::error::{PlanLogError, PlanLogResult};
use crate::metrics::PlanMetrics;
use crate::split::split_log;

/// レコード末尾の区切り線
pub const RECORD_RULE: &str = "----------------------------------------";

/// レコードの `minSteps:` ブロックに何を出すか
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// 従来互換。`minPlan:` と `minSteps:` の両方に最短時間の計画を出す
    #[default]
    Legacy,
    /// `minSteps:` に最少ステップの計画を出す
    Corrected,
}

/// ログ全体の集計結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub plan_count: usize,
    pub min_time: f64,
    pub max_time: f64,
    pub mean_time: f64,
    pub min_steps: usize,
    pub max_steps: usize,
    pub min_moves: usize,
    pub max_moves: usize,
    pub min_time_plan: String,
    pub max_time_plan: String,
    pub min_steps_plan: String,
    pub max_steps_plan: String,
    pub min_moves_plan: String,
    pub max_moves_plan: String,
}

impl Report {
    /// 1件目の計画で全ての極値を初期化する
    fn first(plan: &str, m: PlanMetrics) -> Self {
        Report {
            plan_count: 1,
            min_time: m.total_time,
            max_time: m.total_time,
            mean_time: m.total_time,
            min_steps: m.steps,
            max_steps: m.steps,
            min_moves: m.moves,
            max_moves: m.moves,
            min_time_plan: plan.to_owned(),
            max_time_plan: plan.to_owned(),
            min_steps_plan: plan.to_owned(),
            max_steps_plan: plan.to_owned(),
            min_moves_plan: plan.to_owned(),
            max_moves_plan: plan.to_owned(),
        }
    }

    /// 厳密な大小でのみ更新する（同値なら先に現れた計画が残る）
    fn update(&mut self, plan: &str, m: PlanMetrics) {
        self.plan_count += 1;
        if m.total_time < self.min_time {
            self.min_time = m.total_time;
            self.min_time_plan = plan.to_owned();
        }
        if m.total_time > self.max_time {
            self.max_time = m.total_time;
            self.max_time_plan = plan.to_owned();
        }
        if m.steps < self.min_steps {
            self.min_steps = m.steps;
            self.min_steps_plan = plan.to_owned();
        }
        if m.steps > self.max_steps {
            self.max_steps = m.steps;
            self.max_steps_plan = plan.to_owned();
        }
        if m.moves < self.min_moves {
            self.min_moves = m.moves;
            self.min_moves_plan = plan.to_owned();
        }
        if m.moves > self.max_moves {
            self.max_moves = m.moves;
            self.max_moves_plan = plan.to_owned();
        }
    }

    /// 追記用のテキストレコードを返す
    pub fn render(&self, layout: Layout) -> String {
        let steps_plan = match layout {
            Layout::Legacy => &self.min_time_plan,
            Layout::Corrected => &self.min_steps_plan,
        };
        format!(
            "min time:      {}\n\
             max time:      {}\n\
             mean time:     {}\n\
             minSteps:      {}\n\
             maxSteps:      {}\n\
             minRobotMoves: {}\n\
             maxRobotMoves: {}\n\
             minPlan:  \n{}\n\
             minSteps: \n{}\n\
             minRobotMovesP: \n{}\n\
             {}\n",
            fmt_time(self.min_time),
            fmt_time(self.max_time),
            fmt_time(self.mean_time),
            self.min_steps,
            self.max_steps,
            self.min_moves,
            self.max_moves,
            self.min_time_plan,
            steps_plan,
            self.min_moves_plan,
            RECORD_RULE,
        )
    }
}

/// 時間は常に小数点付きで出す（`8` ではなく `8.0`）
fn fmt_time(value: f64) -> String {
    format!("{value:?}")
}

/// 計画を1件ずつ受け取り、極値と時間の合計だけを保持する集計器
#[derive(Debug, Default)]
pub struct Aggregator {
    report: Option<Report>,
    time_sum: f64,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 計画を1件追加する
    pub fn push(&mut self, plan: &str) {
        let m = PlanMetrics::of(plan);
        debug!("plan #{}: time={} steps={} moves={}", self.len() + 1, m.total_time, m.steps, m.moves);
        self.time_sum += m.total_time;
        match self.report.as_mut() {
            Some(report) => report.update(plan, m),
            None => self.report = Some(Report::first(plan, m)),
        }
    }

    /// これまでに追加した計画数
    pub fn len(&self) -> usize {
        self.report.as_ref().map_or(0, |r| r.plan_count)
    }

    pub fn is_empty(&self) -> bool {
        self.report.is_none()
    }

    /// 平均を確定させてレポートを返す。計画が1件も無ければ `EmptyLog`
    ///
    /// 丸め誤差で平均が `[min_time, max_time]` の外に出ないよう範囲内に収める。
    pub fn finish(self) -> PlanLogResult<Report> {
        let mut report = self.report.ok_or(PlanLogError::EmptyLog)?;
        let mean = self.time_sum / report.plan_count as f64;
        report.mean_time = mean.clamp(report.min_time, report.max_time);
        Ok(report)
    }
}

/// ログ全体を集計する。
///
/// ファイル末尾の改行は最後の計画に含めない。
/// 空白だけの計画（末尾の余分な空行など）は読み飛ばす。
pub fn post_process(text: &str) -> PlanLogResult<Report> {
    let mut agg = Aggregator::new();
    let mut skipped = 0usize;
    for plan in split_log(text.trim_end_matches('\n')) {
        if plan.trim().is_empty() {
            skipped += 1;
            continue;
        }
        agg.push(plan);
    }
    if skipped > 0 {
        warn!("skipped {skipped} empty plan segment(s)");
    }
    agg.finish()
}
