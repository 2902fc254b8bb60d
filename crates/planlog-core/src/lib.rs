//! マルチロボット動作計画シミュレータのログ（解の列）から性能指標を求めるコアライブラリ
//!
//! ログは空行区切りの計画（plan）の列で、各計画は改行区切りのステップ、
//! 各ステップは `-` 区切りのアクション `<robot>(<duration>):<label>` からなる。
//!
//! ```text
//! r4(5.2):g-r6(5.2):i
//! r7(3.5):d-r6(5.2):w3
//!
//! r6(3.5):h-r7(6):w3
//! ```
//!
//! I/O は持たない。入力テキストから [`Report`] を作り、
//! [`Report::render`] で追記用のテキストレコードに整形する。

pub mod compare;
pub mod durations;
pub mod error;
pub mod metrics;
pub mod report;
pub mod split;

pub use compare::{Criterion, best_plan, select_best, select_fewest_steps};
pub use durations::extract_durations;
pub use error::{PlanLogError, PlanLogResult};
pub use metrics::{PlanMetrics, move_count, step_count, total_time};
pub use report::{Aggregator, Layout, Report, post_process};
pub use split::split_log;
