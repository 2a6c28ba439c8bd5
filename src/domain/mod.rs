//! Domain layer: race records, results and the statistics derived from
//! them.
//!
//! Every derivation in here is a synchronous pure function over data the
//! upstream layer has already fetched.

pub mod finish_order;
pub mod history;
pub mod ids;
pub mod prediction;
pub mod race;
pub mod race_calendar;
pub mod race_result;
pub mod recent_form;
pub mod result_filter;
pub mod statistics;
pub mod timestamp;

pub use finish_order::FinishOrder;
pub use history::{HistoryEntry, history};
pub use ids::{RaceId, ResultId};
pub use prediction::Prediction;
pub use race::{Entry, Horse, Race};
pub use race_calendar::{CardEntry, DailyCard, RaceDay, daily_card, group_by_day};
pub use race_result::{RaceResult, ResultSubmission};
pub use recent_form::{RecentForm, RecentOutcome, recent_form};
pub use result_filter::ResultFilter;
pub use statistics::{OutcomeMark, ResultsOverview, StatisticsSummary, overview, summarize};
