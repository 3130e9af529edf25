mod config;
mod error;
mod expand;
mod month_end;
mod requests;
mod series;
mod types;

pub use config::{EngineConfig, DEFAULT_HORIZON};
pub use error::{RecurrenceError, Result};
pub use expand::{expand, expand_with, occurrence_dates, Occurrences};
pub use month_end::{adjust_day, adjusted_date, is_end_of_month, last_day_of_month};
pub use requests::{BatchCreateRequest, BatchDeleteRequest};
pub use series::{assign_repeat_id, filter_by_repeat_id, prepare_series, RecurringSeries};
pub use types::{EventForm, RecurrenceRule, RecurrenceType, Recurring};
