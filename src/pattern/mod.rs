pub mod calendar;
pub mod matrix;
pub mod schedule;

pub use calendar::{
    compute_optimal_anchor, date_range, next_anchor_weekday, normalize_to_anchor_weekday,
    ANCHOR_WEEKDAY,
};
pub use matrix::{build_matrix, WordMatrix, MAX_COLUMNS, SEPARATOR_WIDTH};
pub use schedule::{plan, CommitDescriptor, Intensity, Plan};
