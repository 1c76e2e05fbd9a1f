use crate::error::{GraphError, Result};
use crate::pattern::calendar::{date_range, is_anchor_weekday, normalize_to_anchor_weekday};
use crate::pattern::matrix::{WordMatrix, MAX_COLUMNS};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

/// Earliest hour a generated commit can land on.
pub const WORKDAY_START_HOUR: u32 = 9;
/// Last hour (inclusive) a generated commit can land on.
pub const WORKDAY_END_HOUR: u32 = 16;

/// How many commits back one lit pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    #[default]
    Medium,
    Dark,
    Random,
}

impl Intensity {
    /// Map a numeric level to an intensity. Unknown levels behave like level 2.
    pub fn from_level(level: i64) -> Self {
        match level {
            1 => Intensity::Light,
            2 => Intensity::Medium,
            3 => Intensity::Dark,
            4 => Intensity::Random,
            other => {
                warn!(level = other, "unknown intensity level, using medium");
                Intensity::Medium
            }
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Intensity::Light => 1,
            Intensity::Medium => 2,
            Intensity::Dark => 3,
            Intensity::Random => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Intensity::Light => "Light green (2-3 commits/day)",
            Intensity::Medium => "Medium green (4-7 commits/day)",
            Intensity::Dark => "Dark green (10-15 commits/day)",
            Intensity::Random => "Random mix (4-19 commits/day, natural look)",
        }
    }

    /// Commits for one lit pixel. Only `Light` is deterministic.
    pub fn draw_count<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        match self {
            Intensity::Light => 2,
            Intensity::Medium => {
                if rng.gen_bool(0.5) {
                    5
                } else {
                    6
                }
            }
            Intensity::Dark => {
                if rng.gen_bool(0.5) {
                    12
                } else {
                    15
                }
            }
            Intensity::Random => {
                let tier: f64 = rng.gen();
                if tier < 0.3 {
                    rng.gen_range(4..=6)
                } else if tier < 0.7 {
                    rng.gen_range(7..=10)
                } else {
                    rng.gen_range(12..=19)
                }
            }
        }
    }
}

/// One commit to create.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommitDescriptor {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub label: String,
}

impl CommitDescriptor {
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Timestamp in the form accepted by `git commit --date`.
    pub fn git_date(&self) -> String {
        self.timestamp().format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

/// Ordered commits for one word. Preview and execution both read this.
#[derive(Clone, Debug, Serialize)]
pub struct Plan {
    pub word: String,
    pub intensity: Intensity,
    pub requested_anchor: NaiveDate,
    pub anchor: NaiveDate,
    pub end_date: NaiveDate,
    pub weeks: usize,
    pub descriptors: Vec<CommitDescriptor>,
}

impl Plan {
    pub fn total(&self) -> usize {
        self.descriptors.len()
    }

    /// True when the requested anchor was not on the anchor weekday.
    pub fn was_autocorrected(&self) -> bool {
        self.requested_anchor != self.anchor
    }

    pub fn active_dates(&self) -> BTreeSet<NaiveDate> {
        self.descriptors.iter().map(|d| d.date).collect()
    }

    pub fn commits_per_day(&self) -> BTreeMap<NaiveDate, usize> {
        let mut per_day = BTreeMap::new();
        for d in &self.descriptors {
            *per_day.entry(d.date).or_insert(0) += 1;
        }
        per_day
    }

    /// Commits per cell laid back out as 7 rows by `weeks` columns.
    pub fn grid_counts(&self) -> Vec<Vec<usize>> {
        let per_day = self.commits_per_day();
        (0..7)
            .map(|row| {
                (0..self.weeks)
                    .map(|col| {
                        let date = self.anchor + Duration::days((col * 7 + row) as i64);
                        per_day.get(&date).copied().unwrap_or(0)
                    })
                    .collect()
            })
            .collect()
    }
}

fn random_workday_time<R: Rng + ?Sized>(rng: &mut R) -> NaiveTime {
    let hour = rng.gen_range(WORKDAY_START_HOUR..=WORKDAY_END_HOUR);
    let minute = rng.gen_range(0..60);
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Lay the matrix out on the calendar.
///
/// Column `c`, row `r` lands on `anchor + 7c + r` days, so the top row is the
/// anchor weekday itself. Columns are walked left to right and rows top to
/// bottom, which keeps the plan in calendar order.
pub fn plan<R: Rng + ?Sized>(
    matrix: &WordMatrix,
    anchor: NaiveDate,
    intensity: Intensity,
    rng: &mut R,
) -> Result<Plan> {
    if matrix.width() > MAX_COLUMNS {
        return Err(GraphError::WidthExceeded {
            required: matrix.width(),
            max: MAX_COLUMNS,
        });
    }

    let requested_anchor = anchor;
    let anchor = if is_anchor_weekday(anchor) {
        anchor
    } else {
        let corrected = normalize_to_anchor_weekday(anchor);
        info!(requested = %requested_anchor, corrected = %corrected, "anchor moved back to Sunday");
        corrected
    };

    let mut descriptors = Vec::new();
    for col in 0..matrix.width() {
        for row in 0..matrix.height() {
            if !matrix.is_set(row, col) {
                continue;
            }
            let date = anchor + Duration::days((col * 7 + row) as i64);
            let count = intensity.draw_count(rng);
            for i in 0..count {
                descriptors.push(CommitDescriptor {
                    date,
                    time: random_workday_time(rng),
                    label: format!("Contribution for {} #{}", matrix.word(), i + 1),
                });
            }
        }
    }

    let (_, end_date) = date_range(anchor, matrix.width());
    debug!(word = matrix.word(), total = descriptors.len(), "planned commits");

    Ok(Plan {
        word: matrix.word().to_string(),
        intensity,
        requested_anchor,
        anchor,
        end_date,
        weeks: matrix.width(),
        descriptors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::matrix::build_matrix;
    use chrono::{Datelike, Timelike, Weekday};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn hi_plan(intensity: Intensity, seed: u64) -> Plan {
        let matrix = build_matrix("HI").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        plan(&matrix, d(2024, 1, 7), intensity, &mut rng).unwrap()
    }

    #[test]
    fn test_light_total_is_twice_lit_cells() {
        let plan = hi_plan(Intensity::Light, 1);
        assert_eq!(plan.total(), 2 * 28);
        assert!(plan.commits_per_day().values().all(|n| *n == 2));
    }

    #[test]
    fn test_count_ranges_per_intensity() {
        for seed in 0..20 {
            let medium = hi_plan(Intensity::Medium, seed);
            assert!(medium.commits_per_day().values().all(|n| *n == 5 || *n == 6));

            let dark = hi_plan(Intensity::Dark, seed);
            assert!(dark.commits_per_day().values().all(|n| *n == 12 || *n == 15));

            let random = hi_plan(Intensity::Random, seed);
            assert!(random.commits_per_day().values().all(|n| (4..=19).contains(n)));
        }
    }

    #[test]
    fn test_random_never_draws_eleven() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..2000 {
            let n = Intensity::Random.draw_count(&mut rng);
            assert!((4..=19).contains(&n) && n != 11, "{}", n);
        }
    }

    #[test]
    fn test_active_dates_are_deterministic() {
        let a = hi_plan(Intensity::Random, 1);
        let b = hi_plan(Intensity::Random, 2);
        assert_eq!(a.active_dates(), b.active_dates());
        assert_eq!(a.active_dates().len(), 28);
    }

    #[test]
    fn test_same_seed_same_plan() {
        assert_eq!(
            hi_plan(Intensity::Random, 5).descriptors,
            hi_plan(Intensity::Random, 5).descriptors
        );
    }

    #[test]
    fn test_top_row_lands_on_anchor_sunday() {
        // The day offset is `row`, not `row + 1`: H's top-left pixel is the anchor itself
        let plan = hi_plan(Intensity::Light, 3);
        let first = &plan.descriptors[0];
        assert_eq!(first.date, d(2024, 1, 7));
        assert_eq!(first.date.weekday(), Weekday::Sun);
        // Bottom-left pixel of H is the Saturday of week 0
        assert!(plan.active_dates().contains(&d(2024, 1, 13)));
        // With `row + 1` that pixel would spill onto the next Sunday, which H leaves blank
        assert!(!plan.active_dates().contains(&d(2024, 1, 14)));
        assert!(plan.active_dates().contains(&d(2024, 1, 17)));
    }

    #[test]
    fn test_cell_to_date_mapping() {
        let matrix = build_matrix("HI").unwrap();
        let plan = hi_plan(Intensity::Light, 4);
        let dates = plan.active_dates();
        let anchor = d(2024, 1, 7);
        for col in 0..matrix.width() {
            for row in 0..matrix.height() {
                let date = anchor + Duration::days((col * 7 + row) as i64);
                assert_eq!(dates.contains(&date), matrix.is_set(row, col), "col {} row {}", col, row);
            }
        }
    }

    #[test]
    fn test_grid_counts_mirror_matrix() {
        let matrix = build_matrix("HI").unwrap();
        let plan = hi_plan(Intensity::Light, 6);
        let grid = plan.grid_counts();
        assert_eq!(grid.len(), 7);
        for (row, line) in grid.iter().enumerate() {
            assert_eq!(line.len(), 11);
            for (col, count) in line.iter().enumerate() {
                let expected = if matrix.is_set(row, col) { 2 } else { 0 };
                assert_eq!(*count, expected);
            }
        }
    }

    #[test]
    fn test_descriptors_in_calendar_order() {
        let plan = hi_plan(Intensity::Dark, 8);
        assert!(plan.descriptors.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_label_uses_uppercased_word() {
        let matrix = build_matrix("hi").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let plan = plan(&matrix, d(2024, 1, 7), Intensity::Light, &mut rng).unwrap();
        assert!(plan
            .descriptors
            .iter()
            .all(|c| c.label.starts_with("Contribution for HI #")));
    }

    #[test]
    fn test_labels_count_per_day() {
        let plan = hi_plan(Intensity::Light, 2);
        assert_eq!(plan.descriptors[0].label, "Contribution for HI #1");
        assert_eq!(plan.descriptors[1].label, "Contribution for HI #2");
        assert_eq!(plan.descriptors[2].label, "Contribution for HI #1");
    }

    #[test]
    fn test_times_within_workday() {
        let plan = hi_plan(Intensity::Dark, 11);
        for d in &plan.descriptors {
            assert!((9..=16).contains(&d.time.hour()));
            assert!(d.time.minute() < 60);
            assert_eq!(d.time.second(), 0);
        }
    }

    #[test]
    fn test_non_sunday_anchor_is_corrected() {
        let matrix = build_matrix("HI").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let plan = plan(&matrix, d(2024, 1, 10), Intensity::Light, &mut rng).unwrap();
        assert!(plan.was_autocorrected());
        assert_eq!(plan.requested_anchor, d(2024, 1, 10));
        assert_eq!(plan.anchor, d(2024, 1, 7));
        assert_eq!(plan.descriptors[0].date, d(2024, 1, 7));
    }

    #[test]
    fn test_end_date_and_weeks() {
        let plan = hi_plan(Intensity::Light, 0);
        assert_eq!(plan.weeks, 11);
        assert_eq!(plan.end_date, d(2024, 3, 23));
        assert!(!plan.was_autocorrected());
    }

    #[test]
    fn test_git_date_format() {
        let descriptor = CommitDescriptor {
            date: d(2024, 1, 7),
            time: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            label: "x".to_string(),
        };
        assert_eq!(descriptor.git_date(), "2024-01-07T09:05:00");
    }

    #[test]
    fn test_intensity_levels() {
        assert_eq!(Intensity::from_level(1), Intensity::Light);
        assert_eq!(Intensity::from_level(4), Intensity::Random);
        assert_eq!(Intensity::from_level(0), Intensity::Medium);
        assert_eq!(Intensity::from_level(9), Intensity::Medium);
        assert_eq!(Intensity::default().level(), 2);
    }
}
