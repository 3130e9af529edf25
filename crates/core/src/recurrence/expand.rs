use std::iter::FusedIterator;

use chrono::{Datelike, Days, NaiveDate};

use super::config::EngineConfig;
use super::error::{RecurrenceError, Result};
use super::month_end::{adjusted_date, is_end_of_month};
use super::types::{RecurrenceRule, RecurrenceType, Recurring};

/// Iterator over the occurrence dates of one rule, in ascending order.
///
/// The anchor is always the first date yielded unless it already lies past
/// the horizon. Iteration stops at the first candidate after the horizon, or
/// when advancing would leave the range chrono can represent.
#[derive(Debug, Clone)]
pub struct Occurrences {
    kind: RecurrenceType,
    interval: u32,
    horizon: NaiveDate,
    anchor_day: u32,
    anchor_was_month_end: bool,
    next: Option<NaiveDate>,
}

impl Occurrences {
    /// Creates the iterator for `rule` anchored at `anchor`.
    ///
    /// Fails with [`RecurrenceError::NotRecurring`] for `none` rules.
    pub fn new(
        anchor: NaiveDate,
        rule: &RecurrenceRule,
        default_horizon: NaiveDate,
    ) -> Result<Self> {
        if !rule.kind.is_recurring() {
            return Err(RecurrenceError::NotRecurring(rule.kind));
        }

        Ok(Self {
            kind: rule.kind,
            interval: rule.effective_interval(),
            horizon: rule.horizon(default_horizon),
            anchor_day: anchor.day(),
            anchor_was_month_end: is_end_of_month(anchor),
            next: Some(anchor),
        })
    }

    /// The inclusive upper bound this iterator stops at.
    pub fn horizon(&self) -> NaiveDate {
        self.horizon
    }

    fn advance(&self, current: NaiveDate) -> Option<NaiveDate> {
        match self.kind {
            RecurrenceType::Daily => current.checked_add_days(Days::new(u64::from(self.interval))),
            RecurrenceType::Weekly => {
                current.checked_add_days(Days::new(7 * u64::from(self.interval)))
            }
            RecurrenceType::Monthly => {
                let months = i64::from(current.year()) * 12
                    + i64::from(current.month0())
                    + i64::from(self.interval);
                let year = i32::try_from(months.div_euclid(12)).ok()?;
                let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;
                adjusted_date(year, month, self.anchor_day, self.anchor_was_month_end)
            }
            RecurrenceType::Yearly => {
                let year = current
                    .year()
                    .checked_add(i32::try_from(self.interval).ok()?)?;
                adjusted_date(
                    year,
                    current.month(),
                    self.anchor_day,
                    self.anchor_was_month_end,
                )
            }
            RecurrenceType::None => None,
        }
    }
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if current > self.horizon {
            return None;
        }
        self.next = self.advance(current);
        Some(current)
    }
}

impl FusedIterator for Occurrences {}

/// Returns every occurrence date of `rule` anchored at `anchor`.
pub fn occurrence_dates(
    anchor: NaiveDate,
    rule: &RecurrenceRule,
    default_horizon: NaiveDate,
) -> Result<Vec<NaiveDate>> {
    Ok(Occurrences::new(anchor, rule, default_horizon)?.collect())
}

/// Expands `seed` into one independent copy per occurrence date, using the
/// given engine configuration.
pub fn expand_with<T: Recurring>(seed: &T, config: &EngineConfig) -> Result<Vec<T>> {
    let occurrences = Occurrences::new(seed.date(), seed.repeat(), config.default_horizon)?;
    Ok(occurrences.map(|date| seed.with_date(date)).collect())
}

/// Expands `seed` with the default engine configuration.
pub fn expand<T: Recurring>(seed: &T) -> Result<Vec<T>> {
    expand_with(seed, &EngineConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::types::EventForm;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn dates(anchor: &str, rule: RecurrenceRule) -> Vec<String> {
        let anchor = NaiveDate::parse_from_str(anchor, "%Y-%m-%d").unwrap();
        occurrence_dates(anchor, &rule, make_date(2025, 9, 30))
            .unwrap()
            .into_iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect()
    }

    fn seed(date: NaiveDate, repeat: RecurrenceRule) -> EventForm {
        EventForm::new("Team sync", date)
            .with_times("09:00", "10:00")
            .with_category("Work")
            .with_notification_time(10)
            .with_repeat(repeat)
    }

    #[test]
    fn test_daily() {
        let rule = RecurrenceRule::daily().with_end_date(make_date(2025, 5, 3));
        assert_eq!(
            dates("2025-05-01", rule),
            ["2025-05-01", "2025-05-02", "2025-05-03"]
        );
    }

    #[test]
    fn test_weekly() {
        let rule = RecurrenceRule::weekly().with_end_date(make_date(2025, 5, 15));
        assert_eq!(
            dates("2025-05-01", rule),
            ["2025-05-01", "2025-05-08", "2025-05-15"]
        );
    }

    #[test]
    fn test_monthly_month_end_stickiness() {
        let rule = RecurrenceRule::monthly().with_end_date(make_date(2025, 4, 30));
        assert_eq!(
            dates("2025-01-31", rule),
            ["2025-01-31", "2025-02-28", "2025-03-31", "2025-04-30"]
        );
    }

    #[test]
    fn test_monthly_clamps_without_sticking() {
        let rule = RecurrenceRule::monthly().with_end_date(make_date(2025, 4, 30));
        assert_eq!(
            dates("2025-01-30", rule),
            ["2025-01-30", "2025-02-28", "2025-03-30", "2025-04-30"]
        );
    }

    #[test]
    fn test_monthly_crosses_year_boundary() {
        let rule = RecurrenceRule::monthly().with_end_date(make_date(2025, 2, 15));
        assert_eq!(
            dates("2024-11-15", rule),
            ["2024-11-15", "2024-12-15", "2025-01-15", "2025-02-15"]
        );
    }

    #[test]
    fn test_yearly_leap_day_degradation() {
        let rule = RecurrenceRule::yearly().with_end_date(make_date(2027, 3, 1));
        assert_eq!(
            dates("2024-02-29", rule),
            ["2024-02-29", "2025-02-28", "2026-02-28", "2027-02-28"]
        );
    }

    #[test]
    fn test_yearly_literal_feb_28_stays() {
        let rule = RecurrenceRule::yearly().with_end_date(make_date(2029, 1, 1));
        assert_eq!(
            dates("2024-02-28", rule),
            ["2024-02-28", "2025-02-28", "2026-02-28", "2027-02-28", "2028-02-28"]
        );
    }

    #[test]
    fn test_daily_interval() {
        let rule = RecurrenceRule::daily()
            .with_interval(2)
            .with_end_date(make_date(2025, 5, 5));
        assert_eq!(
            dates("2025-05-01", rule),
            ["2025-05-01", "2025-05-03", "2025-05-05"]
        );
    }

    #[test]
    fn test_weekly_interval() {
        let rule = RecurrenceRule::weekly()
            .with_interval(2)
            .with_end_date(make_date(2025, 5, 29));
        assert_eq!(
            dates("2025-05-01", rule),
            ["2025-05-01", "2025-05-15", "2025-05-29"]
        );
    }

    #[test]
    fn test_monthly_interval() {
        let rule = RecurrenceRule::monthly()
            .with_interval(2)
            .with_end_date(make_date(2025, 7, 31));
        assert_eq!(
            dates("2025-01-31", rule),
            ["2025-01-31", "2025-03-31", "2025-05-31", "2025-07-31"]
        );
    }

    #[test]
    fn test_yearly_interval() {
        let rule = RecurrenceRule::yearly()
            .with_interval(2)
            .with_end_date(make_date(2030, 2, 28));
        assert_eq!(
            dates("2024-02-29", rule),
            ["2024-02-29", "2026-02-28", "2028-02-29", "2030-02-28"]
        );
    }

    #[test]
    fn test_default_horizon() {
        assert_eq!(
            dates("2025-09-28", RecurrenceRule::daily()),
            ["2025-09-28", "2025-09-29", "2025-09-30"]
        );
    }

    #[test]
    fn test_configured_horizon() {
        let anchor = make_date(2026, 1, 1);
        let config = EngineConfig::new(make_date(2026, 1, 3));
        let events = expand_with(&seed(anchor, RecurrenceRule::daily()), &config).unwrap();

        let got: Vec<NaiveDate> = events.iter().map(|e| e.date).collect();
        assert_eq!(
            got,
            [make_date(2026, 1, 1), make_date(2026, 1, 2), make_date(2026, 1, 3)]
        );
    }

    #[test]
    fn test_end_date_until_inclusive() {
        let rule = RecurrenceRule::daily().with_end_date(make_date(2025, 6, 5));
        assert_eq!(
            dates("2025-06-01", rule),
            [
                "2025-06-01",
                "2025-06-02",
                "2025-06-03",
                "2025-06-04",
                "2025-06-05"
            ]
        );
    }

    #[test]
    fn test_end_date_equal_to_anchor_emits_anchor_only() {
        let rule = RecurrenceRule::weekly().with_end_date(make_date(2025, 6, 1));
        assert_eq!(dates("2025-06-01", rule), ["2025-06-01"]);
    }

    #[test]
    fn test_anchor_after_horizon_is_empty() {
        let rule = RecurrenceRule::daily().with_end_date(make_date(2025, 5, 31));
        assert!(dates("2025-06-01", rule).is_empty());
    }

    #[test]
    fn test_non_positive_interval_is_floored() {
        for interval in [0, -1, -30] {
            let rule = RecurrenceRule::daily()
                .with_interval(interval)
                .with_end_date(make_date(2025, 5, 3));
            assert_eq!(
                dates("2025-05-01", rule),
                ["2025-05-01", "2025-05-02", "2025-05-03"]
            );
        }
    }

    #[test]
    fn test_none_rule_is_rejected() {
        let event = seed(make_date(2025, 5, 1), RecurrenceRule::none());
        assert_eq!(
            expand(&event),
            Err(RecurrenceError::NotRecurring(RecurrenceType::None))
        );
    }

    #[test]
    fn test_expand_copies_every_other_field() {
        let rule = RecurrenceRule::weekly()
            .with_id("repeat-1")
            .with_end_date(make_date(2025, 5, 15));
        let mut event = seed(make_date(2025, 5, 1), rule);
        event
            .extra
            .insert("color".to_string(), serde_json::Value::from("#F97316"));

        let events = expand(&event).unwrap();

        assert_eq!(events.len(), 3);
        for occurrence in &events {
            assert_eq!(occurrence.title, event.title);
            assert_eq!(occurrence.start_time, "09:00");
            assert_eq!(occurrence.repeat, event.repeat);
            assert_eq!(occurrence.extra, event.extra);
            assert_eq!(occurrence.id, None);
        }
        assert_eq!(events[0], event);
    }

    #[test]
    fn test_output_is_strictly_ascending() {
        let anchors = [
            make_date(2024, 1, 29),
            make_date(2024, 1, 31),
            make_date(2024, 2, 29),
            make_date(2025, 12, 31),
        ];
        let kinds = [
            RecurrenceType::Daily,
            RecurrenceType::Weekly,
            RecurrenceType::Monthly,
            RecurrenceType::Yearly,
        ];
        let horizon = make_date(2032, 12, 31);

        for anchor in anchors {
            for kind in kinds {
                for interval in 1..=12 {
                    let rule = RecurrenceRule::new(kind).with_interval(interval);
                    let got = occurrence_dates(anchor, &rule, horizon).unwrap();

                    assert_eq!(got.first(), Some(&anchor));
                    assert!(got.windows(2).all(|w| w[0] < w[1]));
                    assert!(got.iter().all(|d| *d <= horizon));
                }
            }
        }
    }

    #[test]
    fn test_last_date_is_largest_before_horizon() {
        let anchor = make_date(2025, 1, 31);
        let horizon = make_date(2025, 6, 29);
        let rule = RecurrenceRule::monthly();
        let got = occurrence_dates(anchor, &rule, horizon).unwrap();

        // Jun 30 would be next and lies past the horizon.
        assert_eq!(got.last(), Some(&make_date(2025, 5, 31)));
    }

    #[test]
    fn test_stops_at_end_of_representable_range() {
        let anchor = NaiveDate::MAX.pred_opt().unwrap();
        let rule = RecurrenceRule::daily().with_interval(5);
        let got = occurrence_dates(anchor, &rule, NaiveDate::MAX).unwrap();
        assert_eq!(got, [anchor]);
    }

    #[test]
    fn test_iterator_is_fused() {
        let rule = RecurrenceRule::daily().with_end_date(make_date(2025, 5, 1));
        let mut occurrences =
            Occurrences::new(make_date(2025, 5, 1), &rule, make_date(2025, 9, 30)).unwrap();

        assert_eq!(occurrences.horizon(), make_date(2025, 5, 1));
        assert_eq!(occurrences.next(), Some(make_date(2025, 5, 1)));
        assert_eq!(occurrences.next(), None);
        assert_eq!(occurrences.next(), None);
    }
}
