mod common;

use std::collections::HashSet;

use chrono::FixedOffset;
use common::{FEB_12_21H, THREE_HOURS, raw_sample};
use proptest::prelude::*;
use weather_lookup::domain::{
    forecast::{FORECAST_DAYS, bar_cells, group_by_day, range_span},
    weather::local_time,
};

proptest! {
    #[test]
    fn grouping_drops_first_day_and_caps_at_five(
        count in 1usize..60,
        offset_hours in -12i32..=14,
        start_shift in 0i64..24,
    ) {
        let offset = FixedOffset::east_opt(offset_hours * 3_600).unwrap();
        let start = FEB_12_21H + start_shift * 3_600;
        let samples: Vec<_> = (0..count)
            .map(|idx| raw_sample(start + THREE_HOURS * idx as i64, 10.0, Some(0.5)))
            .collect();

        let distinct: HashSet<_> = samples
            .iter()
            .map(|s| local_time(s.timestamp, offset).unwrap().date_naive())
            .collect();
        let first_day = local_time(start, offset).unwrap().date_naive();

        let days = group_by_day(&samples, offset);
        prop_assert_eq!(days.len(), (distinct.len() - 1).min(FORECAST_DAYS));
        prop_assert!(days.iter().all(|d| d.date != first_day));
        prop_assert!(days.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn precipitation_chance_stays_in_percent(
        pops in proptest::collection::vec(proptest::option::of(-2.0f32..3.0), 16..24),
    ) {
        let utc = FixedOffset::east_opt(0).unwrap();
        let samples: Vec<_> = pops
            .iter()
            .enumerate()
            .map(|(idx, pop)| raw_sample(FEB_12_21H + THREE_HOURS * idx as i64, 5.0, *pop))
            .collect();

        for day in group_by_day(&samples, utc) {
            prop_assert!(day.precipitation_chance <= 100);
            prop_assert!(day.temperature.min <= day.temperature.max);
        }
    }

    #[test]
    fn bar_cells_never_overflow(
        min in -80.0f32..80.0,
        max in -80.0f32..80.0,
        week_min in -100.0f32..40.0,
        week_max in -100.0f32..120.0,
        width in 1usize..80usize,
    ) {
        let day_min = min.min(max);
        let day_max = min.max(max);

        let span = range_span(day_min, day_max, week_min, week_max);
        let (start, end) = bar_cells(span, width);
        prop_assert!(start <= end);
        prop_assert!(end <= width);
    }
}
