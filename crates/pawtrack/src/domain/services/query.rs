//! Query/Grouping Engine
//!
//! Read-only views derived from a reminder snapshot. Nothing here fails:
//! unset filters match everything and an empty snapshot yields empty views.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Reminder;
use crate::domain::value_objects::{Category, DayClock, TimeSlot};

/// Day filter: exact calendar day, optional pet, optional category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderQuery {
    pub date: NaiveDate,
    pub pet_id: Option<Uuid>,
    pub category: Option<Category>,
}

impl ReminderQuery {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            pet_id: None,
            category: None,
        }
    }

    pub fn with_pet(mut self, pet_id: Option<Uuid>) -> Self {
        self.pet_id = pet_id;
        self
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn matches(&self, reminder: &Reminder, clock: &DayClock) -> bool {
        clock.date_of(&reminder.start_date) == self.date
            && self.pet_id.map_or(true, |pet_id| reminder.pet_id == pet_id)
            && self.category.map_or(true, |category| reminder.category == category)
    }
}

/// Reminders of one day, bucketed by time slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupedReminders {
    pub morning: Vec<Reminder>,
    pub afternoon: Vec<Reminder>,
    pub evening: Vec<Reminder>,
    pub night: Vec<Reminder>,
}

impl GroupedReminders {
    pub fn slot(&self, slot: TimeSlot) -> &[Reminder] {
        match slot {
            TimeSlot::Morning => &self.morning,
            TimeSlot::Afternoon => &self.afternoon,
            TimeSlot::Evening => &self.evening,
            TimeSlot::Night => &self.night,
        }
    }

    fn slot_mut(&mut self, slot: TimeSlot) -> &mut Vec<Reminder> {
        match slot {
            TimeSlot::Morning => &mut self.morning,
            TimeSlot::Afternoon => &mut self.afternoon,
            TimeSlot::Evening => &mut self.evening,
            TimeSlot::Night => &mut self.night,
        }
    }

    /// Buckets in display order
    pub fn iter(&self) -> impl Iterator<Item = (TimeSlot, &[Reminder])> + '_ {
        TimeSlot::ALL.into_iter().map(move |slot| (slot, self.slot(slot)))
    }

    pub fn len(&self) -> usize {
        self.iter().map(|(_, reminders)| reminders.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// "N of M completed" for a section header
    pub fn completed_in(&self, slot: TimeSlot) -> usize {
        self.slot(slot).iter().filter(|r| r.is_completed()).count()
    }
}

/// Completion summary for one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStats {
    pub completed: usize,
    pub total: usize,
    /// Whole percent, rounded half up; 0 when there is nothing to do
    pub completion_rate: u32,
}

impl DayStats {
    pub fn new(completed: usize, total: usize) -> Self {
        let completion_rate = if total == 0 {
            0
        } else {
            ((completed * 200 + total) / (total * 2)) as u32
        };
        Self {
            completed,
            total,
            completion_rate,
        }
    }
}

/// Reminders matching the query, in their original order
pub fn filter_reminders(
    reminders: &[Reminder],
    query: &ReminderQuery,
    clock: &DayClock,
) -> Vec<Reminder> {
    reminders
        .iter()
        .filter(|reminder| query.matches(reminder, clock))
        .cloned()
        .collect()
}

/// Bucket reminders by effective time slot, each bucket ascending by start.
///
/// The sort is stable, so reminders starting at the same instant keep
/// their relative order.
pub fn group_by_time_slot(reminders: Vec<Reminder>, clock: &DayClock) -> GroupedReminders {
    let mut grouped = GroupedReminders::default();
    for reminder in reminders {
        let slot = reminder.effective_time_slot(clock);
        grouped.slot_mut(slot).push(reminder);
    }
    for slot in TimeSlot::ALL {
        grouped.slot_mut(slot).sort_by_key(|r| r.start_date);
    }
    grouped
}

/// Completed and total counts for `today`, across all pets and categories
pub fn today_stats(reminders: &[Reminder], today: NaiveDate, clock: &DayClock) -> DayStats {
    let todays = reminders
        .iter()
        .filter(|r| clock.date_of(&r.start_date) == today);

    let (completed, total) = todays.fold((0, 0), |(completed, total), r| {
        (completed + usize::from(r.is_completed()), total + 1)
    });

    DayStats::new(completed, total)
}

/// Highest streak across every reminder, 0 when there are none
pub fn best_streak(reminders: &[Reminder]) -> u32 {
    reminders.iter().map(|r| r.streak).max().unwrap_or(0)
}

/// `center` plus `radius` days on each side, oldest first
pub fn dates_around(center: NaiveDate, radius: u32) -> Vec<NaiveDate> {
    let radius = i64::from(radius);
    (-radius..=radius)
        .filter_map(|offset| center.checked_add_signed(Duration::days(offset)))
        .collect()
}

/// How many reminders match `query` on each of `dates`
pub fn day_counts(
    reminders: &[Reminder],
    query: &ReminderQuery,
    dates: &[NaiveDate],
    clock: &DayClock,
) -> Vec<(NaiveDate, usize)> {
    dates
        .iter()
        .map(|&date| {
            let day = ReminderQuery { date, ..*query };
            let count = reminders.iter().filter(|r| day.matches(r, clock)).count();
            (date, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Frequency, NewReminder, ReminderStatus};
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reminder_at(
        title: &str,
        pet_id: Uuid,
        category: Category,
        (y, mo, d, h, mi): (i32, u32, u32, u32, u32),
    ) -> Reminder {
        let start = Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap();
        Reminder::from_new(
            Uuid::new_v4(),
            NewReminder {
                title: title.to_string(),
                pet_id,
                category,
                notes: None,
                start_date: start,
                frequency: Frequency::Daily,
                time_slot: None,
            },
            start,
        )
    }

    fn titles(reminders: &[Reminder]) -> Vec<&str> {
        reminders.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_groups_by_boundary_hour() {
        let pet = Uuid::new_v4();
        let reminders = vec![
            reminder_at("dinner", pet, Category::General, (2025, 3, 1, 19, 0)),
            reminder_at("walk", pet, Category::Lifestyle, (2025, 3, 1, 16, 30)),
            reminder_at("breakfast", pet, Category::General, (2025, 3, 1, 8, 0)),
        ];
        let clock = DayClock::utc();
        let query = ReminderQuery::for_date(date(2025, 3, 1));

        let grouped = group_by_time_slot(filter_reminders(&reminders, &query, &clock), &clock);

        assert_eq!(titles(&grouped.morning), vec!["breakfast"]);
        assert_eq!(titles(&grouped.afternoon), vec!["walk"]);
        assert_eq!(titles(&grouped.evening), vec!["dinner"]);
        assert!(grouped.night.is_empty());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let rex = Uuid::new_v4();
        let tom = Uuid::new_v4();
        let reminders = vec![
            reminder_at("rex vet", rex, Category::Health, (2025, 3, 1, 9, 0)),
            reminder_at("rex play", rex, Category::Lifestyle, (2025, 3, 1, 10, 0)),
            reminder_at("tom vet", tom, Category::Health, (2025, 3, 1, 11, 0)),
            reminder_at("rex vet tomorrow", rex, Category::Health, (2025, 3, 2, 9, 0)),
        ];
        let clock = DayClock::utc();
        let query = ReminderQuery::for_date(date(2025, 3, 1))
            .with_pet(Some(rex))
            .with_category(Some(Category::Health));

        let filtered = filter_reminders(&reminders, &query, &clock);

        assert_eq!(titles(&filtered), vec!["rex vet"]);
    }

    #[test]
    fn test_unknown_pet_yields_empty_groups() {
        let reminders = vec![reminder_at(
            "brush",
            Uuid::new_v4(),
            Category::General,
            (2025, 3, 1, 9, 0),
        )];
        let clock = DayClock::utc();
        let query = ReminderQuery::for_date(date(2025, 3, 1)).with_pet(Some(Uuid::new_v4()));

        let grouped = group_by_time_slot(filter_reminders(&reminders, &query, &clock), &clock);

        assert!(grouped.is_empty());
        assert_eq!(grouped.iter().count(), 4);
    }

    #[test]
    fn test_grouping_sorts_stably_and_is_idempotent() {
        let pet = Uuid::new_v4();
        let reminders = vec![
            reminder_at("late", pet, Category::General, (2025, 3, 1, 11, 0)),
            reminder_at("first tie", pet, Category::General, (2025, 3, 1, 9, 0)),
            reminder_at("second tie", pet, Category::General, (2025, 3, 1, 9, 0)),
            reminder_at("early", pet, Category::General, (2025, 3, 1, 6, 45)),
        ];
        let clock = DayClock::utc();
        let query = ReminderQuery::for_date(date(2025, 3, 1));

        let once = group_by_time_slot(filter_reminders(&reminders, &query, &clock), &clock);
        let twice = group_by_time_slot(filter_reminders(&reminders, &query, &clock), &clock);

        assert_eq!(
            titles(&once.morning),
            vec!["early", "first tie", "second tie", "late"]
        );
        assert_eq!(once, twice);
    }

    #[test]
    fn test_day_boundary_follows_clock_offset() {
        let pet = Uuid::new_v4();
        // 23:30 UTC on March 1st is 08:30 on March 2nd at UTC+9
        let reminders = vec![reminder_at("late", pet, Category::General, (2025, 3, 1, 23, 30))];
        let tokyo = DayClock::from_offset_minutes(540).unwrap();

        let grouped = group_by_time_slot(
            filter_reminders(&reminders, &ReminderQuery::for_date(date(2025, 3, 2)), &tokyo),
            &tokyo,
        );

        assert_eq!(titles(&grouped.morning), vec!["late"]);
    }

    #[test]
    fn test_today_stats_and_rate() {
        let pet = Uuid::new_v4();
        let mut reminders = vec![
            reminder_at("a", pet, Category::General, (2025, 3, 1, 8, 0)),
            reminder_at("b", pet, Category::General, (2025, 3, 1, 12, 0)),
            reminder_at("c", pet, Category::General, (2025, 3, 1, 18, 0)),
            reminder_at("other day", pet, Category::General, (2025, 3, 2, 8, 0)),
        ];
        reminders[0].status = ReminderStatus::Completed;
        reminders[3].status = ReminderStatus::Completed;

        let stats = today_stats(&reminders, date(2025, 3, 1), &DayClock::utc());

        assert_eq!(stats, DayStats::new(1, 3));
        assert_eq!(stats.completion_rate, 33);
        assert_eq!(DayStats::new(2, 3).completion_rate, 67);
        assert_eq!(DayStats::new(1, 8).completion_rate, 13);
    }

    #[test]
    fn test_rate_is_zero_without_reminders() {
        let stats = today_stats(&[], date(2025, 3, 1), &DayClock::utc());
        assert_eq!(stats, DayStats::default());
    }

    #[test]
    fn test_best_streak() {
        let pet = Uuid::new_v4();
        let mut reminders = vec![
            reminder_at("a", pet, Category::General, (2025, 3, 1, 8, 0)),
            reminder_at("b", pet, Category::General, (2024, 1, 1, 8, 0)),
        ];
        reminders[1].streak = 12;

        assert_eq!(best_streak(&reminders), 12);
        assert_eq!(best_streak(&[]), 0);
    }

    #[test]
    fn test_dates_around_and_day_counts() {
        let pet = Uuid::new_v4();
        let reminders = vec![
            reminder_at("a", pet, Category::General, (2025, 3, 1, 8, 0)),
            reminder_at("b", pet, Category::General, (2025, 3, 1, 20, 0)),
            reminder_at("c", pet, Category::General, (2025, 3, 3, 8, 0)),
        ];
        let dates = dates_around(date(2025, 3, 2), 1);
        assert_eq!(dates, vec![date(2025, 3, 1), date(2025, 3, 2), date(2025, 3, 3)]);

        let counts = day_counts(
            &reminders,
            &ReminderQuery::for_date(date(2025, 3, 2)),
            &dates,
            &DayClock::utc(),
        );
        assert_eq!(
            counts,
            vec![(date(2025, 3, 1), 2), (date(2025, 3, 2), 0), (date(2025, 3, 3), 1)]
        );
    }
}
