//! Completion & Streak Engine
//!
//! A reminder is either Pending or Completed. Completing it bumps the streak
//! and stamps `last_completed`; un-completing it takes one off the streak
//! (never below zero) and clears `last_completed`.

use chrono::{DateTime, Utc};

use crate::domain::entities::Reminder;
use crate::domain::value_objects::ReminderStatus;

/// Flip a reminder between Pending and Completed
pub fn toggle(reminder: &Reminder, now: DateTime<Utc>) -> Reminder {
    let mut next = reminder.clone();
    match reminder.status {
        ReminderStatus::Pending => {
            next.status = ReminderStatus::Completed;
            next.last_completed = Some(now);
            next.streak = reminder.streak.saturating_add(1);
        }
        ReminderStatus::Completed => {
            next.status = ReminderStatus::Pending;
            next.last_completed = None;
            next.streak = reminder.streak.saturating_sub(1);
        }
    }
    next.touch(now);
    next
}

/// One-way completion: a reminder that is already completed stays as it is
pub fn complete(reminder: &Reminder, now: DateTime<Utc>) -> Reminder {
    if reminder.is_completed() {
        return reminder.clone();
    }
    toggle(reminder, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Frequency, NewReminder};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn reminder_with_streak(streak: u32) -> Reminder {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 7, 0, 0).unwrap();
        let mut reminder = Reminder::from_new(
            Uuid::new_v4(),
            NewReminder {
                title: "Heartworm pill".to_string(),
                pet_id: Uuid::new_v4(),
                category: Category::Health,
                notes: None,
                start_date: created,
                frequency: Frequency::Monthly,
                time_slot: None,
            },
            created,
        );
        reminder.streak = streak;
        reminder
    }

    #[test]
    fn test_toggle_pending_increments_streak() {
        let reminder = reminder_with_streak(5);
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 15, 0).unwrap();

        let done = toggle(&reminder, now);

        assert_eq!(done.status, ReminderStatus::Completed);
        assert_eq!(done.streak, 6);
        assert_eq!(done.last_completed, Some(now));
        assert_eq!(done.updated_at, now);
    }

    #[test]
    fn test_toggle_twice_restores_status_and_streak() {
        for streak in [0, 1, 5] {
            let reminder = reminder_with_streak(streak);
            let now = Utc::now();

            let back = toggle(&toggle(&reminder, now), now);

            assert_eq!(back.status, reminder.status);
            assert_eq!(back.streak, reminder.streak);
            assert_eq!(back.last_completed, None);
        }
    }

    #[test]
    fn test_uncomplete_floors_streak_at_zero() {
        let mut reminder = reminder_with_streak(0);
        reminder.status = ReminderStatus::Completed;
        reminder.last_completed = Some(Utc::now());

        let undone = toggle(&reminder, Utc::now());

        assert_eq!(undone.status, ReminderStatus::Pending);
        assert_eq!(undone.streak, 0);
        assert_eq!(undone.last_completed, None);
    }

    #[test]
    fn test_complete_is_idempotent() {
        let reminder = reminder_with_streak(2);
        let first = complete(&reminder, Utc::now());
        let second = complete(&first, Utc::now());

        assert_eq!(first.streak, 3);
        assert_eq!(second, first);
    }

    #[test]
    fn test_long_toggle_sequence_keeps_invariants() {
        let mut reminder = reminder_with_streak(1);
        for _ in 0..7 {
            reminder = toggle(&reminder, Utc::now());
            assert_eq!(reminder.last_completed.is_some(), reminder.is_completed());
            assert!(reminder.updated_at >= reminder.created_at);
        }
        assert!(reminder.is_completed());
        assert_eq!(reminder.streak, 2);
    }
}
