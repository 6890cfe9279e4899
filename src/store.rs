//! Habit Store
//!
//! Reducer-driven habit collection. Every mutation goes through the pure
//! `reduce` function; Leptos reactive_stores provides the subscription
//! contract between the store and the views.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Habit;

/// Habit collection plus the initial-load flag
#[derive(Clone, Debug, Store)]
pub struct HabitState {
    /// Server-defined order, preserved as received
    pub habits: Vec<Habit>,
    /// True until the first SetHabits lands
    pub loading: bool,
}

impl HabitState {
    pub fn new() -> Self {
        Self {
            habits: Vec::new(),
            loading: true,
        }
    }
}

impl Default for HabitState {
    fn default() -> Self {
        Self::new()
    }
}

/// Actions accepted by the habit reducer
#[derive(Clone, Debug)]
pub enum HabitAction {
    SetHabits(Vec<Habit>),
    AddHabit(Habit),
    DeleteHabit(String),
    EditHabit { id: String, name: String },
    FinishHabit(String),
}

/// Pure state transition. Never mutates its input binding's source; a
/// matching id is required for Delete/Edit/Finish to have any effect.
pub fn reduce(state: HabitState, action: HabitAction) -> HabitState {
    match action {
        HabitAction::SetHabits(habits) => HabitState {
            habits,
            loading: false,
        },
        HabitAction::AddHabit(habit) => {
            let mut habits = state.habits;
            habits.push(habit);
            HabitState {
                habits,
                loading: state.loading,
            }
        }
        HabitAction::DeleteHabit(id) => {
            let mut habits = state.habits;
            habits.retain(|h| h.id != id);
            HabitState {
                habits,
                loading: state.loading,
            }
        }
        HabitAction::EditHabit { id, name } => {
            let mut habits = state.habits;
            if let Some(habit) = habits.iter_mut().find(|h| h.id == id) {
                habit.name = name;
            }
            HabitState {
                habits,
                loading: state.loading,
            }
        }
        HabitAction::FinishHabit(id) => {
            let mut habits = state.habits;
            if let Some(habit) = habits.iter_mut().find(|h| h.id == id) {
                // Streak stays as-is: the finish endpoint increments it
                // server-side and the next full fetch reflects it.
                habit.is_finished = true;
            }
            HabitState {
                habits,
                loading: state.loading,
            }
        }
    }
}

/// Type alias for the store
pub type HabitsStore = Store<HabitState>;

/// Get the habit store from context
pub fn use_habit_store() -> HabitsStore {
    expect_context::<HabitsStore>()
}

/// Route an action through the reducer into the reactive store
pub fn dispatch(store: &HabitsStore, action: HabitAction) {
    let next = reduce(store.get_untracked(), action);
    *store.write() = next;
}

/// Share of finished habits, rounded to whole percent.
/// None when there are no habits (the views render a blank placeholder).
pub fn completed_percent(habits: &[Habit]) -> Option<u8> {
    if habits.is_empty() {
        return None;
    }
    let finished = habits.iter().filter(|h| h.is_finished).count();
    Some(((finished as f64 / habits.len() as f64) * 100.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_habit(id: &str, name: &str, is_finished: bool, streak: u32) -> Habit {
        Habit {
            id: id.to_string(),
            name: name.to_string(),
            is_finished,
            streak,
        }
    }

    fn three_habits() -> HabitState {
        HabitState {
            habits: vec![
                make_habit("a", "Read", true, 4),
                make_habit("b", "Run", false, 0),
                make_habit("c", "Meditate", false, 12),
            ],
            loading: false,
        }
    }

    #[test]
    fn set_habits_replaces_and_clears_loading() {
        let state = HabitState::new();
        assert!(state.loading);

        let next = reduce(state, HabitAction::SetHabits(vec![make_habit("a", "Read", false, 0)]));
        assert!(!next.loading);
        assert_eq!(next.habits.len(), 1);
        assert_eq!(next.habits[0].name, "Read");
    }

    #[test]
    fn add_habit_appends_at_the_end() {
        let next = reduce(
            three_habits(),
            HabitAction::AddHabit(make_habit("d", "Sleep early", false, 0)),
        );
        assert_eq!(next.habits.len(), 4);
        assert_eq!(next.habits[3].id, "d");
        assert_eq!(next.habits[3].streak, 0);
        assert!(!next.habits[3].is_finished);
    }

    #[test]
    fn delete_habit_removes_only_the_matching_id() {
        let next = reduce(three_habits(), HabitAction::DeleteHabit("b".to_string()));
        assert_eq!(next.habits.len(), 2);
        assert!(next.habits.iter().all(|h| h.id != "b"));
        assert_eq!(next.habits[0].id, "a");
        assert_eq!(next.habits[1].id, "c");
    }

    #[test]
    fn edit_habit_renames_without_touching_other_fields() {
        let next = reduce(
            three_habits(),
            HabitAction::EditHabit {
                id: "a".to_string(),
                name: "Read more".to_string(),
            },
        );
        let edited = &next.habits[0];
        assert_eq!(edited.name, "Read more");
        assert!(edited.is_finished);
        assert_eq!(edited.streak, 4);
    }

    #[test]
    fn finish_habit_sets_flag_and_leaves_streak_alone() {
        let next = reduce(three_habits(), HabitAction::FinishHabit("c".to_string()));
        let finished = &next.habits[2];
        assert!(finished.is_finished);
        assert_eq!(finished.streak, 12);
    }

    #[test]
    fn unmatched_id_is_identity() {
        let before = three_habits();
        let after = reduce(before.clone(), HabitAction::DeleteHabit("zzz".to_string()));
        assert_eq!(after.habits, before.habits);

        let after = reduce(
            before.clone(),
            HabitAction::EditHabit {
                id: "zzz".to_string(),
                name: "???".to_string(),
            },
        );
        assert_eq!(after.habits, before.habits);
    }

    #[test]
    fn reducer_is_pure() {
        let action = HabitAction::FinishHabit("b".to_string());
        let first = reduce(three_habits(), action.clone());
        let second = reduce(three_habits(), action);
        assert_eq!(first.habits, second.habits);
        assert_eq!(first.loading, second.loading);
    }

    #[test]
    fn percent_is_none_for_empty_collection() {
        assert_eq!(completed_percent(&[]), None);
    }

    #[test]
    fn percent_stays_within_bounds() {
        let state = three_habits();
        let percent = completed_percent(&state.habits).unwrap();
        assert_eq!(percent, 33);

        let none_done: Vec<Habit> = state
            .habits
            .iter()
            .cloned()
            .map(|mut h| {
                h.is_finished = false;
                h
            })
            .collect();
        assert_eq!(completed_percent(&none_done), Some(0));

        let all_done: Vec<Habit> = state
            .habits
            .iter()
            .cloned()
            .map(|mut h| {
                h.is_finished = true;
                h
            })
            .collect();
        assert_eq!(completed_percent(&all_done), Some(100));
    }
}
