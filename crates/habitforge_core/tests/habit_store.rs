use habitforge_core::{
    Category, Habit, HabitStore, HabitStoreError, HabitValidationError,
};
use std::collections::HashSet;
use uuid::Uuid;

fn restored(records: &[(&str, Category, u32, bool)]) -> HabitStore {
    let habits = records
        .iter()
        .map(|(name, category, streak, completed)| {
            Habit::with_state(Uuid::new_v4(), name, *category, *streak, *completed).unwrap()
        })
        .collect::<Vec<_>>();
    HabitStore::restore(habits).unwrap()
}

#[test]
fn create_starts_fresh_and_appends_in_order() {
    let mut store = HabitStore::new();

    let first = store.create("Read 20 pages", Category::Mental).unwrap();
    let second = store.create("  Stretch  ", Category::Physical).unwrap();

    assert_eq!(first.streak, 0);
    assert!(!first.completed);
    assert_eq!(second.name, "Stretch");

    let listed = store.list(None);
    assert_eq!(
        listed.iter().map(|habit| habit.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
}

#[test]
fn create_issues_unique_ids() {
    let mut store = HabitStore::new();
    let mut ids = HashSet::new();
    for index in 0..50 {
        let habit = store.create(&format!("habit {index}"), Category::Mental).unwrap();
        assert!(ids.insert(habit.id));
    }
    assert_eq!(store.len(), 50);
}

#[test]
fn create_rejects_blank_names_without_mutation() {
    let mut store = HabitStore::new();
    store.create("Meditate", Category::Spiritual).unwrap();

    for name in ["", "   ", "\t\n"] {
        let err = store.create(name, Category::Spiritual).unwrap_err();
        assert_eq!(err, HabitStoreError::Validation(HabitValidationError::EmptyName));
    }
    assert_eq!(store.len(), 1);
}

#[test]
fn toggle_increments_once_and_undo_keeps_streak() {
    let mut store = restored(&[("Journaling", Category::Mental, 2, false)]);
    let id = store.list(None)[0].id;

    let done = store.toggle(id).unwrap();
    assert!(done.completed);
    assert_eq!(done.streak, 3);

    let undone = store.toggle(id).unwrap();
    assert!(!undone.completed);
    assert_eq!(undone.streak, 3);

    assert_eq!(store.get(id).unwrap(), undone);
}

#[test]
fn toggle_leaves_other_fields_untouched() {
    let mut store = HabitStore::new();
    let created = store.create("Budget review", Category::Financial).unwrap();

    let toggled = store.toggle(created.id).unwrap();
    assert_eq!(toggled.id, created.id);
    assert_eq!(toggled.name, created.name);
    assert_eq!(toggled.category, created.category);
}

#[test]
fn toggle_missing_id_returns_not_found() {
    let mut store = HabitStore::new();
    store.create("Walk", Category::Physical).unwrap();
    let before = store.list(None);

    let missing = Uuid::new_v4();
    assert_eq!(store.toggle(missing), Err(HabitStoreError::NotFound(missing)));
    assert_eq!(store.list(None), before);
}

#[test]
fn delete_is_idempotent() {
    let mut store = HabitStore::new();
    let habit = store.create("Pray", Category::Spiritual).unwrap();
    store.create("Save 10%", Category::Financial).unwrap();

    assert!(!store.delete(Uuid::new_v4()));
    assert_eq!(store.len(), 2);

    assert!(store.delete(habit.id));
    assert!(!store.delete(habit.id));
    assert_eq!(store.len(), 1);
    assert!(store.get(habit.id).is_none());
}

#[test]
fn list_filters_by_category_preserving_order() {
    let mut store = HabitStore::new();
    let a = store.create("Read", Category::Mental).unwrap();
    store.create("Run", Category::Physical).unwrap();
    let c = store.create("Puzzle", Category::Mental).unwrap();

    let mental = store.list(Some(Category::Mental));
    assert_eq!(
        mental.iter().map(|habit| habit.id).collect::<Vec<_>>(),
        vec![a.id, c.id]
    );
    assert!(store.list(Some(Category::Financial)).is_empty());
}

#[test]
fn restore_rejects_duplicate_ids() {
    let habit = Habit::new("Walk", Category::Physical).unwrap();
    let err = HabitStore::restore(vec![habit.clone(), habit.clone()]).unwrap_err();
    assert_eq!(err, HabitStoreError::DuplicateId(habit.id));
}

#[test]
fn demo_store_matches_starter_dashboard() {
    let store = HabitStore::with_demo_habits();
    let habits = store.list(None);

    assert_eq!(habits.len(), 5);
    assert_eq!(habits[0].name, "Morning meditation");
    assert_eq!(habits[0].category, Category::Spiritual);
    assert_eq!(habits[0].streak, 7);
    assert!(habits[0].completed);
    assert_eq!(store.list(Some(Category::Mental)).len(), 2);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.overall.completed_count, 2);
    assert_eq!(snapshot.overall.percentage, 40);
    assert_eq!(snapshot.longest_streak, 7);
    assert_eq!(snapshot.by_category.get(Category::Physical).percentage, 100);
}

#[test]
fn snapshot_reflects_latest_mutation() {
    let mut store = HabitStore::new();
    let habit = store.create("Read", Category::Mental).unwrap();
    assert_eq!(store.snapshot().overall.percentage, 0);

    store.toggle(habit.id).unwrap();
    let snapshot = store.snapshot();
    assert_eq!(snapshot.overall.percentage, 100);
    assert_eq!(snapshot.habits[0].streak, 1);

    store.delete(habit.id);
    assert!(store.snapshot().habits.is_empty());
    assert!(store.is_empty());
}
