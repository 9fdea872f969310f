use habitforge_core::{Category, Habit, HabitValidationError};
use uuid::Uuid;

#[test]
fn habit_new_sets_defaults() {
    let habit = Habit::new("  Morning run ", Category::Physical).unwrap();

    assert!(!habit.id.is_nil());
    assert_eq!(habit.name, "Morning run");
    assert_eq!(habit.category, Category::Physical);
    assert_eq!(habit.streak, 0);
    assert!(!habit.completed);
}

#[test]
fn habit_new_rejects_blank_names() {
    assert_eq!(
        Habit::new("", Category::Mental).unwrap_err(),
        HabitValidationError::EmptyName
    );
    assert_eq!(
        Habit::new("   ", Category::Mental).unwrap_err(),
        HabitValidationError::EmptyName
    );
}

#[test]
fn with_state_rejects_nil_id() {
    let err = Habit::with_state(Uuid::nil(), "Budget", Category::Financial, 1, false).unwrap_err();
    assert_eq!(err, HabitValidationError::NilId);
}

#[test]
fn habit_serialization_uses_expected_wire_fields() {
    let habit_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let habit = Habit::with_state(habit_id, "Track expenses", Category::Financial, 2, true).unwrap();

    let json = serde_json::to_value(&habit).unwrap();
    assert_eq!(json["id"], habit_id.to_string());
    assert_eq!(json["name"], "Track expenses");
    assert_eq!(json["category"], "financial");
    assert_eq!(json["streak"], 2);
    assert_eq!(json["completed"], true);

    let decoded: Habit = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, habit);
}

#[test]
fn deserialize_rejects_blank_name() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "   ",
        "category": "mental",
        "streak": 0,
        "completed": false
    });

    let err = serde_json::from_value::<Habit>(value).unwrap_err();
    assert!(
        err.to_string().contains("habit name is required"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_unknown_category() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Call a friend",
        "category": "social",
        "streak": 0,
        "completed": false
    });

    assert!(serde_json::from_value::<Habit>(value).is_err());
}

#[test]
fn category_metadata_is_stable() {
    let names = Category::ALL.map(Category::display_name);
    assert_eq!(names, ["Mental", "Physical", "Spiritual", "Financial"]);
    assert_eq!(Category::Spiritual.color_hex(), "#8B5CF6");
    assert_eq!(Category::Financial.tagline(), "Wealth & growth");
    assert_eq!(Category::Mental.to_string(), "mental");
}
