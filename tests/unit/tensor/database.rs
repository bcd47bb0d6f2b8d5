use super::*;

#[test]
fn identical_text_registers_once() {
    let mut db = PromptDatabase::new();
    let a = db.register("a cat");
    let b = db.register("a dog");
    let again = db.register("a cat");
    assert_eq!(a, again);
    assert_ne!(a, b);
    assert_eq!(db.len(), 2);
}

#[test]
fn indices_follow_first_encounter_order() {
    let mut db = PromptDatabase::new();
    for text in ["b", "a", "b", "c", "a"] {
        db.register(text);
    }
    assert_eq!(db.texts(), ["b", "a", "c"]);
    assert_eq!(db.index_of("c"), Some(2));
    assert_eq!(db.get(1), Some("a"));
    assert_eq!(db.get(3), None);
}

#[test]
fn dedup_is_exact_text_equality() {
    let mut db = PromptDatabase::new();
    db.register("cat");
    db.register("cat ");
    db.register("Cat");
    assert_eq!(db.len(), 3);
}
