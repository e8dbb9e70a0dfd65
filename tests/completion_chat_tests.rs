use codecat::{chat, complete, prefix_at};
use std::collections::HashSet;

#[test]
fn test_complete_cla_puts_class_template_first() {
    let entries = complete("cla");

    assert_eq!(entries[0].key, "class");
    assert!(entries[0].template.contains("def __init__(self):"));
    let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys.iter().filter(|k| **k == "class").count(), 1);
}

#[test]
fn test_complete_orders_sources() {
    // "i": templates if/import/init, then keywords, then built-ins
    let entries = complete("i");
    let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();

    assert_eq!(&keys[..3], &["if", "import", "init"]);
    assert_eq!(&keys[3..5], &["in", "is"]);
    let first_builtin = keys.iter().position(|k| *k == "id").unwrap();
    assert!(first_builtin > 4);
    assert_eq!(entries[first_builtin].template, "id()");
}

#[test]
fn test_complete_keys_are_unique_and_capped() {
    for prefix in ["", "a", "s", "P", "__"] {
        let entries = complete(prefix);
        assert!(entries.len() <= 15, "{prefix:?} gave {} entries", entries.len());
        let unique: HashSet<_> = entries.iter().map(|e| &e.key).collect();
        assert_eq!(unique.len(), entries.len(), "duplicate keys for {prefix:?}");
    }
}

#[test]
fn test_complete_capitalised_keywords_are_reachable_by_exact_case_only() {
    // prefixes are lower-cased, so "True" never matches "t"
    let keys: Vec<String> = complete("T").into_iter().map(|e| e.key).collect();
    assert!(keys.contains(&"try".to_string()));
    assert!(!keys.contains(&"True".to_string()));
}

#[test]
fn test_prefix_at_cursor_feeds_completion() {
    let prefix = prefix_at("    for item in enum").unwrap();
    assert_eq!(prefix, "enum");
    assert_eq!(complete(prefix)[0].template, "enumerate()");
}

#[test]
fn test_chat_priority_order() {
    let cases = [
        ("hey", "Hey! 🐱 I'm your local AI assistant."),
        ("can you help?", "🤖 I can help with:"),
        ("make a dict please", "Create a dict:"),
        ("how to define a function", "Define a function:"),
        ("create a class", "Define a class:"),
        ("iterate over a list", "Loops in Python:"),
        ("open a file", "File operations:"),
        ("I get an error", "Exception handling:"),
        ("how does import work", "Import statements:"),
        ("what is a monad", "🤔 I'm a local assistant"),
    ];

    for (message, expected_start) in cases {
        let answer = chat(message);
        assert!(
            answer.starts_with(expected_start),
            "{message:?} answered {answer:?}"
        );
    }
}

#[test]
fn test_chat_is_deterministic_and_case_insensitive() {
    assert_eq!(chat("How do I LOOP?"), chat("how do i loop?"));
}

#[test]
fn test_chat_answers_carry_code_examples() {
    let answer = chat("how do I handle an exception");
    assert!(answer.contains("```python"));
    assert!(answer.contains("except ValueError as e:"));
}
