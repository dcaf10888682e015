use super::*;

#[test]
fn test_add_normalizes_and_dedups() {
    let mut tags = TagSet::new();
    assert!(tags.add("World"));
    assert!(!tags.add("world"));
    assert!(!tags.add("  WORLD "));
    assert!(!tags.add(""));
    assert_eq!(tags.len(), 1);
    assert!(tags.has("WoRlD"));
}

#[test]
fn test_insertion_order_is_kept() {
    let tags: TagSet = ["skybox", "world", "Skybox", "particles"].into_iter().collect();
    let collected: Vec<&str> = tags.iter().collect();
    assert_eq!(collected, vec!["skybox", "world", "particles"]);
}

#[test]
fn test_remove() {
    let mut tags: TagSet = ["a", "b"].into_iter().collect();
    assert!(tags.remove("A"));
    assert!(!tags.remove("a"));
    assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["b"]);

    tags.clear();
    assert!(tags.is_empty());
}

#[test]
fn test_serde_as_string_list() {
    #[derive(serde::Deserialize)]
    struct Holder {
        tags: TagSet,
    }

    let holder: Holder = toml::from_str(r#"tags = ["Hud", "hud", "world"]"#).unwrap();
    assert_eq!(holder.tags.iter().collect::<Vec<_>>(), vec!["hud", "world"]);
}
