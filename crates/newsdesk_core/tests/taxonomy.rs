use newsdesk_core::CategoryRegistry;

#[test]
fn default_taxonomy_has_thirty_one_entries() {
    let registry = CategoryRegistry::news_default();
    assert_eq!(registry.len(), 31);
    assert!(!registry.is_empty());
}

#[test]
fn known_ids_resolve_to_canonical_labels() {
    let registry = CategoryRegistry::news_default();

    assert_eq!(registry.label_of(0), "ARTS");
    assert_eq!(registry.label_of(3), "BUSINESS");
    assert_eq!(registry.label_of(21), "SPORTS");
    assert_eq!(registry.label_of(30), "WORLDPOST");
}

#[test]
fn label_of_is_total_over_unknown_ids() {
    let registry = CategoryRegistry::news_default();

    for id in [-1, -42, 31, 999, i64::MAX, i64::MIN] {
        let label = registry.label_of(id);
        assert_eq!(label, format!("Unknown Category ({id})"));
        assert!(label.contains(&id.to_string()));
    }
}

#[test]
fn contains_matches_the_closed_set() {
    let registry = CategoryRegistry::news_default();

    assert!(registry.contains(0));
    assert!(registry.contains(30));
    assert!(!registry.contains(31));
    assert!(!registry.contains(-1));
}

#[test]
fn fixture_registries_can_replace_the_default_taxonomy() {
    let registry = CategoryRegistry::from_pairs([(7, "LOCAL"), (8, "WEATHER")]);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.label_of(7), "LOCAL");
    assert_eq!(registry.label_of(0), "Unknown Category (0)");
    assert_eq!(registry.categories()[0].label, "LOCAL");
}
