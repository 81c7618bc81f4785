mod common;

use std::collections::HashSet;

use common::sample_catalog;
use fruitjar::catalog::{
    filter_fruits, group_fruits, groups_to_json, CatalogSummary, GroupBy, ALL_FRUITS_GROUP,
};

fn names<'a>(fruits: impl IntoIterator<Item = &'a fruitjar::catalog::Fruit>) -> Vec<&'a str> {
    fruits.into_iter().map(|fruit| fruit.name.as_str()).collect()
}

#[test]
fn query_matches_any_text_field_case_insensitively() {
    let catalog = sample_catalog();

    let by_name = filter_fruits(&catalog, "APPLE");
    assert_eq!(
        names(by_name.iter().copied()),
        vec!["Apple", "Pineapple", "Custard apple"]
    );

    let by_family = filter_fruits(&catalog, "rosaceae");
    assert_eq!(by_family.len(), 4);

    let by_genus = filter_fruits(&catalog, "  musa ");
    assert_eq!(names(by_genus.iter().copied()), vec!["Banana"]);
}

#[test]
fn blank_query_keeps_catalog_order() {
    let catalog = sample_catalog();
    for query in ["", "   "] {
        let kept = filter_fruits(&catalog, query);
        assert_eq!(names(kept.iter().copied()), names(catalog.iter()));
    }
}

#[test]
fn grouping_by_none_yields_one_bucket() {
    let catalog = sample_catalog();
    let visible = filter_fruits(&catalog, "");

    let groups = group_fruits(&visible, GroupBy::None);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, ALL_FRUITS_GROUP);
    assert_eq!(groups[0].fruits.len(), catalog.len());

    let nothing = filter_fruits(&catalog, "durian");
    let groups = group_fruits(&nothing, GroupBy::None);
    assert_eq!(groups.len(), 1);
    assert!(groups[0].fruits.is_empty());
}

#[test]
fn grouping_partitions_without_gaps_or_duplicates() {
    let catalog = sample_catalog();
    let visible = filter_fruits(&catalog, "");

    for group_by in [GroupBy::Family, GroupBy::Order, GroupBy::Genus] {
        let groups = group_fruits(&visible, group_by);

        let total: usize = groups.iter().map(|group| group.fruits.len()).sum();
        assert_eq!(total, visible.len(), "{group_by}");

        let ids: HashSet<u32> = groups
            .iter()
            .flat_map(|group| group.fruits.iter().map(|fruit| fruit.id))
            .collect();
        assert_eq!(ids.len(), visible.len(), "{group_by}");

        for group in &groups {
            assert!(group
                .fruits
                .iter()
                .all(|fruit| group_by.key_of(fruit) == Some(group.name.as_str())));
        }
    }
}

#[test]
fn family_buckets_follow_first_appearance() {
    let catalog = sample_catalog();
    let visible = filter_fruits(&catalog, "");

    let groups = group_fruits(&visible, GroupBy::Family);
    let order: Vec<&str> = groups.iter().map(|group| group.name.as_str()).collect();
    assert_eq!(
        order,
        vec!["Rosaceae", "Musaceae", "Bromeliaceae", "Annonaceae"]
    );
    assert_eq!(
        names(groups[0].fruits.iter().copied()),
        vec!["Apple", "Strawberry", "Pear", "Cherry"]
    );
}

#[test]
fn grouping_applies_to_the_filtered_subset() {
    let catalog = sample_catalog();
    let visible = filter_fruits(&catalog, "apple");

    let groups = group_fruits(&visible, GroupBy::Order);
    let order: Vec<&str> = groups.iter().map(|group| group.name.as_str()).collect();
    assert_eq!(order, vec!["Rosales", "Poales", "Magnoliales"]);
}

#[test]
fn summary_reports_counts() {
    let catalog = sample_catalog();

    let all = filter_fruits(&catalog, "");
    let summary = CatalogSummary::new(all.len(), catalog.len(), "");
    assert_eq!(summary.to_string(), "Showing 7 fruits");

    let some = filter_fruits(&catalog, "apple");
    let summary = CatalogSummary::new(some.len(), catalog.len(), "apple");
    assert_eq!(summary.to_string(), "Showing 3 of 7 fruits");

    let none = filter_fruits(&catalog, "durian");
    let summary = CatalogSummary::new(none.len(), catalog.len(), "durian");
    assert!(summary.no_matches());
    assert_eq!(
        summary.to_string(),
        "Showing 0 of 7 fruits - No fruits match your search"
    );
}

#[test]
fn group_key_parses_from_cli_text() {
    assert_eq!("family".parse::<GroupBy>(), Ok(GroupBy::Family));
    assert_eq!(" Genus ".parse::<GroupBy>(), Ok(GroupBy::Genus));
    assert!("kingdom".parse::<GroupBy>().is_err());
}

#[test]
fn json_output_keeps_first_seen_group_order() {
    let catalog = sample_catalog();
    let visible = filter_fruits(&catalog, "");
    let groups = group_fruits(&visible, GroupBy::Family);

    let object = groups_to_json(&groups).unwrap();
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["Rosaceae", "Musaceae", "Bromeliaceae", "Annonaceae"]
    );

    let rendered = serde_json::to_string(&object).unwrap();
    let rosaceae = rendered.find("\"Rosaceae\"").unwrap();
    let annonaceae = rendered.find("\"Annonaceae\"").unwrap();
    assert!(rosaceae < annonaceae);
    assert_eq!(object["Rosaceae"].as_array().unwrap().len(), 4);
}
