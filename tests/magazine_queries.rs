mod support;

use periodical::{MagazineId, ValidationError};
use support::{publish_many, registry, registry_with_threshold};

#[test]
fn articles_and_titles_follow_registration_order() {
    let mut registry = registry();
    let jane = registry.create_author("Jane").unwrap();
    let john = registry.create_author("John").unwrap();
    let vogue = registry.create_magazine("Vogue", "Fashion").unwrap();
    let wired = registry.create_magazine("Wired", "Technology").unwrap();

    registry.add_article(jane, vogue, "Spring Looks").unwrap();
    registry.add_article(john, wired, "Chips Ahoy").unwrap();
    registry.add_article(john, vogue, "Autumn Coats").unwrap();

    let view = registry.magazine_view(vogue).unwrap();
    assert_eq!(view.articles().len(), 2);
    let titles: Vec<_> = view
        .article_titles()
        .unwrap()
        .iter()
        .map(|t| t.as_str())
        .collect();
    assert_eq!(titles, vec!["Spring Looks", "Autumn Coats"]);
}

#[test]
fn empty_magazine_has_no_titles() {
    let mut registry = registry();
    let vogue = registry.create_magazine("Vogue", "Fashion").unwrap();
    let view = registry.magazine_view(vogue).unwrap();
    assert!(view.articles().is_empty());
    assert!(view.contributors().is_empty());
    assert_eq!(view.article_titles(), None);
    assert_eq!(view.contributing_authors(), None);
}

#[test]
fn contributors_are_distinct_in_first_appearance_order() {
    let mut registry = registry();
    let jane = registry.create_author("Jane").unwrap();
    let john = registry.create_author("John").unwrap();
    let vogue = registry.create_magazine("Vogue", "Fashion").unwrap();

    registry.add_article(john, vogue, "Autumn Coats").unwrap();
    registry.add_article(jane, vogue, "Spring Looks").unwrap();
    registry.add_article(john, vogue, "Winter Boots").unwrap();

    let view = registry.magazine_view(vogue).unwrap();
    let ids: Vec<_> = view.contributors().iter().map(|a| a.id()).collect();
    assert_eq!(ids, vec![john, jane]);
}

#[test]
fn contributing_authors_need_more_than_two_articles() {
    let mut registry = registry();
    let jane = registry.create_author("Jane").unwrap();
    let john = registry.create_author("John").unwrap();
    let ann = registry.create_author("Ann").unwrap();
    let vogue = registry.create_magazine("Vogue", "Fashion").unwrap();

    publish_many(&mut registry, john, vogue, 2);
    publish_many(&mut registry, ann, vogue, 4);
    publish_many(&mut registry, jane, vogue, 3);

    let view = registry.magazine_view(vogue).unwrap();
    let ids: Vec<_> = view
        .contributing_authors()
        .unwrap()
        .iter()
        .map(|a| a.id())
        .collect();
    // first-encountered order, not frequency order
    assert_eq!(ids, vec![ann, jane]);
}

#[test]
fn exactly_two_articles_do_not_qualify() {
    let mut registry = registry();
    let jane = registry.create_author("Jane").unwrap();
    let vogue = registry.create_magazine("Vogue", "Fashion").unwrap();
    publish_many(&mut registry, jane, vogue, 2);

    assert_eq!(
        registry.magazine_view(vogue).unwrap().contributing_authors(),
        None
    );
}

#[test]
fn contributor_threshold_is_configurable() {
    let mut registry = registry_with_threshold(0);
    let jane = registry.create_author("Jane").unwrap();
    let vogue = registry.create_magazine("Vogue", "Fashion").unwrap();
    registry.add_article(jane, vogue, "Spring Looks").unwrap();

    let authors = registry
        .magazine_view(vogue)
        .unwrap()
        .contributing_authors()
        .unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].id(), jane);
}

#[test]
fn reassigning_magazine_moves_the_article_immediately() {
    let mut registry = registry();
    let jane = registry.create_author("Jane").unwrap();
    let vogue = registry.create_magazine("Vogue", "Fashion").unwrap();
    let wired = registry.create_magazine("Wired", "Technology").unwrap();
    let article = registry.add_article(jane, vogue, "Spring Looks").unwrap();

    registry.reassign_magazine(article, wired).unwrap();

    assert_eq!(registry.magazine_view(vogue).unwrap().article_titles(), None);
    assert_eq!(
        registry.magazine_view(wired).unwrap().articles()[0].id(),
        article
    );
    let view = registry.author_view(jane).unwrap();
    let topics: Vec<_> = view
        .topic_areas()
        .unwrap()
        .iter()
        .map(|c| c.as_str())
        .collect();
    assert_eq!(topics, vec!["Technology"]);
}

#[test]
fn top_publisher_is_none_without_magazines_or_articles() {
    let mut registry = registry();
    assert!(registry.top_publisher().is_none());

    registry.create_magazine("Vogue", "Fashion").unwrap();
    registry.create_magazine("Wired", "Technology").unwrap();
    registry.create_author("Jane").unwrap();
    assert!(registry.top_publisher().is_none());
}

#[test]
fn top_publisher_has_the_most_articles() {
    let mut registry = registry();
    let jane = registry.create_author("Jane").unwrap();
    let vogue = registry.create_magazine("Vogue", "Fashion").unwrap();
    let wired = registry.create_magazine("Wired", "Technology").unwrap();
    publish_many(&mut registry, jane, vogue, 1);
    publish_many(&mut registry, jane, wired, 2);

    assert_eq!(registry.top_publisher().map(|m| m.id()), Some(wired));
}

#[test]
fn top_publisher_ties_go_to_the_earliest_magazine() {
    let mut registry = registry();
    let jane = registry.create_author("Jane").unwrap();
    let vogue = registry.create_magazine("Vogue", "Fashion").unwrap();
    let wired = registry.create_magazine("Wired", "Technology").unwrap();
    publish_many(&mut registry, jane, wired, 2);
    publish_many(&mut registry, jane, vogue, 2);

    assert_eq!(registry.top_publisher().map(|m| m.id()), Some(vogue));
}

#[test]
fn unknown_magazine_view_is_an_error() {
    let registry = registry();
    assert_eq!(
        registry.magazine_view(MagazineId(3)).unwrap_err(),
        ValidationError::UnknownMagazine(MagazineId(3))
    );
}

#[test]
fn same_name_magazines_are_distinct_entities() {
    let mut registry = registry();
    let jane = registry.create_author("Jane").unwrap();
    let first = registry.create_magazine("Vogue", "Fashion").unwrap();
    let second = registry.create_magazine("Vogue", "Fashion").unwrap();
    publish_many(&mut registry, jane, first, 3);
    registry.add_article(jane, second, "Lone Piece").unwrap();

    let author = registry.author_view(jane).unwrap();
    assert_eq!(author.magazines().len(), 2);
    let topics: Vec<_> = author
        .topic_areas()
        .unwrap()
        .iter()
        .map(|c| c.as_str())
        .collect();
    assert_eq!(topics, vec!["Fashion"]);

    let first_view = registry.magazine_view(first).unwrap();
    let contributing: Vec<_> = first_view
        .contributing_authors()
        .unwrap()
        .iter()
        .map(|a| a.name().as_str())
        .collect();
    assert_eq!(contributing, vec!["Jane"]);
    assert_eq!(
        registry.magazine_view(second).unwrap().contributing_authors(),
        None
    );
    assert_eq!(registry.top_publisher().map(|m| m.id()), Some(first));
}
