use std::collections::HashMap;

use stresscheck::dataset::parse_dataset;
use stresscheck::model::Dataset;
use stresscheck::score::{score_category, score_total};

fn sample_dataset() -> Dataset {
    parse_dataset(
        r#"
title: Sample
questions:
  - id: 1
    type: number
    text: Level
    min: 1
    max: 10
  - id: 2
    type: radio
    text: Pick one
    options:
      - { value: a, label: A, points: 2 }
      - { value: b, label: B, points: 5 }
categories:
  - id: first-only
    name: First only
    questions: [1]
    max_points: 10
  - id: second-only
    name: Second only
    questions: [2]
    max_points: 5
results:
  - range: [0, 5]
    description: Low
  - range: [6, 10]
    description: Mid
"#,
    )
    .unwrap()
}

fn answers(pairs: &[(u32, &str)]) -> HashMap<u32, String> {
    pairs
        .iter()
        .map(|&(id, raw)| (id, raw.to_string()))
        .collect()
}

#[test]
fn test_category_with_numeric_question() {
    let dataset = sample_dataset();
    let answers = answers(&[(1, "5")]);

    let score = score_category(&dataset, &answers, &dataset.categories[0]);
    assert_eq!(score.points, 5);
    assert_eq!(score.max_points, 10);
    assert_eq!(score.percentage, 50.0);
}

#[test]
fn test_radio_option_contributes_its_points() {
    let dataset = sample_dataset();
    let answers = answers(&[(1, "2"), (2, "b")]);

    let category = score_category(&dataset, &answers, &dataset.categories[1]);
    assert_eq!(category.points, 5);

    let total = score_total(&dataset, &answers);
    assert_eq!(total.points, 7);
}

#[test]
fn test_total_maps_to_band() {
    let dataset = sample_dataset();
    let answers = answers(&[(1, "5"), (2, "a")]);

    let total = score_total(&dataset, &answers);
    assert_eq!(total.points, 7);
    assert_eq!(total.description.as_deref(), Some("Mid"));
}

#[test]
fn test_total_outside_all_bands_has_no_description() {
    let dataset = sample_dataset();
    let answers = answers(&[(1, "10"), (2, "b")]);

    let total = score_total(&dataset, &answers);
    assert_eq!(total.points, 15);
    assert_eq!(total.description, None);
}

#[test]
fn test_band_boundaries_are_inclusive() {
    let dataset = sample_dataset();

    let total = score_total(&dataset, &answers(&[(1, "5")]));
    assert_eq!(total.description.as_deref(), Some("Low"));

    let total = score_total(&dataset, &answers(&[(1, "6")]));
    assert_eq!(total.description.as_deref(), Some("Mid"));
}

#[test]
fn test_first_matching_band_wins_on_overlap() {
    let dataset = parse_dataset(
        r#"
title: Overlap
questions:
  - id: 1
    type: number
    text: Level
    min: 1
    max: 10
categories: []
results:
  - range: [0, 10]
    description: First
  - range: [5, 15]
    description: Second
"#,
    )
    .unwrap();

    let total = score_total(&dataset, &answers(&[(1, "7")]));
    assert_eq!(total.description.as_deref(), Some("First"));
}

#[test]
fn test_unparseable_numeric_answer_scores_zero() {
    let dataset = sample_dataset();
    let answers = answers(&[(1, "abc"), (2, "b")]);

    let category = score_category(&dataset, &answers, &dataset.categories[0]);
    assert_eq!(category.points, 0);

    let total = score_total(&dataset, &answers);
    assert_eq!(total.points, 5);
}

#[test]
fn test_unmatched_option_scores_zero() {
    let dataset = sample_dataset();
    let answers = answers(&[(2, "z")]);

    let category = score_category(&dataset, &answers, &dataset.categories[1]);
    assert_eq!(category.points, 0);
    assert_eq!(score_total(&dataset, &answers).points, 0);
}

#[test]
fn test_missing_answers_score_zero() {
    let dataset = sample_dataset();
    let answers = HashMap::new();

    let category = score_category(&dataset, &answers, &dataset.categories[0]);
    assert_eq!(category.points, 0);
    assert_eq!(category.percentage, 0.0);

    let total = score_total(&dataset, &answers);
    assert_eq!(total.points, 0);
    assert_eq!(total.description.as_deref(), Some("Low"));
}

#[test]
fn test_answer_for_unknown_question_scores_zero() {
    let dataset = sample_dataset();
    let answers = answers(&[(1, "3"), (99, "b")]);

    let total = score_total(&dataset, &answers);
    assert_eq!(total.points, 3);
}

#[test]
fn test_category_referencing_unknown_question_degrades() {
    let dataset = parse_dataset(
        r#"
title: Dangling
questions:
  - id: 1
    type: number
    text: Level
    min: 1
    max: 10
categories:
  - id: dangling
    name: Dangling
    questions: [1, 42]
    max_points: 10
results: []
"#,
    )
    .unwrap();

    let answers = answers(&[(1, "4")]);
    let score = score_category(&dataset, &answers, &dataset.categories[0]);
    assert_eq!(score.points, 4);
    assert_eq!(score.percentage, 40.0);
}

#[test]
fn test_zero_max_points_yields_zero_percentage() {
    let dataset = parse_dataset(
        r#"
title: Empty max
questions:
  - id: 1
    type: number
    text: Level
    min: 1
    max: 10
categories:
  - id: empty
    name: Empty
    questions: [1]
    max_points: 0
results: []
"#,
    )
    .unwrap();

    let answers = answers(&[(1, "7")]);
    let score = score_category(&dataset, &answers, &dataset.categories[0]);
    assert_eq!(score.points, 7);
    assert_eq!(score.max_points, 0);
    assert_eq!(score.percentage, 0.0);
}
