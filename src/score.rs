use std::collections::HashMap;

use crate::model::{Category, Dataset, QuestionKind};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub points: i64,
    pub max_points: i64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TotalScore {
    pub points: i64,
    pub description: Option<String>,
}

/// Sum the contributions of a category's questions and relate them to
/// the category maximum. A zero `max_points` yields 0% rather than a
/// division error.
pub fn score_category(
    dataset: &Dataset,
    answers: &HashMap<u32, String>,
    category: &Category,
) -> CategoryScore {
    let points: i64 = category
        .questions
        .iter()
        .map(|&id| contribution(dataset, answers, id))
        .sum();

    let percentage = if category.max_points == 0 {
        0.0
    } else {
        points as f64 / category.max_points as f64 * 100.0
    };

    CategoryScore {
        points,
        max_points: category.max_points,
        percentage,
    }
}

/// Sum the contributions of every stored answer, regardless of category
/// membership, and look up the first outcome band containing the total.
pub fn score_total(dataset: &Dataset, answers: &HashMap<u32, String>) -> TotalScore {
    let points: i64 = answers
        .keys()
        .map(|&id| contribution(dataset, answers, id))
        .sum();

    let description = dataset
        .results
        .iter()
        .find(|band| band.contains(points))
        .map(|band| band.description.clone());

    TotalScore {
        points,
        description,
    }
}

/// Per-question score contribution. Question 1's raw answer is its own
/// contribution; every other question scores the points of the option
/// matching the stored value. Anything missing or unmatched is 0.
fn contribution(dataset: &Dataset, answers: &HashMap<u32, String>, id: u32) -> i64 {
    let Some(raw) = answers.get(&id) else {
        return 0;
    };

    if id == 1 {
        return raw.trim().parse().unwrap_or(0);
    }

    let Some(question) = dataset.question(id) else {
        return 0;
    };
    let QuestionKind::Radio { ref options } = question.kind else {
        return 0;
    };
    options
        .iter()
        .find(|opt| opt.value == *raw)
        .map(|opt| opt.points)
        .unwrap_or(0)
}
