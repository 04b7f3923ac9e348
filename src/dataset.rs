use std::fs;
use std::path::Path;

use crate::model::{Dataset, QuestionKind};

pub fn load_dataset(path: &Path) -> Result<Dataset, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read dataset file {}: {}", path.display(), e))?;
    parse_dataset(&content)
}

/// Deserialize a dataset document. Only shape errors fail here; a
/// category referencing an unknown question or outcome bands with gaps
/// load fine and degrade to zero contributions at scoring time.
pub fn parse_dataset(content: &str) -> Result<Dataset, String> {
    serde_yaml::from_str(content).map_err(|e| format!("Invalid dataset: {}", e))
}

/// Human-readable report for `--check`: counts, score structure and the
/// degradations the scorer would silently apply.
pub fn dataset_summary(dataset: &Dataset) -> String {
    let mut out = String::new();

    out.push_str(&format!("Assessment: {}\n", dataset.title));
    out.push_str(&format!("Questions: {}\n", dataset.questions.len()));
    for q in &dataset.questions {
        match &q.kind {
            QuestionKind::Number { min, max } => {
                out.push_str(&format!("  {}. number [{}..{}]\n", q.id, min, max));
            }
            QuestionKind::Radio { options } => {
                out.push_str(&format!("  {}. choice ({} options)\n", q.id, options.len()));
            }
        }
    }

    out.push_str("Categories:\n");
    for c in &dataset.categories {
        out.push_str(&format!(
            "  {} ({} questions, max {} points)\n",
            c.name,
            c.questions.len(),
            c.max_points
        ));
    }

    out.push_str("Outcome bands:\n");
    for band in &dataset.results {
        out.push_str(&format!(
            "  {}..{}: {}\n",
            band.range[0], band.range[1], band.description
        ));
    }

    for warning in dataset_warnings(dataset) {
        out.push_str(&format!("Warning: {}\n", warning));
    }

    out
}

/// Configuration problems the scorer degrades through instead of
/// rejecting: dangling question references, zero category maximums, and
/// achievable totals no outcome band covers.
pub fn dataset_warnings(dataset: &Dataset) -> Vec<String> {
    let mut warnings = Vec::new();

    for c in &dataset.categories {
        for &id in &c.questions {
            if dataset.question(id).is_none() {
                warnings.push(format!(
                    "category {:?} references unknown question {}",
                    c.id, id
                ));
            }
        }
        if c.max_points == 0 {
            warnings.push(format!("category {:?} has zero max points", c.id));
        }
    }

    let (lo, hi) = achievable_range(dataset);
    let mut bands: Vec<[i64; 2]> = dataset.results.iter().map(|b| b.range).collect();
    bands.sort();

    let mut next = lo;
    for [start, end] in bands {
        if next > hi {
            break;
        }
        if start > next {
            warnings.push(format!(
                "no outcome band covers totals {}..{}",
                next,
                start.saturating_sub(1)
            ));
        }
        next = next.max(end.saturating_add(1));
    }
    if next <= hi {
        warnings.push(format!("no outcome band covers totals {}..{}", next, hi));
    }

    warnings
}

/// Total-score range reachable through the declared question metadata.
fn achievable_range(dataset: &Dataset) -> (i64, i64) {
    let mut lo = 0;
    let mut hi = 0;
    for q in &dataset.questions {
        match &q.kind {
            QuestionKind::Number { min, max } => {
                lo += min;
                hi += max;
            }
            QuestionKind::Radio { options } => {
                lo += options.iter().map(|o| o.points).min().unwrap_or(0);
                hi += options.iter().map(|o| o.points).max().unwrap_or(0);
            }
        }
    }
    (lo, hi)
}
