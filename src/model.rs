use serde::{Deserialize, Serialize};

/// The whole configuration collaborator: questions, categories and
/// outcome bands, loaded from one YAML document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub title: String,
    pub questions: Vec<Question>,
    pub categories: Vec<Category>,
    pub results: Vec<ResultBand>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// 1-based, dense: position in `questions` is `id - 1`.
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    Number { min: i64, max: i64 },
    Radio { options: Vec<ChoiceOption> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
    pub points: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Question ids whose contributions are summed for this category.
    pub questions: Vec<u32>,
    pub max_points: i64,
}

/// Inclusive score interval mapped to an outcome description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultBand {
    pub range: [i64; 2],
    pub description: String,
}

impl Dataset {
    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

impl ResultBand {
    pub fn contains(&self, points: i64) -> bool {
        points >= self.range[0] && points <= self.range[1]
    }
}
