use serde::{Deserialize, Serialize};

/// Query string for `/api/recent-problems` and `/api/today-problems`.
/// `user` is optional here so its absence can be answered with a 400 instead
/// of axum's default rejection.
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user: Option<String>,
    pub count: Option<usize>,
}

/// Wire shape kept compatible with the existing frontend: camelCase keys.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProblemRef {
    #[serde(rename = "problemId")]
    pub problem_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecentProblemsResponse {
    pub items: Vec<ProblemRef>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayProblemsResponse {
    pub items: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SolvedResponse {
    pub solved: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
