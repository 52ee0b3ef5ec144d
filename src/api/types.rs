use serde::Deserialize;

use crate::error::{Result, StatsError};

// GraphQL envelope
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQLError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

// User session progress types
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProgressData {
    pub all_questions_count: Option<Vec<DifficultyCount>>,
    pub matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUser {
    pub submit_stats: Option<SubmitStats>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStats {
    pub ac_submission_num: Vec<DifficultyCount>,
    pub total_submission_num: Vec<DifficultyCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DifficultyCount {
    pub difficulty: String,
    pub count: u32,
    #[serde(default)]
    pub submissions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    All,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::All,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Difficulty::All => "All",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DifficultyBucket {
    pub total_count: u32,
    pub solved_count: u32,
    pub total_submissions: u32,
}

/// Statistics for one user, one bucket per [`Difficulty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub username: String,
    pub buckets: [DifficultyBucket; 4],
}

impl UserStats {
    pub fn bucket(&self, difficulty: Difficulty) -> &DifficultyBucket {
        &self.buckets[difficulty.index()]
    }

    /// Builds stats from a decoded response, matching every bucket by its
    /// `difficulty` tag so the order the endpoint returns them in does not matter.
    pub fn from_response(username: &str, resp: GraphQLResponse<SessionProgressData>) -> Result<Self> {
        let first_error = resp.errors.into_iter().next().map(|e| e.message);

        let data = resp.data.ok_or_else(|| {
            StatsError::shape(first_error.clone().unwrap_or_else(|| "No data in response".to_string()))
        })?;

        let submit_stats = data
            .matched_user
            .and_then(|u| u.submit_stats)
            .ok_or_else(|| {
                StatsError::shape(
                    first_error
                        .clone()
                        .unwrap_or_else(|| format!("User \"{username}\" not found")),
                )
            })?;

        let totals = data
            .all_questions_count
            .ok_or_else(|| StatsError::shape("No question counts in response"))?;

        let mut buckets = [DifficultyBucket::default(); 4];
        for difficulty in Difficulty::ALL {
            let total = find_bucket(&totals, difficulty, "allQuestionsCount")?;
            let solved = find_bucket(&submit_stats.ac_submission_num, difficulty, "acSubmissionNum")?;
            let submitted = find_bucket(
                &submit_stats.total_submission_num,
                difficulty,
                "totalSubmissionNum",
            )?;

            buckets[difficulty.index()] = DifficultyBucket {
                total_count: total.count,
                solved_count: solved.count,
                total_submissions: submitted.submissions,
            };
        }

        Ok(Self {
            username: username.to_string(),
            buckets,
        })
    }
}

fn find_bucket<'a>(
    items: &'a [DifficultyCount],
    difficulty: Difficulty,
    field: &str,
) -> Result<&'a DifficultyCount> {
    items
        .iter()
        .find(|d| d.difficulty == difficulty.tag())
        .ok_or_else(|| StatsError::shape(format!("Missing {} entry in {field}", difficulty.tag())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GraphQLResponse<SessionProgressData> {
        serde_json::from_value(value).unwrap()
    }

    fn counts(values: [(&str, u32, u32); 4]) -> serde_json::Value {
        json!(
            values
                .iter()
                .map(|(d, c, s)| json!({ "difficulty": d, "count": c, "submissions": s }))
                .collect::<Vec<_>>()
        )
    }

    #[test]
    fn buckets_are_matched_by_tag() {
        let resp = parse(json!({
            "data": {
                "allQuestionsCount": [
                    { "difficulty": "Hard", "count": 700 },
                    { "difficulty": "All", "count": 3000 },
                    { "difficulty": "Medium", "count": 1500 },
                    { "difficulty": "Easy", "count": 800 }
                ],
                "matchedUser": {
                    "submitStats": {
                        "acSubmissionNum": counts([("Easy", 100, 110), ("All", 150, 170), ("Hard", 10, 12), ("Medium", 40, 48)]),
                        "totalSubmissionNum": counts([("All", 160, 200), ("Easy", 105, 120), ("Medium", 44, 60), ("Hard", 11, 20)])
                    }
                }
            }
        }));

        let stats = UserStats::from_response("alice", resp).unwrap();
        assert_eq!(stats.username, "alice");
        assert_eq!(
            *stats.bucket(Difficulty::Easy),
            DifficultyBucket { total_count: 800, solved_count: 100, total_submissions: 120 }
        );
        assert_eq!(stats.bucket(Difficulty::All).total_submissions, 200);
        assert_eq!(stats.bucket(Difficulty::Hard).total_count, 700);
        assert_eq!(stats.bucket(Difficulty::Medium).solved_count, 40);
    }

    #[test]
    fn null_matched_user_uses_graphql_error() {
        let resp = parse(json!({
            "errors": [{ "message": "That user does not exist." }],
            "data": {
                "allQuestionsCount": [{ "difficulty": "All", "count": 1 }],
                "matchedUser": null
            }
        }));

        let err = UserStats::from_response("ghost", resp).unwrap_err();
        assert_eq!(err.to_string(), "That user does not exist.");
    }

    #[test]
    fn null_matched_user_without_errors() {
        let resp = parse(json!({
            "data": { "allQuestionsCount": [], "matchedUser": null }
        }));

        let err = UserStats::from_response("ghost", resp).unwrap_err();
        assert!(matches!(err, StatsError::Shape { .. }));
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn missing_bucket_is_a_shape_error() {
        let resp = parse(json!({
            "data": {
                "allQuestionsCount": [{ "difficulty": "All", "count": 3000 }],
                "matchedUser": {
                    "submitStats": { "acSubmissionNum": [], "totalSubmissionNum": [] }
                }
            }
        }));

        let err = UserStats::from_response("alice", resp).unwrap_err();
        assert!(err.to_string().contains("acSubmissionNum"));
    }
}
