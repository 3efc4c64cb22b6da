use serde::{Deserialize, Serialize};

/// Hard cap on returned documents. The backend's default order decides which
/// 1000 we get when more exist; there is no pagination beyond this.
pub const MAX_HITS: u32 = 1000;

#[derive(Debug, Serialize)]
pub struct SearchRequest {
    pub size: u32,
    pub query: Query,
}

#[derive(Debug, Serialize)]
pub struct Query {
    #[serde(rename = "bool")]
    pub boolean: BoolQuery,
}

#[derive(Debug, Serialize)]
pub struct BoolQuery {
    pub must: Vec<MustClause>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MustClause {
    Wildcard { wildcard: PostedPattern },
    Term { term: BranchTerm },
}

#[derive(Debug, Serialize)]
pub struct PostedPattern {
    #[serde(rename = "posted.keyword")]
    pub posted: String,
}

#[derive(Debug, Serialize)]
pub struct BranchTerm {
    #[serde(rename = "branch.keyword")]
    pub branch: String,
}

impl SearchRequest {
    /// Prefix match on the posted timestamp ANDed with an exact branch match.
    pub fn for_branch_and_date(branch: &str, date: &str) -> Self {
        Self {
            size: MAX_HITS,
            query: Query {
                boolean: BoolQuery {
                    must: vec![
                        MustClause::Wildcard {
                            wildcard: PostedPattern {
                                posted: format!("{date}*"),
                            },
                        },
                        MustClause::Term {
                            term: BranchTerm {
                                branch: branch.to_string(),
                            },
                        },
                    ],
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct HitsEnvelope {
    pub hits: Vec<QueryHit>,
}

/// One matched document, as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source", default)]
    pub source: HitSource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitSource {
    #[serde(default)]
    pub suite: Option<String>,
    #[serde(default)]
    pub results: HitResults,
}

/// Per-run job counts. Absent counts mean zero jobs in that state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitResults {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pass: u64,
    #[serde(default)]
    pub fail: u64,
    #[serde(default)]
    pub dead: u64,
    #[serde(default)]
    pub waiting: u64,
    #[serde(default)]
    pub queued: u64,
}
