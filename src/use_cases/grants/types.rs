use chrono::{DateTime, FixedOffset};
use entities::{grant, tag};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct GrantPayload {
    #[serde(default)]
    pub grant_name: Option<String>,
    #[serde(default)]
    pub grant_description: Option<String>,
}

/// POST /api/grants accepts a single grant object or an array of them.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(untagged)]
pub enum GrantCreateRequest {
    Single(GrantPayload),
    Batch(Vec<GrantPayload>),
}

impl GrantCreateRequest {
    pub fn into_entries(self) -> Vec<GrantPayload> {
        match self {
            GrantCreateRequest::Single(payload) => vec![payload],
            GrantCreateRequest::Batch(payloads) => payloads,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct GrantVisible {
    pub id: i32,
    pub grant_name: String,
    pub grant_description: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<(grant::Model, Vec<tag::Model>)> for GrantVisible {
    fn from((grant, tags): (grant::Model, Vec<tag::Model>)) -> Self {
        Self {
            id: grant.id,
            grant_name: grant.name,
            grant_description: grant.description,
            tags: tags.into_iter().map(|tag| tag.name).collect(),
            created_at: grant.created_at,
            updated_at: grant.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GrantsListResponse {
    pub success: bool,
    pub grants: Vec<GrantVisible>,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GrantsCreatedResponse {
    pub success: bool,
    pub message: String,
    pub grants_added: Vec<GrantVisible>,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GrantResponse {
    pub success: bool,
    pub grant: GrantVisible,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GrantDeletedResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct GrantSearchRequest {
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GrantSearchResponse {
    pub success: bool,
    pub grants: Vec<GrantVisible>,
    pub count: usize,
    pub search_tags: Vec<String>,
}
