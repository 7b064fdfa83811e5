use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct TagsListResponse {
    pub success: bool,
    pub tags: Vec<String>,
    pub count: usize,
}
