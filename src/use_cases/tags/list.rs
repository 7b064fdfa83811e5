use db_adapters::tag_adapter::{TagAdapter, TagQuery};

use crate::{error_500, tags::types::TagsListResponse, UseCaseError};

pub async fn list_tags<'a>(tag_adapter: TagAdapter<'a>) -> Result<TagsListResponse, UseCaseError> {
    tag_adapter
        .get_all()
        .await
        .map(|tags| {
            let tags: Vec<String> = tags.into_iter().map(|tag| tag.name).collect();
            TagsListResponse {
                success: true,
                count: tags.len(),
                tags,
            }
        })
        .map_err(error_500)
}
