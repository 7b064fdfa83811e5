use db_adapters::grant_adapter::{GrantAdapter, GrantQuery};

use crate::{
    error_500,
    grants::types::{GrantSearchRequest, GrantSearchResponse, GrantVisible},
    UseCaseError,
};

/// A grant matches when it carries at least one of the requested tags; an
/// empty tag list returns every grant.
pub async fn search_grants<'a>(
    req: GrantSearchRequest,
    grant_adapter: GrantAdapter<'a>,
) -> Result<GrantSearchResponse, UseCaseError> {
    let search_tags = req.tags;
    let grants = if search_tags.is_empty() {
        grant_adapter.get_all_with_tags().await
    } else {
        grant_adapter
            .search_by_tag_names(search_tags.clone())
            .await
    };

    grants
        .map(|grants| {
            let grants: Vec<GrantVisible> = grants.into_iter().map(GrantVisible::from).collect();
            GrantSearchResponse {
                success: true,
                count: grants.len(),
                grants,
                search_tags,
            }
        })
        .map_err(error_500)
}
