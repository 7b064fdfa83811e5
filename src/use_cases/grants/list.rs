use db_adapters::grant_adapter::{GrantAdapter, GrantQuery};

use crate::{
    error_500,
    grants::types::{GrantVisible, GrantsListResponse},
    UseCaseError,
};

pub async fn list_grants<'a>(
    grant_adapter: GrantAdapter<'a>,
) -> Result<GrantsListResponse, UseCaseError> {
    grant_adapter
        .get_all_with_tags()
        .await
        .map(|grants| {
            let grants: Vec<GrantVisible> = grants.into_iter().map(GrantVisible::from).collect();
            GrantsListResponse {
                success: true,
                count: grants.len(),
                grants,
            }
        })
        .map_err(error_500)
}
