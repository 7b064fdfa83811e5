use db_adapters::grant_adapter::{GrantAdapter, GrantQuery};

use crate::{
    error_500,
    grants::types::{GrantResponse, GrantVisible},
    UseCaseError,
};

pub async fn get_grant<'a>(
    grant_id: i32,
    grant_adapter: GrantAdapter<'a>,
) -> Result<GrantResponse, UseCaseError> {
    match grant_adapter.get_by_id_with_tags(grant_id).await {
        Ok(Some(grant)) => Ok(GrantResponse {
            success: true,
            grant: GrantVisible::from(grant),
        }),
        Ok(None) => Err(UseCaseError::NotFound("Grant not found".to_string())),
        Err(e) => Err(error_500(e)),
    }
}
