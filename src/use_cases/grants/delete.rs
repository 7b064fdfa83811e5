use db_adapters::grant_adapter::{GrantAdapter, GrantMutation, GrantQuery};

use crate::{error_500, grants::types::GrantDeletedResponse, UseCaseError};

pub async fn delete_grant<'a>(
    grant_id: i32,
    grant_adapter: GrantAdapter<'a>,
) -> Result<GrantDeletedResponse, UseCaseError> {
    let grant = match grant_adapter.clone().get_by_id(grant_id).await {
        Ok(Some(grant)) => grant,
        Ok(None) => return Err(UseCaseError::NotFound("Grant not found".to_string())),
        Err(e) => return Err(error_500(e)),
    };

    grant_adapter
        .delete(grant)
        .await
        .map(|_| GrantDeletedResponse {
            success: true,
            message: "Grant deleted successfully".to_string(),
        })
        .map_err(error_500)
}
