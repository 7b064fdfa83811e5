use db_adapters::grant_adapter::{CreateGrantParams, GrantAdapter, GrantMutation};

use crate::{
    error_500,
    grants::types::{GrantCreateRequest, GrantVisible, GrantsCreatedResponse},
    tagging::TaggingService,
    UseCaseError,
};

pub async fn create_grants<'a>(
    req: GrantCreateRequest,
    tagging: &TaggingService,
    grant_adapter: GrantAdapter<'a>,
) -> Result<GrantsCreatedResponse, UseCaseError> {
    let mut params = Vec::new();
    for entry in req.into_entries() {
        // Entries missing either field are dropped; only the aggregate count
        // is reported back.
        let (name, description) = match (entry.grant_name, entry.grant_description) {
            (Some(name), Some(description)) if !name.is_empty() && !description.is_empty() => {
                (name, description)
            }
            _ => continue,
        };
        let tag_names = tagging.assign_tags(&name, &description).await;
        params.push(CreateGrantParams {
            name,
            description,
            tag_names,
        });
    }

    if params.is_empty() {
        return Err(UseCaseError::BadRequest(
            "No valid grants provided.".to_string(),
        ));
    }

    let created = grant_adapter
        .create_many(params)
        .await
        .map_err(error_500)?;
    let grants_added: Vec<GrantVisible> = created.into_iter().map(GrantVisible::from).collect();

    Ok(GrantsCreatedResponse {
        success: true,
        message: format!("Successfully added {} grant(s)", grants_added.len()),
        count: grants_added.len(),
        grants_added,
    })
}
