use std::fmt::Debug;

pub mod grants;
pub mod tagging;
pub mod tags;

#[derive(Debug)]
pub enum UseCaseError {
    BadRequest(String),          // 400
    NotFound(String),            // 404
    InternalServerError(String), // 500
}

pub(crate) fn error_500(e: impl Debug) -> UseCaseError {
    UseCaseError::InternalServerError(format!("{:?}", e))
}
