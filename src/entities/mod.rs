pub mod grant;
pub mod grants_tags;
pub mod tag;
