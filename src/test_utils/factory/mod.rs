mod grant;
mod link;
mod tag;

pub use grant::*;
pub use link::*;
pub use tag::*;
