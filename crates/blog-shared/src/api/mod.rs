mod articles;
mod errors;
mod users;

pub use articles::*;
pub use errors::*;
pub use users::*;
