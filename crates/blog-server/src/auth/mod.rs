mod header;
mod jwt;
mod middleware;

pub use header::{token_from_header, HeaderFormatError};
pub use jwt::{AuthData, Claims, TokenService};
pub use middleware::{auth_middleware, AuthUser};
