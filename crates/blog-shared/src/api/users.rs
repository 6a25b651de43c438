use serde::{Deserialize, Serialize};

use crate::models::{LoginUser, NewUser, UpdateUser, UserWithToken};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub user: NewUser,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub user: LoginUser,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub user: UpdateUser,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserWithToken,
}
