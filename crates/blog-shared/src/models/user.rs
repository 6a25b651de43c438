use serde::{Deserialize, Serialize};

/// Stored user record. The login column is exposed as `username` everywhere
/// outside the database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    pub id: i32,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "login"))]
    pub username: String,
    pub email: String,
    pub bio: String,
    pub image: String,
    pub password: String,
}

impl User {
    pub fn profile(&self) -> Profile {
        Profile {
            username: self.username.clone(),
            bio: self.bio.clone(),
            image: self.image.clone(),
        }
    }
}

/// Public projection of a user, embedded in article responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub bio: String,
    pub image: String,
}

/// Registration payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginUser {
    pub username: String,
    pub password: String,
}

/// Sparse profile update. `None` means "leave the stored value alone";
/// `Some("")` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl UpdateUser {
    /// Applies the present fields onto `user`.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(username) = &self.username {
            user.username = username.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(password) = &self.password {
            user.password = password.clone();
        }
        if let Some(bio) = &self.bio {
            user.bio = bio.clone();
        }
        if let Some(image) = &self.image {
            user.image = image.clone();
        }
    }
}

/// User as returned to the client, together with a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithToken {
    pub username: String,
    pub email: String,
    pub bio: String,
    pub image: String,
    pub token: String,
}

impl UserWithToken {
    pub fn new(user: User, token: String) -> Self {
        Self {
            username: user.username,
            email: user.email,
            bio: user.bio,
            image: user.image,
            token,
        }
    }
}
