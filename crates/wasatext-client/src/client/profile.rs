//! User profile, search and liveness endpoints.

use serde::{Deserialize, Serialize};
use wasatext_core::{ConversationPreview, UserSummary};

use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::request::Request;
use crate::url::{LIVENESS_PATH, PROFILE_PICTURE_PATH, USER_PROFILE_PATH, USERS_PATH};

use super::ApiClient;

#[derive(Serialize)]
struct ChangeUsernameRequest<'a> {
    newusername: &'a str,
}

#[derive(Deserialize)]
struct ChangeUsernameResponse {
    newusername: String,
}

#[derive(Serialize, Deserialize)]
struct ProfilePicture<S> {
    photo_url: S,
}

impl<B: HttpBackend> ApiClient<B> {
    /// Users whose name contains `query`.
    pub async fn search_users(&self, query: &str) -> ClientResult<Vec<UserSummary>> {
        let request = Request::get(USERS_PATH).query("username", query);
        let users: Option<Vec<UserSummary>> = self.call(request).await?;
        Ok(users.unwrap_or_default())
    }

    /// Chat list of the signed-in user.
    pub async fn list_conversations(&self) -> ClientResult<Vec<ConversationPreview>> {
        let chats: Option<Vec<ConversationPreview>> =
            self.call(Request::get(USER_PROFILE_PATH)).await?;
        Ok(chats.unwrap_or_default())
    }

    /// Rename the signed-in user; returns the name the backend stored.
    pub async fn change_username(&self, new_username: &str) -> ClientResult<String> {
        let request = Request::put(USER_PROFILE_PATH).json(&ChangeUsernameRequest {
            newusername: new_username,
        })?;
        let response: ChangeUsernameResponse = self.call(request).await?;
        Ok(response.newusername)
    }

    /// Replace the profile picture; returns the stored URL.
    pub async fn change_profile_picture(&self, photo_url: &str) -> ClientResult<String> {
        let request =
            Request::put(PROFILE_PICTURE_PATH).json(&ProfilePicture { photo_url })?;
        let response: ProfilePicture<String> = self.call(request).await?;
        Ok(response.photo_url)
    }

    /// `GET /liveness`; any 2xx counts as alive.
    pub async fn liveness(&self) -> ClientResult<()> {
        self.send(Request::get(LIVENESS_PATH)).await?;
        Ok(())
    }
}
