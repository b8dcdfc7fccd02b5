//! Group endpoints.

use serde::Serialize;
use wasatext_core::StatusMessage;

use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::request::Request;
use crate::url::{GROUPS_PATH, group_path, group_photo_path};

use super::ApiClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddToGroupRequest<'a> {
    group_name: &'a str,
    names: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenameGroupRequest<'a> {
    new_group_name: &'a str,
}

#[derive(Serialize)]
struct GroupPhotoRequest<'a> {
    #[serde(rename = "newPhotoURL")]
    new_photo_url: &'a str,
}

impl<B: HttpBackend> ApiClient<B> {
    /// Add `members` to `group`. The backend creates the group if it does
    /// not exist yet, with the signed-in user as a member.
    pub async fn add_to_group(&self, group: &str, members: &[String]) -> ClientResult<StatusMessage> {
        let request = Request::put(GROUPS_PATH).json(&AddToGroupRequest {
            group_name: group,
            names: members,
        })?;
        self.call(request).await
    }

    pub async fn change_group_name(&self, group: &str, new_name: &str) -> ClientResult<StatusMessage> {
        let request = Request::put(group_path(group)).json(&RenameGroupRequest {
            new_group_name: new_name,
        })?;
        self.call(request).await
    }

    pub async fn leave_group(&self, group: &str) -> ClientResult<StatusMessage> {
        self.call(Request::delete(group_path(group))).await
    }

    pub async fn change_group_picture(
        &self,
        group: &str,
        photo_url: &str,
    ) -> ClientResult<StatusMessage> {
        let request = Request::put(group_photo_path(group)).json(&GroupPhotoRequest {
            new_photo_url: photo_url,
        })?;
        self.call(request).await
    }
}
