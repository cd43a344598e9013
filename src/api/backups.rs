//! Backup adapters.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::Page;

impl Api {
    /// `GET /backups`, optionally narrowed to one instance.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_backups(&self, instance_id: Option<&str>, page: &Page) -> ApiResult {
        self.call(Method::Get, "backups")
            .param_opt("instance_id", instance_id)
            .page(page)
            .send()
            .await
    }

    /// `GET /backups/{backup-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_backup(&self, backup_id: &str) -> ApiResult {
        self.call(Method::Get, "backups/{backup-id}")
            .assign("backup-id", backup_id)
            .send()
            .await
    }
}
