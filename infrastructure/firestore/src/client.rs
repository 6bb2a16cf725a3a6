use std::collections::HashMap;
use std::sync::Arc;

use reqwest::StatusCode;
use thiserror::Error;

use crate::document::{Document, ListDocumentsResponse, Value};
use crate::token::{TokenError, TokenProvider};

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const PAGE_SIZE: u32 = 300;

#[derive(Error, Debug)]
pub enum FirestoreError {
    #[error("firestore.unauthorized")]
    Unauthorized(#[from] TokenError),
    #[error("firestore.request_failed")]
    RequestFailed,
    #[error("firestore.status_{0}")]
    Status(u16),
    #[error("firestore.malformed_response")]
    MalformedResponse,
}

/// Thin client over the Firestore v1 REST API, authorized with tokens from
/// the shared `TokenProvider`. Cheap to clone; repositories each hold one.
#[derive(Clone)]
pub struct FirestoreClient {
    http: reqwest::Client,
    tokens: Arc<TokenProvider>,
    documents_url: String,
}

impl FirestoreClient {
    pub fn new(project_id: &str, tokens: Arc<TokenProvider>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            http,
            tokens,
            documents_url: format!(
                "{FIRESTORE_BASE_URL}/projects/{project_id}/databases/(default)/documents"
            ),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.documents_url, path)
    }

    /// Fetches a single document. A 404 reads as `None`.
    pub async fn get_document(&self, path: &str) -> Result<Option<Document>, FirestoreError> {
        let token = self.tokens.access_token().await?;

        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|_| FirestoreError::RequestFailed)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(FirestoreError::Status(response.status().as_u16()));
        }

        let document = response
            .json()
            .await
            .map_err(|_| FirestoreError::MalformedResponse)?;
        Ok(Some(document))
    }

    /// Lists every document in a collection, following page tokens.
    pub async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, FirestoreError> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let token = self.tokens.access_token().await?;

            let mut request = self
                .http
                .get(self.url(collection))
                .bearer_auth(token)
                .query(&[("pageSize", PAGE_SIZE.to_string())]);
            if let Some(ref next) = page_token {
                request = request.query(&[("pageToken", next.as_str())]);
            }

            let response = request
                .send()
                .await
                .map_err(|_| FirestoreError::RequestFailed)?;

            if !response.status().is_success() {
                return Err(FirestoreError::Status(response.status().as_u16()));
            }

            let page: ListDocumentsResponse = response
                .json()
                .await
                .map_err(|_| FirestoreError::MalformedResponse)?;

            documents.extend(page.documents);
            match page.next_page_token {
                Some(next) => page_token = Some(next),
                None => return Ok(documents),
            }
        }
    }

    /// Creates or fully replaces the document at `path`.
    pub async fn set_document(
        &self,
        path: &str,
        fields: HashMap<String, Value>,
    ) -> Result<(), FirestoreError> {
        let token = self.tokens.access_token().await?;

        let response = self
            .http
            .patch(self.url(path))
            .bearer_auth(token)
            .json(&Document::with_fields(fields))
            .send()
            .await
            .map_err(|_| FirestoreError::RequestFailed)?;

        if !response.status().is_success() {
            return Err(FirestoreError::Status(response.status().as_u16()));
        }
        Ok(())
    }

    /// Deletes the document at `path`. Deleting a missing document succeeds,
    /// matching Firestore semantics.
    pub async fn delete_document(&self, path: &str) -> Result<(), FirestoreError> {
        let token = self.tokens.access_token().await?;

        let response = self
            .http
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|_| FirestoreError::RequestFailed)?;

        if !response.status().is_success() {
            return Err(FirestoreError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}
