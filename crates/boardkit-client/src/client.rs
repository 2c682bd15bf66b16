//! HTTP client for the board API.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::multipart;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use boardkit_core::{
    defaults, resolve_filename, Board, BoardId, BoardPage, Draft, DraftMode, Error, FileId, Result,
    SavePayload,
};

/// A file materialized from the download endpoint: recovered display
/// name, response content type, and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Client for the board REST API.
///
/// Holds one `reqwest::Client` for the process lifetime; construct it
/// once and pass it to whoever needs it rather than reaching for a
/// hidden global.
pub struct BoardClient {
    client: Client,
    base_url: String,
}

impl BoardClient {
    /// Create a client against the default endpoint.
    pub fn new() -> Self {
        Self::with_config(
            defaults::API_BASE_URL.to_string(),
            defaults::REQUEST_TIMEOUT_SECS,
        )
    }

    /// Create a client with a custom endpoint and request timeout.
    pub fn with_config(base_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        info!("Initializing board client: url={}", base_url);

        Self { client, base_url }
    }

    /// Create from environment variables.
    ///
    /// `BOARD_API_BASE` overrides the endpoint, `BOARD_API_TIMEOUT_SECS`
    /// the request timeout.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BOARD_API_BASE").unwrap_or_else(|_| defaults::API_BASE_URL.to_string());
        let timeout_secs = std::env::var("BOARD_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults::REQUEST_TIMEOUT_SECS);

        Self::with_config(base_url, timeout_secs)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Fetch one page of board summaries.
    pub async fn list_boards(&self, page: u32, size: u32) -> Result<BoardPage> {
        let url = self.url("/api/board/list");
        debug!(page, size, "Listing boards");

        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("size", size)])
            .send()
            .await?;

        Self::json_body(response).await
    }

    /// Fetch a full board by id.
    pub async fn get_board(&self, id: BoardId) -> Result<Board> {
        let url = self.url(&format!("/api/board/{}", id));
        debug!(board_id = id, "Fetching board");

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::BoardNotFound(id));
        }
        Self::json_body(response).await
    }

    /// Create a new board from a reconciled payload.
    pub async fn save_board(&self, payload: &SavePayload) -> Result<Board> {
        let url = self.url("/api/board/save");
        debug!(
            files = payload.files.len(),
            links = payload.board_data.links.len(),
            "Saving new board"
        );

        let response = self
            .client
            .post(&url)
            .multipart(Self::multipart_form(payload)?)
            .send()
            .await?;

        let board: Board = Self::json_body(response).await?;
        info!(board_id = board.id, "Board saved");
        Ok(board)
    }

    /// Update an existing board from a reconciled payload.
    pub async fn update_board(&self, id: BoardId, payload: &SavePayload) -> Result<Board> {
        let url = self.url(&format!("/api/board/{}", id));
        debug!(
            board_id = id,
            files = payload.files.len(),
            remaining = payload.board_data.remaining_file_ids.len(),
            "Updating board"
        );

        let response = self
            .client
            .put(&url)
            .multipart(Self::multipart_form(payload)?)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::BoardNotFound(id));
        }
        let board: Board = Self::json_body(response).await?;
        info!(board_id = board.id, "Board updated");
        Ok(board)
    }

    /// Reconcile a draft and dispatch it as a create or update,
    /// depending on the draft's mode.
    ///
    /// Validation errors surface before any request is sent, and the
    /// draft is left intact on failure so the caller can retry. The
    /// caller is responsible for not re-submitting the same draft while
    /// a prior submission is still in flight.
    pub async fn submit(&self, draft: &Draft) -> Result<Board> {
        let payload = draft.build_payload()?;
        match draft.mode() {
            DraftMode::Edit(id) => self.update_board(id, &payload).await,
            DraftMode::Create => self.save_board(&payload).await,
        }
    }

    /// Download an attachment's bytes, recovering the display filename
    /// from the response's content-disposition header and falling back
    /// to `fallback_name`.
    pub async fn download_attachment(
        &self,
        file_id: FileId,
        fallback_name: &str,
    ) -> Result<DownloadedFile> {
        let url = self.url(&format!("/api/board/download/{}", file_id));
        debug!(file_id, "Downloading attachment");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/octet-stream")
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(Error::FileNotFound(file_id)),
            StatusCode::BAD_REQUEST => return Err(Error::LinkOnly),
            status if !status.is_success() => {
                let text = response.text().await.unwrap_or_default();
                return Err(Error::Request(format!("Server error {}: {}", status, text)));
            }
            _ => {}
        }

        let disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = response.bytes().await?.to_vec();
        let file_name = resolve_filename(disposition.as_deref(), fallback_name);

        info!(file_id, file_name = %file_name, bytes = data.len(), "Attachment downloaded");

        Ok(DownloadedFile {
            file_name,
            content_type,
            data,
        })
    }

    /// Build the multipart form: one JSON `boardData` part followed by
    /// the staged files under the shared `files` field name, in staged
    /// order.
    fn multipart_form(payload: &SavePayload) -> Result<multipart::Form> {
        let board_data = serde_json::to_string(&payload.board_data)?;
        let data_part = multipart::Part::text(board_data)
            .mime_str("application/json")
            .map_err(|e| Error::Internal(format!("Failed to create boardData part: {}", e)))?;

        let mut form = multipart::Form::new().part("boardData", data_part);
        for file in &payload.files {
            let part = multipart::Part::bytes(file.bytes.clone())
                .file_name(file.name.clone())
                .mime_str(&file.mime_type)
                .map_err(|e| Error::Internal(format!("Failed to create file part: {}", e)))?;
            form = form.part("files", part);
        }
        Ok(form)
    }

    async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Request(format!("Server error {}: {}", status, text)));
        }
        Ok(response.json().await?)
    }
}

impl Default for BoardClient {
    fn default() -> Self {
        Self::new()
    }
}
