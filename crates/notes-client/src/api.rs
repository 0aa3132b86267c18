//! Access to the notes REST backend.
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | list | GET | `/api/notes` |
//! | create | POST | `/api/notes` |
//! | update | PUT | `/api/notes/{id}` |
//! | delete | DELETE | `/api/notes/{id}` |

use notes_core::{Note, NoteId, NoteInput};
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// The backend as seen by the board.
#[allow(async_fn_in_trait)]
pub trait NotesApi {
    /// Configured base URL, for messages shown to the user.
    fn base_url(&self) -> &str;

    /// Full URL of the notes collection.
    fn notes_endpoint(&self) -> String;

    async fn list_notes(&self) -> ClientResult<Vec<Note>>;

    async fn create_note(&self, input: &NoteInput) -> ClientResult<Note>;

    async fn update_note(&self, id: &NoteId, input: &NoteInput) -> ClientResult<Note>;

    async fn delete_note(&self, id: &NoteId) -> ClientResult<()>;
}

/// [`NotesApi`] over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    client: reqwest::Client,
    base: String,
    base_url: Url,
}

impl HttpNotesApi {
    /// Build a client for the configured backend.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.api_base)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.api_base, e)))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("notes/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base: config.api_base.clone(),
            base_url,
        })
    }

    /// `{base}/api/notes[/{id}]`, with the id percent-encoded as one segment.
    fn url(&self, id: Option<&NoteId>) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ClientError::InvalidUrl(self.base.clone()))?;
            segments.pop_if_empty().extend(["api", "notes"]);
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }
}

impl NotesApi for HttpNotesApi {
    fn base_url(&self) -> &str {
        &self.base
    }

    fn notes_endpoint(&self) -> String {
        self.url(None)
            .map(String::from)
            .unwrap_or_else(|_| format!("{}/api/notes", self.base))
    }

    async fn list_notes(&self) -> ClientResult<Vec<Note>> {
        let url = self.url(None)?;
        make_request(self.client.get(url)).await
    }

    async fn create_note(&self, input: &NoteInput) -> ClientResult<Note> {
        let url = self.url(None)?;
        make_request(self.client.post(url).json(input)).await
    }

    async fn update_note(&self, id: &NoteId, input: &NoteInput) -> ClientResult<Note> {
        let url = self.url(Some(id))?;
        make_request(self.client.put(url).json(input)).await
    }

    async fn delete_note(&self, id: &NoteId) -> ClientResult<()> {
        let url = self.url(Some(id))?;
        send(self.client.delete(url)).await?;
        Ok(())
    }
}

/// Send a request and decode a 2xx JSON body.
async fn make_request<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
    let response = send(request).await?;
    Ok(response.json::<T>().await?)
}

/// Send a request, turning non-2xx answers into [`ClientError::Server`].
async fn send(request: RequestBuilder) -> ClientResult<Response> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        tracing::debug!(status = status.as_u16(), url = %response.url(), "request succeeded");
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Server {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Pull a message out of an error body.
///
/// Understands `{"error": "..."}` and `{"error": {"message": "..."}}`, and
/// falls back to the raw body.
fn error_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };

    let error = json.get("error");
    error
        .and_then(|v| v.as_str())
        .or_else(|| error.and_then(|v| v.get("message")).and_then(|v| v.as_str()))
        .unwrap_or(body)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpNotesApi {
        HttpNotesApi::new(&ClientConfig::new(base).unwrap()).unwrap()
    }

    #[test]
    fn test_collection_url() {
        let api = api("http://localhost:5000");
        assert_eq!(api.notes_endpoint(), "http://localhost:5000/api/notes");
        assert_eq!(api.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_collection_url_keeps_base_path() {
        let api = api("https://example.com/notes-app/");
        assert_eq!(
            api.notes_endpoint(),
            "https://example.com/notes-app/api/notes"
        );
    }

    #[test]
    fn test_note_url_encodes_id() {
        let api = api("http://localhost:5000");
        let url = api.url(Some(&NoteId::new("a/b c"))).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/notes/a%2Fb%20c");
    }

    #[test]
    fn test_error_message_flat() {
        assert_eq!(error_message(r#"{"error":"Note not found"}"#), "Note not found");
    }

    #[test]
    fn test_error_message_nested() {
        let body = r#"{"error":{"code":"NOT_FOUND","message":"gone"}}"#;
        assert_eq!(error_message(body), "gone");
    }

    #[test]
    fn test_error_message_plain_text() {
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(r#"{"detail":"x"}"#), r#"{"detail":"x"}"#);
    }
}
