//! HTTP API Client
//!
//! Functions for communicating with the KursManager records API. Each
//! collection is exposed as a "list all records" endpoint returning a JSON
//! array of records.

use futures_util::try_join;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::state::global::{Course, Enrollment, Instructor, Participant, Record, Room};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";

/// Local storage key for the API base URL override
const API_URL_STORAGE_KEY: &str = "kursmanager_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_STORAGE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_STORAGE_KEY, url);
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// All five dashboard collections, fetched together.
#[derive(Debug, Default)]
pub struct Collections {
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
    pub participants: Vec<Participant>,
    pub instructors: Vec<Instructor>,
    pub rooms: Vec<Room>,
}

/// Fetch every record of one collection
async fn fetch_records<F>(collection: &str) -> Result<Vec<Record<F>>, String>
where
    F: DeserializeOwned,
{
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/{}", api_base, collection))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: format!("Request for {} failed", collection),
            code: None,
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch all courses
pub async fn fetch_courses() -> Result<Vec<Course>, String> {
    fetch_records("kurse").await
}

/// Fetch all enrollments
pub async fn fetch_enrollments() -> Result<Vec<Enrollment>, String> {
    fetch_records("anmeldungen").await
}

/// Fetch all participants
pub async fn fetch_participants() -> Result<Vec<Participant>, String> {
    fetch_records("teilnehmer").await
}

/// Fetch all instructors
pub async fn fetch_instructors() -> Result<Vec<Instructor>, String> {
    fetch_records("dozenten").await
}

/// Fetch all rooms
pub async fn fetch_rooms() -> Result<Vec<Room>, String> {
    fetch_records("raeume").await
}

/// Fetch all five dashboard collections concurrently.
///
/// The join fails as a whole if any single fetch fails; callers get either
/// every collection or none.
pub async fn fetch_all_collections() -> Result<Collections, String> {
    let (courses, enrollments, participants, instructors, rooms) = try_join!(
        fetch_courses(),
        fetch_enrollments(),
        fetch_participants(),
        fetch_instructors(),
        fetch_rooms(),
    )?;

    Ok(Collections {
        courses,
        enrollments,
        participants,
        instructors,
        rooms,
    })
}
