//! OMDb API client

use super::models::{MovieDetail, MovieSummary, SearchEnvelope, StatusEnvelope};
use crate::autocomplete::FetchSource;
use crate::config::ApiSettings;
use crate::network::HttpClient;
use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Errors specific to the OMDb API contract
#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("no OMDb API key configured (set MOVIEFIGHT_API_KEY)")]
    MissingApiKey,
    #[error("OMDb returned HTTP {0}")]
    Status(u16),
    #[error("OMDb error: {0}")]
    Api(String),
}

/// Client for the OMDb movie database
#[derive(Clone)]
pub struct OmdbClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(http: HttpClient, settings: &ApiSettings) -> Result<Self, OmdbError> {
        let api_key = settings.key.clone().ok_or(OmdbError::MissingApiKey)?;
        Ok(Self {
            http,
            base_url: settings.url.clone(),
            api_key,
        })
    }

    /// Search movies by title fragment.
    ///
    /// "Movie not found!" and "Too many results." are valid empty
    /// outcomes, not errors. An empty term short-circuits without a
    /// request; OMDb rejects it anyway.
    pub async fn search(&self, term: &str) -> Result<Vec<MovieSummary>> {
        if term.trim().is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .http
            .get_with_params(
                &self.base_url,
                &[("apikey", self.api_key.as_str()), ("s", term)],
            )
            .await?;
        if !response.is_success() {
            return Err(OmdbError::Status(response.status).into());
        }

        let envelope: SearchEnvelope = response.json()?;
        if envelope.response == "False" {
            return match envelope.error.as_deref() {
                Some("Movie not found!") | Some("Too many results.") | None => {
                    debug!(term, "no results");
                    Ok(Vec::new())
                }
                Some(message) => Err(OmdbError::Api(message.to_string()).into()),
            };
        }

        Ok(envelope.search)
    }

    /// Fetch the full record for one movie by IMDb id
    pub async fn lookup(&self, imdb_id: &str) -> Result<MovieDetail> {
        let response = self
            .http
            .get_with_params(
                &self.base_url,
                &[("apikey", self.api_key.as_str()), ("i", imdb_id)],
            )
            .await?;
        if !response.is_success() {
            return Err(OmdbError::Status(response.status).into());
        }

        let status: StatusEnvelope = response.json()?;
        if status.response == "False" {
            let message = status.error.unwrap_or_else(|| "unknown error".to_string());
            return Err(OmdbError::Api(message).into());
        }

        response.json()
    }
}

#[async_trait]
impl FetchSource<MovieSummary> for OmdbClient {
    async fn fetch(&self, term: &str) -> Result<Vec<MovieSummary>> {
        self.search(term).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::assert_ok;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OmdbClient {
        let settings = ApiSettings {
            url: server.uri(),
            key: Some("testkey".to_string()),
        };
        OmdbClient::new(HttpClient::new().unwrap(), &settings).unwrap()
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let settings = ApiSettings {
            url: "http://localhost".to_string(),
            key: None,
        };
        let result = OmdbClient::new(HttpClient::new().unwrap(), &settings);
        assert!(matches!(result, Err(OmdbError::MissingApiKey)));
    }

    #[tokio::test]
    async fn search_parses_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("apikey", "testkey"))
            .and(query_param("s", "batman"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Search": [
                    {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784", "Type": "movie", "Poster": "N/A"},
                    {"Title": "Batman Returns", "Year": "1992", "imdbID": "tt0103776", "Type": "movie", "Poster": "N/A"}
                ],
                "totalResults": "2",
                "Response": "True"
            })))
            .mount(&server)
            .await;

        let movies = client_for(&server).search("batman").await.unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Batman Begins");
        assert_eq!(movies[1].imdb_id, "tt0103776");
    }

    #[tokio::test]
    async fn search_not_found_is_empty_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": "False",
                "Error": "Movie not found!"
            })))
            .mount(&server)
            .await;

        let movies = client_for(&server).search("zzzzzz").await.unwrap();
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn search_empty_term_skips_request() {
        let server = MockServer::start().await;
        // No mocks mounted: a request would come back 404 and fail.
        let movies = client_for(&server).search("   ").await.unwrap();
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn search_api_error_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": "False",
                "Error": "Invalid API key!"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).search("batman").await.unwrap_err();
        assert!(err.to_string().contains("Invalid API key!"));
    }

    #[tokio::test]
    async fn search_http_error_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).search("batman").await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn lookup_parses_detail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("i", "tt0372784"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Title": "Batman Begins",
                "Year": "2005",
                "Genre": "Action, Crime, Drama",
                "Director": "Christopher Nolan",
                "Awards": "Won 1 Oscar. 14 wins & 79 nominations total",
                "BoxOffice": "$206,863,479",
                "Metascore": "70",
                "imdbRating": "8.2",
                "imdbVotes": "1,614,082",
                "imdbID": "tt0372784",
                "Response": "True"
            })))
            .mount(&server)
            .await;

        let detail = assert_ok!(client_for(&server).lookup("tt0372784").await);
        assert_eq!(detail.title, "Batman Begins");
        assert_eq!(detail.director, "Christopher Nolan");
        assert_eq!(detail.metascore, "70");
    }

    #[tokio::test]
    async fn lookup_error_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": "False",
                "Error": "Incorrect IMDb ID."
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).lookup("nope").await.unwrap_err();
        assert!(err.to_string().contains("Incorrect IMDb ID."));
    }
}
