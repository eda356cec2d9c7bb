//! Serde models for OMDb API payloads
//!
//! OMDb reports every field as a display string, "N/A" included; parsing
//! to numbers happens at the comparison layer, not here.

use serde::{Deserialize, Serialize};

/// One entry of an OMDb title-search response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

impl MovieSummary {
    /// Display label for a dropdown row
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }
}

/// Full movie record from the lookup-by-id endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Awards", default)]
    pub awards: String,
    #[serde(rename = "BoxOffice", default)]
    pub box_office: String,
    #[serde(rename = "Metascore", default)]
    pub metascore: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes", default)]
    pub imdb_votes: String,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
}

/// Envelope of the `s=` search endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(rename = "Search", default)]
    pub search: Vec<MovieSummary>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

/// Status portion shared by every OMDb response; the lookup endpoint is
/// parsed in two steps (status, then [`MovieDetail`] from the same body)
#[derive(Debug, Deserialize)]
pub(crate) struct StatusEnvelope {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_label_combines_title_and_year() {
        let movie = MovieSummary {
            title: "Batman Begins".to_string(),
            year: "2005".to_string(),
            imdb_id: "tt0372784".to_string(),
            kind: "movie".to_string(),
            poster: "N/A".to_string(),
        };
        assert_eq!(movie.label(), "Batman Begins (2005)");
    }

    #[test]
    fn search_envelope_parses_results() {
        let json = r#"{
            "Search": [
                {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "1",
            "Response": "True"
        }"#;
        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.response, "True");
        assert_eq!(envelope.search.len(), 1);
        assert_eq!(envelope.search[0].imdb_id, "tt0372784");
    }

    #[test]
    fn search_envelope_parses_not_found() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.response, "False");
        assert!(envelope.search.is_empty());
        assert_eq!(envelope.error.as_deref(), Some("Movie not found!"));
    }

    #[test]
    fn detail_parses_with_missing_fields_defaulted() {
        let json = r#"{
            "Title": "Batman Begins",
            "Year": "2005",
            "Awards": "Won 1 Oscar. 14 wins & 79 nominations total",
            "BoxOffice": "$206,863,479",
            "Metascore": "70",
            "imdbRating": "8.2",
            "imdbVotes": "1,614,082",
            "imdbID": "tt0372784",
            "Response": "True"
        }"#;
        let status: StatusEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(status.response, "True");

        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.title, "Batman Begins");
        assert_eq!(detail.box_office, "$206,863,479");
        // Fields OMDb omits default to empty strings.
        assert!(detail.genre.is_empty());
    }
}
