use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub year: u16,
    pub genres: Vec<String>,
}

/// Body of `POST /movies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMovieRequest {
    pub title: String,
    pub year: u16,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Body of `PATCH /movies/{id}`. Absent fields stay untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMovieRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
}

impl Movie {
    pub fn new(id: u64, req: CreateMovieRequest) -> Self {
        Self {
            id,
            title: req.title,
            year: req.year,
            genres: req.genres,
        }
    }

    /// Overwrite the fields present in `patch`.
    pub fn apply(&mut self, patch: UpdateMovieRequest) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(genres) = patch.genres {
            self.genres = genres;
        }
    }
}
