use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::ValidationError;

/// What kind of places the caller is after.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchCategory {
    #[default]
    All,
    Restaurants,
    ThingsToDo,
}

impl SearchCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchCategory::All => "all",
            SearchCategory::Restaurants => "restaurants",
            SearchCategory::ThingsToDo => "things_to_do",
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(SearchCategory::All),
            "restaurants" => Ok(SearchCategory::Restaurants),
            "things_to_do" => Ok(SearchCategory::ThingsToDo),
            other => Err(ValidationError::new(
                "category",
                format!(
                    "'{}' is not one of all, restaurants, things_to_do",
                    other
                ),
            )),
        }
    }
}

/// Which hashtag family an Instagram post came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostCategory {
    Eat,
    Do,
    Sleep,
}

impl PostCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::Eat => "eat",
            PostCategory::Do => "do",
            PostCategory::Sleep => "sleep",
        }
    }
}
