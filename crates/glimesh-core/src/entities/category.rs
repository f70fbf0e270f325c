//! Category, subcategory and tag entities

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Top level stream category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub subcategories: Option<Vec<Subcategory>>,
    pub tags: Option<Vec<Tag>>,
    pub inserted_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Subcategory of a category, usually a game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub background_image_url: Option<String>,
    pub source: Option<String>,
    pub source_id: Option<String>,
    pub user_created: Option<bool>,
    pub inserted_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Free-form tag attached to channels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub count_usage: Option<i64>,
    pub inserted_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
