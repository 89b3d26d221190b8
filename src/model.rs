// ABOUTME: Serde data models for wiki REST API responses
// ABOUTME: Tolerant parsing with optional fields and string-or-number ids

use serde::{Deserialize, Deserializer, Serialize};

/// Page ids arrive as strings from most servers, but some proxies emit numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum IdValue {
    Text(String),
    Number(u64),
}

fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdValue::deserialize(deserializer)? {
        IdValue::Text(s) => s,
        IdValue::Number(n) => n.to_string(),
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
}


/// Raw shape of `GET /rest/api/content/{id}?expand=body.storage`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawPage {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<RawBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawBody {
    #[serde(default)]
    pub storage: Option<Storage>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Storage {
    pub value: String,
}

impl RawPage {
    /// Yields a page only when the storage body was present.
    pub(crate) fn into_page(self) -> Option<Page> {
        let html = self.body?.storage?.value;
        Some(Page {
            id: self.id,
            title: self.title,
            html,
        })
    }
}

/// A page whose storage-format body was delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub html: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChildPage {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChildListing {
    #[serde(default)]
    pub results: Vec<ChildPage>,
}
