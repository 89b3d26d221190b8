// ABOUTME: Blocking HTTP client for the wiki REST API
// ABOUTME: Handles basic auth, JSON headers, and fail-fast status errors

use crate::model::{ChildListing, RawPage};
use crate::util::{is_safe_page_id, truncate_str};
use crate::{ChildPage, Config, Error, Page, Result, User};
use reqwest::blocking::Client;

const USER_AGENT: &str = concat!("confluence-export/", env!("CARGO_PKG_VERSION"), " (Rust)");

fn checked_id(page_id: &str) -> Result<&str> {
    if is_safe_page_id(page_id) {
        Ok(page_id)
    } else {
        Err(Error::InvalidPageId(page_id.into()))
    }
}

pub struct ApiClient {
    client: Client,
    base_url: String,
    email: String,
    api_token: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(ApiClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            email: config.email.clone(),
            api_token: config.api_token.clone(),
        })
    }

    fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .header("Accept", "application/json")
            .query(query)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            let preview = truncate_str(&message, 100);
            return Err(Error::Api {
                endpoint: endpoint.into(),
                status: status.as_u16(),
                message: preview,
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(
                endpoint,
                error = %e,
                body = %truncate_str(&body, 500),
                "failed to parse response"
            );
            Error::Parse(e)
        })
    }

    pub fn get_current_user(&self) -> Result<User> {
        self.get("/rest/api/user/current", &[])
    }

    /// Returns `Ok(None)` when the page came back without a storage body.
    pub fn get_page_content(&self, page_id: &str) -> Result<Option<Page>> {
        let page_id = checked_id(page_id)?;
        let raw: RawPage = self.get(
            &format!("/rest/api/content/{}", page_id),
            &[("expand", "body.storage")],
        )?;

        let page = raw.into_page();
        if page.is_none() {
            println!("Page {} does not exist or is inaccessible.", page_id);
        }
        Ok(page)
    }

    pub fn get_child_pages(&self, page_id: &str) -> Result<Vec<ChildPage>> {
        let page_id = checked_id(page_id)?;
        let listing: ChildListing =
            self.get(&format!("/rest/api/content/{}/child/page", page_id), &[])?;
        Ok(listing.results)
    }
}
