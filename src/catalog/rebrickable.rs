use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{CatalogSource, PAGE_SIZE};
use crate::error::{CatalogEndpoint, Result, TrackerError};
use crate::models::{CatalogCategory, CatalogMinifig, CatalogPartEntry, CatalogSet, Page};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the Rebrickable v3 LEGO catalog
pub struct RebrickableClient {
    http: HttpClient,
    base_url: String,
}

impl RebrickableClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("key {}", api_key))
            .map_err(|e| TrackerError::validation(format!("invalid API key: {}", e)))?;
        headers.insert(AUTHORIZATION, auth);

        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(|e| TrackerError::validation(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn set_url(&self, set_id: &str) -> String {
        format!("{}/sets/{}/", self.base_url, set_id)
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: CatalogEndpoint, url: &str) -> Result<T> {
        debug!(%endpoint, url, "catalog request");

        let response =
            self.http.get(url).send().map_err(|e| TrackerError::catalog(endpoint, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::catalog(endpoint, format!("HTTP {}", status)));
        }

        response.json::<T>().map_err(|e| TrackerError::catalog(endpoint, e.to_string()))
    }

    fn get_page<T: DeserializeOwned>(&self, endpoint: CatalogEndpoint, url: &str) -> Result<Vec<T>> {
        let page: Page<T> = self.get_json(endpoint, &format!("{}?page_size={}", url, PAGE_SIZE))?;
        if page.next.is_some() {
            debug!(%endpoint, count = ?page.count, "catalog returned more than one page; extra pages ignored");
        }
        Ok(page.results)
    }
}

impl CatalogSource for RebrickableClient {
    fn fetch_set(&self, set_id: &str) -> Result<CatalogSet> {
        self.get_json(CatalogEndpoint::SetInfo, &self.set_url(set_id))
    }

    fn fetch_set_parts(&self, set_id: &str) -> Result<Vec<CatalogPartEntry>> {
        self.get_page(CatalogEndpoint::SetParts, &format!("{}parts/", self.set_url(set_id)))
    }

    fn fetch_set_minifigs(&self, set_id: &str) -> Result<Vec<CatalogMinifig>> {
        self.get_page(CatalogEndpoint::SetMinifigs, &format!("{}minifigs/", self.set_url(set_id)))
    }

    fn fetch_minifig_parts(&self, minifig_id: &str) -> Result<Vec<CatalogPartEntry>> {
        let url = format!("{}/minifigs/{}/parts/", self.base_url, minifig_id);
        self.get_page(CatalogEndpoint::MinifigParts, &url)
    }

    fn fetch_category(&self, category_id: u32) -> Result<CatalogCategory> {
        let url = format!("{}/part_categories/{}/", self.base_url, category_id);
        self.get_json(CatalogEndpoint::Category, &url)
    }
}
