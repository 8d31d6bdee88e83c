use super::mapper::{parse_leads, parse_scan};
use super::traits::{LeadSource, ScanReport};
use crate::{Error, Result};
use leadgen_types::LeadCollection;
use reqwest::blocking::{Client, Response};
use std::time::Duration;

/// Client for the lead server's REST API.
///
/// - `GET {base}/leads?count={limit}` returns a JSON array of leads
/// - `POST {base}/scan` returns `{message, new_leads, data}`
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn read_body(response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }
        Ok(body)
    }
}

impl LeadSource for HttpSource {
    fn id(&self) -> &'static str {
        "http"
    }

    fn fetch_leads(&self, limit: usize) -> Result<LeadCollection> {
        let url = self.endpoint("leads");
        tracing::debug!(url = %url, limit, "fetching leads");

        let response = self
            .client
            .get(&url)
            .query(&[("count", limit)])
            .send()?;
        let leads = parse_leads(&Self::read_body(response)?)?;
        Ok(leads.truncated(limit))
    }

    fn trigger_scan(&self) -> Result<ScanReport> {
        let url = self.endpoint("scan");
        tracing::debug!(url = %url, "triggering scan");

        let response = self.client.post(&url).send()?;
        parse_scan(&Self::read_body(response)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() <= MAX {
        body.to_string()
    } else {
        let head: String = body.chars().take(MAX).collect();
        format!("{}...", head)
    }
}
