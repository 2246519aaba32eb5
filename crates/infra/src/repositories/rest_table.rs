//! Remote appointments table over a PostgREST-style REST surface
//!
//! Rows live at `{url}/rest/v1/{table}`. Filters use the `column=op.value`
//! query syntax (`gte`, `lte`, `eq`), ordering `order=column.asc|desc`.
//! Writes ask for `Prefer: return=representation` so the affected rows come
//! back in the response body.

use std::time::Duration;

use agenda_core::AppointmentRepository;
use agenda_domain::{
    AgendaError, Appointment, AppointmentDraft, AppointmentPatch, AppointmentQuery,
    BackendConfig, Result,
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};
use url::Url;

use crate::errors::status_error;
use crate::http::HttpClient;

const PREFER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";

pub struct RestTableRepository {
    http: HttpClient,
    endpoint: Url,
}

impl RestTableRepository {
    /// Build the adapter from backend settings.
    ///
    /// # Errors
    /// `AgendaError::Config` when url/key are missing or malformed.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base = config
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AgendaError::Config("backend url is not set".into()))?;
        let key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AgendaError::Config("backend api key is not set".into()))?;

        let endpoint = Url::parse(&format!(
            "{}/rest/v1/{}",
            base.trim_end_matches('/'),
            config.table.trim()
        ))
        .map_err(|e| AgendaError::Config(format!("invalid backend url '{base}': {e}")))?;

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(auth_headers(key)?)
            .build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.http.request(method, self.endpoint.clone())
    }

    async fn fetch_rows<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<Vec<T>> {
        let response = self.http.send(builder).await?;
        let response = ensure_success(response).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| AgendaError::Backend(format!("unexpected response body: {e}")))
    }
}

fn auth_headers(key: &str) -> Result<HeaderMap> {
    let invalid = |_: InvalidHeaderValue| {
        AgendaError::Config("backend api key is not a valid header value".into())
    };

    let mut apikey = HeaderValue::from_str(key).map_err(invalid)?;
    apikey.set_sensitive(true);
    let mut bearer = HeaderValue::from_str(&format!("Bearer {key}")).map_err(invalid)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static("apikey"), apikey);
    headers.insert(AUTHORIZATION, bearer);
    Ok(headers)
}

/// Query-string filters for a select.
fn select_params(query: &AppointmentQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![("select", "*".to_string())];
    if let Some(from) = query.from {
        params.push(("scheduled_at", format!("gte.{from}T00:00:00")));
    }
    if let Some(to) = query.to {
        params.push(("scheduled_at", format!("lte.{to}T23:59:59")));
    }
    if let Some(status) = query.status {
        params.push(("status", format!("eq.{status}")));
    }
    if let Some(phone) = &query.phone {
        params.push(("phone", format!("eq.{phone}")));
    }
    params.push(("order", format!("scheduled_at.{}", query.order.as_str())));
    if let Some(limit) = query.limit {
        params.push(("limit", limit.to_string()));
    }
    params
}

fn id_filter(id: i64) -> [(&'static str, String); 1] {
    [("id", format!("eq.{id}"))]
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| json.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or(body);

    let err = status_error(status, Some(&detail));
    error!(%status, error = %err, "backend request failed");
    Err(err)
}

#[async_trait]
impl AppointmentRepository for RestTableRepository {
    #[instrument(skip(self), fields(backend = "rest"))]
    async fn list(&self, query: &AppointmentQuery) -> Result<Vec<Appointment>> {
        let rows: Vec<Appointment> =
            self.fetch_rows(self.request(Method::GET).query(&select_params(query))).await?;
        debug!(count = rows.len(), "selected appointments");
        Ok(rows)
    }

    #[instrument(skip(self), fields(backend = "rest"))]
    async fn get(&self, id: i64) -> Result<Option<Appointment>> {
        let builder = self
            .request(Method::GET)
            .query(&[("select", "*"), ("limit", "1")])
            .query(&id_filter(id));
        let rows: Vec<Appointment> = self.fetch_rows(builder).await?;
        Ok(rows.into_iter().next())
    }

    #[instrument(skip(self, draft), fields(backend = "rest"))]
    async fn insert(&self, draft: AppointmentDraft) -> Result<Appointment> {
        let builder =
            self.request(Method::POST).header(PREFER, RETURN_REPRESENTATION).json(&draft);
        let rows: Vec<Appointment> = self.fetch_rows(builder).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AgendaError::Backend("insert returned no rows".into()))
    }

    #[instrument(skip(self, patch), fields(backend = "rest"))]
    async fn update(&self, id: i64, patch: AppointmentPatch) -> Result<Appointment> {
        let builder = self
            .request(Method::PATCH)
            .query(&id_filter(id))
            .header(PREFER, RETURN_REPRESENTATION)
            .json(&patch);
        let rows: Vec<Appointment> = self.fetch_rows(builder).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AgendaError::NotFound(format!("appointment {id} not found")))
    }

    #[instrument(skip(self), fields(backend = "rest"))]
    async fn delete(&self, id: i64) -> Result<()> {
        let builder = self
            .request(Method::DELETE)
            .query(&id_filter(id))
            .header(PREFER, RETURN_REPRESENTATION);
        let rows: Vec<serde_json::Value> = self.fetch_rows(builder).await?;
        if rows.is_empty() {
            return Err(AgendaError::NotFound(format!("appointment {id} not found")));
        }
        Ok(())
    }

    #[instrument(skip(self), fields(backend = "rest"))]
    async fn delete_by_phone(&self, phone: &str) -> Result<usize> {
        let builder = self
            .request(Method::DELETE)
            .query(&[("phone", format!("eq.{phone}"))])
            .header(PREFER, RETURN_REPRESENTATION);
        let rows: Vec<serde_json::Value> = self.fetch_rows(builder).await?;
        Ok(rows.len())
    }

    fn backend_name(&self) -> &'static str {
        "rest"
    }
}
