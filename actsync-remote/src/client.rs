//! Blocking HTTP implementation of [`ActionApi`].

use actsync_core::{payload::encode_component, Settings, SyncPayload};

use crate::error::RemoteError;
use crate::response::{extract_id, ApiResponse, ResponseBody};
use crate::ActionApi;

/// Collection path of the action resource.
pub const RESOURCE_PATH: &str = "/api/v1/custom_task";
pub const AUTH_TYPE: &str = "sdk";
pub const REFERER: &str = "https://app.actsync.dev";

/// HTTP client over a shared `ureq` agent. Plain or TLS transport follows the
/// base URL scheme.
pub struct HttpActionClient {
    agent: ureq::Agent,
    endpoint: String,
    token: String,
    user_agent: String,
}

impl HttpActionClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            endpoint: format!("{}{RESOURCE_PATH}", settings.api_base_url),
            token: settings.token.clone(),
            user_agent: settings.user_agent.clone(),
        }
    }

    /// Collection URL, e.g. `https://host/api/v1/custom_task`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, method: &str, url: &str) -> ureq::Request {
        self.agent
            .request(method, url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Auth-Type", AUTH_TYPE)
            .set("Referer", REFERER)
            .set("Content-Type", "application/json")
            .set("User-Agent", &self.user_agent)
    }

    /// Send one request. Any response with a non-2xx status is an error.
    fn exchange(
        &self,
        method: &'static str,
        url: &str,
        request: ureq::Request,
        body: Option<&SyncPayload>,
    ) -> Result<ApiResponse, RemoteError> {
        let result = match body {
            Some(payload) => {
                let json = serde_json::to_string(payload)?;
                request.send_string(&json)
            }
            None => request.call(),
        };

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                return Err(RemoteError::Transport {
                    method,
                    url: url.to_string(),
                    message: transport.to_string(),
                })
            }
        };

        let status = response.status();
        let raw = response.into_string().map_err(|source| RemoteError::Body {
            method,
            url: url.to_string(),
            source,
        })?;
        let api = ApiResponse {
            status,
            body: ResponseBody::parse(raw),
        };
        tracing::debug!(method, url, status, "response received");

        if api.is_success() {
            Ok(api)
        } else {
            Err(RemoteError::Status {
                method,
                url: url.to_string(),
                status,
                body: api.body.to_string(),
            })
        }
    }
}

impl ActionApi for HttpActionClient {
    fn find_by_name(&self, name: &str) -> Option<String> {
        let request = self.request("GET", &self.endpoint).query("name", name);
        let response = match self.exchange("GET", &self.endpoint, request, None) {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(action = name, "lookup failed, treating as not found: {err}");
                return None;
            }
        };

        let Some(json) = response.body.as_json() else {
            tracing::warn!(
                action = name,
                "lookup returned a non-JSON body, treating as not found"
            );
            return None;
        };
        let id = extract_id(json);
        match &id {
            Some(id) => tracing::debug!(action = name, id = %id, "found existing action"),
            None => tracing::debug!(action = name, "no existing action"),
        }
        id
    }

    fn create(&self, payload: &SyncPayload) -> Result<ApiResponse, RemoteError> {
        let request = self.request("POST", &self.endpoint);
        let result = self.exchange("POST", &self.endpoint, request, Some(payload));
        log_outcome("create", &result);
        result
    }

    fn update(&self, id: &str, payload: &SyncPayload) -> Result<ApiResponse, RemoteError> {
        let url = format!("{}/{}", self.endpoint, encode_component(id));
        let request = self.request("PATCH", &url);
        let result = self.exchange("PATCH", &url, request, Some(payload));
        log_outcome("update", &result);
        result
    }
}

fn log_outcome(op: &str, result: &Result<ApiResponse, RemoteError>) {
    match result {
        Ok(response) => tracing::info!(status = response.status, "{op} request succeeded"),
        Err(err) => tracing::error!(status = err.status(), "{op} request failed: {err}"),
    }
}
