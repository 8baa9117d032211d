use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::AUTHORIZATION;

use super::models::{ApiEvent, EventsResponse};
use crate::error::{ImporterError, Result};

pub const DEFAULT_BASE_URL: &str = "https://frc-api.firstinspires.org/v3.0";

/// Client for the FRC Events API.
pub struct FrcEventsClient {
    base_url: String,
    auth_header: String,
    client: reqwest::Client,
    lenient: bool,
}

impl FrcEventsClient {
    /// `token` is the raw `user:key` pair; it is base64-encoded into the
    /// Basic authorization header here.
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(token: &str, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_header: format!("Basic {}", STANDARD.encode(token)),
            client: reqwest::Client::new(),
            lenient: false,
        }
    }

    /// In lenient mode a non-success status is logged and the body is still
    /// parsed as the success shape. The default is to stop immediately.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// All events for `season` in the given district.
    pub async fn fetch_district_events(
        &self,
        season: u16,
        district: &str,
    ) -> Result<Vec<ApiEvent>> {
        let url = format!(
            "{}/{}/events/?districtCode={}",
            self.base_url, season, district
        );

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, &self.auth_header)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if !self.lenient {
                return Err(ImporterError::FetchFailed {
                    status: status.as_u16(),
                    body,
                });
            }
            tracing::error!("Error getting events: {} {}", status, body);
        }

        let parsed: EventsResponse = serde_json::from_str(&body).map_err(|e| {
            ImporterError::UnexpectedShape(format!("events response: {e}"))
        })?;

        Ok(parsed.events)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const TOKEN: &str = "frcApiUser:not-a-real-key";

    fn events_body() -> serde_json::Value {
        json!({
            "Events": [{
                "name": "Kettering University",
                "dateStart": "2022-03-05",
                "dateEnd": "2022-03-06",
                "code": "MIKET",
                "venue": "Kettering University",
            }]
        })
    }

    #[tokio::test]
    async fn sends_basic_auth_and_parses_the_events_array() {
        let server = MockServer::start().await;
        let expected_auth = format!("Basic {}", STANDARD.encode(TOKEN));
        Mock::given(method("GET"))
            .and(path("/2022/events/"))
            .and(query_param("districtCode", "FIM"))
            .and(header("Authorization", expected_auth.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(events_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = FrcEventsClient::with_base_url(TOKEN, server.uri());
        let events = client.fetch_district_events(2022, "FIM").await.unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Kettering University");
        assert_eq!(events[0].date_start, "2022-03-05");
        assert_eq!(events[0].date_end, "2022-03-06");
        assert_eq!(events[0].code, "MIKET");
    }

    #[tokio::test]
    async fn non_success_status_stops_immediately_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let client = FrcEventsClient::with_base_url(TOKEN, server.uri());
        let err = client.fetch_district_events(2022, "FIM").await.unwrap_err();

        assert!(matches!(
            err,
            ImporterError::FetchFailed { status: 503, ref body } if body.contains("upstream down")
        ));
    }

    #[tokio::test]
    async fn lenient_mode_still_parses_a_success_shaped_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_json(events_body()))
            .mount(&server)
            .await;

        let client = FrcEventsClient::with_base_url(TOKEN, server.uri()).lenient(true);
        let events = client.fetch_district_events(2022, "FIM").await.unwrap();
        assert_eq!(events[0].code, "MIKET");
    }

    #[tokio::test]
    async fn lenient_mode_surfaces_a_shape_error_for_junk_bodies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid token"))
            .mount(&server)
            .await;

        let client = FrcEventsClient::with_base_url(TOKEN, server.uri()).lenient(true);
        let err = client.fetch_district_events(2022, "FIM").await.unwrap_err();
        assert!(matches!(err, ImporterError::UnexpectedShape(_)));
    }

    #[tokio::test]
    async fn missing_events_key_is_a_shape_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
            .mount(&server)
            .await;

        let client = FrcEventsClient::with_base_url(TOKEN, server.uri());
        let err = client.fetch_district_events(2022, "FIM").await.unwrap_err();
        assert!(matches!(err, ImporterError::UnexpectedShape(_)));
    }
}
