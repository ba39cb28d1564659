use crate::domain::model::{MinuteOfDay, PermitRecord};
use crate::domain::ports::PermitSource;
use crate::utils::error::{FinderError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Mobile food facility permit schedule on the SF open data portal.
pub const DEFAULT_ENDPOINT: &str = "https://data.sfgov.org/resource/jjew-r69b.json";

/// Fetches permit records from a SODA endpoint as one GET per run.
pub struct SodaSource {
    client: Client,
    endpoint: String,
}

impl SodaSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PermitSource for SodaSource {
    async fn fetch(&self, day_of_week: u8) -> Result<Vec<PermitRecord>> {
        tracing::debug!("Requesting permits from: {}", self.endpoint);

        // Narrow server-side to today's rows, pre-sorted by vendor name.
        // Local filtering and sorting remain authoritative.
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("dayorder", day_of_week.to_string().as_str()),
                ("$order", "applicant"),
            ])
            .send()
            .await?;

        tracing::debug!("SODA response status: {}", response.status());
        if !response.status().is_success() {
            return Err(FinderError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let raw: Vec<RawPermit> = serde_json::from_str(&body)?;
        raw.into_iter().map(PermitRecord::try_from).collect()
    }
}

/// Wire shape. SODA serves every field as a string, but older extracts carry
/// `dayorder` and the clock fields as numbers; both are accepted here and
/// converted to the typed record in one place.
#[derive(Debug, Deserialize)]
struct RawPermit {
    applicant: String,
    #[serde(default)]
    location: String,
    #[serde(alias = "dayOrder")]
    dayorder: RawField,
    start24: RawField,
    end24: RawField,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Number(u64),
}

impl RawField {
    fn as_text(&self) -> String {
        match self {
            RawField::Text(s) => s.clone(),
            RawField::Number(n) => n.to_string(),
        }
    }
}

impl TryFrom<RawPermit> for PermitRecord {
    type Error = FinderError;

    fn try_from(raw: RawPermit) -> Result<Self> {
        if raw.applicant.trim().is_empty() {
            return Err(FinderError::Ingest {
                field: "applicant",
                value: raw.applicant,
                reason: "vendor name cannot be empty".to_string(),
            });
        }
        Ok(PermitRecord {
            dayorder: parse_dayorder(&raw.dayorder.as_text())?,
            start24: parse_clock("start24", &raw.start24.as_text())?,
            end24: parse_clock("end24", &raw.end24.as_text())?,
            applicant: raw.applicant,
            location: raw.location,
        })
    }
}

fn parse_dayorder(value: &str) -> Result<u8> {
    let ingest_err = |reason: String| FinderError::Ingest {
        field: "dayorder",
        value: value.to_string(),
        reason,
    };
    let day: u8 = value
        .trim()
        .parse()
        .map_err(|_| ingest_err("not an integer".to_string()))?;
    if day > 6 {
        return Err(ingest_err("day of week must be 0-6".to_string()));
    }
    Ok(day)
}

fn parse_clock(field: &'static str, value: &str) -> Result<MinuteOfDay> {
    MinuteOfDay::parse(value).ok_or_else(|| FinderError::Ingest {
        field,
        value: value.to_string(),
        reason: "expected HH:MM or a bare hour".to_string(),
    })
}
