//! Job records as supplied by the dispatch front end.
//!
//! Decoding is lenient about shape: numeric strings are accepted where numbers
//! are expected, and a missing or unusable `location` decodes to `None` so the
//! optimizer can apply its malformed-job policy instead of failing inside
//! `serde`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::Coordinate;

/// Attributes the optimizer does not interpret, kept verbatim.
pub type JobAttributes = Map<String, Value>;

/// Identifier of a job, as issued by the entity store.
///
/// # Examples
/// ```
/// use vanta_core::JobId;
///
/// let id: JobId = serde_json::from_str("42").unwrap();
/// assert_eq!(id, JobId::Numeric(42));
/// assert_eq!(JobId::from("job-7").to_string(), "job-7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    /// Opaque string identifier.
    Text(String),
    /// Integer identifier.
    Numeric(i64),
    /// Any other JSON number, such as `1.5` or an integer beyond `i64`.
    OtherNumber(Number),
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Numeric(number) => write!(f, "{number}"),
            Self::OtherNumber(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for JobId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for JobId {
    fn from(value: i64) -> Self {
        Self::Numeric(value)
    }
}

/// A unit of field work to be scheduled on a technician's route.
///
/// # Examples
/// ```
/// use vanta_core::{Coordinate, Job};
///
/// let job: Job = serde_json::from_value(serde_json::json!({
///     "id": "J1",
///     "job_title": "Boiler service",
///     "location": { "lat": 52.52, "lng": 13.40 },
///     "estimated_duration": 45,
///     "priority": "high"
/// }))
/// .unwrap();
///
/// assert_eq!(job.location, Some(Coordinate::new(52.52, 13.40)));
/// assert_eq!(job.effective_duration(60.0), 45.0);
/// assert_eq!(job.attributes["priority"], "high");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Identifier echoed back in the computed order.
    pub id: JobId,
    /// Human-readable title. Non-string values are kept as their JSON text.
    #[serde(
        rename = "job_title",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    /// Job site. `None` when the record carried no usable position.
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub location: Option<Coordinate>,
    /// Expected on-site duration in minutes.
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_duration: Option<f64>,
    /// Remaining attributes, passed through untouched.
    #[serde(flatten)]
    pub attributes: JobAttributes,
}

impl Job {
    /// Construct a job at `location` with no title, duration or extra
    /// attributes.
    #[must_use]
    pub fn new(id: impl Into<JobId>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            title: None,
            location: Some(location),
            estimated_duration: None,
            attributes: JobAttributes::new(),
        }
    }

    /// Set the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the expected on-site duration in minutes.
    #[must_use]
    pub fn with_duration(mut self, minutes: f64) -> Self {
        self.estimated_duration = Some(minutes);
        self
    }

    /// Attach an attribute that is passed through to the route output.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// On-site duration in minutes, falling back to `default_minutes`.
    ///
    /// Absent, negative and non-finite durations all use the fallback.
    #[must_use]
    pub fn effective_duration(&self, default_minutes: f64) -> f64 {
        match self.estimated_duration {
            Some(minutes) if minutes.is_finite() && minutes >= 0.0 => minutes,
            Some(minutes) => {
                log::warn!(
                    "job {} has unusable estimated duration {minutes}; using {default_minutes} minutes",
                    self.id
                );
                default_minutes
            }
            None => default_minutes,
        }
    }
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<Coordinate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Object(fields)) = value else {
        return Ok(None);
    };
    let lat = fields.get("lat").and_then(number_from_value);
    let lng = fields.get("lng").and_then(number_from_value);
    Ok(lat.zip(lng).map(|(lat, lng)| Coordinate::new(lat, lng)))
}
