use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Task category as published by the occupation data source.
/// Anything unrecognised (including an empty or missing value) is `Unspecified`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum TaskCategory {
    Core,
    Supplemental,
    Other,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl From<String> for TaskCategory {
    fn from(value: String) -> Self {
        match value.trim() {
            "Core" => TaskCategory::Core,
            "Supplemental" => TaskCategory::Supplemental,
            "Other" => TaskCategory::Other,
            _ => TaskCategory::Unspecified,
        }
    }
}

/// A single job task for one occupation. Immutable once fetched.
///
/// Every field is optional on the wire; null or malformed values fall back to
/// empty / `Unspecified` / 0 instead of failing the whole payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub statement: String,
    #[serde(default, deserialize_with = "deserialize_category")]
    pub category: TaskCategory,
    /// 0 – 100. Accepts a bare number or the API's `{"value": n}` shape,
    /// under either `importance` or the data source's `score` key.
    #[serde(default, alias = "score", deserialize_with = "deserialize_score")]
    pub importance: f64,
}

impl Task {
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            ..Self::default()
        }
    }
}

/// A skill or knowledge element attached to an occupation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OccupationElement {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub score: f64,
}

/// Occupation header. Only `title` feeds the engine (narrative text).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OccupationSummary {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub code: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
}

/// Everything the engine needs for one occupation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OccupationProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: OccupationSummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<Task>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<OccupationElement>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub knowledge: Vec<OccupationElement>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Plain(f64),
    Nested {
        #[serde(default)]
        value: f64,
    },
    Other(IgnoredAny),
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A string, or `""` for null and non-string values.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match RawText::deserialize(deserializer)? {
        RawText::Text(text) => Ok(text),
        RawText::Other(IgnoredAny) => Ok(String::new()),
    }
}

fn deserialize_category<'de, D>(deserializer: D) -> Result<TaskCategory, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_text(deserializer).map(TaskCategory::from)
}

/// Reads a 0 – 100 score from either `42.0` or `{"value": 42.0}`.
/// Null, non-numeric and out-of-range values are coerced into range rather than rejected.
fn deserialize_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RawScore::deserialize(deserializer)? {
        RawScore::Plain(v) | RawScore::Nested { value: v } => v,
        RawScore::Other(IgnoredAny) => 0.0,
    };
    if value.is_finite() {
        Ok(value.clamp(0.0, 100.0))
    } else {
        Ok(0.0)
    }
}
