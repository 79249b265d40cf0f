//! Post schema and field validation

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use serde_yaml::Value;

use super::error::{FieldError, FieldIssue};
use super::FrontMatter;
use crate::consts::Category;

/// Validated front-matter of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostData {
    pub title: String,
    pub date: DateTime<Utc>,
    pub category: Category,
    pub excerpt: Option<String>,
    pub cover: Option<String>,
    pub draft: bool,
    /// Collection id override
    #[serde(skip)]
    pub slug: Option<String>,
}

impl PostData {
    pub fn calendar_date(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

const KNOWN_FIELDS: [&str; 7] = ["title", "date", "category", "excerpt", "cover", "draft", "slug"];

/// Validate every field, collecting all field errors for the file
pub fn validate(fm: &FrontMatter) -> Result<PostData, Vec<FieldError>> {
    for key in fm.keys().filter(|k| !KNOWN_FIELDS.contains(&k.as_str())) {
        tracing::debug!("Ignoring unknown front-matter field '{}'", key);
    }

    let mut errors = Vec::new();

    let title = collect(validate_title(fm.get("title")), &mut errors);
    let date = collect(validate_date(fm.get("date")), &mut errors);
    let category = collect(validate_category(fm.get("category")), &mut errors);
    let excerpt = collect(validate_optional_string("excerpt", fm.get("excerpt")), &mut errors);
    let cover = collect(validate_optional_string("cover", fm.get("cover")), &mut errors);
    let draft = collect(validate_draft(fm.get("draft")), &mut errors);
    let slug = collect(validate_slug(fm.get("slug")), &mut errors);

    match (title, date, category, excerpt, cover, draft, slug) {
        (
            Some(title),
            Some(date),
            Some(category),
            Some(excerpt),
            Some(cover),
            Some(draft),
            Some(slug),
        ) if errors.is_empty() => {
            Ok(PostData {
                title,
                date,
                category,
                excerpt,
                cover,
                draft,
                slug,
            })
        }
        _ => Err(errors),
    }
}

fn collect<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    result.map_err(|e| errors.push(e)).ok()
}

/// Required, non-empty string
pub fn validate_title(value: Option<&Value>) -> Result<String, FieldError> {
    match present(value) {
        None => Err(FieldError::new("title", FieldIssue::Missing)),
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(FieldError::new("title", FieldIssue::Empty))
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(invalid_type("title", "string", other)),
    }
}

/// Required date, coerced from a date string or epoch milliseconds
pub fn validate_date(value: Option<&Value>) -> Result<DateTime<Utc>, FieldError> {
    let invalid = |value: String| FieldError::new("date", FieldIssue::InvalidDate { value });

    match present(value) {
        None => Err(FieldError::new("date", FieldIssue::Missing)),
        Some(Value::String(s)) => parse_date_string(s).ok_or_else(|| invalid(s.clone())),
        Some(Value::Number(n)) => {
            let millis = n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64));
            millis
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .ok_or_else(|| invalid(n.to_string()))
        }
        Some(other) => Err(invalid_type("date", "date string or number", other)),
    }
}

/// Required member of the category enumeration
pub fn validate_category(value: Option<&Value>) -> Result<Category, FieldError> {
    match present(value) {
        None => Err(FieldError::new("category", FieldIssue::Missing)),
        Some(Value::String(s)) => s.parse().map_err(|_| {
            FieldError::new("category", FieldIssue::InvalidEnum { value: s.clone() })
        }),
        Some(other) => Err(invalid_type("category", "string", other)),
    }
}

pub fn validate_optional_string(
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<String>, FieldError> {
    match present(value) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(invalid_type(field, "string", other)),
    }
}

/// Optional boolean, `false` when absent
pub fn validate_draft(value: Option<&Value>) -> Result<bool, FieldError> {
    match present(value) {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(invalid_type("draft", "boolean", other)),
    }
}

/// Optional non-empty string; surrounding `/` are dropped
pub fn validate_slug(value: Option<&Value>) -> Result<Option<String>, FieldError> {
    match present(value) {
        None => Ok(None),
        Some(Value::String(s)) => {
            let slug = s.trim().trim_matches('/');
            if slug.is_empty() {
                Err(FieldError::new("slug", FieldIssue::Empty))
            } else {
                Ok(Some(slug.to_string()))
            }
        }
        Some(other) => Err(invalid_type("slug", "string", other)),
    }
}

/// Explicit `null` counts as absent
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn invalid_type(field: &'static str, expected: &'static str, found: &Value) -> FieldError {
    FieldError::new(
        field,
        FieldIssue::InvalidType {
            expected,
            found: type_name(found),
        },
    )
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Parse a date string in various formats. Values without an offset are UTC.
fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f %z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}
