//! Typed records for ZeroBounce API responses.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::client::ApiVersion;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_MILLIS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Outcome of a single email validation.
///
/// Every field is optional: the service may return `null` or omit any key,
/// and a missing key always maps to `None`, never to an empty string. Fields
/// marked *v1 only* or *v2 only* stay `None` under the other API revision.
///
/// `mx_found`, `free_email`, `disposable` and `toxic` are tri-state: `None`
/// means the service did not report the property, which is distinct from an
/// explicit `Some(false)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    /// The email address as echoed back by the service.
    pub email_address: Option<String>,
    /// Top-level verdict, e.g. "valid", "invalid", "catch-all", "unknown",
    /// "spamtrap", "abuse", "do_not_mail".
    pub status: Option<String>,
    /// Reason code refining the status, e.g. "mailbox_not_found".
    pub sub_status: Option<String>,
    /// Local part of the address.
    pub account: Option<String>,
    /// Domain part of the address.
    pub domain: Option<String>,
    /// Whether the domain has MX records.
    pub mx_found: Option<bool>,
    /// Whether the address belongs to a free provider (gmail, yahoo, ...).
    pub free_email: Option<bool>,
    /// Whether the domain is a disposable-email provider (v1 only).
    pub disposable: Option<bool>,
    /// Whether the address is known to be toxic/abusive (v1 only).
    pub toxic: Option<bool>,
    /// Suggested correction for a likely typo (v2 only).
    pub did_you_mean: Option<String>,
    /// Preferred MX record of the domain (v2 only).
    pub mx_record: Option<String>,
    /// Detected SMTP provider of the domain (v2 only).
    pub smtp_provider: Option<String>,
    /// Age of the domain in days, kept as text because the service sends it
    /// as either a number or a string and may omit it entirely.
    pub domain_age_days: Option<String>,
    /// Best-effort first name guess.
    pub first_name: Option<String>,
    /// Best-effort last name guess.
    pub last_name: Option<String>,
    /// Best-effort gender guess.
    pub gender: Option<String>,
    /// Free-form location derived from the submitted IP (v1 only).
    pub location: Option<String>,
    /// Country derived from the submitted IP.
    pub country: Option<String>,
    /// City derived from the submitted IP.
    pub city: Option<String>,
    /// Zipcode derived from the submitted IP.
    pub zipcode: Option<String>,
    /// Region/state derived from the submitted IP.
    pub region: Option<String>,
    /// Domain registration date (v1 only).
    pub creation_date: Option<NaiveDate>,
    /// Server-side processing timestamp, millisecond precision.
    pub processed_at: Option<NaiveDateTime>,
}

impl ValidationResult {
    /// Placeholder result substituted for a failed lookup so that a batch of
    /// validations can continue past one slow or broken call.
    pub(crate) fn degraded(email: &str, sub_status: &str) -> Self {
        Self {
            email_address: Some(email.to_lowercase()),
            status: Some("Unknown".to_string()),
            sub_status: Some(sub_status.to_string()),
            ..Self::default()
        }
    }

    /// Map a 200 response body onto a result, key by key.
    ///
    /// Absent and explicitly-null keys both become `None`. A date value that
    /// fails to parse is dropped to `None` rather than failing the call.
    pub(crate) fn from_json(body: &Value, version: ApiVersion) -> Self {
        let mut result = Self {
            email_address: opt_string(body, "address"),
            status: opt_string(body, "status"),
            sub_status: opt_string(body, "sub_status"),
            account: opt_string(body, "account"),
            domain: opt_string(body, "domain"),
            mx_found: opt_bool(body, "mx_found"),
            free_email: opt_bool(body, "free_email"),
            domain_age_days: opt_text(body, "domain_age_days"),
            first_name: opt_string(body, "firstname"),
            last_name: opt_string(body, "lastname"),
            gender: opt_string(body, "gender"),
            country: opt_string(body, "country"),
            city: opt_string(body, "city"),
            zipcode: opt_string(body, "zipcode"),
            region: opt_string(body, "region"),
            processed_at: opt_string(body, "processed_at")
                .and_then(|s| parse_date_time_millis(&s)),
            ..Self::default()
        };

        match version {
            ApiVersion::V1 => {
                result.disposable = opt_bool(body, "disposable");
                result.toxic = opt_bool(body, "toxic");
                result.location = opt_string(body, "location");
                result.creation_date =
                    opt_string(body, "creation_date").and_then(|s| parse_date(&s));
            }
            ApiVersion::V2 => {
                result.did_you_mean = opt_string(body, "did_you_mean");
                result.mx_record = opt_string(body, "mx_record");
                result.smtp_provider = opt_string(body, "smtp_provider");
            }
        }

        result
    }
}

/// Null-safe string field access.
fn opt_string(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Null-safe boolean field access.
fn opt_bool(body: &Value, key: &str) -> Option<bool> {
    body.get(key).and_then(Value::as_bool)
}

/// Null-safe access to a field the service sends as either a string or a
/// bare number, normalized to text.
fn opt_text(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|err| warn!(value = raw, %err, "unparsable date field"))
        .ok()
}

fn parse_date_time_millis(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, DATE_TIME_MILLIS_FORMAT)
        .map_err(|err| warn!(value = raw, %err, "unparsable date-time field"))
        .ok()
}
