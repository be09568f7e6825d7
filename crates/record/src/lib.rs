//! Employee record model as served by the Employee Manager read endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One employee, keyed by the identifier in the request path.
///
/// The record is an opaque bag of optional strings: every field may be
/// absent, and absence degrades to a placeholder at projection time rather
/// than an error. Fields that arrive as numbers or booleans keep their
/// display text; anything else decodes as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRecord {
    #[serde(deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub corporate_email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub employee_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub reporting_to: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub job_role: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub employment_status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub street_address: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub region: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub postal_code: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub national_card: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub tenth_certificate: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub twelfth_certificate: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub graduation_certificate: Option<String>,
}

impl EmployeeRecord {
    /// Document slots in display order, paired with their fixed labels.
    pub fn attachment_slots(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("National Card", self.national_card.as_deref()),
            ("10th Certificate", self.tenth_certificate.as_deref()),
            ("12th Certificate", self.twelfth_certificate.as_deref()),
            ("Graduation Certificate", self.graduation_certificate.as_deref()),
        ]
    }
}

/// Decodes scalar JSON values as display text; null and non-scalar shapes
/// become absent instead of failing the whole record.
fn lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}
