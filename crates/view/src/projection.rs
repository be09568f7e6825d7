//! Lossy projection from a raw record to page-ready display text.

use record::EmployeeRecord;

/// Fixed page title shown by every renderer.
pub const PAGE_TITLE: &str = "Employee Information";

/// Display text substituted for absent or empty fields.
pub const PLACEHOLDER: &str = "N/A";

/// The read endpoint carries no content length for document references,
/// so every attachment row shows the same figure.
pub const ATTACHMENT_SIZE_STUB: &str = "1.2 MB";

/// How a grid value is set off from its neighbours. Renderers map this to
/// their own styling and stay ignorant of which field is which.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Highlight,
    Badge,
}

/// One downloadable document row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachmentView {
    pub label: &'static str,
    pub reference: String,
    pub size: String,
}

/// Everything the renderer draws, with placeholder substitution done.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeView {
    pub role: String,
    pub full_name: String,
    pub company_name: String,
    pub employee_id: String,
    pub personal_email: String,
    pub corporate_email: String,
    pub reporting_to: String,
    pub job_role: String,
    pub employment_status: String,
    pub address: String,
    pub attachments: Vec<AttachmentView>,
}

impl EmployeeView {
    /// Grid rows in display order: fixed label, value, emphasis.
    pub fn grid(&self) -> [(&'static str, &str, Emphasis); 8] {
        [
            ("Full name", self.full_name.as_str(), Emphasis::Normal),
            ("Company Name", self.company_name.as_str(), Emphasis::Highlight),
            ("Employee ID", self.employee_id.as_str(), Emphasis::Normal),
            ("Personal Email", self.personal_email.as_str(), Emphasis::Normal),
            ("Corporate Email", self.corporate_email.as_str(), Emphasis::Normal),
            ("Reporting to", self.reporting_to.as_str(), Emphasis::Normal),
            ("Job role", self.job_role.as_str(), Emphasis::Normal),
            ("Employee Status", self.employment_status.as_str(), Emphasis::Badge),
        ]
    }
}

/// Projects a raw record into display text.
///
/// Absent and empty fields read alike. Most fields fall back to
/// [`PLACEHOLDER`]; the last name and the four address segments collapse
/// to empty text instead, so the composed strings keep their shape.
pub fn project(record: &EmployeeRecord) -> EmployeeView {
    let attachments = record
        .attachment_slots()
        .into_iter()
        .filter_map(|(label, reference)| {
            let reference = reference.filter(|text| !text.is_empty())?;
            Some(AttachmentView {
                label,
                reference: reference.to_owned(),
                size: ATTACHMENT_SIZE_STUB.to_owned(),
            })
        })
        .collect();

    EmployeeView {
        role: or_placeholder(record.role.as_deref()),
        full_name: format!(
            "{} {}",
            or_placeholder(record.first_name.as_deref()),
            or_empty(record.last_name.as_deref()),
        ),
        company_name: or_placeholder(record.company_name.as_deref()),
        employee_id: or_placeholder(record.employee_id.as_deref()),
        personal_email: or_placeholder(record.email.as_deref()),
        corporate_email: or_placeholder(record.corporate_email.as_deref()),
        reporting_to: or_placeholder(record.reporting_to.as_deref()),
        job_role: or_placeholder(record.job_role.as_deref()),
        employment_status: or_placeholder(record.employment_status.as_deref()),
        address: format!(
            "{}, {}, {} - {}",
            or_empty(record.street_address.as_deref()),
            or_empty(record.city.as_deref()),
            or_empty(record.region.as_deref()),
            or_empty(record.postal_code.as_deref()),
        ),
        attachments,
    }
}

fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => PLACEHOLDER.to_owned(),
    }
}

fn or_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_owned()
}
