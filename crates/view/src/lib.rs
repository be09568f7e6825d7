//! View model for the employee details screen.

pub mod page;
pub mod projection;
pub mod render;

pub use page::{EmployeePage, FetchTicket, PageState};
pub use projection::{
    ATTACHMENT_SIZE_STUB, AttachmentView, Emphasis, EmployeeView, PAGE_TITLE, PLACEHOLDER, project,
};
pub use render::render_text;
