//! Page lifecycle for the details screen.

use crate::projection::EmployeeView;

/// What the renderer may draw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PageState {
    /// No record has resolved yet. Also the state after a failed fetch;
    /// the page never surfaces fetch errors inline.
    #[default]
    Loading,
    /// A record resolved for the current employee id.
    Loaded(EmployeeView),
}

/// Pairs an in-flight fetch with the id generation that started it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Details page showing one employee id at a time.
///
/// Changing the id invalidates any fetch still in flight: a resolution
/// carrying a stale ticket is dropped, so the screen cannot show a record
/// for an id the page has already left.
#[derive(Clone, Debug, Default)]
pub struct EmployeePage {
    employee_id: Option<String>,
    generation: u64,
    state: PageState,
}

impl EmployeePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Id the page is currently loading or showing.
    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }

    /// Points the page at an employee id.
    ///
    /// Returns a ticket when a fetch should start: on the first call, and
    /// whenever the id differs from the current one. Repeating the current
    /// id keeps whatever has resolved and starts nothing.
    pub fn set_employee_id(&mut self, employee_id: &str) -> Option<FetchTicket> {
        if self.employee_id.as_deref() == Some(employee_id) {
            return None;
        }
        self.employee_id = Some(employee_id.to_owned());
        self.generation += 1;
        self.state = PageState::Loading;
        Some(FetchTicket {
            generation: self.generation,
        })
    }

    /// Applies a resolved record if its ticket is still current.
    pub fn resolve(&mut self, ticket: FetchTicket, view: EmployeeView) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.state = PageState::Loaded(view);
        true
    }

    /// Notes a failed fetch and reports whether it belonged to the current
    /// id. The screen state never changes: the page stays on the loading
    /// screen and leaves the error to the caller's log.
    pub fn fail(&mut self, ticket: FetchTicket) -> bool {
        ticket.generation == self.generation
    }
}
