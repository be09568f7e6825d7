//! One-shot mode: fetch, project, print, exit.

use anyhow::Result;
use client::EmployeeManagerClient;
use view::{EmployeePage, PageState, project, render_text};

/// Fetches one record and prints the rendered page.
///
/// On a failed fetch the loading screen is printed and the process exits
/// with an error, mirroring the interactive screen that never leaves the
/// loading state.
pub async fn run(client: &EmployeeManagerClient, employee_id: &str) -> Result<()> {
    let mut page = EmployeePage::new();
    // A fresh page always accepts the first id.
    let Some(ticket) = page.set_employee_id(employee_id) else {
        return Ok(());
    };

    match client.fetch_employee(employee_id).await {
        Ok(record) => {
            page.resolve(ticket, project(&record));
        }
        Err(error) => {
            page.fail(ticket);
            tracing::error!(%error, employee_id, "employee fetch failed");
        }
    }

    print!("{}", render_text(page.state()));
    if matches!(page.state(), PageState::Loading) {
        anyhow::bail!("no record resolved for employee {employee_id}");
    }
    Ok(())
}
