use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use client::{DiskSaver, EmployeeManagerClient, FileSaver};
use record::EmployeeRecord;
use serde_json::{Value, json};
use view::{EmployeePage, PageState, project, render_text};

async fn serve(router: Router) -> Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(format!("http://{addr}"))
}

fn employee_manager(records: Value) -> Router {
    Router::new().route(
        "/api/v1/employeeManager/employees/{employee_id}",
        get(move |Path(employee_id): Path<String>| {
            let records = records.clone();
            async move {
                match records.get(employee_id.as_str()) {
                    Some(record) => (StatusCode::OK, Json(record.clone())),
                    None => (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "message": "employee not found" })),
                    ),
                }
            }
        }),
    )
}

#[tokio::test]
async fn details_page_renders_a_fetched_employee() -> Result<()> {
    let base_url = serve(employee_manager(json!({
        "E123": {
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@home.example",
            "corporateEmail": "jane@corp.example",
            "companyName": "Acme Corp",
            "employeeId": "E123",
            "reportingTo": "Sam Lee",
            "role": "Manager",
            "jobRole": "Engineer",
            "employmentStatus": "Active",
            "streetAddress": "12 Main St",
            "city": "Pune",
            "region": "MH",
            "postalCode": "411001",
            "nationalCard": "http://files.example/nc.pdf",
        }
    })))
    .await?;

    let client = EmployeeManagerClient::new(&base_url)?;
    let mut page = EmployeePage::new();
    let ticket = page.set_employee_id("E123").unwrap();

    let record = client.fetch_employee("E123").await?;
    let view = project(&record);
    assert_eq!(view.attachments.len(), 1);
    assert_eq!(view.attachments[0].reference, "http://files.example/nc.pdf");
    assert!(page.resolve(ticket, view));

    let text = render_text(page.state());
    assert!(text.contains("Employee Information [Manager]"));
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Acme Corp"));
    assert!(text.contains("12 Main St, Pune, MH - 411001"));
    assert!(text.contains("National Card"));
    assert!(text.contains("1.2 MB"));
    assert!(!text.contains("Graduation Certificate"));
    Ok(())
}

#[tokio::test]
async fn sparse_records_degrade_to_placeholders() -> Result<()> {
    let base_url = serve(employee_manager(json!({
        "E9": { "firstName": "Ann", "employeeId": 4123 }
    })))
    .await?;

    let client = EmployeeManagerClient::new(&base_url)?;
    let record = client.fetch_employee("E9").await?;
    let view = project(&record);

    assert_eq!(view.full_name, "Ann ");
    assert_eq!(view.employee_id, "4123");
    assert_eq!(view.company_name, "N/A");
    assert_eq!(view.address, ", ,  - ");
    assert!(view.attachments.is_empty());
    Ok(())
}

#[tokio::test]
async fn failed_fetch_keeps_the_loading_screen() -> Result<()> {
    let base_url = serve(employee_manager(json!({}))).await?;

    let client = EmployeeManagerClient::new(&base_url)?;
    let mut page = EmployeePage::new();
    let ticket = page.set_employee_id("ghost").unwrap();

    assert!(client.fetch_employee("ghost").await.is_err());
    assert!(page.fail(ticket));
    assert_eq!(page.state(), &PageState::Loading);
    assert!(render_text(page.state()).contains("Loading"));
    Ok(())
}

#[tokio::test]
async fn a_stale_fetch_never_overwrites_the_newer_page() -> Result<()> {
    let base_url = serve(employee_manager(json!({
        "E1": { "firstName": "First" },
        "E2": { "firstName": "Second" }
    })))
    .await?;

    let client = EmployeeManagerClient::new(&base_url)?;
    let mut page = EmployeePage::new();
    let stale = page.set_employee_id("E1").unwrap();
    let slow = client.fetch_employee("E1").await?;
    let current = page.set_employee_id("E2").unwrap();
    let fast = client.fetch_employee("E2").await?;

    assert!(page.resolve(current, project(&fast)));
    assert!(!page.resolve(stale, project(&slow)));

    match page.state() {
        PageState::Loaded(view) => assert_eq!(view.full_name, "Second "),
        state => panic!("unexpected state {state:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn repeating_the_current_id_starts_no_second_fetch() -> Result<()> {
    let hits = Arc::new(AtomicUsize::new(0));
    let counted = {
        let hits = hits.clone();
        Router::new().route(
            "/api/v1/employeeManager/employees/{employee_id}",
            get(move |Path(_employee_id): Path<String>| {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(json!({ "firstName": "Jane" }))
                }
            }),
        )
    };
    let base_url = serve(counted).await?;

    let client = EmployeeManagerClient::new(&base_url)?;
    let mut page = EmployeePage::new();

    if let Some(ticket) = page.set_employee_id("E1") {
        let record = client.fetch_employee("E1").await?;
        page.resolve(ticket, project(&record));
    }
    // A re-render with the same id hands out no ticket, so no request runs.
    if let Some(ticket) = page.set_employee_id("E1") {
        let record = client.fetch_employee("E1").await?;
        page.resolve(ticket, project(&record));
    }

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(matches!(page.state(), PageState::Loaded(_)));
    Ok(())
}

#[tokio::test]
async fn download_saves_the_document_under_its_label() -> Result<()> {
    let docs = Router::new().route("/docs/{name}", get(|| async { "PDFDATA" }));
    let base_url = serve(docs).await?;

    let record = EmployeeRecord {
        national_card: Some(format!("{base_url}/docs/nc.pdf")),
        ..EmployeeRecord::default()
    };
    let view = project(&record);
    let attachment = &view.attachments[0];

    let dir = tempfile::tempdir()?;
    let saver = DiskSaver::new(dir.path());
    let path = saver.save(&attachment.reference, attachment.label).await?;

    assert_eq!(path, dir.path().join("National Card"));
    assert_eq!(std::fs::read_to_string(&path)?, "PDFDATA");
    Ok(())
}
