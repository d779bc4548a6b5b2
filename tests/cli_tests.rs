use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn print_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("invoice-print"))
}

const INVOICE_BODY: &str = r#"{
  "data": {
    "invoice": {
      "id": "inv-42",
      "invoiceNumber": "INV-2024-0042",
      "issueDate": "2024-03-15T00:00:00.000Z",
      "dueDate": "2024-04-14T00:00:00.000Z",
      "subtotal": 10000,
      "taxAmount": 1600,
      "totalAmount": 11600,
      "paidAmount": 0,
      "balanceAmount": 11600,
      "status": "OVERDUE",
      "description": null,
      "notes": null,
      "customer": {
        "name": "Jua Kali Works",
        "email": null,
        "phone": null,
        "billingAddress": "Industrial Area",
        "customerCode": "CUST-7"
      },
      "payments": [],
      "posOrders": [
        { "id": "o1", "orderNumber": "POS-1", "orderItems": [
          { "id": "i1", "quantity": 4, "unitPrice": 2500, "totalPrice": 10000, "product": { "name": "Steel Rod", "sku": "SR-12" } }
        ] }
      ]
    }
  }
}"#;

/// Run `init` and point the config at `base_url` with a stored token
fn setup(temp_dir: &TempDir, base_url: &str) -> std::path::PathBuf {
    let config_path = temp_dir.path().join("print-config");

    print_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    let config = fs::read_to_string(config_path.join("config.toml"))
        .unwrap()
        .replace("http://localhost:3000", base_url);
    fs::write(config_path.join("config.toml"), config).unwrap();
    fs::write(
        config_path.join("credentials.toml"),
        "token = \"secret-token\"\n",
    )
    .unwrap();

    config_path
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_help() {
    print_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("printable A4 documents"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("print-config");

    print_cmd()
        .args(["-C", arg(&config_path), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized invoice-print config"));

    assert!(config_path.join("config.toml").exists());
    assert!(config_path.join("credentials.toml").exists());
}

#[test]
fn test_init_fails_if_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("print-config");

    print_cmd()
        .args(["-C", arg(&config_path), "init"])
        .assert()
        .success();

    print_cmd()
        .args(["-C", arg(&config_path), "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_status_without_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent");

    print_cmd()
        .args(["-C", arg(&config_path), "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_status_reports_missing_token() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("print-config");

    print_cmd()
        .args(["-C", arg(&config_path), "init"])
        .assert()
        .success();

    print_cmd()
        .args(["-C", arg(&config_path), "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ELEGANT STEEL"))
        .stdout(predicate::str::contains("API token:        missing"));
}

#[test]
fn test_render_writes_printable_page() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/invoices/inv-42")
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(INVOICE_BODY)
        .expect(1)
        .create();

    let temp_dir = TempDir::new().unwrap();
    let config_path = setup(&temp_dir, &server.url());

    print_cmd()
        .args(["-C", arg(&config_path), "render", "inv-42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered INV-2024-0042"))
        .stdout(predicate::str::contains("Ksh\u{a0}11,600.00"));

    mock.assert();

    let html = fs::read_to_string(config_path.join("output/INV-2024-0042.html")).unwrap();
    assert!(html.contains("Jua Kali Works"));
    assert!(html.contains(r#"badge badge-red">OVERDUE<"#));
    assert!(html.contains("15 March 2024"));
    assert!(html.contains(r#"<p class="count">1</p>"#));
    assert!(!html.contains("Amount Paid:"));
    assert!(!html.contains("Payment History"));
    assert!(html.contains("window.print()"));
}

#[test]
fn test_render_to_stdout_with_compact_layout() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/invoices/inv-42")
        .with_status(200)
        .with_body(INVOICE_BODY)
        .create();

    let temp_dir = TempDir::new().unwrap();
    let config_path = setup(&temp_dir, &server.url());

    print_cmd()
        .args([
            "-C",
            arg(&config_path),
            "render",
            "inv-42",
            "--layout",
            "compact",
            "-o",
            "-",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("--font-scale: 0.9"))
        .stdout(predicate::str::contains("0726788925").not());
}

#[test]
fn test_render_failure_writes_not_found_page() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/invoices/gone")
        .with_status(404)
        .expect(1)
        .create();

    let temp_dir = TempDir::new().unwrap();
    let config_path = setup(&temp_dir, &server.url());
    let out = temp_dir.path().join("gone.html");

    print_cmd()
        .args(["-C", arg(&config_path), "render", "gone", "-o", arg(&out)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invoice 'gone' not found or unavailable"));

    mock.assert();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("Invoice not found"));
    assert!(!html.contains("INV-2024-0042"));
}

#[test]
fn test_render_without_id_issues_no_request() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create();

    let temp_dir = TempDir::new().unwrap();
    let config_path = setup(&temp_dir, &server.url());
    let out = temp_dir.path().join("pending.html");

    print_cmd()
        .args(["-C", arg(&config_path), "render", "-o", arg(&out)])
        .assert()
        .success()
        .stdout(predicate::str::contains("No invoice id given"));

    mock.assert();
    assert!(fs::read_to_string(&out)
        .unwrap()
        .contains("Loading invoice..."));
}

#[test]
fn test_render_blank_id_writes_loading_page() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create();

    let temp_dir = TempDir::new().unwrap();
    let config_path = setup(&temp_dir, &server.url());

    print_cmd()
        .args(["-C", arg(&config_path), "render", "  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("No invoice id given"));

    mock.assert();
    assert!(config_path.join("output/loading.html").exists());
    assert!(!config_path.join("output/__.html").exists());
}

#[test]
fn test_render_requires_token() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("print-config");

    print_cmd()
        .args(["-C", arg(&config_path), "init"])
        .assert()
        .success();

    print_cmd()
        .args(["-C", arg(&config_path), "render", "inv-42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API token found"));
}

#[test]
fn test_render_file_offline() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = setup(&temp_dir, "http://127.0.0.1:1");
    let saved = temp_dir.path().join("inv-42.json");
    fs::write(&saved, INVOICE_BODY).unwrap();
    let out = temp_dir.path().join("inv-42.html");

    print_cmd()
        .args([
            "-C",
            arg(&config_path),
            "render-file",
            arg(&saved),
            "-o",
            arg(&out),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered INV-2024-0042"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("Steel Rod"));
    assert!(html.contains("KRA PIN: <span class=\"pin\">P000000000A</span>"));
}

#[test]
fn test_render_file_malformed_is_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = setup(&temp_dir, "http://127.0.0.1:1");
    let saved = temp_dir.path().join("broken.json");
    fs::write(&saved, "{ not json").unwrap();

    print_cmd()
        .args(["-C", arg(&config_path), "render-file", arg(&saved)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found or unavailable"));

    assert!(config_path.join("output/broken.html").exists());
}

#[test]
fn test_show_prints_summary() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/invoices/inv-42")
        .with_status(200)
        .with_body(INVOICE_BODY)
        .create();

    let temp_dir = TempDir::new().unwrap();
    let config_path = setup(&temp_dir, &server.url());

    print_cmd()
        .args(["-C", arg(&config_path), "show", "inv-42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoice INV-2024-0042  [OVERDUE]"))
        .stdout(predicate::str::contains("DESCRIPTION"))
        .stdout(predicate::str::contains("Steel Rod"))
        .stdout(predicate::str::contains("Balance due").not());
}

#[test]
fn test_token_flag_overrides_stored_credential() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/invoices/inv-42")
        .match_header("authorization", "Bearer from-flag")
        .with_status(200)
        .with_body(INVOICE_BODY)
        .expect(1)
        .create();

    let temp_dir = TempDir::new().unwrap();
    let config_path = setup(&temp_dir, "http://127.0.0.1:1");
    let url = server.url();

    print_cmd()
        .args([
            "-C",
            arg(&config_path),
            "--base-url",
            url.as_str(),
            "--token",
            "from-flag",
            "show",
            "inv-42",
        ])
        .assert()
        .success();

    mock.assert();
}
