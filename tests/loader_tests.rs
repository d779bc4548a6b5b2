use std::time::Duration;

use invoice_print::config::Credential;
use invoice_print::loader::{HttpInvoiceSource, InvoiceSource, InvoiceView, LoadState};
use invoice_print::{InvoiceStatus, PrintError};

const INVOICE_BODY: &str = r#"{
  "success": true,
  "data": {
    "invoice": {
      "id": "inv-42",
      "invoiceNumber": "INV-2024-0042",
      "issueDate": "2024-03-15T00:00:00.000Z",
      "dueDate": "2024-04-14T00:00:00.000Z",
      "subtotal": 10000,
      "taxAmount": 1600,
      "totalAmount": 11600,
      "paidAmount": 5000,
      "balanceAmount": 6600,
      "status": "PARTIALLY_PAID",
      "description": null,
      "notes": null,
      "customer": {
        "name": "Jua Kali Works",
        "email": "accounts@juakali.example",
        "phone": "0700111222",
        "billingAddress": "Industrial Area",
        "customerCode": "CUST-7"
      },
      "payments": [
        { "id": "p1", "amount": 5000, "paymentDate": "2024-03-16T09:00:00.000Z", "paymentMethod": "MPESA", "reference": "QWE123" }
      ],
      "posOrders": [
        { "id": "o1", "orderNumber": "POS-1", "orderItems": [
          { "id": "i1", "quantity": 2, "unitPrice": 2500, "totalPrice": 5000, "product": { "name": "Steel Rod", "sku": "SR-12" } },
          { "id": "i2", "quantity": 4, "unitPrice": 250, "totalPrice": 1000, "product": { "name": "Hinge", "sku": "HG-4" } }
        ] },
        { "id": "o2", "orderNumber": "POS-2", "orderItems": [
          { "id": "i3", "quantity": 1, "unitPrice": 4000, "totalPrice": 4000, "product": { "name": "Gate Lock", "sku": "GL-1" } }
        ] }
      ]
    }
  }
}"#;

fn source(server: &mockito::Server) -> HttpInvoiceSource {
    HttpInvoiceSource::new(
        &server.url(),
        Credential::new("secret-token").unwrap(),
        Duration::from_secs(5),
    )
}

#[test]
fn fetch_sends_bearer_token_and_parses_envelope() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/invoices/inv-42")
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(INVOICE_BODY)
        .expect(1)
        .create();

    let invoice = source(&server).fetch("inv-42").unwrap();

    mock.assert();
    assert_eq!(invoice.invoice_number, "INV-2024-0042");
    assert_eq!(invoice.status, InvoiceStatus::PartiallyPaid);
    assert_eq!(invoice.payments.len(), 1);

    let names: Vec<String> = invoice
        .line_items()
        .into_iter()
        .map(|item| item.description)
        .collect();
    assert_eq!(names, ["Steel Rod", "Hinge", "Gate Lock"]);
}

#[test]
fn identifier_is_percent_encoded() {
    let server = mockito::Server::new();
    let url = source(&server).invoice_url("a b/c");
    assert!(url.ends_with("/api/invoices/a%20b%2Fc"));
}

#[test]
fn non_success_status_is_an_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/invoices/missing")
        .with_status(404)
        .with_body(r#"{"success":false,"error":"Invoice not found"}"#)
        .create();

    let err = source(&server).fetch("missing").unwrap_err();

    mock.assert();
    assert!(matches!(err, PrintError::HttpStatus(404)));
}

#[test]
fn malformed_body_is_an_error() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/invoices/inv-42")
        .with_status(200)
        .with_body("{\"data\": {\"invoice\": {\"id\": 7}}}")
        .create();

    let err = source(&server).fetch("inv-42").unwrap_err();
    assert!(matches!(err, PrintError::MalformedResponse(_)));
}

#[test]
fn view_reaches_unavailable_on_server_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/invoices/inv-42")
        .with_status(500)
        .expect(1)
        .create();

    let mut view = InvoiceView::new();
    let state = view.load(&source(&server), Some("inv-42"));

    assert!(matches!(state, LoadState::Unavailable));
    assert!(state.invoice().is_none());
    mock.assert();
}

#[test]
fn view_without_identifier_never_calls_server() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create();

    let mut view = InvoiceView::new();
    assert!(view.load(&source(&server), None).is_loading());
    mock.assert();
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let source = HttpInvoiceSource::new(
        "http://127.0.0.1:1",
        Credential::new("secret-token").unwrap(),
        Duration::from_secs(2),
    );

    let err = source.fetch("inv-42").unwrap_err();
    assert!(matches!(err, PrintError::Transport(_)));
}
