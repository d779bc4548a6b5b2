use chrono::{DateTime, Utc};

use crate::config::Company;
use crate::format::{format_currency, format_date, format_instant};
use crate::invoice::{format_quantity, Invoice, LineItem, Payment};
use crate::loader::LoadState;

use super::layout::{LayoutPreset, LayoutVariant};
use super::style::{preset_variables, STYLESHEET};

/// Everything the renderer needs besides the invoice itself
pub struct RenderContext<'a> {
    pub company: &'a Company,
    pub layout: LayoutVariant,
    pub printed_at: DateTime<Utc>,
}

impl<'a> RenderContext<'a> {
    pub fn new(company: &'a Company, layout: LayoutVariant) -> Self {
        Self {
            company,
            layout,
            printed_at: Utc::now(),
        }
    }
}

/// Render the full HTML page for whatever state the view is in
pub fn render_document(state: &LoadState, ctx: &RenderContext) -> String {
    let preset = ctx.layout.preset();
    match state {
        LoadState::Loading => html_shell(
            "Loading invoice...",
            &preset,
            r#"<div class="state-message"><div><div class="spinner"></div><p>Loading invoice...</p></div></div>"#,
        ),
        LoadState::Unavailable => html_shell(
            "Invoice not found",
            &preset,
            r#"<div class="state-message"><div><p class="not-found">Invoice not found</p></div></div>"#,
        ),
        LoadState::Loaded(invoice) => render_invoice(invoice, ctx),
    }
}

/// Render a loaded invoice as a printable page
pub fn render_invoice(invoice: &Invoice, ctx: &RenderContext) -> String {
    let preset = ctx.layout.preset();
    let items = invoice.line_items();

    let mut body = String::new();
    body.push_str(PRINT_TOOLBAR);
    body.push_str(r#"<div class="page"><div class="invoice-print-container">"#);
    body.push_str(&header(invoice, ctx.company, &preset));
    body.push_str(&summary(invoice, ctx.company, items.len()));
    if !items.is_empty() {
        body.push_str(&items_table(&items, &preset));
    }
    body.push_str(&totals(invoice, ctx.company));
    body.push_str(&notes(invoice));
    if !invoice.payments.is_empty() {
        body.push_str(&payment_history(&invoice.payments));
    }
    body.push_str(&footer(ctx));
    body.push_str("</div></div>");

    html_shell(
        &format!("Invoice {}", invoice.invoice_number),
        &preset,
        &body,
    )
}

/// The only interactive control; hidden by the print stylesheet
const PRINT_TOOLBAR: &str = r#"<div class="print-toolbar"><button type="button" onclick="window.print()">Print Invoice</button></div>"#;

pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn html_shell(title: &str, preset: &LayoutPreset, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en-KE">
<head>
<meta charset="UTF-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1.0"/>
<title>{}</title>
<style>
{}
{}
</style>
</head>
<body>{}</body>
</html>
"#,
        escape(title),
        preset_variables(preset),
        STYLESHEET,
        body
    )
}

fn header(invoice: &Invoice, company: &Company, preset: &LayoutPreset) -> String {
    let mut out = String::from(r#"<div class="header"><div class="header-grid">"#);

    out.push_str(r#"<div class="brand">"#);
    if let Some(logo) = company.logo.as_deref().filter(|l| !l.trim().is_empty()) {
        out.push_str(&format!(
            r#"<img src="{}" alt="{} logo"/>"#,
            escape(logo),
            escape(&company.name)
        ));
    }
    out.push_str(&format!("<div><h1>{}</h1>", escape(&company.name)));
    if let Some(tagline) = &company.tagline {
        out.push_str(&format!(r#"<p class="small muted">{}</p>"#, escape(tagline)));
    }
    out.push_str("</div></div>");

    out.push_str(&format!(
        r#"<div class="title"><h2>INVOICE</h2><p class="number">{}</p></div>"#,
        escape(&invoice.invoice_number)
    ));

    out.push_str(r#"<div class="contact">"#);
    out.push_str(&format!(
        r#"<p class="strong">KRA PIN: <span class="pin">{}</span></p>"#,
        escape(&company.tax_pin)
    ));
    if preset.show_contact_details {
        if !company.phones.is_empty() {
            out.push_str(&format!(
                r#"<p class="muted">Tel: {}</p>"#,
                escape(&company.phones.join(" / "))
            ));
        }
        out.push_str(&format!(r#"<p class="muted">{}</p>"#, escape(&company.location)));
    }
    out.push_str("</div></div>");

    let status = &invoice.status;
    out.push_str(&format!(
        r#"<div class="dates"><div><p class="small upper muted strong">Issued</p><p class="strong">{}</p></div><div class="center"><p class="small upper muted strong">Due</p><p class="strong">{}</p></div><div class="right"><p class="badge {}">{}</p></div></div>"#,
        format_date(&invoice.issue_date),
        format_date(&invoice.due_date),
        status.tone().css_class(),
        escape(&status.label())
    ));

    out.push_str("</div>");
    out
}

fn summary(invoice: &Invoice, company: &Company, item_count: usize) -> String {
    let customer = &invoice.customer;
    let mut out = String::from(r#"<div class="summary"><div>"#);
    out.push_str(r#"<p class="small upper strong">Bill To</p>"#);
    out.push_str(&format!(r#"<p class="strong">{}</p>"#, escape(&customer.name)));
    if let Some(address) = customer.billing_address.as_deref().filter(|a| !a.is_empty()) {
        out.push_str(&format!(r#"<p class="small muted">{}</p>"#, escape(address)));
    }
    if let Some(phone) = customer.phone.as_deref().filter(|p| !p.is_empty()) {
        out.push_str(&format!(r#"<p class="small muted">Tel: {}</p>"#, escape(phone)));
    }
    out.push_str("</div>");

    out.push_str(&format!(
        r#"<div class="count-box"><p class="count">{item_count}</p><p class="small muted strong">Line Items</p></div>"#
    ));
    out.push_str(&format!(
        r#"<div class="vat-box"><p class="small muted strong">VAT Rate</p><p class="rate">{}%</p><p class="small muted">Included in Total</p></div>"#,
        format_quantity(company.vat_rate)
    ));

    out.push_str("</div>");
    out
}

fn items_table(items: &[LineItem], preset: &LayoutPreset) -> String {
    let mut out = String::from(
        r#"<table class="items"><thead><tr><th>Description</th><th class="qty">Qty</th><th class="num">Unit Price</th><th class="num">Total</th></tr></thead><tbody>"#,
    );

    for item in items {
        let sku = if preset.show_sku && !item.sku.is_empty() {
            format!(r#"<span class="sku">{}</span>"#, escape(&item.sku))
        } else {
            String::new()
        };
        out.push_str(&format!(
            r#"<tr><td>{}{}</td><td class="qty">{}</td><td class="num">{}</td><td class="num strong">{}</td></tr>"#,
            escape(&item.description),
            sku,
            format_quantity(item.quantity),
            format_currency(item.unit_price),
            format_currency(item.total)
        ));
    }

    out.push_str("</tbody></table>");
    out
}

fn totals(invoice: &Invoice, company: &Company) -> String {
    let mut out = String::from(r#"<div class="totals"><div class="rows">"#);

    out.push_str(&total_row("", "Subtotal:", invoice.subtotal));
    out.push_str(&total_row(
        "tax",
        &format!("VAT @ {}%:", format_quantity(company.vat_rate)),
        invoice.tax_amount,
    ));
    out.push_str(&total_row("grand", "TOTAL DUE:", invoice.total_amount));

    // Balance only matters once something has been paid
    if invoice.paid_amount > 0.0 {
        out.push_str(&total_row("paid", "Amount Paid:", invoice.paid_amount));
        if invoice.balance_amount > 0.0 {
            out.push_str(&total_row("balance", "Balance Due:", invoice.balance_amount));
        }
    }

    out.push_str("</div></div>");
    out
}

fn total_row(class: &str, label: &str, amount: f64) -> String {
    format!(
        r#"<div class="row {}"><span>{}</span><span>{}</span></div>"#,
        class,
        escape(label),
        format_currency(amount)
    )
}

fn notes(invoice: &Invoice) -> String {
    let parts: Vec<&str> = [invoice.description.as_deref(), invoice.notes.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        return String::new();
    }

    let mut out = String::from(r#"<div class="notes"><p class="small upper strong">Notes</p>"#);
    for part in parts {
        out.push_str(&format!(r#"<p class="muted">{}</p>"#, escape(part)));
    }
    out.push_str("</div>");
    out
}

fn payment_history(payments: &[Payment]) -> String {
    let mut out = String::from(r#"<div class="payments"><h3>Payment History</h3>"#);
    for payment in payments {
        out.push_str(&format!(
            r#"<div class="payment"><span>{} - {}</span><span class="amount">{}</span></div>"#,
            format_date(&payment.payment_date),
            escape(&payment.payment_method),
            format_currency(payment.amount)
        ));
    }
    out.push_str("</div>");
    out
}

fn footer(ctx: &RenderContext) -> String {
    let company = ctx.company;
    let mut out = String::from(r#"<div class="footer">"#);
    out.push_str(r#"<p class="thanks">Thank you for your business!</p>"#);
    out.push_str(
        "<p>VAT is included in all prices above. This is a computer-generated document and requires no signature for validity.</p>",
    );
    if let Some(note) = &company.footer_note {
        out.push_str(&format!("<p>{}</p>", escape(note)));
    }
    out.push_str(&format!(
        r#"<p class="strong">{} | {} | KRA PIN: {}</p>"#,
        escape(&company.name),
        escape(&company.location),
        escape(&company.tax_pin)
    ));
    out.push_str(&format!(
        r#"<p class="printed">Printed on {}</p>"#,
        format_instant(ctx.printed_at)
    ));
    out.push_str("</div>");
    out
}
