use super::layout::LayoutPreset;

/// Screen and print rules for the invoice page. Sizing comes from the
/// custom properties emitted by [`preset_variables`].
pub const STYLESHEET: &str = r#"
* { box-sizing: border-box; }
body {
  margin: 0;
  font-family: "Helvetica Neue", Helvetica, Arial, sans-serif;
  font-size: calc(14px * var(--font-scale));
  color: #111827;
  background: #f9fafb;
}
.print-toolbar { position: fixed; top: 1rem; right: 1rem; z-index: 50; }
.print-toolbar button {
  padding: 0.5rem 1rem;
  background: #2563eb;
  color: #fff;
  border: 0;
  border-radius: 0.5rem;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
  font-size: 0.95rem;
  cursor: pointer;
}
.print-toolbar button:hover { background: #1d4ed8; }
.page { padding: 1rem; }
.invoice-print-container {
  max-width: 56rem;
  margin: 0 auto;
  background: #fff;
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
  padding: var(--page-padding);
}
.state-message {
  display: flex; align-items: center; justify-content: center;
  min-height: 100vh; text-align: center; color: #4b5563;
}
.spinner {
  width: 3rem; height: 3rem; margin: 0 auto;
  border-radius: 50%; border-bottom: 2px solid #2563eb;
  animation: spin 1s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.not-found { color: #dc2626; font-size: 1.125rem; }
.muted { color: #4b5563; }
.small { font-size: 0.75rem; }
.upper { text-transform: uppercase; }
.strong { font-weight: 700; }
.header { border-bottom: 4px solid #2563eb; padding-bottom: var(--section-gap); margin-bottom: var(--section-gap); }
.header-grid, .dates, .summary { display: grid; grid-template-columns: repeat(3, 1fr); gap: var(--section-gap); align-items: start; }
.brand { display: flex; align-items: center; gap: 0.75rem; }
.brand img { width: 3rem; height: 3rem; object-fit: contain; }
.brand h1 { margin: 0; font-size: 1.25rem; color: #1e3a8a; }
.brand p, .contact p, .dates p, .summary p { margin: 0.15rem 0; }
.title { text-align: center; }
.title h2 { margin: 0; font-size: 1.875rem; }
.title .number { color: #2563eb; font-weight: 600; }
.contact { text-align: right; font-size: 0.75rem; }
.contact .pin { color: #2563eb; }
.dates { padding-top: var(--section-gap); margin-top: var(--section-gap); border-top: 1px solid #e5e7eb; }
.dates .center { text-align: center; }
.dates .right { text-align: right; }
.badge { display: inline-block; padding: 0.25rem 0.75rem; border-radius: 0.25rem; font-size: 0.75rem; font-weight: 700; text-transform: uppercase; }
.badge-green { background: #dcfce7; color: #15803d; }
.badge-red { background: #fee2e2; color: #b91c1c; }
.badge-yellow { background: #fef9c3; color: #a16207; }
.badge-blue { background: #dbeafe; color: #1d4ed8; }
.summary { margin-bottom: var(--section-gap); }
.count-box { background: #eff6ff; border: 2px solid #bfdbfe; border-radius: 0.25rem; padding: 0.75rem; text-align: center; }
.vat-box { background: #fffbeb; border: 2px solid #fde68a; border-radius: 0.25rem; padding: 0.75rem; text-align: right; }
.count-box .count, .vat-box .rate { font-size: 1.125rem; font-weight: 700; }
.vat-box .rate { color: #b45309; }
table.items { width: 100%; border-collapse: collapse; margin-bottom: var(--section-gap); }
table.items th { background: #dbeafe; border-bottom: 2px solid #2563eb; text-align: left; }
table.items th, table.items td { padding: var(--cell-padding); }
table.items td { border-bottom: 1px solid #e5e7eb; }
table.items .num { text-align: right; }
table.items .qty { text-align: center; }
table.items .sku { display: block; color: #6b7280; font-size: 0.7rem; }
.totals { border-top: 2px solid #d1d5db; padding-top: 0.75rem; display: flex; justify-content: flex-end; }
.totals .rows { width: 18rem; }
.totals .row { display: flex; justify-content: space-between; padding: 0.35rem 0; font-weight: 600; }
.totals .row.tax { border-bottom: 2px solid #d1d5db; }
.totals .row.tax span:last-child { color: #b45309; }
.totals .row.grand { font-size: 1.125rem; font-weight: 700; background: linear-gradient(to right, #eff6ff, #dbeafe); padding: 0.5rem 0.75rem; border-radius: 0.25rem; margin: 0.5rem 0; }
.totals .row.paid { color: #15803d; }
.totals .row.balance { background: #fff7ed; color: #9a3412; padding: 0.35rem 0.75rem; border-radius: 0.25rem; font-weight: 700; }
.notes { margin-top: var(--section-gap); font-size: 0.8rem; }
.payments { margin-top: var(--section-gap); font-size: 0.75rem; }
.payments h3 { font-size: 0.75rem; text-transform: uppercase; border-bottom: 2px solid #d1d5db; padding-bottom: 0.25rem; margin: 0 0 0.5rem; }
.payments .payment { display: flex; justify-content: space-between; background: #f9fafb; padding: 0.5rem 0.75rem; border-left: 4px solid #22c55e; border-radius: 0.25rem; margin-bottom: 0.25rem; }
.payments .payment .amount { color: #15803d; font-weight: 700; }
.footer { border-top: 2px solid #d1d5db; padding-top: 0.75rem; margin-top: var(--section-gap); text-align: center; font-size: 0.75rem; color: #4b5563; }
.footer p { margin: 0.25rem 0; }
.footer .thanks { font-size: 0.875rem; font-weight: 700; color: #111827; }
.footer .printed { color: #9ca3af; }

@media print {
  * {
    -webkit-print-color-adjust: exact !important;
    print-color-adjust: exact !important;
    color-adjust: exact !important;
  }
  html, body { margin: 0; padding: 0 !important; width: 100%; background: white !important; }
  @page { size: A4; margin: 0; }
  .print-toolbar, button { display: none !important; }
  .page { padding: 0; }
  .invoice-print-container {
    box-shadow: none !important;
    border-radius: 0 !important;
    page-break-inside: avoid !important;
    page-break-after: avoid !important;
    background: white !important;
    margin: 0 !important;
    padding: 0.5cm !important;
    max-width: none !important;
  }
  table, tr { page-break-inside: avoid !important; }
  .totals, .payments, .footer { page-break-inside: avoid !important; }
}
"#;

/// Custom properties that size the stylesheet for one preset
pub fn preset_variables(preset: &LayoutPreset) -> String {
    format!(
        ":root {{ --page-padding: {}; --section-gap: {}; --cell-padding: {}; --font-scale: {}; }}",
        preset.page_padding, preset.section_gap, preset.cell_padding, preset.font_scale
    )
}
