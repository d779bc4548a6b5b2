use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tabled::{settings::Style, Table, Tabled};

use invoice_print::config::{
    config_dir, credentials_file, load_config, load_credential, resolve_output_dir, Config,
    Credential, CONFIG_TEMPLATE, CREDENTIALS_TEMPLATE, TOKEN_KEY,
};
use invoice_print::error::{PrintError, Result};
use invoice_print::format::{format_currency, format_date};
use invoice_print::invoice::{format_quantity, Invoice};
use invoice_print::loader::{parse_envelope, HttpInvoiceSource, InvoiceSource, InvoiceView, LoadState};
use invoice_print::render::{render_document, LayoutVariant, RenderContext};

#[derive(Parser)]
#[command(name = "invoice-print")]
#[command(version, about = "Render dashboard invoices as printable A4 documents", long_about = None)]
struct Cli {
    /// Path to config directory (default: XDG config dir or ~/.invoice-print)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    /// Override the API base URL from config.toml
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Use this API token instead of the one in credentials.toml
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with template files
    Init,

    /// Fetch an invoice and write its printable HTML page
    Render {
        /// Invoice identifier
        id: Option<String>,

        /// Output file, or "-" for stdout (default: output_dir/<number>.html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page density (default: from config.toml)
        #[arg(short, long, value_enum)]
        layout: Option<LayoutVariant>,

        /// Open the page in the system browser to print it
        #[arg(long)]
        open: bool,
    },

    /// Render a saved API response (JSON) without contacting the server
    RenderFile {
        /// Path to a JSON body of GET /api/invoices/{id}
        path: PathBuf,

        /// Output file, or "-" for stdout (default: output_dir/<number>.html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page density (default: from config.toml)
        #[arg(short, long, value_enum)]
        layout: Option<LayoutVariant>,

        /// Open the page in the system browser to print it
        #[arg(long)]
        open: bool,
    },

    /// Fetch an invoice and print a summary to the terminal
    Show {
        /// Invoice identifier
        id: String,
    },

    /// Show configuration and credential status
    Status,
}

/// Options shared by every command that talks to the API
struct Globals {
    cfg_dir: PathBuf,
    base_url: Option<String>,
    token: Option<String>,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };
    let globals = Globals {
        cfg_dir,
        base_url: cli.base_url,
        token: cli.token,
    };

    match cli.command {
        Commands::Init => cmd_init(&globals.cfg_dir),
        Commands::Render {
            id,
            output,
            layout,
            open,
        } => cmd_render(&globals, id.as_deref(), output, layout, open),
        Commands::RenderFile {
            path,
            output,
            layout,
            open,
        } => cmd_render_file(&globals, &path, output, layout, open),
        Commands::Show { id } => cmd_show(&globals, &id),
        Commands::Status => cmd_status(&globals),
    }
}

/// Initialize config directory with template files
fn cmd_init(cfg_dir: &PathBuf) -> Result<()> {
    use std::fs;

    if cfg_dir.exists() {
        return Err(PrintError::AlreadyInitialized(cfg_dir.clone()));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::create_dir_all(cfg_dir.join("output"))?;
    fs::write(cfg_dir.join("config.toml"), CONFIG_TEMPLATE)?;
    fs::write(credentials_file(cfg_dir), CREDENTIALS_TEMPLATE)?;

    println!("Initialized invoice-print config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Edit company and API details: $EDITOR {}/config.toml",
        cfg_dir.display()
    );
    println!(
        "  2. Paste your API token:         $EDITOR {}",
        credentials_file(cfg_dir).display()
    );
    println!();
    println!("Then render an invoice:");
    println!("  invoice-print render <invoice-id> --open");

    Ok(())
}

fn http_source(globals: &Globals, config: &Config) -> Result<HttpInvoiceSource> {
    let credential = match globals.token.as_deref() {
        Some(token) => Credential::new(token),
        None => load_credential(&globals.cfg_dir)?,
    }
    .ok_or_else(|| PrintError::MissingCredential(credentials_file(&globals.cfg_dir)))?;

    let base_url = globals
        .base_url
        .as_deref()
        .unwrap_or(&config.api.base_url);

    Ok(HttpInvoiceSource::new(
        base_url,
        credential,
        Duration::from_secs(config.api.timeout_secs),
    ))
}

/// Fetch an invoice and write its print page
fn cmd_render(
    globals: &Globals,
    id: Option<&str>,
    output: Option<PathBuf>,
    layout: Option<LayoutVariant>,
    open: bool,
) -> Result<()> {
    let config = load_config(&globals.cfg_dir)?;
    let mut view = InvoiceView::new();
    let id = id.map(str::trim).filter(|id| !id.is_empty());

    match id {
        Some(id) => {
            let source = http_source(globals, &config)?;
            view.load(&source, Some(id));
        }
        None => {
            view.mount(None);
            log::warn!("no invoice identifier supplied; nothing fetched");
        }
    }

    let fallback = id.unwrap_or("loading");
    finish_render(globals, &config, view.state(), fallback, output, layout, open)
}

/// Render a saved API response file
fn cmd_render_file(
    globals: &Globals,
    path: &Path,
    output: Option<PathBuf>,
    layout: Option<LayoutVariant>,
    open: bool,
) -> Result<()> {
    let config = load_config(&globals.cfg_dir)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "invoice".to_string());

    let mut view = InvoiceView::new();
    if let Some(ticket) = view.mount(Some(name.as_str())) {
        let result = std::fs::read_to_string(path)
            .map_err(PrintError::from)
            .and_then(|body| parse_envelope(&name, &body));
        view.apply(ticket, result);
    }

    finish_render(globals, &config, view.state(), &name, output, layout, open)
}

fn finish_render(
    globals: &Globals,
    config: &Config,
    state: &LoadState,
    fallback_name: &str,
    output: Option<PathBuf>,
    layout: Option<LayoutVariant>,
    open: bool,
) -> Result<()> {
    let layout = layout.unwrap_or(config.print.layout);
    let ctx = RenderContext::new(&config.company, layout);
    let html = render_document(state, &ctx);

    let to_stdout = output.as_deref() == Some(Path::new("-"));
    let target = if to_stdout {
        None
    } else {
        let path = match output {
            Some(path) => path,
            None => {
                let stem = state
                    .invoice()
                    .map(|inv| inv.invoice_number.as_str())
                    .unwrap_or(fallback_name);
                let dir = resolve_output_dir(&config.print.output_dir, &globals.cfg_dir);
                std::fs::create_dir_all(&dir)?;
                dir.join(format!("{}.html", file_stem(stem)))
            }
        };
        Some(path)
    };

    match &target {
        Some(path) => std::fs::write(path, &html)?,
        None => std::io::stdout().write_all(html.as_bytes())?,
    }

    match state {
        LoadState::Loaded(invoice) => {
            if let Some(path) = &target {
                println!("Rendered {}", invoice.invoice_number);
                println!("  Customer: {}", invoice.customer.name);
                println!("  Total:    {}", format_currency(invoice.total_amount));
                println!("  Saved:    {}", path.display());
                if open {
                    open_path(path)?;
                }
            }
            Ok(())
        }
        LoadState::Unavailable => Err(PrintError::Unavailable(fallback_name.to_string())),
        LoadState::Loading => {
            if let Some(path) = &target {
                println!("No invoice id given; wrote loading page to {}", path.display());
            }
            Ok(())
        }
    }
}

/// Keep generated file names portable
fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn open_path(path: &PathBuf) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .map_err(PrintError::Io)?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .map_err(PrintError::Io)?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", path.to_str().unwrap_or("")])
            .spawn()
            .map_err(PrintError::Io)?;
    }
    Ok(())
}

#[derive(Tabled)]
struct LineItemRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "SKU")]
    sku: String,
    #[tabled(rename = "QTY")]
    quantity: String,
    #[tabled(rename = "UNIT PRICE")]
    unit_price: String,
    #[tabled(rename = "TOTAL")]
    total: String,
}

#[derive(Tabled)]
struct PaymentRow {
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "METHOD")]
    method: String,
    #[tabled(rename = "REFERENCE")]
    reference: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
}

/// Print an invoice summary to the terminal
fn cmd_show(globals: &Globals, id: &str) -> Result<()> {
    let config = load_config(&globals.cfg_dir)?;
    let source = http_source(globals, &config)?;
    let invoice = source.fetch(id)?;

    print_summary(&invoice);
    Ok(())
}

fn print_summary(invoice: &Invoice) {
    println!("Invoice {}  [{}]", invoice.invoice_number, invoice.status.label());
    println!("{}", "-".repeat(50));
    println!("Customer: {} ({})", invoice.customer.name, invoice.customer.customer_code);
    println!("Issued:   {}", format_date(&invoice.issue_date));
    println!("Due:      {}", format_date(&invoice.due_date));
    println!();

    let items = invoice.line_items();
    if items.is_empty() {
        println!("No line items.");
    } else {
        let rows: Vec<LineItemRow> = items
            .iter()
            .enumerate()
            .map(|(i, item)| LineItemRow {
                index: i + 1,
                description: item.description.clone(),
                sku: item.sku.clone(),
                quantity: format_quantity(item.quantity),
                unit_price: format_currency(item.unit_price),
                total: format_currency(item.total),
            })
            .collect();
        println!("{}", Table::new(rows).with(Style::rounded()));
    }

    println!();
    println!("Subtotal:     {}", format_currency(invoice.subtotal));
    println!("Tax:          {}", format_currency(invoice.tax_amount));
    println!("Total:        {}", format_currency(invoice.total_amount));
    if invoice.paid_amount > 0.0 {
        println!("Paid:         {}", format_currency(invoice.paid_amount));
        if invoice.balance_amount > 0.0 {
            println!("Balance due:  {}", format_currency(invoice.balance_amount));
        }
    }

    if !invoice.payments.is_empty() {
        println!();
        println!("Payment history:");
        let rows: Vec<PaymentRow> = invoice
            .payments
            .iter()
            .map(|p| PaymentRow {
                date: format_date(&p.payment_date),
                method: p.payment_method.clone(),
                reference: p.reference.clone(),
                amount: format_currency(p.amount),
            })
            .collect();
        println!("{}", Table::new(rows).with(Style::rounded()));
    }
}

/// Show configuration status
fn cmd_status(globals: &Globals) -> Result<()> {
    let config = load_config(&globals.cfg_dir)?;
    let credential = load_credential(&globals.cfg_dir)?;

    println!("Invoice Print Status");
    println!("{}", "-".repeat(50));
    println!("Config directory: {}", globals.cfg_dir.display());
    println!("Company:          {}", config.company.name);
    println!(
        "API base URL:     {}",
        globals.base_url.as_deref().unwrap_or(&config.api.base_url)
    );
    println!(
        "API token:        {}",
        if credential.is_some() || globals.token.is_some() {
            "set"
        } else {
            "missing"
        }
    );
    println!(
        "Token file:       {} (key `{}`)",
        credentials_file(&globals.cfg_dir).display(),
        TOKEN_KEY
    );
    println!("Layout:           {:?}", config.print.layout);
    println!(
        "Output directory: {}",
        resolve_output_dir(&config.print.output_dir, &globals.cfg_dir).display()
    );

    Ok(())
}
