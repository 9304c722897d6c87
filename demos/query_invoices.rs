#[macro_use]
extern crate tracing;

use anyhow::Result;
use lockstep_rs::{Client, FetchResult, InvoiceModel, Patch, QueryParameters};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Reads LOCKSTEP_ENVIRONMENT and LOCKSTEP_API_KEY / LOCKSTEP_BEARER_TOKEN
    let client = Client::from_env()?.with_app_name("lockstep-rs demo")?;

    // Page through open invoices, newest first
    let mut parameters = QueryParameters::new()
        .filter("invoiceStatusCode eq 'Open'")
        .order("invoiceDate desc")
        .page_size(100)
        .page_number(0);
    let mut open = Vec::new();

    loop {
        let response = client.invoices().query_invoices(&parameters).await?;
        if !response.is_success() {
            error!("query failed: {:?}", response.error_result());
            return Ok(());
        }

        let page: FetchResult<InvoiceModel> = response.json()?;
        let total = page.total_count.unwrap_or_default() as usize;
        let records = page.into_records();
        let fetched = records.len();
        open.extend(records);

        if fetched == 0 || open.len() >= total {
            break;
        }
        let next_page = parameters.page_number.unwrap_or_default() + 1;
        parameters = parameters.page_number(next_page);
    }
    info!("found {} open invoices", open.len());

    // Flag the first one as disputed
    if let Some(invoice_id) = open.first().and_then(|invoice| invoice.invoice_id) {
        let response = client
            .invoices()
            .update_invoice(invoice_id, &Patch::new().set("in_dispute", true))
            .await?;
        info!("updated invoice {invoice_id}: {}", response.status);
    }

    Ok(())
}
