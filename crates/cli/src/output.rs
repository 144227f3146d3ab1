//! Terminal rendering for command results

use catalog_console::{Pagination, ProductRow, WebhookRow};
use catalog_core::{Product, UploadStatus, UploadTask};
use colored::{ColoredString, Colorize};

const SKU_WIDTH: usize = 14;
const NAME_WIDTH: usize = 28;
const PRICE_WIDTH: usize = 12;

/// Fit `text` into `width` columns, marking truncation with `…`
pub fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

fn status(label: &str, on: bool, width: usize) -> ColoredString {
    let padded = format!("{:<width$}", label, width = width);
    if on { padded.green() } else { padded.dimmed() }
}

pub fn product_table(rows: &[ProductRow]) -> String {
    let mut table = format!(
        "{:>6}  {:<sku$}  {:<name$}  {:>price$}  {}\n",
        "ID",
        "SKU",
        "NAME",
        "PRICE",
        "STATUS",
        sku = SKU_WIDTH,
        name = NAME_WIDTH,
        price = PRICE_WIDTH,
    )
    .bold()
    .to_string();

    for row in rows {
        table.push_str(&format!(
            "{:>6}  {:<sku$}  {:<name$}  {:>price$}  {}\n",
            row.id,
            clip(&row.sku, SKU_WIDTH),
            clip(&row.name, NAME_WIDTH),
            row.price,
            status(row.status_label, row.active, 8),
            sku = SKU_WIDTH,
            name = NAME_WIDTH,
            price = PRICE_WIDTH,
        ));
    }
    table
}

/// `Page 2 of 7 (312 products)` for a one-based page number
pub fn page_footer(page: u64, page_size: u64, total: u64) -> String {
    let mut pagination = Pagination::new(page_size);
    pagination.set_total(total);
    for _ in 1..page {
        if !pagination.next() {
            break;
        }
    }
    format!("{} ({} products)", pagination.label(), total)
        .dimmed()
        .to_string()
}

pub fn product_detail(product: &Product) -> String {
    let row = ProductRow::from(product);
    let mut text = format!("{} {}\n", format!("#{}", row.id).bold(), row.name.bold());
    text.push_str(&format!("  SKU:         {}\n", row.sku));
    text.push_str(&format!("  Price:       {}\n", row.price));
    text.push_str(&format!("  Description: {}\n", row.description));
    text.push_str(&format!("  Status:      {}\n", status(row.status_label, row.active, 0)));
    if let Some(created) = product.created_at {
        text.push_str(&format!("  Created:     {}\n", created.to_rfc3339()));
    }
    if let Some(updated) = product.updated_at {
        text.push_str(&format!("  Updated:     {}\n", updated.to_rfc3339()));
    }
    text
}

pub fn webhook_table(rows: &[WebhookRow]) -> String {
    let mut table = String::new();
    for row in rows {
        table.push_str(&format!(
            "{:>4}  {}  {}\n      {}\n",
            row.id,
            status(row.status_label, row.enabled, 8),
            row.event_type.cyan(),
            row.url,
        ));
    }
    table
}

pub fn task_summary(task: &UploadTask) -> String {
    let state = match task.status {
        UploadStatus::Completed => task.status.to_string().green(),
        UploadStatus::Failed => task.status.to_string().red(),
        UploadStatus::Pending | UploadStatus::Processing => task.status.to_string().yellow(),
    };
    let mut text = format!(
        "{} {}: {} ({}%, {}/{} rows)\n",
        task.id.bold(),
        task.filename,
        state,
        task.progress,
        task.processed_rows,
        task.total_rows,
    );
    if let Some(message) = &task.error_message {
        text.push_str(&format!("  {}\n", message.red()));
    }
    text
}
