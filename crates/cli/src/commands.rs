//! Command execution
//!
//! Every command runs against a [`CatalogApi`] and writes its report to the
//! supplied writer, so tests can drive them with the in-memory fake.

use anyhow::{Context, Result, bail};
use catalog_console::{
    ConfirmGate, ConfirmTarget, ProductRow, ProductSubmission, UploadFlow, WebhookRow,
    WebhookSubmission, products, webhooks,
};
use catalog_core::{CatalogApi, ConsoleConfig, ProductQuery, UploadStatus};
use colored::Colorize;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::args::{Command, ProductCommand, WebhookCommand};
use crate::output;

/// Knobs taken from the configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub page_size: u64,
    /// Delay between status polls of `import --wait`
    pub poll_interval: Duration,
    /// How long `import --wait` keeps polling an unfinished task
    pub max_wait: Duration,
}

impl Settings {
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            page_size: config.page_size,
            ..Self::default()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: 50,
            poll_interval: Duration::from_millis(500),
            max_wait: Duration::from_secs(300),
        }
    }
}

/// Run one parsed command
pub async fn run<A, W>(command: Command, api: &A, settings: &Settings, out: &mut W) -> Result<()>
where
    A: CatalogApi + ?Sized,
    W: Write,
{
    match command {
        Command::Products(command) => run_product(command, api, settings, out).await,
        Command::Import { file, wait } => import(&file, wait, api, settings, out).await,
        Command::UploadStatus { task_id } => {
            let task = api
                .upload_status(&task_id)
                .await
                .with_context(|| format!("Failed to fetch status of task {}", task_id))?;
            write!(out, "{}", output::task_summary(&task))?;
            Ok(())
        }
        Command::Webhooks(command) => run_webhook(command, api, out).await,
    }
}

fn done<W: Write>(out: &mut W, message: impl std::fmt::Display) -> Result<()> {
    writeln!(out, "{} {}", "✓".green().bold(), message)?;
    Ok(())
}

/// Destructive commands go through the same gate as the desktop dialog.
/// Without `--yes` the prompt is printed and the command refuses.
fn confirm<W: Write>(target: ConfirmTarget, yes: bool, out: &mut W) -> Result<()> {
    let mut gate = ConfirmGate::new();
    gate.request(target)?;

    if !yes {
        if let Some(pending) = gate.pending() {
            writeln!(out, "{}", pending.message.yellow())?;
        }
        gate.cancel();
        bail!("{} refused; pass --yes to confirm", target.title());
    }

    gate.confirm().context("confirmation was not recorded")?;
    tracing::debug!("Confirmed {:?}", target);
    Ok(())
}

// ============================================================================
// Products
// ============================================================================

async fn run_product<A, W>(
    command: ProductCommand,
    api: &A,
    settings: &Settings,
    out: &mut W,
) -> Result<()>
where
    A: CatalogApi + ?Sized,
    W: Write,
{
    match command {
        ProductCommand::List {
            search,
            active,
            page,
            page_size,
            json,
        } => {
            let page_size = page_size.unwrap_or(settings.page_size);
            let query = ProductQuery::page(page.saturating_sub(1), page_size)
                .with_search(search)
                .with_active(active);
            let result = api
                .list_products(&query)
                .await
                .context(products::LOAD_FAILED)?;

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
                return Ok(());
            }

            let rows: Vec<ProductRow> = result.products.iter().map(ProductRow::from).collect();
            if rows.is_empty() {
                writeln!(out, "{}", "No products found".dimmed())?;
            } else {
                write!(out, "{}", output::product_table(&rows))?;
            }
            writeln!(out, "{}", output::page_footer(page, page_size, result.total))?;
        }

        ProductCommand::Get { id, json } => {
            let product = api
                .get_product(id)
                .await
                .context("Failed to load product")?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&product)?)?;
            } else {
                write!(out, "{}", output::product_detail(&product))?;
            }
        }

        ProductCommand::Create(fields) => {
            let submission = ProductSubmission {
                editing_id: None,
                payload: fields.to_form().to_payload()?,
            };
            submit_product(submission, api, out).await?;
        }

        ProductCommand::Update { id, fields } => {
            let submission = ProductSubmission {
                editing_id: Some(id),
                payload: fields.to_form().to_payload()?,
            };
            submit_product(submission, api, out).await?;
        }

        ProductCommand::Delete { id, yes } => {
            confirm(ConfirmTarget::DeleteProduct(id), yes, out)?;
            api.delete_product(id).await.context("Delete failed")?;
            done(out, "Product deleted!")?;
        }

        ProductCommand::DeleteAll { yes } => {
            confirm(ConfirmTarget::DeleteAllProducts, yes, out)?;
            let result = api
                .delete_all_products()
                .await
                .context("Bulk delete failed")?;
            done(out, format!("Deleted {} products", result.deleted))?;
        }
    }
    Ok(())
}

async fn submit_product<A, W>(submission: ProductSubmission, api: &A, out: &mut W) -> Result<()>
where
    A: CatalogApi + ?Sized,
    W: Write,
{
    let product = submission.send(api).await.context("Operation failed")?;
    done(out, submission.success_message())?;
    write!(out, "{}", output::product_detail(&product))?;
    Ok(())
}

// ============================================================================
// Import
// ============================================================================

async fn import<A, W>(
    path: &Path,
    wait: bool,
    api: &A,
    settings: &Settings,
    out: &mut W,
) -> Result<()>
where
    A: CatalogApi + ?Sized,
    W: Write,
{
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Not a file path: {}", path.display()))?;
    UploadFlow::check_file(file_name)?;

    let contents = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    tracing::info!("Uploading {} ({} bytes)", file_name, contents.len());

    let receipt = api
        .upload_csv(file_name, contents)
        .await
        .context("Upload failed")?;
    done(out, "CSV imported successfully!")?;
    writeln!(out, "  task id: {}", receipt.task_id.bold())?;

    if !wait {
        return Ok(());
    }

    let deadline = tokio::time::Instant::now() + settings.max_wait;
    loop {
        let task = api
            .upload_status(&receipt.task_id)
            .await
            .with_context(|| format!("Failed to fetch status of task {}", receipt.task_id))?;
        if task.status.is_finished() {
            write!(out, "{}", output::task_summary(&task))?;
            if task.status == UploadStatus::Failed {
                bail!("Import of {} failed", task.filename);
            }
            return Ok(());
        }
        if tokio::time::Instant::now() >= deadline {
            write!(out, "{}", output::task_summary(&task))?;
            bail!(
                "Gave up waiting after {}s; run `catalog upload-status {}` to check again",
                settings.max_wait.as_secs(),
                task.id
            );
        }
        tracing::debug!("Task {} at {}%", task.id, task.progress);
        tokio::time::sleep(settings.poll_interval).await;
    }
}

// ============================================================================
// Webhooks
// ============================================================================

async fn run_webhook<A, W>(command: WebhookCommand, api: &A, out: &mut W) -> Result<()>
where
    A: CatalogApi + ?Sized,
    W: Write,
{
    match command {
        WebhookCommand::List { json } => {
            let hooks = api.list_webhooks().await.context(webhooks::LOAD_FAILED)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&hooks)?)?;
            } else if hooks.is_empty() {
                writeln!(out, "{}", "No webhooks configured".dimmed())?;
            } else {
                let rows: Vec<WebhookRow> = hooks.iter().map(WebhookRow::from).collect();
                write!(out, "{}", output::webhook_table(&rows))?;
            }
        }

        WebhookCommand::Create(fields) => {
            let submission = WebhookSubmission {
                editing_id: None,
                payload: fields.to_form().to_payload()?,
            };
            submit_webhook(submission, api, out).await?;
        }

        WebhookCommand::Update { id, fields } => {
            let submission = WebhookSubmission {
                editing_id: Some(id),
                payload: fields.to_form().to_payload()?,
            };
            submit_webhook(submission, api, out).await?;
        }

        WebhookCommand::Delete { id, yes } => {
            confirm(ConfirmTarget::DeleteWebhook(id), yes, out)?;
            api.delete_webhook(id).await.context("Delete failed")?;
            done(out, "Webhook deleted!")?;
        }

        WebhookCommand::Test { id } => {
            writeln!(out, "Testing webhook...")?;
            let result = api.test_webhook(id).await.context("Webhook test failed")?;
            if !result.success {
                bail!(result.summary());
            }
            done(out, result.summary())?;
        }
    }
    Ok(())
}

async fn submit_webhook<A, W>(submission: WebhookSubmission, api: &A, out: &mut W) -> Result<()>
where
    A: CatalogApi + ?Sized,
    W: Write,
{
    let hook = submission.send(api).await.context("Operation failed")?;
    done(out, submission.success_message())?;
    write!(out, "{}", output::webhook_table(&[WebhookRow::from(&hook)]))?;
    Ok(())
}
