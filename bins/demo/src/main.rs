//! Jurnal demo driver.
//!
//! Walks the journal screen end to end without a UI: seeds a few entries,
//! filters and pages the list, shows a rejected unbalanced submit, edits and
//! deletes an entry, and dumps the committed entries as JSON.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jurnal_core::journal::{HeaderField, JournalScreen, LineField};
use jurnal_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jurnal=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    info!(
        default_per_page = config.listing.default_per_page,
        per_page_options = ?config.listing.per_page_options,
        "configuration loaded"
    );

    let mut screen = JournalScreen::new(&config);

    seed(&mut screen)?;
    print_table("All entries", &screen);

    screen.set_recorded_by_filter("siti");
    print_table("Filtered by recorded_by = siti", &screen);
    screen.clear_filters();

    demonstrate_unbalanced_submit(&mut screen)?;
    print_table("After the corrected entry", &screen);

    // Edit the newest entry's memo, then delete the oldest entry.
    let newest = screen.entries().first().map(|e| e.id).context("store is empty")?;
    screen.controller().open_edit(newest);
    screen
        .controller()
        .set_header_field(HeaderField::Memo, "Adjusted during demo");
    screen.submit()?;

    let oldest = screen.entries().last().map(|e| e.id).context("store is empty")?;
    screen.controller().request_delete(oldest);
    screen.confirm_delete();
    print_table("After edit and delete", &screen);

    println!("{}", serde_json::to_string_pretty(screen.entries())?);
    Ok(())
}

/// Commits one balanced entry through the normal form flow.
fn commit_entry(
    screen: &mut JournalScreen,
    number: &str,
    date: &str,
    recorded_by: &str,
    debit_account: (&str, &str),
    credit_account: (&str, &str),
    amount: &str,
) -> anyhow::Result<()> {
    let controller = screen.controller();
    controller.open_create();
    controller.set_header_field(HeaderField::EntryNumber, number);
    controller.set_header_field(HeaderField::EntryDate, date);
    controller.set_header_field(HeaderField::RecordedBy, recorded_by);

    controller.set_line_field(0, LineField::AccountCode, debit_account.0);
    controller.set_line_field(0, LineField::AccountName, debit_account.1);
    controller.set_line_field(0, LineField::Debit, amount);
    controller.add_line();
    controller.set_line_field(1, LineField::AccountCode, credit_account.0);
    controller.set_line_field(1, LineField::AccountName, credit_account.1);
    controller.set_line_field(1, LineField::Credit, amount);

    screen.submit()?;
    Ok(())
}

fn seed(screen: &mut JournalScreen) -> anyhow::Result<()> {
    commit_entry(
        screen,
        "JV-001",
        "2026-01-05",
        "siti",
        ("101", "Kas"),
        ("301", "Modal"),
        "5000000",
    )?;
    commit_entry(
        screen,
        "JV-002",
        "2026-01-12",
        "budi",
        ("502", "Beban Sewa"),
        ("101", "Kas"),
        "1500000",
    )?;
    commit_entry(
        screen,
        "JV-003",
        "2026-02-02",
        "siti",
        ("103", "Piutang"),
        ("401", "Pendapatan"),
        "2750000",
    )?;
    Ok(())
}

/// Shows the rejected-then-corrected submit path.
fn demonstrate_unbalanced_submit(screen: &mut JournalScreen) -> anyhow::Result<()> {
    let controller = screen.controller();
    controller.open_create();
    controller.set_header_field(HeaderField::EntryNumber, "JV-004");
    controller.set_header_field(HeaderField::EntryDate, "2026-02-10");
    controller.set_header_field(HeaderField::RecordedBy, "budi");
    controller.set_line_field(0, LineField::AccountCode, "101");
    controller.set_line_field(0, LineField::Debit, "1000000");
    controller.add_line();
    controller.set_line_field(1, LineField::AccountCode, "401");
    controller.set_line_field(1, LineField::Credit, "750000");

    match screen.submit() {
        Ok(_) => anyhow::bail!("unbalanced entry must not commit"),
        Err(err) => println!("Submit rejected ({}): {err}", err.error_code()),
    }

    // The buffer survives the rejection; fix the credit line and retry.
    screen
        .controller()
        .set_line_field(1, LineField::Credit, "1000000");
    screen.submit()?;
    Ok(())
}

fn print_table(title: &str, screen: &JournalScreen) {
    let (rows, meta) = screen.visible();
    println!("\n== {title} ==");
    println!("{:<4} {:<8} {:<12} {:<10} {:>14} {:>14}", "No.", "Number", "Date", "By", "Debit", "Credit");
    for entry in rows {
        let totals = entry.totals();
        println!(
            "{:<4} {:<8} {:<12} {:<10} {:>14} {:>14}",
            entry.display_no,
            entry.entry_number,
            entry.entry_date,
            entry.recorded_by,
            totals.debit,
            totals.credit,
        );
    }
    println!("{}", meta.display_range());
}
