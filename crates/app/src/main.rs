//! Demo driver: seeds the reference catalog and walks the pipeline.
//!
//! This is not a UI. It exists to exercise seeding, logging and the derived
//! views end to end; a real presentation layer would own rendering and raise
//! the same intents.

use std::time::{Duration, Instant};

use anyhow::Result;

use pharmstock_app::{App, SEARCH_QUIESCENCE};
use pharmstock_inventory::Medicine;
use pharmstock_views::SortKey;

fn main() -> Result<()> {
    pharmstock_observability::init();

    let mut app = App::seeded()?;
    tracing::info!(records = app.store().len(), "seeded catalog");

    println!("== page 1, name ascending ==");
    print_page(&app.visible());

    app.page_requested(2);
    println!("== page 2 ==");
    print_page(&app.visible());
    app.page_requested(1);

    app.sort_column(SortKey::Quantity);
    println!("== page 1, quantity ascending ==");
    print_page(&app.visible());

    let now = Instant::now();
    app.search_changed("blood", now);
    app.tick(now + SEARCH_QUIESCENCE + Duration::from_millis(1));
    println!("== filtered by \"blood\" ({} pages) ==", app.total_pages());
    print_page(&app.visible());

    Ok(())
}

fn print_page(records: &[Medicine]) {
    for m in records {
        println!(
            "{:<14} {:<14} {:>7} {:>5}  {}",
            m.id, m.name, m.strength, m.quantity, m.expiry_date
        );
    }
    println!();
}
