// ============================================================================
// Basic Usage Example
// ============================================================================

use rust_decimal::Decimal;
use split_engine::prelude::*;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Split Engine Example ===\n");

    let engine = SplitEngineBuilder::us_dollar()
        .build(Arc::new(LoggingEventHandler))
        .expect("valid configuration");
    let users = [UserId(1), UserId(2), UserId(3)];

    // Parse the total as a user would type it
    let total = engine.parse("$100.00");
    println!("Total: {}\n", engine.format(total));

    // Equal split: the leftover cent goes to the first participant
    println!("=== Equal Split ===");
    let allocation = engine
        .split(&SplitRequest::equal(total, 3))
        .expect("equal split");
    print_shares(&engine, &users, &allocation);

    // Percentage split
    println!("\n=== Percentage Split (50 / 30 / 20) ===");
    let allocation = engine
        .split(&SplitRequest::percentage(
            total,
            vec![Decimal::from(50), Decimal::from(30), Decimal::from(20)],
        ))
        .expect("percentage split");
    print_shares(&engine, &users, &allocation);

    // Share split
    println!("\n=== Share Split (2 : 1 : 1) ===");
    let allocation = engine
        .split(&SplitRequest::shares(total, vec![2, 1, 1]))
        .expect("share split");
    print_shares(&engine, &users, &allocation);

    // Exact split that does not add up
    println!("\n=== Exact Split (60.00 + 30.00) ===");
    let request = SplitRequest::exact(
        total,
        vec![engine.parse("60.00"), engine.parse("30.00")],
    );
    match engine.split(&request) {
        Ok(allocation) => print_shares(&engine, &users, &allocation),
        Err(err) => {
            let feedback = engine
                .describe_mismatch(&err)
                .unwrap_or_else(|| err.to_string());
            println!("Rejected: {}", feedback);
        },
    }

    // Balances for an expense paid by user 1
    println!("\n=== Balances (paid by user 1) ===");
    let allocation = engine
        .split(&SplitRequest::equal(total, 3))
        .expect("equal split");
    let rows = engine
        .participants(&allocation, &users)
        .expect("one user per share");
    for entry in balance_entries(UserId(1), &rows).expect("balances") {
        println!(
            "  user {} -> user {}: {}",
            entry.user_id,
            entry.friend_id,
            engine.format(entry.amount)
        );
    }

    // Same amount in other locales
    println!("\n=== Formatting ===");
    let amount = MinorUnits::from_raw(12_345_678);
    for (currency, locale) in [("USD", "en-US"), ("EUR", "de-DE"), ("INR", "en-IN"), ("BRL", "pt-BR")] {
        let formatter = CurrencyFormatter::new(currency, Some(locale)).expect("known currency");
        println!("  {} {}: {}", currency, locale, formatter.format(amount));
    }

    println!("\nSplits completed: {}", engine.splits_completed());
}

fn print_shares(engine: &SplitEngine, users: &[UserId], allocation: &Allocation) {
    for (user, share) in users.iter().zip(&allocation.shares) {
        println!("  user {}: {}", user, engine.format(*share));
    }
}
