use std::collections::BTreeMap;

use colored::*;

use crate::{ledger::Transaction, pie_chart::palette_color, utils::format_inr};

/// Aggregated total and share of all expenses for one category.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub total_amount: f64,
    pub percentage: f64,
}

/// Sums expense amounts per category. Income never shows up here. The map
/// iterates in ascending category order, which is also the display order.
pub fn expenses_by_category(transactions: &[Transaction]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        *totals.entry(transaction.category.clone()).or_insert(0.0) += transaction.amount;
    }

    totals
}

pub fn total_expense(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum()
}

pub fn total_income(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| !t.is_expense())
        .map(|t| t.amount)
        .sum()
}

/// Category shares in sorted order. Empty when there is nothing to chart,
/// including the degenerate case of a zero or negative expense total.
pub fn category_shares(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let totals = expenses_by_category(transactions);
    let total: f64 = totals.values().sum();

    if totals.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let shares: Vec<CategoryShare> = totals
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            category,
            total_amount: amount,
            percentage: amount / total * 100.0,
        })
        .collect();

    log::debug!("Aggregated {} expense categories, total {}", shares.len(), total);

    shares
}

/// Terminal rendition of the chart legend.
pub fn print_summary(transactions: &[Transaction]) {
    let shares = category_shares(transactions);

    println!("{}", "Expense Breakdown by Category".bold());

    if shares.is_empty() {
        println!("No expense data to display.");
        return;
    }

    for (index, share) in shares.iter().enumerate() {
        let color = palette_color(index);
        println!(
            "{} {} ({:.1}%) - {}",
            "■".truecolor(color.r(), color.g(), color.b()),
            share.category.bright_white(),
            share.percentage,
            format_inr(share.total_amount).bold()
        );
    }

    println!();
    println!("Total expenses: {}", format_inr(total_expense(transactions)).bold());
    println!("Total income:   {}", format_inr(total_income(transactions)).bold());
}
