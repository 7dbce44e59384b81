// Resources page: relief inventory, calamity allocations and live city stock
use super::{ViewContext, heading};
use crate::models::{allocations, inventory};
use crate::operations::total_resources;

const BAR_WIDTH: usize = 20;

pub fn render(ctx: &ViewContext) -> String {
    let items = inventory();
    let categories: Vec<&str> = {
        let mut seen: Vec<&str> = Vec::new();
        for item in &items {
            if !seen.contains(&item.category) {
                seen.push(item.category);
            }
        }
        seen
    };
    let inventory_total: u32 = items.iter().map(|item| item.quantity).sum();

    let mut lines = vec![
        heading("📦", "Disaster Resource Allocation System"),
        format!(
            "  Inventory: {} units across {} categories",
            ctx.count(inventory_total),
            categories.len()
        ),
        String::new(),
        "Calamity Allocation".to_string(),
    ];

    for allocation in allocations() {
        let percent = allocation.progress_percent();
        let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
        lines.push(format!(
            "  {:<16} {:<6} {:>4} units [{}{}]",
            allocation.calamity,
            allocation.resource,
            allocation.allocated,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled)
        ));
    }

    lines.push(String::new());
    lines.push("Inventory Management".to_string());
    lines.push(format!("  {:<14} {:<9} {:>8}  {:<10} {}", "Resource", "Category", "Quantity", "Status", "Priority"));
    for item in &items {
        lines.push(format!(
            "  {:<14} {:<9} {:>8}  {:<10} {}",
            item.name,
            item.category,
            item.quantity,
            item.status.label(),
            item.priority.label()
        ));
    }

    lines.push(String::new());
    lines.push(render_city_table(ctx));
    lines.join("\n")
}

/// Per-city counters straight from the store, with the live total.
pub fn render_city_table(ctx: &ViewContext) -> String {
    let cities = ctx.store.get_all();
    let mut names: Vec<&String> = cities.keys().collect();
    names.sort();

    let mut lines = vec![
        "City Stock (live)".to_string(),
        format!("  {:<12} {:<6} {:<16} {:>7} {:>7} {:>7}", "City", "Risk", "Type", "Food", "Medical", "Shelter"),
    ];

    let dash = "-".to_string();
    for name in names {
        let record = &cities[name];
        let counter = |value: Option<i64>| value.map(|v| v.to_string()).unwrap_or_else(|| dash.clone());
        let (food, medical, shelter) = match &record.resources {
            Some(r) => (counter(r.food), counter(r.medical), counter(r.shelter)),
            None => (dash.clone(), dash.clone(), dash.clone()),
        };
        lines.push(format!(
            "  {:<12} {:<6} {:<16} {:>7} {:>7} {:>7}",
            name,
            record.risk.as_deref().unwrap_or("-"),
            record.disaster_type.as_ref().map(|t| t.label()).unwrap_or("-"),
            food,
            medical,
            shelter
        ));
    }

    lines.push(format!("  Total Resources: {}", ctx.count(total_resources(&cities))));
    lines.join("\n")
}
