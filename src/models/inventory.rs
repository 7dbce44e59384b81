// Relief inventory and calamity allocations shown on the resources view
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StockStatus {
    InStock,
    LowStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Priority {
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: &'static str,
    pub quantity: u32,
    pub category: &'static str,
    pub status: StockStatus,
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize)]
pub struct Allocation {
    pub calamity: &'static str,
    pub resource: &'static str,
    pub allocated: u32,
}

impl Allocation {
    /// Progress bar fill, capped at 100% against a 1000-unit scale.
    pub fn progress_percent(&self) -> f64 {
        (f64::from(self.allocated) / 1000.0 * 100.0).min(100.0)
    }
}

pub fn inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem { id: 1, name: "Food Packets", quantity: 1500, category: "Food", status: StockStatus::InStock, priority: Priority::High },
        InventoryItem { id: 2, name: "Medical Kits", quantity: 300, category: "Medical", status: StockStatus::LowStock, priority: Priority::Urgent },
        InventoryItem { id: 3, name: "Tents", quantity: 200, category: "Shelter", status: StockStatus::InStock, priority: Priority::Medium },
    ]
}

/// Stock figures the dashboard charts from; larger than the resources page
/// inventory and with a separate water line.
pub fn dashboard_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem { id: 1, name: "Food Packets", quantity: 2000, category: "Food", status: StockStatus::InStock, priority: Priority::High },
        InventoryItem { id: 2, name: "Medical Kits", quantity: 500, category: "Medical", status: StockStatus::InStock, priority: Priority::High },
        InventoryItem { id: 3, name: "Tents", quantity: 350, category: "Shelter", status: StockStatus::LowStock, priority: Priority::Urgent },
        InventoryItem { id: 4, name: "Water Bottles", quantity: 1000, category: "Food", status: StockStatus::InStock, priority: Priority::Medium },
    ]
}

/// Doughnut slices: Food sums every food-category item (water included),
/// Medical and Shelter take the first item of their category, Water is the
/// water bottle line on its own.
pub fn allocation_chart(items: &[InventoryItem]) -> [(&'static str, u32); 4] {
    let first_in = |category: &str| {
        items.iter().find(|item| item.category == category).map(|item| item.quantity).unwrap_or(0)
    };
    let food: u32 = items.iter().filter(|item| item.category == "Food").map(|item| item.quantity).sum();
    let water = items.iter().find(|item| item.name == "Water Bottles").map(|item| item.quantity).unwrap_or(0);

    [("Food", food), ("Medical", first_in("Medical")), ("Shelter", first_in("Shelter")), ("Water", water)]
}

pub fn allocations() -> Vec<Allocation> {
    vec![
        Allocation { calamity: "Flood Relief", resource: "Boats", allocated: 50 },
        Allocation { calamity: "Earthquake Zone", resource: "Tents", allocated: 120 },
        Allocation { calamity: "Cyclone Area", resource: "Food", allocated: 800 },
    ]
}
