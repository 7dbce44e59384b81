// Dashboard page and the live watcher that re-renders it on store changes
use super::{ViewContext, heading};
use crate::models::{TREND_MONTHS, ZoneFilter, allocation_chart, dashboard_inventory, india_zones, total_volunteers};
use crate::operations::*;
use crate::{v_debug, v_summary};
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const ACTIVE_DISASTERS: u32 = 7;
pub const AFFECTED_PEOPLE: i64 = 25_000;
pub const ACTIVE_VOLUNTEERS: i64 = 2_500;

/// Disasters per month, Jan to Jun.
pub const DISASTER_TRENDS: [(&str, [u32; 6]); 4] = [
    ("Floods", [4, 5, 6, 7, 5, 4]),
    ("Earthquakes", [3, 3, 4, 4, 3, 3]),
    ("Cyclones", [2, 3, 3, 3, 2, 2]),
    ("Droughts", [1, 1, 2, 2, 1, 1]),
];

pub fn total_disasters() -> u32 {
    DISASTER_TRENDS.iter().flat_map(|(_, series)| series.iter()).sum()
}

pub fn render(ctx: &ViewContext) -> String {
    render_filtered(ctx, &ZoneFilter::default())
}

pub fn render_filtered(ctx: &ViewContext, filter: &ZoneFilter) -> String {
    let cities = ctx.store.get_all();
    let total = total_resources(&cities);
    let breakdown = resource_breakdown(&cities);

    let mut lines = vec![
        heading("📊", "Disaster Management Dashboard"),
        format!(
            "  Active Disasters: {}   Affected People: {}   Deployed Resources: {}   Active Volunteers: {}",
            ACTIVE_DISASTERS,
            ctx.count(AFFECTED_PEOPLE),
            ctx.count(total),
            ctx.count(ACTIVE_VOLUNTEERS)
        ),
        String::new(),
        "City Resources".to_string(),
        format!(
            "  Food {}   Medical {}   Shelter {}",
            ctx.count(breakdown.food),
            ctx.count(breakdown.medical),
            ctx.count(breakdown.shelter)
        ),
    ];

    let type_counts = disaster_type_counts(&cities);
    if !type_counts.is_empty() {
        let parts: Vec<String> = type_counts.iter().map(|(t, n)| format!("{} {}", t, n)).collect();
        lines.push(format!("  Cities by type: {}", parts.join(", ")));
    }

    lines.push(String::new());
    lines.push(format!("Disaster Trends ({})   Total Disasters: {}", TREND_MONTHS.join(" "), total_disasters()));
    for (label, series) in DISASTER_TRENDS {
        let months: Vec<String> = series.iter().map(|v| format!("{:>3}", v)).collect();
        lines.push(format!("  {:<12}{}", label, months.join("")));
    }

    lines.push(String::new());
    lines.push("Resource Allocation".to_string());
    for (category, amount) in allocation_chart(&dashboard_inventory()) {
        lines.push(format!("  {:<10} {:>8}", category, ctx.count(amount)));
    }

    let zones = india_zones();
    let visible = filter.apply(&zones);
    lines.push(String::new());
    lines.push(format!("Volunteer Distribution ({} volunteers deployed)", ctx.count(total_volunteers(&zones))));
    for zone in visible {
        lines.push(format!(
            "  {:<14} {:<11} ({:.4}, {:.4}) {:>4} volunteers  {}",
            zone.name,
            zone.zone_type.label(),
            zone.lat,
            zone.lng,
            zone.volunteer_count(),
            zone.detail
        ));
    }

    lines.join("\n")
}

/// One-line status printed whenever the store changes.
pub fn render_change_line(ctx: &ViewContext, version: u64) -> String {
    let cities = ctx.store.get_all();
    format!(
        "🔔 City data changed (v{}): {} cities, {} resources deployed",
        version,
        cities.len(),
        ctx.count(total_resources(&cities))
    )
}

/// Re-renders the dashboard summary each time the store publishes a change.
pub struct DashboardWatcher {
    handle: JoinHandle<()>,
}

impl DashboardWatcher {
    pub fn spawn(ctx: ViewContext) -> Self {
        let receiver = ctx.store.subscribe();
        let handle = tokio::spawn(Self::watch_loop(ctx, receiver));
        Self { handle }
    }

    async fn watch_loop(ctx: ViewContext, mut receiver: watch::Receiver<u64>) {
        v_debug!("👀 Dashboard watcher subscribed to city store");
        while receiver.changed().await.is_ok() {
            let version = *receiver.borrow_and_update();
            v_summary!("{}", render_change_line(&ctx, version));
        }
        v_debug!("👀 Dashboard watcher stopped");
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}

/// Waits for the next store change and returns the new version.
/// `None` once every store handle is gone.
pub async fn next_change(receiver: &mut watch::Receiver<u64>) -> Option<u64> {
    receiver.changed().await.ok()?;
    let version = *receiver.borrow_and_update();
    Some(version)
}
