// AI prediction page: per-city risk, trend and safety tips
use super::heading;
use crate::operations::{CityPrediction, PredictionTable};

pub fn render() -> String {
    let table = PredictionTable::new();
    let mut lines = vec![
        heading("🤖", "AI Disaster Prediction"),
        "Risk analysis, trends and safety tips for major Indian cities.".to_string(),
        format!("Cities: {}", table.cities().join(", ")),
        String::new(),
        "Recent Predictions".to_string(),
        format!("  {:<12} {:<16} {:<6} {}", "City", "Type", "Risk", "Date"),
    ];

    for prediction in table.recent() {
        lines.push(format!(
            "  {:<12} {:<16} {:<6} {}",
            prediction.city,
            prediction.disaster_type.label(),
            prediction.risk,
            prediction.date.format("%Y-%m-%d")
        ));
    }

    lines.join("\n")
}

pub fn render_city(prediction: &CityPrediction) -> String {
    let mut lines = vec![
        format!("📍 {} - {}", prediction.city, prediction.disaster_type),
        format!("   {}", prediction.message),
        "   Risk Trend (%)".to_string(),
    ];

    for (month, value) in &prediction.trend {
        lines.push(format!("   {} {:>3} {}", month, value, "█".repeat((*value / 5) as usize)));
    }

    if !prediction.tips.is_empty() {
        lines.push("   🛡️ Safety Tips".to_string());
        for tip in &prediction.tips {
            lines.push(format!("     • {}", tip));
        }
    }

    lines.join("\n")
}

pub fn render_lookup(city: &str) -> String {
    match PredictionTable::new().predict(city) {
        Some(prediction) => render_city(&prediction),
        None => format!("❔ No prediction data for {}", city),
    }
}
