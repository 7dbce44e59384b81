// Demo: two views sharing one store, with a watcher reacting to updates
use disaster_watch::views::dashboard::DashboardWatcher;
use disaster_watch::views::resources::render_city_table;
use disaster_watch::{CityPatch, CityStore, DisasterType, Resources, ViewContext, verbosity};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    verbosity::set_verbosity_level(1);

    let store = CityStore::seeded();
    let ctx = ViewContext::new(store.clone());
    let watcher = DashboardWatcher::spawn(ctx.clone());

    println!("{}\n", render_city_table(&ctx));

    store.update(
        "Mumbai",
        CityPatch::default()
            .risk("65%")
            .disaster_type(DisasterType::HeavyRainfall)
            .resources(Resources::new(400, 120, 90)),
    );
    tokio::task::yield_now().await;

    store.update_json("Chennai", r#"{"resources":{"food":10}}"#)?;
    tokio::task::yield_now().await;

    if let Err(e) = store.update_json("Patna", r#"{"risk": 55}"#) {
        println!("⚠️ Rejected patch: {}", e);
    }

    println!("\n{}", render_city_table(&ctx));
    watcher.stop();
    Ok(())
}
