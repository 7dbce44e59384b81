use disaster_watch::views::dashboard::next_change;
use disaster_watch::{
    CityData, CityPatch, CityRecord, CityStore, DisasterType, Resources, Route, ViewContext, seed_cities,
    total_resources, views,
};

/// Integration tests for the shared city store and the totals derived from it

#[test]
fn test_seed_store_total() {
    let store = CityStore::seeded();
    assert_eq!(total_resources(&store.get_all()), 500 + 200 + 100 + 700 + 150 + 80 + 300 + 100 + 120);
    assert_eq!(total_resources(&store.get_all()), 2250);
}

#[test]
fn test_empty_store_total_is_zero() {
    let store = CityStore::empty();
    assert!(store.is_empty());
    assert_eq!(total_resources(&store.get_all()), 0);
}

#[test]
fn test_missing_resources_and_counters_count_as_zero() {
    let mut cities = CityData::new();
    cities.insert(
        "A".to_string(),
        CityRecord { resources: Some(Resources { food: Some(5), medical: None, shelter: None }), ..Default::default() },
    );
    cities.insert("B".to_string(), CityRecord::default());
    assert_eq!(total_resources(&cities), 5);
}

#[test]
fn test_total_ignores_insertion_order() {
    let seed = seed_cities();
    let mut names: Vec<&String> = seed.keys().collect();
    names.sort();

    let mut forward = CityData::new();
    for name in &names {
        forward.insert((*name).clone(), seed[*name].clone());
    }
    let mut backward = CityData::new();
    for name in names.iter().rev() {
        backward.insert((*name).clone(), seed[*name].clone());
    }

    assert_eq!(total_resources(&forward), total_resources(&backward));
    assert_eq!(total_resources(&forward), total_resources(&seed));
}

#[test]
fn test_update_new_city_contributes_zero() {
    let store = CityStore::seeded();
    store.update("NewCity", CityPatch::default().risk("10%"));

    assert_eq!(
        store.get("NewCity"),
        Some(CityRecord { risk: Some("10%".to_string()), disaster_type: None, resources: None })
    );
    assert_eq!(total_resources(&store.get_all()), 2250);
}

#[test]
fn test_resources_patch_is_shallow() {
    let store = CityStore::seeded();
    store.update("Chennai", CityPatch::default().resources(Resources { food: Some(10), medical: None, shelter: None }));

    let chennai = store.get("Chennai").unwrap();
    assert_eq!(chennai.resources, Some(Resources { food: Some(10), medical: None, shelter: None }));
    assert_eq!(chennai.risk.as_deref(), Some("70%"));
    assert_eq!(total_resources(&store.get_all()), 2250 - 800 + 10);
}

#[test]
fn test_last_write_wins_per_field() {
    let store = CityStore::seeded();
    store.update("Patna", CityPatch::default().risk("60%").resources(Resources::new(1, 2, 3)));
    store.update("Patna", CityPatch::default().disaster_type(DisasterType::Heatwave));
    store.update("Patna", CityPatch::default().risk("65%"));
    store.update("Surat", CityPatch::default().disaster_type(DisasterType::Flood));
    store.update("Surat", CityPatch::default().resources(Resources::new(4, 5, 6)));

    let patna = store.get("Patna").unwrap();
    assert_eq!(patna.risk.as_deref(), Some("65%"));
    assert_eq!(patna.disaster_type, Some(DisasterType::Heatwave));
    assert_eq!(patna.resources, Some(Resources::new(1, 2, 3)));

    let surat = store.get("Surat").unwrap();
    assert_eq!(surat.disaster_type, Some(DisasterType::Flood));
    assert_eq!(surat.resources, Some(Resources::new(4, 5, 6)));
    assert_eq!(store.version(), 5);
}

#[test]
fn test_negative_counters_reduce_total() {
    let store = CityStore::empty();
    store.update("X", CityPatch::default().resources(Resources::new(10, -4, 0)));
    assert_eq!(total_resources(&store.get_all()), 6);
}

#[test]
fn test_views_share_the_injected_store() {
    let store = CityStore::seeded();
    let ctx = ViewContext::new(store.clone());
    store.update_json("Bhuj", r#"{"resources":{"food":1000,"medical":0,"shelter":0}}"#).unwrap();

    let page = views::render(Route::Dashboard, &ctx);
    assert!(page.contains("Deployed Resources: 2,730"));
}

#[test]
fn test_update_json_creates_new_city() {
    let store = CityStore::seeded();
    store.update_json("Mumbai", r#"{"risk":"65%","type":"Heavy Rainfall","resources":{"food":400}}"#).unwrap();

    assert_eq!(
        store.get("Mumbai"),
        Some(CityRecord {
            risk: Some("65%".to_string()),
            disaster_type: Some(DisasterType::HeavyRainfall),
            resources: Some(Resources { food: Some(400), medical: None, shelter: None }),
        })
    );
    assert_eq!(store.len(), 4);
    assert_eq!(total_resources(&store.get_all()), 2650);
}

#[test]
fn test_update_json_empty_patch_creates_city_and_notifies() {
    let store = CityStore::seeded();
    let receiver = store.subscribe();
    store.update_json("Y", "{}").unwrap();

    assert_eq!(store.get("Y"), Some(CityRecord::default()));
    assert_eq!(store.version(), 1);
    assert!(receiver.has_changed().unwrap());
    assert_eq!(total_resources(&store.get_all()), 2250);
}

#[test]
fn test_counters_near_i64_max_sum_exactly() {
    let store = CityStore::seeded();
    store.update_json("X", r#"{"resources":{"food":9223372036854775807,"medical":1}}"#).unwrap();
    store.update("Z", CityPatch::default().resources(Resources::new(i64::MAX, i64::MAX, i64::MAX)));

    let expected = 4 * i128::from(i64::MAX) + 1 + 2250;
    assert_eq!(total_resources(&store.get_all()), expected);

    let ctx = ViewContext::new(store);
    assert!(views::render(Route::Resources, &ctx).contains("Total Resources: 36,893,488,147,419,105,479"));
    assert!(views::render(Route::Dashboard, &ctx).contains("Deployed Resources: 36,893,488,147,419,105,479"));
}

#[tokio::test]
async fn test_every_update_notifies_subscribers() {
    let store = CityStore::seeded();
    let mut first = store.subscribe();
    let mut second = store.clone().subscribe();

    store.update("Chennai", CityPatch::default().risk("75%"));
    assert_eq!(next_change(&mut first).await, Some(1));
    assert_eq!(next_change(&mut second).await, Some(1));

    store.update("Chennai", CityPatch::default().risk("80%"));
    store.update("Chennai", CityPatch::default().risk("85%"));
    // watch keeps only the latest value
    assert_eq!(next_change(&mut first).await, Some(3));
}
