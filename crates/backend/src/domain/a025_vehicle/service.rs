use super::repository::{self, VehicleListFilter, MAX_LIMIT};
use contracts::domain::a025_vehicle::aggregate::{status_options, Vehicle, VehicleListQuery, VEHICLE_STATUSES};
use contracts::shared::faceted_list::{
    total_pages_for, FacetOption, FacetOptions, PageResponse, DEFAULT_PAGE_SIZE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEMO_SEED: u64 = 20_250_301;
const DEMO_COUNT: usize = 240;

const PRODUCTS: &[(&str, Option<&str>)] = &[
    ("Camry", Some("2.5 Hybrid")),
    ("Camry", Some("3.5")),
    ("RAV4", Some("Adventure")),
    ("Corolla", Some("1.6")),
    ("Land Cruiser", Some("300")),
    ("Hilux", None),
];

const DEALERS: &[&str] = &["Автомир Север", "Автомир Юг", "Центр-Авто", "Восток Моторс"];

const COLORS: &[&str] = &["Белый", "Чёрный", "Серебристый", "Красный", "Синий"];

const VIN_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXYZ0123456789";

/// GET /api/a025/vehicle: фильтрация, сортировка и пагинация на стороне сервера
pub async fn list_paginated(query: VehicleListQuery) -> anyhow::Result<PageResponse<Vehicle>> {
    let size = query.size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_LIMIT);
    let page = query.page.unwrap_or(0);

    let filter = VehicleListFilter {
        search: query.search_keyword,
        model: query.model,
        status: query.status,
        dealer: query.dealer,
        sort_by: query.sort_by.unwrap_or_else(|| "id".to_string()),
        sort_desc: query.sort_desc.unwrap_or(false),
        limit: size,
        offset: page.saturating_mul(size),
    };

    let (content, total) = repository::list_with_filters(&filter).await?;
    tracing::debug!(
        "a025 list: page={} size={} returned={} total={}",
        page,
        size,
        content.len(),
        total
    );

    Ok(PageResponse {
        content,
        total_pages: total_pages_for(total, size),
        total_elements: total,
    })
}

/// Опции фасетов для серверного режима
pub async fn facets() -> anyhow::Result<FacetOptions> {
    let mut options = FacetOptions::new();
    options.insert(
        "model".to_string(),
        repository::distinct_models()
            .await?
            .into_iter()
            .map(FacetOption::plain)
            .collect(),
    );
    options.insert(
        "dealer".to_string(),
        repository::distinct_dealers()
            .await?
            .into_iter()
            .map(FacetOption::plain)
            .collect(),
    );
    options.insert("status".to_string(), status_options());
    Ok(options)
}

fn random_vin(rng: &mut StdRng) -> String {
    (0..17)
        .map(|_| VIN_ALPHABET[rng.gen_range(0..VIN_ALPHABET.len())] as char)
        .collect()
}

/// Детерминированный набор демонстрационных автомобилей
pub fn build_demo_vehicles(count: usize, seed: u64) -> Vec<Vehicle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count)
        .map(|n| {
            let (product, version) = PRODUCTS[rng.gen_range(0..PRODUCTS.len())];
            let (status, _) = VEHICLE_STATUSES[rng.gen_range(0..VEHICLE_STATUSES.len())];
            Vehicle {
                id: format!("VH-{:06}", n),
                product_name: Some(product.to_string()),
                product_version: version.map(String::from),
                vin: if rng.gen_bool(0.95) {
                    Some(random_vin(&mut rng))
                } else {
                    None
                },
                status: Some(status.to_string()),
                dealer_name: if rng.gen_bool(0.9) {
                    Some(DEALERS[rng.gen_range(0..DEALERS.len())].to_string())
                } else {
                    None
                },
                color: Some(COLORS[rng.gen_range(0..COLORS.len())].to_string()),
                price: Some((rng.gen_range(1_800_000..12_000_000) / 1000 * 1000) as f64),
                manufacture_year: Some(rng.gen_range(2018..=2025)),
            }
        })
        .collect()
}

/// POST /api/a025/vehicle/testdata: заполнить таблицу, если она пуста
pub async fn insert_test_data() -> anyhow::Result<usize> {
    let existing = repository::count_all().await?;
    if existing > 0 {
        tracing::info!("a025: {} vehicles already present, test data skipped", existing);
        return Ok(0);
    }
    let created_at = chrono::Utc::now().to_rfc3339();
    let inserted =
        repository::insert_many(build_demo_vehicles(DEMO_COUNT, DEMO_SEED), &created_at).await?;
    tracing::info!("a025: inserted {} demo vehicles", inserted);
    Ok(inserted)
}
