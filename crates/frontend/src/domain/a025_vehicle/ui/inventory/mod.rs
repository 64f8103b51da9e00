use crate::shared::faceted_list::{use_faceted_list, FacetSeed, FacetedListView};
use contracts::domain::a025_vehicle::aggregate::vehicle_schema;
use contracts::shared::faceted_list::ListMode;
use leptos::prelude::*;

/// Складской учёт: весь набор загружается один раз, фасеты считаются на клиенте
#[component]
pub fn VehicleInventory() -> impl IntoView {
    let handle = use_faceted_list(
        vehicle_schema(ListMode::ClientFaceted),
        FacetSeed::default(),
    );

    view! {
        <FacetedListView
            handle=handle
            title="Склад автомобилей"
            search_placeholder="Поиск по ID, модели, VIN..."
        />
    }
}
