use crate::shared::faceted_list::{use_faceted_list, FacetSeed, FacetedListView};
use contracts::domain::a025_vehicle::aggregate::{
    status_options, vehicle_schema, VEHICLE_FACETS_RESOURCE,
};
use contracts::shared::faceted_list::ListMode;
use leptos::prelude::*;

/// Список автомобилей: фильтры, сортировка и страницы считает сервер
#[component]
pub fn VehicleList() -> impl IntoView {
    let handle = use_faceted_list(
        vehicle_schema(ListMode::ServerFiltered),
        FacetSeed {
            static_options: vec![("status", status_options())],
            remote_resource: Some(VEHICLE_FACETS_RESOURCE),
        },
    );

    view! {
        <FacetedListView
            handle=handle
            title="Автомобили"
            search_placeholder="Поиск по ID, модели, VIN..."
        />
    }
}
