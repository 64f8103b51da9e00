use super::fetch::{fetch_facet_options, fetch_page};
use contracts::shared::faceted_list::{
    ColumnHeader, CommitOutcome, FacetOption, FacetedListEngine, FacetedRecord, FetchRequest,
    FilterState, ListMode, ListPhase, ListSchema, Page, Row,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

/// Начальные варианты фасетов, которые не выводятся из данных
#[derive(Debug, Clone, Default)]
pub struct FacetSeed {
    /// Фиксированные перечни (например, статусы)
    pub static_options: Vec<(&'static str, Vec<FacetOption>)>,
    /// Ресурс с вариантами, посчитанными на сервере
    pub remote_resource: Option<&'static str>,
}

/// Состояние одного выпадающего списка фильтра
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetControl {
    pub name: String,
    pub label: String,
    pub options: Vec<FacetOption>,
    pub selected: Option<String>,
}

/// Снимок фасетов движка для панели фильтров
pub fn facet_controls<R: FacetedRecord>(engine: &FacetedListEngine<R>) -> Vec<FacetControl> {
    let state = engine.filter_state();
    engine
        .facet_defs()
        .iter()
        .map(|def| FacetControl {
            name: def.name.to_string(),
            label: def.label.to_string(),
            options: engine.facet_options(def.name).to_vec(),
            selected: state.selected(def.name).map(str::to_string),
        })
        .collect()
}

/// Реактивный доступ к фасетному списку для представления
#[derive(Clone, Copy)]
pub struct FacetedListHandle {
    pub mode: ListMode,
    pub columns: Signal<Vec<ColumnHeader>>,
    pub facets: Signal<Vec<FacetControl>>,
    pub page: Signal<Page<Row>>,
    pub phase: Signal<ListPhase>,
    pub filter_state: Signal<FilterState>,
    pub warning: Signal<Option<String>>,
    pub facet_error: Signal<Option<String>>,
    pub set_filter: Callback<(String, Option<String>)>,
    pub set_keyword: Callback<String>,
    pub toggle_sort: Callback<String>,
    pub set_page: Callback<usize>,
    pub refresh: Callback<()>,
}

/// Создаёт движок в текущем владельце Leptos и сразу монтирует его
///
/// При уничтожении владельца движок размонтируется: ответы, пришедшие позже,
/// отбрасываются, загруженные данные освобождаются.
pub fn use_faceted_list<R>(schema: ListSchema<R>, seed: FacetSeed) -> FacetedListHandle
where
    R: FacetedRecord + DeserializeOwned + Send + Sync + 'static,
{
    let mode = schema.mode;
    let mut initial = FacetedListEngine::new(schema);
    for (facet, options) in seed.static_options {
        initial.set_facet_options(facet, options);
    }
    let engine = RwSignal::new(initial);

    let dispatch = move |request: Option<FetchRequest>| {
        let Some(request) = request else {
            return;
        };
        spawn_local(async move {
            let result = fetch_page::<R>(request.resource, &request.query).await;
            match engine.try_update(|e| e.commit(request.ticket, result)) {
                Some(CommitOutcome::Applied) => {}
                Some(CommitOutcome::Discarded) => {
                    log::debug!("{}: superseded response ignored", request.resource)
                }
                None => log::debug!("{}: view disposed, response dropped", request.resource),
            }
        });
    };

    if let Some(resource) = seed.remote_resource {
        spawn_local(async move {
            match fetch_facet_options(resource).await {
                Ok(options) => {
                    let _ = engine.try_update(|e| {
                        for (facet, values) in options {
                            e.set_facet_options(&facet, values);
                        }
                    });
                }
                Err(e) => {
                    let _ = engine.try_update(|state| state.set_facet_error(&e));
                }
            }
        });
    }

    dispatch(engine.try_update(|e| e.mount()).flatten());

    on_cleanup(move || {
        let _ = engine.try_update_untracked(|e| e.unmount());
    });

    let columns = Memo::new(move |_| engine.with(|e| e.columns()));
    let facets = Memo::new(move |_| engine.with(|e| facet_controls(e)));
    let page = Memo::new(move |_| engine.with(|e| e.page()));
    let phase = Memo::new(move |_| engine.with(|e| e.phase()));
    let filter_state = Memo::new(move |_| engine.with(|e| e.filter_state().clone()));
    let warning = Memo::new(move |_| engine.with(|e| e.warning().map(str::to_string)));
    let facet_error = Memo::new(move |_| engine.with(|e| e.facet_error().map(str::to_string)));

    let set_filter = Callback::new(move |(facet, value): (String, Option<String>)| {
        dispatch(
            engine
                .try_update(|e| e.set_filter(&facet, value.as_deref()))
                .flatten(),
        );
    });
    let set_keyword = Callback::new(move |keyword: String| {
        dispatch(engine.try_update(|e| e.set_keyword(&keyword)).flatten());
    });
    let toggle_sort = Callback::new(move |field: String| {
        dispatch(engine.try_update(|e| e.toggle_sort(&field)).flatten());
    });
    let set_page = Callback::new(move |page: usize| {
        dispatch(engine.try_update(|e| e.set_page(page)).flatten());
    });
    let refresh = Callback::new(move |_: ()| {
        dispatch(engine.try_update(|e| e.refresh()).flatten());
    });

    FacetedListHandle {
        mode,
        columns: columns.into(),
        facets: facets.into(),
        page: page.into(),
        phase: phase.into(),
        filter_state: filter_state.into(),
        warning: warning.into(),
        facet_error: facet_error.into(),
        set_filter,
        set_keyword,
        toggle_sort,
        set_page,
        refresh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a025_vehicle::aggregate::{status_options, vehicle_schema, Vehicle};
    use contracts::shared::faceted_list::PageResponse;

    fn vehicle(id: &str, name: &str, status: &str) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            product_name: Some(name.to_string()),
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn controls_follow_facet_definitions() {
        let mut engine = FacetedListEngine::new(vehicle_schema(ListMode::ServerFiltered));
        engine.set_facet_options("status", status_options());

        let controls = facet_controls(&engine);
        let names: Vec<_> = controls.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["model", "status", "dealer"]);

        let status = &controls[1];
        assert_eq!(status.options.len(), 4);
        assert_eq!(status.selected, None);
    }

    #[test]
    fn controls_reflect_selection_and_derived_options() {
        let mut engine = FacetedListEngine::new(vehicle_schema(ListMode::ClientFaceted));
        let request = engine.mount().expect("bulk request");
        let response = PageResponse {
            content: vec![vehicle("V1", "Vesta", "SOLD"), vehicle("V2", "Niva", "IN_STOCK")],
            total_pages: 1,
            total_elements: 2,
        };
        engine.commit(request.ticket, Ok(response));
        engine.set_filter("model", Some("Niva"));

        let controls = facet_controls(&engine);
        let model = controls.iter().find(|c| c.name == "model").expect("model facet");
        let values: Vec<_> = model.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Niva", "Vesta"]);
        assert_eq!(model.selected.as_deref(), Some("Niva"));
    }
}
