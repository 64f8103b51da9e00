use super::controller::{FacetControl, FacetedListHandle};
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, SearchInput};
use contracts::shared::faceted_list::{ColumnHeader, ListPhase, Row};
use leptos::prelude::*;

fn facet_select(control: FacetControl, set_filter: Callback<(String, Option<String>)>) -> impl IntoView {
    let FacetControl {
        name,
        label,
        options,
        selected,
    } = control;
    let current = selected.clone().unwrap_or_default();

    view! {
        <div class="form-group">
            <label>{label}</label>
            <select
                class="form-control"
                prop:value=current
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    let value = if value.is_empty() { None } else { Some(value) };
                    set_filter.run((name.clone(), value));
                }
            >
                <option value="" selected=selected.is_none()>"Все"</option>
                {options
                    .into_iter()
                    .map(|option| {
                        let is_selected = selected.as_deref() == Some(option.value.as_str());
                        view! {
                            <option value=option.value selected=is_selected>
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

fn filter_tags(facets: Vec<FacetControl>, set_filter: Callback<(String, Option<String>)>) -> impl IntoView {
    facets
        .into_iter()
        .filter_map(|control| {
            let value = control.selected?;
            let shown = control
                .options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.label.clone())
                .unwrap_or(value);
            let name = control.name;
            Some(view! {
                <FilterTag
                    label=format!("{}: {}", control.label, shown)
                    on_remove=Callback::new(move |_| set_filter.run((name.clone(), None)))
                />
            })
        })
        .collect_view()
}

fn table_body(phase: ListPhase, rows: Vec<Row>, column_count: usize) -> AnyView {
    let colspan = column_count.max(1).to_string();
    let state_row = move |text: String| {
        view! {
            <tr>
                <td class="table__state" colspan=colspan.clone()>{text}</td>
            </tr>
        }
        .into_any()
    };

    match phase {
        ListPhase::Loading => state_row("Загрузка...".to_string()),
        ListPhase::Failed(_) => state_row("Данные не загружены".to_string()),
        ListPhase::Empty => state_row("Нет данных".to_string()),
        _ => rows
            .into_iter()
            .map(|row| {
                view! {
                    <tr data-id=row.id.clone()>
                        {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                    </tr>
                }
            })
            .collect_view()
            .into_any(),
    }
}

/// Таблица фасетного списка: фильтры, поиск, сортируемые заголовки и страницы
#[component]
pub fn FacetedListView(
    handle: FacetedListHandle,
    #[prop(into)] title: String,
    #[prop(optional, into)] search_placeholder: String,
) -> impl IntoView {
    let FacetedListHandle {
        mode,
        columns,
        facets,
        page,
        phase,
        filter_state,
        warning,
        facet_error,
        set_filter,
        set_keyword,
        toggle_sort,
        set_page,
        refresh,
    } = handle;

    let is_filter_expanded = RwSignal::new(true);
    let active_filters_count = Signal::derive(move || filter_state.with(|s| s.active_filters_count()));
    let keyword = Signal::derive(move || filter_state.with(|s| s.keyword.clone()));

    let current_page = Signal::derive(move || page.with(|p| p.page));
    let total_pages = Signal::derive(move || page.with(|p| p.total_pages));
    let total_count = Signal::derive(move || page.with(|p| p.total_elements));

    let header_cell = move |column: ColumnHeader| {
        let ColumnHeader { key, title, sortable } = column;
        let indicator_key = key.clone();
        let indicator = move || {
            if !sortable {
                return "";
            }
            filter_state.with(|s| match &s.sort {
                Some(sort) => get_sort_indicator(Some(&sort.field), &indicator_key, sort.ascending),
                None => get_sort_indicator(None, &indicator_key, true),
            })
        };
        view! {
            <th
                class=if sortable { "table__header table__header--sortable" } else { "table__header" }
                on:click=move |_| {
                    if sortable {
                        toggle_sort.run(key.clone());
                    }
                }
            >
                {title}
                <span class="table__sort-indicator">{indicator}</span>
            </th>
        }
    };

    view! {
        <div class="page" data-mode=mode.as_str()>
            <div class="page__header">
                <h2 class="page__title">{title}</h2>
                <div class="page__actions">
                    <SearchInput
                        value=keyword
                        on_change=set_keyword
                        placeholder=search_placeholder
                    />
                    <button
                        class="button button--secondary"
                        on:click=move |_| refresh.run(())
                        disabled=move || phase.get() == ListPhase::Loading
                        title="Обновить"
                    >
                        {icon("refresh")}
                        "Обновить"
                    </button>
                </div>
            </div>

            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=active_filters_count
                pagination_controls=view! {
                    <PaginationControls
                        current_page=current_page
                        total_pages=total_pages
                        total_count=total_count
                        on_page_change=set_page
                    />
                }.into_any()
            >
                <div class="filter-panel__fields">
                    {move || {
                        facets
                            .get()
                            .into_iter()
                            .map(|control| facet_select(control, set_filter))
                            .collect_view()
                    }}
                </div>
                <div class="filter-panel__tags">
                    {move || filter_tags(facets.get(), set_filter)}
                </div>
            </FilterPanel>

            {move || {
                warning.get().map(|text| view! {
                    <div class="alert alert--warning">
                        {icon("alert")}
                        <span>{text}</span>
                    </div>
                })
            }}
            {move || {
                facet_error.get().map(|text| view! {
                    <div class="alert alert--danger">
                        {icon("alert")}
                        <span>{text}</span>
                    </div>
                })
            }}
            {move || match phase.get() {
                ListPhase::Failed(message) => Some(view! {
                    <div class="alert alert--danger">
                        {icon("alert")}
                        <span>{message}</span>
                    </div>
                }),
                _ => None,
            }}

            <div class="table-container">
                <table class="table__data">
                    <thead>
                        <tr>
                            {move || columns.get().into_iter().map(header_cell).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let column_count = columns.with(Vec::len);
                            table_body(phase.get(), page.get().rows, column_count)
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
