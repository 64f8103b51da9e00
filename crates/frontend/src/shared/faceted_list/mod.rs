//! Реактивная обвязка фасетного списка: загрузка, движок, таблица
pub mod controller;
pub mod fetch;
pub mod view;

pub use controller::{facet_controls, use_faceted_list, FacetControl, FacetSeed, FacetedListHandle};
pub use view::FacetedListView;
