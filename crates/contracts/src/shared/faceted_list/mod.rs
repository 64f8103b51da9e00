//! Фасетный список с двумя стратегиями доступа к данным.
//!
//! * серверный режим (`server-filtered`): фильтры, сортировка и страница уходят в API
//!   на каждый запрос, метаданные пагинации берутся из ответа;
//! * клиентский режим (`client-faceted`): набор загружается один раз, фасеты, фильтры
//!   и страницы считаются в памяти.
//!
//! Обе стратегии используют одни определения фасетов и колонок и одну проекцию в строки таблицы.

pub mod bucket;
pub mod engine;
pub mod error;
pub mod facet;
pub mod filter;
pub mod mode;
pub mod paginate;
pub mod query;
pub mod record;
pub mod row;

pub use bucket::{bucket_index, Bucketer};
pub use engine::{
    CommitOutcome, FacetedListEngine, FetchRequest, ListPhase, ListSchema, RequestKind,
    RequestTicket, DEFAULT_BULK_SIZE, DEFAULT_PAGE_SIZE,
};
pub use error::FetchError;
pub use facet::{extract_facets, FacetDef, FacetOption, FacetOptions, ValueSource};
pub use filter::{filter_records, sort_records, FilterState, SortSpec};
pub use mode::ListMode;
pub use paginate::{paginate, total_pages_for, Page, PageResponse, PaginationSource};
pub use query::RemoteQuery;
pub use record::{compare_optional, FacetedRecord};
pub use row::{to_row, visible_columns, ColumnDef, ColumnHeader, ColumnScope, Row, PLACEHOLDER};
