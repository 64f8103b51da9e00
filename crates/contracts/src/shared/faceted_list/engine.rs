use super::error::FetchError;
use super::facet::{extract_facets, FacetDef, FacetOption, FacetOptions};
use super::filter::{filter_records, sort_records, FilterState, SortSpec};
use super::mode::ListMode;
use super::paginate::{Page, PageResponse, PaginationSource, RemotePageMeta};
use super::query::RemoteQuery;
use super::record::FacetedRecord;
use super::row::{to_row, visible_columns, ColumnDef, ColumnHeader, Row};

/// Размер страницы по умолчанию
pub const DEFAULT_PAGE_SIZE: usize = 50;
/// Верхняя граница "загрузить всё" в клиентском режиме
pub const DEFAULT_BULK_SIZE: usize = 1000;

/// Статическая конфигурация одного представления
pub struct ListSchema<R> {
    pub resource: &'static str,
    pub mode: ListMode,
    pub facets: Vec<FacetDef<R>>,
    pub columns: Vec<ColumnDef<R>>,
    pub page_size: usize,
    pub bulk_size: usize,
    pub default_sort: Option<SortSpec>,
}

impl<R> Clone for ListSchema<R> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource,
            mode: self.mode,
            facets: self.facets.clone(),
            columns: self.columns.clone(),
            page_size: self.page_size,
            bulk_size: self.bulk_size,
            default_sort: self.default_sort.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Одна страница серверного режима
    Page,
    /// Полная загрузка клиентского режима
    Bulk,
}

/// Метка запроса: ответ принимается, только если метка всё ещё актуальна
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub kind: RequestKind,
    pub stamp: u64,
}

/// Запрос, который вызывающая сторона должна отправить и вернуть через `commit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: RequestTicket,
    pub resource: &'static str,
    pub query: RemoteQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied,
    /// Ответ устарел (состояние сменилось) или представление размонтировано
    Discarded,
}

/// Что показывать вместо/вместе с таблицей
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Failed(String),
    Empty,
    Ready,
}

struct RemotePage<R> {
    content: Vec<R>,
    meta: RemotePageMeta,
}

/// Движок фасетного списка с двумя стратегиями доступа к данным
///
/// Движок ничего не загружает сам: изменения состояния возвращают `FetchRequest`,
/// а результат возвращается через `commit`. Все данные живут только в экземпляре
/// и пропадают при `unmount`.
pub struct FacetedListEngine<R> {
    schema: ListSchema<R>,
    state: FilterState,
    bulk: Option<Vec<R>>,
    remote: Option<RemotePage<R>>,
    facet_options: FacetOptions,
    /// Опции, заданные снаружи (статические перечни, ответ API фасетов)
    seeded_options: FacetOptions,
    facet_error: Option<String>,
    pending: Option<RequestTicket>,
    error: Option<String>,
    warning: Option<String>,
    stamp: u64,
    mounted: bool,
}

impl<R: FacetedRecord> FacetedListEngine<R> {
    pub fn new(schema: ListSchema<R>) -> Self {
        let state = FilterState {
            sort: schema.default_sort.clone(),
            ..FilterState::default()
        };
        Self {
            schema,
            state,
            bulk: None,
            remote: None,
            facet_options: FacetOptions::new(),
            seeded_options: FacetOptions::new(),
            facet_error: None,
            pending: None,
            error: None,
            warning: None,
            stamp: 0,
            mounted: false,
        }
    }

    pub fn mode(&self) -> ListMode {
        self.schema.mode
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }

    pub fn facet_defs(&self) -> &[FacetDef<R>] {
        &self.schema.facets
    }

    pub fn columns(&self) -> Vec<ColumnHeader> {
        visible_columns(&self.schema.columns, self.schema.mode)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Ошибка загрузки вариантов фасетов: список работает, но фильтры неполные
    pub fn facet_error(&self) -> Option<&str> {
        self.facet_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    // ------------------------------------------------------------------
    // Жизненный цикл
    // ------------------------------------------------------------------

    pub fn mount(&mut self) -> Option<FetchRequest> {
        self.mounted = true;
        match self.schema.mode {
            ListMode::ServerFiltered => self.issue(RequestKind::Page),
            ListMode::ClientFaceted => self.ensure_bulk(),
        }
    }

    /// Все ответы, пришедшие после размонтирования, будут отброшены
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.pending = None;
        self.bulk = None;
        self.remote = None;
        self.facet_options = self.seeded_options.clone();
        self.error = None;
        self.warning = None;
        self.stamp += 1;
    }

    /// Сбросить кэш (клиентский режим) или перезапросить страницу (серверный)
    pub fn refresh(&mut self) -> Option<FetchRequest> {
        match self.schema.mode {
            ListMode::ServerFiltered => self.issue(RequestKind::Page),
            ListMode::ClientFaceted => {
                self.bulk = None;
                self.pending = None;
                self.issue(RequestKind::Bulk)
            }
        }
    }

    // ------------------------------------------------------------------
    // Изменения состояния
    // ------------------------------------------------------------------

    pub fn set_keyword(&mut self, keyword: &str) -> Option<FetchRequest> {
        self.state.set_keyword(keyword);
        self.after_change()
    }

    pub fn set_filter(&mut self, facet: &str, value: Option<&str>) -> Option<FetchRequest> {
        self.state.set_facet(facet, value);
        self.after_change()
    }

    pub fn toggle_sort(&mut self, field: &str) -> Option<FetchRequest> {
        self.state.toggle_sort(field);
        self.after_change()
    }

    pub fn set_page(&mut self, page: usize) -> Option<FetchRequest> {
        self.state.set_page(page);
        self.after_change()
    }

    /// Опции фасета из внешнего источника (серверный режим: статический список или ответ API)
    pub fn set_facet_options(&mut self, facet: &str, options: Vec<FacetOption>) {
        self.seeded_options.insert(facet.to_string(), options.clone());
        self.facet_options.insert(facet.to_string(), options);
        self.facet_error = None;
    }

    /// Варианты фасетов не загрузились: показывается пользователю отдельно от ошибки списка
    pub fn set_facet_error(&mut self, error: &FetchError) {
        log::error!("{}: facet options failed: {}", self.schema.resource, error);
        self.facet_error = Some(format!("Фильтры недоступны. {}", error.user_message()));
    }

    fn after_change(&mut self) -> Option<FetchRequest> {
        match self.schema.mode {
            ListMode::ServerFiltered => self.issue(RequestKind::Page),
            ListMode::ClientFaceted => self.ensure_bulk(),
        }
    }

    fn ensure_bulk(&mut self) -> Option<FetchRequest> {
        if self.bulk.is_some() || self.pending.is_some() {
            return None;
        }
        self.issue(RequestKind::Bulk)
    }

    fn issue(&mut self, kind: RequestKind) -> Option<FetchRequest> {
        if !self.mounted {
            return None;
        }
        self.stamp += 1;
        let ticket = RequestTicket {
            kind,
            stamp: self.stamp,
        };
        self.pending = Some(ticket);
        let query = match kind {
            RequestKind::Page => RemoteQuery::from_state(&self.state, self.schema.page_size),
            RequestKind::Bulk => RemoteQuery::bulk(self.schema.bulk_size),
        };
        Some(FetchRequest {
            ticket,
            resource: self.schema.resource,
            query,
        })
    }

    // ------------------------------------------------------------------
    // Приём ответов
    // ------------------------------------------------------------------

    pub fn commit(
        &mut self,
        ticket: RequestTicket,
        result: Result<PageResponse<R>, FetchError>,
    ) -> CommitOutcome {
        if !self.mounted || self.pending != Some(ticket) {
            log::debug!(
                "{}: discarding stale response (stamp {})",
                self.schema.resource,
                ticket.stamp
            );
            return CommitOutcome::Discarded;
        }
        self.pending = None;

        match (ticket.kind, result) {
            (RequestKind::Bulk, Ok(response)) => {
                self.warning = self.truncation_warning(&response);
                if let Some(w) = &self.warning {
                    log::warn!("{}: {}", self.schema.resource, w);
                }
                self.facet_options = extract_facets(&response.content, &self.schema.facets);
                self.bulk = Some(response.content);
                self.error = None;
            }
            (RequestKind::Bulk, Err(e)) => {
                log::error!("{}: bulk load failed: {}", self.schema.resource, e);
                self.facet_options = extract_facets(&[], &self.schema.facets);
                self.bulk = Some(Vec::new());
                self.warning = None;
                self.error = Some(e.user_message());
            }
            (RequestKind::Page, Ok(response)) => {
                self.remote = Some(RemotePage {
                    meta: RemotePageMeta {
                        total_pages: response.total_pages,
                        total_elements: response.total_elements,
                    },
                    content: response.content,
                });
                self.error = None;
            }
            (RequestKind::Page, Err(e)) => {
                log::error!("{}: page load failed: {}", self.schema.resource, e);
                // строки и счётчик страниц сбрасываются вместе
                self.remote = Some(RemotePage {
                    content: Vec::new(),
                    meta: RemotePageMeta {
                        total_pages: 1,
                        total_elements: 0,
                    },
                });
                self.error = Some(e.user_message());
            }
        }
        CommitOutcome::Applied
    }

    fn truncation_warning(&self, response: &PageResponse<R>) -> Option<String> {
        let loaded = response.content.len();
        let limit = self.schema.bulk_size;
        if loaded >= limit || response.total_elements > loaded {
            Some(format!(
                "Загружено {} из {} записей (лимит {}). Записи за пределами лимита не видны фильтрам",
                loaded,
                response.total_elements.max(loaded),
                limit
            ))
        } else {
            None
        }
    }

    // ------------------------------------------------------------------
    // Чтение
    // ------------------------------------------------------------------

    pub fn facet_options(&self, facet: &str) -> &[FacetOption] {
        self.facet_options
            .get(facet)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Загруженный набор клиентского режима
    pub fn dataset(&self) -> &[R] {
        self.bulk.as_deref().unwrap_or(&[])
    }

    /// Отфильтрованные и отсортированные записи клиентского режима
    pub fn filtered(&self) -> Vec<&R> {
        let mut records = filter_records(self.dataset(), &self.state, &self.schema.facets);
        sort_records(&mut records, self.state.sort.as_ref());
        records
    }

    pub fn page(&self) -> Page<Row> {
        let mode = self.schema.mode;
        let columns = &self.schema.columns;
        match mode {
            ListMode::ServerFiltered => match &self.remote {
                // пока идёт запрос, строки прошлого запроса не показываются
                _ if self.pending.is_some() => Page {
                    page: self.state.page,
                    ..Page::empty()
                },
                Some(remote) => PaginationSource::Remote {
                    content: &remote.content,
                    meta: remote.meta,
                }
                .page(self.state.page)
                .map(|r| to_row(&r, columns, mode)),
                None => Page {
                    page: self.state.page,
                    ..Page::empty()
                },
            },
            ListMode::ClientFaceted => {
                let filtered = self.filtered();
                PaginationSource::Local {
                    dataset: &filtered,
                    page_size: self.schema.page_size,
                }
                .page(self.state.page)
                .map(|r| to_row(r, columns, mode))
            }
        }
    }

    pub fn phase(&self) -> ListPhase {
        if self.pending.is_some() {
            return ListPhase::Loading;
        }
        if let Some(e) = &self.error {
            return ListPhase::Failed(e.clone());
        }
        let loaded = match self.schema.mode {
            ListMode::ServerFiltered => self.remote.is_some(),
            ListMode::ClientFaceted => self.bulk.is_some(),
        };
        if !loaded {
            ListPhase::Loading
        } else if self.page().rows.is_empty() {
            ListPhase::Empty
        } else {
            ListPhase::Ready
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::faceted_list::bucket::Bucketer;
    use std::borrow::Cow;
    use std::cmp::Ordering;

    #[derive(Clone, Debug, PartialEq)]
    struct Unit {
        id: String,
        kind: String,
    }

    impl FacetedRecord for Unit {
        fn record_id(&self) -> &str {
            &self.id
        }

        fn keyword_fields(&self) -> Vec<Cow<'_, str>> {
            vec![Cow::Borrowed(&self.id), Cow::Borrowed(&self.kind)]
        }

        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "id" => self.id.cmp(&other.id),
                _ => Ordering::Equal,
            }
        }
    }

    fn unit(id: &str, kind: &str) -> Unit {
        Unit {
            id: id.to_string(),
            kind: kind.to_string(),
        }
    }

    fn schema(mode: ListMode) -> ListSchema<Unit> {
        ListSchema {
            resource: "/api/units",
            mode,
            facets: vec![
                FacetDef::field("kind", "Тип", |u: &Unit| Some(u.kind.clone())),
                FacetDef::synthetic("bucket", "Корзина", Bucketer::new(3, "")),
            ],
            columns: vec![
                ColumnDef::field("id", "ID", |u: &Unit| Some(u.id.clone())),
                ColumnDef::field("kind", "Тип", |u: &Unit| Some(u.kind.clone())),
            ],
            page_size: 2,
            bulk_size: 10,
            default_sort: None,
        }
    }

    fn units() -> Vec<Unit> {
        vec![
            unit("u1", "car"),
            unit("u2", "truck"),
            unit("u3", "car"),
            unit("u4", "bike"),
            unit("u5", "car"),
        ]
    }

    fn ok(content: Vec<Unit>, total_pages: usize, total_elements: usize) -> Result<PageResponse<Unit>, FetchError> {
        Ok(PageResponse {
            content,
            total_pages,
            total_elements,
        })
    }

    fn loaded_client() -> FacetedListEngine<Unit> {
        let mut engine = FacetedListEngine::new(schema(ListMode::ClientFaceted));
        let req = engine.mount().expect("bulk request on mount");
        assert_eq!(req.ticket.kind, RequestKind::Bulk);
        assert_eq!(req.query.size, 10);
        assert_eq!(engine.commit(req.ticket, ok(units(), 1, 5)), CommitOutcome::Applied);
        engine
    }

    #[test]
    fn test_client_mode_recomputes_without_requests() {
        let mut engine = loaded_client();
        assert_eq!(engine.phase(), ListPhase::Ready);
        assert_eq!(engine.page().total_pages, 3);

        assert!(engine.set_filter("kind", Some("car")).is_none());
        let page = engine.page();
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.rows[0].id, "u1");

        assert!(engine.set_page(2).is_none());
        assert_eq!(engine.page().rows.len(), 1);

        assert!(engine.set_keyword("U3").is_none());
        assert_eq!(engine.filter_state().page, 1);
        assert_eq!(engine.page().rows.len(), 1);
    }

    #[test]
    fn test_client_facets_derived_from_bulk() {
        let engine = loaded_client();
        let kinds: Vec<&str> = engine
            .facet_options("kind")
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(kinds, vec!["bike", "car", "truck"]);
        assert!(!engine.facet_options("bucket").is_empty());
        assert!(engine.facet_options("missing").is_empty());
    }

    #[test]
    fn test_every_offered_option_matches_something() {
        let mut engine = loaded_client();
        for def in ["kind", "bucket"] {
            let options: Vec<FacetOption> = engine.facet_options(def).to_vec();
            for option in options {
                engine.set_filter(def, Some(option.value.as_str()));
                let filtered = engine.filtered();
                assert!(!filtered.is_empty(), "{def}={} matched nothing", option.value);
                let facet = engine
                    .facet_defs()
                    .iter()
                    .find(|f| f.name == def)
                    .unwrap()
                    .clone();
                assert!(filtered
                    .iter()
                    .all(|r| facet.value_of(r).as_deref() == Some(option.value.as_str())));
            }
            engine.set_filter(def, None);
        }
    }

    #[test]
    fn test_keyword_changes_do_not_discard_bulk_load() {
        let mut engine = FacetedListEngine::new(schema(ListMode::ClientFaceted));
        let req = engine.mount().unwrap();
        assert!(engine.set_keyword("car").is_none());
        assert_eq!(engine.phase(), ListPhase::Loading);
        assert_eq!(engine.commit(req.ticket, ok(units(), 1, 5)), CommitOutcome::Applied);
        assert_eq!(engine.page().total_elements, 3);
    }

    #[test]
    fn test_bulk_failure_yields_empty_dataset_and_message() {
        let mut engine = FacetedListEngine::new(schema(ListMode::ClientFaceted));
        let req = engine.mount().unwrap();
        engine.commit(req.ticket, Err(FetchError::Server(502)));
        assert!(matches!(engine.phase(), ListPhase::Failed(_)));
        assert!(engine.dataset().is_empty());
        assert_eq!(engine.page().total_pages, 1);

        // повторная попытка через refresh
        let retry = engine.refresh().expect("refresh reloads");
        assert_eq!(engine.phase(), ListPhase::Loading);
        engine.commit(retry.ticket, ok(units(), 1, 5));
        assert_eq!(engine.phase(), ListPhase::Ready);
        assert_eq!(engine.error(), None);
    }

    #[test]
    fn test_truncated_bulk_sets_warning() {
        let mut engine = FacetedListEngine::new(schema(ListMode::ClientFaceted));
        let req = engine.mount().unwrap();
        let many: Vec<Unit> = (0..10).map(|i| unit(&format!("u{i}"), "car")).collect();
        engine.commit(req.ticket, ok(many, 3, 25));
        let warning = engine.warning().expect("capacity warning");
        assert!(warning.contains("10 из 25"));
        assert_eq!(engine.phase(), ListPhase::Ready);
    }

    #[test]
    fn test_server_mode_issues_request_per_change() {
        let mut engine = FacetedListEngine::new(schema(ListMode::ServerFiltered));
        let first = engine.mount().unwrap();
        assert_eq!(first.ticket.kind, RequestKind::Page);
        assert_eq!(first.query.page, 0);
        engine.commit(first.ticket, ok(vec![unit("u1", "car"), unit("u2", "car")], 7, 13));
        let page = engine.page();
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.total_pages, 7);
        assert_eq!(page.total_elements, 13);

        let req = engine.set_page(4).unwrap();
        assert_eq!(req.query.page, 3);
        let req = engine.set_filter("kind", Some("car")).unwrap();
        assert_eq!(req.query.page, 0);
        assert_eq!(req.query.facets, vec![("kind".to_string(), "car".to_string())]);
    }

    #[test]
    fn test_superseded_response_is_discarded() {
        let mut engine = FacetedListEngine::new(schema(ListMode::ServerFiltered));
        let initial = engine.mount().unwrap();
        let stale = engine.set_keyword("ca").unwrap();
        let current = engine.set_keyword("car").unwrap();

        assert_eq!(
            engine.commit(initial.ticket, ok(vec![unit("u9", "x")], 1, 1)),
            CommitOutcome::Discarded
        );
        assert_eq!(
            engine.commit(current.ticket, ok(vec![unit("u1", "car")], 1, 1)),
            CommitOutcome::Applied
        );
        assert_eq!(
            engine.commit(stale.ticket, ok(vec![unit("u2", "ca")], 1, 1)),
            CommitOutcome::Discarded
        );
        assert_eq!(engine.page().rows[0].id, "u1");
    }

    #[test]
    fn test_unmount_discards_in_flight_and_drops_cache() {
        let mut engine = loaded_client();
        let req = engine.refresh().unwrap();
        engine.unmount();
        assert_eq!(engine.commit(req.ticket, ok(units(), 1, 5)), CommitOutcome::Discarded);
        assert!(engine.dataset().is_empty());
        assert!(engine.set_keyword("x").is_none());

        // повторное монтирование начинает с чистого кэша
        let again = engine.mount().unwrap();
        assert_eq!(again.ticket.kind, RequestKind::Bulk);
        assert!(again.ticket.stamp > req.ticket.stamp);
    }

    #[test]
    fn test_server_failure_resets_rows_and_pages_together() {
        let mut engine = FacetedListEngine::new(schema(ListMode::ServerFiltered));
        let first = engine.mount().unwrap();
        engine.commit(first.ticket, ok(vec![unit("u1", "car")], 5, 9));
        engine.set_filter("kind", Some("car"));
        let req = engine.set_page(3).unwrap();
        engine.commit(req.ticket, Err(FetchError::Unauthorized));

        let page = engine.page();
        assert!(page.rows.is_empty());
        assert_eq!(page.total_pages, 1);
        assert!(matches!(engine.phase(), ListPhase::Failed(m) if m.contains("Сессия")));
        assert_eq!(engine.filter_state().selected("kind"), Some("car"));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let mut engine = FacetedListEngine::new(schema(ListMode::ServerFiltered));
        let req = engine.mount().unwrap();
        engine.commit(req.ticket, ok(Vec::new(), 0, 0));
        assert_eq!(engine.phase(), ListPhase::Empty);
        assert_eq!(engine.page().total_pages, 1);
    }

    #[test]
    fn test_no_requests_before_mount() {
        let mut engine = FacetedListEngine::new(schema(ListMode::ServerFiltered));
        assert!(engine.set_keyword("car").is_none());
        assert!(engine.refresh().is_none());
        assert_eq!(engine.phase(), ListPhase::Loading);
    }

    #[test]
    fn test_server_facet_options_are_external() {
        let mut engine = FacetedListEngine::new(schema(ListMode::ServerFiltered));
        engine.set_facet_options("kind", vec![FacetOption::plain("car")]);
        let req = engine.mount().unwrap();
        engine.commit(req.ticket, ok(vec![unit("u2", "truck")], 1, 1));
        assert_eq!(engine.facet_options("kind"), &[FacetOption::plain("car")]);
    }

    #[test]
    fn test_server_rows_hidden_while_request_pending() {
        let mut engine = FacetedListEngine::new(schema(ListMode::ServerFiltered));
        let first = engine.mount().unwrap();
        engine.commit(first.ticket, ok(vec![unit("OLD1", "car"), unit("OLD2", "car")], 9, 18));
        let req = engine.set_page(5).unwrap();
        engine.commit(req.ticket, ok(vec![unit("u9", "car")], 9, 18));

        let req = engine.set_keyword("zzz").unwrap();
        assert_eq!(engine.phase(), ListPhase::Loading);
        let page = engine.page();
        assert!(page.rows.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);

        engine.commit(req.ticket, ok(Vec::new(), 0, 0));
        assert_eq!(engine.phase(), ListPhase::Empty);
    }

    #[test]
    fn test_facet_option_failure_is_reported() {
        let mut engine = FacetedListEngine::new(schema(ListMode::ServerFiltered));
        let req = engine.mount().unwrap();
        engine.set_facet_error(&FetchError::Server(500));
        let message = engine.facet_error().expect("facet error shown");
        assert!(message.starts_with("Фильтры недоступны"));

        // список при этом продолжает работать
        engine.commit(req.ticket, ok(vec![unit("u1", "car")], 1, 1));
        assert_eq!(engine.phase(), ListPhase::Ready);

        engine.set_facet_options("kind", vec![FacetOption::plain("car")]);
        assert_eq!(engine.facet_error(), None);
    }

    #[test]
    fn test_remount_starts_without_previous_dataset_state() {
        let mut engine = FacetedListEngine::new(schema(ListMode::ClientFaceted));
        engine.set_facet_options("kind", vec![FacetOption::plain("seeded")]);
        let req = engine.mount().unwrap();
        let many: Vec<Unit> = (0..10).map(|i| unit(&format!("u{i}"), "car")).collect();
        engine.commit(req.ticket, ok(many, 3, 25));
        assert!(!engine.facet_options("bucket").is_empty());
        assert!(engine.warning().is_some());

        engine.unmount();
        engine.mount().unwrap();
        assert!(engine.facet_options("bucket").is_empty());
        assert_eq!(engine.facet_options("kind"), &[FacetOption::plain("seeded")]);
        assert_eq!(engine.warning(), None);
        assert_eq!(engine.error(), None);
        assert_eq!(engine.phase(), ListPhase::Loading);
    }

    #[test]
    fn test_complete_bulk_load_has_no_warning() {
        let mut engine = FacetedListEngine::new(schema(ListMode::ClientFaceted));
        let req = engine.mount().unwrap();
        let some: Vec<Unit> = (0..9).map(|i| unit(&format!("u{i}"), "car")).collect();
        engine.commit(req.ticket, ok(some, 1, 9));
        assert_eq!(engine.warning(), None);
        assert_eq!(engine.dataset().len(), 9);
    }

    #[test]
    fn test_refresh_supersedes_earlier_bulk_load() {
        let mut engine = FacetedListEngine::new(schema(ListMode::ClientFaceted));
        let first = engine.mount().unwrap();
        let second = engine.refresh().expect("refresh issues a new bulk load");
        assert_eq!(second.ticket.kind, RequestKind::Bulk);
        assert_ne!(first.ticket, second.ticket);

        assert_eq!(
            engine.commit(first.ticket, ok(vec![unit("old", "car")], 1, 1)),
            CommitOutcome::Discarded
        );
        assert!(engine.is_loading());
        assert_eq!(engine.phase(), ListPhase::Loading);
        assert!(engine.set_keyword("u").is_none());

        assert_eq!(engine.commit(second.ticket, ok(units(), 1, 5)), CommitOutcome::Applied);
        assert_eq!(engine.dataset().len(), 5);
        assert!(!engine.is_loading());
    }
}
