use contracts::domain::a025_vehicle::aggregate::Vehicle;
use sea_orm::entity::prelude::*;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    Statement, Value,
};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a025_vehicle")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub product_name: Option<String>,
    pub product_version: Option<String>,
    pub vin: Option<String>,
    pub status: Option<String>,
    pub dealer_name: Option<String>,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub manufacture_year: Option<i32>,
    pub is_deleted: bool,
    pub created_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Vehicle {
    fn from(m: Model) -> Self {
        Vehicle {
            id: m.id,
            product_name: m.product_name,
            product_version: m.product_version,
            vin: m.vin,
            status: m.status,
            dealer_name: m.dealer_name,
            color: m.color,
            price: m.price,
            manufacture_year: m.manufacture_year,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// SQL-выражение модели; совпадает с `Vehicle::model_name` для значений без лишних пробелов
const MODEL_EXPR: &str =
    "TRIM(COALESCE(v.product_name, '') || ' ' || COALESCE(v.product_version, ''))";

pub const MAX_LIMIT: usize = 5000;

/// Фильтры списка автомобилей
#[derive(Debug, Clone, Default)]
pub struct VehicleListFilter {
    pub search: Option<String>,
    pub model: Option<String>,
    pub status: Option<String>,
    pub dealer: Option<String>,
    pub sort_by: String,
    pub sort_desc: bool,
    pub limit: usize,
    pub offset: usize,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Экранирование `%`, `_` и `\` для LIKE ... ESCAPE '\'
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// WHERE и параметры для фильтра (без сортировки и пагинации)
pub fn build_where(filter: &VehicleListFilter) -> (String, Vec<Value>) {
    let mut where_clauses: Vec<String> = vec!["v.is_deleted = 0".to_string()];
    let mut params: Vec<Value> = vec![];

    if let Some(model) = non_empty(&filter.model) {
        where_clauses.push(format!("{} = ?", MODEL_EXPR));
        params.push(model.to_string().into());
    }
    if let Some(status) = non_empty(&filter.status) {
        where_clauses.push("v.status = ?".to_string());
        params.push(status.to_string().into());
    }
    if let Some(dealer) = non_empty(&filter.dealer) {
        where_clauses.push("v.dealer_name = ?".to_string());
        params.push(dealer.to_string().into());
    }
    if let Some(search) = non_empty(&filter.search) {
        // LIKE в SQLite регистронезависим для ASCII
        where_clauses.push(format!(
            "(v.id LIKE ? ESCAPE '\\' OR {} LIKE ? ESCAPE '\\' OR COALESCE(v.vin, '') LIKE ? ESCAPE '\\')",
            MODEL_EXPR
        ));
        let pattern = format!("%{}%", escape_like(search));
        for _ in 0..3 {
            params.push(pattern.clone().into());
        }
    }

    (where_clauses.join(" AND "), params)
}

/// ORDER BY whitelist
pub fn order_column(sort_by: &str) -> &'static str {
    match sort_by {
        "model" => "LOWER(TRIM(COALESCE(v.product_name, '') || ' ' || COALESCE(v.product_version, '')))",
        "vin" => "v.vin",
        "status" => "v.status",
        "dealer" => "LOWER(v.dealer_name)",
        "color" => "LOWER(v.color)",
        "price" => "v.price",
        "year" => "v.manufacture_year",
        _ => "v.id",
    }
}

#[derive(Debug, FromQueryResult)]
struct CountResult {
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct ValueRow {
    value: Option<String>,
}

/// OFFSET для SQLite: отрицательное значение там означает "без смещения"
fn sql_offset(offset: usize) -> i64 {
    i64::try_from(offset).unwrap_or(i64::MAX)
}

/// Страница автомобилей и общее количество по фильтру
pub async fn list_with_filters(filter: &VehicleListFilter) -> anyhow::Result<(Vec<Vehicle>, usize)> {
    let db = conn();
    let backend = db.get_database_backend();
    let (where_sql, params) = build_where(filter);

    let count_sql = format!(
        "SELECT COUNT(*) AS count FROM a025_vehicle v WHERE {}",
        where_sql
    );
    let count_stmt = Statement::from_sql_and_values(backend, &count_sql, params.iter().cloned());
    let total = CountResult::find_by_statement(count_stmt)
        .one(db)
        .await?
        .map(|c| c.count.max(0) as usize)
        .unwrap_or(0);

    let order_dir = if filter.sort_desc { "DESC" } else { "ASC" };
    let data_sql = format!(
        "SELECT v.* FROM a025_vehicle v
         WHERE {}
         ORDER BY {} {} NULLS LAST, v.id ASC
         LIMIT ? OFFSET ?",
        where_sql,
        order_column(&filter.sort_by),
        order_dir
    );

    let mut data_params = params;
    data_params.push((filter.limit.clamp(1, MAX_LIMIT) as i64).into());
    data_params.push(sql_offset(filter.offset).into());
    let data_stmt = Statement::from_sql_and_values(backend, &data_sql, data_params);

    let items = Model::find_by_statement(data_stmt)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok((items, total))
}

async fn distinct_values(expr: &str) -> anyhow::Result<Vec<String>> {
    let db = conn();
    let sql = format!(
        "SELECT DISTINCT {expr} AS value FROM a025_vehicle v
         WHERE v.is_deleted = 0 AND {expr} IS NOT NULL AND {expr} <> ''
         ORDER BY value",
        expr = expr
    );
    let stmt = Statement::from_string(db.get_database_backend(), sql);
    let rows = ValueRow::find_by_statement(stmt).all(db).await?;
    Ok(rows.into_iter().filter_map(|r| r.value).collect())
}

pub async fn distinct_models() -> anyhow::Result<Vec<String>> {
    distinct_values(MODEL_EXPR).await
}

pub async fn distinct_dealers() -> anyhow::Result<Vec<String>> {
    distinct_values("v.dealer_name").await
}

pub async fn count_all() -> anyhow::Result<u64> {
    let count = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?;
    Ok(count)
}

pub async fn insert_many(vehicles: Vec<Vehicle>, created_at: &str) -> anyhow::Result<usize> {
    use sea_orm::Set;

    let inserted = vehicles.len();
    if inserted == 0 {
        return Ok(0);
    }
    let actives: Vec<ActiveModel> = vehicles
        .into_iter()
        .map(|v| ActiveModel {
            id: Set(v.id),
            product_name: Set(v.product_name),
            product_version: Set(v.product_version),
            vin: Set(v.vin),
            status: Set(v.status),
            dealer_name: Set(v.dealer_name),
            color: Set(v.color),
            price: Set(v.price),
            manufacture_year: Set(v.manufacture_year),
            is_deleted: Set(false),
            created_at: Set(Some(created_at.to_string())),
        })
        .collect();

    // SQLite ограничивает число параметров в одном запросе
    for chunk in actives.chunks(500) {
        Entity::insert_many(chunk.to_vec())
            .exec_without_returning(conn())
            .await?;
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> VehicleListFilter {
        VehicleListFilter {
            sort_by: "id".to_string(),
            limit: 50,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_filter_only_excludes_deleted() {
        let (sql, params) = build_where(&filter());
        assert_eq!(sql, "v.is_deleted = 0");
        assert!(params.is_empty());
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let mut f = filter();
        f.model = Some("   ".to_string());
        f.search = Some(String::new());
        let (sql, params) = build_where(&f);
        assert_eq!(sql, "v.is_deleted = 0");
        assert!(params.is_empty());
    }

    #[test]
    fn test_facets_and_search_are_and_combined() {
        let mut f = filter();
        f.status = Some("SOLD".to_string());
        f.dealer = Some("Север".to_string());
        f.search = Some("x1".to_string());
        let (sql, params) = build_where(&f);
        assert!(sql.contains("v.status = ?"));
        assert!(sql.contains("v.dealer_name = ?"));
        assert!(sql.contains("v.id LIKE ?"));
        assert_eq!(sql.matches(" AND ").count(), 3);
        assert_eq!(params.len(), 5);
        assert_eq!(params[2], Value::from("%x1%".to_string()));
    }

    #[test]
    fn test_like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn test_order_column_whitelist() {
        assert_eq!(order_column("price"), "v.price");
        assert_eq!(order_column("year"), "v.manufacture_year");
        assert_eq!(order_column("id; DROP TABLE a025_vehicle"), "v.id");
    }

    #[test]
    fn test_huge_offset_stays_positive() {
        assert_eq!(sql_offset(0), 0);
        assert_eq!(sql_offset(150), 150);
        assert_eq!(sql_offset(usize::MAX), i64::MAX);
    }
}
