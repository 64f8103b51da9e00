use crate::shared::faceted_list::{
    compare_optional, Bucketer, ColumnDef, ColumnScope, FacetDef, FacetOption, FacetedRecord,
    ListMode, ListSchema, SortSpec, ValueSource, DEFAULT_BULK_SIZE, DEFAULT_PAGE_SIZE,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Путь ресурса автомобилей в API
pub const VEHICLE_RESOURCE: &str = "/api/a025/vehicle";
pub const VEHICLE_FACETS_RESOURCE: &str = "/api/a025/vehicle/facets";

/// Условный "склад": в данных его нет, номер вычисляется из идентификатора.
/// Когда в API появится реальное поле, меняется только определение фасета и колонки.
pub const WAREHOUSE: Bucketer = Bucketer::new(3, "Склад ");

/// Статусы автомобиля (код, подпись)
pub const VEHICLE_STATUSES: &[(&str, &str)] = &[
    ("IN_STOCK", "На складе"),
    ("IN_TRANSIT", "В пути"),
    ("RESERVED", "Зарезервирован"),
    ("SOLD", "Продан"),
];

pub fn status_label(code: &str) -> String {
    VEHICLE_STATUSES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| code.to_string())
}

pub fn status_options() -> Vec<FacetOption> {
    VEHICLE_STATUSES
        .iter()
        .map(|(code, label)| FacetOption::new(*code, *label))
        .collect()
}

/// Автомобиль в том виде, в котором его отдаёт API
///
/// Названия продукта и дилера уже подставлены сервером из связанных справочников.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_version: Option<String>,
    #[serde(default)]
    pub vin: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub dealer_name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub manufacture_year: Option<i32>,
}

impl Vehicle {
    /// Модель = название продукта + версия
    pub fn model_name(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.product_name, &self.product_version]
            .into_iter()
            .filter_map(|p| p.as_deref().map(str::trim))
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

fn format_price(v: &Vehicle) -> Option<String> {
    v.price.map(|p| format!("{:.2}", p))
}

impl FacetedRecord for Vehicle {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn keyword_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Borrowed(self.id.as_str())];
        if let Some(model) = self.model_name() {
            fields.push(Cow::Owned(model));
        }
        if let Some(vin) = &self.vin {
            fields.push(Cow::Borrowed(vin.as_str()));
        }
        fields
    }

    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let lower = |s: &Option<String>| s.as_ref().map(|v| v.to_lowercase());
        match field {
            "id" => self.id.cmp(&other.id),
            "model" => compare_optional(
                &self.model_name().map(|m| m.to_lowercase()),
                &other.model_name().map(|m| m.to_lowercase()),
            ),
            "vin" => compare_optional(&self.vin, &other.vin),
            "status" => compare_optional(&self.status, &other.status),
            "dealer" => compare_optional(&lower(&self.dealer_name), &lower(&other.dealer_name)),
            "color" => compare_optional(&lower(&self.color), &lower(&other.color)),
            "price" => match (self.price, other.price) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            "year" => compare_optional(&self.manufacture_year, &other.manufacture_year),
            _ => Ordering::Equal,
        }
    }

    fn has_sort_value(&self, field: &str) -> bool {
        match field {
            "model" => self.model_name().is_some(),
            "vin" => self.vin.is_some(),
            "status" => self.status.is_some(),
            "dealer" => self.dealer_name.is_some(),
            "color" => self.color.is_some(),
            "price" => self.price.is_some(),
            "year" => self.manufacture_year.is_some(),
            _ => true,
        }
    }
}

fn facet_model() -> FacetDef<Vehicle> {
    FacetDef::field("model", "Модель", Vehicle::model_name)
}

fn facet_status() -> FacetDef<Vehicle> {
    FacetDef::field("status", "Статус", |v: &Vehicle| v.status.clone()).with_labeler(status_label)
}

/// Фасеты, которые умеет фильтровать сервер
pub fn server_facets() -> Vec<FacetDef<Vehicle>> {
    vec![
        facet_model(),
        facet_status(),
        FacetDef::field("dealer", "Дилер", |v: &Vehicle| v.dealer_name.clone()),
    ]
}

/// Фасеты складского представления, считаются по загруженному набору
pub fn client_facets() -> Vec<FacetDef<Vehicle>> {
    vec![
        facet_model(),
        FacetDef::field("vin", "VIN", |v: &Vehicle| v.vin.clone()),
        facet_status(),
        FacetDef::synthetic("warehouse", "Склад", WAREHOUSE),
    ]
}

pub fn vehicle_columns() -> Vec<ColumnDef<Vehicle>> {
    vec![
        ColumnDef::field("id", "ID", |v: &Vehicle| Some(v.id.clone())),
        ColumnDef::field("model", "Модель", Vehicle::model_name),
        ColumnDef::field("vin", "VIN", |v: &Vehicle| v.vin.clone()),
        ColumnDef::field("status", "Статус", |v: &Vehicle| {
            v.status.as_deref().map(status_label)
        }),
        ColumnDef::field("dealer", "Дилер", |v: &Vehicle| v.dealer_name.clone())
            .scoped(ColumnScope::ServerOnly),
        ColumnDef::field("color", "Цвет", |v: &Vehicle| v.color.clone()),
        ColumnDef::field("price", "Цена", format_price),
        ColumnDef::field("year", "Год", |v: &Vehicle| {
            v.manufacture_year.map(|y| y.to_string())
        }),
        ColumnDef {
            key: "warehouse",
            title: "Склад",
            scope: ColumnScope::ClientOnly,
            source: ValueSource::Synthetic(WAREHOUSE),
            sortable: false,
        },
    ]
}

/// Конфигурация представления автомобилей для режима
pub fn vehicle_schema(mode: ListMode) -> ListSchema<Vehicle> {
    ListSchema {
        resource: VEHICLE_RESOURCE,
        mode,
        facets: match mode {
            ListMode::ServerFiltered => server_facets(),
            ListMode::ClientFaceted => client_facets(),
        },
        columns: vehicle_columns(),
        page_size: DEFAULT_PAGE_SIZE,
        bulk_size: DEFAULT_BULK_SIZE,
        default_sort: Some(SortSpec {
            field: "id".to_string(),
            ascending: true,
        }),
    }
}

/// Параметры `GET /api/a025/vehicle`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleListQuery {
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub search_keyword: Option<String>,
    pub sort_by: Option<String>,
    pub sort_desc: Option<bool>,
    pub model: Option<String>,
    pub status: Option<String>,
    pub dealer: Option<String>,
}
