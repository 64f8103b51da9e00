pub mod api_utils;
pub mod components;
pub mod faceted_list;
pub mod icons;
pub mod list_utils;
