pub mod faceted_list;
