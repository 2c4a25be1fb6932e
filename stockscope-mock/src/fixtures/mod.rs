pub mod companies;
pub mod history;
pub mod listing;
pub mod search;
