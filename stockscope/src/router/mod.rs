pub mod enrich;
pub mod history;
pub mod listing;
pub mod macros;
pub mod profile;
pub mod search;
