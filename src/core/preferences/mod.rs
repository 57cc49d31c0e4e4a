pub mod preferences_store;
