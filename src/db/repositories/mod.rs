pub mod kv_store;
