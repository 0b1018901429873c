pub mod catalog_service;
pub mod chat_service;
