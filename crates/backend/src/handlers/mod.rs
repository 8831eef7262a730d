pub mod header_config;
