pub mod icons;
pub mod query;
