pub mod schema;

pub(crate) use schema::SchemaSource;
