pub(crate) mod bound;
pub(crate) mod builder;
pub(crate) mod database;
pub(crate) mod node;
pub(crate) mod padding;
