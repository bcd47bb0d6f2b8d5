pub(crate) mod context;
pub(crate) mod encoder;
pub(crate) mod pipeline;
pub(crate) mod settings;
