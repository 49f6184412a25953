pub(crate) mod compose;
pub(crate) mod ingest;
pub(crate) mod model;
