pub(crate) mod filter;
pub(crate) mod fixture;
pub(crate) mod model;
pub(crate) mod page;
pub(crate) mod swatch;
