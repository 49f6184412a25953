pub(crate) mod lines;
