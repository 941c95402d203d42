pub(crate) mod content;
