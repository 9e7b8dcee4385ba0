pub(crate) mod grid;
pub(crate) mod input;
pub(crate) mod screen;
pub(crate) mod toolbar;
