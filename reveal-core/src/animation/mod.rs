pub(crate) mod ease;
pub(crate) mod transition;
