pub(crate) mod scenario;
pub(crate) mod stage;
pub(crate) mod wrapper;
