pub(crate) mod sim;
pub(crate) mod window;
