// Module exports for models

pub mod target;
