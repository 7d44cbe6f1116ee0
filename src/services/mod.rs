// Service module exports

pub mod page;
pub mod renderer;
