mod service;

pub use service::{CountdownRenderer, COUNTDOWN_ELEMENT_ID};
