pub mod api;

pub use api::{health_check, regenerate_headline, submit_business};
