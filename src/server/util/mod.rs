pub mod id;
pub mod ordered;
