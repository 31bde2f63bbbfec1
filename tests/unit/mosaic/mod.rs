pub mod catalog;
pub mod sampler;
