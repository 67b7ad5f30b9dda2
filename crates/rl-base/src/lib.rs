pub mod constants;
pub mod dataset;
pub mod sampler;
pub mod selection;
pub mod share;
pub mod shopping;
