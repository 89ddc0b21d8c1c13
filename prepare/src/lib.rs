pub mod encode;
pub mod error;
pub mod normalize;
pub mod output;
pub mod registry;
pub mod source;
