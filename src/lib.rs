pub mod config;
pub mod dedup;
pub mod error;
pub mod geometry;
pub mod input;
pub mod normalize;
pub mod output;
pub mod pair;
pub mod pipeline;
pub mod record;
pub mod resolve;

pub use error::{MungeError, Result};
pub use pipeline::{munge, munge_files, PipelineStats};
pub use record::{IntersectionRecord, RawRecord};
