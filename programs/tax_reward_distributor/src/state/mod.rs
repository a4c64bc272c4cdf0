pub mod reward_pool;
pub mod holder_record;
pub mod tax_processor;

pub use reward_pool::*;
pub use holder_record::*;
pub use tax_processor::*;
