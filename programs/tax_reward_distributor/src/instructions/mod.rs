pub mod initialize_pool;
pub mod update_policy;
pub mod notify_balance_change;
pub mod set_excluded;
pub mod claim;
pub mod views;
pub mod initialize_processor;
pub mod wire_destinations;
pub mod process_tax;

pub use initialize_pool::*;
pub use update_policy::*;
pub use notify_balance_change::*;
pub use set_excluded::*;
pub use claim::*;
pub use views::*;
pub use initialize_processor::*;
pub use wire_destinations::*;
pub use process_tax::*;
