mod error;
mod memory;
mod store;
mod types;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use store::CardStore;
pub use types::{
    Catalog, CardRecord, CardTypeFilter, PlayerQuery, PlayerRecord, SeriesRecord, TeamRecord,
};
