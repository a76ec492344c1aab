//! Line-oriented persistence of rates, the open session and the history.

pub mod codec;
pub mod record_store;

pub use codec::StoredData;
pub use record_store::RecordStore;
