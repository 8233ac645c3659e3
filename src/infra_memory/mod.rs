mod credential_store_memory;
mod response_cache_memory;

pub use credential_store_memory::*;
pub use response_cache_memory::*;
