//! Category matching: alias expansion, filtering, signature computation,
//! caching, and candidate ranking.

mod aliases;
mod cache;
mod filter;
mod ranker;
mod signature;

pub use aliases::AliasTable;
pub use cache::{Clock, ManualClock, SignatureCache, SystemClock};
pub use filter::CategoryFilter;
pub use ranker::CandidateRanker;
pub use signature::SignatureResolver;
