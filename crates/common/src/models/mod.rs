//! Data model mirroring the search backend's JSON responses
//!
//! Values are only ever built by deserializing a response (or by the
//! constructors used to render identifiers) and are never mutated.

mod league;
mod paper;
mod search;
mod team;

pub use league::League;
pub use paper::{Paper, PaperId, PaperIdError, TdpName, LYTI_SEPARATOR};
pub use search::{
    ApiResponse, Filter, ScoredChunk, SearchParams, SearchResult, SearchResultChunk,
    SearchSuggestions, SearchType, UnknownSearchType,
};
pub use team::TeamName;
