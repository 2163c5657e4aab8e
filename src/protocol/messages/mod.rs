//! Request/response schemas built from the codec primitives.

mod api_versions;
mod fetch;

pub use api_versions::{
    ApiVersionV0, ApiVersionV3, ApiVersionsRequestV0, ApiVersionsRequestV3,
    ApiVersionsResponseV0, ApiVersionsResponseV3, API_VERSIONS_KEY,
};
pub use fetch::{
    FetchPartitionV0, FetchRequestV0, FetchResponsePartitionV0, FetchResponseTopicV0,
    FetchResponseV0, FetchTopicV0, FETCH_KEY,
};
