pub mod advisor_llm;
pub mod image_studio;
pub mod insight_llm;
pub mod lease_llm;
pub mod listing_llm;
pub mod location_llm;
pub mod negotiation_llm;
pub mod offline;
pub mod qa_llm;
pub mod seed;
pub mod store;
pub mod trends_llm;

pub use advisor_llm::GeminiAdvisorAdapter;
pub use image_studio::GeminiImageStudioAdapter;
pub use insight_llm::GeminiInsightAdapter;
pub use lease_llm::GeminiLeaseAdapter;
pub use listing_llm::GeminiListingAdapter;
pub use location_llm::GeminiScoutAdapter;
pub use negotiation_llm::GeminiNegotiationAdapter;
pub use offline::OfflineAssistAdapter;
pub use qa_llm::GeminiQaAdapter;
pub use store::{JsonStoreAdapter, StoreOptions};
pub use trends_llm::GeminiTrendsAdapter;
