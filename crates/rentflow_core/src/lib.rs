pub mod domain;
pub mod ports;

pub use domain::{
    belongs_to_viewer, Booking, BookingStatus, GeoPoint, GuestCount, InlineImage, Inquiry,
    InquiryStatus, InteractionKind, InteractionLog, MapSearchResult, Message, MonthlyRevenue,
    NewUser, Property, PropertyCategory, PropertyStatus, SourceLink, Stats, TrendSearchResult,
    User, UserRole,
};
pub use ports::{
    AdvisorService, ImageStudioService, LeaseReviewService, ListingCopyService,
    LocationScoutService, MarketStore, MarketTrendsService, NegotiationService, PortError,
    PortResult, PropertyQaService, StatsInsightService,
};
