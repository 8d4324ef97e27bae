//! Data models for the social media manager API.
//!
//! This module contains the request and response structures for each
//! backend resource:
//!
//! - `User`: the signed-in profile
//! - `Post`, `NewPost`: composed and scheduled posts
//! - `SocialAccount`: connected platform accounts
//! - `MediaAsset`: uploaded images and videos
//! - Analytics types: `AnalyticsDashboard`, `PlatformBreakdown`, ...
//! - Inbox types: `InboxMessage`, `InboxFilter`, `UnreadCounts`
//! - Bio page types: `BioPage`, `BioLink`, `PublicBioPage`
//! - Category and recycling types: `Category`, `RecycleQueueItem`
//! - Strategy and bulk scheduling types
//! - AI writing helpers, feed grid preview, best posting times,
//!   first comments and account settings

pub mod account;
pub mod ai;
pub mod analytics;
pub mod best_time;
pub mod bio;
pub mod bulk;
pub mod category;
pub mod feed;
pub mod first_comment;
pub mod inbox;
pub mod media;
pub mod post;
pub mod settings;
pub mod strategy;
pub mod user;

pub use account::{OAuthStart, Platform, SocialAccount};
pub use ai::{CalendarRequest, CalendarSlot, CaptionRequest, CaptionResponse, HashtagRequest, HashtagSuggestions};
pub use analytics::{AnalyticsDashboard, AnalyticsOverview, DailyMetric, PlatformBreakdown, PostPerformance};
pub use best_time::{BestTimeSlot, BestTimes, EngagementAnalysis, Heatmap, HeatmapCell};
pub use bio::{BioLink, BioLinkUpdate, BioPage, BioPageUpdate, ClickAnalytics, ClicksByDay, NewBioLink, NewBioPage, PublicBioLink, PublicBioPage};
pub use bulk::{BulkEntry, BulkPreview, BulkPreviewEntry, BulkResult};
pub use category::{Category, CategoryUpdate, NewCategory, RecyclablePost, RecycleQueueItem};
pub use feed::{FeedGrid, FeedGridItem, ReorderResult};
pub use first_comment::{FirstComment, NewFirstComment};
pub use inbox::{InboxFilter, InboxList, InboxMessage, UnreadCounts};
pub use media::{MediaAsset, MediaList};
pub use post::{NewPost, Post, PostFilter, PostList, PostPlatformStatus};
pub use settings::{PreferencesUpdate, ProfileUpdate, UserPreferences};
pub use strategy::{ContentPillar, PerformanceAnalysis, PostIdea, PostIdeasRequest, Strategy, StrategyQuestionnaire, WeeklySlot};
pub use user::{NewUser, User};
