//! Vision AI client used to describe dish photos.
//!
//! This module provides:
//! - `AiClient` trait for abstracting AI providers
//! - `CachingAiClient`, an OpenRouter client with disk-based caching
//! - `FakeAiClient` for tests
//! - Configuration via environment variables
//! - `describe_dish`, which turns a photo into a [`DishDescription`]
//!
//! # Configuration
//!
//! - `OPENROUTER_API_KEY` (required): Your OpenRouter API key
//! - `DISHPRINT_AI_MODEL` (optional): Model name, must accept images
//! - `DISHPRINT_AI_BASE_URL` (optional): API base URL
//! - `DISHPRINT_AI_CACHE_DIR` (optional): Cache directory path
//! - `DISHPRINT_AI_OFFLINE` (optional): Set to "true" to use cache only
//! - `DISHPRINT_AI_RATE_LIMIT_MS` (optional): Delay between requests in ms
//!
//! [`DishDescription`]: crate::types::DishDescription

mod cache;
mod client;
mod config;
mod describe;
mod fake;
pub mod prompts;
mod types;

pub use cache::{AiCache, CacheKey, CachedAiResponse};
pub use client::{AiClient, AiError, CachingAiClient};
pub use config::{AiConfig, ConfigError};
pub use describe::{describe_dish, DescribeResult};
pub use fake::FakeAiClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse, ImageData, Role, Usage};
