/*!
 * # clinic-content
 *
 * Content client for a clinic marketing website.
 *
 * ## Features
 *
 * - Fetch localized page documents from the content API
 * - Fetch contact, map, treatments and IVF/ICSI page configs, with built-in
 *   defaults when the API has nothing
 * - Typed content blocks with forward-compatible handling of unknown types
 * - Bundled UI translations with locale and key fallbacks
 * - Render documents to semantic HTML fragments
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `content`: Page, section, block and domain config types
 * - `api`: Content API client and the absent-on-failure fetch operations
 * - `i18n`: UI string lookup
 * - `render`: HTML fragment rendering
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod app_config;
pub mod content;
pub mod api;
pub mod i18n;
pub mod render;
pub mod app_controller;
pub mod errors;

pub use app_config::Config;
pub use content::{Block, PageDoc, Section};
pub use api::{fetch_page, ApiClient, ContentSource};
pub use i18n::lookup;
pub use errors::{AppError, FetchError};
