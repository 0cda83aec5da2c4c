/*!
 * Typed content model.
 *
 * - `block`: the `Block` sum type and its factory helpers
 * - `section`: `Section`, a group of blocks with order and activity flag
 * - `page`: `PageDoc`, one localized page
 * - `ordering`: the active-then-ordered reduction applied before rendering
 * - `configs`: domain page configs with hardcoded defaults
 */

pub mod block;
pub mod ordering;
pub mod section;
pub mod page;
pub mod configs;

pub use block::{heading, image, ordered_list, paragraph, unordered_list, Block};
pub use ordering::{active_in_order, Orderable};
pub use page::{Alternate, PageDoc};
pub use section::{active_sections, Section};
