//! Capability algebras for notion2blocknote.
//!
//! This module defines traits that represent **capabilities**, not
//! implementations. Each trait is:
//!
//! - **Object-safe**: usable as `dyn Trait`
//! - **Documented with laws**: properties all implementations must satisfy
//! - **Async via `async_trait`**
//!
//! # Architecture
//!
//! ```text
//! Application Layer (main.rs)
//!         ↓
//! Conversion Layer (conversion/)
//!         ↓
//! Capability Layer (algebras/)
//!         ↓
//! Interpreter Layer (api/)
//! ```

pub mod content;
pub mod error;

// Re-exports for convenience
pub use content::NotionContent;
pub use error::FetchError;
