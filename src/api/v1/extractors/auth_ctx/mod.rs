/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - Provide the verified request context (AuthCtx) to handlers
 * - HTTP/axum specifics live in core; the type contract lives in types
 */

mod core;
mod types;

pub use core::AuthCtxExtractor;
pub use types::AuthCtx;
