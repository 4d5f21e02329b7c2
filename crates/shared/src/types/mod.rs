//! Common value types used across the workspace.

pub mod context;
pub mod locale;
pub mod money;
pub mod number;

pub use context::{MonetaryContext, RoundingMode};
pub use locale::Locale;
pub use money::Currency;
pub use number::IntoDecimal;
