//! Production-friendly observability hooks for assistant turns.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pobserve::{
//!     CompositeAssistantHooks, MetricsAssistantHooks, SafeAssistantHooks, TracingAssistantHooks,
//! };
//!
//! let hooks = CompositeAssistantHooks::new()
//!     .with(Arc::new(SafeAssistantHooks::new(TracingAssistantHooks)))
//!     .with(Arc::new(SafeAssistantHooks::new(MetricsAssistantHooks)));
//! assert_eq!(hooks.len(), 2);
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsAssistantHooks;
pub use safe_hooks::{CompositeAssistantHooks, SafeAssistantHooks};
pub use tracing_hooks::TracingAssistantHooks;

pub mod prelude {
    pub use crate::{
        CompositeAssistantHooks, MetricsAssistantHooks, SafeAssistantHooks, TracingAssistantHooks,
    };
}
