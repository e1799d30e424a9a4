//! Entry points for birth-chart personalization.
//!
//! Two calls cover every caller:
//!
//! - [`compute_full_chart`] returns the complete record (gates, centers,
//!   type, strategy, authority, profile) or an error.
//! - [`compute_quick_type`] returns type, strategy and description and never
//!   fails; it degrades to [`compute_fallback`] instead.
//!
//! Every call is a pure function of its input. Results are built fresh and
//! nothing is cached, so calls may run concurrently without coordination.
//!
//! # Quick start
//!
//! ```rust
//! use hd_engine::{BirthData, compute_full_chart, compute_quick_type};
//!
//! let birth = BirthData::new(1990, 6, 15, 10, 30).with_location("Hamburg");
//! let quick = compute_quick_type(&birth);
//! println!("{}: {}", quick.hd_type, quick.strategy);
//!
//! let chart = compute_full_chart(&birth).unwrap();
//! println!("{} / {} / {}", chart.hd_type, chart.authority_label, chart.profile);
//! ```

pub mod chart;
pub mod chart_types;
pub mod config;
pub mod error;
pub mod quick;
pub mod session;

pub use chart::{chart_centers, compute_full_chart, compute_full_chart_with, planet_gates};
pub use chart_types::{ChartResult, Channels, PlanetGates, QuickResult, QuickSource};
pub use config::{CenterMode, ChartConfig, DESIGN_OFFSET_DAYS};
pub use error::ChartError;
pub use quick::{
    compute_fallback, compute_fallback_with, compute_quick_type, compute_quick_type_with,
    quick_chart_type, quick_type_at,
};
pub use session::{
    MemorySession, SessionStore, is_calculated, is_type, store_quick_result, stored_type,
};

// Re-export input and classification types so callers only need this crate.
pub use hd_base::{Authority, Center, CenterSet, Gate, HdType, Locale, Profile, TypePalette};
pub use hd_time::{BirthData, BirthInput, ValidationConfig, ValidationError, validate_birth};

/// Validate raw input and compute a full chart in one step.
pub fn validate_and_chart(
    input: &BirthInput,
    validation: &ValidationConfig,
    config: &ChartConfig,
) -> Result<ChartResult, ChartError> {
    let birth = validate_birth(input, validation)?;
    compute_full_chart_with(&birth, config)
}
