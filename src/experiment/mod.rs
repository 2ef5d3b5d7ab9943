//! Experiment data model
//!
//! The showcase has a single entity, the [`Experiment`] record, grouped into
//! ordered [`ExperimentCatalog`]s.
//!
//! ## Schema Overview
//!
//! ```text
//! Experiment
//!   ├── Hypothesis      (reason, change, expectation)
//!   ├── Ownership       (business unit, owners)       wire: metadata
//!   ├── AnalysisConfig  (decision/guardrail metrics)   wire: analysis_configuration
//!   └── EndState        (win | loss | inconclusive)    wire: experiment_end_state
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use experiment_showcase::experiment::{Experiment, ExperimentResult, ExperimentStatus};
//!
//! let experiment = Experiment::builder("cart_abandon_leadgen_intl")
//!     .name("Cart Abandon Lead Gen - International")
//!     .ownership("CMO", ["mxdoty"])
//!     .result(ExperimentResult::Win)
//!     .kind("A/B")
//!     .build()?;
//!
//! assert_eq!(experiment.status(), ExperimentStatus::Win);
//! assert_eq!(experiment.votes(), 0);
//! # Ok::<(), experiment_showcase::Error>(())
//! ```

mod catalog;
mod experiment_record;
mod vocab;
mod wire;

pub use catalog::{business_units, ExperimentCatalog};
pub use experiment_record::{
    AnalysisConfig, EndState, Experiment, ExperimentBuilder, Hypothesis, Ownership,
};
pub use vocab::{ExperimentKind, ExperimentResult, ExperimentStatus, MetricRole};
