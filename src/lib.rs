//! SpaceX launch records dashboard.
//!
//! Loads a launch table once, then keeps a pie chart of launch outcomes and a
//! payload/outcome scatter plot in sync with a site dropdown and a payload
//! range control.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;

pub use data::aggregate::{OutcomeAggregate, aggregate};
pub use data::filter::{filter_rows, filtered_indices};
pub use data::model::{LaunchRecord, LaunchTable, OutcomeClass, PayloadRange, SiteSelection};
