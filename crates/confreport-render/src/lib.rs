//! Docket table rendering: records → rows of cells → HTML, driven by a page
//! controller that owns the table.

pub mod cell;
pub mod config;
mod error;
pub mod html;
pub mod page;
pub mod table;
pub mod transform;

pub use cell::{Cell, CellContent, Column, DocketRow, Icon};
pub use config::RenderConfig;
pub use error::PageError;
pub use page::{LoadState, Outcome, PageState, ReportController};
pub use table::DocketTable;
pub use transform::{RejectedRecord, RenderOutcome, docket_row, render_rows};
