//! Application controller subsystem.
//!
//! # Data Flow
//! ```text
//! CLI / renderer
//!     → app.rs (workflows: browse, mint, view switches)
//!     → gateway (news backend) + wallet session (ledger)
//!     → state.rs (views, pagination, per-article minting state)
//! ```

pub mod app;
pub mod state;

pub use app::AppController;
pub use state::{ControllerError, MintingOperation, PaginationState, View};
