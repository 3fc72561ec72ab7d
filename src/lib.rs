//! Organization chart tree with independent traversal cursors.
//!
//! ```
//! use orgchart::OrgChart;
//!
//! let mut chart = OrgChart::new();
//! chart
//!     .set_root("CEO")
//!     .add_child("CEO", "CTO")?
//!     .add_child("CEO", "CFO")?
//!     .add_child("CTO", "VP_SW")?;
//!
//! let levels: Vec<&str> = chart.iter().collect();
//! assert_eq!(levels, ["CEO", "CTO", "CFO", "VP_SW"]);
//! # Ok::<(), orgchart::ChartError>(())
//! ```

pub mod arena;
pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod tree_queue;
pub mod tree_stack;
pub mod tree_traits;
pub mod util;

pub use arena::{Node, OrgChart};
pub use errors::{ChartError, ChartResult};
pub use tree_queue::{LevelOrder, ReverseOrder};
pub use tree_stack::PreOrder;
pub use tree_traits::{Labels, Traversal, TreeNodeConvert};
