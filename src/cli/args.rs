//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Organization chart walkthrough: construction, traversal orders, algorithms, copy and move
#[derive(Parser, Debug)]
#[command(name = "orgchart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full walkthrough (default)
    Demo,

    /// Build a chart from edges and print one traversal
    Show {
        /// Root label
        root: String,

        /// Subordinate edge as PARENT:CHILD, applied in the given order
        #[arg(short, long = "edge", value_name = "PARENT:CHILD")]
        edges: Vec<String>,

        /// Traversal order
        #[arg(short, long, value_enum, default_value_t = Order::Level)]
        order: Order,

        /// Also print the chart as a tree
        #[arg(short, long)]
        tree: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Breadth first, root first
    Level,
    /// Depth first, node before its subordinates
    Pre,
    /// Deepest level first, root last
    Reverse,
}
