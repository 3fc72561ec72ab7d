use itertools::Itertools;
use tracing::{debug, instrument};

use crate::arena::OrgChart;
use crate::cli::args::{Cli, Commands, Order};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::tree_traits::Traversal;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo) | None => _demo(),
        Some(Commands::Show {
            root,
            edges,
            order,
            tree,
        }) => _show(root, edges, *order, *tree),
    }
}

/// Builds a chart from a root label and `PARENT:CHILD` edges, applied in order.
#[instrument(level = "debug")]
pub fn build_chart(root: &str, edges: &[String]) -> CliResult<OrgChart> {
    let mut chart = OrgChart::new();
    chart.set_root(root);
    for edge in edges {
        let (parent, child) = parse_edge(edge)?;
        chart.add_child(parent, child)?;
    }
    debug!("Built chart with {} nodes", chart.len());
    Ok(chart)
}

fn parse_edge(edge: &str) -> CliResult<(&str, &str)> {
    match edge.split_once(':') {
        Some((parent, child)) if !parent.is_empty() && !child.is_empty() => Ok((parent, child)),
        _ => Err(CliError::InvalidArgs(format!(
            "expected PARENT:CHILD, got '{}'",
            edge
        ))),
    }
}

fn traversal_line(chart: &OrgChart, order: Order) -> String {
    match order {
        Order::Level => chart.iter_level_order().join(" "),
        Order::Pre => chart.iter_preorder().join(" "),
        Order::Reverse => chart.iter_reverse_order().join(" "),
    }
}

#[instrument]
fn _show(root: &str, edges: &[String], order: Order, tree: bool) -> CliResult<()> {
    let chart = build_chart(root, edges)?;
    if tree {
        output::info(&chart);
    }
    output::info(&traversal_line(&chart, order));
    Ok(())
}

#[instrument]
fn _demo() -> CliResult<()> {
    output::header("Constructing an organization and iterating with all iterators");
    let mut chart = OrgChart::new();
    chart
        .set_root("CEO")
        .add_child("CEO", "CTO")?
        .add_child("CEO", "CFO")?
        .add_child("CEO", "COO")?
        .add_child("CTO", "VP_SW")?
        .add_child("COO", "VP_BI")?;
    output::info(&chart);
    output::action("Level order", &traversal_line(&chart, Order::Level));
    output::action("Pre-order", &traversal_line(&chart, Order::Pre));
    output::action("Reverse order", &traversal_line(&chart, Order::Reverse));

    output::header("Example 1 - length of each label using for_each");
    let mut lengths = Vec::new();
    chart.iter().for_each(|label| lengths.push(label.len()));
    output::info(&lengths.iter().join(" "));

    output::header("Example 2 - level order as lower case using transform");
    let cursor = chart.begin();
    chart.transform(cursor, str::to_lowercase);
    output::info(&traversal_line(&chart, Order::Level));

    output::header("Example 3 - replace cto with full title using replace");
    let (current_title, new_title) = ("cto", "Chief Technology Officer");
    output::info(&format!("Replace '{}' with '{}'", current_title, new_title));
    output::info("Before:");
    output::info(&chart);
    let cursor = chart.begin();
    let replaced = chart.replace(cursor, current_title, new_title);
    output::info(&format!("After ({} replaced):", replaced));
    output::info(&chart);

    output::header("Example 4 - cursors do not collide when traversing simultaneously");
    let mut preorder = chart.begin_preorder();
    let mut level_order = chart.begin_level_order();
    let mut loc = 1;
    while preorder != chart.end_preorder() && level_order != chart.end_level_order() {
        output::info(&format!("Item in loc {}:", loc));
        output::detail(&format!("Preorder: {}", preorder.get(&chart).unwrap_or_default()));
        output::detail(&format!(
            "Level Order: {}",
            level_order.get(&chart).unwrap_or_default()
        ));
        preorder.advance();
        level_order.advance();
        loc += 1;
    }

    output::header("Example 5 - Copying and Moving");
    let mut copy = chart.clone();
    output::action("org", &chart);
    output::action("copy", &copy);
    copy.add_child("ceo", "new sub")?;
    output::info("After adding 'new sub' to copy");
    output::action("org", &chart);
    output::action("copy", &copy);
    let moved = chart.take();
    output::info("After moving 'org' to 'move'");
    output::action("org", &chart);
    output::action("copy", &copy);
    output::action("move", &moved);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChartError;

    fn edges(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_build_chart_applies_edges_in_order() {
        let chart = build_chart("CEO", &edges(&["CEO:CTO", "CEO:CFO", "CTO:VP_SW"])).unwrap();
        assert_eq!(traversal_line(&chart, Order::Level), "CEO CTO CFO VP_SW");
        assert_eq!(traversal_line(&chart, Order::Pre), "CEO CTO VP_SW CFO");
        assert_eq!(traversal_line(&chart, Order::Reverse), "VP_SW CTO CFO CEO");
    }

    #[test]
    fn test_build_chart_rejects_malformed_edge() {
        let result = build_chart("CEO", &edges(&["CEO-CTO"]));
        assert!(matches!(result, Err(CliError::InvalidArgs(_))));
        let result = build_chart("CEO", &edges(&[":CTO"]));
        assert!(matches!(result, Err(CliError::InvalidArgs(_))));
    }

    #[test]
    fn test_build_chart_unknown_parent() {
        let result = build_chart("CEO", &edges(&["CFO:Controller"]));
        assert!(matches!(
            result,
            Err(CliError::Chart(ChartError::NotFound(ref label))) if label == "CFO"
        ));
    }

    #[test]
    fn test_demo_runs() {
        _demo().unwrap();
    }
}
