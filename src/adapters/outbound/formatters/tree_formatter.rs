use crate::ports::outbound::ViewFormatter;
use crate::resource_graph::domain::{EdgeType, Node, NodeKey, NodeStatus, ViewGraph};
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::collections::HashSet;
use std::fmt::Write;

/// TreeFormatter adapter rendering the view as an indented ownership tree
///
/// The tree starts at the selected node and follows outgoing edges in the
/// order they were added. A node reached a second time (a cycle or a shared
/// child) is printed once more as a back-reference without its subtree.
/// Implicit edges are drawn with a dashed connector.
pub struct TreeFormatter {
    colored: bool,
}

impl TreeFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn status_label(&self, status: NodeStatus) -> String {
        let label = format!("[{}]", status);
        if !self.colored {
            return label;
        }
        match status {
            NodeStatus::Ok => label.green().to_string(),
            NodeStatus::Warning => label.yellow().to_string(),
            NodeStatus::Error => label.red().bold().to_string(),
            NodeStatus::Unknown => label.dimmed().to_string(),
        }
    }

    fn node_line(&self, node: &Node) -> String {
        let title = format!("{} {}", node.kind, node.name);
        let title = if self.colored {
            title.bold().to_string()
        } else {
            title
        };
        format!("{} {} {}", title, self.status_label(node.status), node.detail)
    }

    fn write_children(
        &self,
        out: &mut String,
        view: &ViewGraph,
        parent: &NodeKey,
        prefix: &str,
        visited: &mut HashSet<NodeKey>,
    ) -> std::fmt::Result {
        let edges: Vec<_> = view.edges_from(parent).collect();
        for (index, edge) in edges.iter().enumerate() {
            let last = index + 1 == edges.len();
            let branch = match (last, edge.edge_type) {
                (false, EdgeType::Explicit) => "├── ",
                (true, EdgeType::Explicit) => "└── ",
                (false, EdgeType::Implicit) => "├╌╌ ",
                (true, EdgeType::Implicit) => "└╌╌ ",
            };
            let Some(child) = view.nodes().get(&edge.target) else {
                continue;
            };

            if !visited.insert(edge.target.clone()) {
                writeln!(out, "{}{}↺ {} {}", prefix, branch, child.kind, child.name)?;
                continue;
            }

            writeln!(out, "{}{}{}", prefix, branch, self.node_line(child))?;
            let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
            self.write_children(out, view, &edge.target, &child_prefix, visited)?;
        }
        Ok(())
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ViewFormatter for TreeFormatter {
    fn format(&self, view: &ViewGraph) -> Result<String> {
        let mut out = String::new();
        let root = view.selected();
        let Some(root_node) = view.nodes().get(root) else {
            out.push_str("(empty view)\n");
            return Ok(out);
        };

        writeln!(out, "{}", self.node_line(root_node))?;
        let mut visited = HashSet::from([root.clone()]);
        self.write_children(&mut out, view, root, "", &mut visited)?;
        Ok(out)
    }
}
