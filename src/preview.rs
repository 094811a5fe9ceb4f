use crate::tree::Tree;
use colored::Colorize;
use std::fmt::Write;
use std::path::Path;

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<TreeNode>,
    is_file: bool,
}
impl TreeNode {
    fn dir(name: &str) -> Self {
        Self {
            name: name.to_string(),
            children: Vec::new(),
            is_file: false,
        }
    }

    fn file(name: &str) -> Self {
        Self {
            name: name.to_string(),
            children: Vec::new(),
            is_file: true,
        }
    }
}

/// Build the node tree for `tree`, rooted at the `destination` directory.
fn build_nodes(tree: &Tree, destination: &Path) -> TreeNode {
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let mut root = TreeNode::dir(&root_name);

    for (folder, subtree) in tree.folders() {
        let mut folder_node = TreeNode::dir(folder);

        for (subfolder, files) in subtree.entries() {
            let leaves = files.iter().map(|file| TreeNode::file(file));

            // files of the empty subfolder hang off the folder itself
            if subfolder.is_empty() {
                folder_node.children.extend(leaves);
            } else {
                let mut subfolder_node = TreeNode::dir(subfolder);
                subfolder_node.children.extend(leaves);
                folder_node.children.push(subfolder_node);
            }
        }

        root.children.push(folder_node);
    }

    root
}

fn write_node(out: &mut String, node: &TreeNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    let name = if node.is_file {
        node.name.green()
    } else {
        node.name.blue()
    };
    let _ = writeln!(out, "{}{}{}", prefix.yellow(), connector.yellow(), name);

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        write_node(out, child, &child_prefix, i == len - 1);
    }
}

/// Renders `tree` as an ASCII diagram whose root is `destination`.
pub fn render_tree(tree: &Tree, destination: &Path) -> String {
    let root = build_nodes(tree, destination);

    let mut out = String::new();
    write_node(&mut out, &root, "", true);

    out
}

pub fn preview_as_tree(tree: &Tree, destination: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    print!("{}", render_tree(tree, destination));

    let fancy_prompt = format!(
        "\n{} {} folder(s), {} file(s), nothing written\n",
        "└─".bold().bright_blue(),
        tree.len(),
        tree.file_count()
    );

    println!("{}", fancy_prompt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Subtree;

    #[test]
    fn renders_subfolders_then_root_files() {
        colored::control::set_override(false);

        let tree = Tree::new().folder(
            "backend",
            Subtree::new()
                .files("controllers", ["authController.js", "productController.js"])
                .files("", ["server.js"]),
        );

        let rendered = render_tree(&tree, Path::new("shop"));

        let expected = "\
└── shop
    └── backend
        ├── controllers
        │   ├── authController.js
        │   └── productController.js
        └── server.js
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn current_dir_root_keeps_its_display_name() {
        colored::control::set_override(false);

        let rendered = render_tree(&Tree::new(), Path::new("."));

        assert_eq!(rendered, "└── .\n");
    }
}
