//! PLIST renderer
//!
//!     Renders a built tree as an Apple property-list XML document. Every element goes on its
//!     own line, without indentation:
//!
//!         <?xml version="1.0" encoding="UTF-8"?>
//!         <!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
//!         <plist version="1.0">
//!         <dict>
//!         <key>name</key>
//!         <string>test</string>
//!         </dict>
//!         </plist>
//!
//!     Mapping keys come out in first-assignment order, sequence items in append order. A
//!     composite that never received a write renders as an empty `<dict>`. Text is written as
//!     is: reserved XML characters are not escaped.
//!
//!     Rendering never mutates the tree, so rendering the same tree twice gives identical output.

use crate::y2p::ast::{Composite, ConvertError, Node, NodeId, Tree};

pub const PLIST_HEADER: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
    "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" ",
    "\"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
    "<plist version=\"1.0\">"
);

pub const PLIST_FOOTER: &str = "</plist>";

/// Render the whole document, envelope included. The result has no trailing newline.
pub fn render_plist(tree: &Tree) -> Result<String, ConvertError> {
    let body = render_node(tree, tree.root())?;
    Ok(format!("{}\n{}\n{}", PLIST_HEADER, body, PLIST_FOOTER))
}

/// Render a single node and its descendants
pub fn render_node(tree: &Tree, id: NodeId) -> Result<String, ConvertError> {
    let mut writer = PlistWriter::new(tree);
    writer.write_node(id)?;
    Ok(writer.lines.join("\n"))
}

struct PlistWriter<'a> {
    tree: &'a Tree,
    lines: Vec<String>,
    /// Shared slots currently being rendered, innermost last
    active: Vec<NodeId>,
}

impl<'a> PlistWriter<'a> {
    fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            lines: Vec::new(),
            active: Vec::new(),
        }
    }

    fn write_node(&mut self, id: NodeId) -> Result<(), ConvertError> {
        let tree = self.tree;
        match tree.get(id) {
            Node::String(text) => self.lines.push(format!("<string>{}</string>", text)),
            Node::Composite(composite) => self.write_composite(composite)?,
            Node::Shared(shared) => {
                if self.active.contains(&shared.slot) {
                    return Err(ConvertError::ReferenceCycle {
                        identifier: shared.identifier.clone(),
                    });
                }
                self.active.push(shared.slot);
                self.write_node(shared.slot)?;
                self.active.pop();
            }
        }
        Ok(())
    }

    fn write_composite(&mut self, composite: &'a Composite) -> Result<(), ConvertError> {
        match composite {
            Composite::Sequence(items) => {
                self.lines.push("<array>".to_string());
                for item in items {
                    self.write_node(*item)?;
                }
                self.lines.push("</array>".to_string());
            }
            Composite::Mapping(entries) => {
                self.lines.push("<dict>".to_string());
                for (key, value) in entries {
                    self.lines.push(format!("<key>{}</key>", key));
                    self.write_node(*value)?;
                }
                self.lines.push("</dict>".to_string());
            }
            Composite::Empty => {
                self.lines.push("<dict>".to_string());
                self.lines.push("</dict>".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_root_renders_empty_dict() {
        let tree = Tree::new();
        let output = render_plist(&tree).unwrap();
        assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(output.ends_with("<plist version=\"1.0\">\n<dict>\n</dict>\n</plist>"));
    }

    #[test]
    fn test_text_is_not_escaped() {
        let mut tree = Tree::new();
        let root = tree.root();
        let leaf = tree.new_string_leaf("a < b & c");
        tree.assign(root, "expr", leaf).unwrap();

        assert_eq!(
            render_node(&tree, root).unwrap(),
            "<dict>\n<key>expr</key>\n<string>a < b & c</string>\n</dict>"
        );
    }

    #[test]
    fn test_shared_node_renders_its_slot() {
        let mut tree = Tree::new();
        let anchor = tree.resolve_shared_ref("a");
        let leaf = tree.new_string_leaf("1");
        tree.append(anchor, leaf).unwrap();
        let alias = tree.resolve_shared_ref("a");

        assert_eq!(
            render_node(&tree, alias).unwrap(),
            "<array>\n<string>1</string>\n</array>"
        );
    }

    #[test]
    fn test_self_containing_shared_node_is_rejected() {
        let mut tree = Tree::new();
        let anchor = tree.resolve_shared_ref("loop");
        let alias = tree.resolve_shared_ref("loop");
        tree.append(anchor, alias).unwrap();

        assert_eq!(
            render_node(&tree, anchor),
            Err(ConvertError::ReferenceCycle {
                identifier: "loop".to_string()
            })
        );
    }

    #[test]
    fn test_same_shared_slot_twice_is_not_a_cycle() {
        let mut tree = Tree::new();
        let root = tree.root();
        let first = tree.resolve_shared_ref("a");
        let second = tree.resolve_shared_ref("a");
        tree.assign(root, "first", first).unwrap();
        tree.assign(root, "second", second).unwrap();

        assert_eq!(
            render_node(&tree, root).unwrap(),
            "<dict>\n<key>first</key>\n<dict>\n</dict>\n<key>second</key>\n<dict>\n</dict>\n</dict>"
        );
    }
}
