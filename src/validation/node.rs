//! Validation node tree
//!
//! Wraps every entity of a document in a node that knows its parent, so that
//! issues can be tagged with a location such as
//! `Metadata(movies) > RecordSet(ratings) > Field(user_id)`.
//!
//! Nodes live in an arena owned by [`NodeTree`]. The parent link is an index
//! into that arena, set once while building and only read to render context.

use crate::models::{Dataset, Distribution, Field, RecordSet, vocab};

/// Index of a node inside its [`NodeTree`]
pub type NodeId = usize;

/// The entity a node wraps
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    Dataset(&'a Dataset),
    Distribution(&'a Distribution),
    RecordSet(&'a RecordSet),
    Field(&'a Field),
}

impl<'a> NodeKind<'a> {
    /// Label used when rendering a location path
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Dataset(_) => "Metadata",
            NodeKind::Distribution(d) if d.kind == vocab::FILE_SET => "FileSet",
            NodeKind::Distribution(_) => "FileObject",
            NodeKind::RecordSet(_) => "RecordSet",
            NodeKind::Field(_) => "Field",
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            NodeKind::Dataset(d) => &d.name,
            NodeKind::Distribution(d) => &d.name,
            NodeKind::RecordSet(r) => &r.name,
            NodeKind::Field(f) => &f.name,
        }
    }

    /// `@id` of the entity; the dataset root has none
    pub fn id(&self) -> &'a str {
        match *self {
            NodeKind::Dataset(_) => "",
            NodeKind::Distribution(d) => &d.id,
            NodeKind::RecordSet(r) => &r.id,
            NodeKind::Field(f) => &f.id,
        }
    }

    /// Identifier cited in messages: the `@id`, or the name when there is none
    pub fn identifier(&self) -> &'a str {
        let id = self.id();
        if id.is_empty() { self.name() } else { id }
    }
}

#[derive(Debug)]
struct Node<'a> {
    kind: NodeKind<'a>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Traversal tree built fresh for one validation pass
#[derive(Debug)]
pub struct NodeTree<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> NodeTree<'a> {
    /// Wrap `dataset` and everything below it.
    ///
    /// Nodes are numbered in depth-first order: the root, its distributions,
    /// then each record set followed by its fields and their sub-fields.
    pub fn build(dataset: &'a Dataset) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        let root = tree.push(NodeKind::Dataset(dataset), None);

        for distribution in &dataset.distribution {
            tree.push(NodeKind::Distribution(distribution), Some(root));
        }
        for record_set in &dataset.record_sets {
            let rs = tree.push(NodeKind::RecordSet(record_set), Some(root));
            tree.push_fields(&record_set.fields, rs);
        }
        tree
    }

    fn push_fields(&mut self, fields: &'a [Field], parent: NodeId) {
        for field in fields {
            let id = self.push(NodeKind::Field(field), Some(parent));
            self.push_fields(&field.sub_fields, id);
        }
    }

    fn push(&mut self, kind: NodeKind<'a>, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent].children.push(id);
        }
        id
    }

    pub fn root(&self) -> NodeRef<'_, 'a> {
        self.node(0)
    }

    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    pub fn node(&self, id: NodeId) -> NodeRef<'_, 'a> {
        assert!(id < self.nodes.len(), "node {} is not part of this tree", id);
        NodeRef { tree: self, id }
    }

    /// All nodes in depth-first order
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_, 'a>> {
        (0..self.nodes.len()).map(move |id| NodeRef { tree: self, id })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Borrowed handle on one node of a [`NodeTree`]
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'t, 'a> {
    tree: &'t NodeTree<'a>,
    id: NodeId,
}

impl<'t, 'a> NodeRef<'t, 'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind<'a> {
        self.tree.nodes[self.id].kind
    }

    pub fn parent(&self) -> Option<NodeRef<'t, 'a>> {
        self.tree.nodes[self.id].parent.map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'t, 'a>> + 't {
        let tree = self.tree;
        tree.nodes[self.id]
            .children
            .iter()
            .map(move |&id| NodeRef { tree, id })
    }

    /// The record set this node belongs to, if any
    pub fn enclosing_record_set(&self) -> Option<&'a RecordSet> {
        let mut current = self.parent();
        while let Some(node) = current {
            if let NodeKind::RecordSet(record_set) = node.kind() {
                return Some(record_set);
            }
            current = node.parent();
        }
        None
    }

    /// Location path from the root down to this node, e.g.
    /// `Metadata(movies) > FileObject(movies.csv)`
    pub fn context(&self) -> String {
        let mut segments = Vec::new();
        let mut current = Some(*self);
        while let Some(node) = current {
            let kind = node.kind();
            segments.push(format!("{}({})", kind.label(), kind.name()));
            current = node.parent();
        }
        segments.reverse();
        segments.join(" > ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Distribution, TypeUnion};

    fn sample() -> Dataset {
        let point = Field::new("point", TypeUnion::single(vocab::data_types::BOUNDING_BOX))
            .with_sub_field(Field::new("x", TypeUnion::single(vocab::data_types::FLOAT)));
        Dataset::new("shapes")
            .with_distribution(Distribution::file_object("shapes.csv", "shapes.csv", "text/csv"))
            .with_distribution(Distribution::file_set("images", "img/", "image/png", "*.png"))
            .with_record_set(RecordSet::new("annotations", vec![point]))
    }

    #[test]
    fn test_depth_first_numbering() {
        let dataset = sample();
        let tree = NodeTree::build(&dataset);

        let labels: Vec<&str> = tree.iter().map(|n| n.kind().label()).collect();
        assert_eq!(
            labels,
            vec!["Metadata", "FileObject", "FileSet", "RecordSet", "Field", "Field"]
        );
        assert_eq!(tree.root().children().count(), 3);
    }

    #[test]
    fn test_context_paths() {
        let dataset = sample();
        let tree = NodeTree::build(&dataset);

        assert_eq!(tree.root().context(), "Metadata(shapes)");
        assert_eq!(tree.node(1).context(), "Metadata(shapes) > FileObject(shapes.csv)");
        assert_eq!(tree.node(2).context(), "Metadata(shapes) > FileSet(images)");
        assert_eq!(
            tree.node(5).context(),
            "Metadata(shapes) > RecordSet(annotations) > Field(point) > Field(x)"
        );
    }

    #[test]
    fn test_empty_name_renders_empty_parens() {
        let dataset = Dataset::new("");
        let tree = NodeTree::build(&dataset);
        assert_eq!(tree.root().context(), "Metadata()");
        assert!(tree.root().parent().is_none());
    }

    #[test]
    fn test_enclosing_record_set() {
        let dataset = sample();
        let tree = NodeTree::build(&dataset);
        let sub_field = tree.node(5);
        assert_eq!(
            sub_field.enclosing_record_set().map(|rs| rs.name.as_str()),
            Some("annotations")
        );
        assert!(tree.node(1).enclosing_record_set().is_none());
    }

    #[test]
    fn test_identifier_falls_back_to_name() {
        let mut field = Field::new("label", TypeUnion::new());
        field.id.clear();
        assert_eq!(NodeKind::Field(&field).identifier(), "label");
        assert_eq!(NodeKind::Field(&field.clone().with_id("rs/label")).identifier(), "rs/label");
    }
}
