//! Lookup of namespaces, classes and members in the reference tree.
//!
//! The reference root's children are namespaces, a namespace's children are
//! classes (`"<Name> Class"`), and a class's children are categories such as
//! "Methods" or "Properties" whose children are the members (`"name(...)"`).

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ApexDocError, EntityKind, Result};
use crate::matching;
use crate::node::NodeRef;
use crate::path::QueryPath;
use crate::toc::{DocumentTree, Node};

pub const DEFAULT_BASE_URL: &str =
    "https://developer.salesforce.com/docs/atlas.en-us.apexcode.meta/apexcode/";
pub const DEFAULT_REFERENCE_ROOT_ID: &str = "apex_reference";

/// Values the resolver needs from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    pub base_url: String,
    pub reference_root_id: String,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            reference_root_id: DEFAULT_REFERENCE_ROOT_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Class,
    Member,
}

/// Outcome of resolving a whole [`QueryPath`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    pub target: Target,
    pub node: NodeRef<'a>,
}

impl<'a> Resolved<'a> {
    /// The class this result belongs to: the node itself for a class, its
    /// parent for a member.
    pub fn class(&self) -> Option<NodeRef<'a>> {
        match self.target {
            Target::Class => Some(self.node),
            Target::Member => self.node.parent(),
        }
    }
}

pub struct Resolver {
    reference_root: Node,
    settings: ResolverSettings,
}

impl Resolver {
    /// Builds a resolver over `tree`. Fails if the reference root is absent.
    pub fn new(tree: &DocumentTree, settings: ResolverSettings) -> Result<Self> {
        let reference_root = tree
            .find_entry(&settings.reference_root_id)
            .cloned()
            .ok_or_else(|| ApexDocError::MissingReferenceRoot(settings.reference_root_id.clone()))?;

        debug!(
            id = %settings.reference_root_id,
            namespaces = reference_root.children.len(),
            "Found reference root"
        );

        Ok(Self {
            reference_root,
            settings,
        })
    }

    pub fn load(path: &Path, settings: ResolverSettings) -> Result<Self> {
        let tree = DocumentTree::load(path)?;
        Self::new(&tree, settings)
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    pub fn reference_root(&self) -> NodeRef<'_> {
        NodeRef::root(&self.reference_root)
    }

    /// First namespace whose text starts with `name` at a word boundary.
    pub fn namespace(&self, name: &str) -> Option<NodeRef<'_>> {
        self.reference_root()
            .children()
            .find(|ns| matching::starts_with_word(ns.name(), name))
    }

    /// First class named `name` in any namespace, in document order.
    pub fn class(&self, name: &str) -> Option<NodeRef<'_>> {
        self.reference_root()
            .children()
            .find_map(|ns| self.class_in(ns, name))
    }

    pub fn class_in<'a>(&self, namespace: NodeRef<'a>, name: &str) -> Option<NodeRef<'a>> {
        namespace
            .children()
            .find(|cls| matching::is_class_named(cls.name(), name))
    }

    /// First member of `class` whose text starts with `"<name>("`. Overloads
    /// are not distinguished.
    pub fn member<'a>(&self, class: NodeRef<'a>, name: &str) -> Option<NodeRef<'a>> {
        class
            .members()
            .find(|item| matching::is_member_named(item.name(), name))
    }

    /// Display texts of every member of `class`, overloads included.
    pub fn methods<'a>(&self, class: NodeRef<'a>) -> Vec<&'a str> {
        class.members().map(|item| item.name()).collect()
    }

    pub fn absolute_url(&self, node: NodeRef<'_>) -> Result<String> {
        let href = node
            .href()
            .ok_or_else(|| ApexDocError::MalformedLink(node.name().to_string()))?;
        Ok(format!("{}{}", self.settings.base_url, href))
    }

    /// Walks the tree for `path`, checking each step before descending.
    pub fn resolve(&self, path: &QueryPath) -> Result<Resolved<'_>> {
        let resolved = match path {
            QueryPath::Class(class) => Resolved {
                target: Target::Class,
                node: self.require_class(class)?,
            },
            QueryPath::Pair(first, second) => self.resolve_pair(first, second)?,
            QueryPath::Qualified {
                namespace,
                class,
                member,
            } => {
                let ns = self
                    .namespace(namespace)
                    .ok_or_else(|| ApexDocError::not_found(EntityKind::Namespace, namespace))?;
                let cls = self
                    .class_in(ns, class)
                    .ok_or_else(|| ApexDocError::not_found(EntityKind::Class, class))?;
                Resolved {
                    target: Target::Member,
                    node: self.require_member(cls, member)?,
                }
            }
        };

        info!(path = %path, node = resolved.node.name(), "Resolved path");
        Ok(resolved)
    }

    /// `Class.member` first, then `Namespace.Class`.
    fn resolve_pair(&self, first: &str, second: &str) -> Result<Resolved<'_>> {
        let class_member = self.require_class(first).and_then(|cls| self.require_member(cls, second));

        match class_member {
            Ok(node) => Ok(Resolved {
                target: Target::Member,
                node,
            }),
            Err(err) => {
                debug!(error = %err, "No class member match, trying namespace and class");
                let namespaced = self
                    .namespace(first)
                    .and_then(|ns| self.class_in(ns, second));
                match namespaced {
                    Some(node) => Ok(Resolved {
                        target: Target::Class,
                        node,
                    }),
                    None => Err(err),
                }
            }
        }
    }

    fn require_class(&self, name: &str) -> Result<NodeRef<'_>> {
        self.class(name)
            .ok_or_else(|| ApexDocError::not_found(EntityKind::Class, name))
    }

    fn require_member<'a>(&self, class: NodeRef<'a>, name: &str) -> Result<NodeRef<'a>> {
        self.member(class, name)
            .ok_or_else(|| ApexDocError::not_found(EntityKind::Member, name))
    }
}
