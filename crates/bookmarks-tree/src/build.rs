//! Tree Builder
//!
//! Links flat records into one tree by title. Records are grouped by
//! `parent_title` once, then a single depth-first walk from the root places
//! each group under the node whose title it names.
//!
//! Titles are not unique, so linkage is first-match-wins: the first placed
//! node carrying a title owns it, and later records with that title are
//! folded into it. Internally every record keeps its `RecordId`, so the
//! strict mode can reject those collisions instead.

use std::collections::HashMap;

use crate::{BookmarkNode, BuildConfig, FlatCollection, RecordId};

/// Tree assembly failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("Root folder not found")]
    RootNotFound,

    #[error("Found {} root folder candidates: {titles:?}", .titles.len())]
    AmbiguousRoot { titles: Vec<String> },

    #[error("Cycle detected: folder {title:?} under {parent:?} is its own ancestor")]
    CycleDetected { title: String, parent: String },

    #[error("Duplicate folder title: {title:?}")]
    DuplicateTitle { title: String },
}

/// What happened to each flat record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Records that became tree nodes, in placement order
    pub placed: Vec<RecordId>,
    /// Records folded into an earlier node with the same title
    pub merged: Vec<RecordId>,
    /// Records whose parent title never appeared in the tree
    pub unreachable: Vec<RecordId>,
    /// Root candidates after the first one
    pub extra_roots: Vec<RecordId>,
}

/// Result of a successful build
#[derive(Debug, Clone)]
pub struct BuiltTree {
    pub root: BookmarkNode,
    pub report: BuildReport,
}

/// Flat collection to tree
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    config: BuildConfig,
}

impl TreeBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, records: FlatCollection) -> Result<BuiltTree, BuildError> {
        let candidates = records.root_candidates();
        let (&root, extra) = candidates.split_first().ok_or(BuildError::RootNotFound)?;

        if !extra.is_empty() {
            let titles: Vec<String> = candidates
                .iter()
                .filter_map(|&id| records.get(id))
                .map(|record| record.title.clone())
                .collect();
            if self.config.strict {
                return Err(BuildError::AmbiguousRoot { titles });
            }
            tracing::warn!(
                "{} root folder candidates {:?}, using the first",
                titles.len(),
                titles
            );
        }

        let mut by_parent: HashMap<String, Vec<RecordId>> = HashMap::new();
        for (id, record) in records.iter() {
            if !record.is_root_candidate() {
                by_parent
                    .entry(record.parent_title.clone())
                    .or_default()
                    .push(id);
            }
        }

        let mut assembly = Assembly {
            strict: self.config.strict,
            by_parent,
            pending: records.into_records().into_iter().map(Some).collect(),
            slots: Vec::new(),
            owners: HashMap::new(),
            path: Vec::new(),
            report: BuildReport {
                extra_roots: extra.to_vec(),
                ..BuildReport::default()
            },
        };

        let root_slot = assembly.place(root);
        assembly.expand(root_slot)?;
        Ok(assembly.finish(root_slot))
    }
}

/// Build with default options, degrading to an empty node on failure
///
/// Callers must treat an empty result (see [`BookmarkNode::is_empty`]) as
/// "nothing could be assembled".
pub fn build_tree(records: FlatCollection) -> BookmarkNode {
    match TreeBuilder::default().build(records) {
        Ok(built) => built.root,
        Err(err) => {
            tracing::error!("{}", err);
            BookmarkNode::default()
        }
    }
}

enum Child {
    Link(BookmarkNode),
    Folder(usize),
}

/// A placed folder; nested folders are arena indices until the end
struct Slot {
    node: BookmarkNode,
    children: Vec<Child>,
}

struct Assembly {
    strict: bool,
    by_parent: HashMap<String, Vec<RecordId>>,
    /// Records not yet placed or merged
    pending: Vec<Option<BookmarkNode>>,
    slots: Vec<Slot>,
    /// Title -> slot of the first node placed with it
    owners: HashMap<String, usize>,
    /// Titles of the folders currently being expanded, root first
    path: Vec<String>,
    report: BuildReport,
}

impl Assembly {
    fn take(&mut self, id: RecordId) -> BookmarkNode {
        self.pending[id.index()].take().unwrap_or_default()
    }

    fn place(&mut self, id: RecordId) -> usize {
        let mut node = self.take(id);
        node.parent_title.clear();
        let children = std::mem::take(&mut node.children)
            .into_iter()
            .map(Child::Link)
            .collect();

        let slot = self.slots.len();
        self.owners.entry(node.title.clone()).or_insert(slot);
        self.slots.push(Slot { node, children });
        self.report.placed.push(id);
        slot
    }

    fn expand(&mut self, slot: usize) -> Result<(), BuildError> {
        let title = self.slots[slot].node.title.clone();
        let Some(ids) = self.by_parent.get(&title).cloned() else {
            return Ok(());
        };

        self.path.push(title);
        for id in ids {
            let Some(record) = self.pending[id.index()].as_ref() else {
                continue;
            };

            if self.path.contains(&record.title) {
                return Err(BuildError::CycleDetected {
                    title: record.title.clone(),
                    parent: record.parent_title.clone(),
                });
            }

            if let Some(&owner) = self.owners.get(&record.title) {
                if self.strict {
                    return Err(BuildError::DuplicateTitle {
                        title: record.title.clone(),
                    });
                }
                tracing::debug!("Merging duplicate folder {:?} into first match", record.title);
                let merged = self.take(id);
                self.slots[owner]
                    .children
                    .extend(merged.children.into_iter().map(Child::Link));
                self.report.merged.push(id);
                continue;
            }

            let child = self.place(id);
            self.slots[slot].children.push(Child::Folder(child));
            self.expand(child)?;
        }
        self.path.pop();

        Ok(())
    }

    fn finish(mut self, root_slot: usize) -> BuiltTree {
        let extra: Vec<_> = self.report.extra_roots.clone();
        self.report.unreachable = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, record)| record.is_some())
            .map(|(i, _)| RecordId(i as u32))
            .filter(|id| !extra.contains(id))
            .collect();

        if !self.report.unreachable.is_empty() {
            let titles: Vec<_> = self
                .report
                .unreachable
                .iter()
                .filter_map(|id| self.pending[id.index()].as_ref())
                .map(|record| format!("{:?} (parent {:?})", record.title, record.parent_title))
                .collect();
            tracing::warn!(
                "Dropped {} unreachable folder records: {}",
                titles.len(),
                titles.join(", ")
            );
        }
        if !self.report.merged.is_empty() {
            tracing::warn!(
                "Merged {} folder records into earlier folders with the same title",
                self.report.merged.len()
            );
        }

        tracing::debug!("Placed {} folders", self.report.placed.len());

        let root = materialize(&mut self.slots, root_slot);
        BuiltTree {
            root,
            report: self.report,
        }
    }
}

fn materialize(slots: &mut [Slot], slot: usize) -> BookmarkNode {
    let mut node = std::mem::take(&mut slots[slot].node);
    let children = std::mem::take(&mut slots[slot].children);
    node.children = children
        .into_iter()
        .map(|child| match child {
            Child::Link(link) => link,
            Child::Folder(folder) => materialize(slots, folder),
        })
        .collect();
    node
}
