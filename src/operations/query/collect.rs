use geo::Geometry;

use crate::geometry::{
    Diagnostics, GeomCollection, GeomMap, GeomNode, GeomTree, GeometryKind, Reported, Warning,
};

/// Root path used when walking a design's top-level collection.
pub const DEFAULT_ROOT_NAME: &str = "components";

/// Resolves `node` into a geometry tree.
///
/// Components are replaced by their own geometry mapping, shapes are kept as
/// leaves, and nested entries are resolved recursively. `root_name` is the
/// dotted path of `node`; children extend it as `root_name.name`, or just
/// `name` when `root_name` is empty. Components that produce no geometry are
/// dropped and reported as warnings.
#[must_use]
pub fn get_all_geoms(node: &GeomNode, root_name: &str) -> Reported<Option<GeomTree>> {
    let mut diag = Diagnostics::default();
    let tree = resolve_node(node, root_name, &mut diag);
    diag.finish(tree)
}

/// Flattens a geometry mapping into its leaves, depth first in name order.
///
/// With `filter` set, leaves of any other kind are skipped and reported.
#[must_use]
pub fn flatten_all_filter(
    geoms: &GeomMap,
    filter: Option<GeometryKind>,
) -> Reported<Vec<Geometry<f64>>> {
    let mut diag = Diagnostics::default();
    let mut out = Vec::new();
    flatten_into(geoms, "", filter, &mut out, &mut diag);
    diag.finish(out)
}

pub(super) fn resolve_collection(
    entries: &GeomCollection,
    root_name: &str,
    diag: &mut Diagnostics,
) -> GeomMap {
    entries
        .iter()
        .filter_map(|(name, sub)| {
            resolve_node(sub, &child_path(root_name, name), diag).map(|tree| (name.clone(), tree))
        })
        .collect()
}

fn resolve_node(node: &GeomNode, path: &str, diag: &mut Diagnostics) -> Option<GeomTree> {
    match node {
        GeomNode::Component(source) => {
            if let Some(map) = source.get_all_geom() {
                Some(GeomTree::Map(map))
            } else {
                let path = if path.is_empty() { source.name() } else { path };
                diag.report(Warning::MissingGeometry {
                    path: path.to_string(),
                });
                None
            }
        }
        GeomNode::Terminal(geometry) => Some(GeomTree::Leaf(geometry.clone())),
        GeomNode::Nested(entries) => Some(GeomTree::Map(resolve_collection(entries, path, diag))),
    }
}

pub(super) fn flatten_into(
    geoms: &GeomMap,
    prefix: &str,
    filter: Option<GeometryKind>,
    out: &mut Vec<Geometry<f64>>,
    diag: &mut Diagnostics,
) {
    for (name, tree) in geoms {
        let path = child_path(prefix, name);
        match tree {
            GeomTree::Map(sub) => flatten_into(sub, &path, filter, out, diag),
            GeomTree::Leaf(geometry) => match filter {
                Some(kind) if !kind.matches(geometry) => {
                    diag.report(Warning::FilteredOut {
                        path,
                        kind: GeometryKind::of(geometry),
                    });
                }
                _ => out.push(geometry.clone()),
            },
        }
    }
}

fn child_path(root: &str, name: &str) -> String {
    if root.is_empty() {
        name.to_string()
    } else {
        format!("{root}.{name}")
    }
}
