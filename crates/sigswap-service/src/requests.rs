//! The operations exposed at the service boundary: inspect a signature,
//! and reorder or delete its parameters across the project.

use sigswap_syntax::{Node, NodeIndex, SourceFile};
use tracing::debug;

use crate::declarations::{
    find_signature_declaration, has_this_receiver, parameter_info, reference_anchor,
    signature_parameters,
};
use crate::edits::calc_text_change;
use crate::project::LanguageService;
use crate::protocol::{FileTextChanges, ParameterInfo, ParameterUpdate, TextChange};
use crate::references::{SiteKind, find_signature_references};

/// Parameter projections of the innermost signature at `position`, in
/// declared order. Empty when the position hits no function-like node.
pub fn get_signature_parameters<S: LanguageService>(
    service: &S,
    file_name: &str,
    position: u32,
) -> Vec<ParameterInfo> {
    let Some(source) = service.source_file(file_name) else {
        return Vec::new();
    };
    let Some(decl) = find_signature_declaration(source, position) else {
        return Vec::new();
    };
    signature_parameters(source, decl)
        .iter()
        .map(|&param| parameter_info(source, param))
        .collect()
}

/// Computes the edits that apply `update` to the signature at `position`
/// and to every call and alias declaration reachable from it.
///
/// Edits are grouped per file and sorted by span start, except that the
/// queried declaration's own edit is ordered before the rest of its
/// file. Nothing is applied here. The host owns the text and commits the
/// returned changes as one transaction.
pub fn sort_signature_parameters<S: LanguageService>(
    service: &S,
    file_name: &str,
    position: u32,
    update: &ParameterUpdate,
) -> Vec<FileTextChanges> {
    let Some(source) = service.source_file(file_name) else {
        return Vec::new();
    };
    let Some(decl) = find_signature_declaration(source, position) else {
        debug!(file = file_name, position, "no signature declaration at position");
        return Vec::new();
    };
    let params = signature_parameters(source, decl);
    let reorderable = reorderable_parameters(source, &params);
    let Some(orders) = update.to_orders(reorderable.len()) else {
        debug!(file = file_name, "update does not fit the parameter list");
        return Vec::new();
    };

    let anchor = reference_anchor(source, decl);
    let mut all: Vec<FileTextChanges> = Vec::new();
    for site in find_signature_references(service, file_name, anchor) {
        if site.file_name == file_name && site.node == decl {
            // The queried declaration is rendered below so its edit can
            // lead its file.
            continue;
        }
        let Some(site_source) = service.source_file(&site.file_name) else {
            continue;
        };
        let list: Vec<NodeIndex> = match site.kind {
            SiteKind::Call => match site_source.arena().get(site.node) {
                Node::CallExpression(data) => data.arguments.clone(),
                _ => continue,
            },
            SiteKind::Declaration => {
                let site_params = signature_parameters(site_source, site.node);
                reorderable_parameters(site_source, &site_params).to_vec()
            }
        };
        if let Some(change) = calc_text_change(site_source, &list, &orders) {
            push_change(&mut all, &site.file_name, change);
        }
    }
    for entry in &mut all {
        entry.text_changes.sort_by_key(|change| change.span.start);
        entry.text_changes.dedup();
    }

    if let Some(change) = calc_text_change(source, reorderable, &orders) {
        match all.iter_mut().find(|entry| entry.file_name == file_name) {
            Some(entry) => entry.text_changes.insert(0, change),
            None => all.insert(
                0,
                FileTextChanges {
                    file_name: file_name.to_string(),
                    text_changes: vec![change],
                },
            ),
        }
    }
    all
}

/// Legacy form of [`sort_signature_parameters`]: move one parameter from
/// `from` to `to`. A negative `to` deletes the parameter and a `to` at
/// or past the end moves it to the tail.
pub fn swap_signature_parameters<S: LanguageService>(
    service: &S,
    file_name: &str,
    position: u32,
    from: u32,
    to: i64,
) -> Vec<FileTextChanges> {
    let update = ParameterUpdate::from_move_request(from, to);
    sort_signature_parameters(service, file_name, position, &update)
}

/// The slots a permutation may touch: every parameter except a leading
/// `this` receiver, which has no call-site counterpart.
fn reorderable_parameters<'a>(source: &SourceFile, params: &'a [NodeIndex]) -> &'a [NodeIndex] {
    if has_this_receiver(source, params) {
        &params[1..]
    } else {
        params
    }
}

fn push_change(all: &mut Vec<FileTextChanges>, file_name: &str, change: TextChange) {
    match all.iter_mut().find(|entry| entry.file_name == file_name) {
        Some(entry) => entry.text_changes.push(change),
        None => all.push(FileTextChanges {
            file_name: file_name.to_string(),
            text_changes: vec![change],
        }),
    }
}
