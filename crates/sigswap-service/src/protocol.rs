//! Wire types, shaped the way tsserver shapes them.

use serde::{Deserialize, Serialize};
use sigswap_common::TextSpan;

/// One entry of the parameter listing a client shows next to a signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub is_rest: bool,
}

/// A single replacement: `span` in the original text becomes `new_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextChange {
    pub span: TextSpan,
    pub new_text: String,
}

/// All changes for one file. Within a file, the declaration's own edit is
/// ordered before the call-site edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTextChanges {
    pub file_name: String,
    pub text_changes: Vec<TextChange>,
}

/// A reference returned by the language service: where (file) and what span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntry {
    pub file_name: String,
    pub text_span: TextSpan,
}

/// What to do with the parameter list.
///
/// `Reorder` is the canonical shape: `orders[j]` names the source index
/// whose text fills output slot `j`, and `None` renders a placeholder. The
/// two single-parameter shapes expand to an orders array per argument list,
/// since list lengths differ between the declaration and each call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ParameterUpdate {
    Reorder { orders: Vec<Option<u32>> },
    MoveOne { from: u32, to: u32 },
    Delete { index: u32 },
}

impl ParameterUpdate {
    /// Translates the legacy wire pair. A negative `to` means delete; any
    /// other target becomes a move, and targets past the end of a list
    /// clamp to its tail (which is how "move to end" requests arrive).
    pub fn from_move_request(from: u32, to: i64) -> ParameterUpdate {
        if to < 0 {
            ParameterUpdate::Delete { index: from }
        } else {
            ParameterUpdate::MoveOne { from, to: to.min(i64::from(u32::MAX)) as u32 }
        }
    }

    /// Expands the update against a list of `len` elements. `None` means
    /// the update cannot touch this list (index out of range), so the site
    /// is left alone.
    pub fn to_orders(&self, len: usize) -> Option<Vec<Option<u32>>> {
        match self {
            ParameterUpdate::Reorder { orders } => Some(orders.clone()),
            ParameterUpdate::MoveOne { from, to } => {
                let from = *from as usize;
                if from >= len {
                    return None;
                }
                let to = (*to as usize).min(len - 1);
                let mut orders: Vec<Option<u32>> = (0..len as u32).map(Some).collect();
                let moved = orders.remove(from);
                orders.insert(to, moved);
                Some(orders)
            }
            ParameterUpdate::Delete { index } => {
                let index = *index as usize;
                if index >= len {
                    return None;
                }
                Some((0..len as u32).filter(|&k| k as usize != index).map(Some).collect())
            }
        }
    }
}
