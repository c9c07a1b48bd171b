//! Resolving every site a signature is used from: the declarations that
//! carry its parameter list and the calls that must follow suit, chased
//! through aliases transitively.

use rustc_hash::FxHashSet;
use sigswap_common::{TextSpan, limits};
use sigswap_syntax::{Node, NodeIndex, SourceFile, SyntaxKind};
use tracing::warn;

use crate::call_sites::find_call_sites;
use crate::project::LanguageService;
use crate::protocol::ReferenceEntry;

/// How a site participates in a signature change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteKind {
    /// A call whose argument list gets rewritten.
    Call,
    /// A function-like node whose parameter list gets rewritten.
    Declaration,
}

#[derive(Debug, Clone)]
pub struct SignatureSite {
    pub file_name: String,
    pub node: NodeIndex,
    pub kind: SiteKind,
}

/// Collects declaration and call sites reachable from the identifier at
/// `position`. Aliases (`const g = f`, `{ g: f }`, `{ f }`, `typeof f`
/// annotations) are followed, each hop one level deeper, until nothing
/// fresh turns up or a budget runs out.
pub fn find_signature_references<S: LanguageService>(
    service: &S,
    file_name: &str,
    position: u32,
) -> Vec<SignatureSite> {
    let mut resolver = Resolver {
        service,
        visited: FxHashSet::default(),
        seen_sites: FxHashSet::default(),
        sites: Vec::new(),
        limit_warned: false,
    };
    resolver.walk(file_name, position, 0);
    resolver.sites
}

struct Resolver<'a, S> {
    service: &'a S,
    /// References already expanded, keyed by file and span start. Cyclic
    /// alias graphs terminate because a revisited reference is never
    /// expanded twice.
    visited: FxHashSet<(String, u32)>,
    seen_sites: FxHashSet<(String, u32)>,
    sites: Vec<SignatureSite>,
    limit_warned: bool,
}

impl<'a, S: LanguageService> Resolver<'a, S> {
    fn walk(&mut self, file_name: &str, position: u32, depth: u32) {
        if depth > limits::MAX_ALIAS_DEPTH {
            warn!(depth, file = file_name, "alias chain too deep, leaving the rest unresolved");
            return;
        }
        let refs = self.service.references_at(file_name, position);
        let fresh = self.fresh_references(refs);
        if fresh.is_empty() {
            return;
        }

        // Bucket spans per file so the call locator walks each file once
        // per batch, with its spans in start order.
        let mut by_file: Vec<(String, Vec<TextSpan>)> = Vec::new();
        for entry in &fresh {
            match by_file.iter_mut().find(|(name, _)| name == &entry.file_name) {
                Some((_, spans)) => spans.push(entry.text_span),
                None => by_file.push((entry.file_name.clone(), vec![entry.text_span])),
            }
        }
        for (_, spans) in &mut by_file {
            spans.sort_by_key(|span| span.start);
        }
        for (name, spans) in &by_file {
            if let Some(source) = self.service.source_file(name) {
                for call in find_call_sites(source, spans) {
                    self.push_site(name, call, SiteKind::Call);
                }
            }
        }

        for entry in &fresh {
            self.classify(&entry.file_name, entry.text_span, depth);
        }
    }

    /// Keeps the not-yet-visited references, charging each against the
    /// overall budget.
    fn fresh_references(&mut self, refs: Vec<ReferenceEntry>) -> Vec<ReferenceEntry> {
        let mut fresh = Vec::new();
        for entry in refs {
            if self.visited.len() >= limits::MAX_REFERENCE_SITES {
                if !self.limit_warned {
                    warn!(
                        limit = limits::MAX_REFERENCE_SITES,
                        "reference budget exhausted, edits may be incomplete"
                    );
                    self.limit_warned = true;
                }
                break;
            }
            if self.visited.insert((entry.file_name.clone(), entry.text_span.start)) {
                fresh.push(entry);
            }
        }
        fresh
    }

    /// Decides what one reference means: a declaration to rewrite, an
    /// alias to chase, or noise to drop. Calls are not handled here, the
    /// span locator already found them.
    fn classify(&mut self, file_name: &str, span: TextSpan, depth: u32) {
        let Some(source) = self.service.source_file(file_name) else {
            return;
        };
        let arena = source.arena();
        let Some(node) = source.identifier_at(span.start) else {
            return;
        };
        let Some(parent) = arena.parent(node) else {
            return;
        };

        // A reference inside a call is either the callee head (located
        // already) or an argument, and neither is chased further.
        if arena.kind(parent) == SyntaxKind::CallExpression {
            return;
        }
        if let Some(grandparent) = arena.parent(parent) {
            if arena.kind(grandparent) == SyntaxKind::CallExpression {
                return;
            }
        }

        if let Some(data) = arena.get(parent).as_function_like() {
            if data.name == Some(node) {
                self.push_site(file_name, parent, SiteKind::Declaration);
            }
            return;
        }

        match arena.get(parent) {
            Node::VariableDeclaration(data) => {
                if data.name == node {
                    // `const f = (a, b) => ...` declares through the
                    // variable name.
                    if let Some(init) = data.initializer {
                        let init = peel_wrappers(arena, init);
                        if arena.kind(init).is_function_like() {
                            self.push_site(file_name, init, SiteKind::Declaration);
                        }
                    }
                } else if data.initializer == Some(node) {
                    // `const g = f` makes g an alias of f.
                    let (name_pos, _) = arena.span(data.name);
                    self.walk(file_name, name_pos, depth + 1);
                }
            }
            Node::PropertyAssignment(data) => {
                if data.name == node {
                    let init = peel_wrappers(arena, data.initializer);
                    if arena.kind(init).is_function_like() {
                        self.push_site(file_name, init, SiteKind::Declaration);
                    }
                } else if data.initializer == node {
                    // `{ g: f }` republishes f under the property name.
                    let (name_pos, _) = arena.span(data.name);
                    self.walk(file_name, name_pos, depth + 1);
                }
            }
            Node::ShorthandPropertyAssignment(data) => {
                // `{ f }` republishes f under the same spelling.
                let (name_pos, _) = arena.span(data.name);
                self.walk(file_name, name_pos, depth + 1);
            }
            Node::TypeQuery(_) => {
                self.chase_type_query(file_name, source, parent, depth);
            }
            _ => {}
        }
    }

    /// A `typeof f` annotation types whatever declaration owns it with
    /// f's signature. Climb to that owner and treat its name as another
    /// alias of f.
    fn chase_type_query(
        &mut self,
        file_name: &str,
        source: &SourceFile,
        type_query: NodeIndex,
        depth: u32,
    ) {
        let arena = source.arena();
        let mut current = type_query;
        while let Some(up) = arena.parent(current) {
            match arena.get(up) {
                Node::PropertySignature(data) => {
                    // `let o: { m: typeof f }` routes calls through o.m.
                    let (name_pos, _) = arena.span(data.name);
                    self.walk(file_name, name_pos, depth + 1);
                    return;
                }
                Node::VariableDeclaration(data) => {
                    // `const g: typeof f = (...) => ...` both aliases f
                    // and declares a list of its own.
                    if let Some(init) = data.initializer {
                        let init = peel_wrappers(arena, init);
                        if arena.kind(init).is_function_like() {
                            self.push_site(file_name, init, SiteKind::Declaration);
                        }
                    }
                    let (name_pos, _) = arena.span(data.name);
                    self.walk(file_name, name_pos, depth + 1);
                    return;
                }
                _ => {
                    if is_climb_boundary(arena.kind(up)) {
                        return;
                    }
                    current = up;
                }
            }
        }
    }

    fn push_site(&mut self, file_name: &str, node: NodeIndex, kind: SiteKind) {
        if self.seen_sites.insert((file_name.to_string(), node.0)) {
            self.sites.push(SignatureSite {
                file_name: file_name.to_string(),
                node,
                kind,
            });
        }
    }
}

/// Strips parentheses and `as` casts so `((a, b) => a) as typeof f`
/// still reads as a function-like initializer.
fn peel_wrappers(arena: &sigswap_syntax::NodeArena, mut idx: NodeIndex) -> NodeIndex {
    loop {
        match arena.get(idx) {
            Node::ParenthesizedExpression(data) => idx = data.expression,
            Node::AsExpression(data) => idx = data.expression,
            _ => return idx,
        }
    }
}

/// Kinds past which a type-query climb has left annotation territory.
fn is_climb_boundary(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::SourceFile
            | SyntaxKind::Block
            | SyntaxKind::VariableStatement
            | SyntaxKind::ExpressionStatement
            | SyntaxKind::ReturnStatement
            | SyntaxKind::ImportDeclaration
            | SyntaxKind::Parameter
            | SyntaxKind::FunctionDeclaration
            | SyntaxKind::FunctionExpression
            | SyntaxKind::ArrowFunction
    )
}
