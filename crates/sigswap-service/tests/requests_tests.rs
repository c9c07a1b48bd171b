//! End-to-end tests for the reorder service: files go into a project,
//! edits come out, and applying them textually yields the expected
//! sources.

use sigswap_service::{
    FileTextChanges, ParameterUpdate, Project, get_signature_parameters,
    sort_signature_parameters, swap_signature_parameters,
};

/// Builds a one-file project around `text`.
fn project_of(text: &str) -> Project {
    let mut project = Project::new();
    project.add_file("main.ts", text);
    project
}

fn offset(text: &str, needle: &str) -> u32 {
    text.find(needle).expect("needle should occur") as u32
}

fn reorder(indices: &[u32]) -> ParameterUpdate {
    ParameterUpdate::Reorder {
        orders: indices.iter().map(|&i| Some(i)).collect(),
    }
}

/// Applies one file's changes to its text. Edits never overlap, so
/// applying back to front keeps earlier offsets valid.
fn apply_file(text: &str, changes: &FileTextChanges) -> String {
    let mut sorted: Vec<_> = changes.text_changes.iter().collect();
    sorted.sort_by_key(|change| change.span.start);
    let mut out = text.to_string();
    for change in sorted.into_iter().rev() {
        let start = change.span.start as usize;
        let end = change.span.end() as usize;
        out.replace_range(start..end, &change.new_text);
    }
    out
}

#[test]
fn inspect_reports_declared_parameters() {
    let text = "function greet(name: string, times: number) {}\n";
    let project = project_of(text);
    let params = get_signature_parameters(&project, "main.ts", offset(text, "name"));
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name, "name");
    assert_eq!(params[0].ty, "string");
    assert!(!params[0].is_rest);
    assert_eq!(params[1].name, "times");
    assert_eq!(params[1].ty, "number");
}

#[test]
fn inspect_includes_the_receiver_parameter() {
    let text = "function scale(this: Shape, w) {}\n";
    let project = project_of(text);
    let params = get_signature_parameters(&project, "main.ts", offset(text, "w)"));
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name, "this");
    assert_eq!(params[0].ty, "Shape");
}

#[test]
fn inspect_misses_return_empty() {
    let project = project_of("const x = 1;\n");
    assert!(get_signature_parameters(&project, "main.ts", 3).is_empty());
    assert!(get_signature_parameters(&project, "other.ts", 0).is_empty());
}

#[test]
fn reorder_rewrites_declaration_and_calls() {
    let text = "function f(a, b) { return a; }\nf(1, 2);\nf(3, 4);\n";
    let project = project_of(text);
    let update = reorder(&[1, 0]);
    let all = sort_signature_parameters(&project, "main.ts", offset(text, "a,"), &update);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].file_name, "main.ts");
    assert_eq!(all[0].text_changes.len(), 3);
    // The declaration edit leads its file.
    assert_eq!(all[0].text_changes[0].span.start, offset(text, "a, b"));
    assert_eq!(
        apply_file(text, &all[0]),
        "function f(b, a) { return a; }\nf(2, 1);\nf(4, 3);\n"
    );

    // Nothing was applied to the project, so asking again computes the
    // same edits.
    let again = sort_signature_parameters(&project, "main.ts", offset(text, "a,"), &update);
    assert_eq!(all, again);
}

#[test]
fn shorthand_alias_reaches_property_calls() {
    let text = "function f(a, b) {}\nconst o = { f };\no.f(1, 2);\n";
    let project = project_of(text);
    let all = sort_signature_parameters(&project, "main.ts", offset(text, "a,"), &reorder(&[1, 0]));
    assert_eq!(all.len(), 1);
    assert_eq!(
        apply_file(text, &all[0]),
        "function f(b, a) {}\nconst o = { f };\no.f(2, 1);\n"
    );
}

#[test]
fn renamed_property_alias_reaches_its_calls() {
    let text = "function f(a, b) {}\nconst o = { g: f };\no.g(1, 2);\n";
    let project = project_of(text);
    let all = sort_signature_parameters(&project, "main.ts", offset(text, "a,"), &reorder(&[1, 0]));
    assert_eq!(all.len(), 1);
    assert_eq!(
        apply_file(text, &all[0]),
        "function f(b, a) {}\nconst o = { g: f };\no.g(2, 1);\n"
    );
}

#[test]
fn alias_cycles_terminate_without_duplicate_edits() {
    let text = "function f(a, b) {}\nconst g = f;\nconst o = { f, g };\nf(1, 2);\ng(3, 4);\n";
    let project = project_of(text);
    let all = sort_signature_parameters(&project, "main.ts", offset(text, "a,"), &reorder(&[1, 0]));
    assert_eq!(all.len(), 1);
    // One edit for the declaration and one per call, nothing doubled.
    assert_eq!(all[0].text_changes.len(), 3);
    assert_eq!(
        apply_file(text, &all[0]),
        "function f(b, a) {}\nconst g = f;\nconst o = { f, g };\nf(2, 1);\ng(4, 3);\n"
    );
}

#[test]
fn typeof_aliases_rewrite_annotated_declarations() {
    let text = "function f(a, b) {}\nconst g: typeof f = (x, y) => x;\ng(1, 2);\n";
    let project = project_of(text);
    let all = sort_signature_parameters(&project, "main.ts", offset(text, "a,"), &reorder(&[1, 0]));
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].text_changes.len(), 3);
    assert_eq!(
        apply_file(text, &all[0]),
        "function f(b, a) {}\nconst g: typeof f = (y, x) => x;\ng(2, 1);\n"
    );
}

#[test]
fn typeof_in_property_signatures_reaches_member_calls() {
    let text = "function f(a, b) {}\nlet api: { m: typeof f };\napi.m(1, 2);\n";
    let project = project_of(text);
    let all = sort_signature_parameters(&project, "main.ts", offset(text, "a,"), &reorder(&[1, 0]));
    assert_eq!(all.len(), 1);
    assert_eq!(
        apply_file(text, &all[0]),
        "function f(b, a) {}\nlet api: { m: typeof f };\napi.m(2, 1);\n"
    );
}

#[test]
fn receiver_parameter_offsets_declaration_edits() {
    let text = "function scale(this: Shape, w, h) { return w; }\nscale(1, 2);\n";
    let project = project_of(text);
    let all = sort_signature_parameters(&project, "main.ts", offset(text, "w,"), &reorder(&[1, 0]));
    assert_eq!(all.len(), 1);
    assert_eq!(
        apply_file(text, &all[0]),
        "function scale(this: Shape, h, w) { return w; }\nscale(2, 1);\n"
    );
}

#[test]
fn legacy_swap_sentinels_translate_to_updates() {
    let text = "function f(a, b, c) {}\nf(1, 2, 3);\n";
    let project = project_of(text);
    let position = offset(text, "a,");

    // A negative destination deletes the parameter.
    let all = swap_signature_parameters(&project, "main.ts", position, 0, -1);
    assert_eq!(apply_file(text, &all[0]), "function f(b, c) {}\nf(2, 3);\n");

    // A destination past the end moves it to the tail.
    let all = swap_signature_parameters(&project, "main.ts", position, 0, 2333);
    assert_eq!(apply_file(text, &all[0]), "function f(b, c, a) {}\nf(2, 3, 1);\n");

    // An ordinary move shifts the elements in between.
    let all = swap_signature_parameters(&project, "main.ts", position, 2, 0);
    assert_eq!(apply_file(text, &all[0]), "function f(c, a, b) {}\nf(3, 1, 2);\n");
}

#[test]
fn invalid_updates_and_misses_return_empty() {
    let text = "function f(a, b) {}\n";
    let project = project_of(text);
    let position = offset(text, "a,");

    // Past the end of the declaration.
    assert!(
        sort_signature_parameters(&project, "main.ts", text.len() as u32, &reorder(&[1, 0]))
            .is_empty()
    );
    // Unknown file.
    assert!(sort_signature_parameters(&project, "nope.ts", 0, &reorder(&[1, 0])).is_empty());
    // Source index out of range in the legacy form.
    assert!(swap_signature_parameters(&project, "main.ts", position, 5, 0).is_empty());
    // Identity permutation.
    assert!(sort_signature_parameters(&project, "main.ts", position, &reorder(&[0, 1])).is_empty());
}

#[test]
fn spread_suppresses_only_that_call() {
    let text = "function f(a, b) {}\nf(1, 2);\nf(3, ...rest);\n";
    let project = project_of(text);
    let all = sort_signature_parameters(&project, "main.ts", offset(text, "a,"), &reorder(&[1, 0]));
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].text_changes.len(), 2);
    assert_eq!(
        apply_file(text, &all[0]),
        "function f(b, a) {}\nf(2, 1);\nf(3, ...rest);\n"
    );
}

#[test]
fn edits_group_by_file_in_discovery_order() {
    let main = "export function f(a, b) { return a; }\n";
    let callers = "import { f } from './main';\nf(1, 2);\n";
    let aliasing = "import { f } from './main';\nconst g = f;\ng(3, 4);\n";
    let mut project = Project::new();
    project.add_file("main.ts", main);
    project.add_file("callers.ts", callers);
    project.add_file("aliasing.ts", aliasing);

    let all = sort_signature_parameters(&project, "main.ts", offset(main, "a,"), &reorder(&[1, 0]));
    let names: Vec<&str> = all.iter().map(|entry| entry.file_name.as_str()).collect();
    assert_eq!(names, vec!["main.ts", "callers.ts", "aliasing.ts"]);
    assert_eq!(
        apply_file(main, &all[0]),
        "export function f(b, a) { return a; }\n"
    );
    assert_eq!(
        apply_file(callers, &all[1]),
        "import { f } from './main';\nf(2, 1);\n"
    );
    assert_eq!(
        apply_file(aliasing, &all[2]),
        "import { f } from './main';\nconst g = f;\ng(4, 3);\n"
    );
}
