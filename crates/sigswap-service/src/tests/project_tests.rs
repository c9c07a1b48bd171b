use super::*;

#[test]
fn lexical_references_cross_files_in_insertion_order() {
    let mut project = Project::new();
    project.add_file("a.ts", "export function f(a, b) { return a; }\n");
    project.add_file("b.ts", "import { f } from './a';\nf(1, 2);\n");

    let position = "export function ".len() as u32;
    let refs = project.references_at("a.ts", position);
    assert_eq!(refs.len(), 3);
    assert_eq!(refs[0].file_name, "a.ts");
    assert_eq!(refs[1].file_name, "b.ts");
    assert_eq!(refs[2].file_name, "b.ts");
    // Within a file, spans come back sorted by start.
    assert!(refs[1].text_span.start < refs[2].text_span.start);
}

#[test]
fn unknown_files_and_blank_positions_resolve_to_nothing() {
    let mut project = Project::new();
    project.add_file("a.ts", "const value = 1;\n");
    assert!(project.references_at("missing.ts", 0).is_empty());
    // Position 0 is on the `const` keyword, not an identifier.
    assert!(project.references_at("a.ts", 0).is_empty());
}

#[test]
fn add_file_replaces_existing_content() {
    let mut project = Project::new();
    project.add_file("a.ts", "f(1);\n");
    project.add_file("a.ts", "f(1, 2);\n");
    assert_eq!(project.len(), 1);
    let source = project.source_file("a.ts").expect("file should exist");
    assert_eq!(source.text(), "f(1, 2);\n");
}

#[test]
fn remove_file_forgets_the_source() {
    let mut project = Project::new();
    project.add_file("a.ts", "f();\n");
    assert!(project.remove_file("a.ts"));
    assert!(!project.remove_file("a.ts"));
    assert!(project.source_file("a.ts").is_none());
}
