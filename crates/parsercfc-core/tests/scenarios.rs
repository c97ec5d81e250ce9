//! End-to-end scenarios from the scanner's own design document, exercised
//! through the public `scan_text` entry point rather than the internal
//! scanner state machine directly.

use parsercfc_core::scan_text;

#[test]
fn s1_plain_definitions_in_source_order() {
    let source = "int foo(void) { return 0; } static void bar(int x) { }";
    assert_eq!(scan_text(source, None), vec!["foo".to_string(), "bar".to_string()]);
}

#[test]
fn s2_control_keywords_never_start_a_definition() {
    let source = "if (x) { } while (1) { } int real(void) { }";
    assert_eq!(scan_text(source, None), vec!["real".to_string()]);
}

#[test]
fn s3_name_template_macro_synthesizes_a_pasted_name() {
    let source = "#define DEF(T, N) int T##_##N(T x) {\nDEF(int, add) { return x; }";
    assert_eq!(scan_text(source, None), vec!["int_add".to_string()]);
}

#[test]
fn s4_expansion_macro_synthesizes_the_function_name() {
    let source = "#define PFX(n) my_##n\nvoid PFX(init)(void) { }";
    assert_eq!(scan_text(source, None), vec!["my_init".to_string()]);
}

#[test]
fn s4_external_parser_noise_for_the_macro_call_is_filtered() {
    let source = "#define PFX(n) my_##n\nvoid PFX(init)(void) { }";
    let parser_names = vec!["PFX".to_string()];
    assert_eq!(
        scan_text(source, Some(&parser_names)),
        vec!["my_init".to_string()]
    );
}

#[test]
fn s5_top_level_semicolon_resets_the_pending_candidate() {
    let source = "int (*fptr)(int); int real2(void) { }";
    assert_eq!(scan_text(source, None), vec!["real2".to_string()]);
}

#[test]
fn s6_macro_expansion_rendering_a_keyword_is_rejected() {
    let source = "#define N(x) x\nvoid N(int)(void) { }";
    assert!(scan_text(source, None).is_empty());
}
