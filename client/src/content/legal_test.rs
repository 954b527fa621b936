use super::*;
use crate::util::markdown::render_markdown_html;

#[test]
fn sections_resolve_by_id() {
    assert_eq!(legal_section("terms").label, "Terms of Service");
    assert_eq!(legal_section("privacy").label, "Data & Privacy");
}

#[test]
fn unknown_section_falls_back_to_manifesto() {
    assert_eq!(legal_section("cookies").id, DEFAULT_LEGAL_SECTION);
}

#[test]
fn privacy_renders_list_and_callout() {
    let html = render_markdown_html(legal_section("privacy").body_markdown);
    assert_eq!(html.matches("<li>").count(), 3);
    assert!(html.contains("<blockquote>"));
    assert!(html.contains("<strong>Uso de Cookies &amp; Tracking</strong>"));
}
