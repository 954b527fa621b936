use super::*;

#[test]
fn every_listed_industry_resolves_to_itself() {
    for roadmap in &ROADMAPS {
        assert_eq!(roadmap_for(roadmap.industry), Some(roadmap));
    }
}

#[test]
fn lookup_is_exact() {
    assert_eq!(roadmap_for("healthtech"), None);
    assert_eq!(roadmap_for(""), None);
    assert_eq!(roadmap_for("Biotech"), None);
}

#[test]
fn quarters_are_in_display_order() {
    let fintech = roadmap_for("FinTech").unwrap();
    let labels: Vec<_> = fintech.quarters().iter().map(|(q, _)| *q).collect();
    assert_eq!(labels, ["Q1", "Q2", "Q3"]);
    assert_eq!(fintech.quarters()[2].1.tech, "LangChain Agents");
}
