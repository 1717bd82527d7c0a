use super::*;

const RANKING: &str = "\
Eerste klasse

1. Karel Smits (Born) - 6 doelpunten
Jan Jansen (Heer)
2. Piet Bos (Haelen) - 2 doelpunten

Derde en vierde divisie

1. Ad Vos (Blerick) - 3 doelpunten
";

#[test]
fn test_sections_and_items() {
    let sections = parse_sections(RANKING);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].title, "Eerste klasse");
    assert_eq!(
        sections[0].items,
        vec![
            vec![
                "Karel Smits (Born) - 6 doelpunten".to_string(),
                "Jan Jansen (Heer)".to_string()
            ],
            vec!["Piet Bos (Haelen) - 2 doelpunten".to_string()],
        ]
    );
    assert_eq!(sections[1].title, "Derde en vierde divisie");
    assert_eq!(sections[1].items.len(), 1);
}

#[test]
fn test_unnumbered_lines_group_by_goal_count() {
    let text = "TWEEDE KLASSE\nA (Heer) - 4 doelpunten\nB (Born) - 4 doelpunten\nC (Born) - 2 doelpunten\nD (Heer)\n";
    let sections = parse_sections(text);
    let sizes: Vec<usize> = sections[0].items.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![2, 2]);
}

#[test]
fn test_lines_before_first_heading_are_dropped() {
    let sections = parse_sections("1. A (Heer) - 2 doelpunten\nEerste klasse\n1. B (Born) - 1 doelpunt\n");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].items, vec![vec!["B (Born) - 1 doelpunt".to_string()]]);
}

#[test]
fn test_empty_sections_are_dropped() {
    let sections = parse_sections("Eerste klasse\nTweede klasse\n1. B (Born) - 1 doelpunt\n");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Tweede klasse");
}

#[test]
fn test_heading_detection() {
    assert!(is_section_heading("EERSTE KLASSE D"));
    assert!(is_section_heading("Derde en vierde divisie"));
    assert!(is_section_heading("Overig"));
    assert!(!is_section_heading("1. Eerste klasse"));
    assert!(!is_section_heading("Jan (Klasse Club)"));
    assert!(!is_section_heading("Divisiespeler - 3 doelpunten"));
    assert!(!is_section_heading("Zaalvoetbal"));
    assert!(!is_section_heading(""));
}
