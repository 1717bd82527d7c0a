use super::*;
use topscore_sheet::Grid;

/// A results row with cells B, D, F and L filled in.
fn row(home: &str, away: &str, marker: &str, scorers: &str) -> Vec<String> {
    let mut cells = vec![String::new(); SCORERS_COLUMN];
    cells[HOME_COLUMN - 1] = home.to_string();
    cells[AWAY_COLUMN - 1] = away.to_string();
    cells[MARKER_COLUMN - 1] = marker.to_string();
    cells[SCORERS_COLUMN - 1] = scorers.to_string();
    cells
}

fn header(division: &str) -> Vec<String> {
    row(division, "", HEADER_MARKER, "")
}

fn blank() -> Vec<String> {
    row("", "", "", "")
}

fn results_sheet() -> Grid {
    Grid::from_rows([
        header("EERSTE KLASSE D"),
        row("Heer", "Born", "", "Jansen 1-0, Smits 1-1"),
        row("Baarlo", "Ajax", "", "Pietersen 1-0, De Jong 1-1"),
        blank(),
        header("Derde divisie"),
        row("Blerick", "Haelen", "", "Bos 0-1"),
        header("EERSTE KLASSE D"),
        row("Heer", "Sittard", "", "jansen 1-0"),
        blank(),
        row("BEKER", "", "", ""),
        row("Heer", "Born", "", "Jansen 1-0"),
        header("Tweede klasse"),
        row("Born", "Heer", "", "Smits 1-0"),
    ])
}

#[test]
fn test_division_tables_fold_repeated_headers() {
    let tables = division_tables(&results_sheet());
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].division, "EERSTE KLASSE D");
    assert_eq!(tables[0].rows.len(), 3);
    assert_eq!(tables[0].group(), "Eerste klasse");
    assert_eq!(tables[1].division, "Derde en vierde divisie");
    assert_eq!(tables[1].rows.len(), 1);
}

#[test]
fn test_aggregate_round_totals_and_groups() {
    let mut diagnostics = Diagnostics::new();
    let totals = aggregate_round(&results_sheet(), &ClubRegistry::default(), &mut diagnostics);

    let jansen = totals.get(&PlayerKey::with_club("JANSEN", "heer")).unwrap();
    assert_eq!(jansen.key, PlayerKey::with_club("Jansen", "Heer"));
    assert_eq!(jansen.goals, 2);
    assert_eq!(jansen.group, "Eerste klasse");

    let bos = totals.get(&PlayerKey::with_club("Bos", "Haelen")).unwrap();
    assert_eq!(bos.goals, 1);
    assert_eq!(bos.group, "Derde en vierde divisie");

    assert_eq!(totals.len(), 4);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_unrecognized_clubs_are_filtered() {
    let mut diagnostics = Diagnostics::new();
    let totals = aggregate_round(&results_sheet(), &ClubRegistry::default(), &mut diagnostics);
    assert!(totals.get(&PlayerKey::with_club("De Jong", "Ajax")).is_none());
    assert_eq!(totals.filtered_out(), 1);
    assert!(!totals.goals_this_round().keys().any(|k| k.club.as_deref() == Some("Ajax")));
}

#[test]
fn test_extra_clubs_are_counted() {
    let clubs = ClubRegistry::default().with_extra(["Ajax"]);
    let totals = aggregate_round(&results_sheet(), &clubs, &mut Diagnostics::new());
    assert_eq!(totals.get(&PlayerKey::with_club("De Jong", "Ajax")).unwrap().goals, 1);
    assert_eq!(totals.filtered_out(), 0);
}

#[test]
fn test_cup_section_is_ignored() {
    let totals = aggregate_round(&results_sheet(), &ClubRegistry::default(), &mut Diagnostics::new());
    // Only the league fixture counts; the cup rows repeat the same scorer.
    assert_eq!(totals.get(&PlayerKey::with_club("Jansen", "Heer")).unwrap().goals, 2);
    assert_eq!(totals.get(&PlayerKey::with_club("Smits", "Born")).unwrap().goals, 1);
    assert!(totals.group_of().values().all(|g| g != "Tweede klasse"));
}

#[test]
fn test_rows_without_marker_are_not_headers() {
    let sheet = Grid::from_rows([
        row("Eerste klasse", "", "", ""),
        row("Heer", "Born", "", "Jansen 1-0"),
    ]);
    assert!(division_tables(&sheet).is_empty());
}

#[test]
fn test_add_keeps_first_spelling_and_group() {
    let mut totals = RoundTotals::new();
    totals.add(PlayerKey::with_club("Jansen", "Heer"), 1, "Eerste klasse");
    totals.add(PlayerKey::with_club("jansen ", "HEER"), 2, "Tweede klasse");
    assert_eq!(totals.len(), 1);
    let entry = totals.entries().next().unwrap();
    assert_eq!(entry.key.name, "Jansen");
    assert_eq!(entry.goals, 3);
    assert_eq!(entry.group, "Eerste klasse");
}
