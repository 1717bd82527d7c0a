use super::*;

const HOME: &str = "Heer";
const AWAY: &str = "Born";

fn extract(narration: &str) -> (Vec<ScoreEvent>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let events = extract_score_events(narration, HOME, AWAY, &mut diagnostics);
    (events, diagnostics)
}

fn scorers(events: &[ScoreEvent]) -> Vec<(&str, &str)> {
    events
        .iter()
        .map(|e| (e.scorer.as_str(), e.club.as_str()))
        .collect()
}

#[test]
fn test_score_delta_attribution() {
    let (events, _) = extract("A 1-0, B 1-1, A 2-1");
    assert_eq!(
        scorers(&events),
        vec![("A", HOME), ("B", AWAY), ("A", HOME)]
    );
}

#[test]
fn test_own_goal_advances_score_without_scorer() {
    let (events, diagnostics) = extract("Jansen 1-0, eigen doelpunt 1-1, Pietersen 2-1");
    assert_eq!(scorers(&events), vec![("Jansen", HOME), ("Pietersen", HOME)]);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_own_goal_abbreviation() {
    let (events, _) = extract("Jansen 1-0, Smits (ed.) 1-1, Pietersen 1-2");
    assert_eq!(scorers(&events), vec![("Jansen", HOME), ("Pietersen", AWAY)]);
}

#[test]
fn test_connective_repeats_last_scorer() {
    let (events, _) = extract("Jansen 1-0 en 2-0, Smits 2-1");
    assert_eq!(
        scorers(&events),
        vec![("Jansen", HOME), ("Jansen", HOME), ("Smits", AWAY)]
    );
}

#[test]
fn test_repeated_scorer_may_jump_several_goals() {
    let (events, diagnostics) = extract("Jansen 1-0 en 3-0");
    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.scorer == "Jansen" && e.club == HOME));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_single_mention_covers_several_goals() {
    let (events, diagnostics) = extract("Jansen 2-0, Smits 2-1");
    assert_eq!(
        scorers(&events),
        vec![("Jansen", HOME), ("Jansen", HOME), ("Smits", AWAY)]
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn test_implausible_jump_is_flagged() {
    let (events, diagnostics) = extract("Jansen 1-0 en 4000000000-0, Smits 4000000000-1");
    assert_eq!(scorers(&events), vec![("Jansen", HOME), ("Smits", AWAY)]);
    assert!(diagnostics.contains("implausible-jump:1-0->4000000000-0"));
}

#[test]
fn test_unrecognized_sequence_still_advances_score() {
    let (events, diagnostics) = extract("Jansen 1-0, Smits 3-3, Jansen 4-3");
    assert_eq!(scorers(&events), vec![("Jansen", HOME), ("Jansen", HOME)]);
    assert!(diagnostics.contains("weird-score-seq:1-0->3-3"));
}

#[test]
fn test_connective_without_previous_scorer() {
    let (events, diagnostics) = extract("en 1-0");
    assert!(events.is_empty());
    assert!(diagnostics.contains("en-without-previous:en"));
}

#[test]
fn test_unknown_scorer_advances_score() {
    let (events, diagnostics) = extract("ONBEKEND 1-0, Jansen 2-0");
    assert_eq!(scorers(&events), vec![("Jansen", HOME)]);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_team_names_are_not_scorers() {
    let (events, _) = extract("Heer - Born 1-0, Jansen 1-0");
    assert_eq!(scorers(&events), vec![("Jansen", HOME)]);
}

#[test]
fn test_leading_parenthetical_and_connective_prefix() {
    let (events, _) = extract("(23) Jansen 1-0, en Smits 1-1");
    assert_eq!(scorers(&events), vec![("Jansen", HOME), ("Smits", AWAY)]);
}

#[test]
fn test_short_names_are_flagged_but_counted() {
    let (events, diagnostics) = extract("X 1-0");
    assert_eq!(scorers(&events), vec![("X", HOME)]);
    assert!(diagnostics.contains("X"));
}

#[test]
fn test_empty_narration() {
    let (events, diagnostics) = extract("");
    assert!(events.is_empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_parse_score() {
    assert_eq!(parse_score("2-1"), Some(Score::new(2, 1)));
    assert_eq!(parse_score("2"), None);
    assert_eq!(parse_score("a-1"), None);
}

#[test]
fn test_infer_side() {
    let prev = Score::new(1, 1);
    assert_eq!(infer_side(prev, Score::new(2, 1)), Some((Side::Home, 1)));
    assert_eq!(infer_side(prev, Score::new(1, 2)), Some((Side::Away, 1)));
    assert_eq!(infer_side(prev, Score::new(3, 1)), Some((Side::Home, 2)));
    assert_eq!(infer_side(prev, Score::new(2, 2)), None);
    assert_eq!(infer_side(prev, Score::new(0, 1)), None);
    assert_eq!(infer_side(prev, prev), None);
}
