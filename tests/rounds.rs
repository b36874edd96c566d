// Round lifecycle tests against the public reducer API (native, no DOM).

use zoom_doom::round::INITIAL_ENHANCE_LEVEL;
use zoom_doom::view;
use zoom_doom::{CATALOG, Game, GameConfig, GameError, Outcome, Phase, SeededRng, options_for};

fn game(seed: u64) -> Game<SeededRng> {
    Game::new(GameConfig::default(), SeededRng::new(seed))
}

#[test]
fn a_catalog_item_is_selected_after_init() {
    for seed in 0..64 {
        let g = game(seed);
        let id = g.round().item.id;
        assert!(CATALOG.iter().any(|c| c.id == id), "seed {seed} dealt unknown item {id}");
        assert_eq!(g.round().phase, Phase::Guessing);
    }
}

#[test]
fn guess_sets_correctness_to_answer_equality() {
    for seed in 0..32 {
        let mut g = game(seed);
        let answer = g.round().item.correct_answer;
        let opts = g.options();
        let pick = opts[seed as usize % opts.len()].id;
        g.submit_guess(pick).unwrap();
        assert_eq!(g.round().phase, Phase::Revealed);
        assert_eq!(g.round().is_correct, Some(pick == answer));
    }
}

#[test]
fn next_round_resets_enhancement_and_matches_options() {
    let mut g = game(1234);
    for _ in 0..40 {
        g.enhance().unwrap();
        g.skip().unwrap();
        let round = g.start_round().clone();
        assert_eq!(round.enhance_level, INITIAL_ENHANCE_LEVEL);
        assert!(!round.enhancing);
        assert_eq!(g.options(), options_for(round.item.kind));
    }
}

#[test]
fn uniform_selection_reaches_whole_catalog() {
    let mut g = game(77);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(g.start_round().item.id);
    }
    assert_eq!(seen.len(), CATALOG.len());
}

#[test]
fn full_round_renders_each_phase() {
    let mut g = game(5);
    let guessing = view::render(&g);
    assert!(guessing.contains("MICROSCOPIC ANALYSIS IN PROGRESS..."));

    let answer = g.round().item.correct_answer;
    let reveal = g.submit_guess(answer).unwrap();
    assert_eq!(g.outcome(), Some(Outcome::Correct));
    let revealed = view::render(&g);
    assert!(revealed.contains("CORRECT! You survived the doom!"));
    assert!(revealed.contains(g.round().item.kind.confirmation()));

    assert!(g.end_dramatic_effect(reveal.serial));
    assert!(matches!(g.enhance(), Err(GameError::NotGuessing)));
    g.start_round();
    assert!(!view::render(&g).contains("NEXT DOOM"));
}
