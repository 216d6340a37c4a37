use trader_quiz::engine::{Quiz, QuizConfig};
use trader_quiz::term::{GameView, Screen, Viewport};

fn screen_after(f: impl FnOnce(&mut Quiz<Screen>)) -> Screen {
    let mut quiz = Quiz::new(QuizConfig::default(), Screen::new());
    f(&mut quiz);
    quiz.into_presenter()
}

#[test]
fn term_view_renders_card_border_corners() {
    let screen = screen_after(|_| {});
    let view = GameView::new(20, 6);
    let fb = view.render(&screen, "", Viewport::new(40, 20));

    let (x, y) = view.card_origin();
    assert_eq!(fb.get(x, y).unwrap().ch, '┌');
    assert_eq!(fb.get(x + 19, y).unwrap().ch, '┐');
    assert_eq!(fb.get(x, y + 5).unwrap().ch, '└');
    assert_eq!(fb.get(x + 19, y + 5).unwrap().ch, '┘');
}

#[test]
fn term_view_shows_level_and_guess_line() {
    let screen = screen_after(|_| {});
    let fb = GameView::default().render(&screen, "Neo", Viewport::new(100, 30));

    assert!(fb.contains_text("LEVEL 1"));
    assert!(fb.contains_text("text=LEVEL+1"));
    assert!(fb.contains_text("GUESS > Neo_"));
    assert!(fb.contains_text("SCORE 0"));
}

#[test]
fn term_view_flips_card_on_correct_guess() {
    let screen = screen_after(|q| {
        q.submit_guess("cryptoking").unwrap();
    });
    let fb = GameView::default().render(&screen, "", Viewport::new(100, 30));

    assert!(fb.contains_text("CORRECT! It's CryptoKing"));
    assert!(fb.contains_text("SCORE 100"));
    assert!(fb.contains_text("Correct! +100 points"));
}

#[test]
fn term_view_draws_leaderboard_and_wallet_when_wide_enough() {
    let screen = screen_after(|q| q.tick(1000));
    let wide = GameView::default().render(&screen, "", Viewport::new(100, 30));
    assert!(wide.contains_text("TOP TRADERS"));
    assert!(wide.contains_text("1,250,000 $ARTGA"));
    assert!(wide.contains_text("0xA4c13ef5d988E614Da2d33B514B530DAF0f80D95"));
    assert!(!wide.contains_text("0x7f9e8d6c"));

    let narrow = GameView::default().render(&screen, "", Viewport::new(50, 30));
    assert!(!narrow.contains_text("TOP TRADERS"));
}

#[test]
fn term_view_reveals_private_key_on_toggle() {
    let screen = screen_after(|q| {
        q.login();
        q.toggle_private_key();
    });
    let fb = GameView::new(44, 9).render(&screen, "", Viewport::new(120, 30));
    assert!(fb.contains_text("0x7f9e8d6c5b4a3f2e1d0c9b8a7f6e5d4c3b"));
}

#[test]
fn term_view_shows_help_prompt_and_hint() {
    let prompt = screen_after(|q| q.request_help().unwrap());
    let fb = GameView::default().render(&prompt, "", Viewport::new(100, 30));
    assert!(fb.contains_text("Use help for 0.005 AVAX? [y/n]"));

    let hint = screen_after(|q| {
        q.request_help().unwrap();
        q.confirm_help(true).unwrap();
    });
    let fb = GameView::default().render(&hint, "", Viewport::new(100, 30));
    assert!(fb.contains_text("HINT  > Known for bullish strategies"));
    assert!(!fb.contains_text("[y/n]"));
}

#[test]
fn term_view_survives_tiny_viewports() {
    let screen = screen_after(|_| {});
    for (w, h) in [(0, 0), (1, 1), (10, 3), (30, 8)] {
        let fb = GameView::default().render(&screen, "abc", Viewport::new(w, h));
        assert_eq!(fb.width(), w);
        assert_eq!(fb.height(), h);
    }
}

#[test]
fn term_view_marks_podium_by_medal_not_rank() {
    let screen = screen_after(|_| {});
    let fb = GameView::default().render(&screen, "", Viewport::new(100, 30));
    let (_, card_y) = GameView::default().card_origin();

    let rows: Vec<String> = (card_y + 1..card_y + 11).map(|y| fb.row_text(y)).collect();
    assert!(rows[0].contains("GOLD   CryptoKing"));
    assert!(rows[1].contains("SILVER NeoTrader"));
    assert!(rows[2].contains("BRONZE MatrixPro"));
    assert!(rows[3].contains("#4     CyberNinja"));
    for rank in 1..=3 {
        assert!(!fb.contains_text(&format!("#{rank} ")));
    }
}
