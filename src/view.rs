//! HTML rendering for the single game screen.
//!
//! Everything here is a pure function of `Game`, so it runs (and is tested)
//! natively; `app` only pushes the strings into the DOM.

use std::fmt::Write as _;

use crate::catalog::{SpecimenKind, answer_label};
use crate::rng::RandomSource;
use crate::round::{Game, Outcome, Phase};

pub const STYLE_ID: &str = "zd-style";

pub const STYLESHEET: &str = r#"
body { margin: 0; }
.zd-screen { min-height: 100vh; margin: 0; color: #fff; font-family: system-ui, sans-serif;
  background: linear-gradient(135deg, #7f1d1d, #7c2d12, #713f12); transition: all 1s; }
.zd-screen.zd-dramatic { background: #dc2626; }
.zd-mono { font-family: 'Fira Code', ui-monospace, monospace; letter-spacing: 0.08em; }
.zd-title { font-size: 60px; font-weight: 800; letter-spacing: 0.1em; margin: 0 0 8px;
  background: linear-gradient(90deg, #f87171, #f97316, #facc15); -webkit-background-clip: text;
  background-clip: text; color: transparent; }
.zd-center { text-align: center; }
.zd-panel { max-width: 896px; margin: 0 auto; padding: 32px; border-radius: 24px;
  background: rgba(0,0,0,0.5); border: 1px solid #b91c1c; box-shadow: 0 25px 50px -12px rgba(127,29,29,0.5); }
.zd-frame { position: relative; width: 100%; height: 384px; border-radius: 16px; overflow: hidden;
  border: 4px solid; transition: all 0.5s; margin-bottom: 32px; }
.zd-image { width: 100%; height: 100%; background-size: cover; transition: transform 0.3s; }
.zd-scan { position: absolute; inset: 0; pointer-events: none;
  background: linear-gradient(180deg, transparent, rgba(248,113,113,0.1), transparent); }
.zd-badge { position: absolute; top: 16px; right: 16px; padding: 8px 24px; border-radius: 9999px;
  font-weight: 700; text-transform: uppercase; }
.zd-chip { position: absolute; top: 64px; right: 16px; padding: 4px 16px; border-radius: 9999px; font-size: 14px; }
.zd-readout { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; margin: -16px 0 32px;
  padding: 16px; border-radius: 8px; background: rgba(0,0,0,0.7); border: 1px solid #dc2626; font-size: 14px; }
.zd-pill { display: inline-block; padding: 8px 24px; border-radius: 9999px; font-size: 18px;
  color: #f87171; background: rgba(0,0,0,0.7); border: 1px solid #dc2626; }
.zd-options { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-bottom: 24px; }
.zd-btn { color: #fff; font-weight: 700; font-size: 20px; padding: 16px 24px; border-radius: 12px;
  border: 1px solid; cursor: pointer; }
.zd-btn:disabled { opacity: 0.5; cursor: not-allowed; }
.zd-pulse { animation: zd-pulse 1s ease-in-out infinite; }
.zd-spin { animation: zd-spin 1s linear infinite; }
.zd-bounce { animation: zd-bounce 1s infinite; }
@keyframes zd-pulse { 50% { opacity: 0.6; } }
@keyframes zd-spin { to { rotate: 360deg; } }
@keyframes zd-bounce { 50% { transform: translateY(-25%); } }
"#;

const GREEN: &str = "#4ade80";
const RED: &str = "#f87171";
const YELLOW: &str = "#facc15";

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_loading() -> String {
    r#"<div class="zd-screen" style="display:flex;align-items:center;justify-content:center;"><div style="font-size:24px;">INITIALIZING DOOM...</div></div>"#
        .to_string()
}

/// Frame border colour: red while guessing, then by outcome.
pub fn border_color(outcome: Option<Outcome>) -> &'static str {
    match outcome {
        None | Some(Outcome::Wrong) => RED,
        Some(Outcome::Correct) => GREEN,
        Some(Outcome::Skipped) => YELLOW,
    }
}

pub fn render<R: RandomSource>(game: &Game<R>) -> String {
    let round = game.round();
    let mut html = String::with_capacity(4096);
    let dramatic = if round.dramatic_effect { " zd-dramatic zd-pulse" } else { "" };
    let _ = write!(html, r#"<div class="zd-screen{dramatic}">"#);
    render_header(game, &mut html);
    html.push_str(r#"<div style="max-width:896px;margin:0 auto;padding:0 16px 32px;"><div class="zd-panel">"#);
    render_frame(game, &mut html);
    render_readout(game, &mut html);
    match round.phase {
        Phase::Guessing => render_controls(game, &mut html),
        Phase::Revealed => render_verdict(game, &mut html),
    }
    html.push_str("</div></div>");
    render_footer(&mut html);
    html.push_str("</div>");
    html
}

fn render_header<R: RandomSource>(game: &Game<R>, html: &mut String) {
    let round = game.round();
    let subtitle = match round.phase {
        Phase::Guessing => "MICROSCOPIC ANALYSIS IN PROGRESS...",
        Phase::Revealed => "SPECIMEN IDENTIFIED",
    };
    let _ = write!(
        html,
        r#"<div class="zd-center" style="padding:32px 0;"><h1 class="zd-title">ZOOM &amp; DOOM</h1><p class="zd-mono" style="font-size:20px;color:#d1d5db;margin:0;">{subtitle}</p><div class="zd-mono" style="color:{RED};margin-top:8px;">☠ DOOM LEVEL: {}</div>"#,
        round.doom_level
    );
    if let Some(banner) = game.enhance_banner() {
        let _ = write!(
            html,
            r#"<div class="zd-mono zd-bounce" style="margin-top:16px;color:{GREEN};font-size:18px;">{}</div>"#,
            escape_html(&banner)
        );
    }
    html.push_str("</div>");
}

fn render_frame<R: RandomSource>(game: &Game<R>, html: &mut String) {
    let round = game.round();
    let item = round.item;
    let border = border_color(game.outcome());
    let pulse = if round.enhancing { " zd-pulse" } else { "" };
    let _ = write!(
        html,
        r#"<div class="zd-frame{pulse}" style="border-color:{border};box-shadow:0 10px 15px -3px {border}33;">"#
    );
    let url = escape_html(item.image_url);
    match round.phase {
        Phase::Guessing => {
            let spin = if round.enhancing { " zd-spin" } else { "" };
            let _ = write!(
                html,
                r#"<div class="zd-image{spin}" style="background-image:url('{url}');background-position:{}% {}%;transform:scale({});filter:contrast({}%) saturate({}%);"></div>"#,
                item.crop_x,
                item.crop_y,
                game.zoom_scale(),
                game.contrast_pct(),
                game.saturation_pct()
            );
            html.push_str(r#"<div class="zd-scan zd-pulse"></div>"#);
        }
        Phase::Revealed => {
            let badge_bg = match game.outcome() {
                Some(Outcome::Correct) => "linear-gradient(90deg,#22c55e,#059669)",
                Some(Outcome::Wrong) => "linear-gradient(90deg,#ef4444,#dc2626)",
                _ => "linear-gradient(90deg,#eab308,#ea580c)",
            };
            let _ = write!(
                html,
                r#"<div class="zd-image" style="background-image:url('{url}');background-position:center;"></div><div class="zd-badge" style="background:{badge_bg};border:1px solid {border};">👁 {}</div>"#,
                escape_html(item.name)
            );
            if round.guess.is_some() {
                let (bg, text) = if round.is_correct == Some(true) {
                    ("#16a34a", "✓ CORRECT!")
                } else {
                    ("#dc2626", "✗ WRONG!")
                };
                let _ = write!(html, r#"<div class="zd-chip zd-mono" style="background:{bg};">{text}</div>"#);
            }
        }
    }
    html.push_str("</div>");
}

/// Status strip under the image, shown in both phases.
fn render_readout<R: RandomSource>(game: &Game<R>, html: &mut String) {
    let round = game.round();
    let status = match round.phase {
        Phase::Guessing => "ANALYZING",
        Phase::Revealed => "DOOMED",
    };
    let _ = write!(
        html,
        r#"<div class="zd-mono zd-readout"><div style="color:{RED};">STATUS: {status}</div><div style="color:#fb923c;">ZOOM: {}%</div><div style="color:{YELLOW};">ENHANCE: LEVEL {}</div><div style="color:{RED};">CONFUSION: MAXIMUM</div></div>"#,
        game.zoom_percent(),
        round.enhance_level
    );
}

fn category_label(kind: SpecimenKind) -> &'static str {
    match kind {
        SpecimenKind::Crust => "CRUST SPECIMEN",
        SpecimenKind::Fruit => "FRUIT INTERIOR",
    }
}

fn render_controls<R: RandomSource>(game: &Game<R>, html: &mut String) {
    let round = game.round();
    let _ = write!(
        html,
        r#"<div class="zd-center" style="margin-bottom:24px;"><span class="zd-mono zd-pill">CATEGORY: {}</span></div><div class="zd-options">"#,
        category_label(round.item.kind)
    );
    for opt in game.options() {
        let (from, to, edge) = opt.theme;
        let _ = write!(
            html,
            r#"<button class="zd-btn" data-action="guess" data-answer="{}" style="background:linear-gradient(90deg,{from},{to});border-color:{edge};">{}</button>"#,
            escape_html(opt.id),
            escape_html(opt.label)
        );
    }
    html.push_str("</div>");
    let (disabled, label) = if round.enhancing {
        (" disabled", "⚡ DOOMING...")
    } else {
        ("", "⚡ ENHANCE DOOM")
    };
    let _ = write!(
        html,
        r#"<div style="display:flex;gap:16px;justify-content:center;"><button class="zd-btn" data-action="enhance"{disabled} style="background:linear-gradient(90deg,#15803d,#16a34a);border-color:{GREEN};">{label}</button><button class="zd-btn" data-action="skip" style="background:linear-gradient(90deg,#374151,#4b5563);border-color:#9ca3af;">🔊 SURRENDER</button></div>"#
    );
}

fn render_verdict<R: RandomSource>(game: &Game<R>, html: &mut String) {
    let round = game.round();
    let item = round.item;
    let _ = write!(
        html,
        r#"<div class="zd-center"><div style="font-size:36px;font-weight:800;color:{GREEN};">IT WAS {}!</div>"#,
        escape_html(answer_label(item.correct_answer))
    );
    if let Some(guess) = &round.guess {
        let correct = round.is_correct == Some(true);
        let (color, line) = if correct {
            (GREEN, "🎉 CORRECT! You survived the doom!")
        } else {
            (RED, "💀 WRONG! The doom claims another victim!")
        };
        let _ = write!(
            html,
            r#"<div style="font-size:24px;font-weight:700;color:{color};margin-top:24px;">You guessed: {}<div style="font-size:18px;margin-top:8px;">{line}</div></div>"#,
            escape_html(answer_label(guess))
        );
    }
    let _ = write!(
        html,
        r#"<p class="zd-mono" style="font-size:20px;color:#d1d5db;">{}</p><div class="zd-mono zd-pulse" style="font-size:18px;color:{RED};">DOOM LEVEL: {} • CONFUSION: ACHIEVED</div><button class="zd-btn" data-action="next" style="margin-top:24px;background:linear-gradient(90deg,#7e22ce,#9333ea);border-color:#c084fc;">↻ NEXT DOOM</button></div>"#,
        item.kind.confirmation(),
        round.doom_level
    );
}

fn render_footer(html: &mut String) {
    html.push_str(
        r#"<div class="zd-center zd-mono" style="margin-top:32px;padding-bottom:32px;color:#9ca3af;font-size:14px;"><p>⚠️ Warning: This application will doom your productivity ⚠️</p><p>Enhance button effectiveness: 0% • Confusion level: MAXIMUM • Doom: INEVITABLE</p><p style="color:#f87171;">Can you tell bread crust from cucumber seeds? Probably not.</p></div>"#,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    // Fixed(0.0) always deals crust1 (bread-crust, scale 6) with doom 1.
    fn game() -> Game<Fixed> {
        Game::new(GameConfig::default(), Fixed(0.0))
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn guessing_screen_shows_crop_and_options() {
        let html = render(&game());
        assert!(html.contains("MICROSCOPIC ANALYSIS IN PROGRESS..."));
        assert!(html.contains("DOOM LEVEL: 1"));
        assert!(html.contains("background-position:65% 40%"));
        assert!(html.contains("transform:scale(6)"));
        assert!(html.contains("filter:contrast(120%) saturate(100%)"));
        assert_eq!(html.matches(r#"data-action="guess""#).count(), 3);
        assert!(html.contains(r#"data-answer="pizza-crust""#));
        assert!(!html.contains("data-answer=\"kiwi\""));
        assert!(!html.contains("NEXT DOOM"));
    }

    #[test]
    fn enhancing_disables_button_and_shows_banner() {
        let mut g = game();
        g.enhance().unwrap();
        let html = render(&g);
        assert!(html.contains("ENHANCING DOOM... LEVEL 2 .."));
        assert!(html.contains(r#"data-action="enhance" disabled"#));
        assert!(html.contains("zd-spin"));
        assert!(html.contains("contrast(140%) saturate(140%)"));
    }

    #[test]
    fn wrong_guess_verdict() {
        let mut g = game();
        g.submit_guess("rusk").unwrap();
        let html = render(&g);
        assert!(html.contains("SPECIMEN IDENTIFIED"));
        assert!(html.contains("IT WAS 🍞 BREAD CRUST!"));
        assert!(html.contains("You guessed: 🥖 RUSK"));
        assert!(html.contains("✗ WRONG!"));
        assert!(html.contains("CARBOHYDRATE SPECIMEN CONFIRMED"));
        assert!(html.contains("zd-dramatic"));
        assert!(html.contains(&format!("border-color:{RED}")));
        assert!(!html.contains(r#"data-action="guess""#));
    }

    #[test]
    fn skip_verdict_has_no_guess_line() {
        let mut g = game();
        let reveal = g.skip().unwrap();
        g.end_dramatic_effect(reveal.serial);
        let html = render(&g);
        assert!(!html.contains("You guessed"));
        assert!(!html.contains("zd-dramatic"));
        assert!(html.contains(&format!("border-color:{YELLOW}")));
        assert!(html.contains("background-position:center"));
    }

    #[test]
    fn unknown_guess_is_escaped() {
        let mut g = game();
        g.submit_guess("<b>").unwrap();
        let html = render(&g);
        assert!(html.contains("You guessed: &lt;b&gt;"));
    }

    #[test]
    fn readout_and_category_while_guessing() {
        let html = render(&game());
        assert!(html.contains("STATUS: ANALYZING"));
        assert!(html.contains("ZOOM: 600%"));
        assert!(html.contains("ENHANCE: LEVEL 1"));
        assert!(html.contains("CONFUSION: MAXIMUM"));
        assert!(html.contains("CATEGORY: CRUST SPECIMEN"));
        assert!(html.contains("⚡ ENHANCE DOOM"));
        assert!(html.contains("SURRENDER"));
    }

    #[test]
    fn readout_after_reveal_drops_category() {
        let mut g = game();
        g.enhance().unwrap();
        assert!(render(&g).contains("⚡ DOOMING..."));
        g.skip().unwrap();
        let html = render(&g);
        assert!(html.contains("STATUS: DOOMED"));
        assert!(html.contains("ZOOM: 600%"));
        assert!(html.contains("ENHANCE: LEVEL 2"));
        assert!(!html.contains("CATEGORY:"));
        assert_eq!(category_label(SpecimenKind::Fruit), "FRUIT INTERIOR");
    }

    #[test]
    fn loading_placeholder() {
        assert!(render_loading().contains("INITIALIZING DOOM..."));
        assert_eq!(border_color(Some(Outcome::Correct)), GREEN);
    }
}
