//! Browser glue: mounts the game into the page, routes clicks into the
//! reducer and turns reducer tickets into one-shot timers.

use std::cell::RefCell;

use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, window};

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::rng::BrowserRng;
use crate::round::{Enhancement, Game, Reveal};
use crate::view;

/// A decoded click on one of the `data-action` buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Guess(String),
    Enhance,
    Skip,
    Next,
}

impl Action {
    pub(crate) fn parse(action: &str, answer: Option<&str>) -> Option<Action> {
        match action {
            "guess" => answer
                .filter(|a| !a.is_empty())
                .map(|a| Action::Guess(a.to_string())),
            "enhance" => Some(Action::Enhance),
            "skip" => Some(Action::Skip),
            "next" => Some(Action::Next),
            _ => None,
        }
    }
}

struct App {
    game: Game<BrowserRng>,
    root: Element,
    reveal_timer: Option<Timeout>,
    enhance_timer: Option<Timeout>,
    _click: EventListener,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

impl App {
    fn render(&self) {
        self.root.set_inner_html(&view::render(&self.game));
    }

    fn log_round(&self) {
        let round = self.game.round();
        console::log!(
            "round started",
            round.item.id,
            round.item.kind.as_str(),
            "doom",
            round.doom_level
        );
    }

    fn schedule_reveal(&mut self, reveal: Reveal) {
        self.reveal_timer = Some(Timeout::new(reveal.delay_ms, move || {
            report(with_app(|app| {
                if app.game.end_dramatic_effect(reveal.serial) {
                    app.render();
                }
                Ok(())
            }));
        }));
    }

    fn schedule_enhancement(&mut self, ticket: Enhancement) {
        self.enhance_timer = Some(Timeout::new(ticket.delay_ms, move || {
            report(with_app(|app| {
                if app.game.end_enhancement(ticket.serial) {
                    console::log!("enhancement finished", app.game.round().enhance_level);
                    app.render();
                }
                Ok(())
            }));
        }));
    }
}

fn with_app<T>(f: impl FnOnce(&mut App) -> Result<T>) -> Result<T> {
    APP.with(|cell| {
        let mut slot = cell.borrow_mut();
        let app = slot.as_mut().ok_or(GameError::NotStarted)?;
        f(app)
    })
}

fn report(result: Result<()>) {
    if let Err(err) = result {
        console::warn!("zoom-doom", err.to_string());
    }
}

/// Mounts (or remounts) the game under `config.root_id`.
pub(crate) fn mount(config: GameConfig) -> Result<()> {
    config.validate()?;
    let win = window().ok_or(GameError::MissingWindow)?;
    let doc = win.document().ok_or(GameError::MissingDocument)?;
    install_stylesheet(&doc)?;
    let root = find_or_create_root(&doc, &config.root_id)?;
    root.set_inner_html(&view::render_loading());

    // Dropping a previous App detaches its listener and cancels its timers.
    APP.with(|cell| cell.borrow_mut().take());

    let click = EventListener::new(&root, "click", on_click);
    let app = App {
        game: Game::new(config, BrowserRng::new()),
        root,
        reveal_timer: None,
        enhance_timer: None,
        _click: click,
    };
    app.log_round();
    app.render();
    APP.with(|cell| cell.replace(Some(app)));
    Ok(())
}

fn install_stylesheet(doc: &Document) -> Result<()> {
    if doc.get_element_by_id(view::STYLE_ID).is_some() {
        return Ok(());
    }
    let style = doc.create_element("style")?;
    style.set_id(view::STYLE_ID);
    style.set_text_content(Some(view::STYLESHEET));
    match doc.head() {
        Some(head) => head.append_child(&style)?,
        None => doc
            .body()
            .ok_or_else(|| GameError::MissingElement("body".into()))?
            .append_child(&style)?,
    };
    Ok(())
}

fn find_or_create_root(doc: &Document, id: &str) -> Result<Element> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let el = doc.create_element("div")?;
    el.set_id(id);
    doc.body()
        .ok_or_else(|| GameError::MissingElement("body".into()))?
        .append_child(&el)?;
    Ok(el)
}

fn on_click(event: &Event) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let Ok(Some(button)) = target.closest("[data-action]") else {
        return;
    };
    let name = button.get_attribute("data-action").unwrap_or_default();
    let answer = button.get_attribute("data-answer");
    match Action::parse(&name, answer.as_deref()) {
        Some(action) => report(dispatch(action)),
        None => console::warn!("unknown action", name),
    }
}

fn dispatch(action: Action) -> Result<()> {
    with_app(|app| {
        match action {
            Action::Guess(answer) => {
                let reveal = app.game.submit_guess(&answer)?;
                let verdict = if app.game.round().is_correct == Some(true) {
                    "correct"
                } else {
                    "wrong"
                };
                console::log!("guess", answer, verdict);
                app.schedule_reveal(reveal);
            }
            Action::Skip => {
                let reveal = app.game.skip()?;
                console::log!("skipped", app.game.round().item.id);
                app.schedule_reveal(reveal);
            }
            Action::Enhance => {
                if let Some(ticket) = app.game.enhance()? {
                    console::log!("enhancing", app.game.round().enhance_level, ticket.delay_ms);
                    app.schedule_enhancement(ticket);
                }
            }
            Action::Next => {
                app.reveal_timer = None;
                app.enhance_timer = None;
                app.game.start_round();
                app.log_round();
            }
        }
        app.render();
        Ok(())
    })
}

pub(crate) fn phase() -> Option<&'static str> {
    APP.with(|cell| cell.borrow().as_ref().map(|app| app.game.round().phase.as_str()))
}

pub(crate) fn doom_level() -> Option<u32> {
    APP.with(|cell| cell.borrow().as_ref().map(|app| app.game.round().doom_level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_button_actions() {
        assert_eq!(
            Action::parse("guess", Some("kiwi")),
            Some(Action::Guess("kiwi".into()))
        );
        assert_eq!(Action::parse("enhance", None), Some(Action::Enhance));
        assert_eq!(Action::parse("skip", Some("ignored")), Some(Action::Skip));
        assert_eq!(Action::parse("next", None), Some(Action::Next));
    }

    #[test]
    fn rejects_incomplete_or_unknown_actions() {
        assert_eq!(Action::parse("guess", None), None);
        assert_eq!(Action::parse("guess", Some("")), None);
        assert_eq!(Action::parse("explode", None), None);
    }

    #[test]
    fn accessors_empty_before_mount() {
        assert_eq!(phase(), None);
        assert_eq!(doom_level(), None);
    }
}
