//! Settings panel: UI language and content selection.

use lh_core::{ContentSelection, Label, UiLanguage, strings};
use lh_engine::Event;
use macroquad::prelude::*;

use super::{Screen, Transition};
use crate::app::AppState;
use crate::input::escape_pressed;
use crate::theme::{HEADING_SIZE, ROW_H, TEXT_SIZE, palette};
use crate::widget::Rect2;
use crate::widget::button::{draw_button, left_click};
use crate::widget::toggle::{ToggleStyle, draw_toggle};

/// One clickable row in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Heading(Label),
    Language(UiLanguage),
    Flag(&'static str, Label),
}

const ROWS: &[Row] = &[
    Row::Heading(Label::SectionUi),
    Row::Language(UiLanguage::De),
    Row::Language(UiLanguage::En),
    Row::Heading(Label::SectionContent),
    Row::Heading(Label::ContentBooks),
    Row::Flag("bom", Label::BookOfMormon),
    Row::Flag("ot", Label::OldTestament),
    Row::Flag("nt", Label::NewTestament),
    Row::Heading(Label::ContentLanguages),
    Row::Flag("de", Label::German),
    Row::Flag("en", Label::English),
];

/// The settings panel, editing a draft until saved.
#[derive(Debug)]
pub struct SettingsScreen {
    ui_language: UiLanguage,
    content: ContentSelection,
}

impl SettingsScreen {
    /// Start a draft from the session's current settings.
    pub fn new(app: &AppState) -> Self {
        let settings = app.session.settings();
        Self {
            ui_language: settings.ui_language,
            content: settings.content,
        }
    }

    fn flag(&self, name: &str) -> bool {
        match name {
            "bom" => self.content.books.bom,
            "ot" => self.content.books.ot,
            "nt" => self.content.books.nt,
            "de" => self.content.languages.de,
            "en" => self.content.languages.en,
            _ => false,
        }
    }

    fn toggle(&mut self, name: &str) {
        let value = !self.flag(name);
        if let Err(e) = self.content.set_flag(name, value) {
            tracing::warn!(error = %e, "ignoring settings toggle");
        }
    }
}

/// Where a click landed on the settings overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hit {
    Row(Row),
    Save,
    Close,
    /// Outside the panel.
    Backdrop,
}

fn panel() -> Rect2 {
    panel_in(screen_width(), screen_height())
}

fn panel_in(screen_w: f32, screen_h: f32) -> Rect2 {
    let w = 340.0_f32.min(screen_w - 24.0);
    let h = 56.0 + ROWS.len() as f32 * ROW_H + ROW_H + 40.0;
    Rect2::centered(screen_w / 2.0, screen_h / 2.0, w, h)
}

fn rows(panel: &Rect2) -> impl Iterator<Item = (Row, Rect2)> {
    let (_, mut rest) = panel.inset(16.0).take_top(40.0);
    ROWS.iter().map(move |row| {
        let (area, remainder) = rest.take_top(ROW_H);
        rest = remainder;
        (*row, area)
    })
}

fn footer(panel: &Rect2) -> (Rect2, Rect2) {
    let inner = panel.inset(16.0);
    let row = Rect2::new(inner.x, inner.y + inner.h - ROW_H, inner.w, ROW_H);
    let (save, close) = row.split_h(0.5);
    (save.inset(4.0), close.inset(4.0))
}

fn hit_test(panel: &Rect2, mx: f32, my: f32) -> Option<Hit> {
    if !panel.contains(mx, my) {
        return Some(Hit::Backdrop);
    }
    if let Some((row, _)) = rows(panel).find(|(_, rect)| rect.contains(mx, my)) {
        return Some(Hit::Row(row));
    }
    let (save, close) = footer(panel);
    if save.contains(mx, my) {
        Some(Hit::Save)
    } else if close.contains(mx, my) {
        Some(Hit::Close)
    } else {
        None
    }
}

impl Screen for SettingsScreen {
    fn update(&mut self, app: &mut AppState) -> Transition {
        if escape_pressed() {
            app.dispatch(Event::CloseSettings);
        } else if left_click() {
            let (mx, my) = mouse_position();
            match hit_test(&panel(), mx, my) {
                Some(Hit::Row(Row::Language(lang))) => self.ui_language = lang,
                Some(Hit::Row(Row::Flag(name, _))) => self.toggle(name),
                Some(Hit::Save) => app.dispatch(Event::SaveSettings {
                    ui_language: self.ui_language,
                    content: self.content,
                }),
                Some(Hit::Close | Hit::Backdrop) => app.dispatch(Event::CloseSettings),
                Some(Hit::Row(Row::Heading(_))) | None => {}
            }
        }

        if app.view.settings_visible {
            Transition::None
        } else {
            Transition::Pop
        }
    }

    fn draw(&self, app: &AppState) {
        let lang = app.view.language;
        let mouse = mouse_position();
        draw_rectangle(0.0, 0.0, screen_width(), screen_height(), palette::VEIL);

        let area = panel();
        crate::widget::bordered_rect(&area, palette::PANEL, palette::LINE);
        draw_text(
            strings::label_text(lang, Label::SettingsTitle),
            area.x + 16.0,
            area.y + 16.0 + HEADING_SIZE * 0.8,
            HEADING_SIZE,
            palette::TEXT,
        );

        for (row, rect) in rows(&area) {
            match row {
                Row::Heading(label) => {
                    draw_text(
                        strings::label_text(lang, label),
                        rect.x,
                        rect.y + rect.h * 0.7,
                        TEXT_SIZE,
                        palette::MUTED,
                    );
                }
                Row::Language(option) => {
                    let label = match option {
                        UiLanguage::De => "Deutsch",
                        UiLanguage::En => "English",
                    };
                    draw_toggle(
                        label,
                        self.ui_language == option,
                        ToggleStyle::Radio,
                        &rect,
                        mouse,
                    );
                }
                Row::Flag(name, label) => {
                    draw_toggle(
                        strings::label_text(lang, label),
                        self.flag(name),
                        ToggleStyle::Check,
                        &rect,
                        mouse,
                    );
                }
            }
        }

        let (save, close) = footer(&area);
        draw_button(strings::label_text(lang, Label::Save), &save, mouse);
        draw_button(strings::label_text(lang, Label::Close), &close, mouse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect2 {
        panel_in(800.0, 900.0)
    }

    #[test]
    fn click_outside_panel_is_backdrop() {
        let area = area();
        assert_eq!(hit_test(&area, 2.0, 2.0), Some(Hit::Backdrop));
        assert_eq!(
            hit_test(&area, area.x + area.w + 1.0, area.y + area.h / 2.0),
            Some(Hit::Backdrop)
        );
    }

    #[test]
    fn rows_and_footer_resolve() {
        let area = area();
        for (row, rect) in rows(&area) {
            let hit = hit_test(&area, rect.x + 1.0, rect.y + rect.h / 2.0);
            assert_eq!(hit, Some(Hit::Row(row)));
        }
        let (save, close) = footer(&area);
        assert_eq!(hit_test(&area, save.x + 1.0, save.y + 1.0), Some(Hit::Save));
        assert_eq!(hit_test(&area, close.x + 1.0, close.y + 1.0), Some(Hit::Close));
    }

    #[test]
    fn panel_padding_is_inert() {
        let area = area();
        assert_eq!(hit_test(&area, area.x + 2.0, area.y + 2.0), None);
    }

    #[test]
    fn content_section_has_a_heading() {
        assert!(ROWS.contains(&Row::Heading(Label::SectionContent)));
    }
}
